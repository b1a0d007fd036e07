//! Attitude guidance laws turning a Hill-frame relative state into an inertial attitude reference.
//!
//! The pipeline runs strictly one way per update:
//! relative state → [`GainController`] → [`AttitudeBounds`] → [`compose_reference`].
pub(crate) mod attitude_bounder;
pub(crate) mod common;
pub(crate) mod frame_composer;
pub(crate) mod gain_controller;
pub(crate) mod guidance_error;

pub use attitude_bounder::{AttitudeBounds, BoundMode};
pub use common::{matrix::Matrix, mrp::Mrp, state_vector::StateVector};
pub use frame_composer::{BaseAttitudeSource, compose_reference, relative_to_inertial_mrp};
pub use gain_controller::{
    GainController, GainMatrix, HILL_STATE_DIM, HillStateVector, REL_ATT_DIM, RelAttVector,
};
pub use guidance_error::GuidanceError;
