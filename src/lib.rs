//! Attitude reference guidance for differential-drag formation control.
//!
//! A deputy spacecraft's relative orbital state in the chief's Hill frame is mapped through a
//! linear feedback law onto a relative attitude, bounded, and composed with a base attitude into
//! an inertial attitude reference for a downstream attitude tracking controller.
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
pub mod guidance;
pub mod logger;
pub mod messaging;
pub mod module_control;

pub use guidance::{AttitudeBounds, GainMatrix, GuidanceError, Mrp};
pub use messaging::{AttRefPayload, HillRelStatePayload, InPort, Message, NavAttPayload};
pub use module_control::{HillToAttRef, HillToAttRefConfig, SysModule, TaskScheduler};
