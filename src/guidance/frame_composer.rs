use crate::guidance::{
    attitude_bounder::AttitudeBounds,
    common::mrp::Mrp,
    gain_controller::RelAttVector,
    guidance_error::GuidanceError,
};
use crate::messaging::AttRefPayload;
use strum_macros::Display;

/// Input channel supplying the base attitude `σ_XN` the relative attitude is composed onto.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum BaseAttitudeSource {
    #[strum(to_string = "attRefInMsg")]
    AttRefChain,
    #[strum(to_string = "attStateInMsg")]
    NavAttitude,
}

impl BaseAttitudeSource {
    /// A linked upstream attitude reference takes precedence over the navigation attitude.
    pub fn select(att_ref_linked: bool, att_state_linked: bool) -> Result<Self, GuidanceError> {
        match (att_ref_linked, att_state_linked) {
            (true, _) => Ok(BaseAttitudeSource::AttRefChain),
            (false, true) => Ok(BaseAttitudeSource::NavAttitude),
            (false, false) => Err(GuidanceError::NoBaseAttitude),
        }
    }
}

/// Composes an already bounded relative attitude onto the base attitude.
///
/// The result satisfies `[RN] = [RX(σ_rel)][XN(σ_XN)]` and always lies in the inner MRP set.
/// Rate and acceleration of the reference are not derived and stay zero.
pub fn compose_reference(bounded_rel_att: RelAttVector, sigma_xn: Mrp) -> AttRefPayload {
    let sigma_rx = Mrp::from(bounded_rel_att.into_array());
    AttRefPayload {
        sigma_rn: sigma_xn.compose(&sigma_rx).into_array(),
        omega_rn_n: [0.0; 3],
        domega_rn_n: [0.0; 3],
    }
}

/// Bounds a raw relative attitude and composes it onto `sigma_xn`.
pub fn relative_to_inertial_mrp(
    rel_att: RelAttVector,
    sigma_xn: Mrp,
    bounds: &AttitudeBounds,
) -> AttRefPayload {
    compose_reference(bounds.apply(rel_att), sigma_xn)
}
