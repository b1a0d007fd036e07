use crate::guidance::HillStateVector;

/// Deputy position and velocity relative to the chief, expressed in the chief's Hill frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HillRelStatePayload {
    /// [m] relative position of the deputy w.r.t. the chief
    pub r_dc_h: [f64; 3],
    /// [m/s] relative velocity of the deputy w.r.t. the chief
    pub v_dc_h: [f64; 3],
}

impl HillRelStatePayload {
    pub fn to_state_vector(&self) -> HillStateVector {
        let [x, y, z] = self.r_dc_h;
        let [vx, vy, vz] = self.v_dc_h;
        HillStateVector::new([x, y, z, vx, vy, vz])
    }
}

/// Navigation attitude estimate.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NavAttPayload {
    /// [s] time the estimate is valid at
    pub time_tag: f64,
    /// [-] body attitude relative to inertial, as MRP
    pub sigma_bn: [f64; 3],
    /// [rad/s] body angular rate in body frame components
    pub omega_bn_b: [f64; 3],
    /// [-] sun heading in body frame components
    pub veh_sun_pnt_bdy: [f64; 3],
}

/// Attitude reference to be tracked by a downstream attitude controller.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AttRefPayload {
    /// [-] reference attitude relative to inertial, as MRP
    pub sigma_rn: [f64; 3],
    /// [rad/s] reference angular rate in inertial frame components
    pub omega_rn_n: [f64; 3],
    /// [rad/s^2] reference angular acceleration in inertial frame components
    pub domega_rn_n: [f64; 3],
}
