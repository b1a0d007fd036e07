use crate::guidance::{gain_controller::RelAttVector, guidance_error::GuidanceError};
use strum_macros::Display;

/// How a pair of [`AttitudeBounds`] is applied to each relative attitude component.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum BoundMode {
    /// `min` and `max` are both zero, components pass through untouched
    Disabled,
    /// `min < 0`, components are clamped into `[max(min, -max), max]`
    Signed,
    /// `min >= 0`, the bounds act on component magnitudes while keeping the sign
    Magnitude,
}

/// Elementwise limits on the commanded relative MRP attitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttitudeBounds {
    min: f64,
    max: f64,
}

impl AttitudeBounds {
    pub const fn new(min: f64, max: f64) -> Self { Self { min, max } }

    pub const fn disabled() -> Self { Self { min: 0.0, max: 0.0 } }

    /// Symmetric magnitude ceiling `|σ_i| <= max` without a floor.
    pub const fn symmetric(max: f64) -> Self { Self { min: 0.0, max } }

    pub fn min(&self) -> f64 { self.min }

    pub fn max(&self) -> f64 { self.max }

    #[allow(clippy::float_cmp)]
    pub fn mode(&self) -> BoundMode {
        if self.min == 0.0 && self.max == 0.0 {
            BoundMode::Disabled
        } else if self.min < 0.0 {
            BoundMode::Signed
        } else {
            BoundMode::Magnitude
        }
    }

    pub fn is_enabled(&self) -> bool { self.mode() != BoundMode::Disabled }

    #[allow(clippy::float_cmp)]
    pub fn validate(&self) -> Result<(), GuidanceError> {
        let inverted = self.min != 0.0 && self.max != 0.0 && self.min > self.max;
        if inverted || self.min.is_nan() || self.max.is_nan() {
            Err(GuidanceError::BoundsInverted { min: self.min, max: self.max })
        } else if self.max < 0.0 {
            Err(GuidanceError::NegativeMaxBound { max: self.max })
        } else {
            Ok(())
        }
    }

    /// Applies the bounds to every component of a relative attitude.
    pub fn apply(&self, rel_att: RelAttVector) -> RelAttVector {
        match self.mode() {
            BoundMode::Disabled => rel_att,
            BoundMode::Signed => rel_att.map(|val| self.clamp_signed(val)),
            BoundMode::Magnitude => rel_att.map(|val| self.clamp_magnitude(val)),
        }
    }

    fn clamp_signed(&self, val: f64) -> f64 {
        // the magnitude ceiling also holds below zero; max == 0 still caps from above
        let lower = if self.max > 0.0 { self.min.max(-self.max) } else { self.min };
        val.max(lower).min(self.max)
    }

    fn clamp_magnitude(&self, val: f64) -> f64 {
        let mag = val.abs();
        if self.max > 0.0 && mag > self.max {
            self.max.copysign(val)
        } else if self.min > 0.0 && mag > 0.0 && mag < self.min {
            self.min.copysign(val)
        } else {
            val
        }
    }
}
