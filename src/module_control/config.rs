use crate::guidance::{AttitudeBounds, GainMatrix, GuidanceError};
use crate::logger::LogLevel;

/// Configuration of a [`super::HillToAttRef`] module, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HillToAttRefConfig {
    pub gain_matrix: GainMatrix,
    pub bounds: AttitudeBounds,
    pub log_level: LogLevel,
}

impl HillToAttRefConfig {
    pub fn new(gain_matrix: GainMatrix) -> Self {
        Self {
            gain_matrix,
            bounds: AttitudeBounds::disabled(),
            log_level: LogLevel::Info,
        }
    }

    pub fn from_gain_rows(rows: &[Vec<f64>]) -> Result<Self, GuidanceError> {
        Ok(Self::new(GainMatrix::from_rows(rows)?))
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: AttitudeBounds) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn validate(&self) -> Result<(), GuidanceError> {
        self.gain_matrix.validate()?;
        self.bounds.validate()
    }
}

impl Default for HillToAttRefConfig {
    fn default() -> Self { Self::new(GainMatrix::zero()) }
}
