use crate::guidance::{
    common::{matrix::Matrix, state_vector::StateVector},
    guidance_error::GuidanceError,
};
use itertools::Itertools;

/// Number of relative attitude components produced by the feedback law
pub const REL_ATT_DIM: usize = 3;
/// Number of Hill-frame relative state components (position then velocity)
pub const HILL_STATE_DIM: usize = 6;

pub type HillStateVector = StateVector<f64, HILL_STATE_DIM>;
pub type RelAttVector = StateVector<f64, REL_ATT_DIM>;

/// Linear feedback gain mapping a Hill relative state onto a relative MRP attitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainMatrix(Matrix<f64, REL_ATT_DIM, HILL_STATE_DIM>);

impl GainMatrix {
    pub fn new(rows: [[f64; HILL_STATE_DIM]; REL_ATT_DIM]) -> Self { Self(Matrix::new(rows)) }

    pub fn zero() -> Self { Self(Matrix::zero()) }

    /// Builds a gain matrix from a nested, variable length row representation.
    ///
    /// # Returns
    /// - `Ok(GainMatrix)` if the rows describe exactly a 3x6 matrix.
    /// - `Err(GuidanceError::GainShape)` otherwise; for ragged input `cols` reports the
    ///   first row length that deviates from the expected width.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, GuidanceError> {
        Matrix::from_rows(rows).map(Self).ok_or_else(|| {
            let cols = match rows.iter().map(Vec::len).all_equal_value() {
                Ok(cols) => cols,
                Err(Some((first, other))) => {
                    if first == HILL_STATE_DIM { other } else { first }
                }
                Err(None) => 0,
            };
            GuidanceError::GainShape { rows: rows.len(), cols }
        })
    }

    pub fn matrix(&self) -> &Matrix<f64, REL_ATT_DIM, HILL_STATE_DIM> { &self.0 }

    pub fn validate(&self) -> Result<(), GuidanceError> {
        if self.0.is_finite() { Ok(()) } else { Err(GuidanceError::GainNotFinite) }
    }
}

impl Default for GainMatrix {
    fn default() -> Self { Self::zero() }
}

impl TryFrom<Vec<Vec<f64>>> for GainMatrix {
    type Error = GuidanceError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> { Self::from_rows(&rows) }
}

/// Evaluates the relative attitude feedback law `σ_rel = K x_hill`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GainController {
    gain: GainMatrix,
}

impl GainController {
    pub fn new(gain: GainMatrix) -> Self { Self { gain } }

    pub fn gain(&self) -> &GainMatrix { &self.gain }

    pub fn relative_attitude(&self, hill_state: &HillStateVector) -> RelAttVector {
        StateVector::from_matrix(*self.gain.matrix() * hill_state.to_matrix())
    }
}
