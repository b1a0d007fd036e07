use crate::guidance::common::matrix::Matrix;
use std::fmt::{Display, Formatter};

/// Modified Rodrigues Parameter set describing a rotation.
///
/// MRPs are singular at a full 360° rotation, where the norm tends to infinity.
/// Every set with a squared norm above one is mapped to its shadow set, which
/// describes the same physical rotation with a squared norm of `1 / |σ|²`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Mrp([f64; 3]);

impl Mrp {
    pub const ZERO: Mrp = Mrp([0.0; 3]);
    /// Below this magnitude the composition denominator is treated as near singular
    const COMPOSE_DENOM_TOL: f64 = 0.1;

    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self([x, y, z]) }

    pub fn as_array(&self) -> &[f64; 3] { &self.0 }

    pub fn into_array(self) -> [f64; 3] { self.0 }

    pub fn norm_squared(&self) -> f64 { dot(&self.0, &self.0) }

    /// Returns the shadow set `-σ / |σ|²`. The zero set has no shadow and is returned unchanged.
    pub fn shadow(&self) -> Self {
        let n_sq = self.norm_squared();
        if n_sq == 0.0 {
            return *self;
        }
        Self(scale(&self.0, -1.0 / n_sq))
    }

    /// Maps the set into the inner set (`|σ|² <= 1`) by switching to the shadow set if needed.
    pub fn to_inner_set(self) -> Self { if self.norm_squared() > 1.0 { self.shadow() } else { self } }

    /// Composes two successive rotations.
    ///
    /// `self` is the first rotation `[BN]`, `other` the second rotation `[FB]` relative to it.
    /// The result is the set of the total rotation `[FN] = [FB][BN]`, always in the inner set.
    pub fn compose(&self, other: &Mrp) -> Mrp {
        let mut s1 = self.0;
        let s2 = other.0;
        let mut denom = compose_denominator(&s1, &s2);
        if denom.abs() < Self::COMPOSE_DENOM_TOL {
            // shadow the first rotation to move away from the singular denominator
            s1 = Mrp(s1).shadow().0;
            denom = compose_denominator(&s1, &s2);
        }

        let s1_sq = dot(&s1, &s1);
        let s2_sq = dot(&s2, &s2);
        let cross_term = scale(&cross(&s1, &s2), 2.0);
        let mut sum = [0.0; 3];
        for i in 0..3 {
            sum[i] = (cross_term[i] + (1.0 - s1_sq) * s2[i] + (1.0 - s2_sq) * s1[i]) / denom;
        }
        Mrp(sum).to_inner_set()
    }

    /// Direction cosine matrix `C = I + (8[σ̃]² - 4(1 - |σ|²)[σ̃]) / (1 + |σ|²)²`.
    pub fn to_dcm(&self) -> Matrix<f64, 3, 3> {
        let n_sq = self.norm_squared();
        let tilde = tilde(&self.0);
        let tilde_sq = tilde * tilde;
        let denom = (1.0 + n_sq) * (1.0 + n_sq);
        Matrix::identity() + (tilde_sq * 8.0 - tilde * (4.0 * (1.0 - n_sq))) * (1.0 / denom)
    }
}

impl From<[f64; 3]> for Mrp {
    fn from(value: [f64; 3]) -> Self { Self(value) }
}

impl From<Mrp> for [f64; 3] {
    fn from(value: Mrp) -> Self { value.0 }
}

impl Display for Mrp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.6}, {:.6}, {:.6}]", self.0[0], self.0[1], self.0[2])
    }
}

fn compose_denominator(s1: &[f64; 3], s2: &[f64; 3]) -> f64 {
    1.0 + dot(s1, s1) * dot(s2, s2) - 2.0 * dot(s1, s2)
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 { a[0] * b[0] + a[1] * b[1] + a[2] * b[2] }

fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn scale(a: &[f64; 3], k: f64) -> [f64; 3] { a.map(|val| val * k) }

/// Skew-symmetric cross product matrix.
fn tilde(v: &[f64; 3]) -> Matrix<f64, 3, 3> {
    Matrix::new([[0.0, -v[2], v[1]], [v[2], 0.0, -v[0]], [-v[1], v[0], 0.0]])
}
