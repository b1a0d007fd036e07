use itertools::Itertools;
use num::{One, Zero};
use std::ops::{Add, Mul, Sub};

/// Fixed-shape, row-major `M x N` matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix<T, const M: usize, const N: usize> {
    pub(crate) data: [[T; N]; M],
}

impl<T, const M: usize, const N: usize> Matrix<T, M, N>
where T: Copy
{
    pub fn new(data: [[T; N]; M]) -> Self { Matrix { data } }

    pub fn get(&self, row: usize, col: usize) -> &T { &self.data[row][col] }

    pub fn set(&mut self, row: usize, col: usize, value: T) { self.data[row][col] = value; }
}

impl<T, const M: usize, const N: usize> Matrix<T, M, N>
where T: Copy + Zero
{
    pub fn zero() -> Self {
        Self {
            data: [[T::zero(); N]; M],
        }
    }

    /// Builds a matrix from a nested row representation.
    ///
    /// # Returns
    /// - `Some(Matrix)` if there are exactly `M` rows of exactly `N` columns each.
    /// - `None` on any shape mismatch, including ragged rows.
    pub fn from_rows(rows: &[Vec<T>]) -> Option<Self> {
        if rows.len() != M || rows.iter().any(|row| row.len() != N) {
            return None;
        }
        let mut result = Self::zero();
        for (dst, src) in result.data.iter_mut().zip_eq(rows) {
            dst.copy_from_slice(src);
        }
        Some(result)
    }
}

impl<T, const N: usize> Matrix<T, N, N>
where T: Copy + Zero + One
{
    pub fn identity() -> Self {
        let mut result = Self::zero();

        for i in 0..N {
            result.data[i][i] = T::one();
        }

        result
    }
}

impl<T, const M: usize, const N: usize> Add for Matrix<T, M, N>
where T: Copy + Add<Output = T>
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut result = self;

        for i in 0..M {
            for j in 0..N {
                result.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        result
    }
}

impl<T, const M: usize, const N: usize> Sub for Matrix<T, M, N>
where T: Copy + Sub<Output = T>
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut result = self;

        for i in 0..M {
            for j in 0..N {
                result.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        result
    }
}

impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where T: Copy + Zero + Mul<Output = T>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        let mut result = Matrix::<T, M, P>::zero();

        for i in 0..M {
            for j in 0..P {
                let mut sum = T::zero();
                for k in 0..N {
                    sum = sum + self.data[i][k] * rhs.data[k][j];
                }
                result.data[i][j] = sum;
            }
        }

        result
    }
}

impl<const M: usize, const N: usize> Mul<f64> for Matrix<f64, M, N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Matrix::new(self.data.map(|row| row.map(|val| val * rhs)))
    }
}

impl<T, const M: usize, const N: usize> Matrix<T, M, N>
where T: Copy + Zero
{
    pub fn transpose(&self) -> Matrix<T, N, M> {
        let mut result = Matrix::<T, N, M>::zero();

        for i in 0..M {
            for j in 0..N {
                result.data[j][i] = self.data[i][j];
            }
        }

        result
    }
}

impl<const M: usize, const N: usize> Matrix<f64, M, N> {
    pub fn is_finite(&self) -> bool { self.data.iter().flatten().all(|val| val.is_finite()) }

    /// Largest absolute elementwise difference between `self` and `other`.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.data
            .iter()
            .flatten()
            .zip_eq(other.data.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}
