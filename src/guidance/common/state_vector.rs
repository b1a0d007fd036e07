use crate::guidance::common::matrix::Matrix;
use num::Zero;
use std::ops::{Add, Index, Mul, Sub};

/// A fixed-size column vector used as input and output of the guidance laws.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StateVector<T, const N: usize> {
    pub data: [T; N],
}

impl<T: Copy + Zero, const N: usize> StateVector<T, N> {
    pub fn zero() -> Self {
        Self {
            data: [T::zero(); N],
        }
    }

    pub fn from_matrix(matrix: Matrix<T, N, 1>) -> Self {
        let mut vec = Self::zero();
        for i in 0..N {
            vec.data[i] = *matrix.get(i, 0);
        }
        vec
    }

    pub fn to_matrix(self) -> Matrix<T, N, 1> {
        let mut mat = Matrix::<T, N, 1>::zero();
        for i in 0..N {
            mat.set(i, 0, self.data[i]);
        }
        mat
    }

    pub fn is_zero(&self) -> bool { self.data.iter().all(Zero::is_zero) }
}

impl<T: Copy, const N: usize> StateVector<T, N> {
    pub fn new(data: [T; N]) -> Self { Self { data } }

    pub fn into_array(self) -> [T; N] { self.data }

    pub fn map<F: Fn(T) -> T>(self, f: F) -> Self { Self::new(self.data.map(f)) }
}

impl<T: Copy + Add<Output = T>, const N: usize> Add for StateVector<T, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        let mut result = self;
        for i in 0..N {
            result.data[i] = self.data[i] + rhs.data[i];
        }
        result
    }
}

impl<T: Copy + Sub<Output = T>, const N: usize> Sub for StateVector<T, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        let mut result = self;
        for i in 0..N {
            result.data[i] = self.data[i] - rhs.data[i];
        }
        result
    }
}

impl<T: Copy + Mul<Output = T>, const N: usize> Mul<T> for StateVector<T, N> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self::Output { self.map(|val| val * rhs) }
}

impl<T: Copy, const N: usize> Index<usize> for StateVector<T, N> {
    type Output = T;

    fn index(&self, idx: usize) -> &Self::Output { &self.data[idx] }
}

impl<T: Copy, const N: usize> From<[T; N]> for StateVector<T, N> {
    fn from(data: [T; N]) -> Self { Self::new(data) }
}
