use std::ops::{Add, AddAssign, BitXor, Div, Index, IndexMut, Sub};

use crate::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

// Constructors:

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(scalars: [T; N]) -> Self {
        Self(scalars)
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> Vector<T, N> {
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(std::array::from_fn(f))
    }

    pub fn into_scalars(self) -> [T; N] {
        self.0
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Copy,
{
    /// Keeps the first `M` scalars, `M` must not exceed `N`.
    pub fn take<const M: usize>(&self) -> Vector<T, M> {
        debug_assert!(M <= N);
        Vector::from_fn(|i| self.0[i])
    }
}

// Getters:

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// Geometry:

impl<T, const N: usize> Vector<T, N>
where
    T: Float,
{
    pub fn dot(&self, other: &Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    pub fn length(&self) -> T {
        self.dot(self).sqrt()
    }

    /// Divides by the length without checking it, a zero vector yields NaN scalars.
    pub fn normalize(self) -> Self {
        let length = self.length();
        self / length
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&scalar| scalar == T::ZERO)
    }
}

/// Cross product.
impl<T> BitXor for Vector<T, 3>
where
    T: Float,
{
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

// Arithmetic:

impl<T, const N: usize> Add for Vector<T, N>
where
    T: Copy + Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_fn(|i| self.0[i] + rhs.0[i])
    }
}

impl<T, const N: usize> AddAssign for Vector<T, N>
where
    T: Copy + Add<Output = T>,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T, const N: usize> Sub for Vector<T, N>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_fn(|i| self.0[i] - rhs.0[i])
    }
}

impl<T, const N: usize> Sub<&Vector<T, N>> for Vector<T, N>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        self - *rhs
    }
}

impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: Copy + Div<Output = T>,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self::from_fn(|i| self.0[i] / rhs)
    }
}
