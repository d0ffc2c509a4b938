use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3-dimensional point with scalar type `T`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[repr(transparent)]
pub struct Point3<T>(pub [T; 3]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Point3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Point3<T> {}

/// A 3-dimensional point with scalar type `i32`, used for voxel coordinates and offsets.
pub type Point3i = Point3<i32>;
/// A 3-dimensional point with scalar type `f32`, used for grid-space and world-space coordinates.
pub type Point3f = Point3<f32>;

impl<T> Point3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }
}

impl<T> Point3<T>
where
    T: Copy,
{
    #[inline]
    pub fn fill(value: T) -> Self {
        Self([value; 3])
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }

    #[inline]
    pub fn at(&self, axis: usize) -> T {
        self.0[axis]
    }

    pub fn map_components(&self, f: impl Fn(T) -> T) -> Self {
        Self([f(self.x()), f(self.y()), f(self.z())])
    }
}

impl Point3i {
    pub const ZERO: Self = Point3([0; 3]);
    pub const ONES: Self = Point3([1; 3]);

    /// The same point with `f32` components.
    #[inline]
    pub fn as_float(&self) -> Point3f {
        Point3([self.x() as f32, self.y() as f32, self.z() as f32])
    }

    /// The total number of lattice points in a box of this shape.
    ///
    /// Components must be non-negative.
    #[inline]
    pub fn volume(&self) -> usize {
        debug_assert!(self.0.iter().all(|&c| c >= 0));

        self.x() as usize * self.y() as usize * self.z() as usize
    }
}

impl Point3f {
    pub const ZERO: Self = Point3([0.0; 3]);
    pub const ONES: Self = Point3([1.0; 3]);

    #[inline]
    pub fn round(&self) -> Self {
        self.map_components(|c| c.round())
    }

    #[inline]
    pub fn floor(&self) -> Self {
        self.map_components(|c| c.floor())
    }

    /// The lattice point obtained by flooring each component.
    #[inline]
    pub fn floor_int(&self) -> Point3i {
        Point3([
            self.x().floor() as i32,
            self.y().floor() as i32,
            self.z().floor() as i32,
        ])
    }
}

impl<T> Add for Point3<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self([self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z()])
    }
}

impl<T> Sub for Point3<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self([self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z()])
    }
}

impl<T> AddAssign for Point3<T>
where
    T: Copy + Add<Output = T>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T> SubAssign for Point3<T>
where
    T: Copy + Sub<Output = T>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Component-wise multiplication.
impl<T> Mul for Point3<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self([self.x() * rhs.x(), self.y() * rhs.y(), self.z() * rhs.z()])
    }
}

/// Component-wise division.
impl<T> Div for Point3<T>
where
    T: Copy + Div<Output = T>,
{
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self([self.x() / rhs.x(), self.y() / rhs.y(), self.z() / rhs.z()])
    }
}

impl<T> Mul<T> for Point3<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self([self.x() * rhs, self.y() * rhs, self.z() * rhs])
    }
}

impl<T> Neg for Point3<T>
where
    T: Copy + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self([-self.x(), -self.y(), -self.z()])
    }
}
