use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::{MathError, MathResult};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const SIZE: usize = 3;

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn size(&self) -> usize {
        Self::SIZE
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product.
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn magnitude(self) -> f32 {
        self.length()
    }

    /// Scales to unit length in place. A zero vector is left untouched, and so
    /// is one short enough that its squared length underflows to zero.
    pub fn normalize(&mut self) {
        let length = self.length();
        if length != 0.0 {
            self.x /= length;
            self.y /= length;
            self.z /= length;
        }
    }

    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) {
        self.x *= sx;
        self.y *= sy;
        self.z *= sz;
    }

    pub fn scale_uniform(&mut self, s: f32) {
        self.scale(s, s, s);
    }

    pub fn get(&self, index: usize) -> MathResult<f32> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::index_out_of_range(index, Self::SIZE)),
        }
    }

    /// Writes one component. Out-of-range indices leave the vector unchanged.
    pub fn set(&mut self, index: usize, value: f32) -> MathResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(MathError::index_out_of_range(index, Self::SIZE)),
        }
        Ok(())
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        super::approx_eq_slice(&self.to_array(), &other.to_array(), epsilon)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f32]> for Vec3 {
    type Error = MathError;

    fn try_from(values: &[f32]) -> MathResult<Self> {
        match values {
            &[x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(MathError::LengthMismatch {
                expected: Self::SIZE,
                found: values.len(),
            }),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Component-wise product.
impl Mul for Vec3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

/// Component-wise quotient. Zero components in `rhs` give inf/NaN.
impl Div for Vec3 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality() {
        let v1 = Vec3::zero();
        let v2 = Vec3::new(1.0, 0.0, 0.0);
        let v3 = Vec3::new(0.0, 1.0, 0.0);
        let v4 = Vec3::new(0.0, 0.0, 1.0);

        assert_eq!(v1, v1);
        assert_ne!(v1, v2);
        assert_ne!(v1, v3);
        assert_ne!(v1, v4);
        assert_eq!(v2, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(Vec3::default(), Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_accessors() {
        let mut v = Vec3::zero();
        v.set(0, 1.0).unwrap();
        v.set(1, 2.0).unwrap();
        v.set(2, 3.0).unwrap();

        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.get(0), Ok(1.0));
        assert_eq!(v.get(1), Ok(2.0));
        assert_eq!(v.get(2), Ok(3.0));
        assert_eq!(v.size(), 3);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(v.get(3), Err(MathError::index_out_of_range(3, 3)));
        assert_eq!(v.set(3, 9.0), Err(MathError::index_out_of_range(3, 3)));
        assert!(v.get(usize::MAX).is_err());
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_slice_conversion() {
        let ok = Vec3::try_from(&[1.0, 2.0, 3.0][..]);
        assert_eq!(ok, Ok(Vec3::new(1.0, 2.0, 3.0)));

        let short = Vec3::try_from(&[1.0, 2.0][..]);
        assert_eq!(
            short,
            Err(MathError::LengthMismatch { expected: 3, found: 2 })
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(Vec3::zero() + a, a);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_divide_by_zero_is_not_an_error() {
        let q = Vec3::new(1.0, -1.0, 0.0) / Vec3::zero();
        assert!(q.x.is_infinite() && q.x > 0.0);
        assert!(q.y.is_infinite() && q.y < 0.0);
        assert!(q.z.is_nan());
    }

    #[test]
    fn test_dot_is_symmetric() {
        let a = Vec3::new(1.0, -2.0, 3.5);
        let b = Vec3::new(-4.0, 0.5, 2.0);

        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.dot(b), -4.0 - 1.0 + 7.0);
    }

    #[test]
    fn test_cross() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);

        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);

        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 4.0);
        assert_eq!(a.cross(b), -(b.cross(a)));
        assert_eq!(a.cross(a), Vec3::zero());
        assert_eq!(a.cross(a * 3.0), Vec3::zero());
    }

    #[test]
    fn test_length() {
        let v = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(v.length(), 7.0);
        assert_eq!(v.length(), v.magnitude());
    }

    #[test]
    fn test_normalize() {
        let mut v = Vec3::new(3.0, 0.0, 4.0);
        v.normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!(v.abs_diff_eq(&Vec3::new(0.6, 0.0, 0.8), 1e-6));

        let mut zero = Vec3::zero();
        zero.normalize();
        assert_eq!(zero, Vec3::zero());

        let mut tiny = Vec3::new(1e-30, 0.0, 0.0);
        tiny.normalize();
        assert_eq!(tiny, Vec3::new(1e-30, 0.0, 0.0));
    }

    #[test]
    fn test_scale() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v.scale(2.0, 3.0, 4.0);
        assert_eq!(v, Vec3::new(2.0, 6.0, 12.0));

        v.scale_uniform(0.5);
        assert_eq!(v, Vec3::new(1.0, 3.0, 6.0));
    }
}
