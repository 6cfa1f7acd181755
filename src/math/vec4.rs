use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::{MathError, MathResult, Vec3};

/// Homogeneous 4D vector. `w == 1` conventionally marks a point and `w == 0`
/// a direction; nothing enforces it.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const SIZE: usize = 4;

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    pub const fn direction(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    pub const fn size(&self) -> usize {
        Self::SIZE
    }

    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn magnitude(self) -> f32 {
        self.length()
    }

    /// Scales all four components to unit length in place. A zero vector is
    /// left untouched, as is one whose squared length underflows to zero.
    pub fn normalize(&mut self) {
        let length = self.length();
        if length != 0.0 {
            self.x /= length;
            self.y /= length;
            self.z /= length;
            self.w /= length;
        }
    }

    /// Divides `x`, `y`, `z` by `w` and sets `w` to 1. Directions (`w == 0`)
    /// are left untouched.
    pub fn dehomogenize(&mut self) {
        if self.w != 0.0 {
            self.x /= self.w;
            self.y /= self.w;
            self.z /= self.w;
            self.w = 1.0;
        }
    }

    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32, sw: f32) {
        self.x *= sx;
        self.y *= sy;
        self.z *= sz;
        self.w *= sw;
    }

    pub fn scale_uniform(&mut self, s: f32) {
        self.scale(s, s, s, s);
    }

    pub fn get(&self, index: usize) -> MathResult<f32> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(MathError::index_out_of_range(index, Self::SIZE)),
        }
    }

    pub fn set(&mut self, index: usize, value: f32) -> MathResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            3 => self.w = value,
            _ => return Err(MathError::index_out_of_range(index, Self::SIZE)),
        }
        Ok(())
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        super::approx_eq_slice(&self.to_array(), &other.to_array(), epsilon)
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(v: Vec4) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f32]> for Vec4 {
    type Error = MathError;

    fn try_from(values: &[f32]) -> MathResult<Self> {
        match values {
            &[x, y, z, w] => Ok(Self::new(x, y, z, w)),
            _ => Err(MathError::LengthMismatch {
                expected: Self::SIZE,
                found: values.len(),
            }),
        }
    }
}

impl Add for Vec4 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Vec4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Mul for Vec4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w * rhs.w)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Div for Vec4 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z, self.w / rhs.w)
    }
}

impl Neg for Vec4 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec3() {
        let v = Vec4::from_vec3(Vec3::new(1.0, 2.0, 3.0), 1.0);
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec4::point(1.0, 2.0, 3.0), v);
        assert_eq!(Vec4::direction(1.0, 2.0, 3.0).w, 0.0);
    }

    #[test]
    fn test_accessors() {
        let mut v = Vec4::zero();
        for i in 0..Vec4::SIZE {
            v.set(i, (i + 1) as f32).unwrap();
        }
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.get(3), Ok(4.0));
        assert_eq!(v.size(), 4);

        assert_eq!(v.get(4), Err(MathError::index_out_of_range(4, 4)));
        assert!(v.set(4, 0.0).is_err());
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(2.0, 4.0, 6.0, 8.0);

        assert_eq!(a + b, Vec4::new(3.0, 6.0, 9.0, 12.0));
        assert_eq!(b - a, a);
        assert_eq!(a * b, Vec4::new(2.0, 8.0, 18.0, 32.0));
        assert_eq!(b / a, Vec4::new(2.0, 2.0, 2.0, 2.0));
        assert_eq!(a * 2.0, b);
        assert_eq!(-a + a, Vec4::zero());
    }

    #[test]
    fn test_dot_and_length() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(-1.0, 0.0, 2.0, 0.5);

        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.dot(b), 7.0);
        assert_eq!(Vec4::new(1.0, 1.0, 1.0, 1.0).length(), 2.0);
        assert_eq!(a.length(), a.magnitude());
    }

    #[test]
    fn test_normalize() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        v.normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);

        let mut zero = Vec4::zero();
        zero.normalize();
        assert_eq!(zero, Vec4::zero());

        let mut tiny = Vec4::new(0.0, 1e-30, 0.0, 0.0);
        tiny.normalize();
        assert_eq!(tiny, Vec4::new(0.0, 1e-30, 0.0, 0.0));
    }

    #[test]
    fn test_dehomogenize() {
        let mut p = Vec4::new(2.0, 4.0, 6.0, 2.0);
        p.dehomogenize();
        assert_eq!(p, Vec4::new(1.0, 2.0, 3.0, 1.0));

        let mut d = Vec4::direction(2.0, 4.0, 6.0);
        d.dehomogenize();
        assert_eq!(d, Vec4::direction(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_scale() {
        let mut v = Vec4::new(1.0, 1.0, 1.0, 1.0);
        v.scale(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 4.0));

        v.scale_uniform(-1.0);
        assert_eq!(v, Vec4::new(-1.0, -2.0, -3.0, -4.0));
    }
}
