use std::ops::Mul;

use crate::math::{offset, Mat4, MathError, MathResult, Vec3};

const DIM: usize = 3;

/// Column-major 3x3 matrix for linear transforms (rotation and scale).
///
/// ```text
/// [ 0  3  6 ]
/// [ 1  4  7 ]
/// [ 2  5  8 ]
/// ```
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Mat3 {
    pub data: [f32; 9],
}

impl Mat3 {
    pub const DIM: usize = DIM;

    /// The all-zero matrix. Use [`Mat3::identity`] for the identity.
    pub const fn zero() -> Self {
        Self { data: [0.0; 9] }
    }

    pub const fn from_cols_array(data: [f32; 9]) -> Self {
        Self { data }
    }

    pub const fn from_cols(x: Vec3, y: Vec3, z: Vec3) -> Self {
        Self {
            data: [x.x, x.y, x.z, y.x, y.y, y.z, z.x, z.y, z.z],
        }
    }

    pub const fn identity() -> Self {
        Self::scale(1.0, 1.0, 1.0)
    }

    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            data: [sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, sz],
        }
    }

    pub const fn scale_uniform(s: f32) -> Self {
        Self::scale(s, s, s)
    }

    pub fn rotate_x(rad: f32) -> Self {
        let (sin, cos) = rad.sin_cos();
        let mut mat = Self::identity();
        mat.data[offset(1, 1, DIM)] = cos;
        mat.data[offset(1, 2, DIM)] = sin;
        mat.data[offset(2, 1, DIM)] = -sin;
        mat.data[offset(2, 2, DIM)] = cos;
        mat
    }

    pub fn rotate_y(rad: f32) -> Self {
        let (sin, cos) = rad.sin_cos();
        let mut mat = Self::identity();
        mat.data[offset(0, 0, DIM)] = cos;
        mat.data[offset(0, 2, DIM)] = -sin;
        mat.data[offset(2, 0, DIM)] = sin;
        mat.data[offset(2, 2, DIM)] = cos;
        mat
    }

    pub fn rotate_z(rad: f32) -> Self {
        let (sin, cos) = rad.sin_cos();
        let mut mat = Self::identity();
        mat.data[offset(0, 0, DIM)] = cos;
        mat.data[offset(0, 1, DIM)] = sin;
        mat.data[offset(1, 0, DIM)] = -sin;
        mat.data[offset(1, 1, DIM)] = cos;
        mat
    }

    /// Rotation of `rad` radians about `axis` (Rodrigues' formula).
    ///
    /// `axis` must already be unit length; it is not normalized here and a
    /// longer or shorter axis gives a skewed matrix.
    pub fn rotate(axis: Vec3, rad: f32) -> Self {
        let (sin, cos) = rad.sin_cos();
        let t = 1.0 - cos;
        let Vec3 { x, y, z } = axis;

        Self {
            data: [
                cos + x * x * t,
                y * x * t + z * sin,
                z * x * t - y * sin,
                x * y * t - z * sin,
                cos + y * y * t,
                z * y * t + x * sin,
                x * z * t + y * sin,
                y * z * t - x * sin,
                cos + z * z * t,
            ],
        }
    }

    pub fn transpose(self) -> Self {
        let mut result = Self::zero();
        for col in 0..DIM {
            for row in 0..DIM {
                result.data[offset(col, row, DIM)] = self.data[offset(row, col, DIM)];
            }
        }
        result
    }

    pub fn get(&self, col: usize, row: usize) -> MathResult<f32> {
        check_cell(col, row)?;
        Ok(self.data[offset(col, row, DIM)])
    }

    pub fn set(&mut self, col: usize, row: usize, value: f32) -> MathResult<()> {
        check_cell(col, row)?;
        self.data[offset(col, row, DIM)] = value;
        Ok(())
    }

    pub fn col(&self, col: usize) -> MathResult<Vec3> {
        check_cell(col, 0)?;
        let o = offset(col, 0, DIM);
        Ok(Vec3::new(self.data[o], self.data[o + 1], self.data[o + 2]))
    }

    pub fn set_col(&mut self, col: usize, v: Vec3) -> MathResult<()> {
        check_cell(col, 0)?;
        let o = offset(col, 0, DIM);
        self.data[o..o + DIM].copy_from_slice(&v.to_array());
        Ok(())
    }

    pub fn as_array(&self) -> &[f32; 9] {
        &self.data
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        super::approx_eq_slice(&self.data, &other.data, epsilon)
    }
}

fn check_cell(col: usize, row: usize) -> MathResult<()> {
    if col >= DIM || row >= DIM {
        return Err(MathError::cell_out_of_range(col, row, DIM));
    }
    Ok(())
}

/// Upper-left rotation block of a 4x4 matrix.
impl From<Mat4> for Mat3 {
    fn from(mat4: Mat4) -> Self {
        let mut mat = Self::zero();
        for col in 0..DIM {
            for row in 0..DIM {
                mat.data[offset(col, row, DIM)] = mat4.data[offset(col, row, Mat4::DIM)];
            }
        }
        mat
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(data: [f32; 9]) -> Self {
        Self { data }
    }
}

impl From<Mat3> for [f32; 9] {
    fn from(mat: Mat3) -> Self {
        mat.data
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut result = Self::zero();

        for col in 0..DIM {
            for row in 0..DIM {
                for k in 0..DIM {
                    result.data[offset(col, row, DIM)] +=
                        self.data[offset(k, row, DIM)] * other.data[offset(col, k, DIM)];
                }
            }
        }

        result
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        let m = &self.data;
        Vec3::new(
            m[0] * v.x + m[3] * v.y + m[6] * v.z,
            m[1] * v.x + m[4] * v.y + m[7] * v.z,
            m[2] * v.x + m[5] * v.y + m[8] * v.z,
        )
    }
}

unsafe impl bytemuck::Pod for Mat3 {}
unsafe impl bytemuck::Zeroable for Mat3 {}
