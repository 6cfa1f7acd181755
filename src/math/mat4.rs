use std::ops::Mul;

use crate::math::{offset, Mat3, MathError, MathResult, Vec3, Vec4};

const DIM: usize = 4;

/// Column-major 4x4 matrix for homogeneous transforms.
///
/// ```text
/// [ 0  4  8 12 ]
/// [ 1  5  9 13 ]
/// [ 2  6 10 14 ]
/// [ 3  7 11 15 ]
/// ```
///
/// The affine builders leave the last row at `(0, 0, 0, 1)`; projections
/// do not.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub const DIM: usize = DIM;

    /// The all-zero matrix. Use [`Mat4::identity`] for the identity.
    pub const fn zero() -> Self {
        Self { data: [0.0; 16] }
    }

    pub const fn from_cols_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    #[rustfmt::skip]
    pub const fn from_cols(x: Vec4, y: Vec4, z: Vec4, e: Vec4) -> Self {
        Self {
            data: [
                x.x, x.y, x.z, x.w,
                y.x, y.y, y.z, y.w,
                z.x, z.y, z.z, z.w,
                e.x, e.y, e.z, e.w,
            ],
        }
    }

    /// Axes `x`, `y`, `z` as directions and `e` as the translation point.
    pub const fn from_affine_cols(x: Vec3, y: Vec3, z: Vec3, e: Vec3) -> Self {
        Self::from_cols(
            Vec4::from_vec3(x, 0.0),
            Vec4::from_vec3(y, 0.0),
            Vec4::from_vec3(z, 0.0),
            Vec4::from_vec3(e, 1.0),
        )
    }

    pub const fn identity() -> Self {
        Self::scale(1.0, 1.0, 1.0)
    }

    #[rustfmt::skip]
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0,
                0.0, sy, 0.0, 0.0,
                0.0, 0.0, sz, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub const fn scale_uniform(s: f32) -> Self {
        Self::scale(s, s, s)
    }

    pub const fn translate(tx: f32, ty: f32, tz: f32) -> Self {
        let mut mat = Self::identity();
        mat.data[12] = tx;
        mat.data[13] = ty;
        mat.data[14] = tz;
        mat
    }

    pub fn rotate_x(rad: f32) -> Self {
        Self::from(Mat3::rotate_x(rad))
    }

    pub fn rotate_y(rad: f32) -> Self {
        Self::from(Mat3::rotate_y(rad))
    }

    pub fn rotate_z(rad: f32) -> Self {
        Self::from(Mat3::rotate_z(rad))
    }

    /// Rotation of `rad` radians about a unit-length `axis`. See
    /// [`Mat3::rotate`].
    pub fn rotate(axis: Vec3, rad: f32) -> Self {
        Self::from(Mat3::rotate(axis, rad))
    }

    /// OpenGL-style perspective projection.
    ///
    /// View-space z in `[-z_near, -z_far]` maps to NDC `[-1, 1]` and
    /// `w' = -z`. `fov_y` is the vertical field of view in radians and
    /// `aspect` is width over height. Equal near and far planes or a zero
    /// field of view give inf/NaN entries.
    pub fn perspective(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let depth = z_far - z_near;

        let mut mat = Self::zero();
        mat.data[0] = f / aspect;
        mat.data[5] = f;
        mat.data[10] = -(z_far + z_near) / depth;
        mat.data[11] = -1.0;
        mat.data[14] = -2.0 * z_far * z_near / depth;

        log::debug!(
            "Perspective matrix: fov_y={}, aspect={}, near={}, far={}",
            fov_y,
            aspect,
            z_near,
            z_far
        );

        mat
    }

    /// OpenGL-style orthographic projection onto the NDC cube.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Self {
        let w = right - left;
        let h = top - bottom;
        let d = z_far - z_near;

        let result = Self::from_cols(
            Vec4::new(2.0 / w, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / h, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -2.0 / d, 0.0),
            Vec4::new(-(right + left) / w, -(top + bottom) / h, -(z_far + z_near) / d, 1.0),
        );

        log::debug!(
            "Ortho matrix: left={}, right={}, bottom={}, top={}, near={}, far={}",
            left,
            right,
            bottom,
            top,
            z_near,
            z_far
        );

        result
    }

    /// Inverse of a rigid transform `M = T * R` as `R^T * T^-1`.
    ///
    /// Only valid when the upper-left block is a pure rotation and the last
    /// row is `(0, 0, 0, 1)`. Scale, shear or projection give a wrong result;
    /// nothing checks for them.
    pub fn fast_inverse(self) -> Self {
        let rotation_t = Mat3::from(self).transpose();
        let translation = -(rotation_t * self.translation());

        let mut result = Self::from(rotation_t);
        result.data[12] = translation.x;
        result.data[13] = translation.y;
        result.data[14] = translation.z;
        result
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

    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Transforms a point (`w = 1`) and divides by the resulting `w` unless
    /// it is zero.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let mut p = *self * Vec4::from_vec3(point, 1.0);
        p.dehomogenize();
        p.xyz()
    }

    /// Transforms a direction (`w = 0`); translation does not apply.
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(vector, 0.0)).xyz()
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

    pub fn col(&self, index: usize) -> MathResult<Vec4> {
        check_cell(index, 0)?;
        let o = offset(index, 0, DIM);
        Ok(Vec4::new(
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        ))
    }

    pub fn set_col(&mut self, index: usize, v: Vec4) -> MathResult<()> {
        check_cell(index, 0)?;
        let o = offset(index, 0, DIM);
        self.data[o..o + DIM].copy_from_slice(&v.to_array());
        Ok(())
    }

    pub fn as_array(&self) -> &[f32; 16] {
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

/// Embeds a 3x3 block with no translation and `(0, 0, 0, 1)` as last row.
impl From<Mat3> for Mat4 {
    fn from(mat3: Mat3) -> Self {
        let mut mat = Self::zero();
        for col in 0..Mat3::DIM {
            for row in 0..Mat3::DIM {
                mat.data[offset(col, row, DIM)] = mat3.data[offset(col, row, Mat3::DIM)];
            }
        }
        mat.data[15] = 1.0;
        mat
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(data: [f32; 16]) -> Self {
        Self { data }
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(mat: Mat4) -> Self {
        mat.data
    }
}

impl From<Mat4> for [[f32; 4]; 4] {
    fn from(mat: Mat4) -> Self {
        bytemuck::cast(mat.data)
    }
}

impl Mul for Mat4 {
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

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Vec4 {
        let m = &self.data;
        Vec4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }
}

unsafe impl bytemuck::Pod for Mat4 {}
unsafe impl bytemuck::Zeroable for Mat4 {}
