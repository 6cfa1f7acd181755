//! Small fixed-size linear algebra for graphics transforms.
//!
//! Matrices are stored column-major: cell `(col, row)` of an `N`x`N` matrix
//! lives at `col * N + row`, the layout a shader expects for a `mat4x4<f32>`
//! uniform. Every accessor goes through [`offset`].

mod error;
mod mat3;
mod mat4;
mod vec3;
mod vec4;

pub use error::{MathError, MathResult};
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use vec3::Vec3;
pub use vec4::Vec4;

pub const PI: f32 = std::f32::consts::PI;
pub const TAU: f32 = std::f32::consts::TAU;

/// Default tolerance for comparing results of float arithmetic.
pub const EPSILON: f32 = 1e-6;

/// Column-major storage offset of `(col, row)` in a matrix with `rows` rows.
#[inline]
pub const fn offset(col: usize, row: usize, rows: usize) -> usize {
    col * rows + row
}

pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

pub(crate) fn approx_eq_slice(a: &[f32], b: &[f32], epsilon: f32) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| approx_eq(*x, *y, epsilon))
}
