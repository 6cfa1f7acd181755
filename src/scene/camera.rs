use crate::math::{Mat4, Vec3, PI};

/// Remaps OpenGL clip depth `[-w, w]` to the `[0, w]` range wgpu expects.
pub const GL_TO_WGPU_DEPTH: Mat4 = {
    let mut mat = Mat4::scale(1.0, 1.0, 0.5);
    mat.data[14] = 0.5;
    mat
};

/// A fly camera placed with a rigid transform. The view matrix is the fast
/// inverse of that transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    /// Rotation about +Y in radians.
    pub yaw: f32,
    /// Rotation about +X in radians, clamped short of straight up or down.
    pub pitch: f32,
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    const MAX_PITCH: f32 = PI / 2.0 - 0.01;

    pub fn new(eye: Vec3, fov_y: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            eye,
            yaw: 0.0,
            pitch: 0.0,
            fov_y,
            z_near,
            z_far,
        }
    }

    /// Camera-to-world transform.
    pub fn model(&self) -> Mat4 {
        Mat4::translate(self.eye.x, self.eye.y, self.eye.z)
            * Mat4::rotate_y(self.yaw)
            * Mat4::rotate_x(self.pitch)
    }

    pub fn view(&self) -> Mat4 {
        self.model().fast_inverse()
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        GL_TO_WGPU_DEPTH * Mat4::perspective(self.fov_y, aspect, self.z_near, self.z_far)
    }

    pub fn turn(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = (self.yaw + d_yaw) % crate::math::TAU;
        self.pitch = (self.pitch + d_pitch).clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec4, EPSILON};

    fn camera() -> Camera {
        Camera::new(Vec3::new(1.0, 2.0, 5.0), PI / 2.0, 1.0, 10.0)
    }

    #[test]
    fn test_view_moves_eye_to_origin() {
        let mut cam = camera();
        cam.turn(0.4, -0.2);

        let eye = cam.view().transform_point(cam.eye);
        assert!(eye.abs_diff_eq(&Vec3::zero(), 1e-5));
    }

    #[test]
    fn test_view_looks_down_negative_z() {
        let cam = camera();
        let ahead = cam.view().transform_point(Vec3::new(1.0, 2.0, 2.0));
        assert!(ahead.abs_diff_eq(&Vec3::new(0.0, 0.0, -3.0), EPSILON));
    }

    #[test]
    fn test_yaw_turns_left() {
        let mut cam = camera();
        cam.turn(PI / 2.0, 0.0);

        // Facing -X after a quarter turn about +Y.
        let ahead = cam.view().transform_point(Vec3::new(-1.0, 2.0, 5.0));
        assert!(ahead.abs_diff_eq(&Vec3::new(0.0, 0.0, -2.0), 1e-5));
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut cam = camera();
        cam.turn(0.0, 10.0);
        assert!(cam.pitch < PI / 2.0);
        cam.turn(0.0, -20.0);
        assert!(cam.pitch > -PI / 2.0);
    }

    #[test]
    fn test_projection_depth_range() {
        let proj = camera().projection(1.0);

        let mut near = proj * Vec4::point(0.0, 0.0, -1.0);
        near.dehomogenize();
        assert!(near.z.abs() < 1e-5);

        let mut far = proj * Vec4::point(0.0, 0.0, -10.0);
        far.dehomogenize();
        assert!((far.z - 1.0).abs() < 1e-5);
    }
}
