mod camera;
mod config;
mod uniform;

pub use camera::{Camera, GL_TO_WGPU_DEPTH};
pub use config::SceneConfig;
pub use uniform::Uniforms;

use crate::math::{Mat4, Vec3, TAU};

/// CPU side of the scene: a camera and one spinning model.
pub struct Scene {
    pub config: SceneConfig,
    pub camera: Camera,
    pub angle: f32,
    pub paused: bool,
    spin_axis: Vec3,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let mut spin_axis = config.spin_axis;
        spin_axis.normalize();

        Self {
            camera: Camera::new(config.eye, config.fov_y, config.z_near, config.z_far),
            config,
            angle: 0.0,
            paused: false,
            spin_axis,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if !self.paused {
            self.angle = (self.angle + self.config.spin_speed * dt) % TAU;
        }
    }

    pub fn model(&self) -> Mat4 {
        Mat4::rotate(self.spin_axis, self.angle) * Mat4::scale_uniform(self.config.model_scale)
    }

    pub fn write_uniforms(&self, uniforms: &mut Uniforms, aspect: f32) {
        uniforms.update_transform(self.model(), self.camera.view(), self.camera.projection(aspect));
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec4, EPSILON, PI};

    #[test]
    fn test_advance_wraps_and_pauses() {
        let mut scene = Scene::default();
        scene.config.spin_speed = PI;

        scene.advance(0.5);
        assert!((scene.angle - PI / 2.0).abs() < EPSILON);

        scene.advance(2.0);
        assert!(scene.angle < TAU);

        scene.paused = true;
        let angle = scene.angle;
        scene.advance(1.0);
        assert_eq!(scene.angle, angle);
    }

    #[test]
    fn test_model_is_rotation_about_spin_axis() {
        let mut scene = Scene::default();
        scene.angle = 1.0;

        let mut axis = scene.config.spin_axis;
        axis.normalize();
        let rotated = scene.model().transform_vector(axis);
        assert!(rotated.abs_diff_eq(&axis, 1e-5));
    }

    #[test]
    fn test_origin_lands_inside_clip_volume() {
        let scene = Scene::default();
        let mut uniforms = Uniforms::new();
        scene.write_uniforms(&mut uniforms, 16.0 / 9.0);

        let mut clip = *uniforms.mvp() * Vec4::point(0.0, 0.0, 0.0);
        assert!(clip.w > 0.0);
        clip.dehomogenize();
        assert!(clip.x.abs() < EPSILON && clip.y.abs() < EPSILON);
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }
}
