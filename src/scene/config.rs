use crate::math::{Vec3, PI};

/// Tunables for the spinning-cube scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub clear_color: [f64; 4],
    pub eye: Vec3,
    /// Rotation axis of the model. Normalized before use.
    pub spin_axis: Vec3,
    /// Radians per second.
    pub spin_speed: f32,
    pub model_scale: f32,
    /// Radians turned per key press.
    pub look_step: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fov_y: PI / 3.0,
            z_near: 0.1,
            z_far: 100.0,
            clear_color: [0.08, 0.08, 0.1, 1.0],
            eye: Vec3::new(0.0, 0.0, 3.0),
            spin_axis: Vec3::new(1.0, 1.0, 0.0),
            spin_speed: PI / 4.0,
            model_scale: 1.0,
            look_step: PI / 36.0,
        }
    }
}
