use crate::math::Mat4;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    mvp: Mat4,
}

impl Uniforms {
    pub fn new() -> Self {
        Self {
            mvp: Mat4::identity(),
        }
    }

    pub fn mvp(&self) -> &Mat4 {
        &self.mvp
    }

    pub fn update_transform(&mut self, model: Mat4, view: Mat4, projection: Mat4) {
        self.mvp = projection * view * model;
    }
}
