use crate::app_state::State;

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        use web_time::Instant;
    } else {
        use std::time::Instant;
    }
}

impl State {
    pub fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.scene.advance(dt);

        let aspect = self.aspect();
        self.scene.write_uniforms(&mut self.buffers.uniform, aspect);
        self.gpu.queue.write_buffer(
            &self.buffers.uniform_buffer,
            0,
            bytemuck::cast_slice(&[self.buffers.uniform]),
        );
    }
}
