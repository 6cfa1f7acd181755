use crate::app_state::State;
use crate::state::DepthTexture;

use winit::event::*;
use winit::keyboard::{KeyCode, PhysicalKey};

impl State {
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.gpu.config.width = new_size.width;
            self.gpu.config.height = new_size.height;
            self.gpu
                .surface
                .configure(&self.gpu.device, &self.gpu.config);
            self.depth = DepthTexture::new(&self.gpu.device, &self.gpu.config);
        }
    }

    /// Handles camera keys. Returns `true` when the event was consumed.
    pub fn input(&mut self, event: &WindowEvent) -> bool {
        let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    state: ElementState::Pressed,
                    physical_key: PhysicalKey::Code(key),
                    ..
                },
            ..
        } = event
        else {
            return false;
        };

        let step = self.scene.config.look_step;
        match key {
            KeyCode::ArrowLeft => self.scene.camera.turn(step, 0.0),
            KeyCode::ArrowRight => self.scene.camera.turn(-step, 0.0),
            KeyCode::ArrowUp => self.scene.camera.turn(0.0, step),
            KeyCode::ArrowDown => self.scene.camera.turn(0.0, -step),
            KeyCode::Space => {
                self.scene.paused = !self.scene.paused;
                log::info!("Spin {}", if self.scene.paused { "paused" } else { "resumed" });
            }
            KeyCode::KeyR => {
                self.scene.camera.yaw = 0.0;
                self.scene.camera.pitch = 0.0;
            }
            _ => return false,
        }
        true
    }
}
