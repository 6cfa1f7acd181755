use crate::app_state::State;
use crate::scene::{Scene, SceneConfig};
use anyhow::Context;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

struct App {
    config: SceneConfig,
    // Holds the scene while suspended and no surface exists.
    scene: Option<Scene>,
    state: Option<State>,
}

impl App {
    fn new(config: SceneConfig) -> Self {
        Self {
            config,
            scene: None,
            state: None,
        }
    }

    fn take_scene(&mut self) -> Scene {
        self.scene
            .take()
            .unwrap_or_else(|| Scene::new(self.config))
    }

    fn park(&mut self, state: State) {
        self.scene = Some(state.scene);
    }

    fn create_window(event_loop: &ActiveEventLoop) -> anyhow::Result<Arc<Window>> {
        let window_attributes = Window::default_attributes().with_title("noobgraphics");
        let window = event_loop
            .create_window(window_attributes)
            .context("failed to create window")?;

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::WindowExtWebSys;

            let attached = window.canvas().and_then(|canvas| {
                let style = canvas.style();
                style.set_property("width", "100vw").ok()?;
                style.set_property("height", "100vh").ok()?;
                style.set_property("display", "block").ok()?;

                let dst = web_sys::window()?
                    .document()?
                    .get_element_by_id("noobgraphics")?;
                dst.append_child(&web_sys::Element::from(canvas)).ok()?;
                Some(())
            });
            if attached.is_none() {
                log::warn!("Couldn't attach canvas to #noobgraphics");
            }
        }

        Ok(Arc::new(window))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let scene = self.take_scene();
        let state = Self::create_window(event_loop)
            .and_then(|window| pollster::block_on(State::new(window, scene)));

        match state {
            Ok(state) => {
                log::info!("Surface created: {}x{}", state.size.width, state.size.height);
                state.window().request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("Failed to initialize renderer: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // Android destroys the native window while paused; the surface goes with it.
        if let Some(state) = self.state.take() {
            self.park(state);
            log::info!("Surface released");
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            if window_id == state.window().id() && !state.input(&event) {
                match event {
                    WindowEvent::CloseRequested
                    | WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                state: ElementState::Pressed,
                                physical_key: PhysicalKey::Code(KeyCode::Escape),
                                ..
                            },
                        ..
                    } => event_loop.exit(),
                    WindowEvent::Resized(physical_size) => {
                        log::info!("WindowEvent::Resized: {}x{}", physical_size.width, physical_size.height);
                        state.resize(physical_size);
                    }
                    WindowEvent::RedrawRequested => {
                        state.update();
                        match state.render() {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                state.resize(state.size)
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                log::error!("Out of memory, exiting");
                                event_loop.exit()
                            }
                            Err(e) => log::warn!("Render error: {:?}", e),
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window().request_redraw();
        }
    }
}

pub fn init_logger() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            let _ = console_log::init_with_level(log::Level::Info);
        } else {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or("info"),
            )
            .try_init();
        }
    }
}

/// Drives the spinning-cube scene on an existing event loop.
pub fn run_with(event_loop: EventLoop<()>, config: SceneConfig) -> anyhow::Result<()> {
    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with an error")
}

pub async fn run() -> anyhow::Result<()> {
    init_logger();

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    run_with(event_loop, SceneConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_reuses_parked_scene() {
        let mut app = App::new(SceneConfig::default());

        let mut scene = app.take_scene();
        scene.angle = 1.25;
        scene.paused = true;
        scene.camera.turn(0.5, 0.25);
        let camera = scene.camera;
        app.scene = Some(scene);

        let resumed = app.take_scene();
        assert_eq!(resumed.angle, 1.25);
        assert!(resumed.paused);
        assert_eq!(resumed.camera, camera);
        assert!(app.scene.is_none());
    }

    #[test]
    fn test_first_resume_builds_scene_from_config() {
        let mut app = App::new(SceneConfig {
            fov_y: 1.0,
            ..SceneConfig::default()
        });

        let scene = app.take_scene();
        assert_eq!(scene.angle, 0.0);
        assert_eq!(scene.camera.fov_y, 1.0);
    }
}
