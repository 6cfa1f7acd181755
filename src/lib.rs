pub mod math;
pub mod mesh;
pub mod scene;

mod app;
mod app_state;
mod event_handler;
mod renderer;
mod state;
mod update_logic;
mod vertex;

// Re-export the main public interface
pub use app::{init_logger, run, run_with};
pub use vertex::Vertex;

// Re-export for WASM compatibility
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn start() {
    if let Err(e) = run().await {
        log::error!("{e:#}");
    }
}

#[cfg(target_os = "android")]
#[unsafe(no_mangle)]
fn android_main(app: winit::platform::android::activity::AndroidApp) {
    use winit::event_loop::EventLoop;
    use winit::platform::android::EventLoopBuilderExtAndroid;

    init_logger();

    let result = EventLoop::builder()
        .with_android_app(app)
        .build()
        .map_err(anyhow::Error::from)
        .and_then(|event_loop| run_with(event_loop, scene::SceneConfig::default()));

    if let Err(e) = result {
        log::error!("{e:#}");
    }
}
