//! Generative-art sketches for the browser: a WebGL "cosmic monolith"
//! (nebula backdrop and a rotating rhombus) and DOM colour clouds.
//!
//! Geometry, matrices, the frame clock and cloud sampling are plain Rust and
//! build on every target. Browser wiring is only compiled for wasm32.

pub mod camera;
pub mod clouds;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod gfx;
pub mod scene;
pub mod shaders;

pub use error::SetupError;

#[cfg(target_arch = "wasm32")]
pub use wasm::{start_clouds, start_monolith};

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod clouds;
    mod render;
    mod webgl;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
    }

    /// Starts the monolith on `<canvas id="webglCanvas">`.
    #[wasm_bindgen]
    pub fn start_monolith() -> Result<(), JsValue> {
        render::start().map_err(|err| {
            log::error!("monolith setup failed: {err}");
            JsValue::from(err)
        })
    }

    /// Starts the cloud animator in `<div id="canvas">`. `variant` is
    /// `"calm"` or `"drifting"`.
    #[wasm_bindgen]
    pub fn start_clouds(variant: &str) -> Result<(), JsValue> {
        clouds::start(variant).map_err(|err| {
            log::error!("cloud setup failed: {err}");
            JsValue::from(err)
        })
    }
}
