use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlCanvasElement, Window};

use super::webgl::WebGlContext;
use crate::camera::backing_size;
use crate::error::SetupError;
use crate::frame::Animator;
use crate::geometry::RhombusShape;
use crate::scene::SceneFrame;

pub const CANVAS_ID: &str = "webglCanvas";

/// Builds the scene on `#webglCanvas` and starts the animation-frame loop.
pub fn start() -> Result<(), SetupError> {
    let window = window().ok_or(SetupError::MissingWindow)?;
    let document = window.document().ok_or(SetupError::MissingDocument)?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or(SetupError::MissingElement(CANVAS_ID))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SetupError::MissingElement(CANVAS_ID))?;

    let gl = WebGlContext::new(canvas)?;
    let frame = SceneFrame::new(gl, RhombusShape::DEFAULT)?;

    let frame = Rc::new(RefCell::new(Animator::new(frame)));
    install_resize(&window, &frame)?;

    log::info!("monolith started on #{CANVAS_ID}");
    run_loop(&window, frame)
}

/// Matches the canvas backing store to the window, in device pixels.
fn resize(window: &Window, gl: &WebGlContext) {
    let css_w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let css_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    let canvas = gl.canvas();
    let (w, h) = backing_size(css_w, css_h, window.device_pixel_ratio());
    canvas.set_width(w);
    canvas.set_height(h);
    let style = canvas.style();
    style.set_property("width", &format!("{css_w}px")).ok();
    style.set_property("height", &format!("{css_h}px")).ok();
    gl.viewport(w, h);
}

type SharedAnimator = Rc<RefCell<Animator<SceneFrame<WebGlContext>>>>;

fn install_resize(window: &Window, frame: &SharedAnimator) -> Result<(), SetupError> {
    resize(window, &frame.borrow().body().gl);

    let resize_closure = {
        let window = window.clone();
        let frame = frame.clone();
        Closure::wrap(Box::new(move || {
            resize(&window, &frame.borrow().body().gl);
        }) as Box<dyn FnMut()>)
    };
    window
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
        .map_err(|e| SetupError::Dom(format!("{e:?}")))?;
    resize_closure.forget();
    Ok(())
}

/// Animation loop.
///
/// `f` holds the animation-frame closure so it can re-request itself; the
/// `Option` lets the closure be created first and then reference itself.
/// The loop stops only when the page stops delivering animation frames.
fn run_loop(window: &Window, frame: SharedAnimator) -> Result<(), SetupError> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let host = window.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame.borrow_mut().tick();

        // schedule next
        if let Some(cb) = f.borrow().as_ref() {
            if let Err(e) = host.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("request_animation_frame failed: {e:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    let first = g.borrow();
    let cb = first
        .as_ref()
        .ok_or(SetupError::ResourceAllocation("animation frame callback"))?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| SetupError::Dom(format!("{e:?}")))?;
    Ok(())
}
