use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Document, Element, HtmlElement};

use crate::clouds::{CloudField, CloudHost, CloudStyle, CloudVariant, CLOUD_CLASS};
use crate::error::SetupError;

pub const CONTAINER_ID: &str = "canvas";

fn dom_err(e: wasm_bindgen::JsValue) -> SetupError {
    SetupError::Dom(format!("{e:?}"))
}

/// Clouds as absolutely positioned `div`s inside the container.
struct DomHost {
    document: Document,
    container: Element,
}

impl DomHost {
    fn apply(element: &HtmlElement, style: &CloudStyle) -> Result<(), SetupError> {
        let css = element.style();
        css.set_property("left", &style.left).map_err(dom_err)?;
        css.set_property("top", &style.top).map_err(dom_err)?;
        css.set_property("width", &style.width).map_err(dom_err)?;
        css.set_property("height", &style.height).map_err(dom_err)?;
        css.set_property("background-color", &style.background_color)
            .map_err(dom_err)?;
        Ok(())
    }
}

impl CloudHost for DomHost {
    type Element = HtmlElement;

    fn create(&mut self, style: &CloudStyle) -> Result<HtmlElement, SetupError> {
        let element = self
            .document
            .create_element("div")
            .map_err(dom_err)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SetupError::Dom("div is not an HtmlElement".to_string()))?;
        element.set_class_name(CLOUD_CLASS);
        Self::apply(&element, style)?;
        self.container.append_child(&element).map_err(dom_err)?;
        Ok(element)
    }

    fn restyle(&mut self, element: &HtmlElement, style: &CloudStyle) -> Result<(), SetupError> {
        Self::apply(element, style)
    }

    fn remove(&mut self, element: HtmlElement) {
        element.remove();
    }
}

type SharedField = Rc<RefCell<CloudField<DomHost, fn() -> f64>>>;

/// Populates `#canvas` and starts the redraw (and, for growing variants,
/// spawn) timers.
pub fn start(variant_name: &str) -> Result<(), SetupError> {
    let variant = CloudVariant::by_name(variant_name)?;
    let window = window().ok_or(SetupError::MissingWindow)?;
    let document = window.document().ok_or(SetupError::MissingDocument)?;
    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or(SetupError::MissingElement(CONTAINER_ID))?;

    let host = DomHost {
        document,
        container,
    };
    let random: fn() -> f64 = js_sys::Math::random;
    let field: SharedField = Rc::new(RefCell::new(CloudField::new(host, random, variant)));

    {
        let mut field = field.borrow_mut();
        field.populate()?;
        field.redraw()?;
    }

    every(&window, variant.redraw_ms, {
        let field = field.clone();
        move || {
            if let Err(err) = field.borrow_mut().redraw() {
                log::warn!("cloud redraw failed: {err}");
            }
        }
    })?;

    if let Some(spawn_ms) = variant.spawn_ms {
        every(&window, spawn_ms, {
            let field = field.clone();
            move || {
                if let Err(err) = field.borrow_mut().spawn() {
                    log::warn!("cloud spawn failed: {err}");
                }
            }
        })?;
    }

    log::info!("clouds started ({variant_name}) in #{CONTAINER_ID}");
    Ok(())
}

/// Repeating timer that lives as long as the page.
fn every(
    window: &web_sys::Window,
    millis: i32,
    callback: impl FnMut() + 'static,
) -> Result<(), SetupError> {
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis,
        )
        .map_err(dom_err)?;
    closure.forget();
    Ok(())
}
