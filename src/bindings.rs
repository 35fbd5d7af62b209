//! JavaScript entry points.
//!
//! `boot` runs every behavior once for the current page. The individual
//! functions are exported too so templates can run a single behavior, and
//! `set_css_to_maximum` can be re-run by page scripts after layout changes.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dimensions::{self, Axis};
use crate::dom;
use crate::error::ChromeError;
use crate::payload::PagePayload;
use crate::{fixed_header, messages, section_nav, session};

fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}

/// Read the page payload; an unreadable payload is logged and treated as empty.
fn load_payload() -> Result<PagePayload, ChromeError> {
    let document = dom::document()?;
    Ok(PagePayload::from_document(&document).unwrap_or_else(|err| {
        log::warn!("ignoring page payload: {err}");
        PagePayload::default()
    }))
}

fn run(name: &str, step: impl FnOnce() -> Result<(), ChromeError>) {
    if let Err(err) = step() {
        log::warn!("{name}: {err}");
    }
}

/// Run every page behavior once. Failures are logged and do not stop later behaviors.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    init_logging();
    let payload = load_payload()?;
    let config = &payload.config;
    run("messages", || messages::show_messages(payload.messages.as_deref()));
    run("session", || session::set_login_state(payload.session(), config));
    run("section nav", || section_nav::build_page_sections_nav(config));
    run("fixed header", || fixed_header::make_fixed_header(config));
    Ok(())
}

#[wasm_bindgen]
pub fn show_messages() -> Result<(), JsValue> {
    init_logging();
    let payload = load_payload()?;
    Ok(messages::show_messages(payload.messages.as_deref())?)
}

#[wasm_bindgen]
pub fn set_login_state() -> Result<(), JsValue> {
    init_logging();
    let payload = load_payload()?;
    Ok(session::set_login_state(payload.session(), &payload.config)?)
}

#[wasm_bindgen]
pub fn build_page_sections_nav() -> Result<(), JsValue> {
    init_logging();
    let payload = load_payload()?;
    Ok(section_nav::build_page_sections_nav(&payload.config)?)
}

#[wasm_bindgen]
pub fn make_fixed_header() -> Result<(), JsValue> {
    init_logging();
    let payload = load_payload()?;
    Ok(fixed_header::make_fixed_header(&payload.config)?)
}

/// Force every element in `elements` (an array or `NodeList`) to the largest
/// outer `property` (`"width"` or `"height"`). Returns the applied size.
#[wasm_bindgen]
pub fn set_css_to_maximum(elements: &JsValue, property: &str) -> Result<f64, JsValue> {
    let axis: Axis = property.parse()?;
    let elements: Vec<HtmlElement> = js_sys::Array::from(elements)
        .iter()
        .filter_map(|value| value.dyn_ref::<HtmlElement>().cloned())
        .collect();
    Ok(dimensions::set_css_to_maximum(&elements, axis)?)
}
