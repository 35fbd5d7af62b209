//! Thin `web_sys` helpers shared by the page behaviors.
//!
//! Everything here touches the live document, so it only runs in the browser.
//! The decision logic each behavior needs lives in its own module as plain
//! functions over numbers and strings.

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

use crate::error::ChromeError;

pub fn window() -> Result<Window, ChromeError> {
    web_sys::window().ok_or(ChromeError::NoWindow)
}

pub fn document() -> Result<Document, ChromeError> {
    window()?.document().ok_or(ChromeError::NoDocument)
}

/// All elements in `document` matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, ChromeError> {
    Ok(html_elements(&document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, ChromeError> {
    Ok(html_elements(&root.query_selector_all(selector)?))
}

/// First element in `document` matching `selector`.
pub fn query_one(document: &Document, selector: &str) -> Result<Option<HtmlElement>, ChromeError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned()))
}

pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
}

/// Narrow a freshly created element to `HtmlElement`.
pub fn as_html(el: Element) -> Result<HtmlElement, ChromeError> {
    el.dyn_into::<HtmlElement>()
        .map_err(|el| ChromeError::Dom(format!("<{}> is not an HTML element", el.tag_name())))
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

/// Current vertical scroll offset of the window.
pub fn scroll_top(window: &Window) -> Result<f64, ChromeError> {
    Ok(window.scroll_y()?)
}

pub fn viewport_height(window: &Window) -> Result<f64, ChromeError> {
    Ok(window.inner_height()?.as_f64().unwrap_or(0.0))
}

/// Full scrollable height of the document.
pub fn scroll_height(document: &Document) -> f64 {
    let body = document.body().map_or(0, |b| b.scroll_height());
    let root = document.document_element().map_or(0, |el| el.scroll_height());
    f64::from(body.max(root))
}

/// Distance from the top of the document to the top of `el`.
pub fn document_top(window: &Window, el: &Element) -> Result<f64, ChromeError> {
    Ok(el.get_bounding_client_rect().top() + scroll_top(window)?)
}

/// Border-box height of `el`.
pub fn outer_height(el: &Element) -> f64 {
    el.get_bounding_client_rect().height()
}

/// Content-box width of `el` (excludes padding).
pub fn inner_width(window: &Window, el: &Element) -> Result<f64, ChromeError> {
    content_size(window, el, f64::from(el.client_width()), "padding-left", "padding-right")
}

/// Content-box height of `el` (excludes padding and border).
pub fn inner_height(window: &Window, el: &Element) -> Result<f64, ChromeError> {
    content_size(window, el, f64::from(el.client_height()), "padding-top", "padding-bottom")
}

fn content_size(window: &Window, el: &Element, client: f64, leading: &str, trailing: &str) -> Result<f64, ChromeError> {
    let Some(style) = window.get_computed_style(el)? else {
        return Ok(client);
    };
    let padding = px_value(&style.get_property_value(leading)?) + px_value(&style.get_property_value(trailing)?);
    Ok((client - padding).max(0.0))
}

/// Computed value of a pixel-valued CSS property; `auto` and other keywords read as 0.
pub fn computed_px(window: &Window, el: &Element, property: &str) -> Result<f64, ChromeError> {
    let Some(style) = window.get_computed_style(el)? else {
        return Ok(0.0);
    };
    Ok(px_value(&style.get_property_value(property)?))
}

pub fn computed_value(window: &Window, el: &Element, property: &str) -> Result<String, ChromeError> {
    let Some(style) = window.get_computed_style(el)? else {
        return Ok(String::new());
    };
    Ok(style.get_property_value(property)?)
}

/// Whether `el` generates any layout box (false for `display: none` and its descendants).
pub fn is_rendered(el: &Element) -> bool {
    el.get_client_rects().length() > 0
}

fn px_value(raw: &str) -> f64 {
    raw.trim().trim_end_matches("px").parse::<f64>().unwrap_or(0.0)
}

/// Smoothly scroll the window so the top of `target` sits at the top of the viewport.
pub fn smooth_scroll_to(target: &Element) -> Result<(), ChromeError> {
    let window = window()?;
    let top = document_top(&window, target)?;
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
    Ok(())
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ChromeError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

pub fn remove_class(el: &Element, class: &str) -> Result<(), ChromeError> {
    Ok(el.class_list().remove_1(class)?)
}
