//! Flash message display.
//!
//! The server hands over an ordered list of flash messages; when the list is
//! non-empty they are rendered as one paragraph each inside a container and
//! shown through the page's modal. Messages are discarded afterwards.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::dom;
use crate::error::ChromeError;
use crate::payload::Message;

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

/// Global function the page may define to present modal errors.
pub const MODAL_FUNCTION: &str = "show_modal_error";
pub const FALLBACK_MODAL_CLASS: &str = "page-chrome-modal";

/// One rendered message line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paragraph {
    pub class: String,
    pub text: String,
}

/// Paragraphs to render, or `None` when there is nothing to show.
#[must_use]
pub fn paragraphs(messages: Option<&[Message]>) -> Option<Vec<Paragraph>> {
    let messages = messages.filter(|m| !m.is_empty())?;
    Some(
        messages
            .iter()
            .map(|m| Paragraph { class: m.level_tag.clone(), text: m.message.clone() })
            .collect(),
    )
}

/// Presents a modal dialog with a title and a body element.
pub trait ModalPresenter {
    fn show(&self, title: &str, body: &Element) -> Result<(), ChromeError>;
}

/// Uses the page's `show_modal_error(title, body)` when defined, else a minimal built-in overlay.
pub struct PageModal {
    document: Document,
}

impl PageModal {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn show_fallback(&self, title: &str, body: &Element) -> Result<(), ChromeError> {
        let Some(root) = self.document.body() else {
            return Ok(());
        };
        let overlay = self.document.create_element("div")?;
        overlay.set_class_name(FALLBACK_MODAL_CLASS);
        overlay.set_attribute("role", "dialog")?;
        if !title.is_empty() {
            let heading = self.document.create_element("h4")?;
            heading.set_text_content(Some(title));
            overlay.append_child(&heading)?;
        }
        overlay.append_child(body)?;
        root.append_child(&overlay)?;

        let dismiss = overlay.clone();
        dom::listen(&overlay, "click", move |_| dismiss.remove())
    }
}

impl ModalPresenter for PageModal {
    fn show(&self, title: &str, body: &Element) -> Result<(), ChromeError> {
        let window = dom::window()?;
        let hook = js_sys::Reflect::get(&window, &JsValue::from_str(MODAL_FUNCTION))?;
        match hook.dyn_ref::<js_sys::Function>() {
            Some(func) => {
                func.call2(&JsValue::NULL, &JsValue::from_str(title), body)?;
                Ok(())
            }
            None => {
                log::debug!("{MODAL_FUNCTION} not defined; using built-in overlay");
                self.show_fallback(title, body)
            }
        }
    }
}

/// Render `messages` into a container and hand it to `presenter`.
///
/// No-op for an absent or empty list.
pub fn show_messages_in(
    document: &Document,
    messages: Option<&[Message]>,
    presenter: &dyn ModalPresenter,
) -> Result<(), ChromeError> {
    let Some(lines) = paragraphs(messages) else {
        return Ok(());
    };
    let container = document.create_element("div")?;
    for line in &lines {
        let p = document.create_element("p")?;
        p.set_class_name(&line.class);
        p.set_text_content(Some(&line.text));
        container.append_child(&p)?;
    }
    log::debug!("showing {} flash message(s)", lines.len());
    presenter.show("", &container)
}

/// Show `messages` in the page's modal.
pub fn show_messages(messages: Option<&[Message]>) -> Result<(), ChromeError> {
    let document = dom::document()?;
    let presenter = PageModal::new(document.clone());
    show_messages_in(&document, messages, &presenter)
}
