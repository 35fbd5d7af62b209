//! Floating header that appears once the page's main heading scrolls away.
//!
//! Visibility is a pure function of the scroll position against one threshold,
//! the bottom edge of the first `h1`, measured once at startup. Every scroll
//! event restarts the fade toward the target state; nothing is debounced.

use std::rc::Rc;

use web_sys::{Document, Window};

use crate::config::ChromeConfig;
use crate::dom;
use crate::error::ChromeError;
use crate::fade::{Fader, Visibility};

#[cfg(test)]
#[path = "fixed_header_test.rs"]
mod fixed_header_test;

/// Target visibility for `scroll_top`: hidden above `threshold`, shown at or past it.
#[must_use]
pub fn visibility_for(scroll_top: f64, threshold: f64) -> Visibility {
    if scroll_top < threshold { Visibility::Hidden } else { Visibility::Shown }
}

/// Wire the fixed header in `document`.
///
/// No-op when the page has no fixed header or no primary heading.
pub fn make_fixed_header_in(window: &Window, document: &Document, config: &ChromeConfig) -> Result<(), ChromeError> {
    let Some(header) = dom::by_id(document, &config.fixed_header_id) else {
        return Ok(());
    };
    let Some(heading) = dom::query_one(document, &config.primary_heading_selector)? else {
        return Ok(());
    };
    let threshold = dom::document_top(window, &heading)? + dom::outer_height(&heading);
    log::debug!("fixed header: threshold {threshold}px");

    let fader = Rc::new(Fader::new(window.clone(), header.clone(), config.fade_duration_ms, config.fade_tick_ms));
    let scroll_window = window.clone();
    dom::listen(window, "scroll", move |_| {
        let step = dom::scroll_top(&scroll_window).and_then(|top| fader.fade_to(visibility_for(top, threshold)));
        if let Err(err) = step {
            log::warn!("fixed header: {err}");
        }
    })?;

    let body = document.body();
    dom::listen(&header, "click", move |_| {
        let Some(body) = &body else {
            return;
        };
        if let Err(err) = dom::smooth_scroll_to(body) {
            log::warn!("fixed header: scroll to top failed: {err}");
        }
    })
}

/// Wire the fixed header in the current document.
pub fn make_fixed_header(config: &ChromeConfig) -> Result<(), ChromeError> {
    let window = dom::window()?;
    let document = window.document().ok_or(ChromeError::NoDocument)?;
    make_fixed_header_in(&window, &document, config)
}
