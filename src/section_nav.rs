//! In-page section navigation built from the document's `h2` headings.
//!
//! ARCHITECTURE
//! ============
//! A single pass over the headings produces [`NavEntry`] descriptors (slug and
//! label). Each entry then becomes an anchor in two lists: the pinned nav that
//! tracks scroll position, and the compact nav shown on narrow screens. Both
//! anchors share one click behavior: smooth scroll to the heading and push the
//! fragment onto history without a page load.
//!
//! After the entries exist, the pinned nav is sized to its parent (again on
//! every resize), given its affix offsets, and driven by scrollspy: on every
//! scroll the entry for the section under the offset line gets `active`.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::affix::{self, AffixInput, AffixPosition};
use crate::config::ChromeConfig;
use crate::dom;
use crate::error::ChromeError;
use crate::scrollspy::{self, ScrollMetrics};
use crate::slug::slugify;

#[cfg(test)]
#[path = "section_nav_test.rs"]
mod section_nav_test;

pub const ACTIVE_CLASS: &str = "active";
pub const OFFSET_TOP_ATTR: &str = "data-offset-top";
pub const OFFSET_BOTTOM_ATTR: &str = "data-offset-bottom";

/// One navigation entry derived from a heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Position of the source heading in document order.
    pub index: usize,
    pub slug: String,
    pub label: String,
}

impl NavEntry {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.slug)
    }
}

/// Label shown in the nav: the override attribute when set, else the heading text.
#[must_use]
pub fn nav_label(text: &str, override_label: Option<&str>) -> String {
    match override_label {
        Some(label) if !label.is_empty() => label.to_owned(),
        _ => text.to_owned(),
    }
}

/// Build entries for headings given as `(text, override_label)` pairs.
#[must_use]
pub fn build_entries<'a, I>(headings: I) -> Vec<NavEntry>
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    headings
        .into_iter()
        .enumerate()
        .map(|(index, (text, override_label))| {
            let label = nav_label(text, override_label);
            NavEntry { index, slug: slugify(&label), label }
        })
        .collect()
}

/// Live handles the scroll and resize handlers work against.
struct PinnedNav {
    window: Window,
    document: Document,
    nav: HtmlElement,
    items: Vec<HtmlElement>,
    headings: Vec<HtmlElement>,
    spy_offset: f64,
    affixed: Cell<Option<AffixPosition>>,
    unpin: Cell<Option<f64>>,
}

impl PinnedNav {
    fn metrics(&self) -> Result<ScrollMetrics, ChromeError> {
        Ok(ScrollMetrics {
            scroll_top: dom::scroll_top(&self.window)?,
            scroll_height: dom::scroll_height(&self.document),
            viewport_height: dom::viewport_height(&self.window)?,
        })
    }

    fn sync_width(&self) -> Result<(), ChromeError> {
        let Some(parent) = self.nav.parent_element() else {
            return Ok(());
        };
        let width = dom::inner_width(&self.window, &parent)?;
        self.nav.style().set_property("width", &format!("{width}px"))?;
        Ok(())
    }

    fn spy(&self, metrics: ScrollMetrics) -> Result<(), ChromeError> {
        let mut samples = Vec::with_capacity(self.headings.len());
        for heading in &self.headings {
            samples.push((dom::document_top(&self.window, heading)?, dom::is_rendered(heading)));
        }
        let targets = scrollspy::targets(samples);
        let active = scrollspy::active_item(metrics, self.spy_offset, &targets);
        for (i, item) in self.items.iter().enumerate() {
            item.class_list().toggle_with_force(ACTIVE_CLASS, Some(i) == active)?;
        }
        Ok(())
    }

    fn pin(&self, metrics: ScrollMetrics) -> Result<(), ChromeError> {
        let offset_top = affix::parse_offset(self.nav.get_attribute(OFFSET_TOP_ATTR).as_deref()).unwrap_or(0.0);
        let offset_bottom = affix::parse_offset(self.nav.get_attribute(OFFSET_BOTTOM_ATTR).as_deref());
        let nav_height = dom::outer_height(&self.nav);
        let previous = self.affixed.get();
        let next = affix::position(AffixInput {
            metrics,
            nav_top: dom::document_top(&self.window, &self.nav)?,
            nav_height,
            offset_top,
            offset_bottom,
            previous,
            unpin: self.unpin.get(),
        });
        if previous == Some(next) {
            return Ok(());
        }

        let style = self.nav.style();
        if self.unpin.get().is_some() {
            style.remove_property("top")?;
        }
        let unpin = if next == AffixPosition::Bottom { Some(self.pinned_offset()?) } else { None };
        self.unpin.set(unpin);
        self.affixed.set(Some(next));
        let classes = self.nav.class_list();
        for pos in AffixPosition::ALL {
            classes.toggle_with_force(pos.class(), pos == next)?;
        }

        if let (AffixPosition::Bottom, Some(bottom)) = (next, offset_bottom) {
            self.park(affix::bottom_rest_top(metrics.scroll_height, nav_height, bottom))?;
        }
        Ok(())
    }

    /// Viewport top of the panel while it carries the pinned class.
    fn pinned_offset(&self) -> Result<f64, ChromeError> {
        let classes = self.nav.class_list();
        for pos in AffixPosition::ALL {
            classes.remove_1(pos.class())?;
        }
        classes.add_1(AffixPosition::Affixed.class())?;
        Ok(self.nav.get_bounding_client_rect().top())
    }

    /// Shift the panel to `target_top` in document coordinates.
    fn park(&self, target_top: f64) -> Result<(), ChromeError> {
        let style = self.nav.style();
        if dom::computed_value(&self.window, &self.nav, "position")? == "static" {
            style.set_property("position", "relative")?;
        }
        let current_top = dom::document_top(&self.window, &self.nav)?;
        let css_top = dom::computed_px(&self.window, &self.nav, "top")?;
        let top = affix::relative_top(target_top, current_top, css_top);
        style.set_property("top", &format!("{top}px"))?;
        Ok(())
    }

    fn on_scroll(&self) -> Result<(), ChromeError> {
        let metrics = self.metrics()?;
        self.spy(metrics)?;
        self.pin(metrics)
    }

    fn on_resize(&self) -> Result<(), ChromeError> {
        self.sync_width()?;
        self.pin(self.metrics()?)
    }
}

fn list_item(document: &Document, entry: &NavEntry) -> Result<(HtmlElement, Element), ChromeError> {
    let li = document.create_element("li")?;
    li.set_attribute("role", "presentation")?;
    let a = document.create_element("a")?;
    a.set_attribute("href", &entry.href())?;
    a.set_text_content(Some(&entry.label));
    li.append_child(&a)?;
    Ok((dom::as_html(li)?, a))
}

fn attach_click(anchor: &Element, heading: &HtmlElement, slug: &str) -> Result<(), ChromeError> {
    let heading = heading.clone();
    let fragment = format!("#{slug}");
    dom::listen(anchor, "click", move |event: Event| {
        event.prevent_default();
        if let Err(err) = dom::smooth_scroll_to(&heading) {
            log::warn!("section nav: scroll to {fragment} failed: {err}");
        }
        if let Err(err) = push_fragment(&fragment) {
            log::warn!("section nav: history push for {fragment} failed: {err}");
        }
    })
}

/// Push `fragment` onto history without navigating. Silently skipped if the History API is missing.
fn push_fragment(fragment: &str) -> Result<(), ChromeError> {
    let Ok(history) = dom::window()?.history() else {
        return Ok(());
    };
    history.push_state_with_url(&js_sys::Object::new(), "", Some(fragment))?;
    Ok(())
}

/// Build the section nav inside `document`.
///
/// No-op when the page has no nav container.
pub fn build_page_sections_nav_in(window: &Window, document: &Document, config: &ChromeConfig) -> Result<(), ChromeError> {
    let Some(nav) = dom::by_id(document, &config.nav_id) else {
        return Ok(());
    };
    let pinned_list = nav.query_selector("ul")?;
    let compact_list = match document.get_element_by_id(&config.nav_xs_id) {
        Some(xs) => xs.query_selector("ul")?,
        None => None,
    };

    let headings = dom::query_all(document, &config.section_heading_selector)?;
    let texts: Vec<(String, Option<String>)> = headings
        .iter()
        .map(|h| (h.text_content().unwrap_or_default(), h.get_attribute(&config.nav_text_attr)))
        .collect();
    let entries = build_entries(texts.iter().map(|(text, label)| (text.as_str(), label.as_deref())));

    let mut items = Vec::with_capacity(entries.len());
    for entry in &entries {
        let heading = &headings[entry.index];
        heading.set_id(&entry.slug);

        let (item, anchor) = list_item(document, entry)?;
        attach_click(&anchor, heading, &entry.slug)?;
        if let Some(list) = &pinned_list {
            list.append_child(&item)?;
        }
        items.push(item);

        if let Some(list) = &compact_list {
            let (xs_item, xs_anchor) = list_item(document, entry)?;
            attach_click(&xs_anchor, heading, &entry.slug)?;
            list.append_child(&xs_item)?;
        }
    }
    log::debug!("section nav: {} entries", entries.len());

    let pinned = Rc::new(PinnedNav {
        window: window.clone(),
        document: document.clone(),
        nav,
        items,
        headings,
        spy_offset: config.scrollspy_offset_px,
        affixed: Cell::new(None),
        unpin: Cell::new(None),
    });

    pinned.sync_width()?;
    let header_height = match dom::query_one(document, &config.page_header_selector)? {
        Some(header) => dom::inner_height(window, &header)?,
        None => 0.0,
    };
    pinned.nav.set_attribute(OFFSET_TOP_ATTR, &header_height.to_string())?;
    pinned.nav.set_attribute(OFFSET_BOTTOM_ATTR, &dom::inner_height(window, &pinned.nav)?.to_string())?;

    if let Some(body) = document.body() {
        body.style().set_property("position", "relative")?;
    }

    let on_resize = Rc::clone(&pinned);
    dom::listen(window, "resize", move |_| {
        if let Err(err) = on_resize.on_resize() {
            log::warn!("section nav: resize failed: {err}");
        }
    })?;
    let on_scroll = Rc::clone(&pinned);
    dom::listen(window, "scroll", move |_| {
        if let Err(err) = on_scroll.on_scroll() {
            log::warn!("section nav: scrollspy failed: {err}");
        }
    })?;
    pinned.on_scroll()
}

/// Build the section nav in the current document.
pub fn build_page_sections_nav(config: &ChromeConfig) -> Result<(), ChromeError> {
    let window = dom::window()?;
    let document = window.document().ok_or(ChromeError::NoDocument)?;
    build_page_sections_nav_in(&window, &document, config)
}
