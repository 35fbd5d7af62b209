//! Opacity fades for show/hide transitions.
//!
//! [`Fade`] is the pure timing curve. [`Fader`] drives it against one element
//! with a `gloo_timers` interval; starting a new fade drops the previous
//! interval, so the most recent request always wins.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{HtmlElement, Window};

use crate::error::ChromeError;

#[cfg(test)]
#[path = "fade_test.rs"]
mod fade_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
}

impl Visibility {
    #[must_use]
    pub fn opacity(self) -> f64 {
        match self {
            Self::Hidden => 0.0,
            Self::Shown => 1.0,
        }
    }
}

/// Ease-in-out curve: slow start, fast middle, slow end.
#[must_use]
pub fn swing(progress: f64) -> f64 {
    0.5 - (progress.clamp(0.0, 1.0) * std::f64::consts::PI).cos() / 2.0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub from: f64,
    pub target: Visibility,
    pub duration_ms: f64,
}

impl Fade {
    #[must_use]
    pub fn new(from: f64, target: Visibility, duration_ms: f64) -> Self {
        Self { from: from.clamp(0.0, 1.0), target, duration_ms: duration_ms.max(0.0) }
    }

    #[must_use]
    pub fn opacity_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_done(elapsed_ms) {
            return self.target.opacity();
        }
        let eased = swing(elapsed_ms / self.duration_ms);
        self.from + (self.target.opacity() - self.from) * eased
    }

    #[must_use]
    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms
    }

    /// Whether an element at `from` opacity already sits at the target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.from - self.target.opacity()).abs() < f64::EPSILON
    }
}

/// Runs fades on a single element.
pub struct Fader {
    window: Window,
    el: HtmlElement,
    duration_ms: u32,
    tick_ms: u32,
    tick: Rc<RefCell<Option<Interval>>>,
}

impl Fader {
    #[must_use]
    pub fn new(window: Window, el: HtmlElement, duration_ms: u32, tick_ms: u32) -> Self {
        Self { window, el, duration_ms, tick_ms: tick_ms.max(1), tick: Rc::new(RefCell::new(None)) }
    }

    /// Stop any running fade.
    pub fn stop(&self) {
        self.tick.borrow_mut().take();
    }

    /// Stop any running fade and start one toward `target` from the current opacity.
    pub fn fade_to(&self, target: Visibility) -> Result<(), ChromeError> {
        self.stop();
        let displayed = self.is_displayed()?;
        let from = if displayed { self.current_opacity()? } else { 0.0 };
        let fade = Fade::new(from, target, f64::from(self.duration_ms));

        if target == Visibility::Hidden && !displayed {
            return Ok(());
        }
        if target == Visibility::Shown && !displayed {
            self.display()?;
        }
        if fade.is_settled() {
            return finish(&self.el, target);
        }
        set_opacity(&self.el, fade.from)?;

        let el = self.el.clone();
        let holder = Rc::clone(&self.tick);
        let started_ms = js_sys::Date::now();
        let interval = Interval::new(self.tick_ms, move || {
            let elapsed = js_sys::Date::now() - started_ms;
            let step = if fade.is_done(elapsed) {
                holder.borrow_mut().take();
                finish(&el, fade.target)
            } else {
                set_opacity(&el, fade.opacity_at(elapsed))
            };
            if let Err(err) = step {
                log::warn!("fade step failed: {err}");
            }
        });
        *self.tick.borrow_mut() = Some(interval);
        Ok(())
    }

    fn is_displayed(&self) -> Result<bool, ChromeError> {
        let Some(style) = self.window.get_computed_style(&self.el)? else {
            return Ok(true);
        };
        Ok(style.get_property_value("display")? != "none")
    }

    fn current_opacity(&self) -> Result<f64, ChromeError> {
        let Some(style) = self.window.get_computed_style(&self.el)? else {
            return Ok(1.0);
        };
        Ok(style.get_property_value("opacity")?.trim().parse::<f64>().unwrap_or(1.0))
    }

    /// Clear an inline `display: none`; fall back to `block` if the stylesheet hides it.
    fn display(&self) -> Result<(), ChromeError> {
        let style = self.el.style();
        style.remove_property("display")?;
        if !self.is_displayed()? {
            style.set_property("display", "block")?;
        }
        set_opacity(&self.el, 0.0)
    }
}

fn set_opacity(el: &HtmlElement, opacity: f64) -> Result<(), ChromeError> {
    el.style().set_property("opacity", &opacity.to_string())?;
    Ok(())
}

fn finish(el: &HtmlElement, target: Visibility) -> Result<(), ChromeError> {
    let style = el.style();
    match target {
        Visibility::Shown => {
            style.remove_property("opacity")?;
        }
        Visibility::Hidden => {
            style.set_property("display", "none")?;
            style.remove_property("opacity")?;
        }
    }
    Ok(())
}
