//! Pinning rule for the section nav panel.
//!
//! The panel sits in flow near the top of the page, pins to the viewport once
//! the page header scrolls away, and unpins again before it would overlap the
//! footer. The offsets come from the panel's `data-offset-top` and
//! `data-offset-bottom` attributes.
//!
//! The rule is stateful in the same way Bootstrap 3 Affix is: the previous
//! position decides which edge is tested next. Once parked at the bottom the
//! panel re-pins only after the user scrolls back above the point where it
//! would sit when pinned.

use crate::scrollspy::ScrollMetrics;

#[cfg(test)]
#[path = "affix_test.rs"]
mod affix_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffixPosition {
    Top,
    Affixed,
    Bottom,
}

impl AffixPosition {
    pub const ALL: [Self; 3] = [Self::Top, Self::Affixed, Self::Bottom];

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Top => "affix-top",
            Self::Affixed => "affix",
            Self::Bottom => "affix-bottom",
        }
    }
}

/// Everything the pinning rule reads on one scroll or resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffixInput {
    pub metrics: ScrollMetrics,
    /// Panel's document top and border-box height as currently laid out.
    pub nav_top: f64,
    pub nav_height: f64,
    pub offset_top: f64,
    pub offset_bottom: Option<f64>,
    /// Position applied on the previous check; `None` before the first one.
    pub previous: Option<AffixPosition>,
    /// Viewport top of the panel while pinned, recorded when it parked at the bottom.
    pub unpin: Option<f64>,
}

#[must_use]
pub fn position(input: AffixInput) -> AffixPosition {
    let scroll_top = input.metrics.scroll_top;
    match input.previous {
        Some(AffixPosition::Top) => {
            return if scroll_top < input.offset_top { AffixPosition::Top } else { AffixPosition::Affixed };
        }
        Some(AffixPosition::Bottom) => {
            let pinned_at = input.unpin.unwrap_or(0.0);
            return if scroll_top + pinned_at <= input.nav_top {
                AffixPosition::Affixed
            } else {
                AffixPosition::Bottom
            };
        }
        Some(AffixPosition::Affixed) | None => {}
    }

    if scroll_top <= input.offset_top {
        return AffixPosition::Top;
    }
    // First check: the panel has not been placed yet, so the viewport stands in for it.
    let (collider_top, collider_height) = if input.previous.is_none() {
        (scroll_top, input.metrics.viewport_height)
    } else {
        (input.nav_top, input.nav_height)
    };
    match input.offset_bottom {
        Some(bottom) if collider_top + collider_height >= input.metrics.scroll_height - bottom => AffixPosition::Bottom,
        _ => AffixPosition::Affixed,
    }
}

/// Document top at which a bottom-parked panel rests.
#[must_use]
pub fn bottom_rest_top(scroll_height: f64, nav_height: f64, offset_bottom: f64) -> f64 {
    scroll_height - nav_height - offset_bottom
}

/// CSS `top` that moves a relatively positioned panel from `current_top` to `target_top`.
///
/// `css_top` is the panel's current computed `top` (0 for `auto`).
#[must_use]
pub fn relative_top(target_top: f64, current_top: f64, css_top: f64) -> f64 {
    target_top - current_top + css_top
}

/// Parse a `data-offset-*` attribute value.
#[must_use]
pub fn parse_offset(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().into_iter().find(|v| v.is_finite())
}
