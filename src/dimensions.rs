//! Equalize the width or height of a set of sibling elements.
//!
//! Sizes are measured as border boxes, so padding and borders count toward the
//! maximum. Any size forced by an earlier call is cleared before measuring,
//! which makes the operation safe to repeat after content or viewport changes.

use std::str::FromStr;

use web_sys::HtmlElement;

use crate::error::ChromeError;

#[cfg(test)]
#[path = "dimensions_test.rs"]
mod dimensions_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    /// CSS property for this axis.
    #[must_use]
    pub fn property(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    fn outer_size(self, el: &HtmlElement) -> f64 {
        let rect = el.get_bounding_client_rect();
        match self {
            Self::Width => rect.width(),
            Self::Height => rect.height(),
        }
    }
}

impl FromStr for Axis {
    type Err = ChromeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "width" => Ok(Self::Width),
            "height" => Ok(Self::Height),
            other => Err(ChromeError::UnsupportedProperty(other.to_owned())),
        }
    }
}

/// Largest of `sizes`; 0 when empty.
#[must_use]
pub fn max_extent<I>(sizes: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    sizes.into_iter().fold(0.0, f64::max)
}

/// CSS value every element receives.
#[must_use]
pub fn forced_value(max: f64) -> String {
    format!("{max}px")
}

/// Reset `elements` to automatic size on `axis`, measure, and force all to the maximum.
///
/// Returns the maximum applied.
pub fn set_css_to_maximum(elements: &[HtmlElement], axis: Axis) -> Result<f64, ChromeError> {
    let property = axis.property();
    for el in elements {
        el.style().set_property(property, "auto")?;
    }
    let max = max_extent(elements.iter().map(|el| axis.outer_size(el)));
    let value = forced_value(max);
    for el in elements {
        el.style().set_property(property, &value)?;
    }
    Ok(max)
}
