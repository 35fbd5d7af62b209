//! Which section is "current" for a given scroll position.
//!
//! Mirrors the Bootstrap 3 scrollspy rule the section nav markup was written
//! against, so the highlighted entry does not change when the plugin goes away.

#[cfg(test)]
#[path = "scrollspy_test.rs"]
mod scrollspy_test;

/// Scroll geometry sampled on each scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// A section the spy can activate: its document top and the nav item it lights up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpyTarget {
    pub top: f64,
    pub item: usize,
}

/// Build spy targets from per-heading `(document_top, rendered)` samples.
///
/// Headings that are not rendered (`display: none` themselves or inside a
/// hidden group) are dropped, since their zero rect would report them at the
/// current scroll position. The rest are ordered by position, keeping the
/// index of the nav item each one belongs to.
#[must_use]
pub fn targets<I>(samples: I) -> Vec<SpyTarget>
where
    I: IntoIterator<Item = (f64, bool)>,
{
    let mut out: Vec<SpyTarget> = samples
        .into_iter()
        .enumerate()
        .filter(|(_, (_, rendered))| *rendered)
        .map(|(item, (top, _))| SpyTarget { top, item })
        .collect();
    out.sort_by(|a, b| a.top.total_cmp(&b.top));
    out
}

/// Nav item to mark active, given targets from [`targets`].
#[must_use]
pub fn active_item(metrics: ScrollMetrics, offset: f64, targets: &[SpyTarget]) -> Option<usize> {
    let tops: Vec<f64> = targets.iter().map(|t| t.top).collect();
    active_index(metrics, offset, &tops).map(|i| targets[i].item)
}

/// Index of the active section given the sections' document tops, in document order.
///
/// `None` before the first section is reached. At the bottom of the page the
/// last section wins even if its top never reaches the offset line.
#[must_use]
pub fn active_index(metrics: ScrollMetrics, offset: f64, section_tops: &[f64]) -> Option<usize> {
    if section_tops.is_empty() {
        return None;
    }
    let scroll = metrics.scroll_top + offset;
    let max_scroll = offset + metrics.scroll_height - metrics.viewport_height;
    if scroll >= max_scroll {
        return Some(section_tops.len() - 1);
    }
    if scroll < section_tops[0] {
        return None;
    }
    section_tops.iter().rposition(|top| *top <= scroll)
}
