use super::*;

fn at(scroll_top: f64) -> ScrollMetrics {
    ScrollMetrics { scroll_top, scroll_height: 5000.0, viewport_height: 800.0 }
}

const TOPS: [f64; 3] = [400.0, 1200.0, 2600.0];

#[test]
fn nothing_active_above_first_section() {
    assert_eq!(active_index(at(0.0), 70.0, &TOPS), None);
    assert_eq!(active_index(at(329.0), 70.0, &TOPS), None);
}

#[test]
fn section_activates_when_top_crosses_offset_line() {
    assert_eq!(active_index(at(330.0), 70.0, &TOPS), Some(0));
    assert_eq!(active_index(at(1129.0), 70.0, &TOPS), Some(0));
    assert_eq!(active_index(at(1130.0), 70.0, &TOPS), Some(1));
    assert_eq!(active_index(at(3000.0), 70.0, &TOPS), Some(2));
}

#[test]
fn bottom_of_page_activates_last_section() {
    let metrics = ScrollMetrics { scroll_top: 1400.0, scroll_height: 2200.0, viewport_height: 800.0 };
    assert_eq!(active_index(metrics, 70.0, &TOPS), Some(2));
}

#[test]
fn no_sections_means_nothing_active() {
    assert_eq!(active_index(at(1000.0), 70.0, &[]), None);
}

#[test]
fn repeated_identical_positions_agree() {
    let first = active_index(at(1500.0), 70.0, &TOPS);
    assert_eq!(active_index(at(1500.0), 70.0, &TOPS), first);
}

#[test]
fn hidden_heading_does_not_steal_active() {
    let samples = [(400.0, true), (500.0, false), (2600.0, true)];
    let spy = targets(samples);
    assert_eq!(spy.len(), 2);
    assert_eq!(active_item(at(500.0), 70.0, &spy), Some(0));
    assert_eq!(active_item(at(2600.0), 70.0, &spy), Some(2));
}

#[test]
fn targets_are_ordered_by_position_and_keep_their_item() {
    let spy = targets([(1200.0, true), (400.0, true), (2600.0, true)]);
    let items: Vec<_> = spy.iter().map(|t| t.item).collect();
    assert_eq!(items, vec![1, 0, 2]);
    assert_eq!(active_item(at(400.0), 70.0, &spy), Some(1));
    assert_eq!(active_item(at(1200.0), 70.0, &spy), Some(0));
}

#[test]
fn all_hidden_means_nothing_active() {
    assert_eq!(active_item(at(1000.0), 70.0, &targets([(400.0, false)])), None);
}
