use super::*;

#[test]
fn distinct_headings_get_slugs_and_fragment_hrefs() {
    let entries = build_entries([("Getting Started", None), ("FAQ", None)]);
    let slugs: Vec<_> = entries.iter().map(|e| e.slug.as_str()).collect();
    let hrefs: Vec<_> = entries.iter().map(NavEntry::href).collect();
    assert_eq!(slugs, vec!["gettingstarted", "faq"]);
    assert_eq!(hrefs, vec!["#gettingstarted".to_owned(), "#faq".to_owned()]);
}

#[test]
fn override_label_wins_over_heading_text() {
    let entries = build_entries([("Frequently Asked Questions", Some("FAQ"))]);
    assert_eq!(entries[0].label, "FAQ");
    assert_eq!(entries[0].slug, "faq");
}

#[test]
fn empty_override_falls_back_to_text() {
    assert_eq!(nav_label("Pricing", Some("")), "Pricing");
    assert_eq!(nav_label("Pricing", None), "Pricing");
}

#[test]
fn entries_keep_document_order_indices() {
    let entries = build_entries([("One", None), ("Two", None), ("Three", None)]);
    let indices: Vec<_> = entries.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn colliding_headings_share_a_slug() {
    let entries = build_entries([("Q & A", None), ("QA", None)]);
    assert_eq!(entries[0].slug, entries[1].slug);
    assert_eq!(entries.len(), 2);
}

#[test]
fn no_headings_no_entries() {
    assert!(build_entries(std::iter::empty()).is_empty());
}
