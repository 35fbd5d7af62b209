//! Selectors and tuning constants shared by the page behaviors.
//!
//! Defaults match the markup the server templates emit. The page payload may
//! carry a partial `config` object; any field it omits keeps its default.

use serde::Deserialize;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SCROLLSPY_OFFSET_PX: f64 = 70.0;
pub const DEFAULT_FADE_DURATION_MS: u32 = 400;
pub const DEFAULT_FADE_TICK_MS: u32 = 13;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Class removed to reveal session-dependent fragments.
    pub hidden_class: String,
    pub anonymous_selector: String,
    pub logged_in_selector: String,
    pub login_link_selector: String,
    /// Query parameter carrying the post-login return path.
    pub next_param: String,
    /// Paths that never get a return-path parameter.
    pub no_redirect_paths: Vec<String>,
    pub nav_id: String,
    pub nav_xs_id: String,
    pub nav_text_attr: String,
    pub section_heading_selector: String,
    pub page_header_selector: String,
    pub scrollspy_offset_px: f64,
    pub fixed_header_id: String,
    pub primary_heading_selector: String,
    pub fade_duration_ms: u32,
    pub fade_tick_ms: u32,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            hidden_class: "hidden".to_owned(),
            anonymous_selector: ".if-anonymous".to_owned(),
            logged_in_selector: ".if-logged-in".to_owned(),
            login_link_selector: ".log-inout-link a".to_owned(),
            next_param: "next".to_owned(),
            no_redirect_paths: vec!["/".to_owned(), "/accounts/login".to_owned()],
            nav_id: "page-sections-nav".to_owned(),
            nav_xs_id: "page-sections-nav-xs".to_owned(),
            nav_text_attr: "data-nav-text".to_owned(),
            section_heading_selector: "h2".to_owned(),
            page_header_selector: "header".to_owned(),
            scrollspy_offset_px: DEFAULT_SCROLLSPY_OFFSET_PX,
            fixed_header_id: "page-fixed-header".to_owned(),
            primary_heading_selector: "h1".to_owned(),
            fade_duration_ms: DEFAULT_FADE_DURATION_MS,
            fade_tick_ms: DEFAULT_FADE_TICK_MS,
        }
    }
}

impl ChromeConfig {
    /// Whether login/logout links on `path` should carry a return-path parameter.
    #[must_use]
    pub fn redirects_back_from(&self, path: &str) -> bool {
        !self.no_redirect_paths.iter().any(|p| p == path)
    }
}
