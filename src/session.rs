//! Login-state dependent page fragments.
//!
//! Pages mark two mutually exclusive groups of elements hidden by default: one
//! for anonymous visitors and one for signed-in users. Once the session flag is
//! known exactly one group is revealed. Login/logout links also get a return
//! path so the user lands back on the current page.

use web_sys::Document;

use crate::config::ChromeConfig;
use crate::dom;
use crate::error::ChromeError;
use crate::payload::SessionState;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Selector of the group to reveal for `state`, if any.
#[must_use]
pub fn reveal_selector(state: SessionState, config: &ChromeConfig) -> Option<&str> {
    match state {
        SessionState::Unknown => None,
        SessionState::Anonymous => Some(config.anonymous_selector.as_str()),
        SessionState::Authenticated => Some(config.logged_in_selector.as_str()),
    }
}

/// Percent-encode `raw` the way `encodeURIComponent` does.
#[must_use]
pub fn encode_uri_component(raw: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        let keep = byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte);
        if keep {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0f)]));
        }
    }
    out
}

/// `href` with `param=<encoded path>` added to its query string.
///
/// Returns `None` when the query already carries `param`, so re-running the
/// rewrite leaves links unchanged. A `#fragment` stays at the end.
#[must_use]
pub fn with_return_path(href: &str, path: &str, param: &str) -> Option<String> {
    let (base, fragment) = match href.find('#') {
        Some(idx) => href.split_at(idx),
        None => (href, ""),
    };
    let query = base.split_once('?').map(|(_, q)| q);
    if let Some(query) = query {
        let present = query
            .split('&')
            .any(|pair| pair.split('=').next() == Some(param));
        if present {
            return None;
        }
    }
    let sep = match query {
        None => "?",
        Some("") => "",
        Some(_) => "&",
    };
    Some(format!("{base}{sep}{param}={}{fragment}", encode_uri_component(path)))
}

/// Reveal the group matching `state` and add return paths to login/logout links.
///
/// Does nothing for [`SessionState::Unknown`].
pub fn set_login_state_in(
    document: &Document,
    state: SessionState,
    path: &str,
    config: &ChromeConfig,
) -> Result<(), ChromeError> {
    let Some(selector) = reveal_selector(state, config) else {
        return Ok(());
    };
    for el in dom::query_all(document, selector)? {
        dom::remove_class(&el, &config.hidden_class)?;
    }

    if !config.redirects_back_from(path) {
        return Ok(());
    }
    let mut rewritten = 0usize;
    for link in dom::query_all(document, &config.login_link_selector)? {
        let href = link.get_attribute("href").unwrap_or_default();
        if let Some(next) = with_return_path(&href, path, &config.next_param) {
            link.set_attribute("href", &next)?;
            rewritten += 1;
        }
    }
    log::debug!("session {state:?}: rewrote {rewritten} login link(s) for {path}");
    Ok(())
}

/// Apply [`set_login_state_in`] to the current document and location.
pub fn set_login_state(state: SessionState, config: &ChromeConfig) -> Result<(), ChromeError> {
    let window = dom::window()?;
    let document = window.document().ok_or(ChromeError::NoDocument)?;
    let path = window.location().pathname()?;
    set_login_state_in(&document, state, &path, config)
}
