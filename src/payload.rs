//! Typed per-render inputs handed from the server to the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders a `<script type="application/json" id="page-payload">`
//! element holding flash messages, the session flag and optional config
//! overrides. `boot` reads it once and passes the pieces to each behavior, so
//! no behavior reaches for page globals.

use serde::Deserialize;
use web_sys::Document;

use crate::config::ChromeConfig;
use crate::error::ChromeError;

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

pub const PAYLOAD_ELEMENT_ID: &str = "page-payload";

/// One server flash message.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Message {
    /// Severity tag, used verbatim as the paragraph's CSS class.
    pub level_tag: String,
    pub message: String,
}

/// Session flag as the server reports it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Flag absent: the page does not care about login state.
    #[default]
    Unknown,
    Anonymous,
    Authenticated,
}

impl From<Option<bool>> for SessionState {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            None => Self::Unknown,
            Some(false) => Self::Anonymous,
            Some(true) => Self::Authenticated,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PagePayload {
    pub messages: Option<Vec<Message>>,
    /// `null` and a missing key both mean "unknown".
    pub the_user: Option<bool>,
    pub config: ChromeConfig,
}

impl PagePayload {
    /// Parse a payload from its JSON text. Blank text is an empty payload.
    pub fn parse(raw: &str) -> Result<Self, ChromeError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the payload element from `document`; a missing element is an empty payload.
    pub fn from_document(document: &Document) -> Result<Self, ChromeError> {
        let Some(el) = document.get_element_by_id(PAYLOAD_ELEMENT_ID) else {
            return Ok(Self::default());
        };
        Self::parse(&el.text_content().unwrap_or_default())
    }

    #[must_use]
    pub fn session(&self) -> SessionState {
        SessionState::from(self.the_user)
    }
}
