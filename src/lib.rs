//! Browser-side behaviors for server-rendered pages.
//!
//! This crate is compiled to WebAssembly and loaded by every page. Each
//! behavior is independent and stateless across page views: it reads what the
//! server rendered (DOM plus the JSON page payload), mutates its own corner of
//! the document, and registers whatever event handlers it needs.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`bindings`] | `boot` and the other exported JS entry points |
//! | [`payload`] | Typed per-render inputs embedded by the server |
//! | [`config`] | Selectors and tuning constants |
//! | [`messages`] | Flash messages shown in a modal |
//! | [`session`] | Login-state fragments and login link return paths |
//! | [`section_nav`] | Section nav built from `h2` headings |
//! | [`slug`] | Anchor ids from heading text |
//! | [`scrollspy`] | Active-section rule for the section nav |
//! | [`affix`] | Pinning rule for the section nav |
//! | [`fixed_header`] | Floating header shown past the main heading |
//! | [`fade`] | Opacity fades |
//! | [`dimensions`] | Equalize sibling widths/heights |
//! | [`dom`] | Shared `web_sys` helpers |
//! | [`error`] | Error type |

pub mod affix;
pub mod bindings;
pub mod config;
pub mod dimensions;
pub mod dom;
pub mod error;
pub mod fade;
pub mod fixed_header;
pub mod messages;
pub mod payload;
pub mod scrollspy;
pub mod section_nav;
pub mod session;
pub mod slug;

pub use error::ChromeError;
