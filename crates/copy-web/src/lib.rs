//! Copy-to-clipboard buttons for server-rendered pages.
//!
//! The server renders [`components::CopyButton`]s; the wasm bundle binds every
//! `.copy-btn` element, copies its `data-url` on click and shows `Copied!` for
//! two seconds.

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod host;

#[cfg(feature = "hydrate")]
pub mod dom;

pub use config::{CopyConfig, ReactivationPolicy};
pub use controller::{CopyController, CopyOutcome};
pub use error::ClipboardError;
pub use feedback::TriggerId;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    dom::install();
}
