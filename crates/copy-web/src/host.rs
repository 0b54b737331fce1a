//! Seams between the copy controller and the page it runs on.
//!
//! The browser implementations live in `dom` (hydrate feature); tests provide
//! their own with a simulated clock.

use futures::future::LocalBoxFuture;
use std::rc::Rc;
use std::time::Duration;

use crate::config::MAX_FEEDBACK_MS;
use crate::error::ClipboardError;

/// The rendered document, queried once at initialization.
pub trait Document {
    type Element: TriggerElement;

    /// All elements matching a CSS selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
}

/// An element the controller can bind to. Clones refer to the same element.
pub trait TriggerElement: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    /// False once the element has been removed from the document.
    fn is_connected(&self) -> bool;
    /// Register a handler for user activation (click).
    fn on_activate(&self, handler: Rc<dyn Fn()>);
}

/// Asynchronous "write text to the system clipboard".
pub trait Clipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>>;
}

/// The page's event loop.
pub trait Runtime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
    /// One-shot timer. No handle is returned; timers are never cancelled.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}

/// Developer-visible diagnostic channel.
pub trait Diagnostics {
    fn error(&self, message: &str);
}

/// Browser console under wasm, stderr elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn error(&self, message: &str) {
        leptos::logging::error!("{}", message);
    }
}

/// Platform services the controller needs besides the document.
#[derive(Clone)]
pub struct Platform {
    pub clipboard: Rc<dyn Clipboard>,
    pub runtime: Rc<dyn Runtime>,
    pub diagnostics: Rc<dyn Diagnostics>,
}

/// `document.readyState` before the content has been parsed.
pub fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Delay for a browser timer, capped where `setTimeout` stops honouring it.
pub fn timeout_millis(delay: Duration) -> u32 {
    let millis = delay.as_millis().min(u128::from(MAX_FEEDBACK_MS));
    u32::try_from(millis).unwrap_or(u32::MAX)
}
