//! Browser implementations of the host seams (hydrate only).

use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;

use crate::config::{CONFIG_ELEMENT_ID, CopyConfig};
use crate::controller::CopyController;
use crate::error::ClipboardError;
use crate::host::{
    Clipboard, ConsoleDiagnostics, Document, Platform, Runtime, TriggerElement, is_loading, timeout_millis,
};

// ── Document & elements ──────────────────────────────────────────────────────

pub struct WebDocument(pub web_sys::Document);

impl Document for WebDocument {
    type Element = DomTrigger;

    fn query_all(&self, selector: &str) -> Vec<DomTrigger> {
        let Ok(nodes) = self.0.query_selector_all(selector) else {
            leptos::logging::error!("Invalid copy trigger selector: {}", selector);
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(DomTrigger)
            .collect()
    }
}

#[derive(Clone)]
pub struct DomTrigger(pub web_sys::Element);

impl TriggerElement for DomTrigger {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn is_connected(&self) -> bool {
        self.0.is_connected()
    }

    fn on_activate(&self, handler: Rc<dyn Fn()>) {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| handler());
        if let Err(e) = self
            .0
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            leptos::logging::error!("Failed to bind copy trigger: {}", describe_js(&e));
        }
        // Listener lives for the rest of the page
        callback.forget();
    }
}

// ── Clipboard ────────────────────────────────────────────────────────────────

/// `navigator.clipboard.writeText`.
pub struct NavigatorClipboard;

impl Clipboard for NavigatorClipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>> {
        // Absent outside secure contexts, so look it up instead of assuming it.
        let clipboard = web_sys::window()
            .map(|w| w.navigator())
            .and_then(|nav| js_sys::Reflect::get(&nav, &JsValue::from_str("clipboard")).ok())
            .filter(|c| !c.is_undefined() && !c.is_null())
            .map(|c| c.unchecked_into::<web_sys::Clipboard>());

        let Some(clipboard) = clipboard else {
            return Box::pin(async { Err(ClipboardError::Unavailable) });
        };

        let promise = clipboard.write_text(text);
        Box::pin(async move {
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Rejected(describe_js(&e)))
        })
    }
}

/// Render a JS rejection reason the way the console would show it.
fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.to_string());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// ── Event loop ───────────────────────────────────────────────────────────────

pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(timeout_millis(delay), callback).forget();
    }
}

// ── Bootstrapping ────────────────────────────────────────────────────────────

/// Read the page's JSON override, falling back to defaults.
fn load_config(document: &web_sys::Document) -> CopyConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return CopyConfig::default();
    };

    CopyConfig::from_json(&json).unwrap_or_else(|e| {
        leptos::logging::error!("{:#}; using defaults", e);
        CopyConfig::default()
    })
}

fn bind(document: &web_sys::Document) {
    let platform = Platform {
        clipboard: Rc::new(NavigatorClipboard),
        runtime: Rc::new(BrowserRuntime),
        diagnostics: Rc::new(ConsoleDiagnostics),
    };
    let controller = CopyController::init(load_config(document), &WebDocument(document.clone()), platform);
    leptos::logging::log!("[copy] bound {} trigger(s)", controller.len());
}

/// Bind copy triggers once the document's content has loaded.
pub fn install() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        leptos::logging::error!("[copy] no document; copy buttons disabled");
        return;
    };

    if !is_loading(&document.ready_state()) {
        bind(&document);
        return;
    }

    let target = document.clone();
    let on_ready = Closure::once_into_js(move || bind(&target));
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        leptos::logging::error!("[copy] failed to wait for DOMContentLoaded: {}", describe_js(&e));
    }
}
