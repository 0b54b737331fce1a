//! Wires copy triggers to the clipboard.
//!
//! [`CopyController::init`] binds every matching element once. Each activation
//! reads the payload attribute, awaits the clipboard write, then either shows
//! the copied label for the feedback window or logs the failure.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CopyConfig;
use crate::error::ClipboardError;
use crate::feedback::{FeedbackTracker, RestoreTicket, TriggerId};
use crate::host::{Document, Platform, TriggerElement};

/// Result of one activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(ClipboardError),
    /// No trigger bound under that id.
    Unbound,
}

/// Cheap to clone; clones share the bound triggers and feedback state.
pub struct CopyController<E: TriggerElement> {
    inner: Rc<Inner<E>>,
}

struct Inner<E> {
    config: CopyConfig,
    triggers: Vec<E>,
    platform: Platform,
    feedback: RefCell<FeedbackTracker>,
}

impl<E: TriggerElement> Clone for CopyController<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: TriggerElement> CopyController<E> {
    /// Bind all triggers currently in `document`. Call once the document is interactive.
    /// A page without triggers yields a controller with nothing bound.
    pub fn init<D>(config: CopyConfig, document: &D, platform: Platform) -> Self
    where
        D: Document<Element = E>,
    {
        let triggers = document.query_all(&config.selector);
        let controller = Self {
            inner: Rc::new(Inner {
                config,
                triggers,
                platform,
                feedback: RefCell::new(FeedbackTracker::new()),
            }),
        };

        for (index, element) in controller.inner.triggers.iter().enumerate() {
            let id = TriggerId(index);
            // Listeners live as long as the page, so they own a handle.
            let handle = controller.clone();
            element.on_activate(Rc::new(move || {
                let controller = handle.clone();
                handle.inner.platform.runtime.spawn(Box::pin(async move {
                    controller.activate(id).await;
                }));
            }));
        }

        controller
    }

    /// Number of bound triggers.
    pub fn len(&self) -> usize {
        self.inner.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.triggers.is_empty()
    }

    pub fn trigger(&self, id: TriggerId) -> Option<&E> {
        self.inner.triggers.get(id.0)
    }

    /// Whether `id` is inside its feedback window.
    pub fn is_showing_feedback(&self, id: TriggerId) -> bool {
        self.inner.feedback.borrow().is_active(id)
    }

    /// Run the copy-and-feedback sequence for one trigger.
    pub async fn activate(&self, id: TriggerId) -> CopyOutcome {
        let Some(element) = self.trigger(id).cloned() else {
            return CopyOutcome::Unbound;
        };
        let config = &self.inner.config;

        // Missing attribute copies an empty string.
        let payload = element.attribute(&config.payload_attribute).unwrap_or_default();

        match self.inner.platform.clipboard.write_text(&payload).await {
            Ok(()) => {
                let ticket = self
                    .inner
                    .feedback
                    .borrow_mut()
                    .begin(id, element.text(), config.reactivation);
                element.set_text(&config.copied_label);
                self.schedule_restore(ticket);
                CopyOutcome::Copied
            }
            Err(e) => {
                self.inner
                    .platform
                    .diagnostics
                    .error(&format!("Failed to copy: {}", e));
                CopyOutcome::Failed(e)
            }
        }
    }

    fn schedule_restore(&self, ticket: RestoreTicket) {
        let controller = self.clone();
        self.inner.platform.runtime.set_timeout(
            self.inner.config.feedback_window(),
            Box::new(move || controller.restore(&ticket)),
        );
    }

    fn restore(&self, ticket: &RestoreTicket) {
        let label = self
            .inner
            .feedback
            .borrow_mut()
            .finish(ticket, self.inner.config.reactivation);

        let (Some(label), Some(element)) = (label, self.trigger(ticket.trigger)) else {
            return;
        };
        // Detached elements keep whatever they had.
        if element.is_connected() {
            element.set_text(&label);
        }
    }
}
