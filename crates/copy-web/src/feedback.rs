//! Per-trigger feedback state.
//!
//! Each successful copy opens a feedback window on its trigger and hands out a
//! [`RestoreTicket`]. Timers are fire-and-forget, so a ticket that has been
//! superseded by a later activation simply resolves to nothing when it fires.

use std::collections::HashMap;

use crate::config::ReactivationPolicy;

/// Identity of a bound trigger: its position in bind order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
struct FeedbackState {
    /// Label to put back when the window closes.
    original: String,
    /// Generation of the ticket allowed to close the window.
    generation: u64,
}

/// Handed to the restore timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreTicket {
    pub trigger: TriggerId,
    pub generation: u64,
    /// Label captured by this activation.
    pub captured: String,
}

#[derive(Debug, Default)]
pub struct FeedbackTracker {
    states: HashMap<TriggerId, FeedbackState>,
    next_generation: u64,
}

impl FeedbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open (or re-open) the feedback window for `trigger`.
    ///
    /// `displayed` is the label on the element right now, which is the
    /// feedback label itself when the window is already open.
    pub fn begin(&mut self, trigger: TriggerId, displayed: String, policy: ReactivationPolicy) -> RestoreTicket {
        self.next_generation += 1;
        let generation = self.next_generation;

        let original = match (policy, self.states.get(&trigger)) {
            (ReactivationPolicy::PreserveOriginal, Some(open)) => open.original.clone(),
            _ => displayed.clone(),
        };
        self.states.insert(trigger, FeedbackState { original, generation });

        RestoreTicket { trigger, generation, captured: displayed }
    }

    /// Close the window for a fired ticket. Returns the label to restore.
    pub fn finish(&mut self, ticket: &RestoreTicket, policy: ReactivationPolicy) -> Option<String> {
        let is_latest = self
            .states
            .get(&ticket.trigger)
            .is_some_and(|s| s.generation == ticket.generation);

        match policy {
            ReactivationPolicy::PreserveOriginal => {
                if !is_latest {
                    return None;
                }
                self.states.remove(&ticket.trigger).map(|s| s.original)
            }
            ReactivationPolicy::Overwrite => {
                if is_latest {
                    self.states.remove(&ticket.trigger);
                }
                Some(ticket.captured.clone())
            }
        }
    }

    pub fn is_active(&self, trigger: TriggerId) -> bool {
        self.states.contains_key(&trigger)
    }

    pub fn original(&self, trigger: TriggerId) -> Option<&str> {
        self.states.get(&trigger).map(|s| s.original.as_str())
    }

    /// Number of triggers currently showing feedback.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: TriggerId = TriggerId(0);
    const B: TriggerId = TriggerId(1);

    #[test]
    fn single_window_restores_original() {
        let mut t = FeedbackTracker::new();
        let ticket = t.begin(A, "Copy".into(), ReactivationPolicy::PreserveOriginal);
        assert!(t.is_active(A));
        assert_eq!(t.original(A), Some("Copy"));

        assert_eq!(t.finish(&ticket, ReactivationPolicy::PreserveOriginal), Some("Copy".into()));
        assert!(t.is_empty());
    }

    #[test]
    fn preserve_keeps_first_label_and_ignores_stale_ticket() {
        let p = ReactivationPolicy::PreserveOriginal;
        let mut t = FeedbackTracker::new();
        let first = t.begin(A, "Copy".into(), p);
        let second = t.begin(A, "Copied!".into(), p);

        assert_eq!(t.original(A), Some("Copy"));
        assert_eq!(t.finish(&first, p), None);
        assert!(t.is_active(A));
        assert_eq!(t.finish(&second, p), Some("Copy".into()));
        assert!(!t.is_active(A));
    }

    #[test]
    fn overwrite_restores_each_captured_label() {
        let p = ReactivationPolicy::Overwrite;
        let mut t = FeedbackTracker::new();
        let first = t.begin(A, "Copy".into(), p);
        let second = t.begin(A, "Copied!".into(), p);

        assert_eq!(t.original(A), Some("Copied!"));
        assert_eq!(t.finish(&first, p), Some("Copy".into()));
        assert!(t.is_active(A));
        assert_eq!(t.finish(&second, p), Some("Copied!".into()));
        assert!(!t.is_active(A));
    }

    #[test]
    fn triggers_are_independent() {
        let p = ReactivationPolicy::PreserveOriginal;
        let mut t = FeedbackTracker::new();
        let a = t.begin(A, "Copy A".into(), p);
        let b = t.begin(B, "Copy B".into(), p);
        assert_eq!(t.len(), 2);

        assert_eq!(t.finish(&b, p), Some("Copy B".into()));
        assert_eq!(t.finish(&a, p), Some("Copy A".into()));
        assert!(t.is_empty());
    }
}
