//! Copy-button configuration.
//!
//! Defaults match the markup rendered by [`crate::components::CopyButton`].
//! A page may override them with a JSON block:
//!
//! ```html
//! <script type="application/json" id="copy-config">{"feedback_ms": 1500}</script>
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::time::Duration;

/// Class marking an element as a copy trigger.
pub const TRIGGER_CLASS: &str = "copy-btn";

/// Attribute holding the text to copy.
pub const PAYLOAD_ATTRIBUTE: &str = "data-url";

/// Label shown while the feedback window is open.
pub const COPIED_LABEL: &str = "Copied!";

pub const FEEDBACK_MS: u64 = 2000;

/// Longest delay browsers honour in `setTimeout`; anything above fires at once.
pub const MAX_FEEDBACK_MS: u64 = i32::MAX as u64;

/// Id of the optional `<script type="application/json">` config element.
pub const CONFIG_ELEMENT_ID: &str = "copy-config";

/// What happens when a trigger is activated again while it still shows feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactivationPolicy {
    /// Keep the label saved by the first activation; only the latest timer restores it.
    #[default]
    PreserveOriginal,
    /// Every activation saves whatever is displayed, `Copied!` included, and each
    /// timer restores the label its own activation captured.
    Overwrite,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopyConfig {
    /// CSS selector used to find triggers at initialization.
    pub selector: String,
    pub payload_attribute: String,
    pub copied_label: String,
    pub feedback_ms: u64,
    pub reactivation: ReactivationPolicy,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            selector: format!(".{}", TRIGGER_CLASS),
            payload_attribute: PAYLOAD_ATTRIBUTE.to_string(),
            copied_label: COPIED_LABEL.to_string(),
            feedback_ms: FEEDBACK_MS,
            reactivation: ReactivationPolicy::default(),
        }
    }
}

impl CopyConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse copy config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.selector.trim().is_empty() {
            bail!("copy config: selector must not be empty");
        }
        if self.payload_attribute.trim().is_empty() {
            bail!("copy config: payload_attribute must not be empty");
        }
        if self.feedback_ms == 0 {
            bail!("copy config: feedback_ms must be positive");
        }
        if self.feedback_ms > MAX_FEEDBACK_MS {
            bail!("copy config: feedback_ms must be at most {}", MAX_FEEDBACK_MS);
        }
        Ok(())
    }

    pub fn feedback_window(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }
}
