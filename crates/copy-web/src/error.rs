use std::fmt;

/// A failed clipboard write. Logged where it happens, never surfaced to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard API on this page (insecure context or unsupported browser).
    Unavailable,
    /// The platform rejected the write; holds its reason verbatim.
    Rejected(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "clipboard API unavailable"),
            ClipboardError::Rejected(reason) => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for ClipboardError {}
