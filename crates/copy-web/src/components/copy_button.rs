use leptos::prelude::*;

use crate::config::TRIGGER_CLASS;

/// A button the copy controller binds to on the client.
/// Renders the trigger class and `data-url` only; no inline script.
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: String,
    /// Button label (shown before copy)
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let class = format!(
        "{} px-3 py-1 border border-dashed border-[var(--rule)] hover:bg-[var(--rule)] transition-colors cursor-pointer",
        TRIGGER_CLASS
    );

    view! {
        <button type="button" class=class data-url=text>
            {label}
        </button>
    }
}
