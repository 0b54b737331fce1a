//! The server-rendered button must carry what the controller looks for.

#[cfg(feature = "ssr")]
#[test]
fn copy_button_renders_trigger_contract() {
    use copy_web::components::CopyButton;
    use copy_web::config::{CopyConfig, PAYLOAD_ATTRIBUTE, TRIGGER_CLASS};
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    let html = owner.with(|| view! { <CopyButton text="https://example.com/x" label="Copy" /> }.to_html());

    assert!(html.contains("<button"), "got {}", html);
    assert!(html.contains(r#"type="button""#));
    assert!(html.contains(TRIGGER_CLASS));
    assert!(html.contains(&format!(r#"{}="https://example.com/x""#, PAYLOAD_ATTRIBUTE)));
    assert!(html.contains("Copy"));
    assert!(!html.contains("onclick"), "no inline script expected: {}", html);

    let config = CopyConfig::default();
    assert_eq!(config.selector, format!(".{}", TRIGGER_CLASS));
    assert_eq!(config.payload_attribute, PAYLOAD_ATTRIBUTE);
}
