//! Card Primitives
//!
//! A note card is a `CardShell` (paper, shadow, tape strip) wrapping a
//! `CardBody` (padding, ruled lines).

use dioxus::prelude::*;

fn with_extra(base: &str, extra: Option<&str>) -> String {
    match extra.filter(|e| !e.is_empty()) {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

/// Rounded paper card with a strip of washi tape across the top edge.
///
/// The ring and highlight overlays ignore the pointer so clicks reach the
/// card's content.
#[component]
pub fn CardShell(
    /// Extra CSS classes
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    let class = with_extra("card-shell", class.as_deref());

    rsx! {
        div { class: "{class}",
            div { class: "card-ring" }
            div { class: "card-highlight" }
            div { class: "card-tape" }
            {children}
        }
    }
}

/// Padded card content area on ruled paper.
#[component]
pub fn CardBody(
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    let class = with_extra("card-body", class.as_deref());

    rsx! {
        div { class: "{class}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_class_appended() {
        assert_eq!(with_extra("card-shell", Some("wide")), "card-shell wide");
        assert_eq!(with_extra("card-shell", Some("")), "card-shell");
        assert_eq!(with_extra("card-body", None), "card-body");
    }
}
