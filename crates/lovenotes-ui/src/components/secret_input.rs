//! Secret Input Component
//!
//! Password field with a show/hide toggle. Only the input's type and one
//! class change when toggled; the value is untouched.

use dioxus::prelude::*;

/// Input `type` for the current visibility.
pub fn input_type(revealed: bool) -> &'static str {
    if revealed {
        "text"
    } else {
        "password"
    }
}

/// Element id derived from the label, e.g. "Secret password" -> "secret-password".
pub fn field_id(label: &str) -> String {
    label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Properties for the SecretInput component
#[derive(Clone, PartialEq, Props)]
pub struct SecretInputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Accessible label, visually hidden; also names the input's id
    pub label: String,
}

/// Masked text input with an eye toggle.
///
/// # Example
///
/// ```rust,ignore
/// let mut pwd = use_signal(String::new);
///
/// rsx! {
///     SecretInput {
///         value: pwd(),
///         oninput: move |s| pwd.set(s),
///         label: "Secret password".to_string(),
///         placeholder: "Enter the secret password".to_string()
///     }
/// }
/// ```
#[component]
pub fn SecretInput(props: SecretInputProps) -> Element {
    let mut revealed = use_signal(|| false);
    let shown = revealed();
    let mask_class = if shown { "unmasked" } else { "masked" };
    let toggle_label = if shown { "Hide password" } else { "Show password" };
    let id = field_id(&props.label);

    rsx! {
        div { class: "secret-input",
            label { class: "sr-only", r#for: "{id}", "{props.label}" }
            input {
                id: "{id}",
                class: "secret-input-field {mask_class}",
                r#type: input_type(shown),
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                autocomplete: "off",
                oninput: move |e| props.oninput.call(e.value()),
            }
            button {
                class: "secret-input-toggle",
                r#type: "button",
                "aria-label": toggle_label,
                onclick: move |_| revealed.toggle(),
                if shown {
                    EyeOffIcon {}
                } else {
                    EyeIcon {}
                }
            }
        }
    }
}

#[component]
fn EyeIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z" }
            circle { cx: "12", cy: "12", r: "3" }
        }
    }
}

#[component]
fn EyeOffIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M9.88 9.88a3 3 0 1 0 4.24 4.24" }
            path { d: "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68" }
            path { d: "M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61" }
            line { x1: "2", x2: "22", y1: "2", y2: "22" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_type_follows_visibility() {
        assert_eq!(input_type(false), "password");
        assert_eq!(input_type(true), "text");
    }

    #[test]
    fn field_id_from_label() {
        assert_eq!(field_id("Secret password"), "secret-password");
        assert_eq!(field_id("  The  Secret, again! "), "the-secret-again");
        assert_eq!(field_id(""), "");
    }
}
