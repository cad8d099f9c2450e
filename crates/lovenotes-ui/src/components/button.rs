//! Button Component
//!
//! One control for every action in the app, with presets for:
//! - Variant: solid, outline, ghost
//! - Size: small, medium, large, square icon

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled rose background, white text
    #[default]
    Solid,
    /// Rose border, transparent fill
    Outline,
    /// Text only, tinted on hover
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Solid => "btn-solid",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Button size presets
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    /// Square, for a lone glyph
    Icon,
}

impl ButtonSize {
    /// Returns the CSS class for this size
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

/// Submit-vs-button semantics
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

/// Full class list for a button.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let mut class = format!("btn {} {}", variant.class(), size.class());
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Run `fire` for one activation unless the button is disabled.
///
/// Returns whether it fired.
pub fn activate<F: FnOnce()>(disabled: bool, fire: F) -> bool {
    if disabled {
        return false;
    }
    fire();
    true
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Size preset
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub button_type: ButtonType,
    /// Accessible label overriding the visible content
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button.
///
/// A disabled button never calls `onclick`, even if the webview delivers
/// the click, and is rendered at half opacity.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         disabled: !session().can_go_back(),
///         onclick: move |_| session.write().prev(),
///         "Back"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.class.as_deref());
    let disabled = props.disabled;

    rsx! {
        button {
            class: "{full_class}",
            r#type: props.button_type.as_str(),
            "aria-label": props.aria_label.clone(),
            disabled: disabled,
            onclick: move |_| {
                activate(disabled, || {
                    if let Some(handler) = &props.onclick {
                        handler.call(());
                    }
                });
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Solid.class(), "btn-solid");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_size_classes() {
        assert_eq!(ButtonSize::Sm.class(), "btn-sm");
        assert_eq!(ButtonSize::Md.class(), "btn-md");
        assert_eq!(ButtonSize::Lg.class(), "btn-lg");
        assert_eq!(ButtonSize::Icon.class(), "btn-icon");
    }

    #[test]
    fn button_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Solid);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
        assert_eq!(ButtonType::default().as_str(), "button");
        assert_eq!(ButtonType::Submit.as_str(), "submit");
    }

    #[test]
    fn disabled_button_never_fires() {
        let calls = Cell::new(0);
        for _ in 0..3 {
            assert!(!activate(true, || calls.set(calls.get() + 1)));
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn enabled_button_fires_once_per_activation() {
        let calls = Cell::new(0);
        assert!(activate(false, || calls.set(calls.get() + 1)));
        assert_eq!(calls.get(), 1);
        assert!(activate(false, || calls.set(calls.get() + 1)));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn button_class_joins_extra() {
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Lg, Some("flex-1")),
            "btn btn-outline btn-lg flex-1"
        );
        assert_eq!(
            button_class(ButtonVariant::Solid, ButtonSize::Md, Some("")),
            "btn btn-solid btn-md"
        );
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Icon, None),
            "btn btn-ghost btn-icon"
        );
    }
}
