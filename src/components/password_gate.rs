//! Password gate - the only way in.
//!
//! A wrong password shows an inline message and keeps the input so the
//! visitor can fix a typo. Retries are unlimited.

use dioxus::prelude::*;
use lovenotes_core::{gate, Gate, MISMATCH_MESSAGE};
use lovenotes_ui::{Button, ButtonType, CardBody, CardShell, SecretInput};

use super::LockIcon;
use crate::context::use_store;

/// Gate card.
///
/// Calls `on_unlock` after a correct password, or straight away at mount
/// when the unlock flag is already stored.
#[component]
pub fn PasswordGate(on_unlock: EventHandler<()>) -> Element {
    let store = use_store();
    let gate = use_hook(Gate::default);
    let mut pwd = use_signal(String::new);
    let mut error: Signal<Option<&'static str>> = use_signal(|| None);

    // Returning visitor: skip the form
    let mount_store = store.clone();
    use_effect(move || {
        if gate::is_unlocked(mount_store.as_ref()) {
            tracing::debug!("Unlock flag present at gate mount");
            on_unlock.call(());
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match gate.submit(store.as_ref(), &pwd.read()) {
            Ok(()) => on_unlock.call(()),
            Err(_) => error.set(Some(MISMATCH_MESSAGE)),
        }
    };

    rsx! {
        div { class: "screen",
            div { class: "screen-center",
                div { class: "gate-card rise-in",
                    CardShell {
                        CardBody {
                            div { class: "gate-content",
                                div { class: "gate-caption",
                                    LockIcon {}
                                    span { "only you can open this" }
                                }
                                h2 { class: "gate-title handwriting", "It’s a secret just for you 💞" }
                                form { class: "gate-form", onsubmit: submit,
                                    SecretInput {
                                        value: pwd(),
                                        oninput: move |s| pwd.set(s),
                                        label: "Secret password".to_string(),
                                        placeholder: "Enter the secret password".to_string(),
                                    }
                                    if let Some(message) = error() {
                                        div { class: "gate-error", role: "alert", "{message}" }
                                    }
                                    Button {
                                        class: "w-full".to_string(),
                                        button_type: ButtonType::Submit,
                                        "Unlock"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
