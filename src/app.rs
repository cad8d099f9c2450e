use dioxus::prelude::*;
use lovenotes_core::{NoteDeck, Session, SharedStore};

use crate::components::{HeartBackground, NoteViewer, PasswordGate};
use crate::context::{get_config, open_store};
use crate::theme::{FONTS_URL, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles, fonts, the note deck and the store, then shows
/// the gate while locked and the note viewer once unlocked. The heart
/// background is always mounted underneath.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_config);
    let deck = use_context_provider(NoteDeck::builtin);
    let store: SharedStore = use_context_provider(open_store);

    let mut session = use_signal(|| Session::restore(deck.len(), store.as_ref()));

    let shows_gate = session.read().shows_gate();

    rsx! {
        document::Link { rel: "stylesheet", href: "{FONTS_URL}" }
        style { {GLOBAL_STYLES} }
        div { class: "app-root",
            HeartBackground { count: config.particle_count }

            if shows_gate {
                PasswordGate {
                    on_unlock: move |_| {
                        if session.peek().shows_gate() {
                            session.write().unlock();
                        }
                    }
                }
            } else {
                NoteViewer { session }
            }
        }
    }
}
