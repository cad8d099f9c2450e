//! Note viewer - one card at a time, with progress and navigation.

use dioxus::prelude::*;
use lovenotes_core::{Marker, Move, PrimaryAction, Session};
use lovenotes_ui::{Button, ButtonVariant, CardBody, CardShell};

use super::{ProgressDots, SparklesIcon};
use crate::context::use_deck;

/// Enter animation for the incoming card after `last_move`.
///
/// Forward moves rise from below, backward moves drop from above. The very
/// first card appears without animation.
fn enter_class(last_move: Move) -> &'static str {
    match last_move {
        Move::None => "",
        Move::Forward | Move::Restart => "enter-from-below",
        Move::Backward => "enter-from-above",
    }
}

/// Exit animation for the outgoing card; the mirror of `enter_class`.
fn exit_class(last_move: Move) -> &'static str {
    match last_move {
        Move::None => "",
        Move::Forward | Move::Restart => "exit-to-above",
        Move::Backward => "exit-to-below",
    }
}

fn primary_label(action: PrimaryAction) -> &'static str {
    match action {
        PrimaryAction::Next => "Next",
        PrimaryAction::Again => "Again 💖",
    }
}

#[component]
fn ViewerHeader() -> Element {
    rsx! {
        header { class: "viewer-header",
            div { class: "viewer-header-inner",
                div { class: "sparkle-badge", SparklesIcon {} }
                div { class: "viewer-heading",
                    p { class: "viewer-kicker", "for my favorite person" }
                    h1 { class: "viewer-title", "I Love You" }
                }
                div { class: "sparkle-badge", SparklesIcon {} }
            }
        }
    }
}

/// A single note card. Keyed so each move remounts it and replays its
/// animation.
#[component]
fn NoteCard(
    text: String,
    motion: &'static str,
    /// Set on the outgoing card; fires once its exit animation ends
    #[props(default)]
    on_exited: Option<EventHandler<()>>,
) -> Element {
    let leaving = on_exited.is_some();

    rsx! {
        div {
            class: "note-card {motion}",
            "aria-hidden": leaving,
            onanimationend: move |_| {
                if let Some(handler) = &on_exited {
                    handler.call(());
                }
            },
            CardShell {
                CardBody {
                    p { class: "note-text handwriting", "{text}" }
                }
            }
        }
    }
}

/// Paginated view over the deck, driven by the shared session.
#[component]
pub fn NoteViewer(mut session: Signal<Session>) -> Element {
    let deck = use_deck();

    let current = session.read();
    let position = current.position();
    let text = deck.get(position).unwrap_or_default().to_string();
    let enter = enter_class(current.last_move());
    let exit = exit_class(current.last_move());
    let outgoing = current
        .outgoing()
        .and_then(|i| deck.get(i).map(|t| (i, t.to_string())));
    let markers: Vec<Marker> = current.progress().collect();
    let can_go_back = current.can_go_back();
    let action = current.primary_action();
    drop(current);

    rsx! {
        div { class: "screen",
            ViewerHeader {}

            div { class: "screen-center",
                div { class: "note-stage",
                    if let Some((left, old_text)) = outgoing {
                        NoteCard {
                            key: "out-{left}",
                            text: old_text,
                            motion: exit,
                            on_exited: move |_| session.write().finish_exit(),
                        }
                    }
                    NoteCard { key: "{position}", text, motion: enter }
                }
            }

            div { class: "viewer-controls",
                ProgressDots { markers }

                div { class: "viewer-buttons",
                    Button {
                        class: "flex-1".to_string(),
                        variant: ButtonVariant::Outline,
                        disabled: !can_go_back,
                        onclick: move |_| session.write().prev(),
                        "Back"
                    }
                    Button {
                        class: "flex-1".to_string(),
                        onclick: move |_| session.write().advance(),
                        {primary_label(action)}
                    }
                }
            }
        }
    }
}
