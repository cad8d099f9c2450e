use dioxus::prelude::*;
use lovenotes_core::Marker;

fn marker_class(marker: Marker) -> &'static str {
    match marker {
        Marker::Reached => "progress-dot reached",
        Marker::Ahead => "progress-dot",
    }
}

/// One dot per note; reached dots are wider and darker.
#[component]
pub fn ProgressDots(markers: Vec<Marker>) -> Element {
    rsx! {
        div { class: "progress-dots",
            for (i, marker) in markers.into_iter().enumerate() {
                div { key: "{i}", class: marker_class(marker) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reached_dots_are_highlighted() {
        assert_eq!(marker_class(Marker::Reached), "progress-dot reached");
        assert_eq!(marker_class(Marker::Ahead), "progress-dot");
    }
}
