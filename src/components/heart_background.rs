//! Floating hearts behind everything else.
//!
//! The layer is `aria-hidden` and ignores the pointer. Particle parameters
//! are drawn once per mount and each heart loops with them forever; the
//! motion itself is a CSS keyframe (`heart-rise`) driven by per-particle
//! custom properties.

use dioxus::prelude::*;
use lovenotes_core::particles::{END_ROTATION_DEG, END_Y_PCT};
use lovenotes_core::{generate_particles, HeartParticle};

use super::HeartIcon;

/// Inline style for one particle.
fn particle_style(p: &HeartParticle) -> String {
    format!(
        "left: {left:.2}%; color: {color}; \
         --start-y: {start:.1}%; --end-y: {END_Y_PCT}%; \
         --drift: {drift:.1}px; --scale: {scale:.2}; --end-rot: {END_ROTATION_DEG}deg; \
         animation-duration: {dur:.2}s; animation-delay: {delay:.2}s;",
        left = p.left_pct,
        color = p.tint.color(),
        start = p.start_y_pct,
        drift = p.drift_px,
        scale = p.scale,
        dur = p.duration_secs,
        delay = p.delay_secs,
    )
}

#[component]
pub fn HeartBackground(count: usize) -> Element {
    let particles = use_hook(move || {
        tracing::debug!(count, "Generating heart particles");
        generate_particles(count, &mut rand::rng())
    });

    rsx! {
        div { class: "heart-layer", "aria-hidden": "true",
            div { class: "heart-backdrop" }
            for (i, p) in particles.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "heart",
                    style: particle_style(p),
                    HeartIcon { size: p.size_px }
                }
            }
            div { class: "heart-fade heart-fade-top" }
            div { class: "heart-fade heart-fade-bottom" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lovenotes_core::Tint;

    #[test]
    fn particle_style_carries_parameters() {
        let p = HeartParticle {
            left_pct: 12.5,
            start_y_pct: 950.0,
            duration_secs: 14.0,
            delay_secs: 2.5,
            size_px: 10.0,
            drift_px: -7.0,
            scale: 0.9,
            tint: Tint::Pink300,
        };
        let style = particle_style(&p);
        assert!(style.contains("left: 12.50%"));
        assert!(style.contains("color: #f9a8d4"));
        assert!(style.contains("--start-y: 950.0%"));
        assert!(style.contains("--end-y: -40%"));
        assert!(style.contains("--drift: -7.0px"));
        assert!(style.contains("--end-rot: 15deg"));
        assert!(style.contains("animation-duration: 14.00s"));
        assert!(style.contains("animation-delay: 2.50s"));
    }
}
