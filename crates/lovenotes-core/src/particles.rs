//! Floating heart particles for the decorative background.
//!
//! Each particle gets its own randomized parameters once, then loops
//! forever with those same values. The random source is injected so tests
//! can seed it and check structure without caring about exact values.

use rand::Rng;
use std::ops::Range;

/// Default number of hearts on screen.
pub const DEFAULT_PARTICLE_COUNT: usize = 60;

/// Horizontal position, percent of the viewport width.
pub const LEFT_PCT: Range<f32> = 0.0..100.0;
/// Starting vertical offset, percent of the particle's own height.
pub const START_Y_PCT: Range<f32> = 900.0..1000.0;
/// Vertical offset every particle floats towards.
pub const END_Y_PCT: f32 = -40.0;
pub const DURATION_SECS: Range<f32> = 11.0..29.0;
pub const DELAY_SECS: Range<f32> = 0.0..6.0;
pub const SIZE_PX: Range<f32> = 6.0..18.0;
pub const DRIFT_PX: Range<f32> = -15.0..15.0;
pub const SCALE: Range<f32> = 0.7..1.4;
/// Rotation reached at the end of each loop, in degrees.
pub const END_ROTATION_DEG: f32 = 15.0;

/// Rose/pink tones cycled through by particle index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Rose300,
    Pink300,
    Rose400,
    Pink400,
}

impl Tint {
    const CYCLE: [Tint; 4] = [Tint::Rose300, Tint::Pink300, Tint::Rose400, Tint::Pink400];

    /// Tint for the particle at `index`.
    pub fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    /// CSS color value
    pub fn color(&self) -> &'static str {
        match self {
            Tint::Rose300 => "#fda4af",
            Tint::Pink300 => "#f9a8d4",
            Tint::Rose400 => "#fb7185",
            Tint::Pink400 => "#f472b6",
        }
    }
}

/// One floating heart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartParticle {
    pub left_pct: f32,
    pub start_y_pct: f32,
    pub duration_secs: f32,
    pub delay_secs: f32,
    pub size_px: f32,
    pub drift_px: f32,
    pub scale: f32,
    pub tint: Tint,
}

impl HeartParticle {
    fn random<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Self {
        Self {
            left_pct: rng.random_range(LEFT_PCT),
            start_y_pct: rng.random_range(START_Y_PCT),
            duration_secs: rng.random_range(DURATION_SECS),
            delay_secs: rng.random_range(DELAY_SECS),
            size_px: rng.random_range(SIZE_PX),
            drift_px: rng.random_range(DRIFT_PX),
            scale: rng.random_range(SCALE),
            tint: Tint::for_index(index),
        }
    }
}

/// Generate `count` particles from `rng`.
pub fn generate_particles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<HeartParticle> {
    (0..count).map(|i| HeartParticle::random(i, rng)).collect()
}
