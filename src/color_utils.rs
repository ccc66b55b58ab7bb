// File: ./src/color_utils.rs
// Deterministic colors for category labels and priority ranks.
// No UI crate dependencies, so the TUI and the tests can share it.

use std::hash::{Hash, Hasher};

/// Stable (r, g, b) in [0, 255] for a category label.
/// Hue comes from the hash; saturation and lightness stay in a readable band.
pub fn category_color(label: &str) -> (u8, u8, u8) {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    label.hash(&mut hasher);
    let hash = hasher.finish();

    let h = (hash % 360) as f32;
    let s = 0.45 + ((hash >> 16) % 41) as f32 / 100.0;
    let l = 0.60 + ((hash >> 32) % 21) as f32 / 100.0;

    to_u8(hsl_to_rgb(h, s, l))
}

/// Color of a priority rank: warm for the top ranks, fading to grey at `fallback`.
pub fn rank_color(rank: u32, fallback: u32) -> (u8, u8, u8) {
    if fallback == 0 || rank >= fallback {
        return (150, 150, 150);
    }
    let t = rank as f32 / fallback as f32;
    // Hue sweeps red -> yellow -> blue as importance drops.
    let h = 240.0 * t;
    to_u8(hsl_to_rgb(h, 0.75 - 0.35 * t, 0.60))
}

fn to_u8((r, g, b): (f32, f32, f32)) -> (u8, u8, u8) {
    (
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r1 + m, g1 + m, b1 + m)
}
