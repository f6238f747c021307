//! Time-driven effects: colour ramps, the loading spinner and orbit geometry.
//!
//! # Colour Ramps
//!
//! Gradient bars are drawn one column (or row) at a time, each with a colour
//! interpolated between two endpoints. Interpolation happens directly on the
//! RGB565 channels with integer math so it is cheap on the Cortex-M0+.
//!
//! # Spinner
//!
//! The loading spinner advances one frame every [`SPINNER_FRAME_MS`]. Each
//! frame shows one of `| / - \` and highlights one of eight dots orbiting it.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{IntoStorage, Point};
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::SPINNER_FRAME_MS;

// =============================================================================
// Spinner Constants
// =============================================================================

/// Spinner glyphs, one per frame.
pub const SPINNER_CHARS: [char; 4] = ['|', '/', '-', '\\'];

/// Dots orbiting the spinner.
pub const SPINNER_DOTS: usize = 8;

// =============================================================================
// Colour Interpolation
// =============================================================================

#[inline]
fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (((raw >> 11) & 0x1F) as i32, ((raw >> 5) & 0x3F) as i32, (raw & 0x1F) as i32)
}

/// Colour at `step / steps` of the way from `from` to `to`.
///
/// `step == 0` yields `from`; `step >= steps` yields `to`. The result is
/// truncated toward `from`, like a plain integer ramp.
pub fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    step: u32,
    steps: u32,
) -> Rgb565 {
    if steps == 0 || step >= steps {
        return to;
    }
    let (from_r, from_g, from_b) = channels(from);
    let (to_r, to_g, to_b) = channels(to);

    let step = step as i32;
    let steps = steps as i32;
    let mix = |a: i32, b: i32| a + (b - a) * step / steps;

    Rgb565::new(
        mix(from_r, to_r).clamp(0, 31) as u8,
        mix(from_g, to_g).clamp(0, 63) as u8,
        mix(from_b, to_b).clamp(0, 31) as u8,
    )
}

// =============================================================================
// Spinner
// =============================================================================

/// Spinner frame number for a point in time.
#[inline]
pub const fn spinner_frame(elapsed_ms: u64) -> u32 { (elapsed_ms / SPINNER_FRAME_MS) as u32 }

/// Glyph shown on `frame`.
#[inline]
pub const fn spinner_char(frame: u32) -> char { SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()] }

/// Index of the dot highlighted on `frame`.
#[inline]
pub const fn highlighted_dot(frame: u32) -> usize { frame as usize % SPINNER_DOTS }

// =============================================================================
// Geometry
// =============================================================================

/// Point `index` of `count` evenly spaced around an ellipse, starting at 3 o'clock.
///
/// Coordinates are truncated toward the centre.
pub fn orbit_point(
    center: Point,
    radius_x: i32,
    radius_y: i32,
    index: usize,
    count: usize,
) -> Point {
    if count == 0 {
        return center;
    }
    let angle = index as f32 * core::f32::consts::TAU / count as f32;
    Point::new(
        center.x + (angle.cos() * radius_x as f32) as i32,
        center.y + (angle.sin() * radius_y as f32) as i32,
    )
}

/// Vertical offset of a sine wave sampled at `phase` radians.
#[inline]
pub fn wave_offset(
    phase: f32,
    amplitude: f32,
) -> i32 {
    (phase.sin() * amplitude) as i32
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, HGTTG_BRIGHT, HGTTG_DARK};

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb565(HGTTG_DARK, HGTTG_BRIGHT, 0, 50), HGTTG_DARK);
        assert_eq!(lerp_rgb565(HGTTG_DARK, HGTTG_BRIGHT, 50, 50), HGTTG_BRIGHT);
        assert_eq!(lerp_rgb565(HGTTG_DARK, HGTTG_BRIGHT, 7, 0), HGTTG_BRIGHT, "zero steps is the target");
    }

    #[test]
    fn test_lerp_midpoint() {
        let white = Rgb565::new(31, 63, 31);
        let (r, g, b) = channels(lerp_rgb565(BLACK, white, 1, 2));
        assert_eq!((r, g, b), (15, 31, 15));
    }

    #[test]
    fn test_lerp_is_monotonic_on_green() {
        let mut previous = 0;
        for step in 0..=320 {
            let (_, g, _) = channels(lerp_rgb565(HGTTG_DARK, HGTTG_BRIGHT, step, 320));
            assert!(g >= previous, "step {step}: {g} < {previous}");
            previous = g;
        }
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), 0);
        assert_eq!(spinner_frame(SPINNER_FRAME_MS * 5 + 1), 5);
        let chars: std::string::String = (0..5).map(spinner_char).collect();
        assert_eq!(chars, "|/-\\|");
        assert_eq!(highlighted_dot(9), 1);
    }

    #[test]
    fn test_orbit_points() {
        let center = Point::new(100, 50);
        assert_eq!(orbit_point(center, 15, 15, 0, 8), Point::new(115, 50));
        let bottom = orbit_point(center, 15, 15, 2, 8);
        assert_eq!(bottom.x, 100);
        assert!((64..=65).contains(&bottom.y));
        let diagonal = orbit_point(center, 15, 15, 1, 8);
        assert_eq!(diagonal, Point::new(110, 60));
    }

    #[test]
    fn test_orbit_with_no_points_is_center() {
        assert_eq!(orbit_point(Point::new(3, 4), 10, 10, 0, 0), Point::new(3, 4));
    }

    #[test]
    fn test_wave_offset_bounded() {
        for i in 0..200 {
            assert!(wave_offset(i as f32 * 0.3, 4.0).abs() <= 4);
        }
    }
}
