//! Color palette for the Guide.
//!
//! The palette is specified in 24-bit RGB (the values the Guide's artwork was
//! designed with) and converted to the panel's native RGB565 at compile time
//! by [`from_rgb888`].
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Converting from RGB888 drops the low 3 (red, blue) or 2 (green) bits.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Convert a `0xRRGGBB` value into RGB565.
pub const fn from_rgb888(rgb: u32) -> Rgb565 {
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Screen background and text on light badges.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Mid gray. Scroll tracks, Marvin, version strings.
pub const GRAY: Rgb565 = from_rgb888(0x80_8080);

// =============================================================================
// Guide Greens
// =============================================================================

/// Bright Guide green. Titles, selected thumbs, the DON'T PANIC lettering.
pub const HGTTG_BRIGHT: Rgb565 = from_rgb888(0x00_FF00);

/// Medium green. Selection highlights, header gradient end.
pub const HGTTG_MEDIUM: Rgb565 = from_rgb888(0x00_CC00);

/// Dark green. Header gradient start, unselected menu items.
pub const HGTTG_DARK: Rgb565 = from_rgb888(0x00_8800);

/// Very dark green background of the About overlay.
pub const ABOUT_BACKGROUND: Rgb565 = from_rgb888(0x00_1000);

/// Muted green used for footers on the article screen.
pub const LABEL_GREEN: Rgb565 = from_rgb888(0x5B_C065);

// =============================================================================
// Accents
// =============================================================================

/// Bright amber. Menu subtitle, diagram labels.
pub const AMBER_BRIGHT: Rgb565 = from_rgb888(0xFF_B000);

/// Medium amber. Category labels and badges.
pub const AMBER_MEDIUM: Rgb565 = from_rgb888(0xCC_8800);

/// Dark amber. Footer bars and counters.
pub const AMBER_DARK: Rgb565 = from_rgb888(0x99_6600);

/// Amber used by the About overlay subtitle.
pub const AMBER: Rgb565 = from_rgb888(0xFF_8000);

/// Bright cyan.
pub const CYAN_BRIGHT: Rgb565 = from_rgb888(0x00_FFFF);

/// Medium cyan. Diagram panel border.
pub const CYAN_MEDIUM: Rgb565 = from_rgb888(0x00_CCCC);

/// Bright magenta.
pub const MAGENTA_BRIGHT: Rgb565 = from_rgb888(0xFF_00FF);

/// Bright yellow. Footer hint text.
pub const YELLOW_BRIGHT: Rgb565 = from_rgb888(0xFF_FF00);

/// Bright red. Warnings inside diagrams.
pub const RED_BRIGHT: Rgb565 = from_rgb888(0xFF_4040);

/// Bright blue.
pub const BLUE_BRIGHT: Rgb565 = from_rgb888(0x40_80FF);

/// Medium purple.
pub const PURPLE_MEDIUM: Rgb565 = from_rgb888(0x80_40FF);

/// Bright orange.
pub const ORANGE_BRIGHT: Rgb565 = from_rgb888(0xFF_8000);

/// Article body text.
pub const BODY_BLUE: Rgb565 = from_rgb888(0x30_76C0);
