//! Pre-computed ProFont text styles.
//!
//! Most Guide text uses the 5x7 glyph font in [`crate::glyph`]. The boot
//! banner is the exception: it is set in ProFont, which has the heavier
//! strokes the "DON'T PANIC" lettering needs at large sizes.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_12_POINT, PROFONT_24_POINT};

use crate::colors::{AMBER_BRIGHT, HGTTG_BRIGHT, HGTTG_DARK};

/// Centered on the anchor point, vertically by the glyph middle.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Boot banner lettering.
pub const BANNER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, HGTTG_BRIGHT);

/// Boot banner drop shadow.
pub const BANNER_SHADOW_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, HGTTG_DARK);

/// Subtitle under the banner.
pub const SUBTITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, AMBER_BRIGHT);
