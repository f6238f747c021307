//! Display driver for the PicoCalc 320x320 panel (ILI9488-class, SPI).
//!
//! Pin mapping:
//! - CLK: GPIO10 (SPI1 CLK)
//! - MOSI: GPIO11 (SPI1 TX)
//! - MISO: GPIO12 (SPI1 RX)
//! - CS: GPIO13
//! - DC: GPIO14
//! - Reset: GPIO15
//! - Backlight: GPIO5
//!
//! The controller only takes 18-bit pixels over SPI, so the driver speaks
//! `Rgb666` and the screens draw through a `color_converted` adapter.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9488Rgb666;
use mipidsi::options::{ColorInversion, ColorOrder, Orientation};
use mipidsi::{Builder, Display};

/// Panel size in pixels (square, no rotation).
pub const PANEL_SIZE: u16 = 320;

/// SPI clock. The original firmware ran the panel at 25MHz.
const SPI_FREQUENCY: u32 = 25_000_000;

/// Display type alias for the PicoCalc panel.
pub type PicoCalcDisplay<'d> =
    Display<SpiInterface<'d, ExclusiveDevice<Spi<'d, SPI1, Blocking>, Output<'d>, NoDelay>, Output<'d>>, ILI9488Rgb666, Output<'d>>;

/// Initialize the panel.
///
/// `buffer` is the interface's pixel staging buffer.
pub fn init_display<'d>(
    spi: Spi<'d, SPI1, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
    rst: Output<'d>,
    buffer: &'d mut [u8],
) -> PicoCalcDisplay<'d> {
    let spi_device = defmt::unwrap!(ExclusiveDevice::new_no_delay(spi, cs));
    let di = SpiInterface::new(spi_device, dc, buffer);

    // MADCTL 0x48 on the original: mirrored columns, BGR order
    defmt::unwrap!(
        Builder::new(ILI9488Rgb666, di)
            .display_size(PANEL_SIZE, PANEL_SIZE)
            .reset_pin(rst)
            .orientation(Orientation::new().flip_horizontal())
            .color_order(ColorOrder::Bgr)
            .invert_colors(ColorInversion::Inverted)
            .init(&mut embassy_time::Delay)
            .ok()
    )
}

/// SPI configuration for the panel.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = SPI_FREQUENCY;
    config
}
