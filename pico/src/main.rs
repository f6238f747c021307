//! Hitchhiker's Guide firmware for the ClockworkPi PicoCalc (RP2040).
//!
//! Boots into the "DON'T PANIC" screen, then serves the Guide menu from the
//! built-in keyboard on the 320x320 panel.

#![no_std]
#![no_main]

mod display;
mod keyboard;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::I2c;
use embassy_rp::spi::Spi;
use embassy_time::{Instant, Timer};
use embedded_graphics::prelude::*;
use guide_common::colors::BLACK;
use guide_common::config::POLL_INTERVAL_MS;
use guide_common::{ARTICLES, GuideApp, KeyRepeatFilter, RenderState, poll_key, render_frame};
use {defmt_rtt as _, panic_probe as _};

use crate::display::{display_spi_config, init_display};
use crate::keyboard::{PicoCalcKeyboard, keyboard_i2c_config};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"picocalc-guide"),
    embassy_rp::binary_info::rp_program_description!(c"Hitchhiker's Guide to the Galaxy viewer for PicoCalc"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Staging buffer for the display interface.
const DISPLAY_BUFFER_SIZE: usize = 512;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Hitchhiker's Guide starting...");

    let p = embassy_rp::init(Default::default());

    // Let the panel and keyboard controller power up
    Timer::after_millis(200).await;

    let _backlight = Output::new(p.PIN_5, Level::High);

    let cs = Output::new(p.PIN_13, Level::High);
    let dc = Output::new(p.PIN_14, Level::Low);
    let rst = Output::new(p.PIN_15, Level::High);
    let spi = Spi::new_blocking(p.SPI1, p.PIN_10, p.PIN_11, p.PIN_12, display_spi_config());
    let mut buffer = [0u8; DISPLAY_BUFFER_SIZE];
    let mut panel = init_display(spi, cs, dc, rst, &mut buffer);
    let mut display = panel.color_converted();
    display.clear(BLACK).ok();
    info!("Display initialized!");

    // SCL=7, SDA=6
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_7, p.PIN_6, keyboard_i2c_config());
    let mut keyboard = PicoCalcKeyboard::new(i2c);
    info!("Keyboard initialized!");

    let mut app = GuideApp::new(&ARTICLES, RoscRng);
    let mut repeat_filter = KeyRepeatFilter::new();
    let mut render_state = RenderState::new();

    info!("Starting main loop...");

    loop {
        let now_ms = Instant::now().as_millis();
        if app.tick(now_ms) {
            info!("Screen: {}", app.current_screen().name());
            render_state.mark_dirty();
        }
        if let Some(key) = poll_key(&mut keyboard, &mut repeat_filter)
            && app.handle_input(key)
        {
            info!("Screen: {}", app.current_screen().name());
            render_state.mark_dirty();
        }

        render_frame(&mut display, &mut render_state, &app.render_hints(), now_ms);

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}
