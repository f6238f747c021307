//! PicoCalc keyboard controller on I2C1.
//!
//! The controller is polled: write the key register, give it 16ms, then read
//! two bytes. Low byte `1` means a key is down; the high byte is its code.

use core::convert::Infallible;

use embassy_rp::i2c::{Blocking, Config as I2cConfig, Error, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::{Duration, block_for};
use guide_common::KeySource;

/// Controller address.
const KEYBOARD_ADDR: u8 = 0x1F;

/// Register holding the most recent key event.
const KEY_REGISTER: u8 = 0x09;

/// Controller needs this long between the register write and the read.
const READ_DELAY: Duration = Duration::from_millis(16);

/// The controller only answers reliably at a slow bus clock.
const I2C_FREQUENCY: u32 = 10_000;

/// Low-byte value signalling a pressed key.
const KEY_PRESSED: u8 = 1;

pub struct PicoCalcKeyboard<'d> {
    i2c: I2c<'d, I2C1, Blocking>,
}

impl<'d> PicoCalcKeyboard<'d> {
    pub const fn new(i2c: I2c<'d, I2C1, Blocking>) -> Self { Self { i2c } }
}

/// Bus errors are reported here over defmt and count as "no key", so
/// nothing reaches the `log` facade in `poll_key`.
impl KeySource for PicoCalcKeyboard<'_> {
    type Error = Infallible;

    fn poll(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(self.read_key().unwrap_or_else(|err| {
            defmt::warn!("keyboard read failed: {}", err);
            None
        }))
    }
}

impl PicoCalcKeyboard<'_> {
    fn read_key(&mut self) -> Result<Option<u8>, Error> {
        self.i2c.blocking_write(KEYBOARD_ADDR, &[KEY_REGISTER])?;
        block_for(READ_DELAY);
        let mut buf = [0u8; 2];
        self.i2c.blocking_read(KEYBOARD_ADDR, &mut buf)?;
        let [state, code] = buf;
        Ok((state == KEY_PRESSED).then_some(code))
    }
}

/// I2C configuration for the keyboard controller.
pub fn keyboard_i2c_config() -> I2cConfig {
    let mut config = I2cConfig::default();
    config.frequency = I2C_FREQUENCY;
    config
}
