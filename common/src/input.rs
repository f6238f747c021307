//! Keyboard codes, key decoding and repeat filtering.
//!
//! The PicoCalc keyboard controller reports one raw byte per key. Printable
//! keys arrive as their ASCII code, navigation keys use codes above `0x7F`.
//! [`Key::from_code`] turns those bytes into the abstract key set the state
//! machine understands.
//!
//! The controller keeps reporting a held key on every poll, so the main loop
//! passes raw codes through a [`KeyRepeatFilter`] and only acts on a key once
//! per press.

use core::fmt::Debug;

/// Raw key codes sent by the keyboard controller.
pub mod key_code {
    pub const ESC: u8 = 0xB1;
    pub const UP: u8 = 0xB5;
    pub const DOWN: u8 = 0xB6;
    pub const BACKSPACE: u8 = 0x08;
    pub const DEL: u8 = 0x7F;
    /// Forward delete; treated as backspace.
    pub const DEL_FORWARD: u8 = 0xB2;
    pub const LINE_FEED: u8 = b'\n';
    pub const CARRIAGE_RETURN: u8 = b'\r';
}

/// Abstract key set.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    /// Printable ASCII, `' '..='~'`.
    Char(char),
    Enter,
    Esc,
    Up,
    Down,
    Backspace,
}

impl Key {
    /// Decode a raw controller byte. Unknown codes yield `None`.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            key_code::ESC => Some(Self::Esc),
            key_code::UP => Some(Self::Up),
            key_code::DOWN => Some(Self::Down),
            key_code::BACKSPACE | key_code::DEL | key_code::DEL_FORWARD => Some(Self::Backspace),
            key_code::LINE_FEED | key_code::CARRIAGE_RETURN => Some(Self::Enter),
            0x20..=0x7E => Some(Self::Char(code as char)),
            _ => None,
        }
    }
}

/// Source of raw key codes, one optional code per poll.
pub trait KeySource {
    type Error;

    /// Read the key currently reported by the device, if any.
    fn poll(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// Reports a key only when the reported code changes.
///
/// A held key produces the same code on every poll; it is passed through once
/// and then suppressed until the key is released (a poll with no key) or a
/// different key is reported.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct KeyRepeatFilter {
    last: Option<u8>,
}

impl KeyRepeatFilter {
    pub const fn new() -> Self { Self { last: None } }

    /// Feed one poll result; returns the code if it is a new press.
    pub fn filter(
        &mut self,
        code: Option<u8>,
    ) -> Option<u8> {
        if code == self.last {
            return None;
        }
        self.last = code;
        code
    }
}

/// Poll `source` once and decode a fresh key press.
///
/// Transport errors are logged and treated as "no key"; they also release the
/// repeat filter so the next successful read is seen as a new press.
pub fn poll_key<S>(
    source: &mut S,
    filter: &mut KeyRepeatFilter,
) -> Option<Key>
where
    S: KeySource,
    S::Error: Debug,
{
    let code = match source.poll() {
        Ok(code) => code,
        Err(err) => {
            log::warn!("keyboard poll failed: {err:?}");
            None
        }
    };
    filter.filter(code).and_then(Key::from_code)
}
