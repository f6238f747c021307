//! Platform-independent core of the Hitchhiker's Guide viewer.
//!
//! This crate contains everything shared between the desktop simulator and
//! the PicoCalc firmware:
//!
//! - [`glyph`]: 5x7 bitmap font
//! - [`layout`]: Word-wrap and char-wrap text layout
//! - [`viewport`]: Scroll offset clamping and scroll thumb geometry
//! - [`search`]: Case-insensitive title/category search
//! - [`input`]: Key codes, key source trait and repeat filter
//! - [`app`]: Screen state machine
//! - [`render`]: Render state tracking and screen dispatch
//! - [`screens`] / [`widgets`]: Drawing, generic over `DrawTarget<Color = Rgb565>`
//! - [`corpus`]: The twenty built-in articles
//! - [`colors`], [`config`], [`styles`], [`animations`]: Constants and helpers
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and can be used on embedded targets.
//! Time is passed in as milliseconds; nothing here reads a clock.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod app;
pub mod article;
pub mod colors;
pub mod config;
pub mod corpus;
pub mod glyph;
pub mod input;
pub mod layout;
pub mod render;
pub mod screens;
pub mod search;
pub mod styles;
pub mod viewport;
pub mod widgets;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use app::{GuideApp, RenderHints, ScreenState};
pub use article::{Article, DiagramKind};
pub use corpus::ARTICLES;
pub use input::{Key, KeyRepeatFilter, KeySource, poll_key};
pub use render::{Redraw, RenderState, render_frame, render_screen};
