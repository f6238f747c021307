//! Test doubles: an in-memory draw target and a scripted RNG.

use std::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use rand_core::{RngCore, impls};

use crate::colors::BLACK;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// A 320x320 RGB565 framebuffer starting out black.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FrameBuffer {
    pixels: Vec<Rgb565>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![BLACK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Option<Rgb565> {
        let index = self.index(Point::new(x, y))?;
        Some(self.pixels[index])
    }

    /// Number of pixels of exactly `color`.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    /// Number of pixels that are not black.
    pub fn lit(&self) -> usize { self.pixels.len() - self.count(BLACK) }

    /// Whether any pixel inside `area` has `color`.
    pub fn region_contains(
        &self,
        area: Rectangle,
        color: Rgb565,
    ) -> bool {
        area.points().any(|p| self.index(p).is_some_and(|i| self.pixels[i] == color))
    }

    fn index(
        &self,
        point: Point,
    ) -> Option<usize> {
        let x = u32::try_from(point.x).ok().filter(|x| *x < SCREEN_WIDTH)?;
        let y = u32::try_from(point.y).ok().filter(|y| *y < SCREEN_HEIGHT)?;
        Some((y * SCREEN_WIDTH + x) as usize)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(index) = self.index(point) {
                self.pixels[index] = color;
            }
        }
        Ok(())
    }
}

/// Deterministic RNG replaying a fixed sequence.
pub struct SequenceRng {
    values: Vec<u32>,
    next: usize,
}

impl SequenceRng {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }

    fn next_u64(&mut self) -> u64 { impls::next_u64_via_u32(self) }

    fn fill_bytes(
        &mut self,
        dst: &mut [u8],
    ) {
        impls::fill_bytes_via_next(self, dst);
    }
}
