//! Physical frame buffer
//!
//! One color slot per LED, stored in chain order so the buffer can be
//! handed to the driver without a copy. All drawing goes through
//! [`set`](FrameBuffer::set), which resolves logical coordinates via the
//! pixel mapper. The buffer is explicitly owned and passed by reference;
//! there is no ambient global.

use smart_leds::colors::BLACK;

use crate::color::Rgb;
use crate::mapping::{pixel_index, GRID_HEIGHT, GRID_WIDTH, LED_COUNT};

/// In-memory image of the LED chain, in physical order
#[derive(Clone)]
pub struct FrameBuffer {
    leds: [Rgb; LED_COUNT],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a cleared (all-black) frame buffer
    pub const fn new() -> Self {
        Self {
            leds: [BLACK; LED_COUNT],
        }
    }

    /// Set every LED to black
    pub fn clear(&mut self) {
        self.leds = [BLACK; LED_COUNT];
    }

    /// Write one logical pixel.
    ///
    /// Coordinates outside the 16x16 grid are ignored; drawing primitives
    /// rely on this for per-cell clipping.
    pub fn set(&mut self, x: u8, y: u8, color: Rgb) {
        if x < GRID_WIDTH && y < GRID_HEIGHT {
            self.leds[pixel_index(x, y)] = color;
        }
    }

    /// Read one logical pixel. Out-of-grid coordinates read as black.
    pub fn get(&self, x: u8, y: u8) -> Rgb {
        if x < GRID_WIDTH && y < GRID_HEIGHT {
            self.leds[pixel_index(x, y)]
        } else {
            BLACK
        }
    }

    /// The buffer in chain order, ready for the driver push
    pub fn as_leds(&self) -> &[Rgb; LED_COUNT] {
        &self.leds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_routes_through_the_chain_mapping() {
        let mut frame = FrameBuffer::new();
        frame.set(0, 8, Rgb::new(1, 2, 3));
        // Visual bottom-left panel sits at the end of the chain.
        assert_eq!(frame.as_leds()[192], Rgb::new(1, 2, 3));
    }

    #[test]
    fn out_of_grid_writes_are_dropped() {
        let mut frame = FrameBuffer::new();
        frame.set(16, 0, Rgb::new(255, 255, 255));
        frame.set(0, 16, Rgb::new(255, 255, 255));
        assert!(frame.as_leds().iter().all(|led| *led == BLACK));
    }

    #[test]
    fn clear_resets_every_slot() {
        let mut frame = FrameBuffer::new();
        for y in 0..16 {
            frame.set(3, y, Rgb::new(10, 20, 30));
        }
        frame.clear();
        assert!(frame.as_leds().iter().all(|led| *led == BLACK));
    }
}
