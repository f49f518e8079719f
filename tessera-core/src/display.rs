//! Display abstraction and composed render operations
//!
//! [`Matrix`] is the seam between the rendering core and the LED driver;
//! the firmware hands in a PIO-backed WS2812 implementation, tests hand in
//! a recording mock. Brightness lives behind the same trait because WS2812
//! chains have no brightness register; drivers scale at write time.

use crate::clock::{self, ClockStyle, TimeOfDay};
use crate::frame::FrameBuffer;
use crate::mapping::LED_COUNT;
use crate::Rgb;

/// How long a pushed clock face is held before the next render, in ms
pub const CLOCK_HOLD_MS: u32 = 1000;

/// LED chain driver seam.
///
/// `write` transmits a full buffer to the hardware; the brightness pair
/// mirrors FastLED's global scaler and is applied by the driver during
/// `write`, never by mutating the buffer.
#[allow(async_fn_in_trait)]
pub trait Matrix {
    /// Driver transmit error
    type Error;

    /// Push a full frame to the LED chain
    async fn write(&mut self, leds: &[Rgb; LED_COUNT]) -> Result<(), Self::Error>;

    /// Set the global brightness scale (0-255)
    fn set_brightness(&mut self, level: u8);

    /// Current global brightness scale
    fn brightness(&self) -> u8;
}

/// Connectivity probe, polled during animation playback.
///
/// Playback aborts cooperatively when the link drops; clock rendering
/// never consults this.
pub trait LinkStatus {
    /// Whether the network link is currently up
    fn is_up(&self) -> bool;
}

/// The display: an owned frame buffer plus its driver.
///
/// All drawing mutates the buffer in place; nothing reads it except
/// [`push`](Display::push), which always runs after a batch of writes.
pub struct Display<M: Matrix> {
    frame: FrameBuffer,
    matrix: M,
}

impl<M: Matrix> Display<M> {
    /// Wrap a driver with a cleared frame buffer
    pub fn new(matrix: M) -> Self {
        Self {
            frame: FrameBuffer::new(),
            matrix,
        }
    }

    /// One-time setup: set the initial brightness, clear, and push an
    /// empty buffer so the panels go dark immediately on boot.
    pub async fn init(&mut self, initial_brightness: u8) -> Result<(), M::Error> {
        self.matrix.set_brightness(initial_brightness);
        self.frame.clear();
        self.push().await
    }

    /// Compose one clock face and push it.
    ///
    /// The caller paces the loop: hold the pushed frame for
    /// [`CLOCK_HOLD_MS`] before the next render.
    pub async fn render_clock(
        &mut self,
        time: &TimeOfDay,
        style: ClockStyle,
        palette: &[u32; 16],
    ) -> Result<(), M::Error> {
        clock::render(&mut self.frame, time, style, palette);
        self.push().await
    }

    /// Draw the date overlay over the current face and push it
    pub async fn render_date(&mut self, day: u8) -> Result<(), M::Error> {
        clock::render_date(&mut self.frame, day);
        self.push().await
    }

    /// Transmit the current buffer to the LED chain
    pub async fn push(&mut self) -> Result<(), M::Error> {
        self.matrix.write(self.frame.as_leds()).await
    }

    /// Direct access to the frame buffer for drawing
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    /// Borrow the underlying driver
    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    /// Set the driver's global brightness scale
    pub fn set_brightness(&mut self, level: u8) {
        self.matrix.set_brightness(level);
    }

    /// The driver's current global brightness scale
    pub fn brightness(&self) -> u8 {
        self.matrix.brightness()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording mock driver shared by the display and animation tests

    use std::vec::Vec;

    use super::*;

    /// Records every pushed buffer and brightness change
    pub struct MockMatrix {
        pub writes: Vec<[Rgb; LED_COUNT]>,
        pub brightness: u8,
        pub brightness_history: Vec<u8>,
    }

    impl MockMatrix {
        pub fn new(brightness: u8) -> Self {
            Self {
                writes: Vec::new(),
                brightness,
                brightness_history: Vec::new(),
            }
        }
    }

    impl Matrix for MockMatrix {
        type Error = core::convert::Infallible;

        async fn write(&mut self, leds: &[Rgb; LED_COUNT]) -> Result<(), Self::Error> {
            self.writes.push(*leds);
            Ok(())
        }

        fn set_brightness(&mut self, level: u8) {
            self.brightness = level;
            self.brightness_history.push(level);
        }

        fn brightness(&self) -> u8 {
            self.brightness
        }
    }

    /// Link probe answering from a fixed schedule, one entry per poll
    pub struct ScriptedLink {
        responses: Vec<bool>,
        cursor: core::cell::Cell<usize>,
    }

    impl ScriptedLink {
        pub fn new(responses: &[bool]) -> Self {
            Self {
                responses: responses.to_vec(),
                cursor: core::cell::Cell::new(0),
            }
        }
    }

    impl LinkStatus for ScriptedLink {
        fn is_up(&self) -> bool {
            let i = self.cursor.get();
            self.cursor.set(i + 1);
            self.responses.get(i).copied().unwrap_or(true)
        }
    }

    /// Delay provider that resolves immediately and counts calls
    pub struct NullDelay {
        pub delays: Vec<u32>,
    }

    impl NullDelay {
        pub fn new() -> Self {
            Self { delays: Vec::new() }
        }
    }

    impl embedded_hal_async::delay::DelayNs for NullDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.delays.push(ns);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MockMatrix;
    use super::*;
    use crate::clock::STRIP_PALETTE;
    use embassy_futures::block_on;
    use smart_leds::colors::BLACK;

    #[test]
    fn init_pushes_a_dark_frame_at_the_requested_brightness() {
        let mut display = Display::new(MockMatrix::new(0));
        block_on(display.init(50)).unwrap();

        let matrix = &display.matrix;
        assert_eq!(matrix.brightness, 50);
        assert_eq!(matrix.writes.len(), 1);
        assert!(matrix.writes[0].iter().all(|led| *led == BLACK));
    }

    #[test]
    fn render_clock_pushes_exactly_one_frame() {
        let mut display = Display::new(MockMatrix::new(50));
        let noon = TimeOfDay {
            hour: 12,
            minute: 0,
            second: 0,
            day: 1,
        };
        block_on(display.render_clock(&noon, ClockStyle::Banded, &STRIP_PALETTE)).unwrap();

        let matrix = &display.matrix;
        assert_eq!(matrix.writes.len(), 1);
        // Something actually lit in the pushed buffer.
        assert!(matrix.writes[0].iter().any(|led| *led != BLACK));
    }
}
