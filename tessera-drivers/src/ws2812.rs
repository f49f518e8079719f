//! WS2812 panel chain driver
//!
//! Drives the four-panel chain through one RP2040 PIO state machine with
//! DMA, via embassy-rp's WS2812 PIO program. The chain has no brightness
//! register, so the global brightness scale is applied in software on
//! every write, FastLED-style, without touching the caller's buffer.

use core::convert::Infallible;

use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use smart_leds::{brightness, RGB8};

use tessera_core::mapping::LED_COUNT;
use tessera_core::Matrix;

/// WS2812 chain behind the core's [`Matrix`] seam
pub struct Ws2812Matrix<'d, P: Instance, const S: usize> {
    chain: PioWs2812<'d, P, S, LED_COUNT>,
    level: u8,
    scaled: [RGB8; LED_COUNT],
}

impl<'d, P: Instance, const S: usize> Ws2812Matrix<'d, P, S> {
    /// Wrap a configured PIO WS2812 driver
    pub fn new(chain: PioWs2812<'d, P, S, LED_COUNT>, initial_brightness: u8) -> Self {
        Self {
            chain,
            level: initial_brightness,
            scaled: [RGB8::new(0, 0, 0); LED_COUNT],
        }
    }
}

impl<'d, P: Instance, const S: usize> Matrix for Ws2812Matrix<'d, P, S> {
    type Error = Infallible;

    async fn write(&mut self, leds: &[RGB8; LED_COUNT]) -> Result<(), Self::Error> {
        for (out, led) in self
            .scaled
            .iter_mut()
            .zip(brightness(leds.iter().copied(), self.level))
        {
            *out = led;
        }
        self.chain.write(&self.scaled).await;
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) {
        self.level = level;
    }

    fn brightness(&self) -> u8 {
        self.level
    }
}
