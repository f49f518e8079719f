//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in tessera-core for the
//! RP2040 target:
//!
//! - WS2812 panel chain driver (PIO + DMA)

#![no_std]
#![deny(unsafe_code)]

pub mod ws2812;

pub use ws2812::Ws2812Matrix;
