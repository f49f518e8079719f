//! Board-agnostic rendering core for the Tessera matrix clock
//!
//! This crate contains all display logic that does not depend on
//! specific hardware implementations:
//!
//! - Logical-to-physical pixel address mapping for the four-panel chain
//! - Bitmap font tables and glyph drawing primitives
//! - Perceptual contrast enhancement for WS2812 output
//! - Animation frame decoding and playback sequencing
//! - Clock face composition (two layout styles plus a date overlay)
//!
//! Everything here is pure logic over an owned [`frame::FrameBuffer`];
//! the hardware seam is the [`display::Matrix`] trait.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod animation;
pub mod clock;
pub mod color;
pub mod display;
pub mod font;
pub mod frame;
pub mod mapping;

pub use color::Rgb;
pub use display::{Display, LinkStatus, Matrix};
pub use frame::FrameBuffer;
