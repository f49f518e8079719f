//! Color handling and contrast enhancement
//!
//! Colors move through the core as [`smart_leds::RGB8`] triples. Animation
//! frames and the strip palette are stored as packed 24-bit words and get
//! unpacked here; the packed channel order differs between the two sources.
//!
//! The contrast curve compensates for two properties of WS2812 LEDs:
//! midtones look washed out on a linear scale, and channel values just
//! above zero are below the LED's usable drive current. Raising values to
//! a fixed exponent darkens midtones; a floor keeps near-black pixels
//! visible. True black is never lifted onto the floor.

use libm::powf;
use smart_leds::RGB8;

/// Color triple used throughout the rendering core
pub type Rgb = RGB8;

/// Exponent of the contrast curve
pub const CONTRAST_EXPONENT: f32 = 1.5;

/// Minimum output for any lit channel
pub const CHANNEL_FLOOR: u8 = 30;

/// Apply the contrast curve to a single channel value.
///
/// `enhance(0)` is always 0; any nonzero input comes out at or above
/// [`CHANNEL_FLOOR`]. Monotonically non-decreasing over the input range.
pub fn enhance(value: u8) -> u8 {
    if value == 0 {
        return 0;
    }

    let normalized = value as f32 / 255.0;
    let curved = powf(normalized, CONTRAST_EXPONENT);
    let result = (curved * 255.0) as u8;

    result.max(CHANNEL_FLOOR)
}

/// Apply the contrast curve to each channel of a color independently.
pub fn enhance_rgb(color: Rgb) -> Rgb {
    Rgb {
        r: enhance(color.r),
        g: enhance(color.g),
        b: enhance(color.b),
    }
}

/// Unpack a `0xRRGGBB` word, as used by the strip palette.
pub const fn rgb_from_hex(packed: u32) -> Rgb {
    Rgb {
        r: ((packed >> 16) & 0xFF) as u8,
        g: ((packed >> 8) & 0xFF) as u8,
        b: (packed & 0xFF) as u8,
    }
}

/// Unpack an animation cell.
///
/// Animation frames are baked with green in the high byte (the WS2812
/// wire order), so the remap to RGB happens at decode time.
pub const fn rgb_from_grb(packed: u32) -> Rgb {
    Rgb {
        g: ((packed >> 16) & 0xFF) as u8,
        r: ((packed >> 8) & 0xFF) as u8,
        b: (packed & 0xFF) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_preserved() {
        assert_eq!(enhance(0), 0);
    }

    #[test]
    fn lit_channels_stay_above_the_floor() {
        for value in 1..=255u8 {
            assert!(enhance(value) >= CHANNEL_FLOOR, "enhance({}) below floor", value);
        }
    }

    #[test]
    fn curve_is_monotonic() {
        let mut previous = enhance(1);
        for value in 2..=255u8 {
            let current = enhance(value);
            assert!(current >= previous, "curve dips at {}", value);
            previous = current;
        }
    }

    #[test]
    fn full_scale_maps_to_full_scale() {
        assert_eq!(enhance(255), 255);
    }

    #[test]
    fn midtones_darken() {
        // 128 on a linear scale; the 1.5 exponent pulls it down.
        assert!(enhance(128) < 128);
    }

    #[test]
    fn hex_unpack_is_rgb_order() {
        let c = rgb_from_hex(0x11_22_33);
        assert_eq!((c.r, c.g, c.b), (0x11, 0x22, 0x33));
    }

    #[test]
    fn animation_unpack_swaps_red_and_green() {
        let c = rgb_from_grb(0x11_22_33);
        assert_eq!((c.r, c.g, c.b), (0x22, 0x11, 0x33));
    }
}
