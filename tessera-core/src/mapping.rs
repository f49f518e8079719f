//! Logical-to-physical pixel address mapping
//!
//! The display is a 16x16 logical grid built from four 8x8 WS2812 panels
//! wired as one chain. The chain order does not follow visual row-major
//! order: the data line runs top-left, top-right, then crosses to the
//! bottom-RIGHT panel before ending at the bottom-left one.
//!
//! ```text
//!   visual          chain base offset
//!   +----+----+     +-----+-----+
//!   | TL | TR |     |   0 |  64 |
//!   +----+----+     +-----+-----+
//!   | BL | BR |     | 192 | 128 |
//!   +----+----+     +-----+-----+
//! ```
//!
//! The bottom-row base offsets are wiring constants of the physical build
//! and must not be "normalized" into sequential order.

/// Logical grid width in pixels
pub const GRID_WIDTH: u8 = 16;

/// Logical grid height in pixels
pub const GRID_HEIGHT: u8 = 16;

/// Panel edge length in pixels
pub const PANEL_SIZE: u8 = 8;

/// Total LED count across the chain
pub const LED_COUNT: usize = 256;

/// Chain base offset of the top-left panel
pub const PANEL_TOP_LEFT: usize = 0;

/// Chain base offset of the top-right panel
pub const PANEL_TOP_RIGHT: usize = 64;

/// Chain base offset of the bottom-right panel (third in the chain)
pub const PANEL_BOTTOM_RIGHT: usize = 128;

/// Chain base offset of the bottom-left panel (last in the chain)
pub const PANEL_BOTTOM_LEFT: usize = 192;

/// Map a logical coordinate to its physical chain index.
///
/// Total over `x, y` in `[0, 15]` and bijective onto `[0, 255]`: every
/// logical cell addresses exactly one LED and every LED is reachable.
/// Coordinates outside the grid wrap into their panel-local offset, so
/// callers are expected to clip before mapping.
pub const fn pixel_index(x: u8, y: u8) -> usize {
    let local_x = (x % PANEL_SIZE) as usize;
    let local_y = (y % PANEL_SIZE) as usize;
    let local_offset = local_y * PANEL_SIZE as usize + local_x;

    let base = if y < PANEL_SIZE {
        if x < PANEL_SIZE {
            PANEL_TOP_LEFT
        } else {
            PANEL_TOP_RIGHT
        }
    } else if x < PANEL_SIZE {
        PANEL_BOTTOM_LEFT
    } else {
        PANEL_BOTTOM_RIGHT
    };

    base + local_offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_corner_values() {
        assert_eq!(pixel_index(0, 0), 0);
        assert_eq!(pixel_index(7, 7), 63);
        assert_eq!(pixel_index(8, 0), 64);
        assert_eq!(pixel_index(15, 0), 71);
        assert_eq!(pixel_index(15, 7), 127);
        assert_eq!(pixel_index(0, 8), 192);
        assert_eq!(pixel_index(0, 15), 248);
        assert_eq!(pixel_index(7, 15), 255);
        assert_eq!(pixel_index(8, 8), 128);
        assert_eq!(pixel_index(15, 15), 191);
    }

    #[test]
    fn mapping_is_a_bijection() {
        let mut seen = [false; LED_COUNT];
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let index = pixel_index(x, y);
                assert!(index < LED_COUNT, "index {} out of range", index);
                assert!(!seen[index], "collision at ({}, {}) -> {}", x, y, index);
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    proptest! {
        #[test]
        fn index_lands_in_the_quadrant_panel(x in 0u8..16, y in 0u8..16) {
            let index = pixel_index(x, y);
            let base = match (x < 8, y < 8) {
                (true, true) => PANEL_TOP_LEFT,
                (false, true) => PANEL_TOP_RIGHT,
                (true, false) => PANEL_BOTTOM_LEFT,
                (false, false) => PANEL_BOTTOM_RIGHT,
            };
            prop_assert!(index >= base && index < base + 64);
        }
    }
}
