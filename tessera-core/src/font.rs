//! Bitmap font tables and glyph drawing
//!
//! The clock face uses a 3x5 digit font plus a 1x5 colon glyph. Each glyph
//! row is one byte; digits keep their pixels in bits 2..0, the colon in
//! bit 4. The tables are compiled in and never change at runtime.
//!
//! Drawing is deliberately forgiving: an out-of-range digit is a no-op and
//! cells falling outside the 16x16 grid are clipped per pixel. A slightly
//! wrong frame beats a halted render loop on a wall display.

use crate::color::Rgb;
use crate::frame::FrameBuffer;

/// Glyph height in rows
pub const GLYPH_HEIGHT: u8 = 5;

/// Digit glyph width in columns
pub const DIGIT_WIDTH: u8 = 3;

/// Row bitmaps for digits 0-9, bits 2..0 left to right
pub const FONT_3X5: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b001, 0b001, 0b001], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

/// Row bitmaps for the colon, lit rows carry bit 4
pub const COLON_1X5: [u8; 5] = [0b00000, 0b10000, 0b00000, 0b10000, 0b00000];

/// Draw one 3x5 digit with its top-left corner at `(origin_x, origin_y)`.
///
/// Digits above 9 are silently ignored. Cells outside the grid are
/// clipped, not wrapped.
pub fn draw_digit(frame: &mut FrameBuffer, digit: u8, origin_x: i16, origin_y: i16, color: Rgb) {
    let Some(glyph) = FONT_3X5.get(digit as usize) else {
        return;
    };

    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..DIGIT_WIDTH {
            if (bits >> (DIGIT_WIDTH - 1 - col)) & 0x01 != 0 {
                set_clipped(frame, origin_x + col as i16, origin_y + row as i16, color);
            }
        }
    }
}

/// Draw the 1x5 colon with its top pixel at `(origin_x, origin_y)`.
pub fn draw_colon(frame: &mut FrameBuffer, origin_x: i16, origin_y: i16, color: Rgb) {
    for (row, bits) in COLON_1X5.iter().enumerate() {
        if (bits >> 4) & 0x01 != 0 {
            set_clipped(frame, origin_x, origin_y + row as i16, color);
        }
    }
}

/// Fill the inclusive rectangle spanned by two corners.
///
/// Corner order does not matter; coordinates are swapped into ascending
/// order before filling.
pub fn fill_rect(frame: &mut FrameBuffer, x1: u8, y1: u8, x2: u8, y2: u8, color: Rgb) {
    let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
    let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };

    for y in y1..=y2 {
        for x in x1..=x2 {
            frame.set(x, y, color);
        }
    }
}

fn set_clipped(frame: &mut FrameBuffer, x: i16, y: i16, color: Rgb) {
    if (0..16).contains(&x) && (0..16).contains(&y) {
        frame.set(x as u8, y as u8, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_leds::colors::{BLACK, WHITE};

    fn lit_cells(frame: &FrameBuffer) -> usize {
        let mut count = 0;
        for y in 0..16 {
            for x in 0..16 {
                if frame.get(x, y) != BLACK {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn digit_one_lights_its_glyph_pixels() {
        let mut frame = FrameBuffer::new();
        draw_digit(&mut frame, 1, 0, 0, WHITE);

        // Bottom row of "1" is fully lit.
        assert_eq!(frame.get(0, 4), WHITE);
        assert_eq!(frame.get(1, 4), WHITE);
        assert_eq!(frame.get(2, 4), WHITE);
        // Top row is only the center pixel.
        assert_eq!(frame.get(0, 0), BLACK);
        assert_eq!(frame.get(1, 0), WHITE);
        assert_eq!(frame.get(2, 0), BLACK);
    }

    #[test]
    fn out_of_range_digit_is_a_no_op() {
        let mut frame = FrameBuffer::new();
        draw_digit(&mut frame, 10, 4, 4, WHITE);
        draw_digit(&mut frame, 255, 4, 4, WHITE);
        assert_eq!(lit_cells(&frame), 0);
    }

    #[test]
    fn glyphs_clip_at_the_grid_edge() {
        let mut frame = FrameBuffer::new();
        // Origin chosen so the right column and bottom rows fall outside.
        draw_digit(&mut frame, 8, 14, 13, WHITE);

        assert_eq!(frame.get(14, 13), WHITE);
        assert_eq!(frame.get(15, 13), WHITE);
        // Nothing wrapped around to column 0.
        for y in 0..16 {
            assert_eq!(frame.get(0, y), BLACK);
        }
    }

    #[test]
    fn negative_origins_clip_instead_of_wrapping() {
        let mut frame = FrameBuffer::new();
        draw_digit(&mut frame, 8, -2, -2, WHITE);
        // Only the glyph cells that land inside the grid survive.
        for y in 0..16 {
            for x in 3..16 {
                assert_eq!(frame.get(x, y), BLACK);
            }
        }
    }

    #[test]
    fn colon_lights_rows_one_and_three() {
        let mut frame = FrameBuffer::new();
        draw_colon(&mut frame, 11, 2, WHITE);
        assert_eq!(frame.get(11, 2), BLACK);
        assert_eq!(frame.get(11, 3), WHITE);
        assert_eq!(frame.get(11, 4), BLACK);
        assert_eq!(frame.get(11, 5), WHITE);
        assert_eq!(frame.get(11, 6), BLACK);
    }

    #[test]
    fn rectangle_corner_order_is_irrelevant() {
        let mut forward = FrameBuffer::new();
        let mut swapped = FrameBuffer::new();
        fill_rect(&mut forward, 1, 8, 5, 10, WHITE);
        fill_rect(&mut swapped, 5, 10, 1, 8, WHITE);

        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(forward.get(x, y), swapped.get(x, y));
            }
        }
        assert_eq!(lit_cells(&forward), 5 * 3);
    }
}
