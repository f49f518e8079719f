//! Clock face composition
//!
//! Two layout styles over the same digit font:
//!
//! - [`ClockStyle::Split`]: hour on the top half, minute on the bottom,
//!   colon between them blinking at 1 Hz (driven by the seconds value the
//!   caller polls, not by an internal timer).
//! - [`ClockStyle::Banded`]: hour and minute side by side on the middle
//!   rows, framed by two decorative palette strips.
//!
//! There is also a date overlay for the split family. It is composed like
//! any other drawing but nothing in the active render loop calls it on a
//! schedule; it stays available for an occasional date flash.

use smart_leds::colors::{BLACK, RED, WHITE};

use crate::color::rgb_from_hex;
use crate::font::{draw_colon, draw_digit, fill_rect};
use crate::frame::FrameBuffer;

/// Wall-clock components as polled from the time source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    /// Hour of day, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// Second, 0-59
    pub second: u8,
    /// Day of month, 1-31
    pub day: u8,
}

impl TimeOfDay {
    /// Split a unix timestamp into local wall-clock components.
    ///
    /// `utc_offset_seconds` is applied before splitting, so offsets that
    /// cross midnight land on the neighboring calendar day.
    pub fn from_unix(unix_seconds: u64, utc_offset_seconds: i32) -> Self {
        let local = unix_seconds as i64 + utc_offset_seconds as i64;
        let day_seconds = local.rem_euclid(86_400) as u32;
        let days = local.div_euclid(86_400);

        Self {
            hour: (day_seconds / 3600) as u8,
            minute: (day_seconds / 60 % 60) as u8,
            second: (day_seconds % 60) as u8,
            day: day_of_month(days),
        }
    }
}

/// Day of month for a day count since 1970-01-01 (proleptic Gregorian)
fn day_of_month(days_since_epoch: i64) -> u8 {
    // Howard Hinnant's civil-from-days, reduced to the day component.
    let z = days_since_epoch + 719_468;
    let era = z.div_euclid(146_097);
    let doe = (z - era * 146_097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    (doy - (153 * mp + 2) / 5 + 1) as u8
}

/// Which of the two face layouts to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    /// Hour top, minute bottom, blinking colon
    Split,
    /// Digits mid-screen between two palette strips
    #[default]
    Banded,
}

/// Default 16-entry strip palette, a cool-to-warm sweep in 0xRRGGBB
pub const STRIP_PALETTE: [u32; 16] = [
    0x15_2B_66, 0x1A_3C_80, 0x1F_4E_99, 0x24_61_B3, 0x2A_75_CC, 0x38_8D_D9, 0x4F_A6_DF, 0x6F_BE_E0,
    0x96_D1_D6, 0xBE_DD_BF, 0xDF_DE_9E, 0xF4_D4_78, 0xF9_BC_55, 0xF2_9A_3C, 0xE4_73_2E, 0xD1_4B_28,
];

/// Render one face into `frame`.
///
/// `palette` feeds the banded style's decorative strips; the split style
/// ignores it. The caller owns pacing: hold the pushed frame for
/// [`CLOCK_HOLD_MS`](crate::display::CLOCK_HOLD_MS) before the next render.
pub fn render(frame: &mut FrameBuffer, time: &TimeOfDay, style: ClockStyle, palette: &[u32; 16]) {
    match style {
        ClockStyle::Split => render_split(frame, time),
        ClockStyle::Banded => render_banded(frame, time, palette),
    }
}

fn render_split(frame: &mut FrameBuffer, time: &TimeOfDay) {
    frame.clear();

    draw_digit(frame, time.hour / 10, 1, 2, WHITE);
    draw_digit(frame, time.hour % 10, 5, 2, WHITE);

    // 1 Hz blink, derived from the polled seconds value.
    if time.second % 2 == 0 {
        draw_colon(frame, 11, 2, WHITE);
    }

    draw_digit(frame, time.minute / 10, 8, 9, WHITE);
    draw_digit(frame, time.minute % 10, 12, 9, WHITE);
}

fn render_banded(frame: &mut FrameBuffer, time: &TimeOfDay, palette: &[u32; 16]) {
    frame.clear();

    draw_strips(frame, palette);

    draw_digit(frame, time.hour / 10, 0, 6, WHITE);
    draw_digit(frame, time.hour % 10, 4, 6, WHITE);

    draw_digit(frame, time.minute / 10, 9, 6, WHITE);
    draw_digit(frame, time.minute % 10, 13, 6, WHITE);
}

/// Decorative strips on rows 4 and 12; row 12 reads the palette in
/// reverse so the two strips mirror each other.
fn draw_strips(frame: &mut FrameBuffer, palette: &[u32; 16]) {
    for i in 0..16u8 {
        frame.set(i, 4, rgb_from_hex(palette[i as usize]));
        frame.set(i, 12, rgb_from_hex(palette[15 - i as usize]));
    }
}

/// Day-of-month overlay for the split face.
///
/// Paints a two-tone background band (rows 8-9 red, 10-15 white), then the
/// day in black: centered single digit below 10, two digits otherwise.
pub fn render_date(frame: &mut FrameBuffer, day: u8) {
    fill_rect(frame, 0, 8, 8, 9, RED);
    fill_rect(frame, 0, 10, 8, 15, WHITE);

    if day < 10 {
        draw_digit(frame, day, 3, 10, BLACK);
    } else {
        draw_digit(frame, day / 10, 1, 10, BLACK);
        draw_digit(frame, day % 10, 5, 10, BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_leds::colors::BLACK;

    const TEN_PAST_NOON: TimeOfDay = TimeOfDay {
        hour: 12,
        minute: 10,
        second: 0,
        day: 5,
    };

    #[test]
    fn unix_epoch_is_midnight_on_the_first() {
        let t = TimeOfDay::from_unix(0, 0);
        assert_eq!(
            t,
            TimeOfDay {
                hour: 0,
                minute: 0,
                second: 0,
                day: 1,
            }
        );
    }

    #[test]
    fn from_unix_splits_a_leap_day_afternoon() {
        // 2024-02-29 12:34:56 UTC
        let t = TimeOfDay::from_unix(1_709_210_096, 0);
        assert_eq!(
            t,
            TimeOfDay {
                hour: 12,
                minute: 34,
                second: 56,
                day: 29,
            }
        );
    }

    #[test]
    fn positive_offset_crosses_into_the_next_day() {
        // 2024-02-28 20:00:00 UTC, viewed from UTC+8.
        let t = TimeOfDay::from_unix(1_709_150_400, 8 * 3600);
        assert_eq!(t.hour, 4);
        assert_eq!(t.day, 29);
    }

    #[test]
    fn negative_offset_crosses_into_the_previous_day() {
        // 2024-02-29 00:00:00 UTC, viewed from UTC-1.
        let t = TimeOfDay::from_unix(1_709_164_800, -3600);
        assert_eq!(t.hour, 23);
        assert_eq!(t.day, 28);
    }

    #[test]
    fn banded_strips_follow_the_palette() {
        let mut frame = FrameBuffer::new();
        render(&mut frame, &TEN_PAST_NOON, ClockStyle::Banded, &STRIP_PALETTE);

        for i in 0..16u8 {
            assert_eq!(frame.get(i, 4), rgb_from_hex(STRIP_PALETTE[i as usize]));
            assert_eq!(
                frame.get(i, 12),
                rgb_from_hex(STRIP_PALETTE[15 - i as usize])
            );
        }
    }

    #[test]
    fn split_colon_blinks_on_even_seconds() {
        let mut even = FrameBuffer::new();
        let mut odd = FrameBuffer::new();

        render(&mut even, &TEN_PAST_NOON, ClockStyle::Split, &STRIP_PALETTE);
        let odd_time = TimeOfDay {
            second: 1,
            ..TEN_PAST_NOON
        };
        render(&mut odd, &odd_time, ClockStyle::Split, &STRIP_PALETTE);

        assert_eq!(even.get(11, 3), WHITE);
        assert_eq!(odd.get(11, 3), BLACK);
    }

    #[test]
    fn split_renders_hour_and_minute_digits() {
        let mut frame = FrameBuffer::new();
        render(&mut frame, &TEN_PAST_NOON, ClockStyle::Split, &STRIP_PALETTE);

        // Hour tens "1" at origin (1, 2): center of its top row is lit.
        assert_eq!(frame.get(2, 2), WHITE);
        // Minute tens "1" at origin (8, 9).
        assert_eq!(frame.get(9, 9), WHITE);
        // Minute units "0" at origin (12, 9): hollow center.
        assert_eq!(frame.get(13, 11), BLACK);
        assert_eq!(frame.get(12, 11), WHITE);
    }

    #[test]
    fn render_clears_the_previous_face() {
        let mut frame = FrameBuffer::new();
        frame.set(15, 0, RED);
        render(&mut frame, &TEN_PAST_NOON, ClockStyle::Split, &STRIP_PALETTE);
        assert_eq!(frame.get(15, 0), BLACK);
    }

    #[test]
    fn single_digit_date_is_centered() {
        let mut frame = FrameBuffer::new();
        render_date(&mut frame, 5);

        // Background bands.
        assert_eq!(frame.get(0, 8), RED);
        assert_eq!(frame.get(8, 15), WHITE);
        // "5" drawn at (3, 10) in black: its top row spans x 3..=5.
        assert_eq!(frame.get(3, 10), BLACK);
        assert_eq!(frame.get(5, 10), BLACK);
        // No tens digit at the two-digit position.
        assert_eq!(frame.get(1, 10), WHITE);
    }

    #[test]
    fn two_digit_date_draws_both_digits() {
        let mut frame = FrameBuffer::new();
        render_date(&mut frame, 27);

        // "2" tens at (1, 10), "7" units at (5, 10); top rows fully lit.
        for x in 1..=3 {
            assert_eq!(frame.get(x, 10), BLACK);
        }
        for x in 5..=7 {
            assert_eq!(frame.get(x, 10), BLACK);
        }
    }
}
