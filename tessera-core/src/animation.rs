//! Animation decoding and playback
//!
//! Animations are fixed-length sequences of pre-baked 16x16 frames whose
//! cells are packed GRB words (the WS2812 wire order the frames were
//! exported in). Decoding remaps the channels to RGB, runs each one
//! through the contrast curve, and writes the cell through the pixel
//! mapper.
//!
//! Playback is cooperative: the link probe is polled once per frame and a
//! downed link stops the sequence after the current state is flushed.
//! Nothing is rolled back, and the caller's brightness is restored on
//! every exit path.

use embedded_hal_async::delay::DelayNs;

use crate::color::{enhance_rgb, rgb_from_grb};
use crate::display::{Display, LinkStatus, Matrix};
use crate::frame::FrameBuffer;

pub mod frames;

/// One baked frame: 16 rows of 16 packed GRB cells
pub type AnimationFrame = [[u32; 16]; 16];

/// Playback parameters
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlaybackSettings {
    /// Brightness used while the animation runs; the previous value is
    /// restored afterwards
    pub brightness: u8,
    /// Hold time per frame in milliseconds
    pub frame_delay_ms: u32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            brightness: 100,
            frame_delay_ms: 80,
        }
    }
}

/// How a playback run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackOutcome {
    /// Every frame was shown
    Completed,
    /// The link dropped; playback stopped early with the last flushed
    /// frame left on the panels
    LinkLost,
}

/// Decode one animation frame into the frame buffer.
///
/// Every cell is written: channel remap, contrast curve, pixel mapping.
pub fn blit(frame: &mut FrameBuffer, cells: &AnimationFrame) {
    for (y, row) in cells.iter().enumerate() {
        for (x, packed) in row.iter().enumerate() {
            let color = enhance_rgb(rgb_from_grb(*packed));
            frame.set(x as u8, y as u8, color);
        }
    }
}

/// Play an animation through to completion or link loss.
///
/// Sequence per frame: poll the link, blit, push, hold. One extra push
/// runs after the loop so the panels always show the final state, and the
/// saved brightness is restored regardless of how the run ended.
pub async fn play<M: Matrix>(
    display: &mut Display<M>,
    link: &impl LinkStatus,
    delay: &mut impl DelayNs,
    animation: &[AnimationFrame],
    settings: PlaybackSettings,
) -> Result<PlaybackOutcome, M::Error> {
    let saved_brightness = display.brightness();
    display.set_brightness(settings.brightness);

    let result = run(display, link, delay, animation, settings).await;

    display.set_brightness(saved_brightness);
    result
}

async fn run<M: Matrix>(
    display: &mut Display<M>,
    link: &impl LinkStatus,
    delay: &mut impl DelayNs,
    animation: &[AnimationFrame],
    settings: PlaybackSettings,
) -> Result<PlaybackOutcome, M::Error> {
    let mut outcome = PlaybackOutcome::Completed;

    for cells in animation {
        if !link.is_up() {
            outcome = PlaybackOutcome::LinkLost;
            break;
        }

        blit(display.frame_mut(), cells);
        display.push().await?;
        delay.delay_ms(settings.frame_delay_ms).await;
    }

    // Flush whatever state playback ended on.
    display.push().await?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{enhance, CHANNEL_FLOOR};
    use crate::display::testing::{MockMatrix, NullDelay, ScriptedLink};
    use crate::mapping::pixel_index;
    use crate::Rgb;
    use embassy_futures::block_on;

    /// Seven one-color frames with distinguishable red values
    fn test_animation() -> [AnimationFrame; 7] {
        core::array::from_fn(|i| {
            let packed = ((10 + i as u32 * 10) << 8) | 0x05;
            [[packed; 16]; 16]
        })
    }

    #[test]
    fn blit_decodes_remaps_and_enhances() {
        let mut frame = FrameBuffer::new();
        // g=200, r=100, b=0 in packed GRB order.
        let cells: AnimationFrame = [[0xC8_64_00; 16]; 16];
        blit(&mut frame, &cells);

        let expected = Rgb {
            r: enhance(100),
            g: enhance(200),
            b: 0,
        };
        assert_eq!(frame.get(0, 0), expected);
        assert_eq!(frame.get(15, 15), expected);
        // Blue was zero and stays zero through the curve.
        assert_eq!(frame.get(7, 7).b, 0);
    }

    #[test]
    fn blit_writes_in_chain_order() {
        let mut frame = FrameBuffer::new();
        let mut cells: AnimationFrame = [[0; 16]; 16];
        cells[8][0] = 0x00_FF_00; // r=255 at logical (0, 8)
        blit(&mut frame, &cells);

        assert_eq!(frame.as_leds()[pixel_index(0, 8)].r, 255);
    }

    #[test]
    fn full_run_pushes_every_frame_plus_final_flush() {
        let animation = test_animation();
        let mut display = Display::new(MockMatrix::new(50));
        let link = ScriptedLink::new(&[true; 7]);
        let mut delay = NullDelay::new();

        let outcome = block_on(play(
            &mut display,
            &link,
            &mut delay,
            &animation,
            PlaybackSettings {
                brightness: 100,
                frame_delay_ms: 80,
            },
        ))
        .unwrap();

        assert_eq!(outcome, PlaybackOutcome::Completed);
        assert_eq!(display.matrix().writes.len(), 8);
        assert_eq!(delay.delays.len(), 7);
        assert_eq!(display.brightness(), 50);
    }

    #[test]
    fn link_loss_at_frame_three_stops_after_its_flush() {
        let animation = test_animation();
        let mut display = Display::new(MockMatrix::new(50));
        // Up for frames 0-2, down when frame 3 is about to start.
        let link = ScriptedLink::new(&[true, true, true, false]);
        let mut delay = NullDelay::new();

        let outcome = block_on(play(
            &mut display,
            &link,
            &mut delay,
            &animation,
            PlaybackSettings::default(),
        ))
        .unwrap();

        assert_eq!(outcome, PlaybackOutcome::LinkLost);
        // Frames 0-2 pushed, plus the final flush; frames 3-6 never shown.
        let writes = &display.matrix().writes;
        assert_eq!(writes.len(), 4);
        let frame2_red = enhance(30);
        assert_eq!(writes[2][0].r, frame2_red);
        assert_eq!(writes[3][0].r, frame2_red);

        // Brightness restored despite the abort.
        assert_eq!(display.brightness(), 50);
        assert_eq!(
            display.matrix().brightness_history.as_slice(),
            &[PlaybackSettings::default().brightness, 50]
        );
    }

    #[test]
    fn playback_brightness_is_applied_for_the_run() {
        let animation = test_animation();
        let mut display = Display::new(MockMatrix::new(25));
        let link = ScriptedLink::new(&[]);
        let mut delay = NullDelay::new();

        block_on(play(
            &mut display,
            &link,
            &mut delay,
            &animation,
            PlaybackSettings {
                brightness: 200,
                frame_delay_ms: 10,
            },
        ))
        .unwrap();

        assert_eq!(
            display.matrix().brightness_history.as_slice(),
            &[200, 25]
        );
    }

    #[test]
    fn floor_applies_to_dim_animation_cells() {
        let mut frame = FrameBuffer::new();
        let cells: AnimationFrame = [[0x01_01_01; 16]; 16];
        blit(&mut frame, &cells);

        let c = frame.get(4, 4);
        assert_eq!((c.r, c.g, c.b), (CHANNEL_FLOOR, CHANNEL_FLOOR, CHANNEL_FLOOR));
    }
}
