//! The render loop
//!
//! Polls the softclock once per cycle, composes a face, pushes it, and
//! holds for the one-second clock cadence. On the top of each hour the
//! heartbeat animation runs once at its own brightness before the clock
//! face returns.
//!
//! Driver errors are logged and dropped; a skipped frame beats a halted
//! wall clock.

use defmt::*;
use embassy_time::{Delay, Duration, Timer};

use tessera_core::animation::{self, frames, PlaybackOutcome};
use tessera_core::display::CLOCK_HOLD_MS;
use tessera_core::{Display, Matrix};

use crate::channels::NetLink;
use crate::config::CONFIG;
use crate::tasks::timekeeper::local_time;

/// Poll interval while waiting for the first time sync
const SYNC_WAIT: Duration = Duration::from_millis(500);

/// Run the render loop forever.
///
/// Generic over the matrix driver so the loop can live in core-level
/// tests with a mock; main calls it with the WS2812 chain.
pub async fn run<M: Matrix>(display: &mut Display<M>) -> ! {
    info!("Render loop started");

    if display.init(CONFIG.brightness).await.is_err() {
        warn!("Matrix write failed during init");
    }

    let mut last_animated_hour: Option<u8> = None;

    loop {
        let Some(time) = local_time().await else {
            // Dark panels until the first NTP sync lands.
            Timer::after(SYNC_WAIT).await;
            continue;
        };

        if time.minute == 0 && last_animated_hour != Some(time.hour) {
            last_animated_hour = Some(time.hour);
            match animation::play(
                display,
                &NetLink,
                &mut Delay,
                &frames::HEARTBEAT,
                CONFIG.animation,
            )
            .await
            {
                Ok(PlaybackOutcome::Completed) => {}
                Ok(PlaybackOutcome::LinkLost) => warn!("Link lost during animation"),
                Err(_) => warn!("Matrix write failed during animation"),
            }
        }

        if display
            .render_clock(&time, CONFIG.style, &CONFIG.palette)
            .await
            .is_err()
        {
            warn!("Matrix write failed");
        }

        Timer::after(Duration::from_millis(CLOCK_HOLD_MS as u64)).await;
    }
}
