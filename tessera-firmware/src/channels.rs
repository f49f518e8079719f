//! Shared state between Embassy tasks
//!
//! The link flag and the softclock are the only cross-task state. Both
//! are written by the network-side tasks and read by the render loop.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::Instant;

use tessera_core::LinkStatus;

/// Whether Wi-Fi is associated and DHCP has completed.
///
/// Owned by the link task; polled by animation playback for its
/// cooperative abort.
pub static LINK_UP: AtomicBool = AtomicBool::new(false);

/// Link probe handed to the rendering core
pub struct NetLink;

impl LinkStatus for NetLink {
    fn is_up(&self) -> bool {
        LINK_UP.load(Ordering::Relaxed)
    }
}

/// Wall-clock time carried forward from the last NTP sync.
///
/// Unset until the first successful sync; the render loop shows nothing
/// until then.
pub struct SoftClock {
    sync: Option<(Instant, u64)>,
}

impl SoftClock {
    pub const fn new() -> Self {
        Self { sync: None }
    }

    /// Record a fresh unix timestamp
    pub fn set(&mut self, unix_seconds: u64) {
        self.sync = Some((Instant::now(), unix_seconds));
    }

    /// Current unix time, extrapolated from the last sync
    pub fn unix_now(&self) -> Option<u64> {
        self.sync
            .map(|(at, unix)| unix + at.elapsed().as_secs())
    }
}

/// The shared softclock, written by the timekeeper task
pub static WALL_CLOCK: Mutex<CriticalSectionRawMutex, SoftClock> = Mutex::new(SoftClock::new());
