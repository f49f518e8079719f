//! Firmware configuration
//!
//! Network credentials and the NTP server are externalized to build-time
//! environment variables so nothing secret lives in the source tree; the
//! remaining display tuning is compiled in. Every field has a
//! bench-friendly default.
//!
//! ```sh
//! TESSERA_WIFI_SSID=home TESSERA_WIFI_PASSWORD=... cargo build --release
//! ```

use tessera_core::animation::PlaybackSettings;
use tessera_core::clock::{ClockStyle, STRIP_PALETTE};

/// Static firmware configuration
pub struct Config {
    /// Wi-Fi network name
    pub wifi_ssid: &'static str,
    /// Wi-Fi passphrase
    pub wifi_password: &'static str,
    /// NTP server hostname
    pub ntp_server: &'static str,
    /// Local offset from UTC in hours
    pub utc_offset_hours: i8,
    /// Clock brightness (animation playback overrides this temporarily)
    pub brightness: u8,
    /// Which face layout to render
    pub style: ClockStyle,
    /// Palette for the banded style's decorative strips
    pub palette: [u32; 16],
    /// Top-of-hour animation parameters
    pub animation: PlaybackSettings,
}

impl Config {
    /// Local offset from UTC in seconds
    pub const fn utc_offset_seconds(&self) -> i32 {
        self.utc_offset_hours as i32 * 3600
    }
}

const fn env_or(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) => v,
        None => default,
    }
}

/// The active configuration
pub static CONFIG: Config = Config {
    wifi_ssid: env_or(option_env!("TESSERA_WIFI_SSID"), "tessera"),
    wifi_password: env_or(option_env!("TESSERA_WIFI_PASSWORD"), "change-me"),
    ntp_server: env_or(option_env!("TESSERA_NTP_SERVER"), "pool.ntp.org"),
    utc_offset_hours: 8,
    brightness: 50,
    style: ClockStyle::Banded,
    palette: STRIP_PALETTE,
    animation: PlaybackSettings {
        brightness: 100,
        frame_delay_ms: 80,
    },
};
