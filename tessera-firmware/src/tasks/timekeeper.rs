//! Wall-clock maintenance via SNTP
//!
//! Polls an NTP server over UDP whenever the link is up, and feeds the
//! shared softclock. Between syncs the softclock extrapolates from the
//! monotonic timer; a resync every hour keeps drift well under a second.
//! Retries stay in this task; a failed sync never reaches the render
//! loop, which simply keeps running on the old one.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_net::dns::DnsQueryType;
use embassy_net::udp::{PacketMetadata, UdpSocket};
use embassy_net::Stack;
use embassy_time::{with_timeout, Duration, Timer};

use tessera_core::clock::TimeOfDay;

use crate::channels::{LINK_UP, WALL_CLOCK};
use crate::config::CONFIG;

/// Interval between successful syncs
const SYNC_INTERVAL: Duration = Duration::from_secs(3600);

/// Delay before retrying a failed sync
const RETRY_DELAY: Duration = Duration::from_secs(10);

/// How long to wait for the server's reply
const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

/// Seconds between the NTP epoch (1900) and the unix epoch (1970)
const NTP_UNIX_OFFSET: u64 = 2_208_988_800;

/// NTP UDP port
const NTP_PORT: u16 = 123;

/// Sync failure modes, all retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncError {
    /// Hostname did not resolve
    Dns,
    /// Socket bind or send failed
    Socket,
    /// No reply within the timeout
    Timeout,
    /// Reply was malformed or pre-unix-epoch
    BadReply,
}

/// Timekeeper task - keeps the softclock within a second of NTP time
#[embassy_executor::task]
pub async fn timekeeper_task(stack: Stack<'static>) {
    info!("Timekeeper task started");

    loop {
        if !LINK_UP.load(Ordering::Relaxed) {
            Timer::after(Duration::from_secs(1)).await;
            continue;
        }

        match sntp_query(stack).await {
            Ok(unix_seconds) => {
                WALL_CLOCK.lock().await.set(unix_seconds);
                info!("Time synced: unix {}", unix_seconds);
                Timer::after(SYNC_INTERVAL).await;
            }
            Err(err) => {
                warn!("Time sync failed: {}", err);
                Timer::after(RETRY_DELAY).await;
            }
        }
    }
}

/// One SNTP round trip, returning unix seconds
async fn sntp_query(stack: Stack<'static>) -> Result<u64, SyncError> {
    let addrs = stack
        .dns_query(CONFIG.ntp_server, DnsQueryType::A)
        .await
        .map_err(|_| SyncError::Dns)?;
    let server = *addrs.first().ok_or(SyncError::Dns)?;

    let mut rx_meta = [PacketMetadata::EMPTY; 4];
    let mut tx_meta = [PacketMetadata::EMPTY; 4];
    let mut rx_buffer = [0u8; 128];
    let mut tx_buffer = [0u8; 128];
    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );
    socket.bind(0).map_err(|_| SyncError::Socket)?;

    // Client request: LI 0, version 3, mode 3, everything else zero.
    let mut request = [0u8; 48];
    request[0] = 0x1B;
    socket
        .send_to(&request, (server, NTP_PORT))
        .await
        .map_err(|_| SyncError::Socket)?;

    let mut reply = [0u8; 48];
    let (len, _peer) = with_timeout(REPLY_TIMEOUT, socket.recv_from(&mut reply))
        .await
        .map_err(|_| SyncError::Timeout)?
        .map_err(|_| SyncError::BadReply)?;
    if len < 44 {
        return Err(SyncError::BadReply);
    }

    // Transmit timestamp, seconds field, big endian.
    let ntp_seconds = u32::from_be_bytes([reply[40], reply[41], reply[42], reply[43]]) as u64;
    ntp_seconds
        .checked_sub(NTP_UNIX_OFFSET)
        .ok_or(SyncError::BadReply)
}

/// Read the softclock as local time-of-day components
pub async fn local_time() -> Option<TimeOfDay> {
    let unix = WALL_CLOCK.lock().await.unix_now()?;
    Some(TimeOfDay::from_unix(unix, CONFIG.utc_offset_seconds()))
}
