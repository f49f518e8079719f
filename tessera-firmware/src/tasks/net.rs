//! Wi-Fi and network stack tasks
//!
//! Three tasks: the CYW43 chip runner, the embassy-net stack runner, and
//! the link supervisor that joins the network, waits for DHCP, and owns
//! the [`LINK_UP`] flag. Join retries live here; the rendering core never
//! retries anything.

use core::sync::atomic::Ordering;

use cyw43::JoinOptions;
use cyw43_pio::PioSpi;
use defmt::*;
use embassy_net::Stack;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::{DMA_CH0, PIO0};
use embassy_time::{Duration, Timer};

use crate::channels::LINK_UP;
use crate::config::CONFIG;

/// Delay between failed join attempts
const JOIN_RETRY: Duration = Duration::from_secs(1);

/// Poll interval for link supervision once associated
const LINK_POLL: Duration = Duration::from_secs(1);

/// CYW43 chip runner - owns the PIO SPI link to the radio
#[embassy_executor::task]
pub async fn wifi_chip_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

/// embassy-net stack runner
#[embassy_executor::task]
pub async fn net_stack_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}

/// Link supervisor: join, wait for DHCP, keep [`LINK_UP`] honest
#[embassy_executor::task]
pub async fn link_task(
    mut control: cyw43::Control<'static>,
    clm: &'static [u8],
    stack: Stack<'static>,
) {
    info!("Link task started");

    control.init(clm).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;

    loop {
        loop {
            match control
                .join(CONFIG.wifi_ssid, JoinOptions::new(CONFIG.wifi_password.as_bytes()))
                .await
            {
                Ok(()) => break,
                Err(err) => {
                    warn!("Join to {} failed, status {}", CONFIG.wifi_ssid, err.status);
                    Timer::after(JOIN_RETRY).await;
                }
            }
        }
        info!("Joined {}", CONFIG.wifi_ssid);

        stack.wait_config_up().await;
        info!("DHCP configured");
        LINK_UP.store(true, Ordering::Relaxed);

        while stack.is_link_up() {
            Timer::after(LINK_POLL).await;
        }

        LINK_UP.store(false, Ordering::Relaxed);
        warn!("Wi-Fi link lost, rejoining");
    }
}
