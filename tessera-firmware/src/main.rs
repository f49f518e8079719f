//! Tessera - four-panel LED matrix clock firmware
//!
//! Main firmware binary for the Raspberry Pi Pico W. Drives a 16x16
//! display built from four 8x8 WS2812 panels: WS2812 data on PIO1, the
//! on-board CYW43439 Wi-Fi radio on PIO0, time from NTP.

#![no_std]
#![no_main]

mod channels;
mod config;
mod tasks;

use cyw43_pio::{PioSpi, DEFAULT_CLOCK_DIVIDER};
use defmt::*;
use embassy_executor::Spawner;
use embassy_net::StackResources;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{PIO0, PIO1};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tessera_core::Display;
use tessera_drivers::Ws2812Matrix;

use crate::config::CONFIG;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
    PIO1_IRQ_0 => PioInterruptHandler<PIO1>;
});

// CYW43439 firmware blobs. Fetch them once from the cyw43-firmware
// release (see cyw43-firmware/README.md) or flash them separately with
// probe-rs and swap these for the fixed-address slices.
static CYW43_FW: &[u8] = include_bytes!("../cyw43-firmware/43439A0.bin");
static CYW43_CLM: &[u8] = include_bytes!("../cyw43-firmware/43439A0_clm.bin");

// embassy-net needs a random seed; the RP2040 has no TRNG worth the
// name, and TCP is not in use, so a build-time constant will do.
const NET_SEED: u64 = 0x8a5c_4421_73d0_9b1e;

static CYW43_STATE: StaticCell<cyw43::State> = StaticCell::new();
static NET_RESOURCES: StaticCell<StackResources<4>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tessera firmware starting...");

    let p = embassy_rp::init(Default::default());

    // LED chain: PIO1 + DMA, data line on GPIO2.
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO1, Irqs);
    let ws2812_program = PioWs2812Program::new(&mut common);
    let chain = PioWs2812::new(&mut common, sm0, p.DMA_CH1, p.PIN_2, &ws2812_program);
    let matrix = Ws2812Matrix::new(chain, CONFIG.brightness);
    let mut display = Display::new(matrix);

    // Wi-Fi radio: PIO0 SPI to the on-board CYW43439.
    let pwr = Output::new(p.PIN_23, Level::Low);
    let cs = Output::new(p.PIN_25, Level::High);
    let mut wifi_pio = Pio::new(p.PIO0, Irqs);
    let spi = PioSpi::new(
        &mut wifi_pio.common,
        wifi_pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        wifi_pio.irq0,
        cs,
        p.PIN_24,
        p.PIN_29,
        p.DMA_CH0,
    );

    let state = CYW43_STATE.init(cyw43::State::new());
    let (net_device, control, wifi_runner) = cyw43::new(state, pwr, spi, CYW43_FW).await;
    unwrap!(spawner.spawn(tasks::wifi_chip_task(wifi_runner)));

    let net_config = embassy_net::Config::dhcpv4(Default::default());
    let (stack, net_runner) = embassy_net::new(
        net_device,
        net_config,
        NET_RESOURCES.init(StackResources::new()),
        NET_SEED,
    );
    unwrap!(spawner.spawn(tasks::net_stack_task(net_runner)));

    unwrap!(spawner.spawn(tasks::link_task(control, CYW43_CLM, stack)));
    unwrap!(spawner.spawn(tasks::timekeeper_task(stack)));

    // The render loop owns the display and runs on the main task.
    tasks::render::run(&mut display).await
}
