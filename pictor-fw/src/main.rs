//! Pictor demo firmware
//!
//! Brings up an SSD1306 panel over blocking I2C on an STM32F103 board
//! (PB6 = SCL, PB7 = SDA) and cycles the library's demo scenes forever,
//! feeding the independent watchdog between steps.

#![no_std]
#![no_main]

mod images;
mod scenes;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_stm32::i2c::I2c;
use embassy_stm32::peripherals::IWDG;
use embassy_stm32::time::Hertz;
use embassy_stm32::wdg::IndependentWatchdog;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use pictor_driver::{Display, I2cBus};
use pictor_gfx::Size128x64;

/// Pause between demo scenes.
const SCENE_PAUSE: Duration = Duration::from_millis(2000);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("pictor demo firmware starting");

    let p = embassy_stm32::init(Default::default());

    // Watchdog first, so a wedged bus resets the board
    let mut wdg = IndependentWatchdog::new(p.IWDG, 5_000_000);
    wdg.unleash();

    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, Hertz::khz(400), Default::default());
    let mut display: Display<Size128x64, _> = Display::new(I2cBus::new(i2c));

    if let Err(e) = display.init() {
        warn!("display init failed: {}", e);
    } else {
        info!("display up, starting demo loop");
    }

    loop {
        scenes::welcome(&mut display);
        pause(&mut wdg).await;

        scenes::figures(&mut display);
        pause(&mut wdg).await;

        scenes::headers(&mut display);
        pause(&mut wdg).await;

        scenes::scrollbar_walk(&mut display, &mut wdg).await;
        pause(&mut wdg).await;

        scenes::menu_walk(&mut display, &mut wdg).await;
        pause(&mut wdg).await;

        scenes::progress_sweeps(&mut display, &mut wdg);
        pause(&mut wdg).await;

        scenes::charset_grids(&mut display, &mut wdg).await;
        pause(&mut wdg).await;

        scenes::logo(&mut display);
        pause(&mut wdg).await;

        scenes::fps_glyphs(&mut display, &mut wdg);
        pause(&mut wdg).await;

        scenes::fps_report(&mut display, &mut wdg);
        pause(&mut wdg).await;
    }
}

async fn pause(wdg: &mut IndependentWatchdog<'_, IWDG>) {
    wdg.pet();
    Timer::after(SCENE_PAUSE).await;
    wdg.pet();
}
