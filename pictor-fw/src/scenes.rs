//! Demo scenes cycled by the main loop.
//!
//! Each scene paints through the shared [`Display`] and presents its
//! result; the longer-running ones feed the watchdog as they go.

use core::fmt::Write;

use embassy_stm32::peripherals::IWDG;
use embassy_stm32::wdg::IndependentWatchdog;
use embassy_time::{Duration, Instant, Timer};
use heapless::String;

use pictor_driver::{Display, DisplayBus};
use pictor_gfx::{font, Color, Font, Size128x64};
use pictor_ui::{
    Header, HeaderStyle, Margin, Menu, Orientation, Padding, PercentPosition, ProgressBar,
    Scrollbar, TextAlign,
};

use crate::images;

/// Title card: both fonts, Latin and Cyrillic.
pub fn welcome<B: DisplayBus>(display: &mut Display<Size128x64, B>) {
    defmt::debug!("scene: welcome");
    display.clear();
    let frame = display.frame_mut();
    frame.draw_str(43, 2, "Pictor", &font::FONT_7X14, Color::On);
    frame.draw_str(22, 20, "Привет, мир!", &font::FONT_7X14, Color::On);
    frame.draw_str(0, 40, "ABC abc 0123456789", &font::FONT_8X8, Color::On);
    frame.draw_str(0, 52, "АБВГД абвгд ЭЮЯ эюя", &font::FONT_8X8, Color::On);
    display.flush();
}

/// Geometry sampler, including shapes that run off the canvas.
pub fn figures<B: DisplayBus>(display: &mut Display<Size128x64, B>) {
    defmt::debug!("scene: figures");
    display.clear();
    let frame = display.frame_mut();
    frame.draw_rect(10, 10, 20, 30, Color::On);
    frame.draw_rect_corners(12, 12, 32, 42, Color::On);
    frame.fill_rect(40, 10, 20, 30, Color::On);
    frame.draw_circle(80, 20, 10, Color::On);
    frame.draw_circle(80, 20, 12, Color::On);
    frame.draw_circle(80, 20, 5, Color::On);
    frame.draw_circle(80, 20, 20, Color::On);
    frame.fill_circle(80, 40, 10, Color::On);
    frame.draw_triangle(2, 2, 50, 50, 9, 45, Color::On);
    frame.fill_triangle(50, 52, 60, 50, 60, 60, Color::On);
    // clipped cases: endpoints and parts of these lie off screen
    frame.draw_line(-20, 70, 150, -10, Color::On);
    frame.draw_circle(120, 60, 14, Color::On);
    display.flush();
}

/// Two headers with different padding and rule styles.
pub fn headers<B: DisplayBus>(display: &mut Display<Size128x64, B>) {
    defmt::debug!("scene: headers");
    display.clear();
    let pad = Padding {
        top: 2,
        bottom: 2,
        left: 4,
        right: 4,
    };
    Header::new(
        "Заголовок",
        &font::DEFAULT,
        TextAlign::Center,
        HeaderStyle::DoubleLine,
        pad,
    )
    .draw(display);

    let pad = Padding {
        top: 22,
        bottom: 2,
        left: 15,
        right: 15,
    };
    Header::new(
        "Заголовок",
        &font::DEFAULT,
        TextAlign::Center,
        HeaderStyle::Line,
        pad,
    )
    .draw(display);
}

/// Standalone scrollbar stepping its offset down and back up.
pub async fn scrollbar_walk<B: DisplayBus>(
    display: &mut Display<Size128x64, B>,
    wdg: &mut IndependentWatchdog<'_, IWDG>,
) {
    defmt::debug!("scene: scrollbar");
    display.clear();
    let margin = Margin {
        top: 1,
        bottom: 1,
        left: 1,
        right: 1,
    };
    let mut bar = Scrollbar::new(120, 8, 5, 48, 10, 4, Orientation::Vertical, margin);
    bar.draw(display);
    for _ in 0..6 {
        Timer::after(Duration::from_millis(150)).await;
        bar.scroll_down();
        bar.draw(display);
        wdg.pet();
    }
    for _ in 0..6 {
        Timer::after(Duration::from_millis(150)).await;
        bar.scroll_up();
        bar.draw(display);
        wdg.pet();
    }
}

/// Menu with a header: walk the selection all the way down, then back.
pub async fn menu_walk<B: DisplayBus>(
    display: &mut Display<Size128x64, B>,
    wdg: &mut IndependentWatchdog<'_, IWDG>,
) {
    defmt::debug!("scene: menu");
    static ITEMS: [&str; 7] = [
        "Настройки",
        "Информация",
        "Яркость",
        "Контраст",
        "Сброс",
        "Сохранить",
        "Выход",
    ];

    display.clear();
    let header = Header::new(
        "Меню",
        &font::DEFAULT,
        TextAlign::Center,
        HeaderStyle::Line,
        Padding::default(),
    );
    let mut menu = Menu::new(
        &ITEMS,
        &font::DEFAULT,
        Some(header),
        1,
        TextAlign::Left,
        Padding::default(),
        Margin::default(),
    );
    menu.draw(display);
    Timer::after(Duration::from_millis(1000)).await;

    for _ in 0..ITEMS.len() {
        wdg.pet();
        menu.scroll_down();
        menu.draw(display);
        Timer::after(Duration::from_millis(100)).await;
    }
    for _ in 0..ITEMS.len() {
        wdg.pet();
        menu.scroll_up();
        menu.draw(display);
        Timer::after(Duration::from_millis(100)).await;
    }
}

/// Progress sweeps 0..=100 with each percent label placement.
pub fn progress_sweeps<B: DisplayBus>(
    display: &mut Display<Size128x64, B>,
    wdg: &mut IndependentWatchdog<'_, IWDG>,
) {
    defmt::debug!("scene: progress");
    display.clear();
    sweep(display, wdg, PercentPosition::None, false, Padding::default());
    display.clear();
    sweep(display, wdg, PercentPosition::Bottom, true, Padding::default());
    display.clear();
    let pad = Padding {
        right: 30,
        ..Padding::default()
    };
    sweep(display, wdg, PercentPosition::Right, true, pad);
}

fn sweep<B: DisplayBus>(
    display: &mut Display<Size128x64, B>,
    wdg: &mut IndependentWatchdog<'_, IWDG>,
    position: PercentPosition,
    inner_padding: bool,
    padding: Padding,
) {
    let mut bar = ProgressBar::new(10, 30, 100, 10, position, inner_padding, padding);
    for value in 0..=100 {
        bar.set_progress(value);
        bar.draw(display);
        wdg.pet();
    }
}

/// Consecutive glyph codes laid out in a grid: ASCII in the large font,
/// then the Cyrillic glyph range in the small one.
pub async fn charset_grids<B: DisplayBus>(
    display: &mut Display<Size128x64, B>,
    wdg: &mut IndependentWatchdog<'_, IWDG>,
) {
    defmt::debug!("scene: charsets");
    glyph_grid(display, b' ', &font::FONT_7X14);
    wdg.pet();
    Timer::after(Duration::from_millis(2000)).await;
    glyph_grid(display, 0xC0, &font::FONT_8X8);
    wdg.pet();
}

fn glyph_grid<B: DisplayBus>(display: &mut Display<Size128x64, B>, first: u8, font: &Font) {
    display.clear();
    let frame = display.frame_mut();
    let mut code = first;
    let mut y: u16 = 0;
    while y < (64 - font.height) as u16 {
        let mut x: u16 = 0;
        while x < (128 - font.width) as u16 {
            frame.draw_char(x as u8, y as u8, code, font, Color::On);
            code = code.wrapping_add(1);
            x += font.width as u16;
        }
        y += font.height as u16;
    }
    display.flush();
}

/// Bitmap blit: two easels side by side, one inverted.
pub fn logo<B: DisplayBus>(display: &mut Display<Size128x64, B>) {
    defmt::debug!("scene: logo");
    display.clear();
    let frame = display.frame_mut();
    frame.draw_bitmap(
        16,
        16,
        &images::EASEL_32X32,
        images::EASEL_WIDTH,
        images::EASEL_HEIGHT,
        Color::On,
    );
    frame.draw_bitmap(
        80,
        16,
        &images::EASEL_32X32,
        images::EASEL_WIDTH,
        images::EASEL_HEIGHT,
        Color::Off,
    );
    display.flush();
}

/// Single-glyph redraw rate per font: one centered cell cycles through
/// the ASCII range as fast as the bus will carry it.
pub fn fps_glyphs<B: DisplayBus>(
    display: &mut Display<Size128x64, B>,
    wdg: &mut IndependentWatchdog<'_, IWDG>,
) {
    defmt::debug!("scene: glyph fps");
    display.clear();
    let small = glyph_rate(display, &font::FONT_8X8, wdg);
    defmt::info!("8x8 glyph redraw: {=f32} fps", small);
    display.clear();
    let large = glyph_rate(display, &font::FONT_7X14, wdg);
    defmt::info!("7x14 glyph redraw: {=f32} fps", large);

    display.clear();
    let frame = display.frame_mut();
    let mut line: String<16> = String::new();
    write!(line, "~{:.1} FPS", small).ok();
    frame.draw_str(8, 2, line.as_str(), &font::FONT_8X8, Color::On);
    line.clear();
    write!(line, "~{:.1} FPS", large).ok();
    frame.draw_str(8, 12, line.as_str(), &font::FONT_7X14, Color::On);
    display.flush();
}

fn glyph_rate<B: DisplayBus>(
    display: &mut Display<Size128x64, B>,
    type_face: &Font,
    wdg: &mut IndependentWatchdog<'_, IWDG>,
) -> f32 {
    let x = (128 - type_face.width) / 2;
    let y = (64 - type_face.height) / 2;
    let start = Instant::now();
    let mut frames: u32 = 0;
    let mut code = 0x20u8;
    while start.elapsed() < Duration::from_millis(3000) {
        code = if code < 0x70 { code + 1 } else { 0x20 };
        display.frame_mut().draw_char(x, y, code, type_face, Color::On);
        display.flush();
        frames += 1;
        wdg.pet();
    }
    frames as f32 * 1000.0 / start.elapsed().as_millis() as f32
}

/// Throughput check: torn redraw (every other column toggled per frame,
/// the worst case for run coalescing) against full-frame fills.
pub fn fps_report<B: DisplayBus>(
    display: &mut Display<Size128x64, B>,
    wdg: &mut IndependentWatchdog<'_, IWDG>,
) {
    defmt::debug!("scene: fps");
    let torn = {
        let start = Instant::now();
        let mut frames: u32 = 0;
        while start.elapsed() < Duration::from_millis(3000) {
            let color = if frames % 2 == 0 { Color::On } else { Color::Off };
            let frame = display.frame_mut();
            let mut x = 1i16;
            while x < 128 {
                frame.fill_rect(x, 0, 1, 64, color);
                x += 2;
            }
            display.flush();
            frames += 1;
            wdg.pet();
        }
        frames as f32 * 1000.0 / start.elapsed().as_millis() as f32
    };
    defmt::info!("torn redraw: {=f32} fps", torn);

    let whole = {
        let start = Instant::now();
        let mut frames: u32 = 0;
        while start.elapsed() < Duration::from_millis(5000) {
            display.fill_and_present(if frames % 2 == 0 { Color::On } else { Color::Off });
            frames += 1;
            wdg.pet();
        }
        frames as f32 * 1000.0 / start.elapsed().as_millis() as f32
    };
    defmt::info!("whole redraw: {=f32} fps", whole);

    display.clear();
    let frame = display.frame_mut();
    let mut line: String<16> = String::new();
    frame.draw_str(0, 0, "Torn drawing:", &font::DEFAULT, Color::On);
    write!(line, "~{:.1} FPS", torn).ok();
    frame.draw_str(8, 15, line.as_str(), &font::DEFAULT, Color::On);
    frame.draw_str(0, 30, "Whole drawing:", &font::DEFAULT, Color::On);
    line.clear();
    write!(line, "~{:.1} FPS", whole).ok();
    frame.draw_str(8, 45, line.as_str(), &font::DEFAULT, Color::On);
    display.flush();
}
