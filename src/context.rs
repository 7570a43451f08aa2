// src/context.rs

//! The frame context: one window, its backbuffer, input, clock and fonts.
//!
//! A frame is `update()` followed by drawing calls. `update` presents what
//! was drawn during the previous frame, paces the loop, and applies the
//! frame's window events to the input state. It returns `false` once the
//! window has been asked to close.
//!
//! The context borrows fonts for `'f`, so a caller-built font may borrow an
//! atlas the caller owns. Teardown is explicit through [`FrameContext::close`].

use std::fmt;
use std::path::Path;

use log::{debug, error, info, trace, warn};

use crate::color::Color;
use crate::config::Config;
use crate::display::{DisplayDriver, DisplayError, DisplayEvent, DisplayManager};
use crate::error::{Error, Result};
use crate::font::{self, embedded, Font};
use crate::geometry::{Point, Rect};
use crate::image::{self as imaging, ImageDecoder, StandardDecoder};
use crate::input::InputState;
use crate::keys::{KeyCode, MouseButton};
use crate::pixels::PixelBuffer;
use crate::rasterizer;
use crate::timing::{FrameClock, FrameStats, SystemTimeSource, TimeSource, Timer};

pub struct FrameContext<'f> {
    display: DisplayManager,
    backbuffer: PixelBuffer,
    input: InputState,
    clock: FrameClock,
    decoder: Box<dyn ImageDecoder>,
    default_font: Option<Font<'static>>,
    custom_font: Option<Font<'f>>,
    clear_color: Color,
    cursor_visible: bool,
    open: bool,
    destroyed: bool,
}

impl<'f> FrameContext<'f> {
    /// Opens a window through `driver` using the wall clock and the standard
    /// image decoder.
    pub fn create(config: &Config, driver: Box<dyn DisplayDriver>) -> Result<Self> {
        Self::with_parts(
            config,
            driver,
            Box::new(SystemTimeSource::new()),
            Box::new(StandardDecoder),
        )
    }

    /// Opens a window with an explicit time source and image decoder.
    pub fn with_parts(
        config: &Config,
        driver: Box<dyn DisplayDriver>,
        time: Box<dyn TimeSource>,
        decoder: Box<dyn ImageDecoder>,
    ) -> Result<Self> {
        let window = &config.window;
        let backbuffer = PixelBuffer::new(window.width, window.height)?;

        let scale = window.scale.max(1);
        let mut display = DisplayManager::new(
            driver,
            &window.title,
            window.width.saturating_mul(scale),
            window.height.saturating_mul(scale),
        )?;

        let cursor_visible = config.appearance.cursor_visible;
        if !cursor_visible {
            display.set_cursor_visibility(false)?;
        }

        let default_font = if config.font.use_default {
            Some(embedded::default_font()?)
        } else {
            None
        };

        let custom_font = match &config.font.path {
            Some(path) => {
                info!("Loading font atlas {}", path.display());
                Some(font::load_font(path, decoder.as_ref(), config.font.columns, config.font.rows)?)
            }
            None => None,
        };

        info!(
            "FrameContext: {}x{} backbuffer in a {}x{} window, {} fps",
            window.width,
            window.height,
            display.width_px(),
            display.height_px(),
            config.timing.target_fps
        );

        Ok(Self {
            display,
            backbuffer,
            input: InputState::new(),
            clock: FrameClock::new(config.timing.target_fps, time),
            decoder,
            default_font,
            custom_font,
            clear_color: config.appearance.clear_color,
            cursor_visible,
            open: true,
            destroyed: false,
        })
    }

    // --- Frame loop ---

    /// Advances one frame. Returns `Ok(false)` once the window should close.
    ///
    /// Presents the backbuffer, waits for the next frame boundary, then
    /// snapshots input and applies this frame's events.
    pub fn update(&mut self) -> Result<bool> {
        if !self.open {
            return Ok(false);
        }

        self.present()?;

        let stats = self.clock.tick();
        trace!(
            "frame: dt {:.4}s, {:.1} fps, {} ms",
            stats.delta_time,
            stats.fps,
            stats.elapsed_ms
        );

        self.input.begin_frame();
        let events = self.display.poll_events()?;
        let viewport = self.display.viewport_for(&self.backbuffer);
        for event in &events {
            if *event == DisplayEvent::CloseRequested {
                info!("FrameContext: close requested");
                self.open = false;
                continue;
            }
            self.input.apply_event(event, &viewport);
        }

        Ok(self.open)
    }

    fn present(&mut self) -> Result<()> {
        let (width, height) = (self.backbuffer.width(), self.backbuffer.height());
        let frame = std::mem::take(&mut self.backbuffer);
        match self.display.present(frame) {
            Ok(frame) => {
                self.backbuffer = frame;
                Ok(())
            }
            Err(DisplayError::PresentationFailed { frame, reason }) => {
                error!("FrameContext: presentation failed: {}", reason);
                self.backbuffer = frame;
                Err(Error::Presentation(reason))
            }
            Err(e) => {
                error!("FrameContext: presentation failed: {}", e);
                self.backbuffer = PixelBuffer::new(width, height)?;
                Err(e.into())
            }
        }
    }

    /// Releases the window, the backbuffer and the fonts. Calling it twice is
    /// a no-op.
    pub fn close(&mut self) -> Result<()> {
        if self.destroyed {
            return Ok(());
        }
        info!("FrameContext: closing");
        self.open = false;
        self.destroyed = true;
        self.backbuffer.release();
        self.custom_font = None;
        self.default_font = None;
        self.display.destroy()?;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    // --- Window ---

    /// Resizes the window to the backbuffer size times `factor`. Non-positive
    /// factors are ignored.
    pub fn set_window_scale(&mut self, factor: i32) -> Result<()> {
        if factor <= 0 {
            warn!("set_window_scale: ignoring scale factor {}", factor);
            return Ok(());
        }
        let factor = factor as u32;
        let width = self.backbuffer.width().saturating_mul(factor);
        let height = self.backbuffer.height().saturating_mul(factor);
        debug!("set_window_scale: {} -> {}x{}", factor, width, height);
        self.display.set_window_size(width, height)?;
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.display.set_title(title)?;
        Ok(())
    }

    /// Window client size in pixels.
    pub fn window_size(&self) -> (u32, u32) {
        (self.display.width_px(), self.display.height_px())
    }

    /// Where the backbuffer is drawn inside the window.
    pub fn viewport(&self) -> Rect {
        self.display.letterbox(self.backbuffer.width(), self.backbuffer.height())
    }

    pub fn set_cursor_visibility(&mut self, visible: bool) -> Result<()> {
        self.display.set_cursor_visibility(visible)?;
        self.cursor_visible = visible;
        Ok(())
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    // --- Backbuffer drawing ---

    pub fn backbuffer(&self) -> &PixelBuffer {
        &self.backbuffer
    }

    pub fn backbuffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.backbuffer
    }

    pub fn width(&self) -> u32 {
        self.backbuffer.width()
    }

    pub fn height(&self) -> u32 {
        self.backbuffer.height()
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Overwrites the backbuffer with the clear colour.
    pub fn clear(&mut self) {
        rasterizer::fill(&mut self.backbuffer, self.clear_color);
    }

    pub fn fill(&mut self, color: Color) {
        rasterizer::fill(&mut self.backbuffer, color);
    }

    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        rasterizer::draw_pixel(&mut self.backbuffer, x, y, color);
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        rasterizer::get_pixel(&self.backbuffer, x, y)
    }

    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        rasterizer::draw_line(&mut self.backbuffer, x1, y1, x2, y2, color);
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color, fill: bool) {
        rasterizer::draw_rect(&mut self.backbuffer, rect, color, fill);
    }

    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color, fill: bool) {
        rasterizer::draw_circle(&mut self.backbuffer, cx, cy, radius, color, fill);
    }

    pub fn draw_image(&mut self, image: &PixelBuffer, x: i32, y: i32) {
        rasterizer::blit(&mut self.backbuffer, image, x, y);
    }

    pub fn draw_image_rect(&mut self, image: &PixelBuffer, x: i32, y: i32, src_rect: Rect) {
        rasterizer::blit_rect(&mut self.backbuffer, image, x, y, src_rect);
    }

    // --- Images ---

    pub fn create_image(&self, width: u32, height: u32) -> Result<PixelBuffer> {
        PixelBuffer::new(width, height)
    }

    pub fn load_image(&self, path: impl AsRef<Path>) -> Result<PixelBuffer> {
        imaging::load_image(path, self.decoder.as_ref())
    }

    pub fn load_image_mem(&self, bytes: &[u8]) -> Result<PixelBuffer> {
        imaging::load_image_mem(bytes, self.decoder.as_ref())
    }

    /// Raw-fills an image, no blending.
    pub fn fill_image(&self, image: &mut PixelBuffer, color: Color) {
        rasterizer::fill(image, color);
    }

    /// Writes the backbuffer to an image file.
    pub fn save_screenshot(&self, path: impl AsRef<Path>) -> Result<()> {
        imaging::save_image(&self.backbuffer, path)
    }

    // --- Fonts and text ---

    /// Makes `font` the active font, returning the previously set one.
    pub fn set_font(&mut self, font: Font<'f>) -> Option<Font<'f>> {
        self.custom_font.replace(font)
    }

    /// Goes back to the default font, handing back the caller's font.
    pub fn reset_font(&mut self) -> Option<Font<'f>> {
        self.custom_font.take()
    }

    /// The font text is drawn with: the caller's font if set, otherwise the
    /// default font.
    pub fn active_font(&self) -> Option<&Font<'f>> {
        self.custom_font.as_ref().or(self.default_font.as_ref())
    }

    pub fn default_font(&self) -> Option<&Font<'static>> {
        self.default_font.as_ref()
    }

    pub fn load_font(&self, path: impl AsRef<Path>, columns: i32, rows: i32) -> Result<Font<'static>> {
        font::load_font(path, self.decoder.as_ref(), columns, rows)
    }

    pub fn load_font_mem(&self, bytes: &[u8], columns: i32, rows: i32) -> Result<Font<'static>> {
        font::load_font_mem(bytes, self.decoder.as_ref(), columns, rows)
    }

    /// Width of `text` in the active font, 0 without one.
    pub fn text_width(&self, text: &str) -> i32 {
        self.active_font().map_or(0, |f| f.text_width(text))
    }

    /// Line height of the active font, 0 without one.
    pub fn text_height(&self) -> i32 {
        self.active_font().map_or(0, Font::text_height)
    }

    /// Draws `text` with the active font. Logs and does nothing without one.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        let font: &Font<'f> = match (&self.custom_font, &self.default_font) {
            (Some(font), _) => font,
            (None, Some(font)) => font,
            (None, None) => {
                error!("draw_text: no active font");
                return;
            }
        };
        font::draw_text(&mut self.backbuffer, font, text, x, y, color);
    }

    /// Formats, then draws, e.g. `ctx.draw_text_fmt(0, 0, c, format_args!("{fps}"))`.
    pub fn draw_text_fmt(&mut self, x: i32, y: i32, color: Color, args: fmt::Arguments<'_>) {
        let text = args.to_string();
        self.draw_text(&text, x, y, color);
    }

    // --- Input ---

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.input.is_key_pressed(key)
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.input.is_key_held(key)
    }

    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.input.is_key_released(key)
    }

    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.input.is_mouse_button_pressed(button)
    }

    pub fn is_mouse_button_held(&self, button: MouseButton) -> bool {
        self.input.is_mouse_button_held(button)
    }

    pub fn is_mouse_button_released(&self, button: MouseButton) -> bool {
        self.input.is_mouse_button_released(button)
    }

    pub fn mouse_position(&self) -> Point {
        self.input.mouse_position()
    }

    pub fn mouse_delta(&mut self) -> Point {
        self.input.mouse_delta()
    }

    pub fn mouse_wheel_delta(&mut self) -> i32 {
        self.input.mouse_wheel_delta()
    }

    // --- Timing ---

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn frame_stats(&self) -> FrameStats {
        self.clock.stats()
    }

    pub fn delta_time(&self) -> f64 {
        self.clock.delta_time()
    }

    pub fn fps(&self) -> f64 {
        self.clock.fps()
    }

    pub fn elapsed_ms(&self) -> i64 {
        self.clock.elapsed_ms()
    }

    pub fn create_timer(&self, interval_ms: i64) -> Timer {
        Timer::new(interval_ms, &self.clock)
    }

    pub fn timer_ticked(&self, timer: &mut Timer) -> bool {
        timer.ticked(&self.clock)
    }

    pub fn timer_elapsed(&self, timer: &Timer) -> i64 {
        timer.elapsed(&self.clock)
    }

    pub fn timer_reset(&self, timer: &mut Timer) {
        timer.reset(&self.clock);
    }
}
