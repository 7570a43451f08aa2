// src/display/manager.rs
//! DisplayManager - Synchronous wrapper around DisplayDriver.

use crate::display::driver::DisplayDriver;
use crate::display::messages::{DisplayError, DisplayEvent, DriverRequest, DriverResponse};
use crate::display::viewport::Viewport;
use crate::geometry::Rect;
use crate::pixels::PixelBuffer;
use log::{debug, info, trace};

/// Window metrics reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMetrics {
    pub width_px: u32,
    pub height_px: u32,
}

/// DisplayManager owns the driver and tracks the window's client size.
pub struct DisplayManager {
    driver: Box<dyn DisplayDriver>,
    metrics: DisplayMetrics,
}

impl DisplayManager {
    /// Initializes `driver` with a window of the requested size.
    pub fn new(
        mut driver: Box<dyn DisplayDriver>,
        title: &str,
        width_px: u32,
        height_px: u32,
    ) -> Result<Self, DisplayError> {
        info!("DisplayManager: Initializing driver ({}x{} '{}')...", width_px, height_px, title);
        let response = driver.handle_request(DriverRequest::Init {
            title: title.to_string(),
            width_px,
            height_px,
        })?;

        let metrics = match response {
            DriverResponse::InitComplete { width_px, height_px } => {
                info!("DisplayManager: Initialized - {}x{} px", width_px, height_px);
                DisplayMetrics { width_px, height_px }
            }
            other => {
                debug!("DisplayManager: Init answered with {:?}", other);
                return Err(DisplayError::UnexpectedResponse { request: "Init" });
            }
        };

        Ok(Self { driver, metrics })
    }

    /// Forward a request to the driver.
    pub fn handle_request(&mut self, request: DriverRequest) -> Result<DriverResponse, DisplayError> {
        self.driver.handle_request(request)
    }

    /// Drains native events. Resize events also update the tracked metrics;
    /// zero-sized resizes (minimised windows) are dropped.
    pub fn poll_events(&mut self) -> Result<Vec<DisplayEvent>, DisplayError> {
        let events = match self.driver.handle_request(DriverRequest::PollEvents)? {
            DriverResponse::Events(events) => events,
            _ => return Err(DisplayError::UnexpectedResponse { request: "PollEvents" }),
        };

        let mut kept = Vec::with_capacity(events.len());
        for event in events {
            if let DisplayEvent::Resize { width_px, height_px } = event {
                if width_px == 0 || height_px == 0 {
                    trace!("DisplayManager: ignoring zero-sized resize");
                    continue;
                }
                debug!("DisplayManager: window resized to {}x{}", width_px, height_px);
                self.metrics = DisplayMetrics { width_px, height_px };
            }
            kept.push(event);
        }
        Ok(kept)
    }

    /// Presents `frame` letterboxed into the window and returns it.
    pub fn present(&mut self, frame: PixelBuffer) -> Result<PixelBuffer, DisplayError> {
        let dest = self.viewport_for(&frame).letterbox();
        match self.driver.handle_request(DriverRequest::Present { frame, dest })? {
            DriverResponse::PresentComplete(frame) => Ok(frame),
            _ => Err(DisplayError::UnexpectedResponse { request: "Present" }),
        }
    }

    pub fn set_window_size(&mut self, width_px: u32, height_px: u32) -> Result<(), DisplayError> {
        match self
            .driver
            .handle_request(DriverRequest::SetWindowSize { width_px, height_px })?
        {
            DriverResponse::WindowSizeSet => {
                self.metrics = DisplayMetrics { width_px, height_px };
                Ok(())
            }
            _ => Err(DisplayError::UnexpectedResponse { request: "SetWindowSize" }),
        }
    }

    pub fn set_cursor_visibility(&mut self, visible: bool) -> Result<(), DisplayError> {
        match self
            .driver
            .handle_request(DriverRequest::SetCursorVisibility(visible))?
        {
            DriverResponse::CursorVisibilitySet => Ok(()),
            _ => Err(DisplayError::UnexpectedResponse { request: "SetCursorVisibility" }),
        }
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), DisplayError> {
        match self
            .driver
            .handle_request(DriverRequest::SetTitle(title.to_string()))?
        {
            DriverResponse::TitleSet => Ok(()),
            _ => Err(DisplayError::UnexpectedResponse { request: "SetTitle" }),
        }
    }

    pub fn destroy(&mut self) -> Result<(), DisplayError> {
        match self.driver.handle_request(DriverRequest::Destroy)? {
            DriverResponse::Destroyed => Ok(()),
            _ => Err(DisplayError::UnexpectedResponse { request: "Destroy" }),
        }
    }

    /// Viewport pairing `frame`'s size with the current window size.
    pub fn viewport_for(&self, frame: &PixelBuffer) -> Viewport {
        Viewport::new(frame.width(), frame.height(), self.metrics.width_px, self.metrics.height_px)
    }

    /// Where a frame of the given size lands in the window.
    pub fn letterbox(&self, buffer_width: u32, buffer_height: u32) -> Rect {
        Viewport::new(buffer_width, buffer_height, self.metrics.width_px, self.metrics.height_px).letterbox()
    }

    pub fn metrics(&self) -> &DisplayMetrics {
        &self.metrics
    }

    pub fn width_px(&self) -> u32 {
        self.metrics.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.metrics.height_px
    }
}
