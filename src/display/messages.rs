// src/display/messages.rs
//! Message types for communication between the frame context and a
//! DisplayDriver.
//!
//! Presentation hands the backbuffer over by value and gets it back in the
//! response, so the driver never aliases the context's pixels.

use thiserror::Error;

use crate::geometry::Rect;
use crate::keys::{KeyCode, MouseButton};
use crate::pixels::PixelBuffer;

/// Requests sent from the frame context to the driver.
#[derive(Debug)]
pub enum DriverRequest {
    /// Create the window. Driver responds with InitComplete.
    Init {
        title: String,
        width_px: u32,
        height_px: u32,
    },

    /// Drain pending native events. Driver responds with Events.
    PollEvents,

    /// Show the backbuffer scaled into `dest` (window coordinates).
    /// Driver responds with PresentComplete, returning the buffer.
    Present { frame: PixelBuffer, dest: Rect },

    /// Resize the window's client area.
    SetWindowSize { width_px: u32, height_px: u32 },

    /// Show or hide the OS cursor over the client area.
    SetCursorVisibility(bool),

    /// Set the window title.
    SetTitle(String),

    /// Release the window and any OS resources.
    Destroy,
}

/// Responses sent from the driver back to the frame context.
#[derive(Debug)]
pub enum DriverResponse {
    /// Window created with the given client size.
    InitComplete { width_px: u32, height_px: u32 },

    /// Native events that occurred since the last poll.
    Events(Vec<DisplayEvent>),

    /// Presentation done, buffer ownership returned.
    PresentComplete(PixelBuffer),

    WindowSizeSet,
    CursorVisibilitySet,
    TitleSet,
    Destroyed,
}

/// Platform-agnostic window events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    /// Key went down. `repeat` is set for auto-repeat of a held key.
    KeyDown { key: KeyCode, repeat: bool },

    KeyUp { key: KeyCode },

    MouseButtonPress { button: MouseButton },

    MouseButtonRelease { button: MouseButton },

    /// Cursor position in window client coordinates.
    MouseMove { x: i32, y: i32 },

    /// Wheel movement in whole notches; positive is away from the user.
    MouseWheel { notches: i32 },

    /// Client area resized. Zero sizes (minimised) are ignored.
    Resize { width_px: u32, height_px: u32 },

    /// User asked to close the window.
    CloseRequested,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("window creation failed: {0}")]
    InitFailed(String),
    /// Presentation failed; the frame is handed back so it is not lost.
    #[error("presentation failed: {reason}")]
    PresentationFailed { frame: PixelBuffer, reason: String },
    #[error("driver answered {request} with an unexpected response")]
    UnexpectedResponse { request: &'static str },
    #[error("display driver error: {0}")]
    Generic(String),
}
