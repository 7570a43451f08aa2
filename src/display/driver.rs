// src/display/driver.rs
//! DisplayDriver trait - minimal interface for platform window primitives.
//!
//! Window creation, the native event pump and presentation live behind this
//! trait. All rendering logic stays in the core; a driver only moves pixels
//! and events across the OS boundary.
//!
//! ## Lifecycle
//! 1. `handle_request(Init)` - Create window, report client size
//! 2. Once per frame: `PollEvents`, then `Present`
//! 3. `handle_request(Destroy)` - Explicit teardown

use crate::display::messages::{DisplayError, DriverRequest, DriverResponse};

pub trait DisplayDriver {
    /// Handle a request, returning the matching response.
    ///
    /// ## Request/Response Pairs
    /// - `Init` → `InitComplete`
    /// - `PollEvents` → `Events`
    /// - `Present` → `PresentComplete` (buffer returned)
    /// - `SetWindowSize` → `WindowSizeSet`
    /// - `SetCursorVisibility` → `CursorVisibilitySet`
    /// - `SetTitle` → `TitleSet`
    /// - `Destroy` → `Destroyed`
    ///
    /// A failed `Present` must return the frame inside
    /// `DisplayError::PresentationFailed`.
    fn handle_request(&mut self, request: DriverRequest) -> Result<DriverResponse, DisplayError>;
}
