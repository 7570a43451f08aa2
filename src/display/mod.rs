// src/display/mod.rs
//! Message-based display boundary.
//!
//! - DisplayDriver: Platform-specific window primitives
//! - DisplayManager: Window state and typed request helpers
//! - Messages: Request/Response protocol for communication
//! - Viewport: Letterboxing and window-to-backbuffer mapping

pub mod driver;
pub mod drivers;
pub mod manager;
pub mod messages;
pub mod viewport;

#[cfg(test)]
mod tests;

pub use driver::DisplayDriver;
pub use drivers::{HeadlessDisplayDriver, HeadlessHandle};
pub use manager::{DisplayManager, DisplayMetrics};
pub use messages::{DisplayError, DisplayEvent, DriverRequest, DriverResponse};
pub use viewport::Viewport;
