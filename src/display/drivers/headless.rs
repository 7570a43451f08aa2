// src/display/drivers/headless.rs

//! Headless display driver.
//!
//! Keeps no window; events are queued through a [`HeadlessHandle`] and
//! presented frames are recorded there, so frame loops can run in tests and
//! in the demo binary without a display server.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::display::driver::DisplayDriver;
use crate::display::messages::{DisplayError, DisplayEvent, DriverRequest, DriverResponse};
use crate::geometry::Rect;
use crate::pixels::PixelBuffer;
use log::{info, trace};

#[derive(Debug, Default)]
struct HeadlessState {
    title: String,
    width_px: u32,
    height_px: u32,
    cursor_visible: bool,
    pending: VecDeque<DisplayEvent>,
    presented: usize,
    last_frame: Option<PixelBuffer>,
    last_dest: Option<Rect>,
    fail_next_present: bool,
    destroyed: bool,
}

pub struct HeadlessDisplayDriver {
    state: Rc<RefCell<HeadlessState>>,
}

/// Test-side view of a [`HeadlessDisplayDriver`].
#[derive(Clone)]
pub struct HeadlessHandle {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessDisplayDriver {
    pub fn new() -> (Self, HeadlessHandle) {
        let state = Rc::new(RefCell::new(HeadlessState {
            cursor_visible: true,
            ..HeadlessState::default()
        }));
        (
            Self { state: Rc::clone(&state) },
            HeadlessHandle { state },
        )
    }
}

impl DisplayDriver for HeadlessDisplayDriver {
    fn handle_request(&mut self, request: DriverRequest) -> Result<DriverResponse, DisplayError> {
        let mut state = self.state.borrow_mut();
        match request {
            DriverRequest::Init { title, width_px, height_px } => {
                info!("HeadlessDisplayDriver: Init {}x{} '{}'", width_px, height_px, title);
                state.title = title;
                state.width_px = width_px;
                state.height_px = height_px;
                state.destroyed = false;
                Ok(DriverResponse::InitComplete { width_px, height_px })
            }
            DriverRequest::PollEvents => {
                let events: Vec<DisplayEvent> = state.pending.drain(..).collect();
                trace!("HeadlessDisplayDriver: PollEvents -> {} events", events.len());
                Ok(DriverResponse::Events(events))
            }
            DriverRequest::Present { frame, dest } => {
                if state.fail_next_present {
                    state.fail_next_present = false;
                    return Err(DisplayError::PresentationFailed {
                        frame,
                        reason: "simulated presentation failure".to_string(),
                    });
                }
                trace!("HeadlessDisplayDriver: Present into {:?}", dest);
                state.presented += 1;
                state.last_frame = Some(frame.clone());
                state.last_dest = Some(dest);
                Ok(DriverResponse::PresentComplete(frame))
            }
            DriverRequest::SetWindowSize { width_px, height_px } => {
                info!("HeadlessDisplayDriver: SetWindowSize {}x{}", width_px, height_px);
                state.width_px = width_px;
                state.height_px = height_px;
                Ok(DriverResponse::WindowSizeSet)
            }
            DriverRequest::SetCursorVisibility(visible) => {
                info!("HeadlessDisplayDriver: SetCursorVisibility {}", visible);
                state.cursor_visible = visible;
                Ok(DriverResponse::CursorVisibilitySet)
            }
            DriverRequest::SetTitle(title) => {
                info!("HeadlessDisplayDriver: SetTitle '{}'", title);
                state.title = title;
                Ok(DriverResponse::TitleSet)
            }
            DriverRequest::Destroy => {
                info!("HeadlessDisplayDriver: Destroy");
                state.destroyed = true;
                Ok(DriverResponse::Destroyed)
            }
        }
    }
}

impl HeadlessHandle {
    /// Queues an event for the next poll.
    pub fn push_event(&self, event: DisplayEvent) {
        self.state.borrow_mut().pending.push_back(event);
    }

    /// Makes the next `Present` fail with `PresentationFailed`.
    pub fn fail_next_present(&self) {
        self.state.borrow_mut().fail_next_present = true;
    }

    pub fn presented_frames(&self) -> usize {
        self.state.borrow().presented
    }

    /// Copy of the most recently presented frame.
    pub fn last_frame(&self) -> Option<PixelBuffer> {
        self.state.borrow().last_frame.clone()
    }

    pub fn last_dest(&self) -> Option<Rect> {
        self.state.borrow().last_dest
    }

    pub fn window_size(&self) -> (u32, u32) {
        let state = self.state.borrow();
        (state.width_px, state.height_px)
    }

    pub fn cursor_visible(&self) -> bool {
        self.state.borrow().cursor_visible
    }

    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.borrow().destroyed
    }
}
