// src/display/tests.rs

use super::*;
use crate::geometry::Rect;
use crate::keys::KeyCode;
use crate::pixels::PixelBuffer;
use test_log::test;

fn manager(width: u32, height: u32) -> (DisplayManager, HeadlessHandle) {
    let (driver, handle) = HeadlessDisplayDriver::new();
    let manager = DisplayManager::new(Box::new(driver), "test", width, height).unwrap();
    (manager, handle)
}

#[test]
fn init_reports_window_size() {
    let (manager, handle) = manager(640, 480);
    assert_eq!(manager.metrics(), &DisplayMetrics { width_px: 640, height_px: 480 });
    assert_eq!(handle.window_size(), (640, 480));
    assert_eq!(handle.title(), "test");
}

#[test]
fn poll_drains_queued_events_in_order() {
    let (mut manager, handle) = manager(100, 100);
    handle.push_event(DisplayEvent::KeyDown { key: KeyCode::SPACE, repeat: false });
    handle.push_event(DisplayEvent::MouseMove { x: 3, y: 4 });

    let events = manager.poll_events().unwrap();
    assert_eq!(
        events,
        vec![
            DisplayEvent::KeyDown { key: KeyCode::SPACE, repeat: false },
            DisplayEvent::MouseMove { x: 3, y: 4 },
        ]
    );
    assert!(manager.poll_events().unwrap().is_empty());
}

#[test]
fn resize_updates_metrics_and_zero_size_is_dropped() {
    let (mut manager, handle) = manager(100, 100);
    handle.push_event(DisplayEvent::Resize { width_px: 0, height_px: 0 });
    handle.push_event(DisplayEvent::Resize { width_px: 300, height_px: 200 });

    let events = manager.poll_events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(manager.width_px(), 300);
    assert_eq!(manager.height_px(), 200);
}

#[test]
fn present_returns_the_frame_and_letterboxes() {
    let (mut manager, handle) = manager(300, 100);
    let frame = PixelBuffer::new(100, 100).unwrap();

    let back = manager.present(frame).unwrap();
    assert_eq!(back.width(), 100);
    assert_eq!(handle.presented_frames(), 1);
    assert_eq!(handle.last_dest(), Some(Rect::new(100, 0, 100, 100)));
}

#[test]
fn failed_present_hands_the_frame_back() {
    let (mut manager, handle) = manager(10, 10);
    handle.fail_next_present();

    let err = manager.present(PixelBuffer::new(10, 10).unwrap()).unwrap_err();
    match err {
        DisplayError::PresentationFailed { frame, .. } => assert_eq!(frame.width(), 10),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(handle.presented_frames(), 0);
}

#[test]
fn window_requests_reach_the_driver() {
    let (mut manager, handle) = manager(10, 10);
    manager.set_window_size(20, 30).unwrap();
    manager.set_cursor_visibility(false).unwrap();
    manager.set_title("renamed").unwrap();
    manager.destroy().unwrap();

    assert_eq!(manager.width_px(), 20);
    assert_eq!(handle.window_size(), (20, 30));
    assert!(!handle.cursor_visible());
    assert_eq!(handle.title(), "renamed");
    assert!(handle.is_destroyed());
}
