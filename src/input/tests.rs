// src/input/tests.rs

use super::*;
use crate::geometry::Point;
use test_log::test;

const VIEW: Viewport = Viewport::new(320, 240, 320, 240);

fn frame(input: &mut InputState, events: &[DisplayEvent]) {
    input.begin_frame();
    for event in events {
        input.apply_event(event, &VIEW);
    }
}

#[test]
fn key_goes_through_pressed_held_released() {
    let a = KeyCode::from_ascii(b'a');
    let mut input = InputState::new();

    frame(&mut input, &[]);
    assert!(!input.is_key_pressed(a) && !input.is_key_held(a) && !input.is_key_released(a));

    frame(&mut input, &[DisplayEvent::KeyDown { key: a, repeat: false }]);
    assert!(input.is_key_pressed(a));
    assert!(input.is_key_held(a));
    assert!(!input.is_key_released(a));

    frame(&mut input, &[]);
    assert!(!input.is_key_pressed(a));
    assert!(input.is_key_held(a));

    frame(&mut input, &[DisplayEvent::KeyUp { key: a }]);
    assert!(!input.is_key_held(a));
    assert!(input.is_key_released(a));

    frame(&mut input, &[]);
    assert!(!input.is_key_released(a));
}

#[test]
fn auto_repeat_does_not_re_press() {
    let mut input = InputState::new();
    frame(&mut input, &[DisplayEvent::KeyDown { key: KeyCode::SPACE, repeat: false }]);
    frame(&mut input, &[DisplayEvent::KeyDown { key: KeyCode::SPACE, repeat: true }]);
    assert!(!input.is_key_pressed(KeyCode::SPACE));
    assert!(input.is_key_held(KeyCode::SPACE));
}

#[test]
fn auto_repeat_alone_does_not_press_a_released_key() {
    let mut input = InputState::new();
    frame(&mut input, &[DisplayEvent::KeyDown { key: KeyCode::ENTER, repeat: true }]);
    assert!(!input.is_key_held(KeyCode::ENTER));
}

#[test]
fn press_and_release_in_one_frame_is_invisible() {
    let mut input = InputState::new();
    frame(
        &mut input,
        &[
            DisplayEvent::KeyDown { key: KeyCode::ESCAPE, repeat: false },
            DisplayEvent::KeyUp { key: KeyCode::ESCAPE },
        ],
    );
    assert!(!input.is_key_pressed(KeyCode::ESCAPE));
    assert!(!input.is_key_released(KeyCode::ESCAPE));
}

#[test]
fn mouse_buttons_track_edges_independently() {
    let mut input = InputState::new();
    frame(&mut input, &[DisplayEvent::MouseButtonPress { button: MouseButton::Left }]);
    assert!(input.is_mouse_button_pressed(MouseButton::Left));
    assert!(!input.is_mouse_button_held(MouseButton::Right));

    frame(
        &mut input,
        &[
            DisplayEvent::MouseButtonPress { button: MouseButton::Right },
            DisplayEvent::MouseButtonRelease { button: MouseButton::Left },
        ],
    );
    assert!(input.is_mouse_button_released(MouseButton::Left));
    assert!(input.is_mouse_button_pressed(MouseButton::Right));
    assert!(!input.is_mouse_button_held(MouseButton::Middle));
}

#[test]
fn mouse_delta_accumulates_and_drains() {
    let mut input = InputState::new();
    frame(
        &mut input,
        &[
            DisplayEvent::MouseMove { x: 3, y: 2 },
            DisplayEvent::MouseMove { x: 2, y: 2 },
        ],
    );
    assert_eq!(input.mouse_position(), Point::new(2, 2));
    assert_eq!(input.mouse_delta(), Point::new(2, 2));
    assert_eq!(input.mouse_delta(), Point::new(0, 0));
}

#[test]
fn mouse_position_is_mapped_and_clamped() {
    let viewport = Viewport::new(100, 100, 300, 100);
    let mut input = InputState::new();
    input.apply_event(&DisplayEvent::MouseMove { x: 150, y: 50 }, &viewport);
    assert_eq!(input.mouse_position(), Point::new(50, 50));

    input.apply_event(&DisplayEvent::MouseMove { x: 299, y: 500 }, &viewport);
    assert_eq!(input.mouse_position(), Point::new(99, 99));
}

#[test]
fn wheel_notches_accumulate_and_drain() {
    let mut input = InputState::new();
    frame(
        &mut input,
        &[
            DisplayEvent::MouseWheel { notches: 1 },
            DisplayEvent::MouseWheel { notches: 2 },
            DisplayEvent::MouseWheel { notches: -1 },
        ],
    );
    assert_eq!(input.mouse_wheel_delta(), 2);
    assert_eq!(input.mouse_wheel_delta(), 0);
}
