// tests/frame_loop.rs

use framekit::display::{DisplayEvent, HeadlessDisplayDriver, HeadlessHandle};
use framekit::image::{save_image, StandardDecoder};
use framekit::rasterizer::fill;
use framekit::timing::{ManualTimeSource, TimeSource};
use framekit::{Color, Config, Error, Font, FrameContext, KeyCode, MouseButton, Pixel, PixelBuffer, Point, Rect};
use test_log::test;

fn small_config() -> Config {
    let mut config = Config::default();
    config.window.title = "frame loop".to_string();
    config.window.width = 64;
    config.window.height = 48;
    config.timing.target_fps = 30;
    config
}

fn context<'f>(config: &Config) -> (FrameContext<'f>, HeadlessHandle, ManualTimeSource) {
    let (driver, handle) = HeadlessDisplayDriver::new();
    let time = ManualTimeSource::new();
    let ctx = FrameContext::with_parts(
        config,
        Box::new(driver),
        Box::new(time.clone()),
        Box::new(StandardDecoder),
    )
    .unwrap();
    (ctx, handle, time)
}

#[test]
fn update_presents_the_backbuffer_letterboxed() {
    let (mut ctx, handle, _time) = context(&small_config());
    assert_eq!(handle.title(), "frame loop");

    assert!(ctx.update().unwrap());

    assert_eq!(handle.presented_frames(), 1);
    assert_eq!(handle.last_dest(), Some(Rect::new(0, 0, 64, 48)));
}

#[test]
fn default_clear_colour_is_opaque_black() {
    let (mut ctx, _handle, _time) = context(&small_config());
    assert_eq!(ctx.clear_color(), Color::opaque(0, 0, 0));
    assert_eq!(ctx.get_pixel(0, 0), Color::TRANSPARENT);

    ctx.clear();

    assert_eq!(ctx.get_pixel(0, 0), Color::opaque(0, 0, 0));
    assert_eq!(ctx.get_pixel(63, 47), Color::opaque(0, 0, 0));
}

#[test]
fn drawing_shows_up_in_the_next_presented_frame() {
    let (mut ctx, handle, _time) = context(&small_config());
    ctx.set_clear_color(Color::opaque(10, 20, 30));
    ctx.clear();
    ctx.draw_pixel(5, 6, Color::opaque(255, 0, 0));
    ctx.draw_rect(Rect::new(10, 10, 4, 4), Color::opaque(0, 255, 0), true);

    ctx.update().unwrap();

    let frame = handle.last_frame().unwrap();
    assert_eq!(frame.pixel(0, 0), Some(Pixel::from(Color::opaque(10, 20, 30))));
    assert_eq!(frame.pixel(5, 6), Some(Pixel::from(Color::opaque(255, 0, 0))));
    assert_eq!(frame.pixel(13, 13), Some(Pixel::from(Color::opaque(0, 255, 0))));
    assert_eq!(ctx.get_pixel(14, 14), Color::opaque(10, 20, 30));
}

#[test]
fn close_request_ends_the_loop() {
    let (mut ctx, handle, _time) = context(&small_config());
    handle.push_event(DisplayEvent::CloseRequested);

    assert!(!ctx.update().unwrap());
    assert!(!ctx.is_open());
    assert!(!ctx.update().unwrap());
    assert_eq!(handle.presented_frames(), 1);
}

#[test]
fn key_edges_follow_the_frames() {
    let a = KeyCode::from_ascii(b'a');
    let (mut ctx, handle, _time) = context(&small_config());

    handle.push_event(DisplayEvent::KeyDown { key: a, repeat: false });
    ctx.update().unwrap();
    assert!(ctx.is_key_pressed(a) && ctx.is_key_held(a));

    handle.push_event(DisplayEvent::KeyDown { key: a, repeat: true });
    ctx.update().unwrap();
    assert!(!ctx.is_key_pressed(a) && ctx.is_key_held(a));

    handle.push_event(DisplayEvent::KeyUp { key: a });
    ctx.update().unwrap();
    assert!(ctx.is_key_released(a) && !ctx.is_key_held(a));

    ctx.update().unwrap();
    assert!(!ctx.is_key_released(a));
}

#[test]
fn mouse_buttons_and_wheel_through_the_context() {
    let (mut ctx, handle, _time) = context(&small_config());

    handle.push_event(DisplayEvent::MouseButtonPress { button: MouseButton::Right });
    handle.push_event(DisplayEvent::MouseWheel { notches: -2 });
    ctx.update().unwrap();
    assert!(ctx.is_mouse_button_pressed(MouseButton::Right));
    assert_eq!(ctx.mouse_wheel_delta(), -2);
    assert_eq!(ctx.mouse_wheel_delta(), 0);

    handle.push_event(DisplayEvent::MouseButtonRelease { button: MouseButton::Right });
    ctx.update().unwrap();
    assert!(ctx.is_mouse_button_released(MouseButton::Right));
}

#[test]
fn scaled_window_maps_mouse_into_buffer_space() {
    let mut config = small_config();
    config.window.scale = 2;
    let (mut ctx, handle, _time) = context(&config);
    assert_eq!(ctx.window_size(), (128, 96));

    handle.push_event(DisplayEvent::MouseMove { x: 20, y: 10 });
    ctx.update().unwrap();

    assert_eq!(ctx.mouse_position(), Point::new(10, 5));
    assert_eq!(ctx.mouse_delta(), Point::new(10, 5));
    assert_eq!(ctx.mouse_delta(), Point::new(0, 0));
}

#[test]
fn resize_changes_the_letterbox_used_for_mapping() {
    let (mut ctx, handle, _time) = context(&small_config());
    handle.push_event(DisplayEvent::Resize { width_px: 128, height_px: 48 });
    handle.push_event(DisplayEvent::MouseMove { x: 42, y: 5 });

    ctx.update().unwrap();

    assert_eq!(ctx.viewport(), Rect::new(32, 0, 64, 48));
    assert_eq!(ctx.mouse_position(), Point::new(10, 5));

    ctx.update().unwrap();
    assert_eq!(handle.last_dest(), Some(Rect::new(32, 0, 64, 48)));
}

#[test]
fn frames_are_paced_and_stalls_clamped() {
    let (mut ctx, _handle, time) = context(&small_config());

    ctx.update().unwrap();
    assert!((time.now() - 1.0 / 30.0).abs() < 1e-6);
    assert!((ctx.delta_time() - 1.0 / 30.0).abs() < 1e-9);
    assert!((ctx.fps() - 30.0).abs() < 1e-6);

    time.advance(1.0);
    ctx.update().unwrap();
    assert!((ctx.delta_time() - 1.0 / 30.0).abs() < 1e-9);
    assert!((ctx.fps() - 1.0).abs() < 1e-6);
    assert_eq!(ctx.elapsed_ms(), 1033);
}

#[test]
fn timers_use_the_context_clock() {
    let (ctx, _handle, time) = context(&small_config());
    let mut timer = ctx.create_timer(100);

    time.advance(0.0625);
    assert!(!ctx.timer_ticked(&mut timer));
    assert_eq!(ctx.timer_elapsed(&timer), 62);

    time.advance(0.0625);
    assert!(ctx.timer_ticked(&mut timer));

    time.advance(0.0625);
    ctx.timer_reset(&mut timer);
    assert_eq!(ctx.timer_elapsed(&timer), 0);
}

#[test]
fn window_scale_and_cursor_requests() {
    let mut config = small_config();
    config.appearance.cursor_visible = false;
    let (mut ctx, handle, _time) = context(&config);
    assert!(!handle.cursor_visible());
    assert!(!ctx.is_cursor_visible());

    ctx.set_window_scale(0).unwrap();
    ctx.set_window_scale(-3).unwrap();
    assert_eq!(ctx.window_size(), (64, 48));

    ctx.set_window_scale(3).unwrap();
    assert_eq!(ctx.window_size(), (192, 144));
    assert_eq!(handle.window_size(), (192, 144));

    ctx.set_cursor_visibility(true).unwrap();
    assert!(handle.cursor_visible());
    assert!(ctx.is_cursor_visible());
}

#[test]
fn default_font_is_active_until_a_font_is_set() {
    let mut atlas = PixelBuffer::new(32, 64).unwrap();
    fill(&mut atlas, Color::opaque(255, 255, 255));
    let (mut ctx, _handle, _time) = context(&small_config());

    assert_eq!(ctx.text_width("abc"), 24);
    assert_eq!(ctx.text_height(), 8);

    let font = Font::from_image(&atlas, 16, 16).unwrap();
    assert!(ctx.set_font(font).is_none());
    assert_eq!(ctx.text_width("abc"), 6);
    assert_eq!(ctx.text_height(), 4);

    let returned = ctx.reset_font().unwrap();
    assert!(!returned.owns_image());
    assert_eq!(ctx.text_width("abc"), 24);
}

#[test]
fn draw_text_without_a_font_is_a_no_op() {
    let mut config = small_config();
    config.font.use_default = false;
    let (mut ctx, _handle, _time) = context(&config);
    ctx.clear();
    let before = ctx.backbuffer().clone();

    ctx.draw_text("hello", 0, 0, Color::opaque(255, 255, 255));

    assert_eq!(ctx.text_width("hello"), 0);
    assert_eq!(ctx.text_height(), 0);
    assert_eq!(ctx.backbuffer(), &before);
}

#[test]
fn draw_text_with_the_default_font_inks_the_backbuffer() {
    let (mut ctx, _handle, _time) = context(&small_config());
    ctx.clear();

    ctx.draw_text_fmt(0, 0, Color::opaque(255, 255, 0), format_args!("{}", 42));

    let inked = (0..16).any(|x| (0..8).any(|y| ctx.get_pixel(x, y) == Color::opaque(255, 255, 0)));
    assert!(inked);
}

#[test]
fn failed_presentation_keeps_the_backbuffer() {
    let (mut ctx, handle, _time) = context(&small_config());
    ctx.clear();
    ctx.draw_pixel(1, 1, Color::opaque(9, 9, 9));
    handle.fail_next_present();

    match ctx.update() {
        Err(Error::Presentation(reason)) => assert!(reason.contains("simulated")),
        other => panic!("expected a presentation error, got {:?}", other),
    }
    assert_eq!(ctx.get_pixel(1, 1), Color::opaque(9, 9, 9));

    assert!(ctx.update().unwrap());
    assert_eq!(handle.presented_frames(), 1);
}

#[test]
fn images_load_fill_and_draw() {
    let (mut ctx, _handle, _time) = context(&small_config());
    let dir = std::env::temp_dir().join(format!("framekit-frame-loop-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("sprite.png");

    let mut sprite = ctx.create_image(4, 2).unwrap();
    ctx.fill_image(&mut sprite, Color::opaque(1, 2, 3));
    save_image(&sprite, &path).unwrap();

    let loaded = ctx.load_image(&path).unwrap();
    assert_eq!(loaded, sprite);

    ctx.clear();
    ctx.draw_image(&loaded, 62, 0);
    assert_eq!(ctx.get_pixel(63, 1), Color::opaque(1, 2, 3));
    ctx.draw_image_rect(&loaded, 0, 0, Rect::new(3, 1, 10, 10));
    assert_eq!(ctx.get_pixel(0, 0), Color::opaque(1, 2, 3));
    assert_eq!(ctx.get_pixel(1, 0), Color::opaque(0, 0, 0));

    assert!(matches!(ctx.load_image_mem(&[]), Err(Error::EmptyImageData)));
    assert!(matches!(ctx.load_image(dir.join("missing.png")), Err(Error::Io { .. })));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn close_releases_everything_once() {
    let (mut ctx, handle, _time) = context(&small_config());
    ctx.close().unwrap();

    assert!(handle.is_destroyed());
    assert_eq!(ctx.width(), 0);
    assert!(ctx.active_font().is_none());
    assert!(!ctx.update().unwrap());
    ctx.close().unwrap();
}
