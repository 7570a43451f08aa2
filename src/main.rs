// src/main.rs

//! Headless demo: a ball bouncing around a box of targets, with a text HUD.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use framekit::collision::{point_in_rect, rect_circle_overlap};
use framekit::display::{DisplayEvent, HeadlessDisplayDriver};
use framekit::{Color, Config, FrameContext, KeyCode, NamedColor, Rect};

/// Runs the framekit demo scene without a window.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Backbuffer width in pixels
    #[arg(short, long)]
    width: Option<u32>,

    /// Backbuffer height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Target frames per second (0 = uncapped)
    #[arg(long)]
    fps: Option<u32>,

    /// Number of frames to run
    #[arg(short, long, default_value = "120")]
    frames: u32,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save the last frame to this file (.png or .tga)
    #[arg(short, long)]
    screenshot: Option<PathBuf>,
}

struct Ball {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    radius: i32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();
    info!("Starting framekit demo...");

    let mut config = match &args.config {
        Some(path) => Config::load_or_default(path)?,
        None => Config::default(),
    };
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    if let Some(fps) = args.fps {
        config.timing.target_fps = fps;
    }

    let (driver, handle) = HeadlessDisplayDriver::new();
    let mut ctx =
        FrameContext::create(&config, Box::new(driver)).context("Failed to create frame context")?;

    let (width, height) = (ctx.width() as i32, ctx.height() as i32);
    let targets: Vec<Rect> = (0..6)
        .map(|i| Rect::new(width / 8 + i * width / 8, height / 4, width / 16, height / 16))
        .collect();
    let mut hits = vec![false; targets.len()];
    let mut ball = Ball {
        x: f64::from(width / 2),
        y: f64::from(height * 3 / 4),
        vx: 180.0,
        vy: -140.0,
        radius: (height / 40).max(2),
    };
    let mut report = ctx.create_timer(1000);

    for frame in 0..args.frames {
        if frame + 1 == args.frames {
            handle.push_event(DisplayEvent::KeyDown { key: KeyCode::ESCAPE, repeat: false });
        }
        if !ctx.update()? {
            break;
        }
        let quitting = ctx.is_key_pressed(KeyCode::ESCAPE);

        step_ball(&mut ball, ctx.delta_time(), width, height);
        for (target, hit) in targets.iter().zip(hits.iter_mut()) {
            if rect_circle_overlap(*target, ball.x as i32, ball.y as i32, ball.radius as f32) {
                *hit = true;
            }
        }

        ctx.clear();
        for (target, hit) in targets.iter().zip(&hits) {
            let color = if *hit { NamedColor::Green } else { NamedColor::Red };
            ctx.draw_rect(*target, color.into(), true);
            ctx.draw_rect(*target, NamedColor::White.into(), false);
        }
        ctx.draw_circle(ball.x as i32, ball.y as i32, ball.radius, NamedColor::Yellow.into(), true);
        ctx.draw_line(0, height - 1, width - 1, height - 1, NamedColor::Gray.into());

        let mouse = ctx.mouse_position();
        if targets.iter().any(|t| point_in_rect(mouse.x, mouse.y, *t)) {
            ctx.draw_circle(mouse.x, mouse.y, 3, Color::new(255, 255, 255, 128), false);
        }

        let stats = ctx.frame_stats();
        let hud = format!("frame {} {:.0} fps {} ms", frame, stats.fps, stats.elapsed_ms);
        ctx.draw_text(&hud, 4, 4, NamedColor::White.into());

        if ctx.timer_ticked(&mut report) {
            info!(
                "frame {}: dt {:.4}s, {:.1} fps, {} targets hit",
                frame,
                stats.delta_time,
                stats.fps,
                hits.iter().filter(|h| **h).count()
            );
        }

        if quitting {
            info!("Escape pressed, stopping at frame {}", frame);
            break;
        }
    }

    if let Some(path) = &args.screenshot {
        ctx.save_screenshot(path)
            .with_context(|| format!("Failed to save screenshot to {}", path.display()))?;
        info!("Saved screenshot to {}", path.display());
    }

    info!("Presented {} frames", handle.presented_frames());
    if let Err(e) = ctx.close() {
        warn!("Error while closing: {}", e);
    }
    Ok(())
}

fn step_ball(ball: &mut Ball, dt: f64, width: i32, height: i32) {
    ball.x += ball.vx * dt;
    ball.y += ball.vy * dt;

    let r = f64::from(ball.radius);
    if ball.x - r < 0.0 || ball.x + r > f64::from(width) {
        ball.vx = -ball.vx;
        ball.x = ball.x.clamp(r, (f64::from(width) - r).max(r));
    }
    if ball.y - r < 0.0 || ball.y + r > f64::from(height) {
        ball.vy = -ball.vy;
        ball.y = ball.y.clamp(r, (f64::from(height) - r).max(r));
    }
}
