// src/timing/mod.rs

//! Frame pacing and user timers.
//!
//! [`FrameClock`] sleeps each frame until the next fixed step boundary and
//! derives delta-time, FPS and elapsed milliseconds from the paced tick time.
//! Time is read through a [`TimeSource`] so the loop can run against a manual
//! clock in tests.


use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Reported delta-time is clamped to one step when it exceeds this many steps.
const SPIKE_FACTOR: f64 = 10.0;

/// Monotonic time in seconds plus a way to block.
pub trait TimeSource {
    fn now(&self) -> f64;
    fn sleep(&self, duration: Duration);
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemTimeSource {
    origin: Instant,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Hand-driven clock. Clones share the same time; `sleep` advances it.
#[derive(Debug, Clone, Default)]
pub struct ManualTimeSource {
    seconds: Rc<Cell<f64>>,
}

impl ManualTimeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, seconds: f64) {
        self.seconds.set(seconds);
    }

    pub fn advance(&self, seconds: f64) {
        self.seconds.set(self.seconds.get() + seconds);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> f64 {
        self.seconds.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration.as_secs_f64());
    }
}

/// Timing of the most recent frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    /// Seconds since the previous frame, clamped to one step after a stall.
    pub delta_time: f64,
    /// `1 / delta_time` before clamping, or 0.
    pub fps: f64,
    /// Milliseconds from clock creation to this frame's tick.
    pub elapsed_ms: i64,
}

pub struct FrameClock {
    source: Box<dyn TimeSource>,
    /// Seconds per frame; `None` when uncapped.
    step: Option<f64>,
    start: f64,
    last_tick: f64,
    stats: FrameStats,
}

impl FrameClock {
    /// A clock pacing to `target_fps` frames per second, or uncapped when
    /// `target_fps` is 0.
    pub fn new(target_fps: u32, source: Box<dyn TimeSource>) -> Self {
        let step = (target_fps > 0).then(|| 1.0 / f64::from(target_fps));
        let start = source.now();
        debug!("FrameClock: target {} fps, step {:?}", target_fps, step);
        Self {
            source,
            step,
            start,
            last_tick: start,
            stats: FrameStats::default(),
        }
    }

    /// Paces the frame and recomputes the frame statistics.
    ///
    /// When the next step boundary is still ahead, sleeps until it and
    /// advances the tick by exactly one step. Otherwise the frame overran and
    /// the tick resyncs to now.
    pub fn tick(&mut self) -> FrameStats {
        let previous = self.last_tick;
        let now = self.source.now();

        match self.step {
            Some(step) => {
                let wait = previous + step - now;
                if wait > 0.0 {
                    self.source.sleep(Duration::from_secs_f64(wait));
                    self.last_tick += step;
                } else {
                    self.last_tick = now;
                }
            }
            None => self.last_tick = now,
        }

        let mut delta_time = self.last_tick - previous;
        let fps = if delta_time > 0.0 { 1.0 / delta_time } else { 0.0 };
        let elapsed_ms = ((self.last_tick - self.start) * 1000.0) as i64;

        if let Some(step) = self.step {
            if delta_time > step * SPIKE_FACTOR {
                trace!("FrameClock: clamping {:.3}s frame to one step", delta_time);
                delta_time = step;
            }
        }

        self.stats = FrameStats { delta_time, fps, elapsed_ms };
        self.stats
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn delta_time(&self) -> f64 {
        self.stats.delta_time
    }

    pub fn fps(&self) -> f64 {
        self.stats.fps
    }

    pub fn elapsed_ms(&self) -> i64 {
        self.stats.elapsed_ms
    }

    /// Milliseconds since the clock was created, read live.
    pub fn now_ms(&self) -> i64 {
        ((self.source.now() - self.start) * 1000.0) as i64
    }

    pub fn step(&self) -> Option<f64> {
        self.step
    }
}

/// A polled interval timer measured against a [`FrameClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    interval_ms: i64,
    last_trigger_ms: i64,
}

impl Timer {
    /// Starts a timer that fires every `interval_ms` from now.
    pub fn new(interval_ms: i64, clock: &FrameClock) -> Self {
        Self {
            interval_ms,
            last_trigger_ms: clock.now_ms(),
        }
    }

    /// True once at least `interval_ms` has passed since the last trigger;
    /// firing restarts the interval.
    pub fn ticked(&mut self, clock: &FrameClock) -> bool {
        let now = clock.now_ms();
        if now - self.last_trigger_ms >= self.interval_ms {
            self.last_trigger_ms = now;
            true
        } else {
            false
        }
    }

    /// Milliseconds since the last trigger.
    pub fn elapsed(&self, clock: &FrameClock) -> i64 {
        clock.now_ms() - self.last_trigger_ms
    }

    pub fn reset(&mut self, clock: &FrameClock) {
        self.last_trigger_ms = clock.now_ms();
    }

    pub fn interval_ms(&self) -> i64 {
        self.interval_ms
    }
}
