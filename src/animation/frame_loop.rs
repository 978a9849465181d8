use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Handle that cancels a running [`FrameLoop`] from anywhere
#[derive(Debug, Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Fixed-step frame scheduler. Replaces the browser's self-rescheduling
/// display callback with an explicitly cancellable task that can also be
/// single-stepped deterministically from tests and the demo.
#[derive(Debug)]
pub struct FrameLoop {
    interval: f32,
    accumulator: f32,
    last_tick: Instant,
    stopped: Arc<AtomicBool>,
    frame_count: u64,
}

impl FrameLoop {
    /// Create a loop firing at the given frequency
    pub fn new(hz: f32) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
            last_tick: Instant::now(),
            stopped: Arc::new(AtomicBool::new(false)),
            frame_count: 0,
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.stopped))
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run one frame immediately, ignoring wall-clock time
    pub fn step<F: FnMut(f32)>(&mut self, mut frame: F) {
        self.frame_count += 1;
        frame(self.interval);
    }

    /// Block and fire frames at the configured rate until the stop handle is
    /// triggered. Real time is accumulated so a slow frame catches up on the
    /// next iteration.
    pub fn run<F: FnMut(f32)>(&mut self, mut frame: F) {
        self.last_tick = Instant::now();
        while !self.stopped.load(Ordering::Relaxed) {
            let now = Instant::now();
            self.accumulator += now.duration_since(self.last_tick).as_secs_f32();
            self.last_tick = now;

            while self.accumulator >= self.interval {
                self.accumulator -= self.interval;
                self.frame_count += 1;
                frame(self.interval);
            }

            thread::sleep(Duration::from_secs_f32(self.interval / 4.0));
        }
    }
}
