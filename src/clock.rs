//! Frame driver: paces the loop and provides the monotonic "now" used for
//! spawn timing.

use std::thread;
use std::time::{Duration, Instant};

pub trait FrameClock {
    /// Wait for the next frame and return the time since the previous one.
    fn tick(&mut self) -> Duration;

    /// Milliseconds since the clock was created.
    fn now_ms(&self) -> u64;
}

/// Real-time clock that caps the loop at a fixed frame rate.
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
    last_tick: Instant,
    frame: Duration,
}

impl SystemClock {
    pub fn new(fps: u32) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame: Duration::from_secs(1) / fps.max(1),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}

impl FrameClock for SystemClock {
    fn tick(&mut self) -> Duration {
        let since_last = self.last_tick.elapsed();
        if since_last < self.frame {
            thread::sleep(self.frame - since_last);
        }
        let now = Instant::now();
        let elapsed = now - self.last_tick;
        self.last_tick = now;
        elapsed
    }

    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Deterministic clock: every tick advances time by a fixed step, no sleeping.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: u64,
    step_ms: u64,
}

impl ManualClock {
    pub fn new(step_ms: u64) -> Self {
        Self { now_ms: 0, step_ms }
    }

    /// Jump forward without ticking.
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }
}

impl FrameClock for ManualClock {
    fn tick(&mut self) -> Duration {
        self.now_ms += self.step_ms;
        Duration::from_millis(self.step_ms)
    }

    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_steps() {
        let mut clock = ManualClock::new(16);
        assert_eq!(clock.now_ms(), 0);
        assert_eq!(clock.tick(), Duration::from_millis(16));
        assert_eq!(clock.tick(), Duration::from_millis(16));
        assert_eq!(clock.now_ms(), 32);
        clock.advance(1000);
        assert_eq!(clock.now_ms(), 1032);
    }

    #[test]
    fn test_system_clock_paces_frames() {
        let mut clock = SystemClock::new(100);
        assert_eq!(clock.frame_duration(), Duration::from_millis(10));
        let elapsed = clock.tick();
        assert!(elapsed >= Duration::from_millis(10));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut clock = SystemClock::new(200);
        let before = clock.now_ms();
        clock.tick();
        assert!(clock.now_ms() >= before);
    }
}
