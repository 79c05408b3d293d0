//! Frame-driven synchronization between sound position and widget
//!
//! While a track plays, the session runs one `step` per display frame. The
//! loop is a single armed/disarmed flag: `Started` arms it, every step
//! re-arms it while the current sound still reports playing, and the first
//! step that sees a stopped sound lets it lapse.
//!
//! Frame timestamps come from an injectable [`FrameClock`] so hosts can
//! bind to a real refresh callback and tests can use a virtual clock.

use std::time::Instant;
use tracing::trace;

/// Source of frame timestamps, in milliseconds
pub trait FrameClock {
    /// Timestamp of the frame about to run
    fn next_frame(&mut self) -> f64;
}

/// Deterministic clock advancing a fixed interval per frame
#[derive(Debug, Clone)]
pub struct VirtualFrameClock {
    now_ms: f64,
    interval_ms: f64,
}

impl VirtualFrameClock {
    /// Clock starting at 0 ms
    pub fn new(interval_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            interval_ms,
        }
    }

    /// Clock ticking at roughly 60 frames per second
    pub fn sixty_hz() -> Self {
        Self::new(1000.0 / 60.0)
    }

    /// Timestamp the next frame will get
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Skip ahead without running frames
    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl FrameClock for VirtualFrameClock {
    fn next_frame(&mut self) -> f64 {
        let timestamp = self.now_ms;
        self.now_ms += self.interval_ms;
        timestamp
    }
}

/// Wall clock measured from its creation
#[derive(Debug, Clone)]
pub struct SystemFrameClock {
    origin: Instant,
}

impl SystemFrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemFrameClock {
    fn next_frame(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Repeating per-frame step request
///
/// At most one step is pending at a time, so a second `Started` signal
/// while the loop runs does not spawn a parallel loop.
#[derive(Debug, Clone, Default)]
pub struct SyncLoop {
    armed: bool,
    frames: u64,
}

impl SyncLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a step on the next frame
    pub fn arm(&mut self) {
        if !self.armed {
            trace!("Sync loop armed");
        }
        self.armed = true;
    }

    /// Drop the pending request, if any
    pub fn cancel(&mut self) {
        if self.armed {
            trace!(frames = self.frames, "Sync loop cancelled");
        }
        self.armed = false;
    }

    /// Whether a step is pending
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Number of steps run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Consume the pending request
    ///
    /// Returns `true` if a step should run now.
    pub(crate) fn take(&mut self) -> bool {
        let due = std::mem::take(&mut self.armed);
        if due {
            self.frames += 1;
        }
        due
    }
}

/// Rate limiter for scrolling overflowing titles
#[derive(Debug, Clone)]
pub struct TitleMarquee {
    enabled: bool,
    interval_ms: f64,
    last_ms: f64,
}

impl TitleMarquee {
    pub fn new(enabled: bool, interval_ms: f64) -> Self {
        Self {
            enabled,
            interval_ms,
            last_ms: 0.0,
        }
    }

    /// Whether the title should scroll on the frame at `timestamp`
    ///
    /// Records `timestamp` as the last scroll when it returns `true`.
    pub fn due(&mut self, timestamp: f64) -> bool {
        if !self.enabled || timestamp <= self.last_ms + self.interval_ms {
            return false;
        }
        self.last_ms = timestamp;
        true
    }

    /// Start a new rate window at timestamp 0
    ///
    /// Called whenever a track starts or resets.
    pub fn reset(&mut self) {
        self.last_ms = 0.0;
    }
}
