//! Header scroll tint.
//!
//! The fixed header darkens slightly once the page is scrolled past the
//! hero. Scroll events arrive far faster than the tint can visibly change,
//! so recomputation is throttled.

use std::time::{Duration, Instant};

/// Scroll offset in px past which the header goes solid.
pub const SCROLL_THRESHOLD: u32 = 100;

/// Minimum interval between tint recomputations.
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderTint {
    /// rgba(62, 39, 35, 0.95)
    #[default]
    Resting,
    /// rgba(62, 39, 35, 0.98)
    Solid,
}

/// Drops calls that arrive within `interval` of the last one that ran.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last_run: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
        }
    }

    /// Returns whether a call at `now` may run, and records it if so.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_run {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_run = Some(now);
                true
            }
        }
    }
}

#[derive(Debug)]
pub struct HeaderScroll {
    tint: HeaderTint,
    throttle: Throttle,
}

impl Default for HeaderScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderScroll {
    pub fn new() -> Self {
        Self {
            tint: HeaderTint::default(),
            throttle: Throttle::new(SCROLL_THROTTLE),
        }
    }

    pub fn tint(&self) -> HeaderTint {
        self.tint
    }

    /// Scroll handler. Returns false when the event fell inside the
    /// throttle window and was dropped.
    pub fn on_scroll(&mut self, scroll_y: u32, now: Instant) -> bool {
        if !self.throttle.ready(now) {
            return false;
        }

        self.tint = if scroll_y > SCROLL_THRESHOLD {
            HeaderTint::Solid
        } else {
            HeaderTint::Resting
        };

        true
    }
}
