//! Ticker unit - a counter advanced once per timer firing
//!
//! The counter is never captured by the timer. The timer only delivers
//! `Tick` messages and the unit applies [`advance`] to whatever value it
//! currently holds.

/// Next counter value
pub fn advance(prev: u64) -> u64 {
    prev.saturating_add(1)
}

/// Counter state owned by one ticker
#[derive(Debug, Default)]
pub struct Ticker {
    count: u64,
    active: bool,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start accepting ticks. Resets the counter to zero.
    pub fn activate(&mut self) {
        self.count = 0;
        self.active = true;
        tracing::info!("Ticker activated");
    }

    /// Stop accepting ticks. Ticks already queued are ignored.
    pub fn deactivate(&mut self) {
        if self.active {
            tracing::info!(count = self.count, "Ticker deactivated");
        }
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Apply one timer firing. Returns false when the ticker is not live.
    pub fn on_tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        tracing::debug!(count = self.count, "Tick");
        self.count = advance(self.count);
        true
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}
