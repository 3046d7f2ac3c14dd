/// Frame-time accumulator deciding when the next tick is due.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationClock {
    accumulated: f64,
    tick_interval: f64,
    rate_limited: bool,
}

impl SimulationClock {
    pub fn new(tick_interval: f64, rate_limited: bool) -> Self {
        Self {
            accumulated: 0.0,
            tick_interval,
            rate_limited,
        }
    }

    /// Add `delta` seconds; returns true when a tick is due.
    /// The accumulator restarts from zero whenever a tick fires.
    pub fn advance(&mut self, delta: f64) -> bool {
        self.accumulated += delta;
        if self.accumulated > self.tick_interval || !self.rate_limited {
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    pub const fn accumulated(&self) -> f64 {
        self.accumulated
    }

    pub const fn tick_interval(&self) -> f64 {
        self.tick_interval
    }

    pub const fn rate_limited(&self) -> bool {
        self.rate_limited
    }

    pub fn set_rate_limited(&mut self, limited: bool) {
        self.rate_limited = limited;
    }
}
