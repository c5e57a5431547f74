use std::time::Duration;
use crate::constants::*;

/// Timing of a carousel.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CarouselConfig {
    /// Time between automatic advances. Zero disables auto-advance.
    pub interval: Duration,
    /// Minimum time between a slide becoming visible and being marked entered.
    pub enter_delay: Duration,
}

impl CarouselConfig {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_enter_delay(mut self, enter_delay: Duration) -> Self {
        self.enter_delay = enter_delay;
        self
    }

    pub fn auto_advance(&self) -> bool {
        !self.interval.is_zero()
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: AUTO_ADVANCE_INTERVAL,
            enter_delay: ENTER_DELAY,
        }
    }
}
