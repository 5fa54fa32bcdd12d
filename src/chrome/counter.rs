use std::time::Duration;

use crate::config::PortfolioConfig;

/// Values shown by a stat counter as it animates from 0 up to `target`.
///
/// Each tick adds `target / steps`; the displayed value is floored and the
/// final tick clamps to exactly `target`. Ticks are `tick()` apart.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    done: bool,
    tick: Duration,
}

impl CounterAnimation {
    pub fn new(target: u32, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            increment: f64::from(target) / f64::from(steps),
            current: 0.0,
            done: false,
            tick: PortfolioConfig::v0().counter_tick(),
        }
    }

    pub fn with_config(target: u32, config: &PortfolioConfig) -> Self {
        Self {
            tick: config.counter_tick(),
            ..Self::new(target, config.counter_steps)
        }
    }

    /// Interval between displayed values.
    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn target(&self) -> u32 {
        self.target
    }
}

impl Iterator for CounterAnimation {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= f64::from(self.target) {
            self.current = f64::from(self.target);
            self.done = true;
        }
        Some(self.current.floor() as u32)
    }
}
