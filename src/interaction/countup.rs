//! Count-up animation from 0 to a target integer.
//!
//! The animation is split into `steps` equal ticks spread over `duration`.
//! Tick `n` shows `floor(min(target, target / steps * n))`; the last tick snaps
//! to `target` exactly so float drift can never leave it at `target - 1`.

use std::time::Duration;

use super::host::{TimerHost, TimerId};

/// Shown instead of a number when the target is zero.
pub const MULTIPLE_LABEL: &str = "Multiple";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUpParams {
    pub duration: Duration,
    pub steps: u32,
}

impl Default for CountUpParams {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2000),
            steps: 60,
        }
    }
}

impl CountUpParams {
    /// Delay between ticks.
    pub fn interval(&self) -> Duration {
        self.duration / self.steps.max(1)
    }
}

/// Value displayed after `step` ticks.
pub fn frame_value(target: u32, steps: u32, step: u32) -> u32 {
    let steps = steps.max(1);
    if step >= steps {
        return target;
    }
    let increment = f64::from(target) / f64::from(steps);
    let current = (increment * f64::from(step)).min(f64::from(target));
    current.floor() as u32
}

#[derive(Debug)]
pub struct CountUp {
    target: u32,
    params: CountUpParams,
    step: u32,
    value: u32,
    started: bool,
    timer: Option<TimerId>,
}

impl CountUp {
    pub fn new(target: u32, params: CountUpParams) -> Self {
        Self {
            target,
            params: CountUpParams {
                steps: params.steps.max(1),
                ..params
            },
            step: 0,
            value: 0,
            started: false,
            timer: None,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.started && self.timer.is_none() && self.value == self.target
    }

    /// Begin animating. Only the first call on an instance with a non-zero
    /// target does anything; returns whether a timer was started.
    pub fn start<H: TimerHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.started || self.target == 0 {
            return false;
        }
        self.started = true;
        self.timer = Some(host.set_interval(self.params.interval()));
        true
    }

    /// Advance one tick. Ticks from other timers, or arriving after the
    /// animation finished, are ignored. Returns whether the value changed.
    pub fn tick<H: TimerHost + ?Sized>(&mut self, host: &mut H, timer: TimerId) -> bool {
        if self.timer != Some(timer) {
            return false;
        }
        self.step += 1;
        let next = frame_value(self.target, self.params.steps, self.step);
        let changed = next != self.value;
        // never decreases
        self.value = next.max(self.value);
        if self.step >= self.params.steps {
            self.value = self.target;
            self.timer = None;
            host.clear_interval(timer);
        }
        changed
    }

    /// Text shown for this counter.
    pub fn display(&self, prefix: &str, suffix: &str) -> String {
        if self.target == 0 {
            return MULTIPLE_LABEL.to_string();
        }
        format!("{}{}{}", prefix, self.value, suffix)
    }

    /// Tear down, cancelling an in-flight animation.
    pub fn unmount<H: TimerHost + ?Sized>(mut self, host: &mut H) {
        if let Some(timer) = self.timer.take() {
            host.clear_interval(timer);
        }
    }
}
