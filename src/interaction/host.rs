//! Host registration traits and the in-memory event host.
//!
//! The [`IntersectionHost`] and [`TimerHost`] traits are the only way a
//! component can ask for future events. A browser would implement them with
//! `IntersectionObserver` and `setInterval`; [`EventHost`] implements them
//! with two ordered maps and a virtual clock, which is what the page session,
//! the `simulate` command, and the tests run on.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle for a registered intersection interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObservationId(u64);

/// Handle for a registered interval timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// One intersection notification: which observation, and how much of the
/// observed region is inside the viewport (0.0 ..= 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub observation: ObservationId,
    pub ratio: f64,
}

/// Registers interest in a region's intersection with the viewport.
pub trait IntersectionHost {
    /// Whether intersection observation is available at all.
    ///
    /// Hosts that cannot observe intersections make every observer fail open.
    fn supports_intersection(&self) -> bool {
        true
    }

    /// Start observing `region`. Notifications are delivered later, never
    /// from inside this call.
    fn observe(&mut self, region: &str, threshold: f64) -> ObservationId;

    /// Stop observing. Unknown ids are ignored.
    fn unobserve(&mut self, id: ObservationId);
}

/// Registers periodic timers.
pub trait TimerHost {
    fn set_interval(&mut self, period: Duration) -> TimerId;

    /// Cancel a timer. Unknown ids are ignored.
    fn clear_interval(&mut self, id: TimerId);
}

/// A live intersection registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub region: String,
    pub threshold: f64,
}

#[derive(Debug, Clone, Copy)]
struct Interval {
    period: Duration,
    next_due: Duration,
}

/// Browsers clamp interval delays; a zero period would never let time advance.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Deterministic single-threaded host with a virtual clock.
#[derive(Debug)]
pub struct EventHost {
    next_id: u64,
    now: Duration,
    intersection_supported: bool,
    observations: BTreeMap<ObservationId, Observation>,
    timers: BTreeMap<TimerId, Interval>,
}

impl Default for EventHost {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHost {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            now: Duration::ZERO,
            intersection_supported: true,
            observations: BTreeMap::new(),
            timers: BTreeMap::new(),
        }
    }

    /// A host without intersection support (old browsers, text-mode clients).
    pub fn without_intersection() -> Self {
        Self {
            intersection_supported: false,
            ..Self::new()
        }
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Live observations in registration order.
    pub fn observations(&self) -> impl Iterator<Item = (ObservationId, &Observation)> {
        self.observations.iter().map(|(id, obs)| (*id, obs))
    }

    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Build one intersection entry per live observation, using `ratio_of` to
    /// measure each observed region. Regions the callback cannot measure are
    /// skipped.
    pub fn intersection_entries<F>(&self, ratio_of: F) -> Vec<IntersectionEntry>
    where
        F: Fn(&str) -> Option<f64>,
    {
        self.observations
            .iter()
            .filter_map(|(id, obs)| {
                ratio_of(obs.region.as_str()).map(|ratio| IntersectionEntry {
                    observation: *id,
                    ratio,
                })
            })
            .collect()
    }

    /// Pop the earliest timer due at or before `deadline`, moving the clock to
    /// its due time and rescheduling it one period later.
    ///
    /// Ties are broken by registration order. Returns `None` once nothing is
    /// due, leaving the clock at its last fire time; call [`Self::settle`] to
    /// move it to the deadline.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<TimerId> {
        let (id, due) = self
            .timers
            .iter()
            .filter(|(_, t)| t.next_due <= deadline)
            .min_by_key(|(id, t)| (t.next_due, **id))
            .map(|(id, t)| (*id, t.next_due))?;
        self.now = due;
        if let Some(timer) = self.timers.get_mut(&id) {
            timer.next_due += timer.period;
        }
        Some(id)
    }

    /// Move the clock forward to `deadline` without firing anything.
    pub fn settle(&mut self, deadline: Duration) {
        if deadline > self.now {
            self.now = deadline;
        }
    }
}

impl IntersectionHost for EventHost {
    fn supports_intersection(&self) -> bool {
        self.intersection_supported
    }

    fn observe(&mut self, region: &str, threshold: f64) -> ObservationId {
        let id = ObservationId(self.allocate());
        self.observations.insert(
            id,
            Observation {
                region: region.to_string(),
                threshold,
            },
        );
        id
    }

    fn unobserve(&mut self, id: ObservationId) {
        self.observations.remove(&id);
    }
}

impl TimerHost for EventHost {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        let id = TimerId(self.allocate());
        let period = period.max(MIN_PERIOD);
        self.timers.insert(
            id,
            Interval {
                period,
                next_due: self.now + period,
            },
        );
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_and_unobserve() {
        let mut host = EventHost::new();
        let a = host.observe("about", 0.2);
        let b = host.observe("skills", 0.1);
        assert_ne!(a, b);
        assert_eq!(host.observation_count(), 2);

        host.unobserve(a);
        let regions: Vec<&str> = host.observations().map(|(_, o)| o.region.as_str()).collect();
        assert_eq!(regions, vec!["skills"]);
    }

    #[test]
    fn unobserve_unknown_is_ignored() {
        let mut host = EventHost::new();
        let a = host.observe("about", 0.2);
        host.unobserve(a);
        host.unobserve(a);
        assert_eq!(host.observation_count(), 0);
    }

    #[test]
    fn without_intersection_reports_unsupported() {
        assert!(EventHost::new().supports_intersection());
        assert!(!EventHost::without_intersection().supports_intersection());
    }

    #[test]
    fn intersection_entries_skip_unmeasured_regions() {
        let mut host = EventHost::new();
        let about = host.observe("about", 0.2);
        host.observe("nowhere", 0.1);
        let entries = host.intersection_entries(|region| (region == "about").then_some(0.5));
        assert_eq!(
            entries,
            vec![IntersectionEntry {
                observation: about,
                ratio: 0.5
            }]
        );
    }

    #[test]
    fn interval_fires_once_per_period() {
        let mut host = EventHost::new();
        let t = host.set_interval(Duration::from_millis(10));
        let deadline = Duration::from_millis(35);

        let mut fired = Vec::new();
        while let Some(id) = host.pop_due(deadline) {
            fired.push((id, host.now()));
        }
        assert_eq!(
            fired,
            vec![
                (t, Duration::from_millis(10)),
                (t, Duration::from_millis(20)),
                (t, Duration::from_millis(30)),
            ]
        );
        host.settle(deadline);
        assert_eq!(host.now(), deadline);
    }

    #[test]
    fn interleaved_timers_fire_in_due_order() {
        let mut host = EventHost::new();
        let slow = host.set_interval(Duration::from_millis(15));
        let fast = host.set_interval(Duration::from_millis(10));

        let mut order = Vec::new();
        while let Some(id) = host.pop_due(Duration::from_millis(30)) {
            order.push(id);
        }
        // fast@10, slow@15, fast@20, slow@30 and fast@30 tie -> registration order
        assert_eq!(order, vec![fast, slow, fast, slow, fast]);
    }

    #[test]
    fn cleared_timer_stops_firing() {
        let mut host = EventHost::new();
        let t = host.set_interval(Duration::from_millis(10));
        assert_eq!(host.pop_due(Duration::from_millis(10)), Some(t));
        host.clear_interval(t);
        assert_eq!(host.pop_due(Duration::from_secs(1)), None);
        assert_eq!(host.timer_count(), 0);
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut host = EventHost::new();
        host.set_interval(Duration::ZERO);
        let mut count = 0;
        while host.pop_due(Duration::from_millis(5)).is_some() {
            count += 1;
        }
        assert_eq!(count, 5);
    }
}
