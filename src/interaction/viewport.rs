//! One-shot "has this region been seen" latch.

use super::host::{IntersectionEntry, IntersectionHost, ObservationId};

/// Latches `true` the first time its region is at least `threshold` visible,
/// then deregisters itself.
///
/// The latch never fires during [`mount`](Self::mount): a region that is
/// already on screen still waits for the host's first notification. The one
/// exception is a host without intersection support, where the observer fails
/// open and starts out visible.
#[derive(Debug)]
pub struct ViewportObserver {
    region: String,
    threshold: f64,
    visible: bool,
    registration: Option<ObservationId>,
}

impl ViewportObserver {
    pub fn mount<H: IntersectionHost + ?Sized>(host: &mut H, region: &str, threshold: f64) -> Self {
        let threshold = threshold.clamp(0.0, 1.0);
        if !host.supports_intersection() {
            return Self {
                region: region.to_string(),
                threshold,
                visible: true,
                registration: None,
            };
        }
        let registration = Some(host.observe(region, threshold));
        Self {
            region: region.to_string(),
            threshold,
            visible: false,
            registration,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The live registration, if still observing.
    pub fn registration(&self) -> Option<ObservationId> {
        self.registration
    }

    /// Feed one intersection notification. Returns `true` only on the call
    /// that flips the latch.
    ///
    /// The region must actually overlap the viewport, even at threshold 0.
    /// Entries for other observations, and anything after the latch fired,
    /// are ignored.
    pub fn handle<H: IntersectionHost + ?Sized>(
        &mut self,
        host: &mut H,
        entry: &IntersectionEntry,
    ) -> bool {
        let Some(id) = self.registration else {
            return false;
        };
        if entry.observation != id || !(entry.ratio > 0.0 && entry.ratio >= self.threshold) {
            return false;
        }
        self.visible = true;
        self.registration = None;
        host.unobserve(id);
        true
    }

    /// Tear down, releasing the registration if the latch never fired.
    pub fn unmount<H: IntersectionHost + ?Sized>(mut self, host: &mut H) {
        if let Some(id) = self.registration.take() {
            host.unobserve(id);
        }
    }
}
