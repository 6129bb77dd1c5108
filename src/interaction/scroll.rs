//! Scroll-position derived navigation state.
//!
//! Two values are derived from every scroll notification:
//!
//! - **scrolled past threshold**: `offset > threshold` (default 50px), used to
//!   switch the nav bar from transparent to opaque.
//! - **active section**: scanning sections in *reverse* declared order, the
//!   first one whose top edge is at most `active_offset` (default 100px) below
//!   the viewport top. Later sections win ties. If no section qualifies the
//!   previous value is kept.
//!
//! Derivation is a pure function ([`derive_scroll_state`]); [`ScrollTracker`]
//! only remembers the previous result.

use crate::sections::SectionDescriptor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollParams {
    /// Offset (px) past which the page counts as scrolled.
    pub threshold: f64,
    /// Maximum distance (px) of a section's top edge below the viewport top
    /// for it to count as active.
    pub active_offset: f64,
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            active_offset: 100.0,
        }
    }
}

/// One scroll notification: the vertical offset plus the viewport-relative
/// top edge of every rendered section.
///
/// Sections missing from `tops` are treated as not rendered and skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub tops: Vec<(&'static str, f64)>,
}

impl ScrollSample {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            tops: Vec::new(),
        }
    }

    pub fn with_top(mut self, id: &'static str, top: f64) -> Self {
        self.tops.push((id, top));
        self
    }

    pub fn top_of(&self, id: &str) -> Option<f64> {
        self.tops
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, top)| *top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub scrolled_past_threshold: bool,
    pub active_section: &'static str,
}

pub fn derive_scroll_state(
    sample: &ScrollSample,
    sections: &[SectionDescriptor],
    previous: &ScrollState,
    params: &ScrollParams,
) -> ScrollState {
    let active_section = sections
        .iter()
        .rev()
        .find(|section| {
            sample
                .top_of(section.id)
                .is_some_and(|top| top <= params.active_offset)
        })
        .map(|section| section.id)
        .unwrap_or(previous.active_section);

    ScrollState {
        scrolled_past_threshold: sample.offset > params.threshold,
        active_section,
    }
}

/// Holds the last derived [`ScrollState`] for a fixed section list.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    sections: &'static [SectionDescriptor],
    params: ScrollParams,
    state: ScrollState,
}

impl ScrollTracker {
    /// Starts unscrolled with the first section active.
    pub fn new(sections: &'static [SectionDescriptor], params: ScrollParams) -> Self {
        let active_section = sections.first().map(|s| s.id).unwrap_or_default();
        Self {
            sections,
            params,
            state: ScrollState {
                scrolled_past_threshold: false,
                active_section,
            },
        }
    }

    pub fn on_scroll(&mut self, sample: &ScrollSample) -> ScrollState {
        self.state = derive_scroll_state(sample, self.sections, &self.state, &self.params);
        self.state
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn params(&self) -> &ScrollParams {
        &self.params
    }
}
