//! Page geometry: where each region sits in the document, and what a given
//! scroll offset makes of it.
//!
//! A [`Layout`] is a vertical stack of named regions with a fixed viewport
//! height. From a scroll offset it produces the two inputs the rest of the
//! interaction core consumes: a [`ScrollSample`] (viewport-relative top
//! edges) and per-region intersection ratios.

use super::scroll::ScrollSample;
use crate::sections::{FOOTER_ID, SECTIONS};

/// A region in document coordinates (px from the top of the page).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    regions: Vec<Region>,
    viewport_height: f64,
}

/// Rough rendered heights of the stock page at a desktop width.
const ESTIMATED_HEIGHTS: [(&str, f64); 11] = [
    ("hero", 900.0),
    ("about", 1100.0),
    ("experience", 1500.0),
    ("skills", 1000.0),
    ("tools", 950.0),
    ("certifications", 1050.0),
    ("achievements", 650.0),
    ("education", 900.0),
    ("references", 700.0),
    ("contact", 1000.0),
    (FOOTER_ID, 300.0),
];

impl Layout {
    /// Stack regions top to bottom in the given order.
    pub fn stacked(heights: &[(&'static str, f64)], viewport_height: f64) -> Self {
        let mut top = 0.0;
        let regions = heights
            .iter()
            .map(|&(id, height)| {
                let height = height.max(0.0);
                let region = Region { id, top, height };
                top += height;
                region
            })
            .collect();
        Self {
            regions,
            viewport_height: viewport_height.max(1.0),
        }
    }

    /// Stock page layout for the given viewport height.
    pub fn estimated(viewport_height: f64) -> Self {
        Self::stacked(&ESTIMATED_HEIGHTS, viewport_height)
    }

    /// Every registry section at the same height, followed by a footer.
    pub fn uniform(section_height: f64, viewport_height: f64) -> Self {
        let heights: Vec<(&'static str, f64)> = SECTIONS
            .iter()
            .map(|s| (s.id, section_height))
            .chain(std::iter::once((FOOTER_ID, section_height / 3.0)))
            .collect();
        Self::stacked(&heights, viewport_height)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn document_height(&self) -> f64 {
        self.regions.last().map(Region::bottom).unwrap_or(0.0)
    }

    /// Largest offset the page can actually scroll to.
    pub fn max_offset(&self) -> f64 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    /// Document top of a region, for in-page anchor jumps.
    pub fn anchor_offset(&self, id: &str) -> Option<f64> {
        self.region(id).map(|r| r.top.min(self.max_offset()))
    }

    pub fn sample(&self, offset: f64) -> ScrollSample {
        ScrollSample {
            offset,
            tops: self.regions.iter().map(|r| (r.id, r.top - offset)).collect(),
        }
    }

    /// Fraction of the region inside the viewport at `offset`. `None` for
    /// unknown regions and non-finite offsets.
    pub fn intersection_ratio(&self, id: &str, offset: f64) -> Option<f64> {
        if !offset.is_finite() {
            return None;
        }
        let region = self.region(id)?;
        if region.height <= 0.0 {
            return Some(0.0);
        }
        let view_top = offset;
        let view_bottom = offset + self.viewport_height;
        let visible = (region.bottom().min(view_bottom) - region.top.max(view_top)).max(0.0);
        Some((visible / region.height).min(1.0))
    }
}
