//! Headless interaction core: the page's behaviour without a browser.
//!
//! | Component | Input events | Derived state |
//! |---|---|---|
//! | [`ViewportObserver`] | intersection entries | one-way visibility latch |
//! | [`ScrollTracker`] | scroll samples | active section, scrolled flag |
//! | [`CountUp`] | visibility + timer ticks | displayed integer |
//! | [`Carousel`] | next / previous / select | active index |
//! | [`ContactForm`] | field input + submit | field values, acknowledgment |
//!
//! Every component is plain owned state mutated through `&mut self`. Anything
//! that would be a callback registration in a browser (intersection interest,
//! interval timers) goes through the [`IntersectionHost`] and [`TimerHost`]
//! traits, so components hold ids rather than closures and deregistration is
//! an explicit call.
//!
//! The module is split into:
//! - **Host**: the registration traits and [`EventHost`], a deterministic in-memory host
//! - **Geometry**: [`Layout`], which turns a scroll offset into samples and intersection ratios
//! - **Components**: one file per state machine
//!
//! `static/site.js` is the in-browser twin of these state machines; both read
//! their constants from the same [`BehaviorConfig`](crate::config::BehaviorConfig).

mod carousel;
mod countup;
mod form;
pub mod geometry;
pub mod host;
mod scroll;
mod viewport;

pub use carousel::{Carousel, CarouselError};
pub use countup::{CountUp, CountUpParams, MULTIPLE_LABEL, frame_value};
pub use form::{ContactForm, Field, FormError};
pub use geometry::{Layout, Region};
pub use host::{EventHost, IntersectionEntry, IntersectionHost, ObservationId, TimerHost, TimerId};
pub use scroll::{ScrollParams, ScrollSample, ScrollState, ScrollTracker, derive_scroll_state};
pub use viewport::ViewportObserver;
