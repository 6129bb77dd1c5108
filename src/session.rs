//! A mounted page: every interactive component plus the host they register with.
//!
//! [`PageSession`] owns one [`ViewportObserver`] per region (every section and
//! the footer), the [`ScrollTracker`] behind the nav bar, the mobile-menu flag,
//! a [`CountUp`] per figure in the About and Achievements sections, the
//! certifications [`Carousel`], and the [`ContactForm`]. Events go in one at a
//! time through [`PageSession::handle`]; a section's counters start the moment
//! its observer latches.
//!
//! For the in-memory [`EventHost`] the session can also drive itself from a
//! [`Layout`]: [`PageSession::scroll_to`] turns an offset into a scroll sample
//! plus intersection entries, and [`PageSession::advance`] fires due timers.

use crate::config::BehaviorConfig;
use crate::content::Portfolio;
use crate::interaction::{
    Carousel, CarouselError, ContactForm, CountUp, EventHost, Field, FormError,
    IntersectionEntry, IntersectionHost, Layout, ScrollSample, ScrollState, ScrollTracker,
    TimerHost, TimerId, ViewportObserver,
};
use crate::sections::{self, FOOTER_ID, SECTIONS};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown navigation target: {0}")]
    UnknownTarget(String),
    #[error("carousel: {0}")]
    Carousel(#[from] CarouselError),
    #[error("contact form: {0}")]
    Form(#[from] FormError),
}

/// One input to a mounted page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scroll(ScrollSample),
    Intersection(IntersectionEntry),
    Tick(TimerId),
    /// A nav link was clicked; the target section id.
    NavClick(String),
    ToggleMenu,
    CloseMenu,
    CarouselNext,
    CarouselPrevious,
    CarouselSelect(usize),
    FormInput { field: Field, value: String },
    FormSubmit,
}

/// A count-up figure and the section that starts it.
#[derive(Debug)]
pub struct SessionCounter {
    section: &'static str,
    label: String,
    prefix: String,
    suffix: String,
    counter: CountUp,
}

impl SessionCounter {
    pub fn section(&self) -> &'static str {
        self.section
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn counter(&self) -> &CountUp {
        &self.counter
    }

    pub fn display(&self) -> String {
        self.counter.display(&self.prefix, &self.suffix)
    }
}

pub struct PageSession<H: IntersectionHost + TimerHost> {
    host: H,
    scroll: ScrollTracker,
    menu_open: bool,
    reveals: Vec<ViewportObserver>,
    counters: Vec<SessionCounter>,
    carousel: Carousel,
    form: ContactForm,
    scroll_request: Option<&'static str>,
}

impl<H: IntersectionHost + TimerHost> PageSession<H> {
    /// Mount the page on `host`.
    ///
    /// Regions that start out visible (a host without intersection support)
    /// start their counters immediately.
    pub fn mount(
        mut host: H,
        behavior: &BehaviorConfig,
        portfolio: &Portfolio,
    ) -> Result<Self, SessionError> {
        let carousel = Carousel::new(portfolio.certifications.items.len())?;

        let reveals = SECTIONS
            .iter()
            .map(|s| s.id)
            .chain(std::iter::once(FOOTER_ID))
            .map(|id| ViewportObserver::mount(&mut host, id, behavior.reveal.threshold_for(id)))
            .collect();

        let params = behavior.count_up_params();
        let about = portfolio.about.stats.iter().map(|s| SessionCounter {
            section: "about",
            label: s.label.clone(),
            prefix: s.prefix.clone(),
            suffix: s.suffix.clone(),
            counter: CountUp::new(s.target, params),
        });
        let achievements = portfolio.achievements.items.iter().map(|a| SessionCounter {
            section: "achievements",
            label: a.label.clone(),
            prefix: a.prefix.clone(),
            suffix: a.suffix.clone(),
            counter: CountUp::new(a.target, params),
        });
        let counters = about.chain(achievements).collect();

        let mut session = Self {
            host,
            scroll: ScrollTracker::new(&SECTIONS, behavior.scroll_params()),
            menu_open: false,
            reveals,
            counters,
            carousel,
            form: ContactForm::new(),
            scroll_request: None,
        };

        let already_visible: Vec<String> = session
            .reveals
            .iter()
            .filter(|r| r.is_visible())
            .map(|r| r.region().to_string())
            .collect();
        for region in &already_visible {
            session.start_counters(region);
        }
        Ok(session)
    }

    pub fn handle(&mut self, event: PageEvent) -> Result<(), SessionError> {
        match event {
            PageEvent::Scroll(sample) => {
                self.scroll.on_scroll(&sample);
            }
            PageEvent::Intersection(entry) => {
                let mut latched = None;
                for reveal in &mut self.reveals {
                    if reveal.handle(&mut self.host, &entry) {
                        latched = Some(reveal.region().to_string());
                        break;
                    }
                }
                if let Some(region) = latched {
                    self.start_counters(&region);
                }
            }
            PageEvent::Tick(timer) => {
                for c in &mut self.counters {
                    c.counter.tick(&mut self.host, timer);
                }
            }
            PageEvent::NavClick(id) => {
                let target =
                    sections::find(&id).ok_or(SessionError::UnknownTarget(id))?;
                self.scroll_request = Some(target.id);
                self.menu_open = false;
            }
            PageEvent::ToggleMenu => self.menu_open = !self.menu_open,
            PageEvent::CloseMenu => self.menu_open = false,
            PageEvent::CarouselNext => {
                self.carousel.next();
            }
            PageEvent::CarouselPrevious => {
                self.carousel.previous();
            }
            PageEvent::CarouselSelect(index) => {
                self.carousel.select(index)?;
            }
            PageEvent::FormInput { field, value } => self.form.update(field, value)?,
            PageEvent::FormSubmit => self.form.submit()?,
        }
        Ok(())
    }

    fn start_counters(&mut self, region: &str) {
        for c in self.counters.iter_mut().filter(|c| c.section == region) {
            c.counter.start(&mut self.host);
        }
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_revealed(&self, region: &str) -> bool {
        self.reveals
            .iter()
            .any(|r| r.region() == region && r.is_visible())
    }

    /// Revealed regions in page order.
    pub fn revealed(&self) -> Vec<&str> {
        self.reveals
            .iter()
            .filter(|r| r.is_visible())
            .map(|r| r.region())
            .collect()
    }

    pub fn counters(&self) -> &[SessionCounter] {
        &self.counters
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Section a nav click asked to scroll to, if not yet taken.
    pub fn take_scroll_request(&mut self) -> Option<&'static str> {
        self.scroll_request.take()
    }

    /// Tear down every live registration and hand the host back.
    pub fn unmount(self) -> H {
        let mut host = self.host;
        for reveal in self.reveals {
            reveal.unmount(&mut host);
        }
        for c in self.counters {
            c.counter.unmount(&mut host);
        }
        host
    }
}

impl PageSession<EventHost> {
    /// Scroll the page to `offset`: one scroll sample, then one intersection
    /// entry per live observation. Non-finite offsets deliver nothing.
    pub fn scroll_to(&mut self, layout: &Layout, offset: f64) -> Result<(), SessionError> {
        if !offset.is_finite() {
            return Ok(());
        }
        let offset = offset.clamp(0.0, layout.max_offset());
        self.handle(PageEvent::Scroll(layout.sample(offset)))?;
        let entries = self
            .host
            .intersection_entries(|region| layout.intersection_ratio(region, offset));
        for entry in entries {
            self.handle(PageEvent::Intersection(entry))?;
        }
        Ok(())
    }

    /// Click a nav link and follow the resulting scroll request.
    pub fn navigate(&mut self, layout: &Layout, id: &str) -> Result<(), SessionError> {
        self.handle(PageEvent::NavClick(id.to_string()))?;
        let offset = self
            .take_scroll_request()
            .and_then(|target| layout.anchor_offset(target));
        if let Some(offset) = offset {
            self.scroll_to(layout, offset)?;
        }
        Ok(())
    }

    /// Move the virtual clock forward, firing every timer due on the way.
    pub fn advance(&mut self, by: Duration) -> Result<(), SessionError> {
        let deadline = self.host.now() + by;
        while let Some(timer) = self.host.pop_due(deadline) {
            self.handle(PageEvent::Tick(timer))?;
        }
        self.host.settle(deadline);
        Ok(())
    }

    pub fn snapshot(&self, offset: f64) -> SessionSnapshot {
        let state = self.scroll_state();
        SessionSnapshot {
            offset,
            time_ms: self.host.now().as_millis() as u64,
            scrolled: state.scrolled_past_threshold,
            active_section: state.active_section,
            menu_open: self.menu_open,
            revealed: self.revealed().into_iter().map(str::to_string).collect(),
            counters: self
                .counters
                .iter()
                .map(|c| CounterSnapshot {
                    section: c.section,
                    label: c.label.clone(),
                    display: c.display(),
                    complete: c.counter.is_complete(),
                })
                .collect(),
            carousel: self.carousel.position(),
            form_submitted: self.form.is_submitted(),
        }
    }
}

/// Observable page state at one point of a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub offset: f64,
    pub time_ms: u64,
    pub scrolled: bool,
    pub active_section: &'static str,
    pub menu_open: bool,
    pub revealed: Vec<String>,
    pub counters: Vec<CounterSnapshot>,
    pub carousel: String,
    pub form_submitted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterSnapshot {
    pub section: &'static str,
    pub label: String,
    pub display: String,
    pub complete: bool,
}
