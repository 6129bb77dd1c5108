//! # Folio
//!
//! A one-page portfolio site generator. One TOML content file becomes a single
//! `index.html` with ten anchored sections, a scroll-aware navigation bar,
//! reveal-on-scroll regions, animated counters, a certification carousel and a
//! client-only contact form.
//!
//! # Architecture: Render Once, Behave Headlessly
//!
//! ```text
//! portfolio.toml + config.toml  →  generate  →  dist/index.html + assets
//!                                      ↓
//!                        interaction + session (pure state machines)
//! ```
//!
//! The page's behaviour exists in two forms: a small vanilla script
//! ships with the page, and the same rules live in [`interaction`] as
//! headless state machines driven by an explicit event host. [`session`] wires
//! them together into the whole page so the CLI (`folio simulate`) and the
//! tests can replay scrolling without a browser. Every number the script uses
//! is emitted from [`config`] as JSON, so both sides read the same values.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`sections`] | Ordered section registry: anchor ids and nav labels |
//! | [`content`] | Portfolio content model, loading and validation |
//! | [`config`] | Layered `config.toml`: behaviour timing, asset dir, palette |
//! | [`interaction`] | Viewport reveal, scroll tracker, count-up, carousel, contact form, event host |
//! | [`session`] | One page mount: routes `PageEvent`s to every component |
//! | [`generate`] | Renders the page with Maud and copies assets |
//! | [`output`] | CLI output formatting for build, check and simulate |
//!
//! # Design Decisions
//!
//! ## Hosts Own the Callbacks
//!
//! Components never hold closures or timers. They register with a host
//! ([`interaction::IntersectionHost`], [`interaction::TimerHost`]) and keep only
//! the returned id; the host delivers events back by id. Deregistration is an
//! explicit `unmount`, so a dropped or latched component leaves nothing behind.
//!
//! ## Fail Open
//!
//! Without intersection support every region counts as visible. The generated
//! page only hides `.reveal` regions once the head script has confirmed
//! `IntersectionObserver` exists.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup is
//! a build error and all interpolation is auto-escaped.

pub mod config;
pub mod content;
pub mod generate;
pub mod interaction;
pub mod output;
pub mod sections;
pub mod session;
