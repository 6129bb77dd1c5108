//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's `config.toml` (if any) is merged
//! on top, so a config file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [behavior]
//! scroll_threshold = 50     # px scrolled before the nav bar turns opaque
//! active_offset = 100       # px below viewport top where a section becomes active
//!
//! [behavior.count_up]
//! duration_ms = 2000
//! steps = 60
//!
//! [behavior.reveal]
//! default_threshold = 0.1   # fraction of a section visible before it reveals
//!
//! [behavior.reveal.sections]
//! about = 0.2
//! achievements = 0.2
//!
//! [assets]
//! dir = "assets"
//!
//! [colors]
//! primary = "#1e293b"
//! primary_light = "#334155"
//! background = "#ffffff"
//! surface = "#f8fafc"
//! text = "#0f172a"
//! text_muted = "#64748b"
//! border = "#e2e8f0"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::interaction::{CountUpParams, ScrollParams};
use crate::sections;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Interaction constants shared by the page script and the headless core.
    pub behavior: BehaviorConfig,
    /// Static asset locations.
    pub assets: AssetsConfig,
    /// Page palette.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.behavior;
        if b.scroll_threshold.is_nan() || b.scroll_threshold < 0.0 {
            return Err(ConfigError::Validation(
                "behavior.scroll_threshold must be >= 0".into(),
            ));
        }
        if !b.active_offset.is_finite() {
            return Err(ConfigError::Validation(
                "behavior.active_offset must be a finite number".into(),
            ));
        }
        if b.count_up.steps == 0 {
            return Err(ConfigError::Validation(
                "behavior.count_up.steps must be at least 1".into(),
            ));
        }
        if b.count_up.duration_ms == 0 {
            return Err(ConfigError::Validation(
                "behavior.count_up.duration_ms must be non-zero".into(),
            ));
        }
        check_ratio("behavior.reveal.default_threshold", b.reveal.default_threshold)?;
        for (id, threshold) in &b.reveal.sections {
            if !sections::is_region(id) {
                return Err(ConfigError::Validation(format!(
                    "behavior.reveal.sections: unknown section '{id}'"
                )));
            }
            check_ratio(&format!("behavior.reveal.sections.{id}"), *threshold)?;
        }
        if self.assets.dir.trim().is_empty() {
            return Err(ConfigError::Validation("assets.dir must not be empty".into()));
        }
        Ok(())
    }
}

fn check_ratio(key: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!("{key} must be between 0 and 1")))
    }
}

/// Interaction constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Scroll offset (px) past which the nav bar gets its opaque background.
    pub scroll_threshold: f64,
    /// A section is active once its top edge is at most this far (px) below
    /// the viewport top.
    pub active_offset: f64,
    pub count_up: CountUpConfig,
    pub reveal: RevealConfig,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            active_offset: 100.0,
            count_up: CountUpConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl BehaviorConfig {
    pub fn scroll_params(&self) -> ScrollParams {
        ScrollParams {
            threshold: self.scroll_threshold,
            active_offset: self.active_offset,
        }
    }

    pub fn count_up_params(&self) -> CountUpParams {
        CountUpParams {
            duration: Duration::from_millis(self.count_up.duration_ms),
            steps: self.count_up.steps,
        }
    }
}

/// Count-up animation timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountUpConfig {
    pub duration_ms: u64,
    pub steps: u32,
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            steps: 60,
        }
    }
}

/// Reveal thresholds: the fraction of a section that must be visible before
/// it animates in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub default_threshold: f64,
    /// Per-section overrides keyed by section id (or `footer`).
    pub sections: BTreeMap<String, f64>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            default_threshold: 0.1,
            sections: BTreeMap::from([
                ("about".to_string(), 0.2),
                ("achievements".to_string(), 0.2),
            ]),
        }
    }
}

impl RevealConfig {
    /// Threshold for a region. The hero reveals on its first notification
    /// (threshold 0) unless overridden.
    pub fn threshold_for(&self, id: &str) -> f64 {
        match self.sections.get(id) {
            Some(threshold) => *threshold,
            None if id == sections::HERO_ID => 0.0,
            None => self.default_threshold,
        }
    }
}

/// Static asset locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// Directory copied verbatim into the output root (resume, profile photo,
    /// favicon), relative to `--config-dir`. `--assets` overrides it.
    pub dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: "assets".to_string(),
        }
    }
}

/// Page palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Brand color: headings, buttons, the achievements band, the footer.
    pub primary: String,
    /// Hover state of primary buttons.
    pub primary_light: String,
    pub background: String,
    /// Alternate section background.
    pub surface: String,
    pub text: String,
    /// Secondary text: labels, metadata, captions.
    pub text_muted: String,
    pub border: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#1e293b".to_string(),
            primary_light: "#334155".to_string(),
            background: "#ffffff".to_string(),
            surface: "#f8fafc".to_string(),
            text: "#0f172a".to_string(),
            text_muted: "#64748b".to_string(),
            border: "#e2e8f0".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if there is no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory on top of the stock
/// defaults.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# folio configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Behaviour
# ---------------------------------------------------------------------------
[behavior]
# Scroll offset (px) past which the navigation bar turns opaque.
scroll_threshold = 50.0

# A section becomes the active nav entry once its top edge is at most this
# many px below the top of the viewport. When sections are scanned, later
# sections win.
active_offset = 100.0

# Count-up animation for the About stats and Achievements figures.
[behavior.count_up]
duration_ms = 2000
steps = 60

# Fraction (0-1) of a section that must be visible before it animates in.
[behavior.reveal]
default_threshold = 0.1

# Per-section overrides, keyed by section id (or "footer").
[behavior.reveal.sections]
about = 0.2
achievements = 0.2

# ---------------------------------------------------------------------------
# Assets
# ---------------------------------------------------------------------------
[assets]
# Copied verbatim into the output root: resume PDF, profile photo, favicon.
dir = "assets"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
primary = "#1e293b"        # Headings, buttons, achievements band, footer
primary_light = "#334155"  # Button hover
background = "#ffffff"
surface = "#f8fafc"        # Alternate section background
text = "#0f172a"
text_muted = "#64748b"     # Labels, metadata, captions
border = "#e2e8f0"
"##
}

/// Generate CSS custom properties from the palette.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-primary-light: {primary_light};
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-border: {border};
}}"#,
        primary = colors.primary,
        primary_light = colors.primary_light,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        border = colors.border,
    )
}
