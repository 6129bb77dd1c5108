//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (a section, a counter, an asset) is its semantic identity,
//! its positional index and label, with paths and details shown as indented
//! context lines underneath.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Sections
//! 001 Home
//!     Mausam Patel
//! 002 About (4 stats)
//!     Client-Focused Professional
//! 003 Experience (5 entries)
//!     Career Journey
//! ...
//!
//! Assets
//!     assets/
//!     Mausam_Patel_Resume.pdf: missing
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 Home → index.html#hero
//! 002 About → index.html#about
//! ...
//!
//! Assets
//!     profile-photo.png → profile-photo.png
//!
//! Generated index.html (48213 bytes), 10 sections, 2 assets
//! ```
//!
//! ## Simulate
//!
//! ```text
//! 001 Offset 0px @ 0ms
//!     Nav: transparent, active hero
//!     Revealed: hero
//! 002 Offset 1200px @ 0ms
//!     Nav: opaque, active about
//!     Revealed: hero, about
//!     About: 0+ 0 0M+ 0+
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::content::Portfolio;
use crate::generate::GenerateReport;
use crate::sections::SECTIONS;
use crate::session::SessionSnapshot;
use std::path::{Path, PathBuf};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + label, with optional count.
///
/// ```text
/// 003 Experience (5 entries)
/// 001 Home
/// ```
fn entity_header(index: usize, label: &str, count: Option<(usize, &str)>) -> String {
    match count {
        Some((n, noun)) => format!("{} {} ({} {})", format_index(index), label, n, noun),
        None => format!("{} {}", format_index(index), label),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

/// Headline and item count for a section.
fn section_summary<'a>(portfolio: &'a Portfolio, id: &str) -> (&'a str, Option<(usize, &'static str)>) {
    match id {
        "hero" => (&portfolio.profile.name, None),
        "about" => (&portfolio.about.headline, Some((portfolio.about.stats.len(), "stats"))),
        "experience" => (
            &portfolio.experience.headline,
            Some((portfolio.experience.items.len(), "entries")),
        ),
        "skills" => (
            &portfolio.skills.headline,
            Some((portfolio.skills.categories.len(), "categories")),
        ),
        "tools" => (&portfolio.tools.headline, Some((portfolio.tools.items.len(), "tools"))),
        "certifications" => (
            &portfolio.certifications.headline,
            Some((portfolio.certifications.items.len(), "slides")),
        ),
        "achievements" => (
            &portfolio.achievements.headline,
            Some((portfolio.achievements.items.len(), "figures")),
        ),
        "education" => (
            &portfolio.education.headline,
            Some((portfolio.education.items.len(), "entries")),
        ),
        "references" => (
            &portfolio.references.headline,
            Some((portfolio.references.items.len(), "references")),
        ),
        "contact" => (&portfolio.contact.headline, None),
        _ => ("", None),
    }
}

// ============================================================================
// Check
// ============================================================================

/// Content inventory printed by `check`.
///
/// `config_file` is the `config.toml` that was merged, if any.
pub fn format_check_output(
    portfolio: &Portfolio,
    config_file: Option<&Path>,
    assets_dir: &Path,
    missing_assets: &[PathBuf],
) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    for (i, section) in SECTIONS.iter().enumerate() {
        let (headline, count) = section_summary(portfolio, section.id);
        lines.push(entity_header(i + 1, section.label, count));
        if !headline.is_empty() {
            lines.push(format!("{}{}", indent(1), truncate_desc(headline, 60)));
        }
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!("{}{}/", indent(1), assets_dir.display()));
    for missing in missing_assets {
        lines.push(format!("{}{}: missing", indent(1), missing.display()));
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    match config_file {
        Some(path) => lines.push(format!("{}{}", indent(1), path.display())),
        None => lines.push(format!("{}stock defaults", indent(1))),
    }
    lines
}

pub fn print_check_output(
    portfolio: &Portfolio,
    config_file: Option<&Path>,
    assets_dir: &Path,
    missing_assets: &[PathBuf],
) {
    for line in format_check_output(portfolio, config_file, assets_dir, missing_assets) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(report: &GenerateReport) -> Vec<String> {
    let page_name = report
        .page
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index.html".to_string());

    let mut lines: Vec<String> = SECTIONS
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{} {} \u{2192} {}#{}", format_index(i + 1), s.label, page_name, s.id))
        .collect();

    if !report.assets.is_empty() || !report.missing_assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!(
                "{}{} \u{2192} {}",
                indent(1),
                asset.display(),
                asset.display()
            ));
        }
        for missing in &report.missing_assets {
            lines.push(format!("{}{}: missing", indent(1), missing.display()));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} ({} bytes), {} sections, {} assets",
        page_name,
        report.page_bytes,
        report.sections,
        report.assets.len()
    ));
    lines
}

pub fn print_build_output(report: &GenerateReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Simulate
// ============================================================================

/// One replay frame: nav state, revealed regions, and running counters
/// grouped by section.
pub fn format_simulation_frame(index: usize, snapshot: &SessionSnapshot) -> Vec<String> {
    let mut lines = vec![format!(
        "{} Offset {}px @ {}ms",
        format_index(index),
        snapshot.offset,
        snapshot.time_ms
    )];

    let nav = if snapshot.scrolled { "opaque" } else { "transparent" };
    let menu = if snapshot.menu_open { ", menu open" } else { "" };
    lines.push(format!(
        "{}Nav: {}, active {}{}",
        indent(1),
        nav,
        snapshot.active_section,
        menu
    ));

    let revealed = if snapshot.revealed.is_empty() {
        "none".to_string()
    } else {
        snapshot.revealed.join(", ")
    };
    lines.push(format!("{}Revealed: {}", indent(1), revealed));

    for section in SECTIONS.iter() {
        let values: Vec<&str> = snapshot
            .counters
            .iter()
            .filter(|c| c.section == section.id)
            .map(|c| c.display.as_str())
            .collect();
        let started = snapshot.revealed.iter().any(|r| r == section.id);
        if !values.is_empty() && started {
            lines.push(format!("{}{}: {}", indent(1), section.label, values.join(" ")));
        }
    }
    lines
}

pub fn print_simulation(frames: &[SessionSnapshot]) {
    for (i, frame) in frames.iter().enumerate() {
        for line in format_simulation_frame(i + 1, frame) {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CounterSnapshot;

    fn portfolio() -> Portfolio {
        Portfolio::load(None).unwrap()
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(999), "999");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(1), "    ");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn entity_header_with_count() {
        assert_eq!(
            entity_header(3, "Experience", Some((5, "entries"))),
            "003 Experience (5 entries)"
        );
    }

    #[test]
    fn entity_header_without_count() {
        assert_eq!(entity_header(1, "Home", None), "001 Home");
    }

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("hello", 10), "hello");
    }

    #[test]
    fn truncate_desc_exact() {
        assert_eq!(truncate_desc("hello", 5), "hello");
    }

    #[test]
    fn truncate_desc_long() {
        assert_eq!(truncate_desc("hello world", 5), "hello...");
    }

    #[test]
    fn truncate_desc_multibyte() {
        assert_eq!(truncate_desc("caf\u{e9} au lait", 4), "caf\u{e9}...");
    }

    // =========================================================================
    // Check
    // =========================================================================

    #[test]
    fn check_lists_every_section_in_order() {
        let lines = format_check_output(&portfolio(), None, Path::new("assets"), &[]);
        assert_eq!(lines[0], "Sections");
        assert_eq!(lines[1], "001 Home");
        assert_eq!(lines[2], "    Mausam Patel");
        assert_eq!(lines[3], "002 About (4 stats)");
        assert_eq!(lines[4], "    Client-Focused Professional");
        assert!(lines.contains(&"006 Certifications (6 slides)".to_string()));
        assert!(lines.contains(&"010 Contact".to_string()));
    }

    #[test]
    fn check_reports_missing_assets_and_config() {
        let missing = vec![PathBuf::from("Mausam_Patel_Resume.pdf")];
        let lines = format_check_output(
            &portfolio(),
            Some(Path::new("site/config.toml")),
            Path::new("assets"),
            &missing,
        );
        assert!(lines.contains(&"    assets/".to_string()));
        assert!(lines.contains(&"    Mausam_Patel_Resume.pdf: missing".to_string()));
        assert_eq!(lines.last().unwrap(), "    site/config.toml");
    }

    #[test]
    fn check_without_config_file_says_defaults() {
        let lines = format_check_output(&portfolio(), None, Path::new("assets"), &[]);
        assert_eq!(lines.last().unwrap(), "    stock defaults");
    }

    // =========================================================================
    // Build
    // =========================================================================

    fn report(assets: Vec<PathBuf>, missing: Vec<PathBuf>) -> GenerateReport {
        GenerateReport {
            page: PathBuf::from("dist/index.html"),
            page_bytes: 1234,
            sections: 10,
            assets,
            missing_assets: missing,
        }
    }

    #[test]
    fn build_lists_anchors() {
        let lines = format_build_output(&report(vec![], vec![]));
        assert_eq!(lines[0], "001 Home \u{2192} index.html#hero");
        assert_eq!(lines[9], "010 Contact \u{2192} index.html#contact");
        assert_eq!(
            lines.last().unwrap(),
            "Generated index.html (1234 bytes), 10 sections, 0 assets"
        );
        assert!(!lines.contains(&"Assets".to_string()));
    }

    #[test]
    fn build_lists_assets() {
        let lines = format_build_output(&report(
            vec![PathBuf::from("profile-photo.png")],
            vec![PathBuf::from("Mausam_Patel_Resume.pdf")],
        ));
        assert!(lines.contains(&"Assets".to_string()));
        assert!(lines.contains(&"    profile-photo.png \u{2192} profile-photo.png".to_string()));
        assert!(lines.contains(&"    Mausam_Patel_Resume.pdf: missing".to_string()));
        assert!(lines.last().unwrap().ends_with("1 assets"));
    }

    // =========================================================================
    // Simulate
    // =========================================================================

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            offset: 1200.0,
            time_ms: 500,
            scrolled: true,
            active_section: "about",
            menu_open: false,
            revealed: vec!["hero".into(), "about".into()],
            counters: vec![
                CounterSnapshot {
                    section: "about",
                    label: "Years Experience".into(),
                    display: "2+".into(),
                    complete: false,
                },
                CounterSnapshot {
                    section: "achievements",
                    label: "Waste Reduction".into(),
                    display: "0%".into(),
                    complete: false,
                },
            ],
            carousel: "1 / 6".into(),
            form_submitted: false,
        }
    }

    #[test]
    fn simulation_frame_layout() {
        let lines = format_simulation_frame(2, &snapshot());
        assert_eq!(
            lines,
            vec![
                "002 Offset 1200px @ 500ms",
                "    Nav: opaque, active about",
                "    Revealed: hero, about",
                "    About: 2+",
            ]
        );
    }

    #[test]
    fn simulation_frame_nothing_revealed() {
        let mut snap = snapshot();
        snap.scrolled = false;
        snap.menu_open = true;
        snap.revealed.clear();
        let lines = format_simulation_frame(1, &snap);
        assert_eq!(lines[1], "    Nav: transparent, active about, menu open");
        assert_eq!(lines[2], "    Revealed: none");
        assert_eq!(lines.len(), 3);
    }
}
