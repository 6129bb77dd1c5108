//! End-to-end CLI tests: run the `folio` binary against temp directories.

use folio::config::SiteConfig;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn folio(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .output()
        .expect("failed to run folio")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

// =========================================================================
// build
// =========================================================================

#[test]
fn build_writes_page_and_copies_assets() {
    let tmp = TempDir::new().unwrap();
    let assets = tmp.path().join("assets");
    fs::create_dir_all(assets.join("fonts")).unwrap();
    fs::write(assets.join("profile-photo.png"), b"png").unwrap();
    fs::write(assets.join("Mausam_Patel_Resume.pdf"), b"pdf").unwrap();
    fs::write(assets.join("fonts/inter.woff2"), b"font").unwrap();
    let dist = tmp.path().join("dist");

    let out = folio(&[
        "build",
        "--assets",
        path_arg(&assets),
        "--config-dir",
        path_arg(tmp.path()),
        "--output",
        path_arg(&dist),
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let html = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    for id in folio::sections::SECTIONS.iter().map(|s| s.id) {
        assert!(html.contains(&format!(r#"<section id="{id}""#)), "missing #{id}");
    }
    assert_eq!(fs::read(dist.join("profile-photo.png")).unwrap(), b"png");
    assert_eq!(fs::read(dist.join("fonts/inter.woff2")).unwrap(), b"font");

    let text = stdout(&out);
    assert!(text.contains("001 Home \u{2192} index.html#hero"));
    assert!(text.contains("3 assets"));
    assert!(!text.contains("missing"));
}

#[test]
fn build_without_assets_dir_reports_missing_files() {
    let tmp = TempDir::new().unwrap();
    let dist = tmp.path().join("dist");

    let out = folio(&[
        "build",
        "--config-dir",
        path_arg(tmp.path()),
        "--output",
        path_arg(&dist),
    ]);
    assert!(out.status.success());
    assert!(dist.join("index.html").is_file());
    assert!(stdout(&out).contains("Mausam_Patel_Resume.pdf: missing"));
}

#[test]
fn build_applies_config_overrides() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[behavior]\nscroll_threshold = 120.0\n\n[colors]\nprimary = \"#123456\"\n",
    )
    .unwrap();
    let dist = tmp.path().join("dist");

    let out = folio(&[
        "build",
        "--config-dir",
        path_arg(tmp.path()),
        "--output",
        path_arg(&dist),
    ]);
    assert!(out.status.success());

    let html = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(html.contains("--color-primary: #123456"));
    assert!(html.contains(r#""scrollThreshold":120.0"#));
}

#[test]
fn build_rejects_invalid_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[behavior.count_up]\nsteps = 0\n",
    )
    .unwrap();

    let out = folio(&[
        "build",
        "--config-dir",
        path_arg(tmp.path()),
        "--output",
        path_arg(&tmp.path().join("dist")),
    ]);
    assert!(!out.status.success());
    assert!(!tmp.path().join("dist/index.html").exists());
}

#[test]
fn build_uses_content_file() {
    let tmp = TempDir::new().unwrap();
    let content = folio::content::DEFAULT_CONTENT.replace("Mausam Patel", "Ada <Lovelace>");
    let content_path = tmp.path().join("portfolio.toml");
    fs::write(&content_path, content).unwrap();
    let dist = tmp.path().join("dist");

    let out = folio(&[
        "build",
        "--content",
        path_arg(&content_path),
        "--config-dir",
        path_arg(tmp.path()),
        "--output",
        path_arg(&dist),
    ]);
    assert!(out.status.success());

    let html = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(html.contains("Ada &lt;Lovelace&gt;"));
    assert!(!html.contains("Ada <Lovelace>"));
}

// =========================================================================
// check
// =========================================================================

#[test]
fn check_prints_inventory() {
    let tmp = TempDir::new().unwrap();
    let out = folio(&["check", "--config-dir", path_arg(tmp.path())]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains("==> Checking built-in content"));
    assert!(text.contains("005 Tools (5 tools)"));
    assert!(text.contains("stock defaults"));
    assert!(text.contains("==> Content is valid"));
}

#[test]
fn check_rejects_invalid_content() {
    let tmp = TempDir::new().unwrap();
    let content_path = tmp.path().join("portfolio.toml");
    fs::write(&content_path, "[profile]\nname = \"\"\n").unwrap();

    let out = folio(&[
        "check",
        "--content",
        path_arg(&content_path),
        "--config-dir",
        path_arg(tmp.path()),
    ]);
    assert!(!out.status.success());
}

// =========================================================================
// gen-config
// =========================================================================

#[test]
fn gen_config_parses_back_to_defaults() {
    let out = folio(&["gen-config"]);
    assert!(out.status.success());

    let parsed: SiteConfig = toml::from_str(&stdout(&out)).unwrap();
    let stock = SiteConfig::default();
    assert_eq!(parsed.behavior.scroll_threshold, stock.behavior.scroll_threshold);
    assert_eq!(parsed.behavior.count_up.steps, stock.behavior.count_up.steps);
    assert_eq!(parsed.behavior.reveal.threshold_for("about"), 0.2);
    assert_eq!(parsed.assets.dir, stock.assets.dir);
    assert_eq!(parsed.colors.primary, stock.colors.primary);
    parsed.validate().unwrap();
}

// =========================================================================
// simulate
// =========================================================================

#[test]
fn simulate_json_tracks_scroll_threshold() {
    let tmp = TempDir::new().unwrap();
    let out = folio(&[
        "simulate",
        "--config-dir",
        path_arg(tmp.path()),
        "--offsets",
        "0,51",
        "--json",
    ]);
    assert!(out.status.success());

    let frames: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let frames = frames.as_array().unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0]["scrolled"], false);
    assert_eq!(frames[1]["scrolled"], true);
    assert_eq!(frames[0]["active_section"], "hero");
    assert_eq!(frames[1]["time_ms"], 1000);
    let revealed = frames[0]["revealed"].as_array().unwrap();
    assert!(revealed.iter().any(|r| r == "hero"));
}

#[test]
fn simulate_defaults_to_every_anchor() {
    let tmp = TempDir::new().unwrap();
    let out = folio(&["simulate", "--config-dir", path_arg(tmp.path())]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains("001 Offset 0px @ 500ms"));
    assert!(text.contains("active contact"));
}

#[test]
fn simulate_rejects_non_finite_offsets() {
    let tmp = TempDir::new().unwrap();
    for bad in ["nan", "0,inf"] {
        let out = folio(&[
            "simulate",
            "--config-dir",
            path_arg(tmp.path()),
            "--offsets",
            bad,
        ]);
        assert!(!out.status.success(), "accepted --offsets {bad}");
        assert!(String::from_utf8_lossy(&out.stderr).contains("finite"));
    }
}

#[test]
fn built_page_shows_final_figures_without_script() {
    let tmp = TempDir::new().unwrap();
    let dist = tmp.path().join("dist");
    let out = folio(&[
        "build",
        "--config-dir",
        path_arg(tmp.path()),
        "--output",
        path_arg(&dist),
    ]);
    assert!(out.status.success());

    let html = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(html.contains(">$600K</span>"));
    assert!(html.contains(">20%</span>"));
    assert!(!html.contains(">$0K</span>"));
}
