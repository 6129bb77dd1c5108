use clap::{Parser, Subcommand};
use folio::config::{self, SiteConfig};
use folio::content::Portfolio;
use folio::interaction::{EventHost, Layout};
use folio::session::PageSession;
use folio::{generate, output, sections};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where content and config come from.
#[derive(clap::Args, Clone)]
struct SourceArgs {
    /// Portfolio content file (defaults to the built-in content)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory holding an optional config.toml
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    /// Asset directory copied to the output root (overrides [assets] dir)
    #[arg(long)]
    assets: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "One-page portfolio site generator")]
#[command(long_about = "\
One-page portfolio site generator

A single TOML content file becomes one static page with ten anchored sections:

  hero, about, experience, skills, tools, certifications,
  achievements, education, references, contact

Site behaviour (scroll threshold, reveal thresholds, count-up timing) and the
color palette come from an optional config.toml layered over stock defaults.
The asset directory (resume, profile photo) is copied verbatim to the output.

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page and copy assets into the output directory
    Build(SourceArgs),
    /// Validate config and content without building
    Check(SourceArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Replay scroll offsets through a page session and print its state
    Simulate {
        #[command(flatten)]
        source: SourceArgs,

        /// Comma-separated scroll offsets in pixels (defaults to every section anchor)
        #[arg(long, value_delimiter = ',', value_parser = parse_offset)]
        offsets: Vec<f64>,

        /// Time spent at each offset before sampling
        #[arg(long, default_value_t = 500)]
        dwell_ms: u64,

        /// Viewport height used by the layout model
        #[arg(long, default_value_t = 800.0)]
        viewport_height: f64,

        /// Print snapshots as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(source) => {
            let (portfolio, site_config, _) = load_inputs(&source)?;
            let assets_dir = resolve_assets_dir(&source, &site_config);

            println!("==> Generating page → {}", cli.output.display());
            let report = generate::generate(&portfolio, &site_config, &assets_dir, &cli.output)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check(source) => {
            println!("==> Checking {}", describe_content(&source));
            let (portfolio, site_config, config_file) = load_inputs(&source)?;
            let assets_dir = resolve_assets_dir(&source, &site_config);
            let missing = portfolio.missing_assets(&assets_dir);
            output::print_check_output(&portfolio, config_file.as_deref(), &assets_dir, &missing);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Simulate {
            source,
            offsets,
            dwell_ms,
            viewport_height,
            json,
        } => {
            let (portfolio, site_config, _) = load_inputs(&source)?;
            let layout = Layout::estimated(viewport_height);
            let offsets = if offsets.is_empty() {
                sections::SECTIONS
                    .iter()
                    .filter_map(|s| layout.anchor_offset(s.id))
                    .collect()
            } else {
                offsets
            };

            let mut session = PageSession::mount(EventHost::new(), &site_config.behavior, &portfolio)?;
            let mut frames = Vec::with_capacity(offsets.len());
            for offset in offsets {
                let offset = offset.clamp(0.0, layout.max_offset());
                session.scroll_to(&layout, offset)?;
                session.advance(Duration::from_millis(dwell_ms))?;
                frames.push(session.snapshot(offset));
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&frames)?);
            } else {
                output::print_simulation(&frames);
            }
        }
    }

    Ok(())
}

/// Load content and layered config. Also returns the config file that was
/// merged, if one exists.
fn load_inputs(
    source: &SourceArgs,
) -> Result<(Portfolio, SiteConfig, Option<PathBuf>), Box<dyn std::error::Error>> {
    let site_config = config::load_config(&source.config_dir)?;
    let portfolio = Portfolio::load(source.content.as_deref())?;
    let config_file = source.config_dir.join("config.toml");
    let config_file = config_file.exists().then_some(config_file);
    Ok((portfolio, site_config, config_file))
}

/// `--assets` wins; otherwise `[assets] dir` relative to the config directory.
fn resolve_assets_dir(source: &SourceArgs, site_config: &SiteConfig) -> PathBuf {
    match &source.assets {
        Some(dir) => dir.clone(),
        None => source.config_dir.join(&site_config.assets.dir),
    }
}

/// A scroll offset in pixels; must be a finite number.
fn parse_offset(s: &str) -> Result<f64, String> {
    let offset: f64 = s.trim().parse().map_err(|e| format!("{e}"))?;
    if offset.is_finite() {
        Ok(offset)
    } else {
        Err(format!("offset must be a finite number, got {s}"))
    }
}

fn describe_content(source: &SourceArgs) -> String {
    source
        .content
        .as_deref()
        .map(Path::display)
        .map(|d| d.to_string())
        .unwrap_or_else(|| "built-in content".to_string())
}
