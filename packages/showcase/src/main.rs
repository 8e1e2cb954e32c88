//! Button Showcase - Static documentation site for the Button component
//!
//! Generates a landing page, a Button docs page with one canvas per story,
//! a page per story and an `index.json` describing them.

mod config;
mod highlight;
mod i18n;
mod markdown;
mod site;
mod views;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::ShowcaseConfig;
use highlight::Highlighter;
use i18n::I18n;
use site::Site;
use views::ViewContext;

#[derive(Parser)]
#[command(name = "button-showcase")]
#[command(about = "Generate the Button component showcase site")]
#[command(version)]
struct Cli {
    /// Config file (defaults to $BUTTON_SHOWCASE_CONFIG, then the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output directory, overriding the config
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    tracing::info!("Starting Button Showcase");

    let config_path = ShowcaseConfig::resolve_path(cli.config.as_deref());
    let mut config = ShowcaseConfig::load(config_path.as_deref())?;
    if let Some(out) = cli.out {
        config.output_dir = out;
    }

    let i18n = I18n::from_env();
    tracing::debug!("Using locale {}", i18n.locale());

    let highlighter = Highlighter::new(&config.highlight_theme)?;

    let cx = ViewContext {
        config: &config,
        i18n: &i18n,
        highlighter: &highlighter,
    };

    let site = Site::build(&cx)?;
    site.write(&config.output_dir)?;

    tracing::info!("Showcase ready at {}", config.output_dir.join("index.html").display());

    Ok(())
}
