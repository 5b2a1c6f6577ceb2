use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use mockup_editor::{demo_elements, ViewportPreset};
use std::fs;
use std::path::PathBuf;

const PAGE_FILE: &str = "page.json";

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Viewport preset (desktop, laptop, tablet, mobile)
    #[arg(short, long, default_value = "desktop")]
    pub viewport: String,

    /// Show the snap grid by default
    #[arg(short, long)]
    pub grid: bool,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let Some(viewport) = ViewportPreset::parse(&args.viewport) else {
        bail!(
            "Invalid viewport: {}. Use: desktop, laptop, tablet, or mobile",
            args.viewport
        );
    };

    println!("{}", "📝 Initializing mockup...".bright_blue().bold());

    // Starter page, never clobbered
    let page_path = PathBuf::from(cwd).join(PAGE_FILE);
    if !page_path.exists() {
        let page_json = serde_json::to_string_pretty(&demo_elements())?;
        fs::write(&page_path, page_json)?;
        println!("  {} Created {}", "✓".green(), PAGE_FILE);
    }

    let config = Config {
        viewport,
        show_grid: args.grid,
        initial_elements: Some(PAGE_FILE.to_string()),
        ..Config::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Mockup initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: mockup layers");
    println!("  2. Run: mockup render --out mockup.html");

    Ok(())
}
