use super::open_editor;
use crate::config::Config;
use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use mockup_canvas::{render_document, CanvasRenderer, HtmlOptions};
use mockup_editor::{Action, ViewportPreset};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Standalone HTML page
    Html,
    /// Canvas tree as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Elements JSON file (defaults to config initialElements, then the demo page)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: RenderFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Override the configured viewport
    #[arg(long)]
    pub viewport: Option<String>,

    /// Override the configured zoom percent
    #[arg(long)]
    pub zoom: Option<i32>,

    /// Paint the element as selected
    #[arg(long)]
    pub select: Option<String>,

    /// Minified output
    #[arg(long)]
    pub compact: bool,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut editor = open_editor(&config, cwd, args.input.as_deref())?;

    if let Some(name) = &args.viewport {
        let Some(viewport) = ViewportPreset::parse(name) else {
            bail!("Invalid viewport: {}. Use: desktop, laptop, tablet, or mobile", name);
        };
        editor.dispatch(Action::SetViewport { viewport });
    }
    if let Some(zoom) = args.zoom {
        editor.dispatch(Action::SetZoom { zoom });
    }
    if let Some(id) = &args.select {
        editor.select(Some(id.as_str()));
        if editor.selected().is_none() {
            bail!("No element with id {}", id);
        }
    }

    let renderer = CanvasRenderer::new(config.render_options());
    let output = match args.format {
        RenderFormat::Html => {
            let options = HtmlOptions {
                pretty: !args.compact,
                ..HtmlOptions::default()
            };
            render_document(editor.state(), &renderer, &options)
        }
        RenderFormat::Json => {
            let tree = renderer.render(editor.state());
            if args.compact {
                serde_json::to_string(&tree)?
            } else {
                serde_json::to_string_pretty(&tree)?
            }
        }
    };

    match &args.out {
        Some(path) => {
            let path = PathBuf::from(cwd).join(path);
            fs::write(&path, output)?;
            println!(
                "  {} Rendered {} elements → {}",
                "✓".green(),
                editor.forest().node_count(),
                path.display()
            );
        }
        None => println!("{}", output),
    }

    Ok(())
}
