mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{init, layers, render, run, InitArgs, LayersArgs, RenderArgs, RunArgs};
use tracing_subscriber::EnvFilter;

/// Mockup CLI - Lay out, inspect and script page mockups
#[derive(Parser, Debug)]
#[command(name = "mockup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log editor internals to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a mockup.config.json and a starter page
    Init(InitArgs),

    /// Paint the page to HTML or to the JSON canvas tree
    Render(RenderArgs),

    /// Print the layer tree
    Layers(LayersArgs),

    /// Replay a JSON action script against the page
    Run(RunArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Render(args) => render(args, &cwd),
        Command::Layers(args) => layers(args, &cwd),
        Command::Run(args) => run(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
