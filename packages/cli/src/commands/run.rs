use super::layers::print_layers;
use super::open_editor;
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use mockup_editor::{
    load_script, Document, EditorObserver, EditorState, ExportFormat, Forest, MockupElement,
};
use mockup_panels::{properties, PropertiesView};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// JSON array of editor actions
    pub script: PathBuf,

    /// Elements JSON file (defaults to config initialElements, then the demo page)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the resulting elements back to the input file
    #[arg(short, long)]
    pub save: bool,

    /// Only print the final summary
    #[arg(short, long)]
    pub quiet: bool,
}

/// Prints editor notifications as they happen
struct ConsoleObserver;

impl EditorObserver for ConsoleObserver {
    fn on_elements_change(&mut self, forest: &Forest) {
        println!("    {} elements changed ({} total)", "↳".cyan(), forest.node_count());
    }

    fn on_element_select(&mut self, element: Option<&MockupElement>) {
        println!("{}", selection_line(element));
    }

    fn on_export(&mut self, format: ExportFormat) {
        println!("    {} export requested: {}", "↳".cyan(), format);
    }
}

pub fn run(args: RunArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let script_path = PathBuf::from(cwd).join(&args.script);
    let actions = load_script(&script_path)
        .with_context(|| format!("Cannot load script {}", script_path.display()))?;

    let mut editor = open_editor(&config, cwd, args.input.as_deref())?;
    if !args.quiet {
        editor.subscribe(ConsoleObserver);
    }

    println!(
        "{} {} ({} actions)",
        "▶".bright_blue(),
        args.script.display(),
        actions.len()
    );

    let mut changed = 0;
    for (index, action) in actions.into_iter().enumerate() {
        if !args.quiet {
            println!("  {} {:?}", format!("[{}]", index + 1).bright_black(), action);
        }
        let result = editor.dispatch(action);
        if result.elements_changed() {
            changed += 1;
        }
        if let Some(id) = result.created {
            tracing::info!(id = %id, "Created element");
        }
    }

    println!();
    print_layers(editor.state());
    println!();
    print_properties(editor.state());
    println!();
    println!(
        "{} {} forest changes, version {}, undo {}, redo {}",
        "✓".green(),
        changed,
        editor.version(),
        history_label(editor.can_undo(), editor.undo_description()),
        history_label(editor.can_redo(), editor.redo_description())
    );

    if args.save {
        let target = args
            .input
            .clone()
            .or_else(|| config.initial_elements.as_ref().map(PathBuf::from));
        let Some(target) = target else {
            bail!("--save needs --input or initialElements in {}", DEFAULT_CONFIG_NAME);
        };
        let path = PathBuf::from(cwd).join(target);
        let mut document = Document::load(path.clone())?;
        document.replace(editor.forest().clone());
        document.save()?;
        println!("  {} Saved {}", "✓".green(), path.display());
    }

    Ok(())
}

fn selection_line(element: Option<&MockupElement>) -> String {
    match element {
        Some(el) => format!("    {} selected {}", "↳".cyan(), el.id().bright_white()),
        None => format!("    {} selection cleared", "↳".cyan()),
    }
}

fn print_properties(state: &EditorState) {
    println!("{}", "Properties".bold());
    match properties::view(state) {
        PropertiesView::Empty { message } => println!("  {}", message.dimmed()),
        PropertiesView::Element(props) => {
            println!("  {} {}", props.name.bright_white().bold(), format!("#{}", props.id).bright_black());
            println!("  type      {}", props.element_type);
            println!("  position  {}, {}", props.x, props.y);
            println!("  size      {} × {}", props.width, props.height);
            println!("  rotation  {}°", props.rotation);
            println!("  opacity   {}", props.opacity);
            if props.locked {
                println!("  {}", "locked".yellow());
            }
            if let Some(content) = &props.content {
                println!("  content   {:?}", content);
            }
            if let Some(typography) = &props.typography {
                if let Some(size) = typography.font_size {
                    println!("  font      {}px", size);
                }
            }
        }
    }
}

fn history_label(available: bool, description: Option<&str>) -> String {
    match (available, description) {
        (true, Some(description)) => format!("yes ({})", description),
        (true, None) => "yes".to_string(),
        (false, _) => "no".to_string(),
    }
}
