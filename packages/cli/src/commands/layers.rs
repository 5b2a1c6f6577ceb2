use super::open_editor;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mockup_editor::EditorState;
use mockup_panels::{LayerPanel, LayerRow};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LayersArgs {
    /// Elements JSON file (defaults to config initialElements, then the demo page)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print rows as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn layers(args: LayersArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let editor = open_editor(&config, cwd, args.input.as_deref())?;

    if args.json {
        let rows = LayerPanel::new().rows(editor.state());
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print_layers(editor.state());
    Ok(())
}

pub(crate) fn print_layers(state: &EditorState) {
    let rows = LayerPanel::new().rows(state);
    println!("{} ({})", "Layers".bold(), rows.len());

    for row in &rows {
        println!("{}", format_row(row));
    }

    let duplicates = state.forest.duplicate_ids();
    if !duplicates.is_empty() {
        println!(
            "{} duplicate ids: {}",
            "⚠️".yellow(),
            duplicates.join(", ")
        );
    }
}

fn format_row(row: &LayerRow) -> String {
    let indent = "  ".repeat(row.depth + 1);
    let marker = if row.selected { "▸" } else { " " };

    let name = if !row.visible {
        row.name.dimmed().strikethrough()
    } else if row.selected {
        row.name.bright_blue().bold()
    } else {
        row.name.normal()
    };

    let mut line = format!(
        "{}{}{} {} {}",
        indent,
        marker,
        name,
        row.element_type.as_str().dimmed(),
        format!("#{}", row.id).bright_black()
    );
    if row.locked {
        line.push_str(&format!(" {}", "locked".yellow()));
    }
    if !row.visible {
        line.push_str(&format!(" {}", "hidden".dimmed()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockup_editor::ElementType;

    fn row(depth: usize) -> LayerRow {
        LayerRow {
            id: "hero-1".to_string(),
            name: "Hero".to_string(),
            element_type: ElementType::Container,
            depth,
            visible: true,
            locked: false,
            selected: false,
            has_children: true,
            expanded: true,
        }
    }

    #[test]
    fn test_row_indents_by_depth() {
        colored::control::set_override(false);

        assert_eq!(format_row(&row(0)), "   Hero container #hero-1");
        assert_eq!(format_row(&row(2)), "       Hero container #hero-1");
    }

    #[test]
    fn test_row_flags() {
        colored::control::set_override(false);

        let mut locked = row(0);
        locked.locked = true;
        locked.visible = false;
        locked.selected = true;
        assert_eq!(format_row(&locked), "  ▸Hero container #hero-1 locked hidden");
    }
}
