use anyhow::Context;
use mockup_canvas::{ChildCoordinates, RenderOptions};
use mockup_editor::{load_elements, EditorOptions, MockupElement, ViewportPreset, Zoom};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "mockup.config.json";

/// Mockup configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Device preset for the page box
    #[serde(default)]
    pub viewport: ViewportPreset,

    /// Initial zoom percent (clamped and snapped to steps of 25)
    #[serde(default)]
    pub zoom: Zoom,

    #[serde(default)]
    pub show_grid: bool,

    /// JSON file with the initial element forest; the demo page when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_elements: Option<String>,

    /// How child positions are interpreted when painting
    #[serde(default)]
    pub child_coordinates: ChildCoordinates,

    /// Undo levels kept (0 = unlimited)
    #[serde(default = "default_undo_limit")]
    pub undo_limit: usize,
}

fn default_undo_limit() -> usize {
    100
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Cannot read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid {}", DEFAULT_CONFIG_NAME))?;
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            viewport: self.viewport,
            zoom: self.zoom,
            show_grid: self.show_grid,
            undo_limit: self.undo_limit,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            child_coordinates: self.child_coordinates,
        }
    }

    /// Elements to seed the editor with: `input` wins over `initialElements`
    pub fn initial_elements(
        &self,
        cwd: &str,
        input: Option<&Path>,
    ) -> anyhow::Result<Option<Vec<MockupElement>>> {
        let path = match (input, &self.initial_elements) {
            (Some(path), _) => PathBuf::from(cwd).join(path),
            (None, Some(path)) => PathBuf::from(cwd).join(path),
            (None, None) => return Ok(None),
        };

        let elements = load_elements(&path)
            .with_context(|| format!("Cannot load elements from {}", path.display()))?;
        Ok(Some(elements))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: ViewportPreset::default(),
            zoom: Zoom::default(),
            show_grid: false,
            initial_elements: None,
            child_coordinates: ChildCoordinates::default(),
            undo_limit: default_undo_limit(),
        }
    }
}
