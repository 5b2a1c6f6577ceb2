pub mod init;
pub mod layers;
pub mod render;
pub mod run;

pub use init::{init, InitArgs};
pub use layers::{layers, LayersArgs};
pub use render::{render, RenderArgs};
pub use run::{run, RunArgs};

use crate::config::Config;
use mockup_editor::Editor;
use std::path::Path;

/// Editor seeded from `input`, the configured `initialElements`, or the demo page
pub(crate) fn open_editor(config: &Config, cwd: &str, input: Option<&Path>) -> anyhow::Result<Editor> {
    let initial = config.initial_elements(cwd, input)?;
    if initial.is_none() {
        tracing::debug!("No elements file, using demo page");
    }
    Ok(Editor::with_options(initial, config.editor_options()))
}
