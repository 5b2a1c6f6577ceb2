//! # Mockup Panels
//!
//! The editor's side panels as pure views over [`mockup_editor::EditorState`]:
//!
//! - [`layers`]: the layer tree, with local collapse state and row intents
//! - [`properties`]: the form over the selected element
//!
//! Both produce [`mockup_editor::Action`]s for the host to dispatch; neither
//! mutates editor state directly.

pub mod layers;
pub mod properties;

pub use layers::{LayerIntent, LayerPanel, LayerRow};
pub use properties::{
    parse_int_lenient, snap_opacity, ElementProperties, NumericField, PropertiesView,
    PropertyEdit, Typography, EMPTY_MESSAGE,
};
