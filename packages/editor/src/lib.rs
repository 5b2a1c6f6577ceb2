//! # Mockup Editor
//!
//! Core editing engine for page mockups: a forest of positioned, styled
//! elements plus the state and history of one editor instance.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ panels: layer tree + properties → Actions   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Forest + EditorState + history      │
//! │  - Pure mutations over forest snapshots     │
//! │  - Reducer for every user intent            │
//! │  - Undo/redo, drag protocol, observers      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ canvas: state → VDOM / HTML, hit testing    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Forest is source of truth**: canvas and panels are derived views
//! 2. **Snapshots**: every mutation returns a new forest, the old one is untouched
//! 3. **Total mutations**: unknown ids leave the forest unchanged
//! 4. **One reducer**: state changes only through [`EditorState::reduce`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mockup_editor::{Action, Editor, ElementPatch, ElementType};
//!
//! let mut editor = Editor::new(Some(Vec::new()));
//! let id = editor.add_element(ElementType::Text).unwrap();
//!
//! editor.update_element(&id, ElementPatch::position(10.0, 20.0));
//! editor.dispatch(Action::ToggleLock { id: id.clone() });
//! editor.dispatch(Action::Undo);
//! ```

mod document;
mod drag;
mod element;
mod errors;
mod forest;
mod mutations;
mod seed;
mod session;
mod state;
pub mod store;
mod undo_stack;
mod viewport;

pub use document::{load_elements, load_script, parse_elements, parse_script, Document, DocumentStorage};
pub use drag::{DragSession, Point};
pub use element::{
    default_size, AlignItems, BorderStyle, Display, Element, ElementId, ElementPatch,
    ElementStyles, ElementType, FlexDirection, FontWeight, JustifyContent, MockupElement,
    Spacing, TextAlign,
};
pub use errors::EditorError;
pub use forest::{Forest, NodeKey, Placement};
pub use mutations::{Applied, Mutation};
pub use seed::{demo_elements, demo_forest};
pub use session::{DispatchResult, Editor, EditorObserver, EditorOptions};
pub use state::{Action, EditorEvent, EditorState, ExportFormat, Reduction};
pub use undo_stack::{MutationBatch, UndoStack};
pub use viewport::{PageBox, Tool, ViewportPreset, Zoom};
