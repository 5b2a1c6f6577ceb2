//! # Editor Session
//!
//! [`Editor`] owns one [`EditorState`], its undo history and the host's
//! observers. Every user intent goes through [`Editor::dispatch`]:
//!
//! ```text
//! Action → reduce → record inverse → notify observers
//! ```
//!
//! A whole drag gesture (`BeginDrag` … `EndDrag`) is recorded as a single
//! undo step.

use crate::element::{Element, ElementId, ElementPatch, ElementStyles, ElementType, MockupElement};
use crate::forest::Forest;
use crate::seed;
use crate::state::{changes_between, Action, EditorEvent, EditorState, ExportFormat};
use crate::undo_stack::UndoStack;
use crate::viewport::{ViewportPreset, Zoom};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Host callbacks.
///
/// All methods default to no-ops so hosts implement only what they use.
pub trait EditorObserver {
    /// The forest was replaced by a new snapshot
    fn on_elements_change(&mut self, _forest: &Forest) {}

    /// The selection changed; `None` when cleared
    fn on_element_select(&mut self, _element: Option<&MockupElement>) {}

    /// The user asked for an export
    fn on_export(&mut self, _format: ExportFormat) {}
}

/// Startup options for an editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorOptions {
    pub viewport: ViewportPreset,
    pub zoom: Zoom,
    pub show_grid: bool,

    /// Undo levels kept (0 = unlimited)
    pub undo_limit: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            viewport: ViewportPreset::default(),
            zoom: Zoom::default(),
            show_grid: false,
            undo_limit: 100,
        }
    }
}

/// What a dispatched action did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchResult {
    /// Id created by `AddElement`
    pub created: Option<ElementId>,
    pub events: Vec<EditorEvent>,
}

impl DispatchResult {
    pub fn elements_changed(&self) -> bool {
        self.events.contains(&EditorEvent::ElementsChanged)
    }
}

/// One editor instance
pub struct Editor {
    state: EditorState,
    history: UndoStack,

    /// Increments on every forest change, undo and redo included
    version: u64,

    observers: Vec<Box<dyn EditorObserver>>,
}

impl Editor {
    /// Create an editor seeded with `initial`, or the demo page when `None`
    pub fn new(initial: Option<Vec<MockupElement>>) -> Self {
        Self::with_options(initial, EditorOptions::default())
    }

    pub fn with_options(initial: Option<Vec<MockupElement>>, options: EditorOptions) -> Self {
        let forest = match initial {
            Some(elements) => Forest::from_elements(elements),
            None => seed::demo_forest(),
        };

        info!(
            elements = forest.node_count(),
            viewport = options.viewport.name(),
            zoom = options.zoom.percent(),
            "Editor created"
        );

        let mut state = EditorState::new(forest);
        state.viewport = options.viewport;
        state.zoom = options.zoom;
        state.show_grid = options.show_grid;

        Self {
            state,
            history: UndoStack::with_max_levels(options.undo_limit),
            version: 0,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn forest(&self) -> &Forest {
        &self.state.forest
    }

    pub fn elements(&self) -> Vec<MockupElement> {
        self.state.forest.to_elements()
    }

    pub fn selected(&self) -> Option<&Element> {
        self.state.selected()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn subscribe(&mut self, observer: impl EditorObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply one user intent
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Undo => return self.undo(),
            Action::Redo => return self.redo(),
            _ => {}
        }

        let reduction = self.state.reduce(&action);

        let drag_started = match (&self.state.drag, &reduction.state.drag) {
            (None, Some(_)) => true,
            (Some(prev), Some(next)) => prev.element_id != next.element_id,
            _ => false,
        };
        let drag_move = matches!(action, Action::DragMove { .. });

        // Any other edit mid-gesture is its own undo step
        if reduction.mutation.is_some() && !drag_move && self.history.is_batching() {
            self.history.end_batch();
        }

        // Moves after such an edit reopen the gesture
        let drag_resumed = drag_move && reduction.state.drag.is_some() && !self.history.is_batching();
        if drag_started || drag_resumed {
            self.history.end_batch();
            self.history.begin_batch();
            if let Some(drag) = &reduction.state.drag {
                self.history
                    .set_batch_description(format!("Move {}", drag.element_id));
            }
        }

        if let Some(mutation) = &reduction.mutation {
            let inverses = mutation.inverse(&self.state.forest);
            self.history.record(mutation.clone(), inverses);
            self.version += 1;
            debug!(
                mutation = mutation.name(),
                version = self.version,
                "Applied mutation"
            );
        }

        if reduction.state.drag.is_none() && self.history.is_batching() {
            self.history.end_batch();
        }

        self.state = reduction.state;
        self.notify(&reduction.events);

        DispatchResult {
            created: reduction.created,
            events: reduction.events,
        }
    }

    /// Revert the most recent undo step
    pub fn undo(&mut self) -> DispatchResult {
        let restored = self.history.undo(&self.state.forest);
        self.restore(restored, "undo")
    }

    /// Re-apply the most recently undone step
    pub fn redo(&mut self) -> DispatchResult {
        let restored = self.history.redo(&self.state.forest);
        self.restore(restored, "redo")
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Label of the next undo step, set for drag gestures
    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.history.redo_description()
    }

    pub fn add_element(&mut self, element_type: ElementType) -> Option<ElementId> {
        self.dispatch(Action::AddElement { element_type }).created
    }

    pub fn update_element(&mut self, id: &str, patch: ElementPatch) -> bool {
        self.dispatch(Action::UpdateElement {
            id: id.to_string(),
            patch,
        })
        .elements_changed()
    }

    pub fn update_styles(&mut self, id: &str, patch: ElementStyles) -> bool {
        self.dispatch(Action::UpdateStyles {
            id: id.to_string(),
            patch,
        })
        .elements_changed()
    }

    pub fn toggle_visibility(&mut self, id: &str) -> bool {
        self.dispatch(Action::ToggleVisibility { id: id.to_string() })
            .elements_changed()
    }

    pub fn toggle_lock(&mut self, id: &str) -> bool {
        self.dispatch(Action::ToggleLock { id: id.to_string() })
            .elements_changed()
    }

    pub fn delete_element(&mut self, id: &str) -> bool {
        self.dispatch(Action::DeleteElement { id: id.to_string() })
            .elements_changed()
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.dispatch(Action::Select {
            id: id.map(str::to_string),
        });
    }

    fn restore(&mut self, restored: Option<Forest>, direction: &str) -> DispatchResult {
        let Some(forest) = restored else {
            debug!(direction, "Nothing to restore");
            return DispatchResult::default();
        };

        let prev = self.state.clone();
        self.state.forest = forest;
        self.state.drag = None;
        self.state.settle();
        self.version += 1;

        debug!(direction, version = self.version, "Restored snapshot");

        let events = changes_between(&prev, &self.state, true);
        self.notify(&events);

        DispatchResult {
            created: None,
            events,
        }
    }

    fn notify(&mut self, events: &[EditorEvent]) {
        for event in events {
            match event {
                EditorEvent::ElementsChanged => {
                    for observer in self.observers.iter_mut() {
                        observer.on_elements_change(&self.state.forest);
                    }
                }
                EditorEvent::SelectionChanged(_) => {
                    let selected = self.state.selected_tree();
                    for observer in self.observers.iter_mut() {
                        observer.on_element_select(selected.as_ref());
                    }
                }
                EditorEvent::ExportRequested(format) => {
                    for observer in self.observers.iter_mut() {
                        observer.on_export(*format);
                    }
                }
            }
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("version", &self.version)
            .field("observers", &self.observers.len())
            .finish()
    }
}
