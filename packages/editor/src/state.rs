//! # Editor State
//!
//! Everything one editor instance knows, in one record, changed only through
//! [`EditorState::reduce`]:
//!
//! ```text
//! (state, action) → Reduction { state', mutation, events }
//! ```
//!
//! The reducer is pure. History and observer notification live in
//! [`crate::Editor`], which wraps it.
//!
//! ## Invariants
//!
//! - `selected_id`, if set, names an element present in the forest
//! - `drag`, if set, names a present, unlocked element
//! - `zoom` is always a valid step (enforced by [`Zoom`])

use crate::drag::{DragSession, Point};
use crate::element::{Element, ElementId, ElementPatch, ElementStyles, ElementType, MockupElement};
use crate::forest::Forest;
use crate::mutations::Mutation;
use crate::viewport::{PageBox, Tool, ViewportPreset, Zoom};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Export formats the host can be asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Svg,
    Pdf,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
            ExportFormat::Pdf => "pdf",
        })
    }
}

/// User intents, from any panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    // Element Store
    AddElement { element_type: ElementType },
    UpdateElement { id: ElementId, patch: ElementPatch },
    UpdateStyles { id: ElementId, patch: ElementStyles },
    ToggleVisibility { id: ElementId },
    ToggleLock { id: ElementId },
    DeleteElement { id: ElementId },
    ReorderElement { id: ElementId, index: usize },

    // Selection
    Select {
        #[serde(default)]
        id: Option<ElementId>,
    },

    // Viewport / tool
    SetTool { tool: Tool },
    SetZoom { zoom: i32 },
    ZoomIn,
    ZoomOut,
    SetViewport { viewport: ViewportPreset },
    SetShowGrid { show: bool },
    ToggleGrid,

    // Drag protocol
    BeginDrag { id: ElementId, pointer_offset: Point },
    DragMove { pointer: Point },
    EndDrag,

    // Host signals
    Export { format: ExportFormat },

    // History (handled by the editor session)
    Undo,
    Redo,
}

impl Action {
    /// Element Store mutation this action maps to, if any
    pub fn to_mutation(&self) -> Option<Mutation> {
        let mutation = match self {
            Action::AddElement { element_type } => Mutation::AddElement {
                element_type: *element_type,
            },
            Action::UpdateElement { id, patch } => Mutation::UpdateElement {
                id: id.clone(),
                patch: patch.clone(),
            },
            Action::UpdateStyles { id, patch } => Mutation::UpdateStyles {
                id: id.clone(),
                patch: patch.clone(),
            },
            Action::ToggleVisibility { id } => Mutation::ToggleVisibility { id: id.clone() },
            Action::ToggleLock { id } => Mutation::ToggleLock { id: id.clone() },
            Action::DeleteElement { id } => Mutation::DeleteElement { id: id.clone() },
            Action::ReorderElement { id, index } => Mutation::ReorderElement {
                id: id.clone(),
                index: *index,
            },
            _ => return None,
        };
        Some(mutation)
    }
}

/// Something dependents should react to after an action
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The forest snapshot was replaced
    ElementsChanged,

    /// `selected_id` changed to this value
    SelectionChanged(Option<ElementId>),

    /// The user asked for an export
    ExportRequested(ExportFormat),
}

/// Result of reducing one action
#[derive(Debug, Clone)]
pub struct Reduction {
    pub state: EditorState,

    /// Mutation that changed the forest, if any
    pub mutation: Option<Mutation>,

    /// Id created by `AddElement`
    pub created: Option<ElementId>,

    pub events: Vec<EditorEvent>,
}

/// State of one editor instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub forest: Forest,
    pub selected_id: Option<ElementId>,
    pub active_tool: Tool,
    pub zoom: Zoom,
    pub viewport: ViewportPreset,
    pub show_grid: bool,
    #[serde(skip)]
    pub drag: Option<DragSession>,
}

impl EditorState {
    pub fn new(forest: Forest) -> Self {
        Self {
            forest,
            selected_id: None,
            active_tool: Tool::default(),
            zoom: Zoom::default(),
            viewport: ViewportPreset::default(),
            show_grid: false,
            drag: None,
        }
    }

    pub fn selected(&self) -> Option<&Element> {
        self.selected_id.as_deref().and_then(|id| self.forest.get(id))
    }

    pub fn selected_tree(&self) -> Option<MockupElement> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.forest.element_tree(id))
    }

    pub fn page_box(&self) -> PageBox {
        self.viewport.page_box()
    }

    /// Apply an action, returning the next state and what changed
    pub fn reduce(&self, action: &Action) -> Reduction {
        let mut next = self.clone();
        let mut applied_mutation = None;
        let mut created = None;
        let mut export = None;

        if let Some(mutation) = action.to_mutation() {
            if let Some(applied) = mutation.apply(&self.forest) {
                next.forest = applied.forest;
                created = applied.created;
                applied_mutation = Some(mutation);
            }
            if let Some(id) = &created {
                next.selected_id = Some(id.clone());
            }
        } else {
            match action {
                Action::Select { id } => match id {
                    Some(id) if !self.forest.contains(id) => {
                        debug!(id = %id, "Ignoring selection of unknown element");
                    }
                    _ => next.selected_id = id.clone(),
                },

                Action::SetTool { tool } => {
                    next.active_tool = *tool;
                    next.drag = None;
                }
                Action::SetZoom { zoom } => next.zoom = Zoom::new(*zoom),
                Action::ZoomIn => next.zoom = self.zoom.zoom_in(),
                Action::ZoomOut => next.zoom = self.zoom.zoom_out(),
                Action::SetViewport { viewport } => next.viewport = *viewport,
                Action::SetShowGrid { show } => next.show_grid = *show,
                Action::ToggleGrid => next.show_grid = !self.show_grid,

                Action::BeginDrag { id, pointer_offset } => {
                    if self.can_drag(id) {
                        next.drag = Some(DragSession::begin(id.clone(), *pointer_offset));
                    } else {
                        debug!(id = %id, "Refusing drag: element missing, hidden or locked");
                    }
                }

                Action::DragMove { pointer } => {
                    if let Some(drag) = &self.drag {
                        if self.can_drag(&drag.element_id) {
                            let mutation = drag.move_to(*pointer);
                            if let Some(applied) = mutation.apply(&self.forest) {
                                next.forest = applied.forest;
                                applied_mutation = Some(mutation);
                                if let Some(d) = next.drag.as_mut() {
                                    d.moved = true;
                                }
                            }
                        }
                    }
                }

                Action::EndDrag => next.drag = None,

                Action::Export { format } => export = Some(*format),

                Action::Undo | Action::Redo => {
                    debug!(?action, "History actions are handled by the editor session");
                }

                _ => {}
            }
        }

        next.settle();

        let mut events = changes_between(self, &next, applied_mutation.is_some());
        if let Some(format) = export {
            events.push(EditorEvent::ExportRequested(format));
        }

        Reduction {
            state: next,
            mutation: applied_mutation,
            created,
            events,
        }
    }

    fn can_drag(&self, id: &str) -> bool {
        self.active_tool.handles_pointer()
            && self
                .forest
                .get(id)
                .map_or(false, |el| el.visible && !el.locked)
    }

    /// Re-establish invariants after the forest changed
    pub(crate) fn settle(&mut self) {
        if let Some(id) = &self.selected_id {
            if !self.forest.contains(id) {
                debug!(id = %id, "Selected element no longer exists, clearing selection");
                self.selected_id = None;
            }
        }

        let drag_target_gone = self
            .drag
            .as_ref()
            .map_or(false, |d| !self.forest.contains(&d.element_id));
        if drag_target_gone {
            self.drag = None;
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Forest::new())
    }
}

/// Events implied by a state transition
pub(crate) fn changes_between(
    prev: &EditorState,
    next: &EditorState,
    forest_changed: bool,
) -> Vec<EditorEvent> {
    let mut events = Vec::new();
    if forest_changed {
        events.push(EditorEvent::ElementsChanged);
    }
    if prev.selected_id != next.selected_id {
        events.push(EditorEvent::SelectionChanged(next.selected_id.clone()));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_text() -> (EditorState, ElementId) {
        let reduction = EditorState::default().reduce(&Action::AddElement {
            element_type: ElementType::Text,
        });
        let id = reduction.created.clone().unwrap();
        (reduction.state, id)
    }

    #[test]
    fn test_add_selects_new_element() {
        let (state, id) = with_text();
        assert_eq!(state.selected_id.as_deref(), Some(id.as_str()));
    }

    #[test]
    fn test_add_reports_change_and_selection() {
        let reduction = EditorState::default().reduce(&Action::AddElement {
            element_type: ElementType::Button,
        });

        assert_eq!(
            reduction.events,
            vec![
                EditorEvent::ElementsChanged,
                EditorEvent::SelectionChanged(reduction.created.clone())
            ]
        );
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let (state, id) = with_text();
        let next = state.reduce(&Action::DeleteElement { id }).state;
        assert_eq!(next.selected_id, None);
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let (state, first) = with_text();
        let (state, second) = {
            let r = state.reduce(&Action::AddElement {
                element_type: ElementType::Card,
            });
            (r.state, r.created.unwrap())
        };
        let state = state
            .reduce(&Action::Select {
                id: Some(first.clone()),
            })
            .state;

        let next = state.reduce(&Action::DeleteElement { id: second }).state;
        assert_eq!(next.selected_id, Some(first));
    }

    #[test]
    fn test_select_unknown_is_ignored() {
        let (state, id) = with_text();
        let reduction = state.reduce(&Action::Select {
            id: Some("ghost".to_string()),
        });

        assert_eq!(reduction.state.selected_id, Some(id));
        assert!(reduction.events.is_empty());
    }

    #[test]
    fn test_viewport_switch_changes_only_page_box() {
        let (state, _) = with_text();
        let next = state
            .reduce(&Action::SetViewport {
                viewport: ViewportPreset::Mobile,
            })
            .state;

        assert_eq!(next.page_box(), PageBox { width: 375, height: 812 });
        assert_eq!(next.forest, state.forest);
        assert_eq!(next.selected_id, state.selected_id);
        assert_eq!(next.zoom, state.zoom);
    }

    #[test]
    fn test_zoom_actions() {
        let state = EditorState::default();
        assert_eq!(state.reduce(&Action::SetZoom { zoom: 10 }).state.zoom.percent(), 25);
        assert_eq!(state.reduce(&Action::SetZoom { zoom: 500 }).state.zoom.percent(), 200);
        assert_eq!(state.reduce(&Action::ZoomIn).state.zoom.percent(), 125);
        assert_eq!(state.reduce(&Action::ZoomOut).state.zoom.percent(), 75);
    }

    #[test]
    fn test_drag_moves_unlocked_element() {
        let (state, id) = with_text();
        let state = state
            .reduce(&Action::BeginDrag {
                id: id.clone(),
                pointer_offset: Point::new(10.0, 10.0),
            })
            .state;
        let reduction = state.reduce(&Action::DragMove {
            pointer: Point::new(60.0, 90.0),
        });

        let el = reduction.state.forest.get(&id).unwrap();
        assert_eq!((el.x, el.y), (50.0, 80.0));
        assert!(reduction.mutation.is_some());
    }

    #[test]
    fn test_locked_element_never_begins_drag() {
        let (state, id) = with_text();
        let state = state.reduce(&Action::ToggleLock { id: id.clone() }).state;
        let state = state
            .reduce(&Action::BeginDrag {
                id: id.clone(),
                pointer_offset: Point::default(),
            })
            .state;
        assert!(state.drag.is_none());

        let moved = state.reduce(&Action::DragMove {
            pointer: Point::new(500.0, 500.0),
        });
        assert_eq!(moved.state.forest, state.forest);
    }

    #[test]
    fn test_export_only_signals() {
        let (state, _) = with_text();
        let reduction = state.reduce(&Action::Export {
            format: ExportFormat::Svg,
        });

        assert_eq!(reduction.state, state);
        assert_eq!(
            reduction.events,
            vec![EditorEvent::ExportRequested(ExportFormat::Svg)]
        );
    }

    #[test]
    fn test_action_json_shape() {
        let action: Action =
            serde_json::from_str(r#"{"type":"addElement","elementType":"button"}"#).unwrap();
        assert_eq!(
            action,
            Action::AddElement {
                element_type: ElementType::Button
            }
        );

        let clear: Action = serde_json::from_str(r#"{"type":"select"}"#).unwrap();
        assert_eq!(clear, Action::Select { id: None });
    }
}
