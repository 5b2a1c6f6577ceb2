//! # Layer Panel
//!
//! Indented mirror of the forest: one row per element in document order,
//! one indent level per nesting depth. Hidden elements keep their row.
//!
//! Panel collapse and per-row expansion are local to the panel and never
//! reach [`EditorState`]. Row intents become editor [`Action`]s.

use mockup_editor::{Action, EditorState, ElementId, ElementType};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// One visible row of the layer list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerRow {
    pub id: ElementId,
    pub name: String,
    pub element_type: ElementType,
    pub depth: usize,
    pub visible: bool,
    pub locked: bool,
    pub selected: bool,
    pub has_children: bool,
    pub expanded: bool,
}

/// What the user did on the panel
#[derive(Debug, Clone, PartialEq)]
pub enum LayerIntent {
    /// Click on the row body
    Select(ElementId),
    ToggleVisibility(ElementId),
    ToggleLock(ElementId),
    Delete(ElementId),
    /// Earlier among siblings
    MoveUp(ElementId),
    /// Later among siblings
    MoveDown(ElementId),
    /// Expand or collapse one row's children
    ToggleExpanded(ElementId),
    /// Collapse or expand the whole panel
    TogglePanel,
}

#[derive(Debug, Clone, Default)]
pub struct LayerPanel {
    collapsed: bool,
    collapsed_rows: HashSet<ElementId>,
}

impl LayerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        !self.collapsed_rows.contains(id)
    }

    /// Rows to show; empty while the panel is collapsed
    pub fn rows(&self, state: &EditorState) -> Vec<LayerRow> {
        if self.collapsed {
            return Vec::new();
        }

        let selected = state.selected_id.as_deref();
        let mut rows = Vec::new();
        // Depth of the shallowest collapsed ancestor still in scope
        let mut hidden_below: Option<usize> = None;

        for (depth, key, element) in state.forest.walk_nodes() {
            if let Some(limit) = hidden_below {
                if depth > limit {
                    continue;
                }
                hidden_below = None;
            }

            let expanded = self.is_expanded(&element.id);
            let has_children = state.forest.child_nodes(key).next().is_some();
            if has_children && !expanded {
                hidden_below = Some(depth);
            }

            rows.push(LayerRow {
                id: element.id.clone(),
                name: element.name.clone(),
                element_type: element.element_type,
                depth,
                visible: element.visible,
                locked: element.locked,
                selected: selected == Some(element.id.as_str()),
                has_children,
                expanded,
            });
        }

        rows
    }

    /// Handle an intent; returns the editor action it maps to, if any
    pub fn handle(&mut self, state: &EditorState, intent: LayerIntent) -> Option<Action> {
        match intent {
            LayerIntent::TogglePanel => {
                self.collapsed = !self.collapsed;
                None
            }
            LayerIntent::ToggleExpanded(id) => {
                if !self.collapsed_rows.remove(&id) {
                    self.collapsed_rows.insert(id);
                }
                None
            }

            LayerIntent::Select(id) => Some(Action::Select { id: Some(id) }),
            LayerIntent::ToggleVisibility(id) => Some(Action::ToggleVisibility { id }),
            LayerIntent::ToggleLock(id) => Some(Action::ToggleLock { id }),
            LayerIntent::Delete(id) => Some(Action::DeleteElement { id }),

            LayerIntent::MoveUp(id) => {
                let placement = state.forest.placement(&id)?;
                if placement.index == 0 {
                    debug!(id = %id, "Already first among siblings");
                    return None;
                }
                Some(Action::ReorderElement {
                    id,
                    index: placement.index - 1,
                })
            }
            LayerIntent::MoveDown(id) => {
                let placement = state.forest.placement(&id)?;
                let last = state.forest.sibling_ids(&id).len().saturating_sub(1);
                if placement.index >= last {
                    debug!(id = %id, "Already last among siblings");
                    return None;
                }
                Some(Action::ReorderElement {
                    id,
                    index: placement.index + 1,
                })
            }
        }
    }

    /// Forget expansion state for rows that no longer exist
    pub fn prune(&mut self, state: &EditorState) {
        self.collapsed_rows.retain(|id| state.forest.contains(id));
    }
}
