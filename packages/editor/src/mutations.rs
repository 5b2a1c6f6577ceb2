//! # Forest Mutations
//!
//! Semantic operations on a [`Forest`].
//!
//! ## Design Principles
//!
//! 1. **Total**: a mutation that names an unknown id is a no-op, never an error
//! 2. **Pure**: applying takes a snapshot and returns a new one
//! 3. **Invertible**: every mutation can describe its own inverse against the
//!    snapshot it is about to change, which is what the undo stack records
//!
//! ## Mutation Semantics
//!
//! ### AddElement
//! - Appends a palette default at the top level
//! - `zIndex` is the new top-level length
//! - The id is derived from the forest, so the same input gives the same id
//!
//! ### UpdateElement / UpdateStyles
//! - Shallow merge, last write wins
//!
//! ### DeleteElement
//! - Removes the element and all descendants
//!
//! ### ReorderElement
//! - Moves an element among its siblings and renumbers their `zIndex` 1..n

use crate::element::{Element, ElementId, ElementPatch, ElementStyles, ElementType, MockupElement};
use crate::forest::Forest;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Append a new element built from the palette defaults
    AddElement { element_type: ElementType },

    /// Shallow-merge top-level fields
    UpdateElement { id: ElementId, patch: ElementPatch },

    /// Shallow-merge style fields
    UpdateStyles { id: ElementId, patch: ElementStyles },

    /// Overwrite every field of an element except its children (undo of an update)
    RestoreElement { id: ElementId, element: Element },

    ToggleVisibility { id: ElementId },

    ToggleLock { id: ElementId },

    /// Remove an element and its subtree
    DeleteElement { id: ElementId },

    /// Move an element among its siblings
    ReorderElement { id: ElementId, index: usize },

    /// Insert a subtree at a position (undo of a delete)
    InsertElement {
        parent: Option<ElementId>,
        index: usize,
        element: MockupElement,
    },
}

/// Outcome of a mutation that changed the forest
#[derive(Debug, Clone)]
pub struct Applied {
    /// New snapshot
    pub forest: Forest,

    /// Id of the element created by `AddElement`
    pub created: Option<ElementId>,
}

impl Mutation {
    /// Apply to a snapshot.
    ///
    /// Returns `None` when the mutation does not apply (unknown id), in which
    /// case the caller keeps the forest it already has.
    pub fn apply(&self, forest: &Forest) -> Option<Applied> {
        if let Some(id) = self.target() {
            if !forest.contains(id) {
                debug!(mutation = self.name(), id, "Mutation target not found, ignoring");
                return None;
            }
        }

        let mut next = forest.clone();
        let mut created = None;

        match self {
            Mutation::AddElement { element_type } => {
                let id = forest.fresh_id(*element_type);
                let z_index = forest.len() as i32 + 1;
                next.push_root(Element::with_defaults(
                    id.clone(),
                    *element_type,
                    z_index,
                ));
                created = Some(id);
            }

            Mutation::UpdateElement { id, patch } => {
                next.update(id, |el| el.merge(patch));
            }

            Mutation::UpdateStyles { id, patch } => {
                next.update(id, |el| el.styles.merge(patch));
            }

            Mutation::RestoreElement { id, element } => {
                next.update(id, |el| *el = element.clone());
            }

            Mutation::ToggleVisibility { id } => {
                next.update(id, |el| el.visible = !el.visible);
            }

            Mutation::ToggleLock { id } => {
                next.update(id, |el| el.locked = !el.locked);
            }

            Mutation::DeleteElement { id } => {
                next.remove(id);
            }

            Mutation::ReorderElement { id, index } => {
                next.move_within_siblings(id, *index);
                for (position, sibling) in next.sibling_ids(id).iter().enumerate() {
                    next.update(sibling, |el| el.z_index = position as i32 + 1);
                }
            }

            Mutation::InsertElement {
                parent,
                index,
                element,
            } => {
                if !next.insert_subtree(parent.as_deref(), *index, element.clone()) {
                    debug!(parent = ?parent, "Insert parent not found, ignoring");
                    return None;
                }
            }
        }

        debug!(mutation = self.name(), created = ?created, "Applied mutation");

        Some(Applied {
            forest: next,
            created,
        })
    }

    /// Mutations that undo this one, to be applied in order.
    ///
    /// Must be computed against the snapshot *before* `apply`. Empty when the
    /// mutation would be a no-op.
    pub fn inverse(&self, forest: &Forest) -> Vec<Mutation> {
        match self {
            Mutation::AddElement { element_type } => vec![Mutation::DeleteElement {
                id: forest.fresh_id(*element_type),
            }],

            Mutation::UpdateElement { id, .. }
            | Mutation::UpdateStyles { id, .. }
            | Mutation::RestoreElement { id, .. } => forest
                .get(id)
                .map(|el| Mutation::RestoreElement {
                    id: id.clone(),
                    element: el.clone(),
                })
                .into_iter()
                .collect(),

            Mutation::ToggleVisibility { id } | Mutation::ToggleLock { id } => {
                if forest.contains(id) {
                    vec![self.clone()]
                } else {
                    vec![]
                }
            }

            Mutation::DeleteElement { id } => {
                match (forest.placement(id), forest.element_tree(id)) {
                    (Some(placement), Some(element)) => vec![Mutation::InsertElement {
                        parent: placement.parent,
                        index: placement.index,
                        element,
                    }],
                    _ => vec![],
                }
            }

            Mutation::ReorderElement { id, .. } => {
                let Some(placement) = forest.placement(id) else {
                    return vec![];
                };

                let mut inverses = vec![Mutation::ReorderElement {
                    id: id.clone(),
                    index: placement.index,
                }];
                for sibling in forest.sibling_ids(id) {
                    if let Some(el) = forest.get(&sibling) {
                        inverses.push(Mutation::UpdateElement {
                            id: sibling.clone(),
                            patch: ElementPatch {
                                z_index: Some(el.z_index),
                                ..Default::default()
                            },
                        });
                    }
                }
                inverses
            }

            Mutation::InsertElement { parent, element, .. } => {
                let parent_exists = parent.as_deref().map_or(true, |p| forest.contains(p));
                if parent_exists {
                    vec![Mutation::DeleteElement {
                        id: element.element.id.clone(),
                    }]
                } else {
                    vec![]
                }
            }
        }
    }

    /// Id of the element this mutation addresses, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            Mutation::AddElement { .. } | Mutation::InsertElement { .. } => None,
            Mutation::UpdateElement { id, .. }
            | Mutation::UpdateStyles { id, .. }
            | Mutation::RestoreElement { id, .. }
            | Mutation::ToggleVisibility { id }
            | Mutation::ToggleLock { id }
            | Mutation::DeleteElement { id }
            | Mutation::ReorderElement { id, .. } => Some(id),
        }
    }

    /// Debug name
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddElement { .. } => "add_element",
            Mutation::UpdateElement { .. } => "update_element",
            Mutation::UpdateStyles { .. } => "update_styles",
            Mutation::RestoreElement { .. } => "restore_element",
            Mutation::ToggleVisibility { .. } => "toggle_visibility",
            Mutation::ToggleLock { .. } => "toggle_lock",
            Mutation::DeleteElement { .. } => "delete_element",
            Mutation::ReorderElement { .. } => "reorder_element",
            Mutation::InsertElement { .. } => "insert_element",
        }
    }
}
