//! # Drag Protocol
//!
//! Pointer-driven moves of a single element:
//!
//! ```text
//! begin(element_id, pointer_offset) → move(pointer) → … → end()
//! ```
//!
//! `begin` records where inside the element the pointer grabbed it. Each
//! `move` turns a pointer position into an `UpdateElement` mutation that
//! keeps that offset. The reducer refuses to begin a drag on a locked
//! element, so locked geometry never changes through this path.

use crate::element::{ElementId, ElementPatch};
use crate::mutations::Mutation;
use serde::{Deserialize, Serialize};

/// A point in page space (unscaled canvas units)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// In-flight drag of one element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSession {
    pub element_id: ElementId,

    /// Pointer position minus element origin at grab time
    pub pointer_offset: Point,

    /// Whether any move has been applied
    pub moved: bool,
}

impl DragSession {
    pub fn begin(element_id: impl Into<ElementId>, pointer_offset: Point) -> Self {
        Self {
            element_id: element_id.into(),
            pointer_offset,
            moved: false,
        }
    }

    /// Mutation that places the element under the pointer
    pub fn move_to(&self, pointer: Point) -> Mutation {
        Mutation::UpdateElement {
            id: self.element_id.clone(),
            patch: ElementPatch::position(
                pointer.x - self.pointer_offset.x,
                pointer.y - self.pointer_offset.y,
            ),
        }
    }
}
