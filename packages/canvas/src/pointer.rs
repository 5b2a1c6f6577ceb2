//! # Canvas Pointer Input
//!
//! Translates raw pointer events on the canvas into editor [`Action`]s.
//!
//! Pointer positions arrive in screen space relative to the page origin and
//! are divided by the zoom scale to get page space. Only the select tool
//! reacts; every other tool ignores canvas pointer input.
//!
//! | Event | Target                | Actions                    |
//! |-------|-----------------------|----------------------------|
//! | down  | empty canvas          | `Select(None)`             |
//! | down  | locked element        | `Select(id)`               |
//! | down  | unlocked element      | `Select(id)`, `BeginDrag`  |
//! | move  | while dragging        | `DragMove`                 |
//! | up    | while dragging        | `EndDrag`                  |

use crate::geometry::{hit_test, ChildCoordinates};
use mockup_editor::{Action, EditorState, Point, Zoom};
use tracing::debug;

pub fn screen_to_page(zoom: Zoom, screen: Point) -> Point {
    let scale = zoom.scale();
    Point::new(screen.x / scale, screen.y / scale)
}

pub fn pointer_down(state: &EditorState, mode: ChildCoordinates, screen: Point) -> Vec<Action> {
    if !state.active_tool.handles_pointer() {
        debug!(tool = ?state.active_tool, "Tool ignores canvas pointer input");
        return Vec::new();
    }

    let page = screen_to_page(state.zoom, screen);
    let Some(hit) = hit_test(&state.forest, page, mode) else {
        return vec![Action::Select { id: None }];
    };

    let mut actions = vec![Action::Select {
        id: Some(hit.id.clone()),
    }];

    if hit.locked {
        debug!(id = %hit.id, "Locked element selected without drag");
    } else if let Some(element) = state.forest.get(&hit.id) {
        actions.push(Action::BeginDrag {
            id: hit.id,
            pointer_offset: Point::new(page.x - element.x, page.y - element.y),
        });
    }

    actions
}

pub fn pointer_move(state: &EditorState, screen: Point) -> Vec<Action> {
    if state.drag.is_none() {
        return Vec::new();
    }

    vec![Action::DragMove {
        pointer: screen_to_page(state.zoom, screen),
    }]
}

pub fn pointer_up(state: &EditorState) -> Vec<Action> {
    if state.drag.is_none() {
        return Vec::new();
    }

    vec![Action::EndDrag]
}
