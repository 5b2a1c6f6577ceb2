//! # Canvas Geometry
//!
//! Paint order, coordinate frames and hit testing.
//!
//! ## Semantics
//!
//! - Siblings paint in ascending `zIndex`, ties in forest order
//! - Invisible elements are skipped with their whole subtree
//! - Children paint inside their parent's box, above the parent
//! - Rotation is about the box center, clockwise in degrees (CSS `rotate`)
//!
//! Hit testing walks the same order backwards, so the top-most painted box
//! wins. The query point is carried into each box's local frame, which
//! undoes every ancestor rotation on the way down.

use mockup_editor::{Element, ElementId, Forest, NodeKey, Point};
use serde::{Deserialize, Serialize};

/// How child `x`/`y` are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChildCoordinates {
    /// Child position is relative to the parent box
    #[default]
    ParentRelative,

    /// Every position is in page space
    CanvasAbsolute,
}

/// Top-most element under a point
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub id: ElementId,
    pub locked: bool,

    /// Nesting depth, 0 for top-level elements
    pub depth: usize,
}

/// Visible siblings in paint order (back to front)
pub fn paint_order<'a>(siblings: impl Iterator<Item = &'a Element>) -> Vec<&'a Element> {
    let mut painted: Vec<&Element> = siblings.filter(|el| el.visible).collect();
    // Stable: equal z-indices keep forest order
    painted.sort_by_key(|el| el.z_index);
    painted
}

/// [`paint_order`] over arena nodes, so repeated ids keep their own subtrees
pub fn paint_order_keyed<'a>(
    nodes: impl Iterator<Item = (NodeKey, &'a Element)>,
) -> Vec<(NodeKey, &'a Element)> {
    let mut painted: Vec<(NodeKey, &Element)> = nodes.filter(|(_, el)| el.visible).collect();
    painted.sort_by_key(|(_, el)| el.z_index);
    painted
}

/// Offset of an element inside its parent's box
pub fn local_origin(element: &Element, parent: Option<&Element>, mode: ChildCoordinates) -> Point {
    match (mode, parent) {
        (ChildCoordinates::CanvasAbsolute, Some(parent)) => {
            Point::new(element.x - parent.x, element.y - parent.y)
        }
        _ => Point::new(element.x, element.y),
    }
}

/// Map a point from the parent frame into the element's unrotated frame
pub fn to_local(point: Point, origin: Point, element: &Element) -> Point {
    let x = point.x - origin.x;
    let y = point.y - origin.y;
    if element.rotation == 0.0 {
        return Point::new(x, y);
    }

    let cx = element.width / 2.0;
    let cy = element.height / 2.0;
    let (sin, cos) = (-element.rotation.to_radians()).sin_cos();
    let (dx, dy) = (x - cx, y - cy);

    Point::new(cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
}

fn contains(element: &Element, local: Point) -> bool {
    local.x >= 0.0 && local.y >= 0.0 && local.x <= element.width && local.y <= element.height
}

/// Find the top-most painted element at a page-space point
pub fn hit_test(forest: &Forest, point: Point, mode: ChildCoordinates) -> Option<Hit> {
    hit_level(forest, paint_order_keyed(forest.root_nodes()), None, point, mode, 0)
}

fn hit_level(
    forest: &Forest,
    painted: Vec<(NodeKey, &Element)>,
    parent: Option<&Element>,
    point: Point,
    mode: ChildCoordinates,
    depth: usize,
) -> Option<Hit> {
    for (key, element) in painted.into_iter().rev() {
        let origin = local_origin(element, parent, mode);
        let local = to_local(point, origin, element);

        let children = paint_order_keyed(forest.child_nodes(key));
        if let Some(hit) = hit_level(forest, children, Some(element), local, mode, depth + 1) {
            return Some(hit);
        }

        if contains(element, local) {
            return Some(Hit {
                id: element.id.clone(),
                locked: element.locked,
                depth,
            });
        }
    }

    None
}
