//! # Canvas Renderer
//!
//! Paints an [`EditorState`] into a virtual canvas tree.
//!
//! ## Output shape
//!
//! ```text
//! div.mockup-canvas                     scaled size of the page
//! └─ div.mockup-page                    viewport box, transform: scale(zoom/100)
//!    ├─ div.mockup-grid                 only when showGrid
//!    └─ div.mockup-element …            one per visible element, nested
//!       ├─ span.mockup-content          when the element has content
//!       ├─ div.mockup-element …         children
//!       └─ div.mockup-handle ×4         selected, unlocked elements only
//! ```
//!
//! Rendering is a pure function of forest, selection, viewport, zoom and
//! grid. Handles are markers only: nothing resizes through them.

use crate::geometry::{local_origin, paint_order_keyed, ChildCoordinates};
use crate::styles::{frame_styles, px, visual_styles};
use crate::vdom::VNode;
use mockup_editor::{EditorState, Element, Forest, NodeKey};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Grid cell size in page units
pub const GRID_SIZE: f64 = 20.0;

/// Corner handle positions
pub const HANDLES: [&str; 4] = ["nw", "ne", "sw", "se"];

const SELECTION_COLOR: &str = "#3b82f6";
const HANDLE_SIZE: f64 = 8.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub child_coordinates: ChildCoordinates,
}

/// Stateless painter configured by [`RenderOptions`]
#[derive(Debug, Clone, Default)]
pub struct CanvasRenderer {
    options: RenderOptions,
}

impl CanvasRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Paint the whole canvas
    #[instrument(skip(self, state), fields(elements = state.forest.node_count(), zoom = state.zoom.percent()))]
    pub fn render(&self, state: &EditorState) -> VNode {
        let page = state.page_box();
        let scale = state.zoom.scale();
        let width = f64::from(page.width);
        let height = f64::from(page.height);

        let mut page_node = VNode::element("div")
            .with_attr("class", "mockup-page")
            .with_attr("data-viewport", state.viewport.name())
            .with_style("position", "relative")
            .with_style("width", px(width))
            .with_style("height", px(height))
            .with_style("background-color", "#ffffff")
            .with_style("overflow", "hidden")
            .with_style("transform", format!("scale({})", scale))
            .with_style("transform-origin", "0 0");

        if state.show_grid {
            page_node = page_node.with_child(grid());
        }

        let selected = state.selected_id.as_deref();
        let painted: Vec<VNode> = paint_order_keyed(state.forest.root_nodes())
            .into_iter()
            .map(|(key, el)| self.paint(&state.forest, key, el, None, selected))
            .collect();
        debug!(painted = painted.len(), "Painted top-level elements");

        VNode::element("div")
            .with_attr("class", "mockup-canvas")
            .with_attr("data-zoom", state.zoom.percent().to_string())
            .with_style("position", "relative")
            .with_style("width", px(width * scale))
            .with_style("height", px(height * scale))
            .with_child(page_node.with_children(painted))
    }

    fn paint(
        &self,
        forest: &Forest,
        key: NodeKey,
        element: &Element,
        parent: Option<&Element>,
        selected: Option<&str>,
    ) -> VNode {
        let origin = local_origin(element, parent, self.options.child_coordinates);
        let is_selected = selected == Some(element.id.as_str());

        let mut class = format!("mockup-element mockup-{}", element.element_type.as_str());
        if is_selected {
            class.push_str(" selected");
        }
        if element.locked {
            class.push_str(" locked");
        }

        let mut node = VNode::element("div")
            .with_element_id(element.id.clone())
            .with_attr("class", class)
            .with_attr("data-element-id", element.id.clone())
            .with_attr("data-element-type", element.element_type.as_str())
            .with_styles(frame_styles(element, origin.x, origin.y))
            .with_styles(visual_styles(element));

        if let Some(content) = &element.content {
            node = node.with_child(
                VNode::element("span")
                    .with_attr("class", "mockup-content")
                    .with_child(VNode::text(content.clone())),
            );
        }

        let children: Vec<VNode> = paint_order_keyed(forest.child_nodes(key))
            .into_iter()
            .map(|(child_key, child)| self.paint(forest, child_key, child, Some(element), selected))
            .collect();
        node = node.with_children(children);

        if is_selected && !element.locked {
            node = node
                .with_style("outline", format!("2px solid {}", SELECTION_COLOR))
                .with_style("outline-offset", "1px")
                .with_children(HANDLES.iter().map(|corner| handle(corner)).collect());
        }

        node
    }
}

/// Render with default options
pub fn render(state: &EditorState) -> VNode {
    CanvasRenderer::default().render(state)
}

fn grid() -> VNode {
    let line = "#e5e7eb";
    VNode::element("div")
        .with_attr("class", "mockup-grid")
        .with_style("position", "absolute")
        .with_style("inset", "0")
        .with_style("pointer-events", "none")
        .with_style(
            "background-image",
            format!(
                "linear-gradient(to right, {line} 1px, transparent 1px), linear-gradient(to bottom, {line} 1px, transparent 1px)"
            ),
        )
        .with_style("background-size", format!("{} {}", px(GRID_SIZE), px(GRID_SIZE)))
}

fn handle(corner: &str) -> VNode {
    let offset = px(-HANDLE_SIZE / 2.0);
    let (vertical, horizontal) = match corner {
        "nw" => ("top", "left"),
        "ne" => ("top", "right"),
        "sw" => ("bottom", "left"),
        _ => ("bottom", "right"),
    };

    VNode::element("div")
        .with_attr("class", format!("mockup-handle mockup-handle-{}", corner))
        .with_attr("data-handle", corner)
        .with_style("position", "absolute")
        .with_style(vertical, offset.clone())
        .with_style(horizontal, offset)
        .with_style("width", px(HANDLE_SIZE))
        .with_style("height", px(HANDLE_SIZE))
        .with_style("background-color", "#ffffff")
        .with_style("border", format!("1px solid {}", SELECTION_COLOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockup_editor::{Action, ElementType, MockupElement, ViewportPreset};

    fn page_of(canvas: &VNode) -> &VNode {
        &canvas.children()[0]
    }

    fn handles(node: &VNode) -> usize {
        node.children()
            .iter()
            .filter(|c| c.has_class("mockup-handle"))
            .count()
    }

    fn state_with(elements: Vec<MockupElement>) -> EditorState {
        EditorState::new(Forest::from_elements(elements))
    }

    #[test]
    fn test_page_box_and_scale() {
        let state = EditorState::default()
            .reduce(&Action::SetViewport {
                viewport: ViewportPreset::Mobile,
            })
            .state
            .reduce(&Action::SetZoom { zoom: 50 })
            .state;

        let canvas = render(&state);
        let page = page_of(&canvas);

        assert_eq!(page.style("width"), Some("375px"));
        assert_eq!(page.style("height"), Some("812px"));
        assert_eq!(page.style("transform"), Some("scale(0.5)"));
        assert_eq!(canvas.style("width"), Some("187.5px"));
    }

    #[test]
    fn test_grid_only_when_enabled() {
        let state = EditorState::default();
        assert!(page_of(&render(&state)).children().is_empty());

        let state = state.reduce(&Action::ToggleGrid).state;
        let canvas = render(&state);
        let grid = &page_of(&canvas).children()[0];
        assert!(grid.has_class("mockup-grid"));
        assert_eq!(grid.style("background-size"), Some("20px 20px"));
    }

    #[test]
    fn test_invisible_subtree_is_omitted() {
        let mut hidden = Element::with_defaults("hidden", ElementType::Section, 1);
        hidden.visible = false;
        let state = state_with(vec![
            MockupElement::leaf(hidden).with_child(MockupElement::leaf(Element::with_defaults(
                "inner",
                ElementType::Text,
                1,
            ))),
            MockupElement::leaf(Element::with_defaults("shown", ElementType::Card, 2)),
        ]);

        assert_eq!(render(&state).painted_ids(), vec!["shown"]);
    }

    #[test]
    fn test_duplicate_ids_paint_their_own_children() {
        let card = |id: &str| Element::with_defaults(id, ElementType::Card, 1);

        let siblings = state_with(vec![
            MockupElement::leaf(card("dup")).with_child(MockupElement::leaf(card("kid"))),
            MockupElement::leaf(card("dup")),
        ]);
        assert_eq!(render(&siblings).painted_ids(), vec!["dup", "kid", "dup"]);

        let nested = state_with(vec![
            MockupElement::leaf(card("dup")).with_child(MockupElement::leaf(card("dup")))
        ]);
        assert_eq!(render(&nested).painted_ids(), vec!["dup", "dup"]);
    }

    #[test]
    fn test_siblings_paint_by_z_index() {
        let state = state_with(vec![
            MockupElement::leaf(Element::with_defaults("top", ElementType::Card, 3)),
            MockupElement::leaf(Element::with_defaults("bottom", ElementType::Card, 1)),
            MockupElement::leaf(Element::with_defaults("middle", ElementType::Card, 2)),
        ]);

        assert_eq!(render(&state).painted_ids(), vec!["bottom", "middle", "top"]);
    }

    #[test]
    fn test_selection_ring_and_handles() {
        let state = state_with(vec![MockupElement::leaf(Element::with_defaults(
            "card",
            ElementType::Card,
            1,
        ))])
        .reduce(&Action::Select {
            id: Some("card".to_string()),
        })
        .state;

        let canvas = render(&state);
        let card = canvas.find_element("card").unwrap();
        assert!(card.has_class("selected"));
        assert_eq!(card.style("outline"), Some("2px solid #3b82f6"));
        assert_eq!(handles(card), 4);

        let locked = state
            .reduce(&Action::ToggleLock {
                id: "card".to_string(),
            })
            .state;
        let canvas = render(&locked);
        let card = canvas.find_element("card").unwrap();
        assert!(card.has_class("locked"));
        assert_eq!(card.style("outline"), None);
        assert_eq!(handles(card), 0);
    }

    #[test]
    fn test_child_coordinates_option() {
        let mut parent = Element::with_defaults("parent", ElementType::Section, 1);
        parent.x = 100.0;
        parent.y = 50.0;
        let mut child = Element::with_defaults("child", ElementType::Text, 1);
        child.x = 120.0;
        child.y = 70.0;
        let state = state_with(vec![
            MockupElement::leaf(parent).with_child(MockupElement::leaf(child))
        ]);

        let relative = render(&state);
        let node = relative.find_element("child").unwrap();
        assert_eq!((node.style("left"), node.style("top")), (Some("120px"), Some("70px")));

        let absolute = CanvasRenderer::new(RenderOptions {
            child_coordinates: ChildCoordinates::CanvasAbsolute,
        })
        .render(&state);
        let node = absolute.find_element("child").unwrap();
        assert_eq!((node.style("left"), node.style("top")), (Some("20px"), Some("20px")));
    }

    #[test]
    fn test_content_is_painted() {
        let state = state_with(vec![MockupElement::leaf(Element::with_defaults(
            "btn",
            ElementType::Button,
            1,
        ))]);

        let canvas = render(&state);
        let button = canvas.find_element("btn").unwrap();
        let content = &button.children()[0];
        assert!(content.has_class("mockup-content"));
        assert_eq!(content.children()[0], VNode::text("Button"));
        assert_eq!(button.attr("data-element-type"), Some("button"));
    }
}
