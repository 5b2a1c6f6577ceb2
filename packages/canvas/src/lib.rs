//! # Mockup Canvas
//!
//! Paints editor state into a virtual canvas tree and turns pointer input on
//! that canvas back into editor actions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mockup_canvas::{pointer_down, to_html, CanvasRenderer, HtmlOptions};
//!
//! let renderer = CanvasRenderer::default();
//! let canvas = renderer.render(editor.state());
//! let html = to_html(&canvas, &HtmlOptions::default());
//!
//! for action in pointer_down(editor.state(), renderer.options().child_coordinates, point) {
//!     editor.dispatch(action);
//! }
//! ```

pub mod geometry;
pub mod html;
pub mod pointer;
pub mod renderer;
pub mod styles;
pub mod vdom;

pub use geometry::{hit_test, paint_order, paint_order_keyed, ChildCoordinates, Hit};
pub use html::{render_document, to_html, HtmlOptions};
pub use pointer::{pointer_down, pointer_move, pointer_up, screen_to_page};
pub use renderer::{render, CanvasRenderer, RenderOptions, GRID_SIZE, HANDLES};
pub use vdom::VNode;
