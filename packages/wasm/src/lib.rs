//! # Mockup WASM
//!
//! Browser bindings. A host creates one [`MockupEditor`] per canvas, feeds it
//! JSON actions and pointer events, and registers JS callbacks for element,
//! selection and export notifications. Everything crosses the boundary as
//! JSON strings in the same camelCase shape the element files use.

use mockup_canvas::{
    pointer_down, pointer_move, pointer_up, render_document, CanvasRenderer, HtmlOptions,
    RenderOptions,
};
use mockup_editor::{
    Action, Editor, EditorObserver, EditorOptions, ExportFormat, Forest, MockupElement, Point,
};
use mockup_panels::{properties, LayerIntent, LayerPanel, NumericField, PropertyEdit};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[derive(Default)]
struct Callbacks {
    elements_change: Option<js_sys::Function>,
    element_select: Option<js_sys::Function>,
    export: Option<js_sys::Function>,
}

/// Forwards editor notifications to whatever JS callbacks are registered
struct JsObserver {
    callbacks: Rc<RefCell<Callbacks>>,
}

impl JsObserver {
    fn call(callback: Option<&js_sys::Function>, arg: JsValue) {
        if let Some(callback) = callback {
            if let Err(err) = callback.call1(&JsValue::NULL, &arg) {
                tracing::warn!(?err, "Host callback threw");
            }
        }
    }
}

impl EditorObserver for JsObserver {
    fn on_elements_change(&mut self, forest: &Forest) {
        let callbacks = self.callbacks.borrow();
        if callbacks.elements_change.is_none() {
            return;
        }
        match serde_json::to_string(&forest.to_elements()) {
            Ok(json) => Self::call(callbacks.elements_change.as_ref(), JsValue::from_str(&json)),
            Err(err) => tracing::warn!(%err, "Cannot serialize elements"),
        }
    }

    fn on_element_select(&mut self, element: Option<&MockupElement>) {
        let callbacks = self.callbacks.borrow();
        if callbacks.element_select.is_none() {
            return;
        }
        let arg = match element.map(serde_json::to_string).transpose() {
            Ok(Some(json)) => JsValue::from_str(&json),
            Ok(None) => JsValue::NULL,
            Err(err) => {
                tracing::warn!(%err, "Cannot serialize selection");
                return;
            }
        };
        Self::call(callbacks.element_select.as_ref(), arg);
    }

    fn on_export(&mut self, format: ExportFormat) {
        let callbacks = self.callbacks.borrow();
        if callbacks.export.is_none() {
            return;
        }
        Self::call(callbacks.export.as_ref(), JsValue::from_str(&format.to_string()));
    }
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

fn numeric_field(name: &str) -> Option<NumericField> {
    let field = match name {
        "x" => NumericField::X,
        "y" => NumericField::Y,
        "width" => NumericField::Width,
        "height" => NumericField::Height,
        "rotation" => NumericField::Rotation,
        "borderRadius" => NumericField::BorderRadius,
        "fontSize" => NumericField::FontSize,
        _ => return None,
    };
    Some(field)
}

#[wasm_bindgen]
pub struct MockupEditor {
    editor: Editor,
    renderer: CanvasRenderer,
    layers: LayerPanel,
    callbacks: Rc<RefCell<Callbacks>>,
}

#[wasm_bindgen]
impl MockupEditor {
    /// `elements` is a JSON array of elements (demo page when omitted);
    /// `options` is a JSON `EditorOptions` object plus `childCoordinates`
    #[wasm_bindgen(constructor)]
    pub fn new(elements: Option<String>, options: Option<String>) -> Result<MockupEditor, JsValue> {
        let initial = elements
            .map(|json| mockup_editor::parse_elements(&json))
            .transpose()
            .map_err(|e| js_error("Invalid elements", e))?;

        let (editor_options, render_options) = match options {
            Some(json) => {
                let editor_options: EditorOptions =
                    serde_json::from_str(&json).map_err(|e| js_error("Invalid options", e))?;
                let render_options: RenderOptions =
                    serde_json::from_str(&json).map_err(|e| js_error("Invalid options", e))?;
                (editor_options, render_options)
            }
            None => (EditorOptions::default(), RenderOptions::default()),
        };

        Ok(Self::with_parts(Editor::with_options(initial, editor_options), render_options))
    }

    #[wasm_bindgen(js_name = onElementsChange)]
    pub fn on_elements_change(&mut self, callback: js_sys::Function) {
        self.callbacks.borrow_mut().elements_change = Some(callback);
    }

    #[wasm_bindgen(js_name = onElementSelect)]
    pub fn on_element_select(&mut self, callback: js_sys::Function) {
        self.callbacks.borrow_mut().element_select = Some(callback);
    }

    #[wasm_bindgen(js_name = onExport)]
    pub fn on_export(&mut self, callback: js_sys::Function) {
        self.callbacks.borrow_mut().export = Some(callback);
    }

    /// Dispatch one JSON action; returns the created element id, if any
    pub fn dispatch(&mut self, action: &str) -> Result<Option<String>, JsValue> {
        let action: Action =
            serde_json::from_str(action).map_err(|e| js_error("Invalid action", e))?;
        Ok(self.dispatch_action(action))
    }

    pub fn undo(&mut self) {
        self.dispatch_action(Action::Undo);
    }

    pub fn redo(&mut self) {
        self.dispatch_action(Action::Redo);
    }

    #[wasm_bindgen(getter, js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.editor.can_undo()
    }

    #[wasm_bindgen(getter, js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.editor.can_redo()
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> f64 {
        self.editor.version() as f64
    }

    /// Current forest as a JSON element array
    pub fn elements(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.editor.elements())
            .map_err(|e| js_error("Serialization error", e))
    }

    /// Canvas tree as JSON
    #[wasm_bindgen(js_name = renderTree)]
    pub fn render_tree(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.renderer.render(self.editor.state()))
            .map_err(|e| js_error("Serialization error", e))
    }

    /// Standalone HTML page of the canvas
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self) -> String {
        render_document(self.editor.state(), &self.renderer, &HtmlOptions::default())
    }

    /// Layer rows as JSON
    pub fn layers(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.layers.rows(self.editor.state()))
            .map_err(|e| js_error("Serialization error", e))
    }

    #[wasm_bindgen(js_name = toggleLayerPanel)]
    pub fn toggle_layer_panel(&mut self) {
        self.layers.handle(self.editor.state(), LayerIntent::TogglePanel);
    }

    #[wasm_bindgen(js_name = toggleLayerExpanded)]
    pub fn toggle_layer_expanded(&mut self, id: String) {
        self.layers
            .handle(self.editor.state(), LayerIntent::ToggleExpanded(id));
    }

    /// Move a layer one sibling earlier (`up`) or later; false at either end
    #[wasm_bindgen(js_name = moveLayer)]
    pub fn move_layer(&mut self, id: String, up: bool) -> bool {
        let intent = if up {
            LayerIntent::MoveUp(id)
        } else {
            LayerIntent::MoveDown(id)
        };
        match self.layers.handle(self.editor.state(), intent) {
            Some(action) => {
                self.dispatch_action(action);
                true
            }
            None => false,
        }
    }

    /// Properties form of the selection as JSON
    pub fn properties(&self) -> Result<String, JsValue> {
        serde_json::to_string(&properties::view(self.editor.state()))
            .map_err(|e| js_error("Serialization error", e))
    }

    /// Apply free text typed into a numeric form field; false if dropped
    #[wasm_bindgen(js_name = setNumericProperty)]
    pub fn set_numeric_property(&mut self, field: &str, input: &str) -> Result<bool, JsValue> {
        let field = numeric_field(field).ok_or_else(|| js_error("Unknown field", field))?;
        Ok(self.apply_edit(PropertyEdit::numeric(field, input)))
    }

    #[wasm_bindgen(js_name = setOpacity)]
    pub fn set_opacity(&mut self, value: f64) -> bool {
        self.apply_edit(PropertyEdit::Opacity(value))
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        let mode = self.renderer.options().child_coordinates;
        let actions = pointer_down(self.editor.state(), mode, Point::new(x, y));
        self.dispatch_all(actions);
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let actions = pointer_move(self.editor.state(), Point::new(x, y));
        self.dispatch_all(actions);
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        let actions = pointer_up(self.editor.state());
        self.dispatch_all(actions);
    }
}

impl MockupEditor {
    fn with_parts(mut editor: Editor, render_options: RenderOptions) -> Self {
        let callbacks = Rc::new(RefCell::new(Callbacks::default()));
        editor.subscribe(JsObserver {
            callbacks: callbacks.clone(),
        });

        Self {
            editor,
            renderer: CanvasRenderer::new(render_options),
            layers: LayerPanel::new(),
            callbacks,
        }
    }

    fn dispatch_action(&mut self, action: Action) -> Option<String> {
        let result = self.editor.dispatch(action);
        if result.elements_changed() {
            self.layers.prune(self.editor.state());
        }
        result.created
    }

    fn dispatch_all(&mut self, actions: Vec<Action>) {
        for action in actions {
            self.dispatch_action(action);
        }
    }

    fn apply_edit(&mut self, edit: PropertyEdit) -> bool {
        match properties::edit(self.editor.state(), edit) {
            Some(action) => {
                self.dispatch_action(action);
                true
            }
            None => false,
        }
    }
}
