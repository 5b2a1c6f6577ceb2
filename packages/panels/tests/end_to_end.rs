//! Full editor flow: palette, canvas, layer panel and properties form

use mockup_canvas::{pointer_down, pointer_move, pointer_up, render, ChildCoordinates};
use mockup_editor::{Action, Editor, ElementType, Point};
use mockup_panels::{properties, LayerIntent, LayerPanel, NumericField, PropertiesView, PropertyEdit};

fn dispatch_all(editor: &mut Editor, actions: Vec<Action>) {
    for action in actions {
        editor.dispatch(action);
    }
}

#[test]
fn test_locked_text_rejects_canvas_but_accepts_form() {
    let mut editor = Editor::new(Some(Vec::new()));

    // Palette: add text
    let id = editor.add_element(ElementType::Text).unwrap();
    assert_eq!(editor.forest().len(), 1);
    {
        let el = editor.selected().unwrap();
        assert_eq!(el.element_type, ElementType::Text);
        assert_eq!((el.width, el.height), (200.0, 40.0));
        assert_eq!(el.content.as_deref(), Some("New Text"));
    }

    // Form: move to 10,20
    for (field, input) in [(NumericField::X, "10"), (NumericField::Y, "20")] {
        let action = properties::edit(editor.state(), PropertyEdit::numeric(field, input)).unwrap();
        editor.dispatch(action);
    }
    assert_eq!(editor.selected().map(|e| (e.x, e.y)), Some((10.0, 20.0)));

    // Layer panel: lock
    let mut layers = LayerPanel::new();
    let lock = layers
        .handle(editor.state(), LayerIntent::ToggleLock(id.clone()))
        .unwrap();
    editor.dispatch(lock);
    assert!(editor.selected().unwrap().locked);

    // Canvas: press on the element and try to drag it away
    let mode = ChildCoordinates::default();
    let down = pointer_down(editor.state(), mode, Point::new(50.0, 30.0));
    assert_eq!(down, vec![Action::Select { id: Some(id.clone()) }]);
    dispatch_all(&mut editor, down);
    let moves = pointer_move(editor.state(), Point::new(300.0, 300.0));
    dispatch_all(&mut editor, moves);
    let up = pointer_up(editor.state());
    dispatch_all(&mut editor, up);

    assert_eq!(editor.forest().get(&id).map(|e| (e.x, e.y)), Some((10.0, 20.0)));

    // Form: x = 99 still works on the locked element
    let action = properties::edit(editor.state(), PropertyEdit::numeric(NumericField::X, "99")).unwrap();
    editor.dispatch(action);
    assert_eq!(editor.forest().get(&id).map(|e| e.x), Some(99.0));

    // Locked elements paint without handles
    let canvas = render(editor.state());
    let node = canvas.find_element(&id).unwrap();
    assert!(node.has_class("locked"));
    assert!(!node.children().iter().any(|c| c.has_class("mockup-handle")));
}

#[test]
fn test_layer_delete_clears_form() {
    let mut editor = Editor::default();
    let mut layers = LayerPanel::new();

    let select = layers
        .handle(editor.state(), LayerIntent::Select("hero-cta".to_string()))
        .unwrap();
    editor.dispatch(select);
    assert!(matches!(properties::view(editor.state()), PropertiesView::Element(_)));

    let delete = layers
        .handle(editor.state(), LayerIntent::Delete("hero-1".to_string()))
        .unwrap();
    editor.dispatch(delete);

    assert!(matches!(properties::view(editor.state()), PropertiesView::Empty { .. }));
    assert!(layers.rows(editor.state()).iter().all(|r| r.id != "hero-cta"));
}

#[test]
fn test_layer_move_renumbers_z_and_repaints() {
    let mut editor = Editor::default();
    let mut layers = LayerPanel::new();

    let up = layers
        .handle(editor.state(), LayerIntent::MoveUp("feature-card-3".to_string()))
        .unwrap();
    editor.dispatch(up);

    let cards: Vec<(String, i32)> = editor
        .forest()
        .children("features-1")
        .map(|e| (e.id.clone(), e.z_index))
        .collect();
    assert_eq!(
        cards,
        vec![
            ("feature-card-1".to_string(), 1),
            ("feature-card-3".to_string(), 2),
            ("feature-card-2".to_string(), 3),
        ]
    );

    let painted = render(editor.state()).painted_ids().into_iter().map(String::from).collect::<Vec<_>>();
    let pos = |id: &str| painted.iter().position(|p| p == id).unwrap();
    assert!(pos("feature-card-3") < pos("feature-card-2"));
}

#[test]
fn test_properties_view_serializes_for_hosts() {
    let editor = Editor::default();
    let json = serde_json::to_value(properties::view(editor.state())).unwrap();

    assert_eq!(json["kind"], "empty");
    assert!(json["message"].is_string());
}
