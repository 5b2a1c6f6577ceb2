//! Integration tests for editor crate

use mockup_editor::{
    Action, Document, Editor, EditorEvent, ElementPatch, ElementType, Point, Tool,
    ViewportPreset,
};
use std::path::PathBuf;

#[test]
fn test_document_lifecycle() {
    let source = r#"[
        {"id": "nav", "type": "nav", "name": "Top bar", "x": 0, "y": 0, "width": 1440, "height": 64, "zIndex": 1},
        {"id": "body", "type": "section", "name": "Body", "x": 0, "y": 64, "width": 1440, "height": 600, "zIndex": 2}
    ]"#;

    let mut doc = Document::from_source(PathBuf::from("page.json"), source).unwrap();
    assert_eq!(doc.version, 0);

    let mut editor = Editor::new(Some(doc.forest().to_elements()));
    editor.toggle_visibility("nav");
    doc.replace(editor.forest().clone());

    assert_eq!(doc.version, 1);
    assert_eq!(doc.forest().get("nav").map(|e| e.visible), Some(false));

    let json = doc.source().unwrap();
    assert!(json.contains("\"visible\": false"));
}

#[test]
fn test_file_backed_document_saves() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("mockup-editor-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("page.json");
    std::fs::write(
        &path,
        r#"[{"id": "card", "type": "card", "x": 1, "y": 2, "width": 3, "height": 4}]"#,
    )?;

    let mut doc = Document::load(&path)?;
    let mut editor = Editor::new(Some(doc.forest().to_elements()));
    editor.update_element("card", ElementPatch::position(50.0, 60.0));
    doc.replace(editor.forest().clone());

    assert!(doc.is_dirty());
    doc.save()?;
    assert!(!doc.is_dirty());

    let reloaded = Document::load(&path)?;
    assert_eq!(reloaded.forest().get("card").map(|e| (e.x, e.y)), Some((50.0, 60.0)));

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_add_update_lock_flow() {
    let mut editor = Editor::new(Some(Vec::new()));

    let id = editor.add_element(ElementType::Text).unwrap();
    {
        let el = editor.selected().unwrap();
        assert_eq!(el.id, id);
        assert_eq!((el.width, el.height), (200.0, 40.0));
        assert_eq!(el.content.as_deref(), Some("New Text"));
    }

    assert!(editor.update_element(&id, ElementPatch::position(10.0, 20.0)));
    assert!(editor.toggle_lock(&id));

    // Canvas drag is refused on a locked element
    let result = editor.dispatch(Action::BeginDrag {
        id: id.clone(),
        pointer_offset: Point::new(1.0, 1.0),
    });
    assert!(result.events.is_empty());
    editor.dispatch(Action::DragMove {
        pointer: Point::new(400.0, 400.0),
    });
    assert_eq!(editor.forest().get(&id).map(|e| (e.x, e.y)), Some((10.0, 20.0)));

    // Property edits still go through
    assert!(editor.update_element(
        &id,
        ElementPatch {
            x: Some(99.0),
            ..Default::default()
        }
    ));
    assert_eq!(editor.forest().get(&id).map(|e| e.x), Some(99.0));
}

#[test]
fn test_non_select_tool_cannot_drag() {
    let mut editor = Editor::new(Some(Vec::new()));
    let id = editor.add_element(ElementType::Card).unwrap();

    editor.dispatch(Action::SetTool { tool: Tool::Hand });
    editor.dispatch(Action::BeginDrag {
        id: id.clone(),
        pointer_offset: Point::default(),
    });

    assert!(editor.state().drag.is_none());
}

#[test]
fn test_view_actions_do_not_touch_history() {
    let mut editor = Editor::new(Some(Vec::new()));

    editor.dispatch(Action::SetViewport {
        viewport: ViewportPreset::Tablet,
    });
    editor.dispatch(Action::ToggleGrid);
    editor.dispatch(Action::SetZoom { zoom: 130 });

    let state = editor.state();
    assert_eq!(state.page_box().width, 768);
    assert!(state.show_grid);
    assert_eq!(state.zoom.percent(), 125);
    assert!(!editor.can_undo());
    assert_eq!(editor.version(), 0);
}

#[test]
fn test_delete_ancestor_of_selection() {
    let mut editor = Editor::default();
    editor.select(Some("hero-title"));
    assert_eq!(editor.state().selected_id.as_deref(), Some("hero-title"));

    let result = editor.dispatch(Action::DeleteElement {
        id: "hero-1".to_string(),
    });

    assert_eq!(
        result.events,
        vec![EditorEvent::ElementsChanged, EditorEvent::SelectionChanged(None)]
    );
    assert!(!editor.forest().contains("hero-title"));
}

#[test]
fn test_script_drives_editor() -> anyhow::Result<()> {
    let actions = mockup_editor::parse_script(
        r##"[
            {"type": "addElement", "elementType": "button"},
            {"type": "updateElement", "id": "button-1", "patch": {"x": 40, "y": 50}},
            {"type": "updateStyles", "id": "button-1", "patch": {"backgroundColor": "#000000"}},
            {"type": "toggleVisibility", "id": "button-1"}
        ]"##,
    )?;

    let mut editor = Editor::new(Some(Vec::new()));
    for action in actions {
        editor.dispatch(action);
    }

    let el = editor.forest().get("button-1").unwrap();
    assert_eq!((el.x, el.y), (40.0, 50.0));
    assert_eq!(el.styles.background_color.as_deref(), Some("#000000"));
    assert_eq!(el.styles.border_radius, Some(8.0));
    assert!(!el.visible);
    Ok(())
}
