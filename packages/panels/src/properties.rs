//! # Properties Editor
//!
//! Form over the single selected element.
//!
//! ## Semantics
//!
//! - Nothing selected: an empty-state message, and every edit is dropped
//! - Numeric text fields parse leniently (see [`parse_int_lenient`]); bad
//!   input becomes 0 and the update is still issued
//! - Opacity snaps to [0, 1] in steps of 0.1
//! - Typography only exists for `text` and `button`
//! - `locked` is not consulted: the form edits locked elements too

use mockup_editor::{
    Action, EditorState, Element, ElementId, ElementPatch, ElementStyles, ElementType,
    FontWeight, TextAlign,
};
use serde::Serialize;
use tracing::debug;

pub const EMPTY_MESSAGE: &str = "Select an element to edit its properties";

/// What the form shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PropertiesView {
    Empty { message: &'static str },
    Element(ElementProperties),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProperties {
    pub id: ElementId,
    pub name: String,
    pub element_type: ElementType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub opacity: f64,
    pub locked: bool,
    pub background_color: Option<String>,
    pub border_radius: Option<f64>,
    pub content: Option<String>,
    pub typography: Option<Typography>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub color: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<FontWeight>,
    pub text_align: Option<TextAlign>,
}

/// Free-text numeric inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    X,
    Y,
    Width,
    Height,
    Rotation,
    BorderRadius,
    FontSize,
}

/// One form edit
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyEdit {
    Numeric { field: NumericField, input: String },
    Opacity(f64),
    Name(String),
    Content(String),
    BackgroundColor(String),
    Color(String),
    FontWeight(FontWeight),
    TextAlign(TextAlign),
}

impl PropertyEdit {
    pub fn numeric(field: NumericField, input: impl Into<String>) -> Self {
        PropertyEdit::Numeric {
            field,
            input: input.into(),
        }
    }

    fn needs_text_element(&self) -> bool {
        matches!(
            self,
            PropertyEdit::Color(_)
                | PropertyEdit::FontWeight(_)
                | PropertyEdit::TextAlign(_)
                | PropertyEdit::Content(_)
                | PropertyEdit::Numeric {
                    field: NumericField::FontSize,
                    ..
                }
        )
    }
}

/// Integer prefix of free text.
///
/// Skips leading whitespace, accepts one optional sign, then reads leading
/// ASCII digits and ignores the rest. No digits gives 0. Overflow saturates.
pub fn parse_int_lenient(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Clamp to [0, 1] and snap to tenths; NaN becomes 0
pub fn snap_opacity(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    (value.clamp(0.0, 1.0) * 10.0).round() / 10.0
}

pub fn view(state: &EditorState) -> PropertiesView {
    match state.selected() {
        Some(element) => PropertiesView::Element(properties_of(element)),
        None => PropertiesView::Empty {
            message: EMPTY_MESSAGE,
        },
    }
}

fn properties_of(element: &Element) -> ElementProperties {
    let styles = &element.styles;
    let typography = element.element_type.has_typography().then(|| Typography {
        color: styles.color.clone(),
        font_size: styles.font_size,
        font_weight: styles.font_weight,
        text_align: styles.text_align,
    });

    ElementProperties {
        id: element.id.clone(),
        name: element.name.clone(),
        element_type: element.element_type,
        x: element.x,
        y: element.y,
        width: element.width,
        height: element.height,
        rotation: element.rotation,
        opacity: element.opacity,
        locked: element.locked,
        background_color: styles.background_color.clone(),
        border_radius: styles.border_radius,
        content: element.content.clone(),
        typography,
    }
}

/// Turn a form edit into an editor action for the selected element
pub fn edit(state: &EditorState, edit: PropertyEdit) -> Option<Action> {
    let Some(element) = state.selected() else {
        debug!(?edit, "No selection, dropping property edit");
        return None;
    };

    if edit.needs_text_element() && !element.element_type.has_typography() {
        debug!(id = %element.id, ?edit, "Element has no typography");
        return None;
    }

    let id = element.id.clone();
    let action = match edit {
        PropertyEdit::Numeric { field, input } => {
            let value = parse_int_lenient(&input) as f64;
            match field {
                NumericField::X => update(id, ElementPatch {
                    x: Some(value),
                    ..Default::default()
                }),
                NumericField::Y => update(id, ElementPatch {
                    y: Some(value),
                    ..Default::default()
                }),
                NumericField::Width => update(id, ElementPatch {
                    width: Some(value),
                    ..Default::default()
                }),
                NumericField::Height => update(id, ElementPatch {
                    height: Some(value),
                    ..Default::default()
                }),
                NumericField::Rotation => update(id, ElementPatch {
                    rotation: Some(value),
                    ..Default::default()
                }),
                NumericField::BorderRadius => style(id, ElementStyles {
                    border_radius: Some(value),
                    ..Default::default()
                }),
                NumericField::FontSize => style(id, ElementStyles {
                    font_size: Some(value),
                    ..Default::default()
                }),
            }
        }

        PropertyEdit::Opacity(value) => update(id, ElementPatch {
            opacity: Some(snap_opacity(value)),
            ..Default::default()
        }),
        PropertyEdit::Name(name) => update(id, ElementPatch {
            name: Some(name),
            ..Default::default()
        }),
        PropertyEdit::Content(content) => update(id, ElementPatch {
            content: Some(content),
            ..Default::default()
        }),

        PropertyEdit::BackgroundColor(color) => style(id, ElementStyles {
            background_color: Some(color),
            ..Default::default()
        }),
        PropertyEdit::Color(color) => style(id, ElementStyles {
            color: Some(color),
            ..Default::default()
        }),
        PropertyEdit::FontWeight(weight) => style(id, ElementStyles {
            font_weight: Some(weight),
            ..Default::default()
        }),
        PropertyEdit::TextAlign(align) => style(id, ElementStyles {
            text_align: Some(align),
            ..Default::default()
        }),
    };

    Some(action)
}

fn update(id: ElementId, patch: ElementPatch) -> Action {
    Action::UpdateElement { id, patch }
}

fn style(id: ElementId, patch: ElementStyles) -> Action {
    Action::UpdateStyles { id, patch }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockup_editor::Forest;

    fn selected(element_type: ElementType) -> EditorState {
        EditorState::new(Forest::new())
            .reduce(&Action::AddElement { element_type })
            .state
    }

    fn apply(state: &EditorState, edit_: PropertyEdit) -> EditorState {
        let action = edit(state, edit_).unwrap();
        state.reduce(&action).state
    }

    #[test]
    fn test_parse_int_lenient() {
        assert_eq!(parse_int_lenient("42"), 42);
        assert_eq!(parse_int_lenient("  -17px"), -17);
        assert_eq!(parse_int_lenient("+8"), 8);
        assert_eq!(parse_int_lenient("12.9"), 12);
        assert_eq!(parse_int_lenient("abc"), 0);
        assert_eq!(parse_int_lenient(""), 0);
        assert_eq!(parse_int_lenient("-"), 0);
        assert_eq!(parse_int_lenient("1 2"), 1);
        assert_eq!(parse_int_lenient("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_snap_opacity() {
        assert_eq!(snap_opacity(0.44), 0.4);
        assert_eq!(snap_opacity(0.46), 0.5);
        assert_eq!(snap_opacity(-1.0), 0.0);
        assert_eq!(snap_opacity(3.0), 1.0);
        assert_eq!(snap_opacity(f64::NAN), 0.0);
    }

    #[test]
    fn test_empty_state() {
        let state = EditorState::default();
        assert_eq!(
            view(&state),
            PropertiesView::Empty {
                message: EMPTY_MESSAGE
            }
        );
        assert_eq!(edit(&state, PropertyEdit::Opacity(0.5)), None);
    }

    #[test]
    fn test_bad_numeric_input_coerces_to_zero() {
        let state = selected(ElementType::Card);
        let next = apply(&state, PropertyEdit::numeric(NumericField::Width, "wide"));

        assert_eq!(next.selected().map(|e| e.width), Some(0.0));
    }

    #[test]
    fn test_border_radius_goes_to_styles() {
        let state = selected(ElementType::Card);
        let next = apply(&state, PropertyEdit::numeric(NumericField::BorderRadius, "12px"));

        assert_eq!(next.selected().and_then(|e| e.styles.border_radius), Some(12.0));
    }

    #[test]
    fn test_typography_only_for_text_and_button() {
        let card = selected(ElementType::Card);
        match view(&card) {
            PropertiesView::Element(props) => assert_eq!(props.typography, None),
            other => panic!("unexpected view {:?}", other),
        }
        assert_eq!(edit(&card, PropertyEdit::FontWeight(FontWeight::Bold)), None);

        let text = selected(ElementType::Text);
        match view(&text) {
            PropertiesView::Element(props) => {
                let typography = props.typography.unwrap();
                assert_eq!(typography.font_size, Some(16.0));
            }
            other => panic!("unexpected view {:?}", other),
        }
        let next = apply(&text, PropertyEdit::TextAlign(TextAlign::Justify));
        assert_eq!(next.selected().and_then(|e| e.styles.text_align), Some(TextAlign::Justify));
    }

    #[test]
    fn test_edits_ignore_lock() {
        let state = selected(ElementType::Button);
        let id = state.selected_id.clone().unwrap();
        let locked = state.reduce(&Action::ToggleLock { id }).state;

        let next = apply(&locked, PropertyEdit::numeric(NumericField::X, "99"));
        let el = next.selected().unwrap();
        assert!(el.locked);
        assert_eq!(el.x, 99.0);
    }

    #[test]
    fn test_opacity_is_snapped() {
        let state = selected(ElementType::Image);
        let next = apply(&state, PropertyEdit::Opacity(0.73));

        assert_eq!(next.selected().map(|e| e.opacity), Some(0.7));
    }
}
