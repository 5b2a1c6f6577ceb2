//! Element → inline CSS.

use mockup_editor::{Element, ElementStyles};
use std::collections::BTreeMap;
use tracing::debug;

pub type StyleMap = BTreeMap<String, String>;

pub(crate) fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Free-text value usable as a single declaration value.
///
/// Anything that could end the declaration or the rule is dropped.
pub fn css_value(raw: &str) -> Option<&str> {
    let safe = !raw.is_empty()
        && !raw
            .chars()
            .any(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '\\') || c.is_control());
    if !safe {
        debug!(value = raw, "Dropping unsafe style value");
        return None;
    }
    Some(raw)
}

/// Box geometry: absolute position inside the parent's paint box
pub fn frame_styles(element: &Element, left: f64, top: f64) -> StyleMap {
    let mut styles = StyleMap::new();
    styles.insert("position".into(), "absolute".into());
    styles.insert("left".into(), px(left));
    styles.insert("top".into(), px(top));
    styles.insert("width".into(), px(element.width));
    styles.insert("height".into(), px(element.height));
    styles.insert("box-sizing".into(), "border-box".into());

    if element.opacity < 1.0 {
        styles.insert("opacity".into(), element.opacity.to_string());
    }
    if element.rotation != 0.0 {
        styles.insert("transform".into(), format!("rotate({}deg)", element.rotation));
    }
    styles.insert("z-index".into(), element.z_index.to_string());

    styles
}

/// Visual styles; content boxes center their text unless a layout is set
pub fn visual_styles(element: &Element) -> StyleMap {
    let mut css = StyleMap::new();
    let s: &ElementStyles = &element.styles;

    if let Some(v) = s.background_color.as_deref().and_then(css_value) {
        css.insert("background-color".into(), v.into());
    }
    let border_color = s.border_color.as_deref().and_then(css_value);
    if let Some(width) = s.border_width {
        let style = s.border_style.map_or("solid", |b| b.as_css());
        let color = border_color.unwrap_or("transparent");
        css.insert("border".into(), format!("{} {} {}", px(width), style, color));
    } else if let Some(color) = border_color {
        css.insert("border-color".into(), color.into());
    }
    if let Some(v) = s.border_radius {
        css.insert("border-radius".into(), px(v));
    }
    if let Some(v) = &s.padding {
        css.insert("padding".into(), v.to_css());
    }
    if let Some(v) = &s.margin {
        css.insert("margin".into(), v.to_css());
    }

    if let Some(v) = s.font_size {
        css.insert("font-size".into(), px(v));
    }
    if let Some(v) = s.font_weight {
        css.insert("font-weight".into(), v.as_css().into());
    }
    if let Some(v) = s.font_family.as_deref().and_then(css_value) {
        css.insert("font-family".into(), v.into());
    }
    if let Some(v) = s.color.as_deref().and_then(css_value) {
        css.insert("color".into(), v.into());
    }
    if let Some(v) = s.text_align {
        css.insert("text-align".into(), v.as_str().into());
    }

    match s.display {
        Some(display) => {
            css.insert("display".into(), display.as_css().into());
        }
        None if element.content.is_some() => {
            css.insert("display".into(), "flex".into());
            css.insert("align-items".into(), "center".into());
            css.insert("justify-content".into(), "center".into());
        }
        None => {}
    }
    if let Some(v) = s.flex_direction {
        css.insert("flex-direction".into(), v.as_css().into());
    }
    if let Some(v) = s.justify_content {
        css.insert("justify-content".into(), v.as_css().into());
    }
    if let Some(v) = s.align_items {
        css.insert("align-items".into(), v.as_css().into());
    }
    if let Some(v) = s.gap {
        css.insert("gap".into(), px(v));
    }

    css
}
