//! # Mockup Elements
//!
//! Value types for the positioned, styled boxes that make up a mockup.
//!
//! [`Element`] is a single node without children. [`MockupElement`] is the
//! nested form used at the edges of the editor (seed data, JSON, callbacks):
//! the same fields plus an ordered list of child elements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Element identifier, unique within one editor instance
pub type ElementId = String;

/// Kinds of element the palette can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Section,
    Container,
    Text,
    Image,
    Button,
    Input,
    Nav,
    Footer,
    Hero,
    Card,
    Form,
}

impl ElementType {
    pub const ALL: [ElementType; 11] = [
        ElementType::Section,
        ElementType::Container,
        ElementType::Text,
        ElementType::Image,
        ElementType::Button,
        ElementType::Input,
        ElementType::Nav,
        ElementType::Footer,
        ElementType::Hero,
        ElementType::Card,
        ElementType::Form,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Section => "section",
            ElementType::Container => "container",
            ElementType::Text => "text",
            ElementType::Image => "image",
            ElementType::Button => "button",
            ElementType::Input => "input",
            ElementType::Nav => "nav",
            ElementType::Footer => "footer",
            ElementType::Hero => "hero",
            ElementType::Card => "card",
            ElementType::Form => "form",
        }
    }

    /// Human readable label used for default layer names
    pub fn label(&self) -> &'static str {
        match self {
            ElementType::Section => "Section",
            ElementType::Container => "Container",
            ElementType::Text => "Text",
            ElementType::Image => "Image",
            ElementType::Button => "Button",
            ElementType::Input => "Input",
            ElementType::Nav => "Navigation",
            ElementType::Footer => "Footer",
            ElementType::Hero => "Hero",
            ElementType::Card => "Card",
            ElementType::Form => "Form",
        }
    }

    /// Whether the properties form shows the typography section
    pub fn has_typography(&self) -> bool {
        matches!(self, ElementType::Text | ElementType::Button)
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Padding or margin: one value for all sides, or one per side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    Uniform(f64),
    Sides {
        top: f64,
        right: f64,
        bottom: f64,
        left: f64,
    },
}

impl Spacing {
    /// CSS shorthand (`16px` or `8px 16px 8px 16px`)
    pub fn to_css(&self) -> String {
        match self {
            Spacing::Uniform(v) => format!("{}px", v),
            Spacing::Sides {
                top,
                right,
                bottom,
                left,
            } => format!("{}px {}px {}px {}px", top, right, bottom, left),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
    None,
}

impl BorderStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 4] = [
        FontWeight::Normal,
        FontWeight::Medium,
        FontWeight::Semibold,
        FontWeight::Bold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        }
    }

    /// Numeric CSS weight
    pub fn as_css(&self) -> &'static str {
        match self {
            FontWeight::Normal => "400",
            FontWeight::Medium => "500",
            FontWeight::Semibold => "600",
            FontWeight::Bold => "700",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|w| w.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub const ALL: [TextAlign; 4] = [
        TextAlign::Left,
        TextAlign::Center,
        TextAlign::Right,
        TextAlign::Justify,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Block,
    Flex,
    None,
}

impl Display {
    pub fn as_css(&self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Flex => "flex",
            Display::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

impl FlexDirection {
    pub fn as_css(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
}

impl JustifyContent {
    pub fn as_css(&self) -> &'static str {
        match self {
            JustifyContent::FlexStart => "flex-start",
            JustifyContent::Center => "center",
            JustifyContent::FlexEnd => "flex-end",
            JustifyContent::SpaceBetween => "space-between",
            JustifyContent::SpaceAround => "space-around",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

impl AlignItems {
    pub fn as_css(&self) -> &'static str {
        match self {
            AlignItems::FlexStart => "flex-start",
            AlignItems::Center => "center",
            AlignItems::FlexEnd => "flex-end",
            AlignItems::Stretch => "stretch",
        }
    }
}

/// Visual styles of an element.
///
/// Every field is optional. The same type doubles as a partial patch for
/// `UpdateStyles`: fields that are `Some` overwrite, `None` leaves the
/// existing value alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementStyles {
    // Background and border
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,

    // Spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Spacing>,

    // Typography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,

    // Layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
}

macro_rules! merge_fields {
    ($target:expr, $patch:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$patch.$field {
                $target.$field = Some(value.clone());
            }
        )+
    };
}

impl ElementStyles {
    /// Shallow-merge a patch into these styles
    pub fn merge(&mut self, patch: &ElementStyles) {
        merge_fields!(
            self,
            patch,
            background_color,
            border_color,
            border_width,
            border_radius,
            border_style,
            padding,
            margin,
            font_size,
            font_weight,
            font_family,
            color,
            text_align,
            display,
            flex_direction,
            justify_content,
            align_items,
            gap,
        );
    }

    pub fn is_empty(&self) -> bool {
        *self == ElementStyles::default()
    }
}

/// A single element, without its children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,

    #[serde(rename = "type")]
    pub element_type: ElementType,

    #[serde(default)]
    pub name: String,

    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,

    #[serde(default = "default_opacity")]
    pub opacity: f64,

    #[serde(default)]
    pub locked: bool,

    #[serde(default = "default_visible")]
    pub visible: bool,

    #[serde(default)]
    pub z_index: i32,

    #[serde(default)]
    pub styles: ElementStyles,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

fn default_opacity() -> f64 {
    1.0
}

fn default_visible() -> bool {
    true
}

impl Element {
    /// Build the palette default for a type.
    ///
    /// The id and z-index are assigned by the store when the element is added.
    pub fn with_defaults(id: impl Into<ElementId>, element_type: ElementType, z_index: i32) -> Self {
        let (width, height) = default_size(element_type);

        let mut styles = ElementStyles::default();
        let content = match element_type {
            ElementType::Text => {
                styles.font_size = Some(16.0);
                styles.color = Some("#1f2937".to_string());
                Some("New Text".to_string())
            }
            ElementType::Button => {
                styles.background_color = Some("#3b82f6".to_string());
                styles.color = Some("#ffffff".to_string());
                styles.border_radius = Some(8.0);
                styles.font_size = Some(14.0);
                styles.font_weight = Some(FontWeight::Semibold);
                styles.text_align = Some(TextAlign::Center);
                Some("Button".to_string())
            }
            _ => {
                styles.background_color = Some("#f3f4f6".to_string());
                styles.border_color = Some("#d1d5db".to_string());
                styles.border_width = Some(1.0);
                styles.border_style = Some(BorderStyle::Solid);
                None
            }
        };

        Self {
            id: id.into(),
            element_type,
            name: element_type.label().to_string(),
            x: 100.0,
            y: 100.0,
            width,
            height,
            rotation: 0.0,
            opacity: 1.0,
            locked: false,
            visible: true,
            z_index,
            styles,
            content,
        }
    }

    /// Apply a shallow patch of top-level fields
    pub fn merge(&mut self, patch: &ElementPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity;
        }
        if let Some(locked) = patch.locked {
            self.locked = locked;
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
        if let Some(z_index) = patch.z_index {
            self.z_index = z_index;
        }
        if let Some(content) = &patch.content {
            self.content = Some(content.clone());
        }
    }
}

/// Width and height of a freshly added element
pub fn default_size(element_type: ElementType) -> (f64, f64) {
    match element_type {
        ElementType::Text => (200.0, 40.0),
        ElementType::Button => (120.0, 48.0),
        _ => (300.0, 200.0),
    }
}

/// Partial update of an element's top-level fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ElementPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ElementPatch::default()
    }
}

/// An element together with its nested children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockupElement {
    #[serde(flatten)]
    pub element: Element,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MockupElement>,
}

impl MockupElement {
    pub fn leaf(element: Element) -> Self {
        Self {
            element,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: MockupElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> &str {
        &self.element.id
    }

    /// Number of elements in this subtree, including self
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(MockupElement::count).sum::<usize>()
    }
}
