//! Built-in demo page used when the host supplies no initial elements.

use crate::element::{
    AlignItems, Display, Element, ElementStyles, ElementType, FlexDirection, FontWeight,
    JustifyContent, MockupElement, Spacing, TextAlign,
};
use crate::forest::Forest;

fn element(id: &str, name: &str, element_type: ElementType, frame: [f64; 4], z_index: i32) -> Element {
    let [x, y, width, height] = frame;
    Element {
        id: id.to_string(),
        element_type,
        name: name.to_string(),
        x,
        y,
        width,
        height,
        rotation: 0.0,
        opacity: 1.0,
        locked: false,
        visible: true,
        z_index,
        styles: ElementStyles::default(),
        content: None,
    }
}

fn text(id: &str, content: &str, frame: [f64; 4], size: f64, weight: FontWeight, color: &str) -> MockupElement {
    let mut el = element(id, content, ElementType::Text, frame, 1);
    el.content = Some(content.to_string());
    el.styles = ElementStyles {
        font_size: Some(size),
        font_weight: Some(weight),
        color: Some(color.to_string()),
        ..Default::default()
    };
    MockupElement::leaf(el)
}

fn feature_card(index: usize, title: &str, body: &str) -> MockupElement {
    let x = 120.0 + index as f64 * 420.0;
    let mut card = element(
        &format!("feature-card-{}", index + 1),
        title,
        ElementType::Card,
        [x, 40.0, 380.0, 220.0],
        index as i32 + 1,
    );
    card.styles = ElementStyles {
        background_color: Some("#ffffff".to_string()),
        border_color: Some("#e5e7eb".to_string()),
        border_width: Some(1.0),
        border_radius: Some(12.0),
        padding: Some(Spacing::Uniform(24.0)),
        ..Default::default()
    };

    MockupElement::leaf(card)
        .with_child(text(
            &format!("feature-title-{}", index + 1),
            title,
            [24.0, 24.0, 332.0, 32.0],
            20.0,
            FontWeight::Semibold,
            "#111827",
        ))
        .with_child(text(
            &format!("feature-body-{}", index + 1),
            body,
            [24.0, 72.0, 332.0, 96.0],
            15.0,
            FontWeight::Normal,
            "#6b7280",
        ))
}

/// Demo landing page: navigation, hero, feature row and footer
pub fn demo_elements() -> Vec<MockupElement> {
    let mut nav = element("nav-1", "Navigation", ElementType::Nav, [0.0, 0.0, 1440.0, 72.0], 1);
    nav.styles = ElementStyles {
        background_color: Some("#ffffff".to_string()),
        border_color: Some("#e5e7eb".to_string()),
        border_width: Some(1.0),
        display: Some(Display::Flex),
        flex_direction: Some(FlexDirection::Row),
        justify_content: Some(JustifyContent::SpaceBetween),
        align_items: Some(AlignItems::Center),
        padding: Some(Spacing::Sides {
            top: 0.0,
            right: 48.0,
            bottom: 0.0,
            left: 48.0,
        }),
        ..Default::default()
    };

    let mut hero = element("hero-1", "Hero", ElementType::Hero, [0.0, 72.0, 1440.0, 520.0], 2);
    hero.styles = ElementStyles {
        background_color: Some("#eef2ff".to_string()),
        display: Some(Display::Flex),
        flex_direction: Some(FlexDirection::Column),
        align_items: Some(AlignItems::Center),
        justify_content: Some(JustifyContent::Center),
        gap: Some(24.0),
        ..Default::default()
    };

    let mut cta = element("hero-cta", "Get started", ElementType::Button, [620.0, 340.0, 200.0, 56.0], 3);
    cta.content = Some("Get started".to_string());
    cta.styles = ElementStyles {
        background_color: Some("#4f46e5".to_string()),
        color: Some("#ffffff".to_string()),
        border_radius: Some(8.0),
        font_size: Some(18.0),
        font_weight: Some(FontWeight::Semibold),
        text_align: Some(TextAlign::Center),
        ..Default::default()
    };

    let mut features = element("features-1", "Features", ElementType::Section, [0.0, 592.0, 1440.0, 300.0], 3);
    features.styles = ElementStyles {
        background_color: Some("#f9fafb".to_string()),
        ..Default::default()
    };

    let mut footer = element("footer-1", "Footer", ElementType::Footer, [0.0, 892.0, 1440.0, 120.0], 4);
    footer.styles = ElementStyles {
        background_color: Some("#111827".to_string()),
        color: Some("#9ca3af".to_string()),
        ..Default::default()
    };

    vec![
        MockupElement::leaf(nav)
            .with_child(text("nav-logo", "Acme", [48.0, 20.0, 120.0, 32.0], 22.0, FontWeight::Bold, "#111827"))
            .with_child(text(
                "nav-links",
                "Product  Pricing  About",
                [1040.0, 24.0, 352.0, 24.0],
                15.0,
                FontWeight::Medium,
                "#374151",
            )),
        MockupElement::leaf(hero)
            .with_child(text(
                "hero-title",
                "Build beautiful pages faster",
                [320.0, 140.0, 800.0, 72.0],
                56.0,
                FontWeight::Bold,
                "#111827",
            ))
            .with_child(text(
                "hero-subtitle",
                "Sketch, arrange and style your next website in minutes.",
                [370.0, 240.0, 700.0, 40.0],
                20.0,
                FontWeight::Normal,
                "#4b5563",
            ))
            .with_child(MockupElement::leaf(cta)),
        MockupElement::leaf(features)
            .with_child(feature_card(0, "Drag and drop", "Place sections exactly where you want them."))
            .with_child(feature_card(1, "Responsive previews", "Check the page on desktop, tablet and mobile."))
            .with_child(feature_card(2, "Layers", "Hide, lock and reorder anything on the page.")),
        MockupElement::leaf(footer).with_child(text(
            "footer-copy",
            "© Acme Inc. All rights reserved.",
            [48.0, 48.0, 400.0, 24.0],
            14.0,
            FontWeight::Normal,
            "#9ca3af",
        )),
    ]
}

pub fn demo_forest() -> Forest {
    Forest::from_elements(demo_elements())
}
