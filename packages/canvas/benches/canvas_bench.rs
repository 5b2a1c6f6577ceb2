use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mockup_canvas::{hit_test, render, to_html, ChildCoordinates, HtmlOptions};
use mockup_editor::{
    demo_elements, Element, EditorState, ElementType, Forest, MockupElement, Point,
};

fn demo_state() -> EditorState {
    EditorState::new(Forest::from_elements(demo_elements()))
}

fn large_state() -> EditorState {
    let sections = (0..50)
        .map(|i| {
            let mut section = Element::with_defaults(format!("section-{}", i), ElementType::Section, i);
            section.y = f64::from(i) * 220.0;
            let cards = (0..10).map(|j| {
                let mut card = Element::with_defaults(format!("card-{}-{}", i, j), ElementType::Card, j);
                card.x = f64::from(j) * 140.0;
                card.width = 120.0;
                MockupElement::leaf(card)
            });
            cards.fold(MockupElement::leaf(section), |parent, card| parent.with_child(card))
        })
        .collect();

    EditorState::new(Forest::from_elements(sections))
}

fn render_demo_page(c: &mut Criterion) {
    let state = demo_state();

    c.bench_function("render_demo_page", |b| b.iter(|| render(black_box(&state))));
}

fn render_large_page(c: &mut Criterion) {
    let state = large_state();

    c.bench_function("render_large_page", |b| b.iter(|| render(black_box(&state))));
}

fn html_demo_page(c: &mut Criterion) {
    let state = demo_state();
    let options = HtmlOptions::default();

    c.bench_function("html_demo_page", |b| {
        b.iter(|| to_html(&render(black_box(&state)), &options))
    });
}

fn hit_test_large_page(c: &mut Criterion) {
    let state = large_state();

    c.bench_function("hit_test_large_page", |b| {
        b.iter(|| {
            hit_test(
                black_box(&state.forest),
                Point::new(700.0, 5000.0),
                ChildCoordinates::ParentRelative,
            )
        })
    });
}

criterion_group!(
    benches,
    render_demo_page,
    render_large_page,
    html_demo_page,
    hit_test_large_page
);
criterion_main!(benches);
