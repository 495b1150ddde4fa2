use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtButton, MouseEvent,
    MouseEventKind,
};

use choicekit_dom::{
    accessibility_tree, collect_focusable, hit_test, hit_test_focusable, Element, Event,
    FocusSource, FocusState, Key, LayoutResult, Rect, Role,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn key(code: KeyCode) -> CtEvent {
    CtEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(x: u16, y: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

fn two_buttons() -> Element {
    Element::col()
        .id("root")
        .child(Element::text("one").id("a").focusable(true).clickable(true))
        .child(Element::text("two").id("b").focusable(true).clickable(true))
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_skips_disabled_for_focus() {
    let root = Element::box_()
        .id("root")
        .child(
            Element::text("off")
                .id("btn")
                .focusable(true)
                .disabled(true),
        );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 10)),
        ("btn", Rect::new(0, 0, 3, 1)),
    ]);

    assert_eq!(hit_test_focusable(&layout, &root, 1, 0), None);
}

// ============================================================================
// Focus Navigation
// ============================================================================

#[test]
fn test_collect_focusable_in_document_order() {
    let root = two_buttons().child(Element::text("x").id("c").focusable(true).disabled(true));

    assert_eq!(collect_focusable(&root), vec!["a", "b"]);
}

#[test]
fn test_focus_next_wraps() {
    let root = two_buttons();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
    assert_eq!(focus.focus_next(&root), Some("b".to_string()));
    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("b".to_string()));
}

#[test]
fn test_tab_emits_keyboard_focus() {
    let root = two_buttons();
    let layout = choicekit_dom::layout::layout(&root, Rect::from_size(10, 5));
    let mut focus = FocusState::new();

    let events = focus.process_event(&key(KeyCode::Tab), &root, &layout);

    assert_eq!(
        events,
        vec![Event::Focus {
            target: "a".into(),
            source: FocusSource::Keyboard
        }]
    );
}

#[test]
fn test_keys_target_focused_element() {
    let root = two_buttons();
    let layout = choicekit_dom::layout::layout(&root, Rect::from_size(10, 5));
    let mut focus = FocusState::new();
    focus.focus("b");

    let events = focus.process_event(&key(KeyCode::Down), &root, &layout);

    assert!(matches!(
        &events[..],
        [Event::Key { target: Some(t), key: Key::Down, .. }] if t == "b"
    ));
}

#[test]
fn test_click_focuses_with_mouse_source() {
    let root = two_buttons();
    let layout = choicekit_dom::layout::layout(&root, Rect::from_size(10, 5));
    let mut focus = FocusState::new();

    let events = focus.process_event(&click(1, 1), &root, &layout);

    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        Event::Focus {
            target: "b".into(),
            source: FocusSource::Mouse
        }
    );
    assert!(matches!(&events[1], Event::Click { target: Some(t), .. } if t == "b"));
    assert_eq!(focus.focused(), Some("b"));
}

#[test]
fn test_stale_focus_is_blurred() {
    let root = two_buttons();
    let layout = choicekit_dom::layout::layout(&root, Rect::from_size(10, 5));
    let mut focus = FocusState::new();
    focus.focus("gone");

    let events = focus.process_event(&key(KeyCode::Char('x')), &root, &layout);

    assert_eq!(events[0], Event::Blur { target: "gone".into() });
    assert_eq!(focus.focused(), None);
}

// ============================================================================
// Accessibility
// ============================================================================

#[test]
fn test_accessibility_tree_lifts_through_plain_containers() {
    let root = Element::col()
        .id("root")
        .role(Role::Group)
        .accessible_name("Fruit")
        .child(
            Element::row().id("wrap").child(
                Element::row()
                    .id("opt")
                    .role(Role::Radio)
                    .checked(true)
                    .child(Element::text("Apple")),
            ),
        );

    let tree = accessibility_tree(&root);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].role, Role::Group);
    assert_eq!(tree[0].name, "Fruit");
    let radios = tree[0].find_all(Role::Radio);
    assert_eq!(radios.len(), 1);
    assert_eq!(radios[0].name, "Apple");
    assert_eq!(radios[0].checked, Some(true));
}
