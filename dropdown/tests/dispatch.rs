use dropdown::prelude::*;

fn dispatcher() -> InputDispatcher {
    InputDispatcher::new(DropdownId::named("sel"), Keymap::default())
}

// ============================================================================
// Focus Scope
// ============================================================================

#[test]
fn test_focus_target_predicate() {
    let d = dispatcher();
    assert!(d.is_focus_target(Some("sel")));
    assert!(!d.is_focus_target(Some("sel-clear")));
    assert!(!d.is_focus_target(Some("sel-opt-0")));
    assert!(!d.is_focus_target(Some("other")));
    assert!(!d.is_focus_target(None));
}

#[test]
fn test_keys_from_inner_parts_ignored() {
    let d = dispatcher();
    for target in ["sel-clear", "sel-badge-0", "sel-opt-1", "elsewhere"] {
        assert_eq!(d.classify(&Event::key(target, Key::Enter)), None, "{}", target);
    }
    let untargeted = Event::Key {
        target: None,
        key: Key::Enter,
        modifiers: Modifiers::new(),
    };
    assert_eq!(d.classify(&untargeted), None);
}

// ============================================================================
// Key Mapping
// ============================================================================

#[test]
fn test_default_key_mapping() {
    let d = dispatcher();
    let cases = [
        (Key::Enter, Some(Intent::Activate)),
        (Key::Char(' '), Some(Intent::Activate)),
        (Key::Up, Some(Intent::Navigate(-1))),
        (Key::Down, Some(Intent::Navigate(1))),
        (Key::Escape, Some(Intent::Escape)),
        (Key::Char('x'), None),
        (Key::Tab, None),
    ];
    for (key, expected) in cases {
        assert_eq!(d.classify(&Event::key("sel", key)), expected, "{:?}", key);
    }
}

#[test]
fn test_modified_keys_not_bound_by_default() {
    let d = dispatcher();
    let event = Event::Key {
        target: Some("sel".into()),
        key: Key::Enter,
        modifiers: Modifiers::ctrl(),
    };
    assert_eq!(d.classify(&event), None);
}

#[test]
fn test_custom_keymap() {
    let keymap = Keymap::from_pairs([("ctrl+n", "next"), ("ctrl+p", "previous"), ("q", "close")])
        .expect("valid keymap");
    let d = InputDispatcher::new(DropdownId::named("sel"), keymap);

    let ctrl_n = Event::Key {
        target: Some("sel".into()),
        key: Key::Char('n'),
        modifiers: Modifiers::ctrl(),
    };
    assert_eq!(d.classify(&ctrl_n), Some(Intent::Navigate(1)));
    assert_eq!(d.classify(&Event::key("sel", Key::Char('q'))), Some(Intent::Escape));
    assert_eq!(d.classify(&Event::key("sel", Key::Enter)), None);
}

// ============================================================================
// Pointer Mapping
// ============================================================================

#[test]
fn test_click_parts() {
    let d = dispatcher();
    assert_eq!(d.classify(&Event::click("sel")), Some(Intent::Activate));
    assert_eq!(d.classify(&Event::click("sel-clear")), Some(Intent::ClickClear));
    assert_eq!(d.classify(&Event::click("sel-opt-2")), Some(Intent::ClickOption(2)));
    assert_eq!(d.classify(&Event::click("sel-badge-1")), Some(Intent::ToggleBadge(1)));
    assert_eq!(d.classify(&Event::click("sel-unknown")), None);
    assert_eq!(d.classify(&Event::click("other")), None);
}

#[test]
fn test_non_left_click_ignored() {
    let d = dispatcher();
    let right = Event::Click {
        target: Some("sel".into()),
        x: 3,
        y: 1,
        button: MouseButton::Right,
    };
    assert_eq!(d.classify(&right), None);
}

#[test]
fn test_hover_only_on_option_rows() {
    let d = dispatcher();
    assert_eq!(d.classify(&Event::hover("sel-opt-1")), Some(Intent::HoverOption(1)));
    assert_eq!(d.classify(&Event::hover("sel")), None);
    assert_eq!(d.classify(&Event::hover("sel-clear")), None);
}

#[test]
fn test_blur_only_from_container() {
    let d = dispatcher();
    assert_eq!(d.classify(&Event::blur("sel")), Some(Intent::Blur));
    assert_eq!(d.classify(&Event::blur("sel-clear")), None);
    let focus = Event::Focus {
        target: "sel".into(),
    };
    assert_eq!(d.classify(&focus), None);
}

// ============================================================================
// Part Ids
// ============================================================================

#[test]
fn test_part_ids_resolve() {
    let id = DropdownId::named("country");
    for part in [Part::Container, Part::Clear, Part::Option(0), Part::Option(12), Part::Badge(3)] {
        assert_eq!(id.resolve(&id.part(part)), Ok(part));
    }
    assert_eq!(id.part(Part::Option(4)), "country-opt-4");
}

#[test]
fn test_generated_ids_resolve() {
    let id = DropdownId::new();
    assert!(id.as_str().starts_with("__dropdown_"));
    assert_eq!(id.resolve(&id.part(Part::Clear)), Ok(Part::Clear));
}

// ============================================================================
// Terminal Keys
// ============================================================================

#[test]
fn test_unmapped_terminal_keys_never_match() {
    use crossterm::event::{KeyCode, MediaKeyCode};

    assert_eq!(Key::from(KeyCode::CapsLock), Key::Other);
    assert_eq!(Key::from(KeyCode::Null), Key::Other);
    assert_eq!(Key::from(KeyCode::Media(MediaKeyCode::Play)), Key::Other);

    let mut keymap = Keymap::default();
    keymap.bind_str("\0", KeyAction::Activate).expect("nul char binding");
    keymap.bind(KeyCombo::key(Key::Other), KeyAction::Activate);
    let d = InputDispatcher::new(DropdownId::named("sel"), keymap);

    for code in [KeyCode::CapsLock, KeyCode::Null, KeyCode::Media(MediaKeyCode::Play)] {
        let event = Event::key("sel", Key::from(code));
        assert_eq!(d.classify(&event), None, "{:?}", code);
    }
    assert_eq!(
        d.classify(&Event::key("sel", Key::Char('\0'))),
        Some(Intent::Activate)
    );
}
