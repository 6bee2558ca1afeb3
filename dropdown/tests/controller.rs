use dropdown::prelude::*;

fn abc() -> Vec<OptionRef> {
    options([("A", "a"), ("B", "b"), ("C", "c")])
}

/// Apply intents in order against a fixed value, returning the last transition.
fn run(
    controller: &mut DropdownController,
    intents: &[Intent],
    opts: &[OptionRef],
    value: &SelectionValue,
) -> Transition {
    let eq = Equality::default();
    let model = SelectionModel::new(value, &eq);
    let mut last = Transition::default();
    for intent in intents {
        last = controller.apply(*intent, opts, &model);
    }
    last
}

// ============================================================================
// Opening
// ============================================================================

#[test]
fn test_initial_state_closed() {
    let controller = DropdownController::new();
    assert_eq!(
        controller.state(),
        WidgetState {
            is_open: false,
            highlighted_index: 0
        }
    );
}

#[test]
fn test_open_resets_highlight() {
    let opts = abc();
    let value = SelectionValue::Single(None);

    for opener in [Intent::Activate, Intent::Navigate(1), Intent::Navigate(-1)] {
        let mut controller = DropdownController::new();
        // Leave a non-zero highlight behind, then close
        run(
            &mut controller,
            &[Intent::Activate, Intent::HoverOption(2), Intent::Escape],
            &opts,
            &value,
        );
        assert_eq!(controller.highlighted_index(), 2);

        let t = run(&mut controller, &[opener], &opts, &value);
        assert!(t.state_changed);
        assert!(t.change.is_none());
        assert!(controller.is_open());
        assert_eq!(controller.highlighted_index(), 0, "{:?}", opener);
    }
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_navigation_bounds() {
    let opts = abc();
    let value = SelectionValue::Single(None);
    let mut controller = DropdownController::new();

    run(&mut controller, &[Intent::Activate], &opts, &value);

    // Up at 0 is dropped
    let t = run(&mut controller, &[Intent::Navigate(-1)], &opts, &value);
    assert!(!t.state_changed);
    assert_eq!(controller.highlighted_index(), 0);

    run(&mut controller, &[Intent::Navigate(1), Intent::Navigate(1)], &opts, &value);
    assert_eq!(controller.highlighted_index(), 2);

    // Down at n-1 is dropped, no wraparound
    let t = run(&mut controller, &[Intent::Navigate(1)], &opts, &value);
    assert!(!t.state_changed);
    assert_eq!(controller.highlighted_index(), 2);
    assert!(controller.is_open());
}

#[test]
fn test_hover_moves_highlight_without_selecting() {
    let opts = abc();
    let value = SelectionValue::Single(None);
    let mut controller = DropdownController::new();

    let t = run(&mut controller, &[Intent::Activate, Intent::HoverOption(1)], &opts, &value);
    assert!(t.change.is_none());
    assert_eq!(controller.highlighted_index(), 1);
}

#[test]
fn test_hover_ignored_while_closed_or_out_of_range() {
    let opts = abc();
    let value = SelectionValue::Single(None);
    let mut controller = DropdownController::new();

    let t = run(&mut controller, &[Intent::HoverOption(1)], &opts, &value);
    assert!(!t.is_handled());
    assert_eq!(controller.highlighted_index(), 0);

    run(&mut controller, &[Intent::Activate], &opts, &value);
    let t = run(&mut controller, &[Intent::HoverOption(7)], &opts, &value);
    assert!(!t.is_handled());
    assert_eq!(controller.highlighted_index(), 0);
}

// ============================================================================
// Closing
// ============================================================================

#[test]
fn test_escape_dominance() {
    let opts = abc();
    let value = SelectionValue::Single(None);

    let mut closed = DropdownController::new();
    let t = run(&mut closed, &[Intent::Escape], &opts, &value);
    assert!(!closed.is_open());
    assert!(!t.state_changed);

    let mut open = DropdownController::new();
    run(&mut open, &[Intent::Activate, Intent::Navigate(1)], &opts, &value);
    let t = run(&mut open, &[Intent::Escape], &opts, &value);
    assert!(!open.is_open());
    assert!(t.state_changed);
    assert!(t.change.is_none());
}

#[test]
fn test_blur_closes_without_change() {
    let opts = abc();
    let value = SelectionValue::Single(None);
    let mut controller = DropdownController::new();

    run(&mut controller, &[Intent::Activate], &opts, &value);
    let t = run(&mut controller, &[Intent::Blur], &opts, &value);
    assert!(!controller.is_open());
    assert!(t.change.is_none());
}

// ============================================================================
// Commit
// ============================================================================

#[test]
fn test_activate_commits_pre_transition_highlight() {
    let opts = abc();
    let value = SelectionValue::Single(None);
    let mut controller = DropdownController::new();

    let t = run(
        &mut controller,
        &[Intent::Activate, Intent::Navigate(1), Intent::Navigate(1), Intent::Activate],
        &opts,
        &value,
    );
    assert!(!controller.is_open());
    assert_eq!(t.change.expect("commit").labels(), vec!["C"]);
}

#[test]
fn test_activate_on_current_single_value_closes_without_change() {
    let opts = abc();
    let value = SelectionValue::Single(Some(opts[0].clone()));
    let mut controller = DropdownController::new();

    let t = run(&mut controller, &[Intent::Activate, Intent::Activate], &opts, &value);
    assert!(!controller.is_open());
    assert!(t.change.is_none());
    assert!(t.state_changed);
}

#[test]
fn test_activate_with_no_options_closes() {
    let value = SelectionValue::Single(None);
    let mut controller = DropdownController::new();

    run(&mut controller, &[Intent::Activate], &[], &value);
    assert!(controller.is_open());
    let t = run(&mut controller, &[Intent::Activate], &[], &value);
    assert!(!controller.is_open());
    assert!(t.change.is_none());
}

#[test]
fn test_click_option_closes_in_multiple_mode() {
    let opts = abc();
    let value = SelectionValue::empty_multiple();
    let mut controller = DropdownController::new();

    let t = run(&mut controller, &[Intent::Activate, Intent::ClickOption(1)], &opts, &value);
    assert!(!controller.is_open());
    assert_eq!(t.change.unwrap().labels(), vec!["B"]);
}

#[test]
fn test_click_option_ignored_while_closed() {
    let opts = abc();
    let value = SelectionValue::empty_multiple();
    let mut controller = DropdownController::new();

    let t = run(&mut controller, &[Intent::ClickOption(0)], &opts, &value);
    assert!(!t.is_handled());
}

#[test]
fn test_clear_keeps_open_state() {
    let opts = abc();
    let value = SelectionValue::Multiple(vec![opts[0].clone()]);

    let mut closed = DropdownController::new();
    let t = run(&mut closed, &[Intent::ClickClear], &opts, &value);
    assert!(!closed.is_open());
    assert!(t.change.unwrap().is_empty());

    let mut open = DropdownController::new();
    run(&mut open, &[Intent::Activate], &opts, &value);
    let t = run(&mut open, &[Intent::ClickClear], &opts, &value);
    assert!(open.is_open());
    assert!(matches!(t.change, Some(SelectionValue::Multiple(ref v)) if v.is_empty()));
}

#[test]
fn test_toggle_badge_removes_value() {
    let opts = abc();
    let value = SelectionValue::Multiple(vec![opts[2].clone(), opts[0].clone()]);
    let mut controller = DropdownController::new();

    let t = run(&mut controller, &[Intent::ToggleBadge(0)], &opts, &value);
    assert!(!controller.is_open());
    assert!(!t.state_changed);
    assert_eq!(t.change.unwrap().labels(), vec!["A"]);

    // Out of range badge
    let t = run(&mut controller, &[Intent::ToggleBadge(5)], &opts, &value);
    assert!(!t.is_handled());
}

#[test]
fn test_toggle_badge_ignored_in_single_mode() {
    let opts = abc();
    let value = SelectionValue::Single(Some(opts[0].clone()));
    let mut controller = DropdownController::new();

    let t = run(&mut controller, &[Intent::ToggleBadge(0)], &opts, &value);
    assert!(!t.is_handled());
}

// ============================================================================
// Stale Highlight
// ============================================================================

#[test]
fn test_highlight_clamped_when_options_shrink() {
    let opts = abc();
    let value = SelectionValue::Single(None);
    let mut controller = DropdownController::new();

    run(&mut controller, &[Intent::Activate, Intent::HoverOption(2)], &opts, &value);
    assert_eq!(controller.highlighted_index(), 2);

    // Next cycle only has two options: commit must pick the last one
    let shorter = &opts[..2];
    let t = run(&mut controller, &[Intent::Activate], shorter, &value);
    assert_eq!(t.change.unwrap().labels(), vec!["B"]);
}

#[test]
fn test_sync_options_reports_clamp() {
    let opts = abc();
    let value = SelectionValue::Single(None);
    let mut controller = DropdownController::new();
    run(&mut controller, &[Intent::Activate, Intent::HoverOption(2)], &opts, &value);

    assert!(!controller.sync_options(3));
    assert!(controller.sync_options(1));
    assert_eq!(controller.highlighted_index(), 0);
    assert!(!controller.sync_options(0));
}
