use super::*;
use crate::presets;

#[test]
fn leaving_an_editor_commits_under_the_selected_layout() {
    let mut app = make_app();
    app.focus_placement();
    app.placement_editor.insert_char('!');
    app.leave_editor();

    let committed = app
        .panel
        .with_state(|s| s.placement_of(LayoutName::Standard).to_string());
    assert!(committed.starts_with('!'));
}

#[test]
fn forward_cycle_commits_the_pane_being_left() {
    let mut app = make_app();
    app.cycle_focus_forward(); // -> placement
    app.placement_editor.insert_char('A');
    app.cycle_focus_forward(); // -> promotion, commits placement
    app.promotion_editor.insert_char('B');
    app.cycle_focus_forward(); // -> layouts, commits promotion

    app.panel.with_state(|s| {
        assert!(s.placement_of(LayoutName::Standard).starts_with('A'));
        assert!(s.promotion_of(LayoutName::Standard).starts_with('B'));
    });
}

#[test]
fn edits_survive_switching_layouts_and_back() {
    let mut app = make_app();

    // Edit placement under standard, commit by leaving the pane.
    app.focus_placement();
    app.placement_editor.set_text("K_k");
    app.leave_editor();

    // Wander to another layout and back.
    app.select_next();
    assert_eq!(
        app.placement_editor.text(),
        presets::placement(LayoutName::Hole)
    );
    app.select_previous();

    assert_eq!(app.placement_editor.text(), "K_k");
}

#[test]
fn promotion_edits_do_not_touch_placement_entries() {
    let mut app = make_app();
    app.cycle_focus_forward();
    app.cycle_focus_forward(); // promotion pane
    app.promotion_editor.set_text("zone");
    app.leave_editor();

    app.panel.with_state(|s| {
        assert_eq!(s.promotion_of(LayoutName::Standard), "zone");
        for name in LayoutName::ALL {
            assert_eq!(s.placement_of(name), presets::placement(name));
        }
    });
}

#[test]
fn push_focused_input_publishes_without_committing() {
    let mut app = make_app();
    let driver = app.panel.driver();

    app.focus_placement();
    app.placement_editor.set_text("draft");
    app.push_focused_input();

    assert_eq!(driver.pieces_string(), "draft");
    app.panel.with_state(|s| {
        assert_eq!(
            s.placement_of(LayoutName::Standard),
            presets::placement(LayoutName::Standard),
            "mapping must stay untouched until commit"
        );
    });
}

#[test]
fn restart_round_trip_through_the_driver() {
    let mut app = make_app();
    let driver = app.panel.driver();

    app.request_restart();
    app.request_restart(); // second press before a poll is a no-op

    assert!(driver.poll_restart());
    assert!(!driver.poll_restart());
    assert!(app.status_message.is_some(), "user feedback was shown");
}

#[test]
fn toggle_side_is_visible_to_the_driver_immediately() {
    let mut app = make_app();
    let driver = app.panel.driver();

    app.toggle_side();
    assert_eq!(driver.bottom_side(), Side::Black);
    app.toggle_side();
    assert_eq!(driver.bottom_side(), Side::White);
}

#[tokio::test]
async fn driver_poller_consumes_restart_requests() {
    let mut app = make_app();
    let driver = app.panel.driver();

    let poller = tokio::spawn(run_driver_poller(
        driver,
        Duration::from_millis(1),
    ));

    app.request_restart();

    // The poller should consume the request within a few cycles.
    let mut consumed = false;
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(2)).await;
        if !app.panel.restart_pending() {
            consumed = true;
            break;
        }
    }
    poller.abort();
    assert!(consumed, "poller should have consumed the restart request");
}
