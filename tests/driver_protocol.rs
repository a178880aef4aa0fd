//! Integration tests for the driver accessor protocol.
//!
//! Exercises the boundary an embedding game driver sees: the four polled
//! accessors, across threads, against a panel mutated by UI-style events.

use board_layout_panel::driver::DriverHandle;
use board_layout_panel::panel::{PanelEvent, PanelState, SharedPanel};
use board_layout_panel::{presets, LayoutName, Side};
use std::time::Duration;

fn new_panel(initial: LayoutName, side: Side) -> (SharedPanel, DriverHandle) {
    let panel = SharedPanel::new(PanelState::new(initial, side));
    let driver = panel.driver();
    (panel, driver)
}

#[test]
fn driver_sees_the_initial_presets() {
    let (_panel, driver) = new_panel(LayoutName::Standard, Side::White);
    assert_eq!(
        driver.pieces_string(),
        presets::placement(LayoutName::Standard)
    );
    assert_eq!(
        driver.promotions_string(),
        presets::promotion(LayoutName::Standard)
    );
    assert_eq!(driver.bottom_side(), Side::White);
    assert!(!driver.poll_restart());
}

#[test]
fn driver_sees_selection_changes() {
    let (panel, driver) = new_panel(LayoutName::Standard, Side::White);
    panel.apply(PanelEvent::Select(LayoutName::SecretPassage));
    assert_eq!(
        driver.pieces_string(),
        presets::placement(LayoutName::SecretPassage)
    );
}

#[test]
fn driver_sees_live_uncommitted_edits() {
    let (panel, driver) = new_panel(LayoutName::Custom, Side::White);
    assert_eq!(driver.pieces_string(), "", "custom starts empty");

    panel.apply(PanelEvent::PlacementInput("K______k".to_string()));
    assert_eq!(driver.pieces_string(), "K______k");
}

#[test]
fn restart_protocol_click_once_poll_twice() {
    let (panel, driver) = new_panel(LayoutName::Standard, Side::White);
    panel.request_restart();
    assert_eq!(
        [driver.poll_restart(), driver.poll_restart()],
        [true, false]
    );
}

#[test]
fn restart_protocol_click_twice_single_notification() {
    let (panel, driver) = new_panel(LayoutName::Standard, Side::White);
    panel.request_restart();
    panel.request_restart();
    assert_eq!(
        [driver.poll_restart(), driver.poll_restart()],
        [true, false]
    );
}

#[test]
fn side_reads_have_no_caching_lag() {
    let (panel, driver) = new_panel(LayoutName::Standard, Side::White);
    panel.apply(PanelEvent::SetSide(Side::Black));
    assert_eq!(driver.bottom_side(), Side::Black);
    panel.apply(PanelEvent::SetSide(Side::White));
    assert_eq!(driver.bottom_side(), Side::White);
}

#[test]
fn driver_polls_from_another_thread_observe_latest_writes() {
    let (panel, driver) = new_panel(LayoutName::Standard, Side::White);

    // UI side: edit, commit, request one restart.
    panel.apply(PanelEvent::PlacementInput("edited board".to_string()));
    panel.apply(PanelEvent::CommitPlacement);
    panel.request_restart();

    // A poller thread running on its own cadence, the way a game loop would.
    let poller = std::thread::spawn(move || {
        let mut restarts = 0;
        let mut last = String::new();
        for _ in 0..20 {
            if driver.poll_restart() {
                restarts += 1;
                last = driver.pieces_string();
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        (restarts, last)
    });

    let (restarts, last) = poller.join().expect("poller thread panicked");
    assert_eq!(restarts, 1, "one click, one notification");
    assert_eq!(last, "edited board", "poll observed the committed edit");
}

#[test]
fn two_panels_are_independent() {
    let (panel_a, driver_a) = new_panel(LayoutName::Standard, Side::White);
    let (_panel_b, driver_b) = new_panel(LayoutName::Hole, Side::Black);

    panel_a.request_restart();
    assert!(!driver_b.poll_restart(), "latches are per instance");
    assert!(driver_a.poll_restart());

    assert_eq!(driver_b.bottom_side(), Side::Black);
    assert_eq!(driver_a.bottom_side(), Side::White);
}
