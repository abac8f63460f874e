//! Whole-flow scenarios: config in, user actions through, host hooks out.

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use onboard_engine::{
    FlowStatus, NavControls, PageChange, PagerView, SWIPE_THRESHOLD, StateError, UserAction,
};
use onboard_tui::{action_for_key, apply_event};

use crate::common::{ConfigFixture, app_from_config};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn keyboard_walkthrough_completes_once() {
    let config = ConfigFixture::new("[ui]\nreduced_motion = true\n").load();
    let (mut app, log) = app_from_config(&config);

    apply_event(&mut app, key(KeyCode::Enter));
    apply_event(&mut app, key(KeyCode::Right));
    assert_eq!(app.current_index(), 2);
    assert_eq!(app.nav_controls(), NavControls::GetStarted);

    apply_event(&mut app, key(KeyCode::Enter));
    apply_event(&mut app, key(KeyCode::Enter));
    assert_eq!(app.status(), FlowStatus::Finished);
    assert_eq!(log.completions.get(), 1);
    assert_eq!(
        *log.changes.borrow(),
        vec![
            PageChange {
                previous: 0,
                current: 1
            },
            PageChange {
                previous: 1,
                current: 2
            },
        ]
    );

    app.advance(Duration::from_secs(2));
    assert!(app.should_exit());
}

#[test]
fn configured_skip_finish_ends_flow_from_first_page() {
    let config = ConfigFixture::new("[flow]\nskip = \"finish\"\n").load();
    let (mut app, log) = app_from_config(&config);

    app.dispatch(UserAction::Skip);
    assert_eq!(log.skips.get(), 1);
    assert_eq!(log.completions.get(), 1);
    assert_eq!(app.status(), FlowStatus::Finished);
    assert_eq!(app.current_index(), 0);
    assert!(log.changes.borrow().is_empty());
}

#[test]
fn configured_skip_ignore_leaves_page_alone() {
    let config = ConfigFixture::new("[flow]\nskip = \"ignore\"\n").load();
    let (mut app, log) = app_from_config(&config);

    apply_event(&mut app, key(KeyCode::Char('s')));
    assert_eq!(log.skips.get(), 1);
    assert_eq!(app.current_index(), 0);
    assert_eq!(app.status(), FlowStatus::Active);
}

#[test]
fn default_skip_jumps_to_last_page() {
    let config = ConfigFixture::new("").load();
    let (mut app, log) = app_from_config(&config);

    app.dispatch(UserAction::Skip);
    assert_eq!(app.current_index(), 2);
    assert_eq!(log.completions.get(), 0);
    assert!(matches!(
        app.pager_view(),
        PagerView::Sliding { from: 0, to: 2, .. }
    ));
}

#[test]
fn swipe_gesture_and_tap_share_one_index() {
    let config = ConfigFixture::new("").load();
    let (mut app, log) = app_from_config(&config);

    let start = 60;
    apply_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), start, 5));
    apply_event(
        &mut app,
        mouse(MouseEventKind::Up(MouseButton::Left), start - SWIPE_THRESHOLD - 1, 5),
    );
    assert_eq!(app.current_index(), 1);

    apply_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
    apply_event(
        &mut app,
        mouse(MouseEventKind::Up(MouseButton::Left), 10 + SWIPE_THRESHOLD + 1, 5),
    );
    assert_eq!(app.current_index(), 0);
    assert_eq!(log.changes.borrow().len(), 2);
}

#[test]
fn deep_link_rejects_out_of_range_index() {
    let config = ConfigFixture::new("").load();
    let (mut app, log) = app_from_config(&config);

    assert!(app.go_to(2).unwrap());
    assert_eq!(
        app.go_to(3),
        Err(StateError::InvalidIndex {
            index: 3,
            page_count: 3
        })
    );
    assert!(app.go_to(-1).is_err());
    assert_eq!(app.current_index(), 2);
    assert_eq!(log.changes.borrow().len(), 1);
}

#[test]
fn quit_key_aborts_without_completion() {
    let config = ConfigFixture::new("").load();
    let (mut app, log) = app_from_config(&config);

    assert_eq!(
        action_for_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
        Some(UserAction::Quit)
    );
    apply_event(&mut app, key(KeyCode::Char('q')));
    assert_eq!(app.status(), FlowStatus::Aborted);
    assert!(app.should_exit());
    assert_eq!(log.completions.get(), 0);
}

#[test]
fn holder_outlives_screen() {
    let config = ConfigFixture::new("").load();
    let (mut app, log) = app_from_config(&config);
    app.dispatch(UserAction::Next);

    let mut holder = app.into_state();
    assert_eq!(holder.current_index(), 1);
    // The host's observer stays registered after the screen is gone.
    assert_eq!(holder.observer_count(), 1);
    let _ = holder.advance();
    assert_eq!(log.changes.borrow().len(), 2);
}
