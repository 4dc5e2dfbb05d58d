//! Tests for the TUI application state

use super::*;
use crate::config::SlotpagerConfig;
use crate::models::{EntryId, WeaponClass};
use crate::nav::{Direction, NavState};

fn demo_app(config: &SlotpagerConfig) -> App {
    App::new(config, Rc::new(InMemorySource::demo())).unwrap()
}

fn press(app: &mut App, direction: Direction) {
    app.send(InputEvent::Move(direction));
}

#[test]
fn test_starts_on_open_inventory() {
    let app = demo_app(&SlotpagerConfig::default());
    assert_eq!(app.tab, PanelKind::Inventory);
    assert!(app.panel().is_open());
    assert_eq!(app.view().title, "Items");
    assert_eq!(app.theme().name, "Dusk");
}

#[test]
fn test_switching_tabs_closes_previous_panel() {
    let mut app = demo_app(&SlotpagerConfig::default());
    app.next_tab();
    assert_eq!(app.tab, PanelKind::Weapons(WeaponClass::Blade));
    assert!(app.panel().is_open());
    assert!(!app.panels[PanelKind::Inventory.index()].is_open());

    app.prev_tab();
    app.prev_tab();
    assert_eq!(app.tab, PanelKind::Load);
    assert_eq!(
        app.panel().focused().map(|e| e.id),
        Some(EntryId::SaveFile(4))
    );
}

#[test]
fn test_page_turn_holds_input_until_animation_ends() {
    let mut app = demo_app(&SlotpagerConfig::default());
    press(&mut app, Direction::Right);
    assert!(!app.is_animating());

    press(&mut app, Direction::Right);
    assert!(app.is_animating());
    assert_eq!(app.view().position, "2/2");
    assert_eq!(app.view().state, NavState::Animating);

    // Held while the page slides in
    press(&mut app, Direction::Left);
    assert_eq!(app.view().position, "2/2");

    app.tick();
    assert_eq!(app.view().position, "2/2");
    app.tick();
    // Replayed move turned back to the first page and animates again
    assert_eq!(app.view().position, "1/2");
    assert!(app.is_animating());
    assert_eq!(
        app.panel().focused().map(|e| e.id),
        Some(EntryId::Item(2))
    );
}

#[test]
fn test_zero_animation_ticks_never_gate() {
    let mut config = SlotpagerConfig::default();
    config.tui.animation_ticks = 0;
    let mut app = demo_app(&config);
    press(&mut app, Direction::Right);
    press(&mut app, Direction::Right);
    assert!(!app.is_animating());
    press(&mut app, Direction::Left);
    assert_eq!(app.view().position, "1/2");
}

#[test]
fn test_consume_refreshes_on_tick() {
    let mut app = demo_app(&SlotpagerConfig::default());
    app.consume_focused();
    assert_eq!(
        app.status_message.as_ref().map(|s| s.text.as_str()),
        Some("Used Potion (4 left)")
    );

    app.tick();
    let detail = app.view().cells[0].as_ref().and_then(|c| c.detail.clone());
    assert_eq!(detail.as_deref(), Some("x4"));
}

#[test]
fn test_consume_outside_inventory_is_refused() {
    let mut app = demo_app(&SlotpagerConfig::default());
    app.switch_tab(PanelKind::Hints);
    app.consume_focused();
    assert!(app.status_message.as_ref().is_some_and(|s| s.is_error));
}

#[test]
fn test_cancel_closes_and_confirm_reopens() {
    let mut app = demo_app(&SlotpagerConfig::default());
    app.send(InputEvent::Cancel);
    assert!(!app.panel().is_open());

    // Moves on a closed panel do nothing
    press(&mut app, Direction::Down);
    assert!(!app.panel().is_open());

    app.send(InputEvent::Confirm);
    assert!(app.panel().is_open());
}

#[test]
fn test_confirm_reports_selection() {
    let mut app = demo_app(&SlotpagerConfig::default());
    app.switch_tab(PanelKind::Weapons(WeaponClass::Shooter));
    app.send(InputEvent::Confirm);
    assert_eq!(
        app.status_message,
        Some(StatusMessage {
            text: "Selected Pellet Gun".to_string(),
            is_error: false,
        })
    );
}

#[test]
fn test_cycle_theme() {
    let mut app = demo_app(&SlotpagerConfig::default());
    app.cycle_theme();
    assert_eq!(app.theme_variant, TuiTheme::Parchment);
    assert_eq!(app.theme().name, "Parchment");
}

fn settle(app: &mut App) {
    for _ in 0..5 {
        app.tick();
    }
}

#[test]
fn test_tab_switch_mid_animation_leaves_panel_usable() {
    let mut app = demo_app(&SlotpagerConfig::default());
    press(&mut app, Direction::Right);
    press(&mut app, Direction::Right);
    assert!(app.is_animating());

    app.next_tab();
    app.prev_tab();
    assert_eq!(app.view().state, NavState::Ready);

    press(&mut app, Direction::Right);
    press(&mut app, Direction::Right);
    settle(&mut app);
    assert!(!app.is_animating());
    assert_eq!(app.view().state, NavState::Ready);
}

#[test]
fn test_cancel_mid_animation_leaves_panel_usable() {
    let mut app = demo_app(&SlotpagerConfig::default());
    press(&mut app, Direction::Right);
    press(&mut app, Direction::Right);
    assert_eq!(app.view().state, NavState::Animating);

    app.send(InputEvent::Cancel);
    app.send(InputEvent::Confirm);
    assert!(app.panel().is_open());
    assert_eq!(app.view().state, NavState::Ready);

    press(&mut app, Direction::Right);
    press(&mut app, Direction::Right);
    settle(&mut app);
    assert_eq!(app.view().state, NavState::Ready);
}
