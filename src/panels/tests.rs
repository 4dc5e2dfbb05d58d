use std::rc::Rc;

use super::*;
use crate::models::EntryId;
use crate::nav::{Direction, NavOutcome, WindowNavigator};
use crate::sources::InMemorySource;

fn inventory(count: u32) -> Rc<InMemorySource> {
    let mut source = InMemorySource::new();
    for id in 1..=count {
        source.push(Entry::new(EntryId::Item(id), 1), None);
    }
    Rc::new(source)
}

fn small_spec(remember_focus: bool) -> PanelSpec {
    PanelSpec {
        slots: 4,
        rows: 2,
        options: ChunkedOptions::default(),
        remember_focus,
    }
}

fn grid_panel(
    kind: PanelKind,
    spec: PanelSpec,
    source: &Rc<InMemorySource>,
) -> GridPanel<crate::nav::MemorySlot, Rc<InMemorySource>> {
    GridPanel::with_memory_slots(kind, spec, Rc::clone(source), source.dirty_flag()).unwrap()
}

fn focused_id<S: crate::nav::Slot, C: crate::sources::CatalogSource>(
    panel: &GridPanel<S, C>,
) -> Option<EntryId> {
    panel.focused_entry().map(|e| e.id)
}

fn press(panel: &mut dyn Panel, direction: Direction) -> PanelResponse {
    panel.handle_input(InputEvent::Move(direction)).unwrap()
}

// ============================================================================
// Grid panels
// ============================================================================

#[test]
fn test_inventory_restores_focus_by_id() {
    let source = inventory(10);
    let mut panel = grid_panel(PanelKind::Inventory, small_spec(true), &source);
    panel.open_panel().unwrap();
    assert_eq!(focused_id(&panel), Some(EntryId::Item(1)));

    press(&mut panel, Direction::Right);
    assert_eq!(
        press(&mut panel, Direction::Right),
        PanelResponse::Nav(NavOutcome::PageChanged { page: 1, focus: 0 })
    );
    press(&mut panel, Direction::Down);
    assert_eq!(focused_id(&panel), Some(EntryId::Item(7)));
    panel.close_panel();
    assert_eq!(panel.snapshot().last_slot_index, Some(2));

    // Item 1 is used up while the panel is hidden, shifting everything left
    assert!(source.consume(&EntryId::Item(1)));
    panel.open_panel().unwrap();
    assert_eq!(focused_id(&panel), Some(EntryId::Item(7)));
    assert_eq!(panel.navigator().page(), 1);
    assert_eq!(panel.navigator().focus(), Some(1));
}

#[test]
fn test_inventory_falls_back_to_slot_index() {
    let source = inventory(10);
    let mut panel = grid_panel(PanelKind::Inventory, small_spec(true), &source);
    panel.open_panel().unwrap();
    press(&mut panel, Direction::Down);
    press(&mut panel, Direction::Right);
    assert_eq!(focused_id(&panel), Some(EntryId::Item(4)));
    panel.close_panel();

    assert!(source.consume(&EntryId::Item(4)));
    panel.open_panel().unwrap();
    // The remembered slot index is reused as a catalog index
    assert_eq!(focused_id(&panel), Some(EntryId::Item(5)));
}

#[test]
fn test_panel_without_memory_opens_at_start() {
    let source = inventory(10);
    let mut panel = grid_panel(PanelKind::Inventory, small_spec(false), &source);
    panel.open_panel().unwrap();
    press(&mut panel, Direction::Down);
    panel.close_panel();
    panel.open_panel().unwrap();
    assert_eq!(panel.navigator().page(), 0);
    assert_eq!(panel.navigator().focus(), Some(0));
    assert_eq!(panel.snapshot(), crate::nav::FocusSnapshot::default());
}

#[test]
fn test_dirty_flag_refreshes_before_input() {
    let source = inventory(6);
    let mut panel = grid_panel(PanelKind::Inventory, small_spec(true), &source);
    panel.open_panel().unwrap();

    assert!(source.consume(&EntryId::Item(2)));
    assert_eq!(
        press(&mut panel, Direction::Right),
        PanelResponse::Nav(NavOutcome::FocusMoved {
            from: Some(0),
            to: 1
        })
    );
    assert_eq!(focused_id(&panel), Some(EntryId::Item(3)));
    assert_eq!(panel.navigator().catalog().len(), 5);
    assert!(!panel.refresh_if_dirty().unwrap());
}

#[test]
fn test_confirm_and_cancel() {
    let source = inventory(3);
    let mut panel = grid_panel(PanelKind::Inventory, small_spec(true), &source);
    assert_eq!(
        panel.handle_input(InputEvent::Confirm).unwrap(),
        PanelResponse::Ignored
    );

    panel.open_panel().unwrap();
    press(&mut panel, Direction::Right);
    assert_eq!(
        panel.handle_input(InputEvent::Confirm).unwrap(),
        PanelResponse::Confirmed(Entry::new(EntryId::Item(2), 1))
    );
    assert_eq!(
        panel.handle_input(InputEvent::Cancel).unwrap(),
        PanelResponse::Closed
    );
    assert!(!panel.is_open());
    assert_eq!(panel.snapshot().last_entry_id, Some(EntryId::Item(2)));
}

#[test]
fn test_empty_inventory() {
    let source = inventory(1);
    source.consume(&EntryId::Item(1));
    let mut panel = grid_panel(PanelKind::Inventory, small_spec(true), &source);
    panel.open_panel().unwrap();

    assert_eq!(panel.navigator().focus(), None);
    assert!(panel.view().cells.iter().all(Option::is_none));
    assert_eq!(
        press(&mut panel, Direction::Left),
        PanelResponse::Nav(NavOutcome::Ignored)
    );
    assert_eq!(
        panel.handle_input(InputEvent::Confirm).unwrap(),
        PanelResponse::Ignored
    );
}

#[test]
fn test_weapon_panel_lists_one_class() {
    let source = Rc::new(InMemorySource::demo());
    let spec = PanelSpec::defaults_for(PanelKind::Weapons(WeaponClass::Shooter));
    let mut panel = grid_panel(PanelKind::Weapons(WeaponClass::Shooter), spec, &source);
    panel.open_panel().unwrap();

    assert_eq!(panel.navigator().catalog().len(), 7);
    assert_eq!(panel.navigator().total_pages(), 2);
    let view = panel.view();
    assert_eq!(view.title, "Shooters");
    assert_eq!(view.position, "1/2");
    assert_eq!(
        view.cells[0].as_ref().map(|c| c.label.as_str()),
        Some("Pellet Gun")
    );
    assert!(view.cells[0].as_ref().is_some_and(|c| c.focused));
}

#[test]
fn test_bestiary_view_shows_kill_count() {
    let source = Rc::new(InMemorySource::demo());
    let spec = PanelSpec::defaults_for(PanelKind::Bestiary);
    let mut panel = grid_panel(PanelKind::Bestiary, spec, &source);
    panel.open_panel().unwrap();
    let first = panel.view().cells[0].clone().unwrap();
    assert_eq!(first.label, "Slime");
    assert_eq!(first.detail.as_deref(), Some("x14"));
}

#[test]
fn test_input_deferred_during_animation() {
    let source = inventory(10);
    let mut panel = grid_panel(PanelKind::Inventory, small_spec(true), &source);
    panel.open_panel().unwrap();
    panel.begin_animation();
    assert_eq!(panel.view().state, crate::nav::NavState::Animating);
    assert_eq!(
        press(&mut panel, Direction::Down),
        PanelResponse::Nav(NavOutcome::Deferred)
    );
    assert_eq!(
        panel.finish_animation(),
        Some(NavOutcome::FocusMoved {
            from: Some(0),
            to: 2
        })
    );
}

#[test]
fn test_grid_panel_rejects_file_browser_kind() {
    let source = inventory(3);
    let result = GridPanel::with_memory_slots(
        PanelKind::Save,
        small_spec(false),
        Rc::clone(&source),
        source.dirty_flag(),
    );
    assert_eq!(
        result.err(),
        Some(GridError::NoEntryKind {
            panel: "save".to_string()
        })
    );
}

#[test]
fn test_close_during_animation_reopens_ready() {
    let source = inventory(10);
    let mut panel = grid_panel(PanelKind::Inventory, small_spec(true), &source);
    panel.open_panel().unwrap();
    panel.begin_animation();
    press(&mut panel, Direction::Right);
    panel.close_panel();

    panel.open_panel().unwrap();
    assert_eq!(panel.view().state, crate::nav::NavState::Ready);
    assert_eq!(panel.finish_animation(), None);
    assert_eq!(
        press(&mut panel, Direction::Right),
        PanelResponse::Nav(NavOutcome::FocusMoved {
            from: Some(0),
            to: 1
        })
    );
}

#[test]
fn test_refresh_during_animation_keeps_input_live() {
    let source = inventory(10);
    let mut panel = grid_panel(PanelKind::Inventory, small_spec(true), &source);
    panel.open_panel().unwrap();
    panel.begin_animation();

    assert!(source.consume(&EntryId::Item(9)));
    assert!(panel.refresh().unwrap());
    assert_eq!(panel.view().state, crate::nav::NavState::Ready);
    assert!(matches!(
        press(&mut panel, Direction::Down),
        PanelResponse::Nav(NavOutcome::FocusMoved { .. })
    ));
}

// ============================================================================
// Save/load browser
// ============================================================================

fn saves(last_used: i32, playtimes: &[(i32, u64)]) -> Rc<InMemorySource> {
    let source = playtimes
        .iter()
        .fold(InMemorySource::new(), |s, &(file, t)| s.with_save(file, t))
        .with_last_used_file(last_used);
    Rc::new(source)
}

fn browser(
    mode: SaveMode,
    source: &Rc<InMemorySource>,
) -> SaveLoadPanel<crate::nav::MemorySlot, Rc<InMemorySource>> {
    SaveLoadPanel::with_memory_slots(mode, SaveLoadSpec::default(), Rc::clone(source)).unwrap()
}

#[test]
fn test_save_mode_skips_autosave() {
    let source = saves(0, &[(0, 9_999), (2, 100), (5, 7_200), (9, 7_200)]);
    let mut panel = browser(SaveMode::Save, &source);
    assert_eq!(panel.initial_file(), 5);

    panel.open_panel().unwrap();
    assert_eq!(panel.navigator().catalog().len(), 12);
    assert_eq!(panel.navigator().top(), 4);
    assert_eq!(panel.focused_file(), Some(5));
}

#[test]
fn test_save_mode_without_data_starts_at_file_one() {
    let source = saves(0, &[(0, 300), (3, 0)]);
    let panel = browser(SaveMode::Save, &source);
    assert_eq!(panel.initial_file(), 1);
}

#[test]
fn test_load_mode_opens_on_autosave_and_wraps() {
    let source = saves(0, &[(0, 60)]);
    let mut panel = browser(SaveMode::Load, &source);
    panel.open_panel().unwrap();
    assert_eq!(panel.navigator().catalog().len(), 13);
    assert_eq!(panel.focused_file(), Some(0));

    assert_eq!(
        press(&mut panel, Direction::Up),
        PanelResponse::Nav(NavOutcome::WindowSlid { top: 10, focus: 2 })
    );
    assert_eq!(panel.focused_file(), Some(12));
}

#[test]
fn test_last_files_keep_window_full() {
    for (last, top, focus) in [(12, 10, 2), (11, 10, 1), (10, 10, 0), (4, 4, 0)] {
        let source = saves(last, &[]);
        let mut panel = browser(SaveMode::Load, &source);
        panel.open_panel().unwrap();
        assert_eq!(panel.navigator().top(), top, "last used {last}");
        assert_eq!(panel.navigator().focus(), Some(focus), "last used {last}");
    }
}

#[test]
fn test_out_of_range_last_file_is_clamped() {
    let source = saves(40, &[]);
    let mut panel = browser(SaveMode::Save, &source);
    panel.open_panel().unwrap();
    assert_eq!(panel.focused_file(), Some(12));
}

#[test]
fn test_browser_view_labels() {
    let source = saves(1, &[(0, 3_725), (2, 0)]);
    let mut panel = browser(SaveMode::Load, &source);
    panel.open_panel().unwrap();

    let view = panel.view();
    assert_eq!(view.position, "2-4 of 13");
    let cells: Vec<_> = view.cells.into_iter().map(|c| c.unwrap()).collect();
    assert_eq!(cells[0].label, "File 1");
    assert_eq!(cells[0].detail.as_deref(), Some("no data"));
    assert!(cells[0].focused);
    assert_eq!(cells[1].detail.as_deref(), Some("no data"));

    panel.open_panel().unwrap();
    press(&mut panel, Direction::Up);
    let view = panel.view();
    let autosave = view.cells[0].clone().unwrap();
    assert_eq!(autosave.label, "Autosave");
    assert_eq!(autosave.detail.as_deref(), Some("Playtime 1:02"));
}

#[test]
fn test_browser_confirm_returns_file() {
    let source = saves(3, &[]);
    let mut panel = browser(SaveMode::Save, &source);
    panel.open_panel().unwrap();
    assert_eq!(
        panel.handle_input(InputEvent::Confirm).unwrap(),
        PanelResponse::Confirmed(Entry::new(EntryId::SaveFile(3), 0))
    );
}

#[test]
fn test_browser_close_during_animation_reopens_ready() {
    let source = saves(0, &[(1, 60), (2, 120)]);
    let mut panel = browser(SaveMode::Load, &source);
    panel.open_panel().unwrap();
    panel.begin_animation();
    assert_eq!(
        press(&mut panel, Direction::Down),
        PanelResponse::Nav(NavOutcome::Deferred)
    );
    assert_eq!(
        panel.handle_input(InputEvent::Cancel).unwrap(),
        PanelResponse::Closed
    );

    panel.open_panel().unwrap();
    assert_eq!(panel.view().state, crate::nav::NavState::Ready);
    assert_eq!(panel.finish_animation(), None);
    assert!(matches!(
        press(&mut panel, Direction::Down),
        PanelResponse::Nav(NavOutcome::FocusMoved { .. })
    ));
}

#[test]
fn test_playtime_label() {
    assert_eq!(save_load::playtime_label(Some(59)), "Playtime 0:00");
    assert_eq!(save_load::playtime_label(Some(36_000 + 540)), "Playtime 10:09");
    assert_eq!(save_load::playtime_label(Some(0)), "no data");
    assert_eq!(save_load::playtime_label(None), "no data");
}

// ============================================================================
// Panel kinds
// ============================================================================

#[test]
fn test_panel_kind_names_round_trip() {
    for kind in PanelKind::all() {
        assert_eq!(kind.key().parse::<PanelKind>(), Ok(*kind));
    }
    assert!("armor".parse::<PanelKind>().is_err());
}

#[test]
fn test_panel_kind_cycles() {
    assert_eq!(PanelKind::Load.next(), PanelKind::Inventory);
    assert_eq!(PanelKind::Inventory.prev(), PanelKind::Load);
    assert_eq!(
        PanelKind::Inventory.next(),
        PanelKind::Weapons(WeaponClass::Blade)
    );
}

#[test]
fn test_default_specs_are_valid() {
    for kind in PanelKind::all() {
        assert!(PanelSpec::defaults_for(*kind).validate().is_ok());
    }
    assert_eq!(PanelSpec::defaults_for(PanelKind::Inventory).columns(), 2);
}

// ============================================================================
// Panel construction from config
// ============================================================================

#[test]
fn test_build_panel_uses_config_layout() {
    let source = Rc::new(InMemorySource::demo());
    let config = SlotpagerConfig::default();
    let mut panel = build_panel(PanelKind::Inventory, &config, &source).unwrap();
    panel.open_panel().unwrap();

    let view = panel.view();
    assert_eq!(view.title, "Items");
    assert_eq!(view.cells.len(), 10);
    assert_eq!(view.columns, 2);
    // Ether and Elixir are out of stock and hidden
    assert_eq!(view.position, "1/2");
}

#[test]
fn test_refresh_picks_up_consumed_item() {
    let source = Rc::new(InMemorySource::demo());
    let config = SlotpagerConfig::default();
    let mut panel = build_panel(PanelKind::Inventory, &config, &source).unwrap();
    panel.open_panel().unwrap();
    let potion = panel.focused().unwrap();
    assert_eq!(potion.quantity, 5);

    assert!(source.consume(&potion.id));
    assert!(panel.refresh().unwrap());
    assert_eq!(panel.focused().map(|e| e.quantity), Some(4));
    assert_eq!(
        panel.view().cells[0].as_ref().and_then(|c| c.detail.clone()),
        Some("x4".to_string())
    );
    assert!(!panel.refresh().unwrap());
}

#[test]
fn test_build_file_browser_opens_on_last_used() {
    let source = Rc::new(InMemorySource::demo());
    let mut panel = build_panel(PanelKind::Load, &SlotpagerConfig::default(), &source).unwrap();
    panel.open_panel().unwrap();
    assert_eq!(panel.focused(), Some(Entry::new(EntryId::SaveFile(4), 0)));
    assert!(!panel.refresh().unwrap());
}

// ============================================================================
// Sell list
// ============================================================================

fn shop() -> Rc<InMemorySource> {
    let mut source = InMemorySource::new();
    for id in 1..=7 {
        let blade = EntryId::Weapon {
            class: WeaponClass::Blade,
            id,
        };
        source.push(Entry::new(blade, 1), None);
    }
    for (id, owned) in [(1, 0), (2, 1)] {
        let shooter = EntryId::Weapon {
            class: WeaponClass::Shooter,
            id,
        };
        source.push(Entry::new(shooter, owned), None);
    }
    for id in 1..=6 {
        source.push(Entry::new(EntryId::Item(id), 2), None);
    }
    Rc::new(source)
}

fn sell_list(
    source: &Rc<InMemorySource>,
) -> SellPanel<crate::nav::MemorySlot, Rc<InMemorySource>> {
    SellPanel::with_memory_slots(
        PanelSpec::defaults_for(PanelKind::Sell),
        Rc::clone(source),
        source.dirty_flag(),
    )
    .unwrap()
}

fn blade(id: u32) -> Option<EntryId> {
    Some(EntryId::Weapon {
        class: WeaponClass::Blade,
        id,
    })
}

#[test]
fn test_sell_list_pages_without_wrapping() {
    let source = shop();
    let mut panel = sell_list(&source);
    panel.open_panel().unwrap();
    assert_eq!(panel.focused().map(|e| e.id), blade(1));
    assert_eq!(panel.view().title, "Sell: Blades");
    assert_eq!(panel.view().position, "Blades 1/2");

    assert_eq!(
        press(&mut panel, Direction::Up),
        PanelResponse::Nav(NavOutcome::Blocked)
    );
    for _ in 0..4 {
        press(&mut panel, Direction::Down);
    }
    assert_eq!(
        press(&mut panel, Direction::Down),
        PanelResponse::Nav(NavOutcome::PageChanged { page: 1, focus: 0 })
    );
    assert_eq!(panel.focused().map(|e| e.id), blade(6));
    press(&mut panel, Direction::Down);
    assert_eq!(
        press(&mut panel, Direction::Down),
        PanelResponse::Nav(NavOutcome::Blocked)
    );
    assert_eq!(panel.focused().map(|e| e.id), blade(7));

    press(&mut panel, Direction::Up);
    assert_eq!(
        press(&mut panel, Direction::Up),
        PanelResponse::Nav(NavOutcome::PageChanged { page: 0, focus: 4 })
    );
    assert_eq!(panel.focused().map(|e| e.id), blade(5));
}

#[test]
fn test_sell_tabs_keep_their_page() {
    let source = shop();
    let mut panel = sell_list(&source);
    panel.open_panel().unwrap();
    for _ in 0..5 {
        press(&mut panel, Direction::Down);
    }
    assert_eq!(panel.page_of(SELL_TABS[0]), 1);

    // Unowned shooters are not listed
    assert_eq!(
        press(&mut panel, Direction::Right),
        PanelResponse::TabChanged(EntryKind::Weapon(WeaponClass::Shooter))
    );
    assert_eq!(panel.navigator().catalog().len(), 1);
    assert_eq!(panel.view().position, "Shooters 1/1");

    press(&mut panel, Direction::Right);
    assert_eq!(panel.tab(), EntryKind::Item);
    assert_eq!(
        press(&mut panel, Direction::Right),
        PanelResponse::TabChanged(EntryKind::Weapon(WeaponClass::Blade))
    );
    // Back on the stored page, focus on top
    assert_eq!(panel.navigator().page(), 1);
    assert_eq!(panel.focused().map(|e| e.id), blade(6));

    assert_eq!(
        press(&mut panel, Direction::Left),
        PanelResponse::TabChanged(EntryKind::Item)
    );

    panel.close_panel();
    panel.open_panel().unwrap();
    assert_eq!(panel.tab(), SELL_TABS[0]);
    assert_eq!(panel.page_of(SELL_TABS[0]), 0);
    assert_eq!(panel.focused().map(|e| e.id), blade(1));
}

#[test]
fn test_sell_list_drops_sold_out_entry() {
    let source = shop();
    let mut panel = sell_list(&source);
    panel.open_panel().unwrap();
    press(&mut panel, Direction::Left);
    assert_eq!(panel.tab(), EntryKind::Item);
    press(&mut panel, Direction::Down);
    assert_eq!(panel.focused().map(|e| e.id), Some(EntryId::Item(2)));

    assert!(source.consume(&EntryId::Item(2)));
    assert!(source.consume(&EntryId::Item(2)));
    assert!(panel.refresh().unwrap());
    assert_eq!(panel.navigator().catalog().len(), 5);
    assert_eq!(panel.focused().map(|e| e.id), Some(EntryId::Item(3)));
    assert_eq!(
        panel.handle_input(InputEvent::Confirm).unwrap(),
        PanelResponse::Confirmed(Entry::new(EntryId::Item(3), 2))
    );
}

#[test]
fn test_build_sell_panel_from_demo() {
    let source = Rc::new(InMemorySource::demo());
    let mut panel = build_panel(PanelKind::Sell, &SlotpagerConfig::default(), &source).unwrap();
    panel.open_panel().unwrap();
    let view = panel.view();
    assert_eq!(view.columns, 1);
    assert_eq!(view.position, "Blades 1/1");
    assert_eq!(view.cells[0].as_ref().map(|c| c.label.as_str()), Some("Short Sword"));
}
