use egui::Vec2;

use super::{
    LayoutManager, LayoutMode, PanelDescriptor, PanelError, PanelEvent, PanelId, SizeBounds,
};

fn manager_with(viewport: Vec2, ids: &[&str]) -> LayoutManager<&'static str> {
    let mut manager = LayoutManager::new(viewport);
    for id in ids {
        manager
            .add_panel(PanelDescriptor::new(*id, id.to_uppercase(), "content"))
            .expect("unique id");
    }
    manager
}

fn id(s: &str) -> PanelId {
    PanelId::from(s)
}

#[test]
fn two_panels_in_auto_mode_split_the_viewport() {
    let manager = manager_with(egui::vec2(1000.0, 800.0), &["resume", "evaluation"]);

    let resume = manager.panel(&id("resume")).expect("resume");
    let evaluation = manager.panel(&id("evaluation")).expect("evaluation");
    assert_eq!(resume.position(), egui::pos2(20.0, 20.0));
    assert_eq!(evaluation.position(), egui::pos2(500.0, 20.0));
    assert_eq!(resume.size(), egui::vec2(480.0, 760.0));
    assert_eq!(evaluation.size(), egui::vec2(480.0, 760.0));
}

#[test]
fn four_panels_place_index_two_in_second_row_first_column() {
    let manager = manager_with(egui::vec2(1200.0, 900.0), &["a", "b", "c", "d"]);

    let c = manager.panel(&id("c")).expect("c");
    assert_eq!(c.position(), egui::pos2(20.0, 20.0 + 425.0 + 10.0));
    assert_eq!(c.size(), egui::vec2(575.0, 425.0));
}

#[test]
fn duplicate_id_is_rejected_without_partial_insert() {
    let mut manager = manager_with(egui::vec2(1000.0, 800.0), &["a", "b"]);
    let before: Vec<_> = manager.panels().map(|p| (p.id().clone(), p.rect())).collect();

    let err = manager
        .add_panel(PanelDescriptor::new("a", "again", "other"))
        .expect_err("duplicate");
    assert_eq!(err, PanelError::DuplicateId(id("a")));

    let after: Vec<_> = manager.panels().map(|p| (p.id().clone(), p.rect())).collect();
    assert_eq!(before, after);
    assert_eq!(manager.panel(&id("a")).map(|p| *p.content()), Some("content"));
}

#[test]
fn missing_ids_surface_not_found() {
    let mut manager = manager_with(egui::vec2(1000.0, 800.0), &["a"]);
    let ghost = id("ghost");

    assert_eq!(manager.remove_panel(&ghost).err(), Some(PanelError::NotFound(ghost.clone())));
    assert_eq!(
        manager.move_panel(&ghost, egui::pos2(0.0, 0.0)),
        Err(PanelError::NotFound(ghost.clone()))
    );
    assert_eq!(
        manager.resize_panel(&ghost, egui::vec2(10.0, 10.0)),
        Err(PanelError::NotFound(ghost.clone()))
    );
    assert_eq!(manager.expand(&ghost), Err(PanelError::NotFound(ghost.clone())));
    assert_eq!(manager.compress(&ghost), Err(PanelError::NotFound(ghost.clone())));
    assert_eq!(manager.bring_to_front(&ghost), Err(PanelError::NotFound(ghost.clone())));
    assert_eq!(
        PanelError::NotFound(ghost).to_string(),
        "no panel with id PanelId(\"ghost\")"
    );
}

#[test]
fn expanding_b_compresses_a() {
    let mut manager = manager_with(egui::vec2(1000.0, 800.0), &["a", "b"]);

    manager.expand(&id("a")).expect("a");
    assert!(manager.is_expanded(&id("a")));

    manager.expand(&id("b")).expect("b");
    assert!(!manager.is_expanded(&id("a")));
    assert!(manager.is_expanded(&id("b")));

    // Compressing a panel that is not expanded leaves the expansion alone.
    manager.compress(&id("a")).expect("a");
    assert_eq!(manager.expanded_panel_id(), Some(&id("b")));

    manager.compress(&id("b")).expect("b");
    assert_eq!(manager.expanded_panel_id(), None);
}

#[test]
fn expanded_panel_is_presented_full_viewport_and_restores() {
    let mut manager = manager_with(egui::vec2(1000.0, 800.0), &["a", "b"]);
    let stored = manager.panel(&id("a")).expect("a").rect();

    manager.expand(&id("a")).expect("a");
    let presented = manager.effective_rect(&id("a")).expect("a");
    assert_eq!(presented.min, egui::pos2(20.0, 20.0));
    assert_eq!(presented.size(), egui::vec2(960.0, 760.0));

    manager.compress(&id("a")).expect("a");
    assert_eq!(manager.effective_rect(&id("a")), Some(stored));
}

#[test]
fn removing_expanded_panel_clears_expansion_and_relayouts() {
    let mut manager = manager_with(egui::vec2(1000.0, 800.0), &["a", "b", "c"]);
    manager.expand(&id("b")).expect("b");

    let removed = manager.remove_panel(&id("b")).expect("b");
    assert_eq!(removed.into_content(), "content");
    assert_eq!(manager.expanded_panel_id(), None);
    assert_eq!(manager.len(), 2);

    // Remaining panels re-arranged as a two-column split, in insertion order.
    assert_eq!(manager.panel(&id("a")).expect("a").position(), egui::pos2(20.0, 20.0));
    assert_eq!(manager.panel(&id("c")).expect("c").position(), egui::pos2(500.0, 20.0));
}

#[test]
fn programmatic_move_is_clamped_to_viewport() {
    let mut manager = manager_with(egui::vec2(1000.0, 800.0), &["a"]);
    manager.resize_panel(&id("a"), egui::vec2(400.0, 300.0)).expect("a");

    assert_eq!(manager.move_panel(&id("a"), egui::pos2(-50.0, 900.0)), Ok(egui::pos2(0.0, 500.0)));
    assert_eq!(manager.panel(&id("a")).expect("a").position(), egui::pos2(0.0, 500.0));
}

#[test]
fn programmatic_resize_is_clamped_to_bounds() {
    let mut manager: LayoutManager<()> = LayoutManager::new(egui::vec2(1000.0, 800.0));
    let bounds = SizeBounds::new(egui::vec2(200.0, 150.0), egui::vec2(800.0, 600.0));
    manager
        .add_panel(PanelDescriptor::new("a", "A", ()).with_bounds(bounds))
        .expect("a");

    assert_eq!(manager.resize_panel(&id("a"), egui::vec2(50.0, 5000.0)), Ok(egui::vec2(200.0, 600.0)));
    assert!(bounds.contains(manager.panel(&id("a")).expect("a").size()));
}

#[test]
fn auto_layout_respects_panel_bounds() {
    let mut manager: LayoutManager<()> = LayoutManager::new(egui::vec2(1000.0, 800.0));
    let bounds = SizeBounds::new(egui::vec2(200.0, 150.0), egui::vec2(800.0, 600.0));
    manager
        .add_panel(PanelDescriptor::new("a", "A", ()).with_bounds(bounds))
        .expect("a");
    manager.add_panel(PanelDescriptor::new("b", "B", ())).expect("b");

    assert_eq!(manager.panel(&id("a")).expect("a").size(), egui::vec2(480.0, 600.0));
    assert_eq!(manager.panel(&id("b")).expect("b").size(), egui::vec2(480.0, 760.0));
}

#[test]
fn manual_modes_keep_geometry_when_count_changes() {
    let mut manager = manager_with(egui::vec2(1000.0, 800.0), &["a", "b"]);
    manager.set_layout_mode(LayoutMode::Vertical);
    let a_rect = manager.panel(&id("a")).expect("a").rect();
    assert_eq!(a_rect.size(), egui::vec2(960.0, 375.0));

    manager
        .add_panel(PanelDescriptor::new("c", "C", "content").with_position(egui::pos2(5.0, 5.0)))
        .expect("c");
    assert_eq!(manager.panel(&id("a")).expect("a").rect(), a_rect);
    assert_eq!(manager.panel(&id("c")).expect("c").position(), egui::pos2(5.0, 5.0));

    manager.set_layout_mode(LayoutMode::Auto);
    assert_eq!(manager.panel(&id("c")).expect("c").size().x, 960.0);
}

#[test]
fn relayout_follows_new_viewport() {
    let mut manager = manager_with(egui::vec2(1000.0, 800.0), &["a", "b"]);
    manager.set_viewport(egui::vec2(2000.0, 1000.0));
    assert_eq!(manager.panel(&id("b")).expect("b").position(), egui::pos2(500.0, 20.0));

    manager.relayout();
    assert_eq!(manager.panel(&id("b")).expect("b").position(), egui::pos2(1000.0, 20.0));
}

#[test]
fn draw_order_breaks_ties_by_recent_interaction() {
    let mut manager = manager_with(egui::vec2(1000.0, 800.0), &["a", "b", "c"]);
    assert_eq!(manager.draw_order(), vec![&id("a"), &id("b"), &id("c")]);

    manager.bring_to_front(&id("a")).expect("a");
    assert_eq!(manager.draw_order(), vec![&id("b"), &id("c"), &id("a")]);

    manager.set_z_index(&id("b"), 5000).expect("b");
    assert_eq!(manager.draw_order(), vec![&id("c"), &id("a"), &id("b")]);
}

#[test]
fn host_commands_do_not_queue_events() {
    let mut manager = manager_with(egui::vec2(1000.0, 800.0), &["a", "b"]);
    manager.move_panel(&id("a"), egui::pos2(1.0, 1.0)).expect("a");
    manager.expand(&id("b")).expect("b");
    manager.remove_panel(&id("a")).expect("a");
    assert_eq!(manager.drain_events(), Vec::<PanelEvent>::new());
}

#[test]
fn tighter_bounds_shrink_panel_in_place() {
    let mut manager = manager_with(egui::vec2(1000.0, 800.0), &["a", "b"]);
    let bounds = SizeBounds::new(egui::vec2(200.0, 150.0), egui::vec2(300.0, 300.0));

    assert_eq!(manager.set_bounds(&id("b"), bounds), Ok(egui::vec2(300.0, 300.0)));
    let b = manager.panel(&id("b")).expect("b");
    assert_eq!(b.bounds(), bounds);
    assert_eq!(b.position(), egui::pos2(500.0, 20.0));

    assert_eq!(manager.resize_panel(&id("b"), egui::vec2(1000.0, 1000.0)), Ok(egui::vec2(300.0, 300.0)));
    assert_eq!(
        manager.set_bounds(&id("ghost"), bounds),
        Err(PanelError::NotFound(id("ghost")))
    );
}

#[test]
fn growing_a_panel_pulls_it_back_inside_viewport() {
    let mut manager = manager_with(egui::vec2(1000.0, 800.0), &["a", "b"]);
    manager.move_panel(&id("b"), egui::pos2(500.0, 20.0)).expect("b");

    manager.resize_panel(&id("b"), egui::vec2(700.0, 760.0)).expect("b");
    assert_eq!(manager.panel(&id("b")).expect("b").rect().max.x, 1000.0);
    assert_eq!(manager.panel(&id("b")).expect("b").position(), egui::pos2(300.0, 20.0));
}

#[test]
fn panels_added_off_screen_are_clamped() {
    let mut manager = manager_with(egui::vec2(1000.0, 800.0), &["a"]);
    manager.set_layout_mode(LayoutMode::Vertical);

    manager
        .add_panel(
            PanelDescriptor::new("far", "Far", "content")
                .with_position(egui::pos2(5000.0, -40.0))
                .with_size(egui::vec2(400.0, 300.0)),
        )
        .expect("far");
    assert_eq!(manager.panel(&id("far")).expect("far").position(), egui::pos2(600.0, 0.0));
}
