//! Controller tests over the in-memory backend and a recording renderer.

use pretty_assertions::assert_eq;

use super::{ListController, ListRenderer};
use crate::config::ChecklistConfig;
use crate::domain::{Item, ItemId};
use crate::repository::{KeyValueStore, ListStore, MemoryStore};

const SELECTED: &str = "selected";
const OPTION: &str = "option";

/// Captures every render call as (list, texts)
#[derive(Debug, Default)]
struct RecordingRenderer {
    renders: Vec<(String, Vec<Item>)>,
}

impl RecordingRenderer {
    fn last(&self, list: &str) -> Option<&Vec<Item>> {
        self.renders.iter().rev().find(|(l, _)| l == list).map(|(_, items)| items)
    }
}

impl ListRenderer for RecordingRenderer {
    fn render_list(&mut self, list: &str, items: &[Item]) {
        self.renders.push((list.to_string(), items.to_vec()));
    }
}

type Controller = ListController<MemoryStore, RecordingRenderer>;

fn setup() -> Controller {
    let config = ChecklistConfig::default();
    let store = ListStore::new(MemoryStore::new(), config.storage_prefix.clone());
    ListController::new(store, RecordingRenderer::default(), &config)
}

/// Controller with `[A, B, C]` (item-1..item-3) in `selected`
fn setup_abc() -> Controller {
    let mut ctrl = setup();
    for text in ["A", "B", "C"] {
        ctrl.add(SELECTED, text);
    }
    ctrl
}

fn texts(ctrl: &Controller, list: &str) -> Vec<String> {
    ctrl.items(list).into_iter().map(|i| i.text).collect()
}

fn id(n: u64) -> ItemId {
    ItemId::from_sequence(n)
}

#[test]
fn test_add_returns_unique_increasing_ids() {
    let mut ctrl = setup();
    let ids: Vec<ItemId> = (0..5).map(|i| ctrl.add(SELECTED, &format!("x{i}")).unwrap()).collect();
    for pair in ids.windows(2) {
        assert!(pair[0].sequence() < pair[1].sequence());
    }
}

#[test]
fn test_ids_unique_across_lists() {
    let mut ctrl = setup();
    let a = ctrl.add(SELECTED, "a").unwrap();
    let b = ctrl.add(OPTION, "b").unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_add_appends_in_order_and_trims() {
    let mut ctrl = setup();
    ctrl.add(SELECTED, "  x ");
    ctrl.add(SELECTED, "y");
    assert_eq!(texts(&ctrl, SELECTED), vec!["x", "y"]);
}

#[test]
fn test_add_blank_is_noop() {
    let mut ctrl = setup();
    assert_eq!(ctrl.add(SELECTED, "   "), None);
    assert!(ctrl.items(SELECTED).is_empty());
    assert_eq!(ctrl.store().last_item_id(), 0);
    assert!(ctrl.renderer().renders.is_empty());
}

#[test]
fn test_add_renders_fresh_state() {
    let mut ctrl = setup();
    ctrl.add(SELECTED, "x");
    let rendered = ctrl.renderer().last(SELECTED).unwrap();
    assert_eq!(rendered, &vec![Item::new(id(1), "x")]);
}

#[test]
fn test_edit_replaces_text_in_place() {
    let mut ctrl = setup_abc();
    assert!(ctrl.edit(SELECTED, &id(2), "  Bee "));
    assert_eq!(texts(&ctrl, SELECTED), vec!["A", "Bee", "C"]);
}

#[test]
fn test_edit_to_blank_removes() {
    let mut ctrl = setup_abc();
    assert!(ctrl.edit(SELECTED, &id(2), "   "));
    assert_eq!(texts(&ctrl, SELECTED), vec!["A", "C"]);
}

#[test]
fn test_edit_missing_id_is_noop_and_reconciles() {
    let mut ctrl = setup_abc();
    let before = ctrl.renderer().renders.len();
    assert!(!ctrl.edit(SELECTED, &id(99), "z"));
    assert_eq!(texts(&ctrl, SELECTED), vec!["A", "B", "C"]);
    assert_eq!(ctrl.renderer().renders.len(), before + 1);
}

#[test]
fn test_remove() {
    let mut ctrl = setup_abc();
    assert!(ctrl.remove(SELECTED, &id(1)));
    assert_eq!(texts(&ctrl, SELECTED), vec!["B", "C"]);
    assert!(!ctrl.remove(SELECTED, &id(1)));
}

#[test]
fn test_reorder_first_to_last() {
    let mut ctrl = setup_abc();
    assert!(ctrl.move_item(SELECTED, SELECTED, &id(1), 2));
    assert_eq!(texts(&ctrl, SELECTED), vec!["B", "C", "A"]);
}

#[test]
fn test_reorder_last_to_first() {
    let mut ctrl = setup_abc();
    assert!(ctrl.move_item(SELECTED, SELECTED, &id(3), 0));
    assert_eq!(texts(&ctrl, SELECTED), vec!["C", "A", "B"]);
}

#[test]
fn test_self_move_keeps_order_but_persists_and_renders() {
    let mut ctrl = setup_abc();
    let before = ctrl.renderer().renders.len();
    assert!(ctrl.move_item(SELECTED, SELECTED, &id(2), 1));
    assert_eq!(texts(&ctrl, SELECTED), vec!["A", "B", "C"]);
    assert_eq!(ctrl.renderer().renders.len(), before + 1);
}

#[test]
fn test_reorder_renders_list_once() {
    let mut ctrl = setup_abc();
    let before = ctrl.renderer().renders.len();
    ctrl.move_item(SELECTED, SELECTED, &id(1), 1);
    assert_eq!(ctrl.renderer().renders.len(), before + 1);
}

#[test]
fn test_cross_move_without_retention() {
    let mut ctrl = setup_abc();
    ctrl.add(OPTION, "X");
    ctrl.add(OPTION, "Y");

    assert!(ctrl.move_item(SELECTED, OPTION, &id(2), 1));

    assert_eq!(texts(&ctrl, SELECTED), vec!["A", "C"]);
    assert_eq!(texts(&ctrl, OPTION), vec!["X", "B", "Y"]);
    let moved = &ctrl.items(OPTION)[1];
    assert_eq!(moved.id, id(2));
}

#[test]
fn test_cross_move_with_retention() {
    let mut ctrl = setup_abc();
    assert!(ctrl.set_retain_on_move(SELECTED, true));

    assert!(ctrl.move_item(SELECTED, OPTION, &id(1), 0));

    assert_eq!(texts(&ctrl, SELECTED), vec!["A", "B", "C"]);
    assert_eq!(ctrl.items(OPTION), vec![Item::new(id(1), "A")]);
}

#[test]
fn test_retention_is_read_from_source_list() {
    let mut ctrl = setup_abc();
    ctrl.set_retain_on_move(OPTION, true);
    ctrl.move_item(SELECTED, OPTION, &id(1), 0);
    assert_eq!(texts(&ctrl, SELECTED), vec!["B", "C"]);
}

#[test]
fn test_cross_move_into_empty_list_past_end() {
    let mut ctrl = setup_abc();
    ctrl.move_item(SELECTED, OPTION, &id(3), 10);
    assert_eq!(texts(&ctrl, OPTION), vec!["C"]);
}

#[test]
fn test_cross_move_renders_both_lists() {
    let mut ctrl = setup_abc();
    let before = ctrl.renderer().renders.len();
    ctrl.move_item(SELECTED, OPTION, &id(1), 0);

    let renders = &ctrl.renderer().renders[before..];
    let lists: Vec<&str> = renders.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(lists, vec![SELECTED, OPTION]);
    assert_eq!(renders[1].1, vec![Item::new(id(1), "A")]);
}

#[test]
fn test_move_back_over_retained_copy_keeps_single_entry() {
    let mut ctrl = setup_abc();
    ctrl.set_retain_on_move(SELECTED, true);
    ctrl.move_item(SELECTED, OPTION, &id(1), 0);

    // item-1 now lives in both lists; moving it back replaces the stale copy
    ctrl.move_item(OPTION, SELECTED, &id(1), 2);

    assert_eq!(texts(&ctrl, SELECTED), vec!["B", "C", "A"]);
    assert!(ctrl.items(OPTION).is_empty());
}

#[test]
fn test_move_missing_id_is_noop() {
    let mut ctrl = setup_abc();
    assert!(!ctrl.move_item(OPTION, SELECTED, &id(1), 0));
    assert_eq!(texts(&ctrl, SELECTED), vec!["A", "B", "C"]);
    assert!(ctrl.items(OPTION).is_empty());
}

#[test]
fn test_order_survives_reload() {
    let mut ctrl = setup_abc();
    ctrl.move_item(SELECTED, SELECTED, &id(3), 0);

    let config = ChecklistConfig::default();
    let backend = ctrl.store().backend().clone();
    let mut reloaded = ListController::new(
        ListStore::new(backend, config.storage_prefix.clone()),
        RecordingRenderer::default(),
        &config,
    );
    reloaded.render_all();

    assert_eq!(texts(&reloaded, SELECTED), vec!["C", "A", "B"]);
    assert_eq!(reloaded.renderer().renders.len(), 2);
    assert_eq!(reloaded.add(SELECTED, "D"), Some(id(4)));
}

#[test]
fn test_corrupt_list_degrades_to_empty() {
    let mut ctrl = setup();
    let mut backend = ctrl.store().backend().clone();
    backend.set("sns-selected-items", "{{{{").unwrap();
    ctrl = ListController::new(
        ListStore::new(backend, "sns-"),
        RecordingRenderer::default(),
        &ChecklistConfig::default(),
    );

    assert!(ctrl.items(SELECTED).is_empty());
    // the next write replaces the corrupt value
    ctrl.add(SELECTED, "fresh");
    assert_eq!(texts(&ctrl, SELECTED), vec!["fresh"]);
}

#[test]
fn test_clear_list() {
    let mut ctrl = setup_abc();
    ctrl.add(OPTION, "X");
    assert!(ctrl.clear(SELECTED));
    assert!(ctrl.items(SELECTED).is_empty());
    assert_eq!(texts(&ctrl, OPTION), vec!["X"]);
    assert_eq!(ctrl.renderer().last(SELECTED), Some(&vec![]));
}

#[test]
fn test_clear_all_renders_every_list() {
    let mut ctrl = setup_abc();
    ctrl.add(OPTION, "X");
    let before = ctrl.renderer().renders.len();

    assert!(ctrl.clear_all());

    assert!(ctrl.items(SELECTED).is_empty());
    assert!(ctrl.items(OPTION).is_empty());
    assert_eq!(ctrl.renderer().renders.len(), before + 2);
}

#[test]
fn test_add_after_counter_loss_keeps_existing_items() {
    let mut ctrl = setup_abc();
    ctrl.store.backend_mut().set("sns-last-item-id", "garbage").unwrap();

    let added = ctrl.add(SELECTED, "D");

    assert_eq!(added, Some(id(4)));
    assert_eq!(texts(&ctrl, SELECTED), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_add_skips_ids_held_by_other_lists() {
    let mut ctrl = setup_abc();
    ctrl.move_item(SELECTED, OPTION, &id(3), 0);
    ctrl.store.backend_mut().remove("sns-last-item-id").unwrap();

    assert_eq!(ctrl.add(SELECTED, "D"), Some(id(4)));
    assert_eq!(texts(&ctrl, OPTION), vec!["C"]);
}

#[test]
fn test_add_with_exhausted_counter_fails_and_reconciles() {
    let mut ctrl = setup_abc();
    let max = u64::MAX.to_string();
    ctrl.store.backend_mut().set("sns-last-item-id", &max).unwrap();
    let before = ctrl.renderer().renders.len();

    assert_eq!(ctrl.add(SELECTED, "x"), None);

    assert_eq!(texts(&ctrl, SELECTED), vec!["A", "B", "C"]);
    assert_eq!(ctrl.renderer().renders.len(), before + 1);
    assert_eq!(ctrl.renderer().last(SELECTED).map(Vec::len), Some(3));
}

#[test]
fn test_clear_all_resets_retention() {
    let mut ctrl = setup_abc();
    ctrl.set_retain_on_move(SELECTED, true);

    ctrl.clear_all();
    assert!(!ctrl.retain_on_move(SELECTED));

    // a move after the reset no longer keeps the source copy
    let a = ctrl.add(SELECTED, "A").unwrap();
    ctrl.move_item(SELECTED, OPTION, &a, 0);
    assert!(ctrl.items(SELECTED).is_empty());
    assert_eq!(texts(&ctrl, OPTION), vec!["A"]);
}
