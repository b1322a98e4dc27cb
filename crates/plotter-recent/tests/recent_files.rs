//! Behavior tests for the recent files list.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use plotter_prefs::{FilePreferences, MemoryPreferences, PreferenceStore};
use plotter_recent::{
    DEFAULT_MAX_FILES, FILES_KEY, RecentFiles, RecentFilesError, namespace_for,
};
use tempfile::tempdir;

const LABEL: &str = "Reopen";

fn files(recent: &RecentFiles) -> Vec<String> {
    recent.files().map(str::to_string).collect()
}

fn fresh() -> (MemoryPreferences, RecentFiles) {
    let store = MemoryPreferences::new();
    let recent = RecentFiles::load(LABEL, Arc::new(store.clone())).unwrap();
    (store, recent)
}

#[test]
fn added_path_becomes_most_recent() {
    let (_, mut recent) = fresh();
    recent.add_path("a.svg").unwrap();
    assert_eq!(recent.get_file(0).unwrap(), "a.svg");
    recent.add_path("b.svg").unwrap();
    assert_eq!(recent.get_file(0).unwrap(), "b.svg");
    assert_eq!(files(&recent), vec!["b.svg", "a.svg"]);
}

#[test]
fn duplicate_add_promotes_without_growing() {
    let (_, mut recent) = fresh();
    recent.add_path("a").unwrap();
    recent.add_path("b").unwrap();
    assert_eq!(files(&recent), vec!["b", "a"]);

    recent.add_path("a").unwrap();

    assert_eq!(files(&recent), vec!["a", "b"]);
    assert_eq!(recent.count(), 2);
}

#[test]
fn duplicates_are_case_sensitive() {
    let (_, mut recent) = fresh();
    recent.add_path("a.svg").unwrap();
    recent.add_path("A.svg").unwrap();
    assert_eq!(recent.count(), 2);
}

#[test]
fn capacity_evicts_oldest() {
    let (_, mut recent) = fresh();
    assert_eq!(recent.max_files(), DEFAULT_MAX_FILES);

    for i in 0..=DEFAULT_MAX_FILES {
        recent.add_path(&format!("file{i}.svg")).unwrap();
    }

    assert_eq!(recent.count(), DEFAULT_MAX_FILES);
    assert_eq!(recent.get_file(0).unwrap(), "file10.svg");
    assert_eq!(recent.get_file(9).unwrap(), "file1.svg");
    assert!(!recent.contains("file0.svg"));
}

#[test]
fn count_tracks_unique_paths_below_capacity() {
    let (_, mut recent) = fresh();
    for path in ["a", "b", "c", "b", "a", "d"] {
        recent.add_path(path).unwrap();
    }
    assert_eq!(recent.count(), 4);
    assert_eq!(files(&recent), vec!["d", "a", "b", "c"]);
}

#[test]
fn blank_and_absent_paths_are_ignored() {
    let (store, mut recent) = fresh();
    recent.add_path("").unwrap();
    recent.add_path("   ").unwrap();
    recent.add_path("\t\n").unwrap();
    recent.add_optional_path(None).unwrap();

    assert_eq!(recent.count(), 0);
    // Nothing was written either.
    assert!(store.namespaces().unwrap().is_empty());

    recent.add_optional_path(Some("a")).unwrap();
    assert_eq!(recent.count(), 1);
}

#[test]
fn unicode_whitespace_only_paths_are_ignored() {
    let (store, mut recent) = fresh();
    recent.add_path("\u{3000}\u{3000}").unwrap();
    recent.add_path("\u{a0}").unwrap();
    recent.add_path(" \u{a0}\u{2003}\t").unwrap();

    assert_eq!(recent.count(), 0);
    assert!(store.namespaces().unwrap().is_empty());

    // Surrounding whitespace is kept on a real path.
    recent.add_path("\u{3000}a.svg").unwrap();
    assert_eq!(recent.get_file(0).unwrap(), "\u{3000}a.svg");
}

#[test]
fn fresh_instance_sees_same_order() {
    let (store, mut recent) = fresh();
    for path in ["one", "two", "three", "two"] {
        recent.add_path(path).unwrap();
    }

    let reloaded = RecentFiles::load(LABEL, Arc::new(store)).unwrap();

    assert_eq!(files(&reloaded), files(&recent));
    assert_eq!(files(&reloaded), vec!["two", "three", "one"]);
}

#[test]
fn fresh_instance_over_file_store_sees_same_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.toml");

    let mut recent =
        RecentFiles::load(LABEL, Arc::new(FilePreferences::open(&path).unwrap())).unwrap();
    recent.add_path("/plots/a.svg").unwrap();
    recent.add_path("/plots/b.svg").unwrap();
    recent.add_path("/plots/a.svg").unwrap();

    let reloaded =
        RecentFiles::load(LABEL, Arc::new(FilePreferences::open(&path).unwrap())).unwrap();
    assert_eq!(files(&reloaded), vec!["/plots/a.svg", "/plots/b.svg"]);
}

#[test]
fn labels_use_separate_namespaces() {
    let store = MemoryPreferences::new();
    let mut reopen = RecentFiles::load("Reopen", Arc::new(store.clone())).unwrap();
    let mut other = RecentFiles::load("Import", Arc::new(store.clone())).unwrap();

    reopen.add_path("a").unwrap();
    other.add_path("b").unwrap();

    assert_eq!(
        store
            .get_ordered_strings(&namespace_for("Reopen"), FILES_KEY)
            .unwrap(),
        vec!["a"]
    );
    assert_eq!(
        store
            .get_ordered_strings(&namespace_for("Import"), FILES_KEY)
            .unwrap(),
        vec!["b"]
    );
}

#[test]
fn removing_both_entries_empties_list() {
    let (store, mut recent) = fresh();
    recent.add_path("a").unwrap();
    recent.add_path("b").unwrap();

    recent.remove_filename("a").unwrap();
    assert_eq!(recent.count(), 1);
    recent.remove_filename("b").unwrap();
    assert_eq!(recent.count(), 0);
    assert!(recent.is_empty());

    let reloaded = RecentFiles::load(LABEL, Arc::new(store)).unwrap();
    assert_eq!(reloaded.count(), 0);
}

#[test]
fn removing_missing_path_changes_nothing() {
    let (_, mut recent) = fresh();
    recent.add_path("a").unwrap();
    recent.add_path("b").unwrap();

    recent.remove_filename("c").unwrap();

    assert_eq!(files(&recent), vec!["b", "a"]);
}

#[test]
fn clear_persists_empty_list() {
    let (store, mut recent) = fresh();
    recent.add_path("a").unwrap();
    recent.clear().unwrap();
    assert!(recent.is_empty());

    let reloaded = RecentFiles::load(LABEL, Arc::new(store)).unwrap();
    assert!(reloaded.is_empty());
}

#[test]
fn get_file_out_of_range_fails() {
    let (_, recent) = fresh();
    let err = recent.get_file(0).unwrap_err();
    assert!(matches!(
        err,
        RecentFilesError::IndexOutOfRange { index: 0, count: 0 }
    ));
}

#[test]
fn display_items_follow_list_order() {
    let (_, mut recent) = fresh();
    recent.add_path("a").unwrap();
    recent.add_path("b").unwrap();

    let items = recent.display_items();

    assert_eq!(items.len(), recent.count());
    assert_eq!(items[0].index, 0);
    assert_eq!(items[0].label, "b");
    assert_eq!(items[0].id, "b");
    assert_eq!(items[1].label, "a");
}

#[test]
fn activation_notifies_every_listener_once_in_order() {
    let (_, mut recent) = fresh();
    let calls: Rc<RefCell<Vec<(u8, String)>>> = Rc::default();

    let first = Rc::clone(&calls);
    recent.add_selection_listener(move |path| first.borrow_mut().push((1, path.to_string())));
    let second = Rc::clone(&calls);
    recent.add_selection_listener(move |path| second.borrow_mut().push((2, path.to_string())));

    recent.add_path("a").unwrap();
    recent.add_path("b").unwrap();
    recent.activate(1).unwrap();

    assert_eq!(
        *calls.borrow(),
        vec![(1, "a".to_string()), (2, "a".to_string())]
    );
}

#[test]
fn add_and_remove_do_not_notify() {
    let (_, mut recent) = fresh();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    recent.add_selection_listener(move |_| *counter.borrow_mut() += 1);

    recent.add_path("a").unwrap();
    recent.remove_filename("a").unwrap();

    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn activating_out_of_range_notifies_nobody() {
    let (_, mut recent) = fresh();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    recent.add_selection_listener(move |_| *counter.borrow_mut() += 1);

    assert!(recent.activate(0).is_err());
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn stale_item_activates_by_identifier() {
    let (_, mut recent) = fresh();
    let chosen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&chosen);
    recent.add_selection_listener(move |path| sink.borrow_mut().push(path.to_string()));

    recent.add_path("a").unwrap();
    recent.add_path("b").unwrap();
    let items = recent.display_items();

    // "a" moves to the front after the menu was built.
    recent.add_path("a").unwrap();
    recent.activate_item(&items[1]).unwrap();
    assert_eq!(*chosen.borrow(), vec!["a".to_string()]);

    recent.remove_filename("b").unwrap();
    let err = recent.activate_item(&items[0]).unwrap_err();
    assert!(matches!(err, RecentFilesError::UnknownItem { .. }));
}

#[test]
fn load_sanitizes_hand_edited_sequence() {
    let store = MemoryPreferences::new();
    let stored: Vec<String> = ["a", "", "b", "a"]
        .into_iter()
        .map(String::from)
        .chain((0..20).map(|i| format!("extra{i}")))
        .collect();
    store
        .put_ordered_strings(&namespace_for(LABEL), FILES_KEY, &stored)
        .unwrap();

    let recent = RecentFiles::load(LABEL, Arc::new(store)).unwrap();

    assert_eq!(recent.count(), DEFAULT_MAX_FILES);
    assert_eq!(recent.get_file(0).unwrap(), "a");
    assert_eq!(recent.get_file(1).unwrap(), "b");
    assert_eq!(recent.get_file(2).unwrap(), "extra0");
}

#[test]
fn wrong_stored_type_surfaces_as_storage_error() {
    let store = MemoryPreferences::new();
    store
        .put_string(&namespace_for(LABEL), FILES_KEY, "a.svg")
        .unwrap();

    let err = RecentFiles::load(LABEL, Arc::new(store)).unwrap_err();
    assert!(matches!(err, RecentFilesError::Storage(_)));
}

#[test]
fn failed_write_keeps_change_in_memory() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    let store = FilePreferences::open(blocker.join("prefs.toml")).unwrap();
    let mut recent = RecentFiles::load(LABEL, Arc::new(store)).unwrap();
    // A regular file where the parent directory should be.
    std::fs::write(&blocker, "").unwrap();

    let err = recent.add_path("a").unwrap_err();
    assert!(matches!(err, RecentFilesError::Storage(_)));
    assert_eq!(recent.count(), 1);
    assert_eq!(recent.get_file(0).unwrap(), "a");

    let err = recent.remove_filename("a").unwrap_err();
    assert!(matches!(err, RecentFilesError::Storage(_)));
    assert_eq!(recent.count(), 0);
}

#[test]
fn unrelated_boolean_preference_does_not_block_loading() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(
        &path,
        "[window]\nisFullscreen = true\n\n[\"recent-files/Reopen\"]\nfiles = [\"a\"]\n",
    )
    .unwrap();

    let recent =
        RecentFiles::load(LABEL, Arc::new(FilePreferences::open(&path).unwrap())).unwrap();

    assert_eq!(files(&recent), vec!["a"]);
}
