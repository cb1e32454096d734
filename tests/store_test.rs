//! Tests for file-level load/save

use std::fs;
use std::path::Path;

use revtree::codec::ParsePolicy;
use revtree::errors::CatalogError;
use revtree::util::testing;
use revtree::{load_catalog, sample_catalog, save_catalog, store};

// ============================================================
// Load Failure Tests
// ============================================================

#[test]
fn given_missing_file_when_loading_then_returns_not_found() {
    testing::init_test_setup();
    let result = store::load(Path::new("does/not/exist.txt"), ParsePolicy::Lenient);

    match result {
        Err(CatalogError::NotFound(path)) => {
            assert_eq!(path, Path::new("does/not/exist.txt"))
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn given_missing_file_when_loading_then_in_memory_tree_is_untouched() {
    let root = sample_catalog();
    let before = root.clone();

    let _ = load_catalog(Path::new("does/not/exist.txt"), ParsePolicy::Lenient);

    assert_eq!(root, before);
}

#[test]
fn given_file_with_game_root_when_loading_catalog_then_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flat.txt");
    fs::write(&path, "GAME Blackjack 100\n").unwrap();

    let result = load_catalog(&path, ParsePolicy::Lenient);

    assert!(matches!(result, Err(CatalogError::ParseFailure { .. })));
}

// ============================================================
// Save/Load Round-trip Tests
// ============================================================

#[test]
fn given_catalog_when_saving_and_loading_then_trees_are_equal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("casino.txt");

    let mut root = sample_catalog();
    root.games_mut()[0].add_revenue(42.5).unwrap();

    save_catalog(&root, &path).unwrap();
    let loaded = load_catalog(&path, ParsePolicy::Lenient).unwrap();

    assert_eq!(loaded, root);
}

#[test]
fn given_existing_catalog_when_saving_then_destination_is_fully_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("casino.txt");
    fs::write(&path, "GROUP Old\n  GAME Stale 999\n").unwrap();

    let root = sample_catalog();
    save_catalog(&root, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("Stale"));
    assert!(text.starts_with("GROUP Casino Games\n"));
}

#[test]
fn given_saved_catalog_when_reading_raw_text_then_format_matches_contract() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("casino.txt");

    save_catalog(&sample_catalog(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "GROUP Casino Games\n\
         \x20 GROUP Table Games\n\
         \x20   GAME Blackjack 0\n\
         \x20   GAME Roulette 0\n\
         \x20 GROUP Slot Games\n\
         \x20   GAME Mega Joker 0\n"
    );
}

// ============================================================
// Save Failure Tests
// ============================================================

#[test]
fn given_unwritable_destination_when_saving_then_returns_write_failure() {
    let root = sample_catalog();

    let result = save_catalog(&root, Path::new("no/such/dir/casino.txt"));

    assert!(matches!(result, Err(CatalogError::WriteFailure { .. })));
}
