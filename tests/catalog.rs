//! Validates catalog bulk loading, lookups and the named-pattern wrappers

use std::fs;

use tilecanvas::CanvasError;
use tilecanvas::io::catalog::PatternCatalog;
use tilecanvas::layout::flatten;

const NORMAL: &str = "[pattern]\n\
name=normal\n\
description=Row-major block layout\n\
number_of_tile=4\n\
tiles_per_row=4\n\
pattern=[0,1][2,3]\n";

const SWAPPED: &str = "[pattern]\n\
name=swapped\n\
description=Bottom half first\n\
number_of_tile=4\n\
tiles_per_row=4\n\
pattern=[2,3][0,1]\n";

#[test]
fn test_load_directory_populates_catalog() {
    let dir = tempfile::tempdir().expect("temp directory");
    fs::write(dir.path().join("normal.tpl"), NORMAL).expect("write normal");
    fs::write(dir.path().join("swapped.tpl"), SWAPPED).expect("write swapped");

    let mut catalog = PatternCatalog::new();
    let loaded = catalog
        .load_directory(dir.path())
        .expect("directory should load");

    assert_eq!(loaded, 2);
    assert_eq!(catalog.len(), 2);
    assert!(!catalog.is_empty());

    let normal = catalog.lookup("normal").expect("normal present");
    assert_eq!(normal.description(), "Row-major block layout");
    assert_eq!(normal.number_of_tiles(), 4);

    let mut names: Vec<&str> = catalog.names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["normal", "swapped"]);
}

#[test]
fn test_lookup_miss_is_not_found() {
    let catalog = PatternCatalog::new();
    let err = catalog.lookup("nonexistent").expect_err("empty catalog");
    match err {
        CanvasError::PatternNotFound { name } => assert_eq!(name, "nonexistent"),
        other => panic!("expected PatternNotFound, got {other}"),
    }
    assert!(catalog.get("nonexistent").is_none());
}

#[test]
fn test_unnamed_pattern_is_keyed_by_file_stem() {
    let dir = tempfile::tempdir().expect("temp directory");
    fs::write(
        dir.path().join("anonymous.tpl"),
        "[pattern]\nnumber_of_tile=4\ntiles_per_row=4\npattern=[0,1][2,3]\n",
    )
    .expect("write pattern");

    let mut catalog = PatternCatalog::new();
    catalog.load_directory(dir.path()).expect("load");
    assert!(catalog.lookup("anonymous").is_ok());
}

#[test]
fn test_unparseable_file_reports_its_path() {
    let dir = tempfile::tempdir().expect("temp directory");
    fs::write(dir.path().join("broken.tpl"), "[pattern]\nname=broken\n").expect("write broken");

    let mut catalog = PatternCatalog::new();
    let err = catalog
        .load_directory(dir.path())
        .expect_err("missing pattern key");
    match err {
        CanvasError::PatternFile { path, reason } => {
            assert!(path.ends_with("broken.tpl"));
            assert!(reason.contains("pattern"));
        }
        other => panic!("expected PatternFile, got {other}"),
    }
}

#[test]
fn test_subdirectories_are_skipped() {
    let dir = tempfile::tempdir().expect("temp directory");
    fs::write(dir.path().join("normal.tpl"), NORMAL).expect("write normal");
    fs::create_dir(dir.path().join("nested")).expect("create subdirectory");

    let mut catalog = PatternCatalog::new();
    let loaded = catalog.load_directory(dir.path()).expect("load");
    assert_eq!(loaded, 1);
}

#[test]
fn test_named_wrappers_transform_through_the_catalog() {
    let dir = tempfile::tempdir().expect("temp directory");
    fs::write(dir.path().join("swapped.tpl"), SWAPPED).expect("write swapped");

    let mut catalog = PatternCatalog::new();
    catalog.load_directory(dir.path()).expect("load");

    // Two full blocks so the flattened canvas is exactly the input length
    let tiles: Vec<u32> = vec![10, 11, 12, 13, 20, 21, 22, 23];
    let canvas = catalog.layout("swapped", &tiles).expect("named layout");
    assert_eq!(canvas.get((0, 0)).copied(), Some(12));
    assert_eq!(canvas.get((1, 0)).copied(), Some(10));
    assert_eq!(canvas.get((0, 2)).copied(), Some(22));

    let restored = catalog
        .unlayout("swapped", &flatten(&canvas))
        .expect("named unlayout");
    assert_eq!(restored, tiles);
}
