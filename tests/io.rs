//! Validates raw tile sheet framing and canvas preview export

use std::fs;

use tilecanvas::CanvasError;
use tilecanvas::TilePattern;
use tilecanvas::io::preview::export_canvas_preview;
use tilecanvas::io::tilesheet::{RawTile, read_tiles, write_tiles};
use tilecanvas::layout::layout;

#[test]
fn test_sheet_splits_into_whole_tiles() {
    let dir = tempfile::tempdir().expect("temp directory");
    let path = dir.path().join("sheet.bin");
    let bytes: Vec<u8> = (0..=69).collect();
    fs::write(&path, &bytes).expect("write sheet");

    // 70 bytes at 32 per tile: two whole tiles, trailing 6 bytes dropped
    let tiles = read_tiles(&path, 32).expect("read sheet");
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles.first().map(Vec::len), Some(32));
    assert_eq!(tiles.first().and_then(|t| t.first()).copied(), Some(0));
    assert_eq!(tiles.get(1).and_then(|t| t.first()).copied(), Some(32));
}

#[test]
fn test_zero_tile_size_is_rejected() {
    let dir = tempfile::tempdir().expect("temp directory");
    let path = dir.path().join("sheet.bin");
    fs::write(&path, [0u8; 8]).expect("write sheet");

    let err = read_tiles(&path, 0).expect_err("zero-byte tiles");
    assert!(matches!(err, CanvasError::InvalidParameter { .. }));
}

#[test]
fn test_write_then_read_round_trips() {
    let dir = tempfile::tempdir().expect("temp directory");
    let path = dir.path().join("out.chr");

    let tiles: Vec<RawTile> = (0..4u8).map(|i| vec![i; 16]).collect();
    write_tiles(&path, &tiles).expect("write tiles");

    let reloaded = read_tiles(&path, 16).expect("read tiles");
    assert_eq!(reloaded, tiles);
}

#[test]
fn test_preview_export_writes_a_png() {
    let dir = tempfile::tempdir().expect("temp directory");
    let path = dir.path().join("canvas.png");

    let pattern =
        TilePattern::new("p", "", vec![vec![0, 1], vec![2, 3]], 4, 4).expect("valid pattern");
    let tiles: Vec<RawTile> = (0..4u8).map(|i| vec![i; 32]).collect();
    let canvas = layout(&tiles, &pattern).expect("layout");

    export_canvas_preview(&canvas, &path).expect("export preview");

    let written = fs::metadata(&path).expect("preview file exists");
    assert!(written.len() > 0);

    // 4 columns and 2 rows of 8-pixel cells
    let image = image::open(&path).expect("preview decodes");
    assert_eq!(image.width(), 32);
    assert_eq!(image.height(), 16);
}
