//! Validates forward canvas layout, reverse recovery and the round-trip invariant

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tilecanvas::CanvasError;
use tilecanvas::TilePattern;
use tilecanvas::layout::{flatten, layout, unlayout};

fn pattern(matrix: Vec<Vec<usize>>, number_of_tiles: usize, tiles_per_row: usize) -> TilePattern {
    TilePattern::new("test", "", matrix, number_of_tiles, tiles_per_row)
        .expect("test pattern should be valid")
}

// One block of an 8x8-tile sheet: two canvas rows of eight tiles each
fn two_row_pattern() -> TilePattern {
    pattern(vec![(0..8).collect(), (8..16).collect()], 16, 16)
}

#[test]
fn test_single_block_fills_top_left_corner() {
    let p = pattern(vec![vec![0, 1], vec![2, 3]], 4, 4);
    let tiles = ["A", "B", "C", "D"];

    let canvas = layout(&tiles, &p).expect("single block layout");

    assert_eq!(canvas.dim(), (2, 4));
    assert_eq!(canvas.get((0, 0)).copied(), Some("A"));
    assert_eq!(canvas.get((0, 1)).copied(), Some("B"));
    assert_eq!(canvas.get((1, 0)).copied(), Some("C"));
    assert_eq!(canvas.get((1, 1)).copied(), Some("D"));

    // Only one of the two block slots in the row is covered
    assert_eq!(canvas.get((0, 2)).copied(), Some(""));
    assert_eq!(canvas.get((1, 3)).copied(), Some(""));
}

#[test]
fn test_canvas_width_is_always_tiles_per_row() {
    let p = two_row_pattern();
    for tile_count in [0usize, 16, 32, 64, 160] {
        let tiles: Vec<u32> = (0..tile_count as u32).collect();
        let canvas = layout(&tiles, &p).expect("layout");
        let (rows, cols) = canvas.dim();
        assert_eq!(cols, 16, "canvas width must equal tiles_per_row");
        assert_eq!(
            rows % p.matrix_height(),
            0,
            "canvas height must be a multiple of the matrix height"
        );
    }
}

#[test]
fn test_blocks_wrap_to_the_next_block_row() {
    // Two pattern-width blocks fill one canvas row exactly, so the third
    // block must land one matrix height further down at column zero
    let p = pattern(vec![vec![0, 1], vec![2, 3]], 4, 4);
    let tiles: Vec<u32> = (0..12).collect();

    let canvas = layout(&tiles, &p).expect("three block layout");

    assert_eq!(canvas.dim(), (4, 4));
    assert_eq!(canvas.get((0, 0)).copied(), Some(0));
    assert_eq!(canvas.get((0, 2)).copied(), Some(4));
    assert_eq!(canvas.get((2, 0)).copied(), Some(8));
    assert_eq!(canvas.get((3, 1)).copied(), Some(11));
}

#[test]
fn test_flattened_canvas_interleaves_blocks() {
    let p = pattern(vec![vec![0, 1], vec![2, 3]], 4, 4);
    let tiles: Vec<u32> = (0..8).collect();

    let canvas = layout(&tiles, &p).expect("two block layout");
    assert_eq!(flatten(&canvas), vec![0, 1, 4, 5, 2, 3, 6, 7]);
}

#[test]
fn test_round_trip_recovers_storage_order() {
    let p = two_row_pattern();
    let tiles: Vec<u32> = (0..64).collect();

    let canvas = layout(&tiles, &p).expect("layout");
    let restored = unlayout(&flatten(&canvas), &p).expect("unlayout");
    assert_eq!(restored, tiles);
}

#[test]
fn test_second_block_row_maps_past_all_blocks_of_the_first() {
    // Two blocks fill each canvas row, so the canvas line starting the second
    // block row must map to block index 2, not collide with block 1
    let p = two_row_pattern();
    let tiles: Vec<u32> = (1..=64).collect();

    let canvas = layout(&tiles, &p).expect("four block layout");
    let arranged = flatten(&canvas);
    assert_eq!(arranged.get(8).copied(), Some(17), "second block of row one");
    assert_eq!(
        arranged.get(32).copied(),
        Some(33),
        "first block of row two starts the third source block"
    );

    let restored = unlayout(&arranged, &p).expect("unlayout");
    assert!(
        restored.iter().all(|&tile| tile != 0),
        "no destination may be left at the default value"
    );
    assert_eq!(restored, tiles);
}

#[test]
fn test_round_trip_over_random_permutations() {
    let mut rng = StdRng::seed_from_u64(0x7113);

    for _ in 0..50 {
        // Random 4x4 permutation of one 16-tile block
        let mut slots: Vec<usize> = (0..16).collect();
        slots.shuffle(&mut rng);
        let matrix: Vec<Vec<usize>> = slots.chunks(4).map(<[usize]>::to_vec).collect();
        let p = pattern(matrix, 16, 16);

        let tiles: Vec<u32> = (0..128).map(|_| rng.random()).collect();
        let canvas = layout(&tiles, &p).expect("layout");
        let restored = unlayout(&flatten(&canvas), &p).expect("unlayout");
        assert_eq!(restored, tiles, "forward then reverse must be the identity");
    }
}

#[test]
fn test_partial_final_block_is_ignored() {
    let p = two_row_pattern();
    // 20 tiles hold one full block; the 4 spare tiles never reach the canvas
    let tiles: Vec<u32> = (1..=20).collect();

    let canvas = layout(&tiles, &p).expect("layout");
    assert_eq!(canvas.dim(), (2, 16));
    assert_eq!(canvas.get((0, 7)).copied(), Some(8));
    assert_eq!(
        canvas.get((0, 8)).copied(),
        Some(u32::default()),
        "cells past the lone block keep the default value"
    );
}

#[test]
fn test_empty_input_produces_one_empty_block_row() {
    let p = two_row_pattern();
    let tiles: Vec<u32> = Vec::new();

    let canvas = layout(&tiles, &p).expect("empty layout");
    assert_eq!(canvas.dim(), (2, 16));
    assert!(canvas.iter().all(|&tile| tile == 0));

    let restored = unlayout(&tiles, &p).expect("empty unlayout");
    assert!(restored.is_empty());
}

#[test]
fn test_rounded_down_height_surfaces_as_overflow() {
    // Five blocks over four per row rounds 1.25 down to one block row, so the
    // fifth block has nowhere to go
    let p = pattern(vec![vec![0, 1]], 4, 8);
    let tiles: Vec<u32> = (0..20).collect();

    let err = layout(&tiles, &p).expect_err("under-allocated canvas");
    assert!(matches!(err, CanvasError::CanvasOverflow { .. }));
}

#[test]
fn test_reverse_of_truncated_input_is_rejected() {
    let p = pattern(vec![vec![0, 1], vec![2, 3]], 4, 4);
    let tiles: Vec<u32> = (0..3).collect();

    let err = unlayout(&tiles, &p).expect_err("destination past input length");
    match err {
        CanvasError::TileIndexOutOfRange { index, available } => {
            assert_eq!(index, 4);
            assert_eq!(available, 3);
        }
        other => panic!("expected TileIndexOutOfRange, got {other}"),
    }
}
