//! Binary grid regression test
//!
//! Grid construction, pixel access, ink bounding box, centroid and zone
//! clipping on synthetic signatures.

use sigzone_core::{Error, InkBounds, Pixel, PixelGrid, Region};
use sigzone_test::{RegParams, blank_grid, grid_from_ascii, ink_grid, vertical_line_grid};

#[test]
fn grid_reg() {
    let mut rp = RegParams::new("grid");

    // --- Test 1: raw convention, 0 = ink ---
    let grid = PixelGrid::from_rows(&[[1u8, 0, 1, 1], [1, 1, 1, 0]]).unwrap();
    rp.compare_values(1.0, grid.is_ink(1, 0) as u8 as f64, 0.0);
    rp.compare_values(0.0, grid.is_ink(0, 0) as u8 as f64, 0.0);
    rp.compare_values(1.0, grid.get_pixel(0, 0).map_or(9, Pixel::raw) as f64, 0.0);
    rp.compare_values(0.0, grid.get_pixel(3, 1).map_or(9, Pixel::raw) as f64, 0.0);
    rp.compare_values(9.0, grid.get_pixel(4, 1).map_or(9, Pixel::raw) as f64, 0.0);

    // --- Test 2: bounding box of a stroke ---
    let line = vertical_line_grid(64, 64, 5, 10, 10).unwrap();
    let b = line.ink_bounds();
    rp.compare_values(5.0, b.left as f64, 0.0);
    rp.compare_values(5.0, b.right as f64, 0.0);
    rp.compare_values(10.0, b.top as f64, 0.0);
    rp.compare_values(19.0, b.bottom as f64, 0.0);

    // --- Test 3: bounding box sentinel on a blank grid ---
    let blank = blank_grid(64, 64).unwrap();
    let b = blank.ink_bounds();
    rp.compare_values(64.0, b.left as f64, 0.0);
    rp.compare_values(0.0, b.right as f64, 0.0);
    rp.compare_values(64.0, b.top as f64, 0.0);
    rp.compare_values(0.0, b.bottom as f64, 0.0);
    rp.compare_values(1.0, (b == InkBounds::sentinel(64, 64)) as u8 as f64, 0.0);

    // --- Test 4: centroid ---
    let (cx, cy) = line.centroid(&line.bounds()).unwrap();
    rp.compare_values(5.0, cx, 0.0);
    rp.compare_values(14.5, cy, 1e-12);
    let (cx, cy) = blank.centroid(&blank.bounds()).unwrap();
    rp.compare_values(0.0, cx, 0.0);
    rp.compare_values(0.0, cy, 0.0);
    let full = ink_grid(64, 64).unwrap();
    let (cx, cy) = full.centroid(&full.bounds()).unwrap();
    rp.compare_values(31.5, cx, 1e-12);
    rp.compare_values(31.5, cy, 1e-12);

    // --- Test 5: clipping a zone ---
    let sig = grid_from_ascii(
        "........
         ..##....
         .#..#...
         ....#.#.
         .....#..",
    )
    .unwrap();
    let zone = Region::new(4, 6, 2, 4).unwrap();
    let clipped = sig.clip(&zone).unwrap();
    let expected = grid_from_ascii(
        "#..
         #.#
         .#.",
    )
    .unwrap();
    rp.compare_values(1.0, clipped.same_pixels(&expected) as u8 as f64, 0.0);
    rp.compare_values(
        sig.ink_count(&zone).unwrap() as f64,
        clipped.ink_count(&clipped.bounds()).unwrap() as f64,
        0.0,
    );

    // --- Test 6: packed layout, ink bits MSB first, rows on word boundaries ---
    let wide = PixelGrid::from_raw(
        40,
        2,
        &(0..80)
            .map(|i| if i == 0 || i == 79 { 0u8 } else { 1 })
            .collect::<Vec<_>>(),
    )
    .unwrap();
    rp.compare_values(2.0, wide.wpl() as f64, 0.0);
    rp.compare_values(4.0, wide.data().len() as f64, 0.0);
    let bytes: Vec<u8> = wide.data().iter().flat_map(|w| w.to_be_bytes()).collect();
    let expected_bytes = [
        0x80u8, 0, 0, 0, 0, 0, 0, 0, // row 0: pixel 0
        0, 0, 0, 0, 0x01, 0, 0, 0, // row 1: pixel 39
    ];
    rp.compare_strings(&expected_bytes, &bytes);
    rp.compare_values(1.0, blank_grid(32, 1).unwrap().wpl() as f64, 0.0);

    // --- Test 7: pictures whose rows start with ink keep their full width ---
    let corner = grid_from_ascii(
        "##..
         ##..
         ....",
    )
    .unwrap();
    rp.compare_values(4.0, corner.width() as f64, 0.0);
    rp.compare_values(3.0, corner.height() as f64, 0.0);
    let (cx, cy) = corner.centroid(&corner.bounds()).unwrap();
    rp.compare_values(0.5, cx, 0.0);
    rp.compare_values(0.5, cy, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn grid_malformed_input_reg() {
    let mut rp = RegParams::new("grid_malformed");

    let empty: Vec<Vec<u8>> = Vec::new();
    let zero_rows = PixelGrid::from_rows(&empty);
    rp.compare_values(
        1.0,
        matches!(zero_rows, Err(Error::InvalidDimension { .. })) as u8 as f64,
        0.0,
    );
    let zero_cols = PixelGrid::from_rows(&[Vec::<u8>::new()]);
    rp.compare_values(
        1.0,
        matches!(zero_cols, Err(Error::InvalidDimension { .. })) as u8 as f64,
        0.0,
    );
    let gray = PixelGrid::from_raw(2, 1, &[0, 128]);
    rp.compare_values(
        1.0,
        matches!(gray, Err(Error::InvalidPixelValue { value: 128, .. })) as u8 as f64,
        0.0,
    );
    let inverted = Region::new(10, 2, 0, 5);
    rp.compare_values(
        1.0,
        matches!(inverted, Err(Error::InvertedRegion { .. })) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup());
}
