//! Zoning regression test
//!
//! Zone count, zone order, coverage of the source grid and the behavior of
//! ink-free regions.

use sigzone_core::{Error, PixelGrid, Region};
use sigzone_region::{RegionError, ZoningOptions, split_region, zone_grid};
use sigzone_test::{RegParams, blank_grid, checkerboard_grid, ink_grid, vertical_line_grid};

/// Number of zones covering each pixel, as a flat row-major vector
fn coverage(grid: &PixelGrid, zones: &[Region]) -> Vec<u32> {
    let w = grid.width() as usize;
    let mut counts = vec![0u32; w * grid.height() as usize];
    for zone in zones {
        for y in zone.rows() {
            for x in zone.columns() {
                counts[y as usize * w + x as usize] += 1;
            }
        }
    }
    counts
}

#[test]
fn zoning_reg() {
    let mut rp = RegParams::new("zoning");

    // --- Test 1: 4^D zones for every depth ---
    let checker = checkerboard_grid(64, 64).unwrap();
    for depth in 0..=4u32 {
        let zones = split_region(&checker, &checker.bounds(), depth).unwrap();
        rp.compare_values(4f64.powi(depth as i32), zones.len() as f64, 0.0);
    }

    // --- Test 2: zones partition the grid when every split region has ink ---
    for grid in [
        ink_grid(64, 64).unwrap(),
        checker.clone(),
        checkerboard_grid(37, 23).unwrap(),
    ] {
        let layout = zone_grid(&grid, &ZoningOptions::default()).unwrap();
        let counts = coverage(&grid, layout.zones());
        rp.compare_values(1.0, *counts.iter().min().unwrap() as f64, 0.0);
        rp.compare_values(1.0, *counts.iter().max().unwrap() as f64, 0.0);
        let area: u64 = layout.iter().map(Region::area).sum();
        rp.compare_values(grid.bounds().area() as f64, area as f64, 0.0);
    }

    // --- Test 3: depth-first quadrant order on a uniform grid ---
    let full = ink_grid(64, 64).unwrap();
    let layout = zone_grid(&full, &ZoningOptions::default()).unwrap();
    let expected_head = [
        Region::new_unchecked(0, 7, 0, 7),
        Region::new_unchecked(8, 15, 0, 7),
        Region::new_unchecked(0, 7, 8, 15),
        Region::new_unchecked(8, 15, 8, 15),
    ];
    for (i, expected) in expected_head.iter().enumerate() {
        rp.compare_values(1.0, (layout.zones()[i] == *expected) as u8 as f64, 0.0);
    }
    rp.compare_values(
        1.0,
        (layout.zones()[63] == Region::new_unchecked(56, 63, 56, 63)) as u8 as f64,
        0.0,
    );

    // --- Test 4: ink centroids of non-empty regions stay inside them ---
    let line = vertical_line_grid(64, 64, 5, 10, 10).unwrap();
    for zone in zone_grid(&line, &ZoningOptions::default()).unwrap().iter() {
        if line.ink_count(zone).unwrap() > 0 {
            let (cx, cy) = line.centroid(zone).unwrap();
            let inside = cx >= zone.left as f64
                && cx <= zone.right as f64
                && cy >= zone.top as f64
                && cy <= zone.bottom as f64;
            rp.compare_values(1.0, inside as u8 as f64, 0.0);
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn zoning_blank_grid_reg() {
    let mut rp = RegParams::new("zoning_blank");

    // Every centroid is the (0, 0) placeholder, so the splits collapse
    // towards the origin and almost every zone is empty.
    let blank = blank_grid(64, 64).unwrap();
    let layout = zone_grid(&blank, &ZoningOptions::default()).unwrap();
    rp.compare_values(64.0, layout.len() as f64, 0.0);

    let non_empty: Vec<(usize, Region)> = layout
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, z)| !z.is_empty())
        .collect();
    let expected = [
        (0, Region::new_unchecked(0, 0, 0, 0)),
        (21, Region::new_unchecked(1, 63, 0, 0)),
        (42, Region::new_unchecked(0, 0, 1, 63)),
        (63, Region::new_unchecked(1, 63, 1, 63)),
    ];
    rp.compare_values(expected.len() as f64, non_empty.len() as f64, 0.0);
    for ((i, zone), (ei, ezone)) in non_empty.iter().zip(expected.iter()) {
        rp.compare_values(*ei as f64, *i as f64, 0.0);
        rp.compare_values(1.0, (zone == ezone) as u8 as f64, 0.0);
    }

    // The non-empty zones still tile the grid exactly
    let counts = coverage(&blank, layout.zones());
    rp.compare_values(1.0, *counts.iter().min().unwrap() as f64, 0.0);
    rp.compare_values(1.0, *counts.iter().max().unwrap() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn zoning_ink_free_quadrant_reg() {
    let mut rp = RegParams::new("zoning_ink_free_quadrant");

    // A short stroke near the left edge leaves ink-free quadrants away from
    // the origin. Their (0, 0) split point lies outside them, so some zones
    // reach back over their neighbours and the layout no longer tiles the grid.
    let line = vertical_line_grid(64, 64, 5, 10, 10).unwrap();
    let layout = zone_grid(&line, &ZoningOptions::default()).unwrap();
    let zones = layout.zones();
    rp.compare_values(64.0, zones.len() as f64, 0.0);

    let expected = [
        (0, Region::new_unchecked(0, 5, 0, 11)),
        (1, Region::new_unchecked(6, 5, 0, 11)),
        (7, Region::new_unchecked(1, 5, 1, 12)),
        (21, Region::new_unchecked(1, 63, 0, 0)),
        (42, Region::new_unchecked(0, 5, 19, 63)),
        (47, Region::new_unchecked(1, 5, 1, 63)),
        (62, Region::new_unchecked(1, 5, 15, 63)),
        (63, Region::new_unchecked(6, 63, 15, 63)),
    ];
    for (i, region) in expected {
        rp.compare_values(1.0, (zones[i] == region) as u8 as f64, 0.0);
    }

    let counts = coverage(&line, zones);
    rp.compare_values(1.0, *counts.iter().min().unwrap() as f64, 0.0);
    rp.compare_values(7.0, *counts.iter().max().unwrap() as f64, 0.0);

    // Same grid, same layout
    let again = zone_grid(&line, &ZoningOptions::default()).unwrap();
    rp.compare_values(1.0, (again == layout) as u8 as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn zoning_invalid_root_reg() {
    let mut rp = RegParams::new("zoning_invalid_root");

    let grid = blank_grid(8, 8).unwrap();

    // Inverted caller regions are refused instead of producing empty zones
    for region in [
        Region::new_unchecked(6, 2, 0, 7),
        Region::new_unchecked(0, 7, 5, 4),
    ] {
        let refused = matches!(
            split_region(&grid, &region, 3),
            Err(RegionError::Core(Error::InvertedRegion { .. }))
        );
        rp.compare_values(1.0, refused as u8 as f64, 0.0);
    }

    // Regions leaving the grid are refused too
    let outside = split_region(&grid, &Region::new(0, 8, 0, 7).unwrap(), 1);
    rp.compare_values(
        1.0,
        matches!(outside, Err(RegionError::Core(Error::RegionOutOfBounds { .. }))) as u8 as f64,
        0.0,
    );

    // Inverted quadrants made by the recursion itself are still emitted
    let zones = split_region(&grid, &grid.bounds(), 2).unwrap();
    rp.compare_values(16.0, zones.len() as f64, 0.0);
    rp.compare_strings(b"(1, 0, 0, 0)", zones[1].to_string().as_bytes());
    rp.compare_strings(b"(1, 7, 1, 7)", zones[15].to_string().as_bytes());

    assert!(rp.cleanup());
}
