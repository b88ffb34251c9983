#![allow(clippy::float_cmp)]

use super::*;

fn default_grid() -> GridConfig {
    GridConfig::default()
}

// --- GridConfig ---

#[test]
fn default_grid_is_750_by_450() {
    let grid = default_grid();
    assert_eq!(grid.cell_size(), 15.0);
    assert_eq!(grid.columns(), 50);
    assert_eq!(grid.rows(), 30);
    assert_eq!(grid.width(), 750.0);
    assert_eq!(grid.height(), 450.0);
}

#[test]
fn new_accepts_positive_dimensions() {
    let grid = GridConfig::new(10, 4, 3).unwrap();
    assert_eq!(grid.width(), 40.0);
    assert_eq!(grid.height(), 30.0);
}

#[test]
fn new_rejects_zero_cell_size() {
    assert_eq!(GridConfig::new(0, 4, 3), Err(GridError::ZeroCellSize));
}

#[test]
fn new_rejects_zero_columns() {
    assert_eq!(GridConfig::new(10, 0, 3), Err(GridError::ZeroColumns));
}

#[test]
fn new_rejects_zero_rows() {
    assert_eq!(GridConfig::new(10, 4, 0), Err(GridError::ZeroRows));
}

#[test]
fn grid_error_messages_are_readable() {
    assert_eq!(GridError::ZeroCellSize.to_string(), "cell size must be at least one pixel");
}

// --- snap ---

#[test]
fn snap_floors_to_cell_corner() {
    let s = default_grid().snap(Point::new(22.0, 9.0));
    assert_eq!(s.point(), Point::new(15.0, 0.0));
    assert!(s.within_x);
    assert!(s.within_y);
    assert!(s.is_inside());
}

#[test]
fn snap_exact_cell_boundary_stays_put() {
    let s = default_grid().snap(Point::new(30.0, 45.0));
    assert_eq!(s.point(), Point::new(30.0, 45.0));
}

#[test]
fn snap_fractional_pixels() {
    let s = default_grid().snap(Point::new(14.999, 15.001));
    assert_eq!(s.point(), Point::new(0.0, 15.0));
}

#[test]
fn snap_matches_floor_formula_across_canvas() {
    let grid = default_grid();
    let cell = grid.cell_size();
    let mut x = 0.0;
    while x < grid.width() {
        let mut y = 0.0;
        while y < grid.height() {
            let s = grid.snap(Point::new(x, y));
            assert_eq!(s.x, (x / cell).floor() * cell);
            assert_eq!(s.y, (y / cell).floor() * cell);
            assert!(s.is_inside(), "({x}, {y}) should be inside");
            y += 7.5;
        }
        x += 7.5;
    }
}

#[test]
fn snap_negative_is_out_of_bounds() {
    let s = default_grid().snap(Point::new(-0.5, 10.0));
    assert_eq!(s.x, -15.0);
    assert!(!s.within_x);
    assert!(s.within_y);
    assert!(!s.is_inside());
}

#[test]
fn snap_far_edge_is_out_of_bounds() {
    let grid = default_grid();
    let s = grid.snap(Point::new(750.0, 449.0));
    assert!(!s.within_x);
    assert!(s.within_y);

    let s = grid.snap(Point::new(749.9, 450.0));
    assert!(s.within_x);
    assert!(!s.within_y);
}

#[test]
fn snap_last_cell_is_inside() {
    let s = default_grid().snap(Point::new(749.0, 449.0));
    assert_eq!(s.point(), Point::new(735.0, 435.0));
    assert!(s.is_inside());
}

// --- CanvasBounds / locate ---

#[test]
fn bounds_default_is_origin() {
    let b = CanvasBounds::default();
    assert_eq!(b.left, 0.0);
    assert_eq!(b.top, 0.0);
}

#[test]
fn bounds_to_canvas_subtracts_origin() {
    let b = CanvasBounds::new(100.0, 50.0);
    assert_eq!(b.to_canvas(Point::new(122.0, 59.0)), Point::new(22.0, 9.0));
}

#[test]
fn locate_combines_offset_and_snap() {
    let b = CanvasBounds::new(100.0, 50.0);
    let s = locate(Point::new(122.0, 59.0), &b, &default_grid());
    assert_eq!(s.point(), Point::new(15.0, 0.0));
    assert!(s.is_inside());
}

#[test]
fn locate_left_of_canvas_is_outside() {
    let b = CanvasBounds::new(100.0, 50.0);
    let s = locate(Point::new(99.0, 60.0), &b, &default_grid());
    assert!(!s.within_x);
    assert!(s.within_y);
}

#[test]
fn locate_above_canvas_is_outside() {
    let b = CanvasBounds::new(100.0, 50.0);
    let s = locate(Point::new(120.0, 10.0), &b, &default_grid());
    assert!(s.within_x);
    assert!(!s.within_y);
}
