use gridmask::{MaskError, Point, Polygon, PolygonRef, rasterize};
use ndarray::Array2;

fn axis4() -> Vec<f64> {
    vec![0.0, 1.0, 2.0, 3.0]
}

/// Unit square with lower-left corner at (x0, y0)
fn unit_square(x0: f64, y0: f64) -> PolygonRef {
    Polygon::new_ref(vec![
        Point::new(x0, y0),
        Point::new(x0 + 1.0, y0),
        Point::new(x0 + 1.0, y0 + 1.0),
        Point::new(x0, y0 + 1.0),
    ])
}

#[test]
fn test_empty_polygon_list_is_all_false() {
    let mask = rasterize(&axis4(), &axis4(), &[]).unwrap();
    assert_eq!(mask.dim(), (4, 4));
    assert!(mask.iter().all(|&m| !m));
}

#[test]
fn test_unit_square_masks_single_cell() {
    // Square (0.5,0.5)-(1.5,1.5): only grid point (1,1) is strictly inside
    let mask = rasterize(&axis4(), &axis4(), &[unit_square(0.5, 0.5)]).unwrap();

    let mut expected = Array2::from_elem((4, 4), false);
    expected[[1, 1]] = true;
    assert_eq!(mask, expected);
}

#[test]
fn test_disjoint_squares_mask_two_cells() {
    let a = unit_square(0.5, 0.5);
    let b = unit_square(1.5, 2.5);
    let combined = rasterize(&axis4(), &axis4(), &[a.clone(), b.clone()]).unwrap();

    assert_eq!(combined.iter().filter(|&&m| m).count(), 2);
    assert!(combined[[1, 1]]);
    assert!(combined[[3, 2]]);

    // The combined mask is the elementwise OR of the individual masks
    let mask_a = rasterize(&axis4(), &axis4(), &[a]).unwrap();
    let mask_b = rasterize(&axis4(), &axis4(), &[b]).unwrap();
    let ored = Array2::from_shape_fn((4, 4), |idx| mask_a[idx] || mask_b[idx]);
    assert_eq!(combined, ored);
}

#[test]
fn test_overlapping_squares_or_not_double_count() {
    // Overlapping regions stay boolean: OR, not accumulation
    let a = unit_square(0.5, 0.5);
    let b = unit_square(0.6, 0.6);
    let combined = rasterize(&axis4(), &axis4(), &[a, b]).unwrap();
    assert_eq!(combined.iter().filter(|&&m| m).count(), 1);
    assert!(combined[[1, 1]]);
}

#[test]
fn test_polygon_order_does_not_matter() {
    let a = unit_square(0.5, 0.5);
    let b = unit_square(1.5, 2.5);
    let ab = rasterize(&axis4(), &axis4(), &[a.clone(), b.clone()]).unwrap();
    let ba = rasterize(&axis4(), &axis4(), &[b, a]).unwrap();
    assert_eq!(ab, ba);
}

#[test]
fn test_single_point_polygon_covers_nothing() {
    let degenerate = Polygon::new_ref(vec![Point::new(1.0, 1.0)]);
    let mask = rasterize(&axis4(), &axis4(), &[degenerate]).unwrap();
    assert!(mask.iter().all(|&m| !m));
}

#[test]
fn test_rasterize_is_deterministic() {
    let polys = vec![unit_square(0.5, 0.5), unit_square(1.5, 2.5)];
    let first = rasterize(&axis4(), &axis4(), &polys).unwrap();
    let second = rasterize(&axis4(), &axis4(), &polys).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_short_axis_is_rejected() {
    let err = rasterize(&[1.0], &axis4(), &[]).unwrap_err();
    assert!(matches!(err, MaskError::AxisTooShort { axis: "x", len: 1 }));

    let err = rasterize(&axis4(), &[], &[]).unwrap_err();
    assert!(matches!(err, MaskError::AxisTooShort { axis: "y", len: 0 }));
}

#[test]
fn test_rectangular_grid_shape_is_y_major() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![0.0, 1.0, 2.0];
    let mask = rasterize(&x, &y, &[unit_square(3.5, 0.5)]).unwrap();
    assert_eq!(mask.dim(), (3, 6));
    assert!(mask[[1, 4]]);
    assert_eq!(mask.iter().filter(|&&m| m).count(), 1);
}

#[test]
fn test_offset_axes() {
    // Axes need not start at zero; sampling spans min..=max
    let x = vec![100.0, 110.0, 120.0, 130.0];
    let y = vec![-20.0, -10.0, 0.0, 10.0];
    let square = Polygon::new_ref(vec![
        Point::new(105.0, -15.0),
        Point::new(115.0, -15.0),
        Point::new(115.0, -5.0),
        Point::new(105.0, -5.0),
    ]);
    let mask = rasterize(&x, &y, &[square]).unwrap();
    assert!(mask[[1, 1]]);
    assert_eq!(mask.iter().filter(|&&m| m).count(), 1);
}
