use crate::error::MaskError;
use crate::polygon::{Point, PolygonRef};
use ndarray::Array2;

/// A boolean grid mask, shape `(y_axis.len(), x_axis.len())`, y-major.
pub type Mask = Array2<bool>;

/// Rasterize a set of polygons onto the coordinate grid spanned by
/// `x_axis` and `y_axis`.
///
/// The mask has one boolean per grid cell, true wherever the cell's
/// representative sample point falls inside at least one polygon (logical
/// OR across polygons). An empty polygon list yields an all-false mask.
///
/// Sample points are synthesized as a uniform grid spanning
/// `[min, max]` of each axis, stepped by `(max - min) / (len - 1)`. For a
/// near-uniform axis this coincides with the given coordinates; an
/// irregular axis is approximated by the uniform grid rather than sampled
/// at its literal values.
///
/// Each axis needs at least 2 coordinates, otherwise the spacing is
/// undefined and `MaskError::AxisTooShort` is returned.
pub fn rasterize(
    x_axis: &[f64],
    y_axis: &[f64],
    polygons: &[PolygonRef],
) -> Result<Mask, MaskError> {
    let canvas = Canvas::from_axes(x_axis, y_axis)?;

    let mut mask = Array2::from_elem((y_axis.len(), x_axis.len()), false);
    for polygon in polygons {
        let grid = canvas.containment_grid(polygon.vertices());
        mask.zip_mut_with(&grid, |m, &g| *m = *m || g);
    }
    Ok(mask)
}

/// Uniform sample-point grid reconstructed from axis extents and spacing
struct Canvas {
    min_x: f64,
    min_y: f64,
    dist_x: f64,
    dist_y: f64,
    len_x: usize,
    len_y: usize,
}

impl Canvas {
    fn from_axes(x_axis: &[f64], y_axis: &[f64]) -> Result<Self, MaskError> {
        let (min_x, max_x) = axis_extent("x", x_axis)?;
        let (min_y, max_y) = axis_extent("y", y_axis)?;
        Ok(Self {
            min_x,
            min_y,
            dist_x: (max_x - min_x) / (x_axis.len() - 1) as f64,
            dist_y: (max_y - min_y) / (y_axis.len() - 1) as f64,
            len_x: x_axis.len(),
            len_y: y_axis.len(),
        })
    }

    /// Containment of every sample point in one polygon, y-major
    fn containment_grid(&self, vertices: &[Point]) -> Array2<bool> {
        Array2::from_shape_fn((self.len_y, self.len_x), |(iy, ix)| {
            let sample = Point::new(
                self.min_x + ix as f64 * self.dist_x,
                self.min_y + iy as f64 * self.dist_y,
            );
            point_in_polygon(sample, vertices)
        })
    }
}

fn axis_extent(axis: &'static str, values: &[f64]) -> Result<(f64, f64), MaskError> {
    if values.len() < 2 {
        return Err(MaskError::AxisTooShort {
            axis,
            len: values.len(),
        });
    }
    let mut min = values[0];
    let mut max = values[0];
    for &v in &values[1..] {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    Ok((min, max))
}

/// Point-in-polygon test using ray casting.
///
/// Boundary convention: the crossing test uses half-open comparisons
/// (`>` against the point's y on both edge endpoints, strict `<` on the
/// intersection x), so a point strictly inside is always counted while a
/// point exactly on an edge counts on some edges and not on others,
/// depending on edge orientation. This is the standard scan-line
/// convention and is kept consistent across the crate.
///
/// Polygons with fewer than 3 vertices enclose no area and contain nothing.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = polygon.len();

    let mut j = n - 1;
    for i in 0..n {
        let pi = &polygon[i];
        let pj = &polygon[j];

        if ((pi.y > point.y) != (pj.y > point.y))
            && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }

        j = i;
    }

    inside
}
