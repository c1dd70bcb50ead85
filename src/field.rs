use crate::error::MaskError;
use crate::raster::Mask;
use log::info;
use ndarray::ArrayD;

/// Default coordinate names for map-projected model output
pub const DEFAULT_X_COORD: &str = "projection_x_coordinate";
pub const DEFAULT_Y_COORD: &str = "projection_y_coordinate";

/// A gridded geophysical field: n-dimensional values plus the x/y
/// coordinate axes of its horizontal grid.
///
/// The axes are assumed monotonically increasing and near-uniformly
/// spaced. Values are usually 2D with shape `(y_axis.len(), x_axis.len())`
/// but nothing enforces that here; see [`check_2d`].
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    values: ArrayD<f64>,
    x_axis: Vec<f64>,
    y_axis: Vec<f64>,
}

impl Field {
    pub fn new(
        name: impl Into<String>,
        values: ArrayD<f64>,
        x_axis: Vec<f64>,
        y_axis: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            values,
            x_axis,
            y_axis,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &ArrayD<f64> {
        &self.values
    }

    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &[f64] {
        &self.y_axis
    }

    /// Shape of the horizontal coordinate grid, `(y, x)`
    pub fn grid_shape(&self) -> (usize, usize) {
        (self.y_axis.len(), self.x_axis.len())
    }
}

/// Check whether a field's values are 2D.
///
/// Purely advisory: the message is returned and logged, and the caller may
/// carry on with a non-2D field regardless (masking it will simply fail
/// the shape check in [`combine`] later, or succeed on its horizontal
/// grid alone).
pub fn check_2d(field: &Field) -> String {
    let ndim = field.values().ndim();
    let message = if ndim == 2 {
        format!("field '{}' is 2D, good to go", field.name())
    } else {
        format!(
            "field '{}' has {} dimensions, expected 2",
            field.name(),
            ndim
        )
    };
    info!("{message}");
    message
}

/// A field paired with a mask over its coordinate grid, under matching
/// axis names. Produced by [`combine`]; owned entirely by the caller.
#[derive(Debug, Clone)]
pub struct MaskedField {
    pub field: Field,
    pub mask: Mask,
    pub x_axis_name: String,
    pub y_axis_name: String,
}

/// Pair a field with a mask over its coordinate grid.
///
/// Fails with `MaskError::ShapeMismatch` when the mask's shape does not
/// match `(y_axis.len(), x_axis.len())` of the field's own grid. Pure:
/// combining the same inputs any number of times yields the same result.
pub fn combine(
    field: Field,
    mask: Mask,
    x_axis_name: &str,
    y_axis_name: &str,
) -> Result<MaskedField, MaskError> {
    let grid_shape = field.grid_shape();
    let mask_shape = mask.dim();
    if mask_shape != grid_shape {
        return Err(MaskError::ShapeMismatch {
            mask_shape,
            grid_shape,
        });
    }
    Ok(MaskedField {
        field,
        mask,
        x_axis_name: x_axis_name.to_owned(),
        y_axis_name: y_axis_name.to_owned(),
    })
}
