use thiserror::Error;

/// Errors that can occur during rasterization and merging
#[derive(Error, Debug)]
pub enum MaskError {
    #[error("{axis} axis needs at least 2 coordinates to compute spacing, got {len}")]
    AxisTooShort { axis: &'static str, len: usize },
    #[error("mask shape {mask_shape:?} does not match the field grid shape {grid_shape:?}")]
    ShapeMismatch {
        mask_shape: (usize, usize),
        grid_shape: (usize, usize),
    },
}
