#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod colormap;
pub mod error;
pub mod field;
pub mod polygon;
pub mod raster;
pub mod session;
pub mod source;
pub mod surface;

pub use app::MaskApp;
pub use error::MaskError;
pub use field::{DEFAULT_X_COORD, DEFAULT_Y_COORD, Field, MaskedField, check_2d, combine};
pub use polygon::{MutablePolygon, Point, Polygon, PolygonRef};
pub use raster::{Mask, point_in_polygon, rasterize};
pub use session::CaptureSession;
pub use source::{FieldRenderer, GridSource, InMemorySource, Projection, ProjectionProvider};
pub use surface::{DrawingSurface, PressEvent};
