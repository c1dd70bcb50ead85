use crate::field::{Field, MaskedField};
use log::warn;

/// Opaque display-projection handle.
///
/// Passed through to the drawing surface and renderer, never interpreted
/// by the capture/rasterize core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    name: String,
}

impl Projection {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A source of gridded fields (a file, a catalogue, an in-memory store)
pub trait GridSource {
    /// Names of the fields available from this source
    fn field_names(&self) -> Vec<String>;

    /// Load a field by name.
    ///
    /// When `name` is not present the source falls back to a stand-in for
    /// the whole dataset (implementation-defined) rather than failing, and
    /// the returned flag is false. Callers get a usable field either way.
    fn load_field(&self, name: &str) -> (Field, bool);
}

/// Provides the display projection for a source's fields
pub trait ProjectionProvider {
    fn projection(&self) -> Projection;
}

/// Renders a combined field+mask as a color mesh with a mask overlay.
///
/// `robust` clips the color scale against outliers (2nd-98th percentile)
/// instead of spanning the full value range. Purely a side-effecting sink.
pub trait FieldRenderer {
    fn render(&mut self, data: &MaskedField, projection: &Projection, robust: bool);
}

/// Map-backed grid source for demos and tests
pub struct InMemorySource {
    fields: Vec<Field>,
    projection: Projection,
}

impl InMemorySource {
    pub fn new(projection: Projection) -> Self {
        Self {
            fields: Vec::new(),
            projection,
        }
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }
}

impl GridSource for InMemorySource {
    fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name().to_owned()).collect()
    }

    /// Falls back to the first field held (insertion order) when `name` is
    /// absent, logging the substitution.
    ///
    /// Panics when the source holds no fields at all; an empty source has
    /// nothing to fall back to.
    fn load_field(&self, name: &str) -> (Field, bool) {
        if let Some(field) = self.fields.iter().find(|f| f.name() == name) {
            return (field.clone(), true);
        }
        warn!("'{name}' not among this source's fields, returning the first field instead");
        (self.fields[0].clone(), false)
    }
}

impl ProjectionProvider for InMemorySource {
    fn projection(&self) -> Projection {
        self.projection.clone()
    }
}
