use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A point in the data's display coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// Immutable polygon for sharing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point>,
}

// Mutable polygon accumulated while a gesture is in progress
#[derive(Debug)]
pub struct MutablePolygon {
    vertices: Vec<Point>,
}

// Define a reference-counted type alias for Polygon
pub type PolygonRef = Arc<Polygon>;

impl Polygon {
    /// Create a new immutable polygon. The first and last vertices are
    /// implicitly connected; no closing vertex is appended.
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Create a new reference-counted Polygon
    pub fn new_ref(vertices: Vec<Point>) -> PolygonRef {
        Arc::new(Self::new(vertices))
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

impl MutablePolygon {
    /// Create a new mutable polygon seeded with the gesture's start point
    pub fn new(start: Point) -> Self {
        Self {
            vertices: vec![start],
        }
    }

    /// Add a vertex traced during the drag
    pub fn add_vertex(&mut self, vertex: Point) {
        self.vertices.push(vertex);
    }

    /// Convert to an immutable Polygon
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.vertices.clone())
    }

    /// Convert to a reference-counted PolygonRef
    pub fn to_polygon_ref(&self) -> PolygonRef {
        Arc::new(self.to_polygon())
    }

    /// Get a reference to the vertices for preview
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}
