use crate::polygon::Point;

/// A pointer-press delivered by the host toolkit.
///
/// `position` is the press location in data coordinates, or `None` when the
/// press landed outside the plotted axes and carries no usable position.
#[derive(Debug, Clone, Copy)]
pub struct PressEvent {
    pub position: Option<Point>,
}

impl PressEvent {
    pub fn at(position: Point) -> Self {
        Self {
            position: Some(position),
        }
    }

    /// A press with no valid data-space position (outside the axes).
    pub fn outside_axes() -> Self {
        Self { position: None }
    }
}

/// Minimal capability interface for the surface a session draws on.
///
/// This is the boundary to the host graphics toolkit: the capture core only
/// needs an exclusive widget lock and a way to render a completed outline.
/// The lock prevents logical re-entrancy (a second gesture starting before
/// the first releases), not concurrent execution; events are assumed to
/// arrive one at a time on the host's event loop.
pub trait DrawingSurface {
    /// Try to acquire the exclusive widget lock. Returns false if it is
    /// already held, in which case the caller must not start a gesture.
    fn try_lock(&mut self) -> bool;

    /// Release the widget lock at the end of a gesture.
    fn unlock(&mut self);

    /// Whether the widget lock is currently held.
    fn is_locked(&self) -> bool;

    /// Render the outline of a completed polygon for visual confirmation.
    fn draw_outline(&mut self, vertices: &[Point]);
}
