use crate::polygon::{MutablePolygon, Point, PolygonRef};
use crate::surface::{DrawingSurface, PressEvent};
use log::debug;

/// Gesture state for one capture session
#[derive(Debug)]
enum GestureState {
    /// No gesture active
    Idle,
    /// Currently tracing a lasso; holds the path accumulated so far
    Capturing(MutablePolygon),
}

/// Accumulates user-drawn polygons over one interactive view.
///
/// The session owns its drawing surface and its polygon list; independent
/// sessions never share state. Transitions are driven by externally
/// delivered press/drag/release events, and at most one gesture is in
/// progress at any time: a press while the surface's widget lock is held
/// is ignored.
pub struct CaptureSession<S: DrawingSurface> {
    surface: S,
    polygons: Vec<PolygonRef>,
    gesture: GestureState,
}

impl<S: DrawingSurface> CaptureSession<S> {
    /// Create a session bound to a drawing surface, with an empty polygon
    /// list and no gesture in progress.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            polygons: Vec::new(),
            gesture: GestureState::Idle,
        }
    }

    /// Handle a pointer press. Ignored when the widget lock is held by an
    /// in-progress gesture or when the press carries no in-axes position;
    /// otherwise acquires the lock and starts capturing at the press point.
    pub fn on_press(&mut self, event: &PressEvent) {
        if self.surface.is_locked() {
            return;
        }
        let Some(start) = event.position else {
            return;
        };
        if !self.surface.try_lock() {
            return;
        }
        debug!("gesture started at ({}, {})", start.x, start.y);
        self.gesture = GestureState::Capturing(MutablePolygon::new(start));
    }

    /// Append a vertex traced during the drag. No-op unless capturing.
    pub fn on_drag(&mut self, point: Point) {
        if let GestureState::Capturing(path) = &mut self.gesture {
            path.add_vertex(point);
        }
    }

    /// Finish the in-progress gesture: freeze the traced path into an
    /// immutable polygon, append it to the session, render its outline and
    /// release the widget lock. Returns the completed polygon, or `None`
    /// when no gesture was in progress.
    ///
    /// No validation is applied: a degenerate path (a single point, or a
    /// self-intersecting loop) is stored as-is and simply contributes no
    /// area, or an inconsistent one, when rasterized.
    pub fn on_release(&mut self) -> Option<PolygonRef> {
        match std::mem::replace(&mut self.gesture, GestureState::Idle) {
            GestureState::Idle => None,
            GestureState::Capturing(path) => {
                let polygon = path.to_polygon_ref();
                debug!("gesture completed with {} vertices", polygon.vertices().len());
                self.polygons.push(polygon.clone());
                self.surface.draw_outline(polygon.vertices());
                self.surface.unlock();
                Some(polygon)
            }
        }
    }

    /// The in-progress path, for per-frame preview rendering
    pub fn preview(&self) -> Option<&[Point]> {
        match &self.gesture {
            GestureState::Capturing(path) => Some(path.vertices()),
            GestureState::Idle => None,
        }
    }

    /// Whether a gesture is currently being traced
    pub fn is_capturing(&self) -> bool {
        matches!(self.gesture, GestureState::Capturing(_))
    }

    /// Completed polygons, in the order they were drawn
    pub fn polygons(&self) -> &[PolygonRef] {
        &self.polygons
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the session, releasing the surface back to the caller
    pub fn into_surface(self) -> S {
        self.surface
    }
}
