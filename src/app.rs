use crate::colormap::{ColorScale, diverging};
use crate::field::{DEFAULT_X_COORD, DEFAULT_Y_COORD, MaskedField, check_2d, combine};
use crate::polygon::Point;
use crate::raster::rasterize;
use crate::session::CaptureSession;
use crate::source::{FieldRenderer, GridSource, InMemorySource, Projection, ProjectionProvider};
use crate::surface::{DrawingSurface, PressEvent};
use eframe::egui::{self, Color32, Pos2, Rect, Sense, Shape, Stroke};
use ndarray::{ArrayD, Ix2};

/// Retained drawing state for the egui canvas.
///
/// egui repaints every frame, so "drawing" an outline means remembering it
/// here; the app re-strokes all stored outlines each frame. The widget
/// lock is a plain flag: egui delivers events on a single thread and the
/// lock only guards against a second gesture starting mid-drag.
#[derive(Default)]
pub struct EguiSurface {
    locked: bool,
    outlines: Vec<Vec<Point>>,
}

impl EguiSurface {
    pub fn outlines(&self) -> &[Vec<Point>] {
        &self.outlines
    }
}

impl DrawingSurface for EguiSurface {
    fn try_lock(&mut self) -> bool {
        if self.locked {
            return false;
        }
        self.locked = true;
        true
    }

    fn unlock(&mut self) {
        self.locked = false;
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn draw_outline(&mut self, vertices: &[Point]) {
        self.outlines.push(vertices.to_vec());
    }
}

/// Maps between data coordinates and screen pixels within the plot rect.
/// Screen y grows downward, data y upward.
#[derive(Clone, Copy)]
struct Viewport {
    rect: Rect,
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
}

impl Viewport {
    fn new(rect: Rect, x_axis: &[f64], y_axis: &[f64]) -> Self {
        // Pad by half a cell so edge cells render at full size
        let dx = (x_axis[x_axis.len() - 1] - x_axis[0]) / (x_axis.len() - 1) as f64;
        let dy = (y_axis[y_axis.len() - 1] - y_axis[0]) / (y_axis.len() - 1) as f64;
        Self {
            rect,
            x0: x_axis[0] - dx / 2.0,
            x1: x_axis[x_axis.len() - 1] + dx / 2.0,
            y0: y_axis[0] - dy / 2.0,
            y1: y_axis[y_axis.len() - 1] + dy / 2.0,
        }
    }

    fn to_screen(&self, p: Point) -> Pos2 {
        let u = ((p.x - self.x0) / (self.x1 - self.x0)) as f32;
        let v = ((p.y - self.y0) / (self.y1 - self.y0)) as f32;
        Pos2::new(
            self.rect.left() + u * self.rect.width(),
            self.rect.bottom() - v * self.rect.height(),
        )
    }

    fn to_data(&self, pos: Pos2) -> Point {
        let u = ((pos.x - self.rect.left()) / self.rect.width()) as f64;
        let v = ((self.rect.bottom() - pos.y) / self.rect.height()) as f64;
        Point::new(self.x0 + u * (self.x1 - self.x0), self.y0 + v * (self.y1 - self.y0))
    }

    fn cell_rect(&self, x: f64, y: f64, dx: f64, dy: f64) -> Rect {
        let a = self.to_screen(Point::new(x - dx / 2.0, y + dy / 2.0));
        let b = self.to_screen(Point::new(x + dx / 2.0, y - dy / 2.0));
        Rect::from_two_pos(a, b)
    }
}

/// Paints a combined field+mask into an egui painter: the field as a
/// colormapped cell mesh, the mask as a translucent overlay.
struct MeshPainter<'p> {
    painter: &'p egui::Painter,
    viewport: Viewport,
}

impl FieldRenderer for MeshPainter<'_> {
    fn render(&mut self, data: &MaskedField, _projection: &Projection, robust: bool) {
        let x_axis = data.field.x_axis();
        let y_axis = data.field.y_axis();
        let dx = (x_axis[x_axis.len() - 1] - x_axis[0]) / (x_axis.len() - 1) as f64;
        let dy = (y_axis[y_axis.len() - 1] - y_axis[0]) / (y_axis.len() - 1) as f64;

        if let Ok(values) = data.field.values().view().into_dimensionality::<Ix2>() {
            let scale = ColorScale::from_values(values.iter().copied(), robust);
            for ((iy, ix), &value) in values.indexed_iter() {
                let rect = self.viewport.cell_rect(x_axis[ix], y_axis[iy], dx, dy);
                self.painter.rect_filled(rect, 0.0, diverging(value, &scale));
            }
        }

        let highlight = Color32::from_rgba_unmultiplied(255, 140, 0, 110);
        for ((iy, ix), &masked) in data.mask.indexed_iter() {
            if masked {
                let rect = self.viewport.cell_rect(x_axis[ix], y_axis[iy], dx, dy);
                self.painter.rect_filled(rect, 0.0, highlight);
            }
        }
    }
}

/// Interactive mask-drawing app: displays a field, captures lasso
/// gestures over it and rasterizes them into a grid mask on demand.
pub struct MaskApp {
    session: CaptureSession<EguiSurface>,
    masked: MaskedField,
    projection: Projection,
    robust: bool,
    status: Option<String>,
}

impl MaskApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let source = demo_source();
        let (field, _exact) = source.load_field("upward_air_velocity");
        let projection = source.projection();
        check_2d(&field);

        // Start with an all-false mask so rendering has a single path
        let shape = field.grid_shape();
        let mask = ndarray::Array2::from_elem(shape, false);
        let masked = combine(field, mask, DEFAULT_X_COORD, DEFAULT_Y_COORD)
            .expect("fresh all-false mask matches its own grid");

        Self {
            session: CaptureSession::new(EguiSurface::default()),
            masked,
            projection,
            robust: true,
            status: None,
        }
    }

    fn rasterize_session(&mut self) {
        let field = &self.masked.field;
        match rasterize(field.x_axis(), field.y_axis(), self.session.polygons()) {
            Ok(mask) => {
                self.masked.mask = mask;
                self.status = Some(format!(
                    "rasterized {} polygon(s), {} cells masked",
                    self.session.polygons().len(),
                    self.masked.mask.iter().filter(|&&m| m).count()
                ));
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    fn handle_pointer(&mut self, response: &egui::Response, viewport: &Viewport) {
        if response.drag_started() {
            let event = match response.interact_pointer_pos() {
                Some(pos) if viewport.rect.contains(pos) => {
                    PressEvent::at(viewport.to_data(pos))
                }
                _ => PressEvent::outside_axes(),
            };
            self.session.on_press(&event);
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.session.on_drag(viewport.to_data(pos));
            }
        }
        if response.drag_stopped() {
            self.session.on_release();
        }
    }
}

impl eframe::App for MaskApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!(
                "{} [{}]",
                self.masked.field.name(),
                self.projection.name()
            ));

            ui.horizontal(|ui| {
                ui.checkbox(&mut self.robust, "robust color scale");
                if ui.button("Rasterize mask").clicked() {
                    self.rasterize_session();
                }
                if let Some(status) = &self.status {
                    ui.label(status);
                }
            });
            ui.label("Drag on the plot to lasso a region.");

            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, Sense::drag());
            let viewport = Viewport::new(
                response.rect,
                self.masked.field.x_axis(),
                self.masked.field.y_axis(),
            );

            self.handle_pointer(&response, &viewport);

            MeshPainter {
                painter: &painter,
                viewport,
            }
            .render(&self.masked, &self.projection, self.robust);

            // Completed lassos, then the in-progress path on top
            let outline = Stroke::new(2.0, Color32::RED);
            for vertices in self.session.surface().outlines() {
                let points: Vec<Pos2> =
                    vertices.iter().map(|&v| viewport.to_screen(v)).collect();
                painter.add(Shape::closed_line(points, outline));
            }
            if let Some(path) = self.session.preview() {
                let points: Vec<Pos2> = path.iter().map(|&v| viewport.to_screen(v)).collect();
                painter.add(Shape::line(points, Stroke::new(1.5, Color32::DARK_RED)));
            }
        });
    }
}

/// Synthetic vertical-velocity-like field on a projected grid, standing in
/// for a file-backed source.
fn demo_source() -> InMemorySource {
    let nx = 48;
    let ny = 40;
    let x_axis: Vec<f64> = (0..nx).map(|i| -240_000.0 + i as f64 * 10_000.0).collect();
    let y_axis: Vec<f64> = (0..ny).map(|j| -200_000.0 + j as f64 * 10_000.0).collect();

    let mut values = ArrayD::zeros(vec![ny, nx]);
    for j in 0..ny {
        for i in 0..nx {
            let u = i as f64 / (nx - 1) as f64;
            let v = j as f64 / (ny - 1) as f64;
            values[[j, i]] = (u * 6.0).sin() * (v * 5.0).cos()
                + 0.5 * ((u - 0.7) * 12.0).sin() * ((v - 0.3) * 9.0).cos();
        }
    }

    let mut source = InMemorySource::new(Projection::new("transverse_mercator"));
    source.add_field(crate::field::Field::new(
        "upward_air_velocity",
        values,
        x_axis,
        y_axis,
    ));
    source
}

/// Run the native demo app.
pub fn run() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1050.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native(
        "gridmask",
        options,
        Box::new(|cc| Ok(Box::new(MaskApp::new(cc)))),
    )
}
