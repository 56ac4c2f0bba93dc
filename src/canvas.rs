//! Rendering surface for robot footprints.
//!
//! `Canvas` is the seam between the orchestration loop and the plotting
//! library. `BitMapCanvas` buffers every primitive and renders them all with
//! plotters when `show` is called, because the chart ranges have to be known
//! before anything can be drawn.

use std::path::{Path, PathBuf};

use log::info;
use plotters::prelude::*;

use crate::error::{FootprintError, Result};
use crate::geometry::Point;
use crate::plotters_ext::DashedCircle;

pub const DEFAULT_OUTPUT_PATH: &str = "footprint.png";

const MARGIN: u32 = 5;
const LABEL_AREA: u32 = 40;
const PADDING_RATIO: f64 = 0.05;

pub trait Canvas {
    fn draw_point_label(&mut self, point: Point, label: &str) -> Result<()>;

    /// Draws the points as given; closed shapes repeat their first point.
    fn draw_polyline(&mut self, points: &[Point]) -> Result<()>;

    fn draw_dashed_circle(&mut self, center: Point, radius: f64) -> Result<()>;

    fn show(&mut self, layout: &PlotLayout) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotLayout {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub equal_aspect: bool,
    pub grid: bool,
}

impl Default for PlotLayout {
    fn default() -> Self {
        PlotLayout {
            title: String::from("Footprint of Robots"),
            x_label: String::from("X(m)"),
            y_label: String::from("Y(m)"),
            equal_aspect: true,
            grid: true,
        }
    }
}

/// Axis ranges of the chart in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Bounds {
    pub fn empty() -> Self {
        Bounds {
            x: (f64::INFINITY, f64::NEG_INFINITY),
            y: (f64::INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.0 > self.x.1 || self.y.0 > self.y.1
    }

    /// Non-finite points are skipped.
    pub fn include(&mut self, p: Point) {
        if !p.0.is_finite() || !p.1.is_finite() {
            return;
        }
        self.x = (self.x.0.min(p.0), self.x.1.max(p.0));
        self.y = (self.y.0.min(p.1), self.y.1.max(p.1));
    }

    pub fn width(&self) -> f64 {
        self.x.1 - self.x.0
    }

    pub fn height(&self) -> f64 {
        self.y.1 - self.y.0
    }

    /// Grows both ranges by `ratio` of the larger span, or by one unit when
    /// everything sits on a single point. Empty bounds become [-1, 1]².
    pub fn padded(&self, ratio: f64) -> Self {
        if self.is_empty() {
            return Bounds {
                x: (-1.0, 1.0),
                y: (-1.0, 1.0),
            };
        }

        let span = self.width().max(self.height());
        let pad = if span > 0.0 { span * ratio } else { 1.0 };
        Bounds {
            x: (self.x.0 - pad, self.x.1 + pad),
            y: (self.y.0 - pad, self.y.1 + pad),
        }
    }

    /// Widens the shorter axis so one unit covers the same number of pixels
    /// in both directions of a `(width, height)` plotting area.
    pub fn with_equal_aspect(&self, plot_dim: (u32, u32)) -> Self {
        let (pw, ph) = (plot_dim.0.max(1) as f64, plot_dim.1.max(1) as f64);
        let units_per_pixel = (self.width() / pw).max(self.height() / ph);

        let center = (
            (self.x.0 + self.x.1) / 2.0,
            (self.y.0 + self.y.1) / 2.0,
        );
        let half = (units_per_pixel * pw / 2.0, units_per_pixel * ph / 2.0);
        Bounds {
            x: (center.0 - half.0, center.0 + half.0),
            y: (center.1 - half.1, center.1 + half.1),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Primitive {
    PointLabel { point: Point, label: String },
    Polyline(Vec<Point>),
    DashedCircle { center: Point, radius: f64 },
}

impl Primitive {
    fn extend_bounds(&self, bounds: &mut Bounds) {
        match self {
            Primitive::PointLabel { point, .. } => bounds.include(*point),
            Primitive::Polyline(points) => points.iter().for_each(|p| bounds.include(*p)),
            Primitive::DashedCircle { center, radius } => {
                bounds.include((center.0 - radius, center.1 - radius));
                bounds.include((center.0 + radius, center.1 + radius));
            }
        }
    }
}

/// Renders into a PNG file through plotters' `BitMapBackend`.
pub struct BitMapCanvas {
    path: PathBuf,
    size: (u32, u32),
    primitives: Vec<Primitive>,
}

impl BitMapCanvas {
    pub fn new<P: AsRef<Path>>(path: P, size: (u32, u32)) -> Self {
        BitMapCanvas {
            path: path.as_ref().to_path_buf(),
            size,
            primitives: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Smallest bounds holding every buffered primitive.
    pub fn data_bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        self.primitives
            .iter()
            .for_each(|p| p.extend_bounds(&mut bounds));
        bounds
    }
}

impl Default for BitMapCanvas {
    fn default() -> Self {
        BitMapCanvas::new(DEFAULT_OUTPUT_PATH, (800, 800))
    }
}

fn drawing_error<E: std::fmt::Display>(e: E) -> FootprintError {
    FootprintError::Drawing(e.to_string())
}

impl Canvas for BitMapCanvas {
    fn draw_point_label(&mut self, point: Point, label: &str) -> Result<()> {
        self.primitives.push(Primitive::PointLabel {
            point,
            label: label.to_string(),
        });
        Ok(())
    }

    fn draw_polyline(&mut self, points: &[Point]) -> Result<()> {
        self.primitives.push(Primitive::Polyline(points.to_vec()));
        Ok(())
    }

    fn draw_dashed_circle(&mut self, center: Point, radius: f64) -> Result<()> {
        self.primitives
            .push(Primitive::DashedCircle { center, radius });
        Ok(())
    }

    fn show(&mut self, layout: &PlotLayout) -> Result<()> {
        let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let area = root
            .titled(&layout.title, ("sans-serif", 20))
            .map_err(drawing_error)?;
        let (width, height) = area.dim_in_pixel();
        let plot_dim = (
            width.saturating_sub(2 * MARGIN + LABEL_AREA),
            height.saturating_sub(2 * MARGIN + LABEL_AREA),
        );

        let mut bounds = self.data_bounds().padded(PADDING_RATIO);
        if layout.equal_aspect {
            bounds = bounds.with_equal_aspect(plot_dim);
        }

        let mut chart = ChartBuilder::on(&area)
            .x_label_area_size(LABEL_AREA)
            .y_label_area_size(LABEL_AREA)
            .margin(MARGIN)
            .build_cartesian_2d(bounds.x.0..bounds.x.1, bounds.y.0..bounds.y.1)
            .map_err(drawing_error)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(&layout.x_label)
            .y_desc(&layout.y_label)
            .axis_desc_style(("sans-serif", 15));
        if !layout.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(drawing_error)?;

        let plotting_area = chart.plotting_area();
        for primitive in &self.primitives {
            match primitive {
                Primitive::PointLabel { point, label } => {
                    plotting_area
                        .draw(&Circle::new(*point, 4, RED.filled()))
                        .map_err(drawing_error)?;
                    plotting_area
                        .draw(&Text::new(label.as_str(), *point, ("sans-serif", 12)))
                        .map_err(drawing_error)?;
                }
                Primitive::Polyline(points) => {
                    plotting_area
                        .draw(&PathElement::new(points.clone(), &CYAN))
                        .map_err(drawing_error)?;
                }
                Primitive::DashedCircle { center, radius } => {
                    let rim = (center.0 + radius, center.1);
                    plotting_area
                        .draw(&DashedCircle::new(*center, rim, &YELLOW))
                        .map_err(drawing_error)?;
                }
            }
        }

        root.present().map_err(drawing_error)?;
        info!(
            "Saved plot of {} primitives to {}",
            self.primitives.len(),
            self.path().display()
        );
        Ok(())
    }
}
