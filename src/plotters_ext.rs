use std::f64::consts::PI;

use plotters::element::{Drawable, PointCollection};
use plotters::style::ShapeStyle;
use plotters_backend::{BackendCoord, DrawingBackend, DrawingErrorKind};

// Dashed circle element
//
// The radius is the pixel distance between the center and the rim point after
// both are mapped to the backend, so the circle is only round in data units
// when both axes share one scale.
pub struct DashedCircle<Coord> {
    points: [Coord; 2],
    dash: u32,
    style: ShapeStyle,
}

impl<Coord> DashedCircle<Coord> {
    pub fn new<S: Into<ShapeStyle>>(center: Coord, rim: Coord, style: S) -> Self {
        Self {
            points: [center, rim],
            dash: 6,
            style: style.into(),
        }
    }

    /// Length in pixels of one dash; gaps are the same length.
    pub fn dash_size(mut self, dash: u32) -> Self {
        self.dash = dash;
        self
    }
}

impl<'a, Coord> PointCollection<'a, Coord> for &'a DashedCircle<Coord> {
    type Point = &'a Coord;
    type IntoIter = &'a [Coord];
    fn point_iter(self) -> &'a [Coord] {
        &self.points
    }
}

impl<Coord, DB: DrawingBackend> Drawable<DB> for DashedCircle<Coord> {
    fn draw<I: Iterator<Item = BackendCoord>>(
        &self,
        mut points: I,
        backend: &mut DB,
        _: (u32, u32),
    ) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
        match (points.next(), points.next()) {
            (Some(center), Some(rim)) => {
                for dash in dash_segments(center, rim, self.dash) {
                    backend.draw_path(dash, &self.style)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Splits the circle through `rim` into alternating dashes and gaps and
/// returns the dashes as short pixel paths.
pub fn dash_segments(center: BackendCoord, rim: BackendCoord, dash: u32) -> Vec<Vec<BackendCoord>> {
    let dx = (rim.0 - center.0) as f64;
    let dy = (rim.1 - center.1) as f64;
    let radius = dx.hypot(dy);
    if radius < 1.0 || dash == 0 {
        return Vec::new();
    }

    let circumference = 2.0 * PI * radius;
    let count = ((circumference / (2.0 * dash as f64)) as usize).max(4);
    let step = PI / count as f64;
    let substeps = ((step * radius / 2.0).ceil() as usize).max(1);

    (0..count)
        .map(|i| {
            let start = 2.0 * step * i as f64;
            (0..=substeps)
                .map(|j| {
                    let angle = start + step * j as f64 / substeps as f64;
                    (
                        center.0 + (radius * angle.cos()).round() as i32,
                        center.1 - (radius * angle.sin()).round() as i32,
                    )
                })
                .collect::<Vec<BackendCoord>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::prelude::*;

    #[test]
    fn test_dash_segments_on_circle() {
        let center = (100, 100);
        let dashes = dash_segments(center, (140, 130), 6);

        assert!(dashes.len() >= 4);
        dashes.iter().flatten().for_each(|&(x, y)| {
            let r = (((x - center.0).pow(2) + (y - center.1).pow(2)) as f64).sqrt();
            assert!((r - 50.0).abs() <= 1.0, "point ({}, {}) at r={}", x, y, r);
        });
    }

    #[test]
    fn test_dash_segments_leave_gaps() {
        let dashes = dash_segments((0, 0), (60, 0), 6);

        // each dash ends before the next one starts
        dashes.windows(2).for_each(|w| {
            let end = w[0][w[0].len() - 1];
            let start = w[1][0];
            assert_ne!(end, start);
        });
        assert_eq!(dashes[0][0], (60, 0));
    }

    #[test]
    fn test_small_circle_has_minimum_dashes() {
        assert_eq!(dash_segments((10, 10), (12, 10), 6).len(), 4);
    }

    #[test]
    fn test_zero_radius_draws_nothing() {
        assert!(dash_segments((10, 10), (10, 10), 6).is_empty());
        assert!(dash_segments((0, 0), (30, 0), 0).is_empty());
    }

    #[test]
    fn test_draw_dashed_circle() {
        let path = std::env::temp_dir().join("robot_footprint_dashed_circle.png");
        let root = BitMapBackend::new(&path, (250, 250)).into_drawing_area();
        root.fill(&WHITE).unwrap();
        root.draw(&DashedCircle::new(
            (125, 125),
            (125, 25),
            Into::<ShapeStyle>::into(&YELLOW),
        ))
        .unwrap();

        root.draw(&DashedCircle::new((60, 60), (80, 60), &BLUE).dash_size(3))
            .unwrap();

        root.present().unwrap();
        assert!(path.exists());
    }
}
