use log::warn;

pub type Point = (f64, f64);

/// Robot center and heading in the world frame. `theta` is in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Pose { x, y, theta }
    }

    /// Builds a pose from `[x, y, theta]`. Missing trailing values are zero.
    pub fn from_slice(values: &[f64]) -> Self {
        let v = |i: usize| values.get(i).copied().unwrap_or(0.0);
        Pose::new(v(0), v(1), v(2))
    }

    pub fn position(&self) -> Point {
        (self.x, self.y)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.theta.is_finite()
    }
}

/// Extents of the robot body measured from its pose, in the robot frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Footprint {
    pub left_width: f64,
    pub right_width: f64,
    pub front_length: f64,
    pub back_length: f64,
}

impl Footprint {
    pub fn new(left_width: f64, right_width: f64, front_length: f64, back_length: f64) -> Self {
        Footprint {
            left_width,
            right_width,
            front_length,
            back_length,
        }
    }

    /// Builds a footprint from `[LW, RW, FL, BL]`. Missing trailing values are zero.
    pub fn from_slice(values: &[f64]) -> Self {
        let v = |i: usize| values.get(i).copied().unwrap_or(0.0);
        Footprint::new(v(0), v(1), v(2), v(3))
    }

    fn is_finite(&self) -> bool {
        self.left_width.is_finite()
            && self.right_width.is_finite()
            && self.front_length.is_finite()
            && self.back_length.is_finite()
    }
}

/// World-frame outline of a robot derived from its pose and footprint.
#[derive(Clone, Debug, PartialEq)]
pub struct RobotShape {
    /// front-left, front-right, back-right, back-left
    pub corners: [Point; 4],
    pub rotation_radius: f64,
    /// tip, left, right
    pub heading: [Point; 3],
}

impl RobotShape {
    pub fn new(pose: &Pose, footprint: &Footprint) -> Self {
        if !pose.is_finite() || !footprint.is_finite() {
            warn!(
                "non-finite robot geometry: pose {:?}, footprint {:?}",
                pose, footprint
            );
        }

        let corners = footprint_to_corners(pose, footprint);
        RobotShape {
            corners,
            rotation_radius: rotation_radius(footprint),
            heading: heading_marker(&corners),
        }
    }

    pub fn front_left(&self) -> Point {
        self.corners[0]
    }

    pub fn front_right(&self) -> Point {
        self.corners[1]
    }

    pub fn back_right(&self) -> Point {
        self.corners[2]
    }

    pub fn back_left(&self) -> Point {
        self.corners[3]
    }

    /// Corners with the first one repeated at the end.
    pub fn closed_outline(&self) -> Vec<Point> {
        close(&self.corners)
    }

    /// Heading triangle with the tip repeated at the end.
    pub fn closed_heading(&self) -> Vec<Point> {
        close(&self.heading)
    }
}

fn close(points: &[Point]) -> Vec<Point> {
    let mut closed = points.to_vec();
    if let Some(first) = points.first() {
        closed.push(*first);
    }
    closed
}

/// Rotates the footprint offsets by `theta` and translates them to the pose.
pub fn footprint_to_corners(pose: &Pose, fp: &Footprint) -> [Point; 4] {
    let (x, y) = pose.position();
    let (sin, cos) = pose.theta.sin_cos();

    let lw = fp.left_width;
    let rw = fp.right_width;
    let fl = fp.front_length;
    let bl = fp.back_length;

    let front_left = (x + fl * cos - lw * sin, y + fl * sin + lw * cos);
    let front_right = (x + fl * cos + rw * sin, y + fl * sin - rw * cos);
    let back_right = (x - bl * cos + rw * sin, y - bl * sin - rw * cos);
    let back_left = (x - bl * cos - lw * sin, y - bl * sin + lw * cos);

    [front_left, front_right, back_right, back_left]
}

/// Distance from the center to the front-left corner.
pub fn rotation_radius(fp: &Footprint) -> f64 {
    (fp.left_width.powi(2) + fp.front_length.powi(2)).sqrt()
}

/// Small triangle pointing at the middle of the front edge.
///
/// The side points sit a quarter of the way down the left and right edges,
/// so the marker is not symmetric when the footprint is not.
pub fn heading_marker(corners: &[Point; 4]) -> [Point; 3] {
    let [front_left, front_right, back_right, back_left] = *corners;

    let tip = midpoint(front_left, front_right);
    let left = midpoint(front_left, midpoint(front_left, back_left));
    let right = midpoint(front_right, midpoint(front_right, back_right));

    [tip, left, right]
}

pub fn midpoint(a: Point, b: Point) -> Point {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_abs_diff_eq!(actual.0, expected.0, epsilon = 1e-9);
        assert_abs_diff_eq!(actual.1, expected.1, epsilon = 1e-9);
    }

    #[test]
    fn test_unit_footprint_at_origin() {
        let shape = RobotShape::new(&Pose::default(), &Footprint::new(1.0, 1.0, 1.0, 1.0));

        assert_point_eq(shape.front_left(), (1.0, 1.0));
        assert_point_eq(shape.front_right(), (1.0, -1.0));
        assert_point_eq(shape.back_right(), (-1.0, -1.0));
        assert_point_eq(shape.back_left(), (-1.0, 1.0));
        assert_relative_eq!(shape.rotation_radius, 2.0_f64.sqrt());
    }

    #[test]
    fn test_quarter_turn_keeps_corner_order() {
        let pose = Pose::new(2.0, 3.0, PI / 2.0);
        let corners = footprint_to_corners(&pose, &Footprint::new(0.5, 0.25, 1.0, 2.0));

        // front now points along +y, left along -x
        assert_point_eq(corners[0], (1.5, 4.0));
        assert_point_eq(corners[1], (2.25, 4.0));
        assert_point_eq(corners[2], (2.25, 1.0));
        assert_point_eq(corners[3], (1.5, 1.0));
    }

    #[test]
    fn test_full_turn_returns_same_corners() {
        let footprint = Footprint::new(0.3, 0.4, 0.6, 0.2);
        for theta in &[-3.0, -0.7, 0.0, 0.4, 1.9, 5.5] {
            let a = footprint_to_corners(&Pose::new(-1.2, 0.8, *theta), &footprint);
            let b = footprint_to_corners(&Pose::new(-1.2, 0.8, theta + 2.0 * PI), &footprint);
            a.iter().zip(b.iter()).for_each(|(p, q)| assert_point_eq(*p, *q));
        }
    }

    #[test]
    fn test_rotation_radius_ignores_right_and_back() {
        let base = rotation_radius(&Footprint::new(0.3, 0.1, 0.4, 0.1));
        let wider = rotation_radius(&Footprint::new(0.3, 5.0, 0.4, 7.0));

        assert_relative_eq!(base, 0.5, epsilon = 1e-12);
        assert_relative_eq!(base, wider);
    }

    #[test]
    fn test_heading_tip_is_front_midpoint() {
        let shape = RobotShape::new(
            &Pose::new(1.0, -2.0, 0.8),
            &Footprint::new(0.4, 0.2, 0.9, 0.3),
        );
        let (fl, fr) = (shape.front_left(), shape.front_right());

        assert_eq!(shape.heading[0], midpoint(fl, fr));
    }

    #[test]
    fn test_heading_side_points() {
        let shape = RobotShape::new(&Pose::default(), &Footprint::new(1.0, 1.0, 1.0, 1.0));

        assert_point_eq(shape.heading[0], (1.0, 0.0));
        assert_point_eq(shape.heading[1], (0.5, 1.0));
        assert_point_eq(shape.heading[2], (0.5, -1.0));
    }

    #[test]
    fn test_zero_footprint_collapses_to_center() {
        let pose = Pose::new(4.0, -1.0, 1.0);
        let shape = RobotShape::new(&pose, &Footprint::default());

        shape
            .corners
            .iter()
            .for_each(|c| assert_point_eq(*c, pose.position()));
        assert_eq!(shape.rotation_radius, 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let shape = RobotShape::new(
            &Pose::new(f64::NAN, 0.0, 0.0),
            &Footprint::new(1.0, 1.0, 1.0, 1.0),
        );

        assert!(shape.front_left().0.is_nan());
        assert!(shape.front_left().1.is_finite());
        assert_relative_eq!(shape.rotation_radius, 2.0_f64.sqrt());
    }

    #[test]
    fn test_from_slice_pads_with_zero() {
        assert_eq!(Pose::from_slice(&[1.0]), Pose::new(1.0, 0.0, 0.0));
        assert_eq!(
            Footprint::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            Footprint::new(1.0, 2.0, 3.0, 4.0)
        );
        assert_eq!(Footprint::from_slice(&[]), Footprint::default());
    }

    #[test]
    fn test_closed_outline() {
        let shape = RobotShape::new(&Pose::default(), &Footprint::new(1.0, 1.0, 1.0, 1.0));
        let outline = shape.closed_outline();
        let heading = shape.closed_heading();

        assert_eq!(outline.len(), 5);
        assert_eq!(outline[0], outline[4]);
        assert_eq!(heading.len(), 4);
        assert_eq!(heading[0], heading[3]);
    }
}
