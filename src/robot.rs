use crate::geometry::{Footprint, Pose, RobotShape};

#[derive(Clone, Debug)]
pub struct RobotData {
    pub name: String,
    pub pose: Pose,
    pub footprint: Footprint,
    pub shape: RobotShape,
}

impl RobotData {
    pub fn new(name: String, pose: Pose, footprint: Footprint) -> Self {
        let shape = RobotShape::new(&pose, &footprint);
        RobotData {
            name,
            pose,
            footprint,
            shape,
        }
    }

    /// Text placed next to the center marker, e.g. `amr(1.000, 2.000, 0.500)`.
    pub fn center_label(&self) -> String {
        let fixed = |v: f64| {
            if v.is_nan() {
                String::from("nan")
            } else {
                format!("{:.3}", v)
            }
        };
        format!(
            "{}({}, {}, {})",
            self.name,
            fixed(self.pose.x),
            fixed(self.pose.y),
            fixed(self.pose.theta)
        )
    }

    pub fn rotation_radius(&self) -> f64 {
        self.shape.rotation_radius
    }

    /// Radius as printed on the console: whole values keep one decimal, e.g. `5.0`.
    pub fn rotation_radius_text(&self) -> String {
        let r = self.rotation_radius();
        if r.is_nan() {
            String::from("nan")
        } else if r.is_infinite() {
            String::from("inf")
        } else {
            format!("{:?}", r)
        }
    }
}
