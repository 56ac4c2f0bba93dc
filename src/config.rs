//! YAML input describing the robots to plot.
//!
//! ```yaml
//! data:
//!   - robot_name: "base"
//!     pose: [0.0, 0.0, 0.0]        # x, y, theta
//!     footprint: [0.3, 0.3, 0.5, 0.2]  # LW, RW, FL, BL
//! ```

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::Result;
use crate::geometry::{Footprint, Pose};
use crate::robot::RobotData;

pub const DEFAULT_INPUT_PATH: &str = "input.yaml";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub data: Option<Vec<RobotEntry>>,
}

/// One robot record. Every field may be left out.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RobotEntry {
    #[serde(default)]
    pub robot_name: Option<String>,

    /// `[x, y, theta]`
    #[serde(default)]
    pub pose: Option<Vec<f64>>,

    /// `[LW, RW, FL, BL]`
    #[serde(default)]
    pub footprint: Option<Vec<f64>>,
}

impl InputConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        debug!("Read {} bytes from {}", contents.len(), path.display());
        Self::from_yaml(&contents)
    }

    /// An empty document is the same as a document without `data`.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_value(value)?)
    }

    pub fn robots(&self) -> Vec<RobotData> {
        self.data
            .iter()
            .flatten()
            .map(RobotEntry::to_robot)
            .collect()
    }
}

impl RobotEntry {
    pub fn name(&self) -> String {
        self.robot_name.clone().unwrap_or_default()
    }

    pub fn pose(&self) -> Pose {
        self.pose
            .as_deref()
            .map(Pose::from_slice)
            .unwrap_or_default()
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
            .as_deref()
            .map(Footprint::from_slice)
            .unwrap_or_default()
    }

    pub fn to_robot(&self) -> RobotData {
        RobotData::new(self.name(), self.pose(), self.footprint())
    }
}
