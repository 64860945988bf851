use helm_autonav::{JumpPoint, JumpPointId};
use nalgebra::{vector, Vector2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JumpLane {
    pub point: JumpPoint,
    /// Name of the region on the far side.
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub lanes: Vec<JumpLane>,
}

impl Region {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            lanes: vec![],
        }
    }

    pub fn with_lane(mut self, position: Vector2<f64>, radius: f64, destination: &str) -> Self {
        self.lanes.push(JumpLane {
            point: JumpPoint { position, radius },
            destination: destination.to_string(),
        });
        self
    }

    pub fn lane(&self, id: JumpPointId) -> Option<&JumpLane> {
        self.lanes.get(id.0)
    }

    /// Where a vehicle arriving from `origin` appears.
    pub fn arrival_point(&self, origin: &str) -> Vector2<f64> {
        self.lanes
            .iter()
            .find(|lane| lane.destination == origin)
            .map(|lane| lane.point.position)
            .unwrap_or(vector![0.0, 0.0])
    }
}

impl helm_autonav::Region for Region {
    fn jump_point(&self, id: JumpPointId) -> Option<JumpPoint> {
        self.lane(id).map(|lane| lane.point)
    }
}
