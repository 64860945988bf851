use crate::config::AutonavConfig;
use nalgebra::{vector, Vector2};
use serde::{Deserialize, Serialize};

/// Index of a jump point in the region that was current when it was
/// selected. It may dangle after the region is reloaded.
#[derive(Hash, PartialEq, Eq, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct JumpPointId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JumpPoint {
    pub position: Vector2<f64>,
    pub radius: f64,
}

impl JumpPoint {
    pub fn contains(&self, position: Vector2<f64>) -> bool {
        (self.position - position).magnitude_squared() <= self.radius * self.radius
    }
}

/// Propulsion capabilities of a vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub mass: f64,
    pub thrust: f64,
    /// Degrees per second.
    pub turn_rate: f64,
    pub max_speed: f64,
}

impl Kinematics {
    pub fn deceleration(&self) -> f64 {
        self.thrust / self.mass
    }

    /// Whether the predictor can be evaluated for this vehicle at all.
    pub fn is_maneuverable(&self) -> bool {
        let positive = |x: f64| x.is_finite() && x > 0.0;
        positive(self.mass) && positive(self.thrust) && positive(self.turn_rate)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleFlags {
    pub manual_control: bool,
    pub hyperspace: bool,
    pub hyperspace_preparing: bool,
}

/// Everything autonav reads from the vehicle in one tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    /// Radians.
    pub heading: f64,
    pub kinematics: Kinematics,
    /// Commanded acceleration level, 0.0 (off) to 1.0 (full).
    pub acceleration: f64,
    pub fuel: f64,
    pub flags: VehicleFlags,
    pub lockons: u32,
    pub nav_target: Option<JumpPointId>,
    pub time_compressed: bool,
}

impl VehicleState {
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            position: vector![0.0, 0.0],
            velocity: vector![0.0, 0.0],
            heading: 0.0,
            kinematics: Kinematics {
                mass: 1.0,
                thrust: 50.0,
                turn_rate: 90.0,
                max_speed: 200.0,
            },
            acceleration: 0.0,
            fuel: 0.0,
            flags: Default::default(),
            lockons: 0,
            nav_target: None,
            time_compressed: false,
        }
    }
}

/// The region the vehicle is flying in, as seen by autonav.
pub trait Region {
    fn jump_point(&self, id: JumpPointId) -> Option<JumpPoint>;

    /// Whether the vehicle may jump through `jump` right now.
    fn can_hyperspace(
        &self,
        vehicle: &VehicleState,
        jump: &JumpPoint,
        config: &AutonavConfig,
    ) -> bool {
        vehicle.fuel >= config.jump_fuel_cost
            && vehicle.velocity.magnitude_squared() < config.min_vel_err * config.min_vel_err
            && jump.contains(vehicle.position)
    }
}

impl Region for [JumpPoint] {
    fn jump_point(&self, id: JumpPointId) -> Option<JumpPoint> {
        self.get(id.0).copied()
    }
}

impl Region for Vec<JumpPoint> {
    fn jump_point(&self, id: JumpPointId) -> Option<JumpPoint> {
        self.as_slice().jump_point(id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn jumps() -> Vec<JumpPoint> {
        vec![JumpPoint {
            position: vector![1000.0, 0.0],
            radius: 100.0,
        }]
    }

    #[test]
    fn test_lookup() {
        let jumps = jumps();
        assert!(jumps.jump_point(JumpPointId(0)).is_some());
        assert_eq!(jumps.jump_point(JumpPointId(1)), None);
    }

    #[test]
    fn test_can_hyperspace() {
        let config = AutonavConfig::default();
        let jumps = jumps();
        let jump = jumps[0];
        let mut vehicle = VehicleState {
            position: vector![950.0, 0.0],
            fuel: 100.0,
            ..Default::default()
        };
        assert!(jumps.can_hyperspace(&vehicle, &jump, &config));

        vehicle.velocity = vector![10.0, 0.0];
        assert!(!jumps.can_hyperspace(&vehicle, &jump, &config));

        vehicle.velocity = vector![0.0, 0.0];
        vehicle.position = vector![850.0, 0.0];
        assert!(!jumps.can_hyperspace(&vehicle, &jump, &config));

        vehicle.position = vector![950.0, 0.0];
        vehicle.fuel = 99.0;
        assert!(!jumps.can_hyperspace(&vehicle, &jump, &config));
    }

    #[test]
    fn test_maneuverable() {
        let mut kinematics = VehicleState::default().kinematics;
        assert!(kinematics.is_maneuverable());
        kinematics.thrust = 0.0;
        assert!(!kinematics.is_maneuverable());
        kinematics.thrust = 50.0;
        kinematics.turn_rate = -1.0;
        assert!(!kinematics.is_maneuverable());
    }
}
