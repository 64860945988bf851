use helm_autonav::math::angle_diff;
use helm_autonav::Kinematics;
use nalgebra::{vector, Rotation2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub enum ShipClass {
    Shuttle,
    Courier,
    Freighter,
}

impl ShipClass {
    pub fn name(&self) -> &'static str {
        match self {
            ShipClass::Shuttle => "shuttle",
            ShipClass::Courier => "courier",
            ShipClass::Freighter => "freighter",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShipData {
    pub class: ShipClass,
    pub mass: f64,
    pub thrust: f64,
    /// Degrees per second.
    pub turn_rate: f64,
    pub max_speed: f64,
    pub fuel_capacity: f64,
}

impl Default for ShipData {
    fn default() -> ShipData {
        ShipData {
            class: ShipClass::Shuttle,
            mass: 1.0,
            thrust: 0.0,
            turn_rate: 0.0,
            max_speed: 0.0,
            fuel_capacity: 0.0,
        }
    }
}

pub fn shuttle() -> ShipData {
    ShipData {
        class: ShipClass::Shuttle,
        mass: 1.0,
        thrust: 50.0,
        turn_rate: 90.0,
        max_speed: 200.0,
        fuel_capacity: 300.0,
    }
}

pub fn courier() -> ShipData {
    ShipData {
        class: ShipClass::Courier,
        mass: 20.0,
        thrust: 1600.0,
        turn_rate: 150.0,
        max_speed: 300.0,
        fuel_capacity: 400.0,
    }
}

pub fn freighter() -> ShipData {
    ShipData {
        class: ShipClass::Freighter,
        mass: 200.0,
        thrust: 4000.0,
        turn_rate: 40.0,
        max_speed: 120.0,
        fuel_capacity: 600.0,
    }
}

/// A drag-free point mass with a single forward engine.
#[derive(Debug, Clone)]
pub struct Ship {
    pub data: ShipData,
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub heading: f64,
    /// Engine level, 0.0 to 1.0. Persists until changed.
    pub acceleration: f64,
    pub fuel: f64,
    pub manual_control: bool,
    pub lockons: u32,
    face: Option<f64>,
}

impl Ship {
    pub fn new(
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        heading: f64,
        data: ShipData,
    ) -> Ship {
        Ship {
            position,
            velocity,
            heading: heading.rem_euclid(TAU),
            acceleration: 0.0,
            fuel: data.fuel_capacity,
            manual_control: false,
            lockons: 0,
            face: None,
            data,
        }
    }

    pub fn kinematics(&self) -> Kinematics {
        Kinematics {
            mass: self.data.mass,
            thrust: self.data.thrust,
            turn_rate: self.data.turn_rate,
            max_speed: self.data.max_speed,
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn accelerate(&mut self, level: f64) {
        self.acceleration = level.clamp(0.0, 1.0);
    }

    /// Turn towards `bearing` during the next tick.
    pub fn face(&mut self, bearing: f64) {
        self.face = Some(bearing);
    }

    pub fn stop(&mut self) {
        self.velocity = vector![0.0, 0.0];
        self.acceleration = 0.0;
        self.face = None;
    }

    pub fn tick(&mut self, dt: f64) {
        // Turning.
        if let Some(bearing) = self.face.take() {
            let max_turn = self.data.turn_rate.to_radians() * dt;
            let delta = angle_diff(self.heading, bearing).clamp(-max_turn, max_turn);
            self.heading = (self.heading + delta).rem_euclid(TAU);
        }

        // Acceleration.
        if self.data.mass > 0.0 {
            let acceleration = self.acceleration * self.data.thrust / self.data.mass;
            self.velocity += Rotation2::new(self.heading) * vector![acceleration * dt, 0.0];
        }
        let speed = self.velocity.magnitude();
        if speed > self.data.max_speed {
            self.velocity *= self.data.max_speed / speed;
        }

        self.position += self.velocity * dt;
    }
}
