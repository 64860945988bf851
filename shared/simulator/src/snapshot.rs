use crate::scenario::Status;
use crate::ship::ShipClass;
use helm_autonav::{Notice, Session};
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Snapshot {
    pub tick: u32,
    pub time: f64,
    pub status: Status,
    pub region: String,
    pub session: Session,
    pub class: ShipClass,
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
    pub heading: f64,
    pub acceleration: f64,
    pub fuel: f64,
    pub time_compression: f64,
    pub notices: Vec<Notice>,
}
