pub mod region;
pub mod rng;
pub mod scenario;
pub mod ship;
pub mod simulation;
pub mod snapshot;
