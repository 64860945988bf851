use crate::notice::Notice;
use serde::{Deserialize, Serialize};

/// Identifies a UI window owned by the caller.
#[derive(Hash, PartialEq, Eq, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct WindowId(pub u32);

/// A single request from autonav to the simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Commanded acceleration level, 0.0 or 1.0.
    SetAcceleration(f64),
    /// Turn towards this bearing (radians), rate-limited by the vehicle.
    Face(f64),
    Jump,
    AbortHyperspacePreparation,
    SetTimeCompression(f64),
    EndTimeCompression,
    CloseWindow(WindowId),
    Notify(Notice),
}

/// How a session ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Arrived,
    Aborted { reason: String },
}

/// Commands produced by one autonav call, in the order they should be applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Directives {
    pub commands: Vec<Command>,
    /// Set when this call ended the session.
    pub outcome: Option<Outcome>,
}

impl Directives {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn notify(&mut self, notice: Notice) {
        self.push(Command::Notify(notice));
    }

    pub fn extend(&mut self, other: Directives) {
        self.commands.extend(other.commands);
        if other.outcome.is_some() {
            self.outcome = other.outcome;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.outcome.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Final acceleration level requested, if any.
    pub fn acceleration(&self) -> Option<f64> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::SetAcceleration(x) => Some(*x),
            _ => None,
        })
    }

    /// Final bearing requested, if any.
    pub fn bearing(&self) -> Option<f64> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::Face(x) => Some(*x),
            _ => None,
        })
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.commands.iter().filter_map(|c| match c {
            Command::Notify(notice) => Some(notice),
            _ => None,
        })
    }

    pub fn contains_jump(&self) -> bool {
        self.commands.contains(&Command::Jump)
    }
}

impl IntoIterator for Directives {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}
