use std::fmt;

use crate::infra::Position;

/// What the agent does on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fire the one arrow through this adjacent cell.
    Attack(Position),
    Move(Position),
    /// Every neighbour is known to be deadly.
    Impossible,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Attack(pos) => write!(f, "shoot towards {}", pos),
            Action::Move(pos) => write!(f, "move to {}", pos),
            Action::Impossible => write!(f, "declare impossible"),
        }
    }
}
