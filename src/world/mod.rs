mod generator;
mod grid;

pub use generator::{
    DEFAULT_GRID_SIZE, DEFAULT_PITS, DEFAULT_WUMPUS, MAX_GRID_SIZE, MAX_PITS, MAX_WUMPUS,
    MIN_GRID_SIZE, WorldConfig,
};
pub use grid::{GridWorld, Item};

use crate::infra::{Bounds, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hazard {
    Wumpus,
    Pit,
}

impl Hazard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hazard::Wumpus => "wumpus",
            Hazard::Pit => "pit",
        }
    }
}

/// Ground truth of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellContents {
    pub wumpus: bool,
    pub pit: bool,
    pub gold: bool,
}

impl CellContents {
    /// The lethal hazard in this cell, wumpus taking precedence.
    pub fn hazard(&self) -> Option<Hazard> {
        if self.wumpus {
            Some(Hazard::Wumpus)
        } else if self.pit {
            Some(Hazard::Pit)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.wumpus && !self.pit && !self.gold
    }
}

/// What the agent senses while standing on a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Perception {
    pub stench: bool,
    pub breeze: bool,
}

impl Perception {
    pub fn is_quiet(&self) -> bool {
        !self.stench && !self.breeze
    }

    pub fn describe(&self) -> String {
        match (self.stench, self.breeze) {
            (false, false) => "quiet cell: no stench, no breeze".to_string(),
            (true, false) => "stench nearby, moving carefully".to_string(),
            (false, true) => "breeze nearby, moving carefully".to_string(),
            (true, true) => "stench and breeze nearby, moving carefully".to_string(),
        }
    }
}

/// The environment the agent explores.
///
/// The agent only ever asks for the contents of the cell it enters and the
/// perception of the cell it stands on; everything else is inferred.
pub trait World {
    fn bounds(&self) -> Bounds;

    fn start(&self) -> Position;

    /// Contents of `pos`; out-of-grid cells are empty.
    fn cell(&self, pos: Position) -> CellContents;

    /// Perception at `pos`; out-of-grid cells are quiet.
    fn perception(&self, pos: Position) -> Perception;

    fn neighbors(&self, pos: Position) -> Vec<Position> {
        self.bounds().neighbors(pos)
    }

    /// Removes a wumpus at `pos`. Returns false when there was none.
    /// Stench is left untouched until `recompute_stench` is called.
    fn remove_wumpus(&mut self, pos: Position) -> bool;

    fn recompute_stench(&mut self);
}
