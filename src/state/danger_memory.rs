use std::collections::HashSet;

use crate::infra::Position;

/// Cells that killed the agent in an earlier attempt on the current world.
/// Survives attempts, cleared only when a new world is generated.
#[derive(Debug, Clone, Default)]
pub struct DangerMemory {
    cells: HashSet<Position>,
}

impl DangerMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the cell was not remembered yet.
    pub fn remember(&mut self, pos: Position) -> bool {
        self.cells.insert(pos)
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.cells.contains(pos)
    }

    pub fn cells(&self) -> &HashSet<Position> {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
