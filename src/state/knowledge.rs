use std::collections::{HashMap, HashSet};

use crate::infra::Position;
use crate::state::{DangerMemory, HazardEvidence};

/// Everything the agent believes about the world during one attempt.
#[derive(Debug, Clone)]
pub struct KnowledgeState {
    pub visited: HashSet<Position>,
    pub known_safe: HashSet<Position>,
    /// Seeded from the cross-attempt memory; only ever grows.
    known_danger: HashSet<Position>,
    pub stench: HazardEvidence,
    pub breeze: HazardEvidence,
    pub visit_count: HashMap<Position, u32>,
    pub previous: Option<Position>,
}

impl KnowledgeState {
    pub fn new(start: Position, memory: &DangerMemory) -> Self {
        Self {
            visited: HashSet::new(),
            known_safe: HashSet::from([start]),
            known_danger: memory.cells().clone(),
            stench: HazardEvidence::new(),
            breeze: HazardEvidence::new(),
            visit_count: HashMap::new(),
            previous: None,
        }
    }

    pub fn known_danger(&self) -> &HashSet<Position> {
        &self.known_danger
    }

    pub fn is_dangerous(&self, pos: &Position) -> bool {
        self.known_danger.contains(pos)
    }

    pub fn is_safe(&self, pos: &Position) -> bool {
        self.known_safe.contains(pos)
    }

    pub fn is_visited(&self, pos: &Position) -> bool {
        self.visited.contains(pos)
    }

    pub fn mark_dangerous(&mut self, pos: Position) {
        self.known_danger.insert(pos);
    }

    pub fn visits(&self, pos: &Position) -> u32 {
        self.visit_count.get(pos).copied().unwrap_or(0)
    }

    pub fn possible_wumpus(&self) -> &HashSet<Position> {
        self.stench.suspects()
    }

    pub fn possible_pits(&self) -> &HashSet<Position> {
        self.breeze.suspects()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_seeds_danger_from_memory() {
        let mut memory = DangerMemory::new();
        memory.remember(Position::new(1, 1));

        let state = KnowledgeState::new(Position::new(3, 0), &memory);
        assert!(state.is_safe(&Position::new(3, 0)));
        assert!(state.is_dangerous(&Position::new(1, 1)));
        assert!(state.visited.is_empty());
        assert_eq!(state.visits(&Position::new(3, 0)), 0);
        assert!(state.previous.is_none());
    }
}
