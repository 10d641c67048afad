use crate::infra::Position;
use crate::state::KnowledgeState;

/// Weights used when ranking moves.
///
/// `risk_score` is used when no neighbour is known safe; `revisit_cost` ranks
/// known-safe cells that were already visited. Lower is better for both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskPolicy {
    pub suspected_wumpus: f32,
    pub suspected_pit: f32,
    pub unvisited_bonus: f32,
    pub backtrack_penalty: f32,
    pub per_visit_penalty: f32,
    pub safe_backtrack_penalty: u32,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            suspected_wumpus: 3.0,
            suspected_pit: 2.0,
            unvisited_bonus: 0.5,
            backtrack_penalty: 2.0,
            per_visit_penalty: 0.7,
            safe_backtrack_penalty: 2,
        }
    }
}

impl RiskPolicy {
    pub fn risk_score(&self, knowledge: &KnowledgeState, cell: &Position) -> f32 {
        let mut score = 0.0;
        if knowledge.stench.is_suspect(cell) {
            score += self.suspected_wumpus;
        }
        if knowledge.breeze.is_suspect(cell) {
            score += self.suspected_pit;
        }
        if !knowledge.is_visited(cell) {
            score -= self.unvisited_bonus;
        }
        if knowledge.previous.as_ref() == Some(cell) {
            score += self.backtrack_penalty;
        }
        score + self.per_visit_penalty * knowledge.visits(cell) as f32
    }

    pub fn revisit_cost(&self, knowledge: &KnowledgeState, cell: &Position) -> u32 {
        let backtrack = if knowledge.previous.as_ref() == Some(cell) {
            self.safe_backtrack_penalty
        } else {
            0
        };
        knowledge.visits(cell) + backtrack
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::state::DangerMemory;

    fn knowledge() -> KnowledgeState {
        KnowledgeState::new(Position::new(4, 0), &DangerMemory::new())
    }

    #[test]
    fn test_unvisited_unknown_cell_gets_bonus_only() {
        let policy = RiskPolicy::default();
        let score = policy.risk_score(&knowledge(), &Position::new(1, 1));
        assert!((score + 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_suspect_cells_are_penalized() {
        let policy = RiskPolicy::default();
        let mut state = knowledge();
        let cell = Position::new(1, 1);
        state
            .stench
            .record(Position::new(1, 0), HashSet::from([cell]));
        state
            .breeze
            .record(Position::new(1, 0), HashSet::from([cell]));
        state.stench.refresh(&state.known_safe);
        state.breeze.refresh(&state.known_safe);

        // 3 + 2 - 0.5
        let score = policy.risk_score(&state, &cell);
        assert!((score - 4.5).abs() < 1e-5);
    }

    #[test]
    fn test_backtrack_and_visits_are_penalized() {
        let policy = RiskPolicy::default();
        let mut state = knowledge();
        let cell = Position::new(3, 0);
        state.visited.insert(cell);
        state.visit_count.insert(cell, 2);
        state.previous = Some(cell);

        // 2 + 0.7 * 2
        let score = policy.risk_score(&state, &cell);
        assert!((score - 3.4).abs() < 1e-5);
        assert_eq!(policy.revisit_cost(&state, &cell), 4);
        assert_eq!(policy.revisit_cost(&state, &Position::new(4, 1)), 0);
    }
}
