use rand::RngCore;
use tracing::debug;

use crate::infra::Position;
use crate::planners::Action;
use crate::planners::strategies::planner::{DecisionContext, SelectAction};

/// Nothing is known safe: take the candidate with the lowest weighted risk.
pub struct LeastRiskStrategy;

impl SelectAction for LeastRiskStrategy {
    fn name(&self) -> &'static str {
        "LeastRiskStrategy"
    }

    fn try_select(
        &mut self,
        ctx: &DecisionContext<'_>,
        candidates: &[Position],
        _rng: &mut dyn RngCore,
    ) -> Option<Action> {
        let mut best: Option<(Position, f32)> = None;
        for cell in candidates {
            let score = ctx.policy.risk_score(ctx.knowledge, cell);
            debug!("Risk of {} is {:.1}", cell, score);
            if best.is_none_or(|(_, best_score)| score < best_score) {
                best = Some((*cell, score));
            }
        }
        best.map(|(pos, _)| Action::Move(pos))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::planners::RiskPolicy;
    use crate::state::{DangerMemory, KnowledgeState};

    #[test]
    fn test_avoids_suspects_and_backtracking() {
        let current = Position::new(1, 1);
        let north = Position::new(0, 1);
        let south = Position::new(2, 1);
        let west = Position::new(1, 0);
        let east = Position::new(1, 2);
        let candidates = [north, south, west, east];

        let mut knowledge = KnowledgeState::new(current, &DangerMemory::new());
        knowledge.stench.record(current, HashSet::from([north]));
        knowledge.breeze.record(current, HashSet::from([south]));
        knowledge.stench.refresh(&knowledge.known_safe);
        knowledge.breeze.refresh(&knowledge.known_safe);
        knowledge.visited.insert(west);
        knowledge.visit_count.insert(west, 1);
        knowledge.previous = Some(west);

        let policy = RiskPolicy::default();
        let ctx = DecisionContext {
            knowledge: &knowledge,
            current,
            neighbors: &candidates,
            has_arrow: false,
            policy: &policy,
        };

        // north 2.5, south 1.5, west 2.7, east -0.5
        let action = LeastRiskStrategy.try_select(&ctx, &candidates, &mut StdRng::seed_from_u64(0));
        assert_eq!(action, Some(Action::Move(east)));
    }

    #[test]
    fn test_equal_risk_goes_to_first_candidate() {
        let current = Position::new(2, 2);
        let candidates = [
            Position::new(1, 2),
            Position::new(3, 2),
            Position::new(2, 1),
            Position::new(2, 3),
        ];
        let knowledge = KnowledgeState::new(current, &DangerMemory::new());
        let policy = RiskPolicy::default();
        let ctx = DecisionContext {
            knowledge: &knowledge,
            current,
            neighbors: &candidates,
            has_arrow: false,
            policy: &policy,
        };

        // Every cell scores -0.5.
        let action = LeastRiskStrategy.try_select(&ctx, &candidates, &mut StdRng::seed_from_u64(0));
        assert_eq!(action, Some(Action::Move(Position::new(1, 2))));
    }
}
