use rand::RngCore;

use crate::infra::Position;
use crate::planners::Action;
use crate::planners::strategies::planner::{DecisionContext, SelectAction};

/// Falls back to already-visited safe cells, preferring the least worn path
/// and avoiding stepping straight back.
pub struct LeastVisitedSafeStrategy;

impl SelectAction for LeastVisitedSafeStrategy {
    fn name(&self) -> &'static str {
        "LeastVisitedSafeStrategy"
    }

    fn try_select(
        &mut self,
        ctx: &DecisionContext<'_>,
        candidates: &[Position],
        _rng: &mut dyn RngCore,
    ) -> Option<Action> {
        let mut best: Option<(Position, u32)> = None;
        for cell in candidates.iter().filter(|c| ctx.knowledge.is_safe(c)) {
            let cost = ctx.policy.revisit_cost(ctx.knowledge, cell);
            if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                best = Some((*cell, cost));
            }
        }
        best.map(|(pos, _)| Action::Move(pos))
    }
}
