use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::infra::Position;
use crate::planners::Action;
use crate::planners::strategies::planner::{DecisionContext, SelectAction};

/// Known-safe cells that were never stepped on, picked at random.
pub struct UnexploredSafeStrategy;

impl SelectAction for UnexploredSafeStrategy {
    fn name(&self) -> &'static str {
        "UnexploredSafeStrategy"
    }

    fn try_select(
        &mut self,
        ctx: &DecisionContext<'_>,
        candidates: &[Position],
        rng: &mut dyn RngCore,
    ) -> Option<Action> {
        let unexplored: Vec<Position> = candidates
            .iter()
            .filter(|c| ctx.knowledge.is_safe(c) && !ctx.knowledge.is_visited(c))
            .copied()
            .collect();

        unexplored.choose(rng).map(|pos| Action::Move(*pos))
    }
}
