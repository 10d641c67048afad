use std::collections::HashSet;

use tracing::trace;

use crate::infra::Position;
use crate::state::KnowledgeState;
use crate::world::Perception;

/// Folds the perception at `cell` into the knowledge state.
///
/// A quiet cell certifies all of its neighbours. A cell with stench or breeze
/// records its not-yet-safe neighbours as suspects, and the suspect sets are
/// then rebuilt from all records gathered so far.
#[tracing::instrument(level = "trace", skip(state, neighbors))]
pub fn observe(
    state: &mut KnowledgeState,
    cell: Position,
    perception: Perception,
    neighbors: &[Position],
) {
    state.visited.insert(cell);
    state.known_safe.insert(cell);
    *state.visit_count.entry(cell).or_insert(0) += 1;

    if perception.is_quiet() {
        state.known_safe.extend(neighbors.iter().copied());
    }

    if perception.stench {
        let unknown = unknown_neighbors(state, neighbors);
        state.stench.record(cell, unknown);
    }

    if perception.breeze {
        let unknown = unknown_neighbors(state, neighbors);
        state.breeze.record(cell, unknown);
    }

    refresh_suspects(state);

    trace!(
        possible_wumpus = state.possible_wumpus().len(),
        possible_pits = state.possible_pits().len(),
        known_safe = state.known_safe.len(),
        "Knowledge updated"
    );
}

fn unknown_neighbors(state: &KnowledgeState, neighbors: &[Position]) -> HashSet<Position> {
    neighbors
        .iter()
        .filter(|n| !state.is_safe(n))
        .copied()
        .collect()
}

pub fn refresh_suspects(state: &mut KnowledgeState) {
    state.stench.refresh(&state.known_safe);
    state.breeze.refresh(&state.known_safe);
}

/// Stench evidence gathered before a wumpus died is stale.
pub fn forget_stench(state: &mut KnowledgeState) {
    state.stench.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Bounds;
    use crate::state::{DangerMemory, intersect_suspects};

    const STENCH: Perception = Perception {
        stench: true,
        breeze: false,
    };
    const BREEZE: Perception = Perception {
        stench: false,
        breeze: true,
    };
    const QUIET: Perception = Perception {
        stench: false,
        breeze: false,
    };

    fn fresh(start: Position) -> KnowledgeState {
        KnowledgeState::new(start, &DangerMemory::new())
    }

    fn observe_at(state: &mut KnowledgeState, bounds: Bounds, cell: Position, perception: Perception) {
        let neighbors = bounds.neighbors(cell);
        observe(state, cell, perception, &neighbors);
    }

    #[test]
    fn test_quiet_cell_certifies_all_neighbors() {
        let bounds = Bounds::square(5);
        let mut state = fresh(Position::new(4, 0));
        let cell = Position::new(2, 2);

        observe_at(&mut state, bounds, cell, QUIET);

        assert!(state.is_visited(&cell));
        assert_eq!(state.visits(&cell), 1);
        for neighbor in bounds.neighbors(cell) {
            assert!(state.is_safe(&neighbor), "{} should be safe", neighbor);
        }
    }

    #[test]
    fn test_stench_records_only_unknown_neighbors() {
        let bounds = Bounds::square(4);
        let start = Position::new(3, 0);
        let mut state = fresh(start);

        observe_at(&mut state, bounds, start, QUIET);
        // (2,0) is now safe through the quiet start cell.
        observe_at(&mut state, bounds, Position::new(2, 0), STENCH);

        let record = &state.stench.records()[&Position::new(2, 0)];
        assert_eq!(
            record,
            &HashSet::from([Position::new(1, 0), Position::new(2, 1)])
        );
        assert_eq!(state.possible_wumpus(), record);
    }

    #[test]
    fn test_two_stench_records_narrow_to_common_cell() {
        let bounds = Bounds::square(4);
        let start = Position::new(3, 0);
        let mut state = fresh(start);

        observe_at(&mut state, bounds, start, QUIET);
        observe_at(&mut state, bounds, Position::new(2, 0), STENCH);
        observe_at(&mut state, bounds, Position::new(3, 1), STENCH);

        // (2,0) suspects {(1,0),(2,1)}; (3,1) suspects {(2,1),(3,2)}.
        assert_eq!(state.possible_wumpus(), &HashSet::from([Position::new(2, 1)]));
        assert!(state.possible_pits().is_empty());
    }

    #[test]
    fn test_suspects_always_match_intersection_minus_safe() {
        let bounds = Bounds::square(5);
        let start = Position::new(4, 0);
        let mut state = fresh(start);
        let walk = [
            (start, QUIET),
            (Position::new(3, 0), BREEZE),
            (Position::new(4, 1), BREEZE),
            (Position::new(4, 2), QUIET),
            (Position::new(3, 2), STENCH),
        ];

        for (cell, perception) in walk {
            observe_at(&mut state, bounds, cell, perception);
            assert_eq!(
                state.possible_wumpus(),
                &intersect_suspects(state.stench.records(), &state.known_safe)
            );
            assert_eq!(
                state.possible_pits(),
                &intersect_suspects(state.breeze.records(), &state.known_safe)
            );
        }
        // Both breezes point at (3,1); the quiet (4,2) never touched it.
        assert_eq!(state.possible_pits(), &HashSet::from([Position::new(3, 1)]));
    }

    #[test]
    fn test_later_safety_proof_drops_suspect_without_touching_record() {
        let bounds = Bounds::square(5);
        let start = Position::new(4, 0);
        let mut state = fresh(start);

        observe_at(&mut state, bounds, start, QUIET);
        observe_at(&mut state, bounds, Position::new(3, 0), BREEZE);
        assert!(state.breeze.is_suspect(&Position::new(3, 1)));

        observe_at(&mut state, bounds, Position::new(4, 1), QUIET);
        assert!(!state.breeze.is_suspect(&Position::new(3, 1)));
        assert!(state.breeze.records()[&Position::new(3, 0)].contains(&Position::new(3, 1)));
    }

    #[test]
    fn test_forget_stench_clears_records_and_suspects() {
        let bounds = Bounds::square(4);
        let start = Position::new(3, 0);
        let mut state = fresh(start);

        observe_at(&mut state, bounds, start, STENCH);
        assert!(!state.possible_wumpus().is_empty());

        forget_stench(&mut state);
        assert!(state.stench.records().is_empty());
        assert!(state.possible_wumpus().is_empty());
    }
}
