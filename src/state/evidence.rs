use std::collections::{HashMap, HashSet};

use crate::infra::Position;

/// Perception evidence for one hazard kind.
///
/// `records` maps every visited cell that triggered the indicator to the
/// neighbours that were not yet known safe when it was observed. `suspects` is
/// derived from `records` and must be refreshed with [`HazardEvidence::refresh`]
/// after either `records` or the known-safe set changes.
#[derive(Debug, Clone, Default)]
pub struct HazardEvidence {
    records: HashMap<Position, HashSet<Position>>,
    suspects: HashSet<Position>,
}

impl HazardEvidence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the record for `cell`. Empty sets are not stored.
    pub fn record(&mut self, cell: Position, unknown_neighbors: HashSet<Position>) {
        if !unknown_neighbors.is_empty() {
            self.records.insert(cell, unknown_neighbors);
        }
    }

    pub fn records(&self) -> &HashMap<Position, HashSet<Position>> {
        &self.records
    }

    pub fn suspects(&self) -> &HashSet<Position> {
        &self.suspects
    }

    pub fn is_suspect(&self, pos: &Position) -> bool {
        self.suspects.contains(pos)
    }

    pub fn refresh(&mut self, known_safe: &HashSet<Position>) {
        self.suspects = intersect_suspects(&self.records, known_safe);
    }

    /// Drops all evidence; used once the world changed under the agent.
    pub fn clear(&mut self) {
        self.records.clear();
        self.suspects.clear();
    }
}

/// Cells named by every record, minus the ones proven safe.
/// Empty when there are no records. Independent of record order.
pub fn intersect_suspects(
    records: &HashMap<Position, HashSet<Position>>,
    known_safe: &HashSet<Position>,
) -> HashSet<Position> {
    let mut sets = records.values();
    let Some(first) = sets.next() else {
        return HashSet::new();
    };

    let mut suspects: HashSet<Position> = first.difference(known_safe).copied().collect();
    for set in sets {
        suspects.retain(|pos| set.contains(pos));
    }
    suspects
}
