mod danger_memory;
mod evidence;
mod knowledge;

pub use danger_memory::DangerMemory;
pub use evidence::{HazardEvidence, intersect_suspects};
pub use knowledge::KnowledgeState;
