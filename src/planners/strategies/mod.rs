// Strategy modules
pub mod planner;

pub mod least_risk;
pub mod least_visited_safe;
pub mod shoot_suspect;
pub mod unexplored_safe;

// Re-export commonly used types
pub use planner::{DecisionContext, SelectAction, StrategyPlanner};
