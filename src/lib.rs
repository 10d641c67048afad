pub mod infra;
pub mod planners;
pub mod session;
pub mod state;
pub mod world;

// Re-export commonly used types for convenience
pub use infra::{AgentConfig, Position};
pub use planners::{Action, StrategyPlanner};
pub use session::{Session, SessionError, SessionSummary};
pub use world::{GridWorld, WorldConfig};
