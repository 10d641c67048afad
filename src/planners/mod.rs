mod action;
mod attack;
mod inference;
mod policy;
pub mod strategies;

pub use action::Action;
pub use attack::{ShotOutcome, resolve_attack};
pub use inference::{forget_stench, observe, refresh_suspects};
pub use policy::RiskPolicy;
pub use strategies::StrategyPlanner;
