mod composite_observer;
mod config;
mod default_observer;
mod game_observer;
mod replay_observer;
mod types;

pub use composite_observer::CompositeObserver;
pub use config::{AgentConfig, DEFAULT_ATTEMPTS, DEFAULT_MAX_STEPS};
pub use default_observer::{DefaultObserver, draw_ascii_map};
pub use game_observer::{NullObserver, SessionObserver};
pub use replay_observer::ReplayObserver;
pub use types::{Bounds, Direction, Position};
