mod attempt;
mod error;
mod game;
mod score;

pub use attempt::{Attempt, AttemptStatus, StepEvent, Turn};
pub use error::SessionError;
pub use game::{Session, SessionSummary, StepOutcome};
pub use score::{Score, ScoreEvent, ScoreSink, ScoringRules};
