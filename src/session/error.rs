/// Failures surfaced by the session. In-game outcomes such as death or an
/// impossible world are never errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A step or attempt was requested before any world existed.
    #[error("no world has been created yet")]
    NoWorld,

    #[error("replay transcript error: {0}")]
    Replay(#[from] std::io::Error),
}
