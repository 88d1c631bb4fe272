/// Error type for the stat system
#[derive(Debug, Clone, PartialEq)]
pub enum StatError {
    /// A stat identity token was built from the nil UUID
    NilGuid,

    /// A blueprint or config string named a stat kind that does not exist
    UnknownStatKind { kind: String },

    /// No loadout with this name was registered in `StatsConfig`
    UnknownLoadout { name: String },

    /// Pause durations must be finite and non-negative
    InvalidPause { seconds: f32 },
}

impl std::fmt::Display for StatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatError::NilGuid => {
                write!(f, "Stat identity token cannot be the nil UUID")
            }
            StatError::UnknownStatKind { kind } => {
                write!(f, "Unknown stat kind '{}'", kind)
            }
            StatError::UnknownLoadout { name } => {
                write!(f, "Stat loadout '{}' is not registered", name)
            }
            StatError::InvalidPause { seconds } => {
                write!(f, "Invalid pause duration {} seconds", seconds)
            }
        }
    }
}

impl std::error::Error for StatError {}

// Type alias for Result with StatError
pub type StatResult<T> = Result<T, StatError>;
