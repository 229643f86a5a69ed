use std::fmt;

use pathviz_core::{GridError, UnknownAlgo};

/// Errors returned by the engine entry points and the [`Visualizer`](crate::Visualizer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The strategy name matches no known algorithm.
    UnsupportedStrategy(String),
    /// The grid does not meet the algorithm's preconditions.
    Precondition(GridError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedStrategy(name) => {
                write!(f, "unsupported algorithm: \u{201c}{name}\u{201d}")
            }
            Self::Precondition(err) => write!(f, "precondition failed: {err}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnsupportedStrategy(_) => None,
            Self::Precondition(err) => Some(err),
        }
    }
}

impl From<GridError> for EngineError {
    fn from(err: GridError) -> Self {
        Self::Precondition(err)
    }
}

impl From<UnknownAlgo> for EngineError {
    fn from(err: UnknownAlgo) -> Self {
        Self::UnsupportedStrategy(err.name)
    }
}
