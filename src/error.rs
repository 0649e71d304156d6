use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two compared inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSide {
    First,
    Second,
}

impl fmt::Display for InputSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSide::First => write!(f, "first"),
            InputSide::Second => write!(f, "second"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("Could not read {side} file {}", .path.display())]
    InputUnreadable {
        side: InputSide,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CompareError {
    /// The input that failed.
    pub fn side(&self) -> InputSide {
        match self {
            CompareError::InputUnreadable { side, .. } => *side,
        }
    }
}
