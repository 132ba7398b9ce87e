//! Error types surfaced by the crate.
//!
//! Dataset problems below the document level (bad entries, unlabeled keys)
//! are never errors; the loader skips them. Only failing to read or parse
//! the document itself is reported.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read dataset {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is not valid JSON")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("this question has already been answered")]
    AlreadyAnswered,

    #[error("option {option} is out of range (question has {available} options)")]
    OptionOutOfRange { option: usize, available: usize },

    #[error("the quiz is finished")]
    Finished,
}

/// Why a "jump to card" request could not be honoured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JumpError {
    #[error("enter a number")]
    NotANumber,

    #[error("enter a number from 1 to {max}")]
    OutOfRange { max: usize },

    #[error("card #{0} not found")]
    CardNotFound(i64),

    #[error("card #{index} is not part of lesson {lesson}")]
    NotInLesson { index: i64, lesson: u32 },

    #[error("there are no cards to show")]
    EmptyView,
}
