use crate::models::Difficulty;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("provider returned response code {code}: {message}")]
    Provider { code: u8, message: String },

    #[error("provider returned no {difficulty} questions")]
    EmptyResultSet { difficulty: Difficulty },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("config {}: {}", path.display(), message)]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Errors raised while loading questions. All of them end the session.
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            QuizError::Provider { .. }
                | QuizError::EmptyResultSet { .. }
                | QuizError::Transport(_)
                | QuizError::MalformedResponse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
