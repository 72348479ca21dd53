use thiserror::Error;

use crate::models::Action;

#[derive(Debug, Error)]
pub enum Error {
    /// The reply carried an `error` key.
    #[error("remote error: {0}")]
    Remote(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed reply: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0} request already in flight")]
    InFlight(Action),

    #[error("{0} environment variable must be set")]
    MissingEnv(&'static str),
}

impl Error {
    /// Remote, transport and decode failures all leave the display untouched.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            Error::Remote(_) | Error::Transport(_) | Error::Decode(_)
        )
    }
}
