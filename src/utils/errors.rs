use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouterError {
    #[error("malformed identifier '{0}': expected <provider>__<capability>")]
    MalformedIdentifier(String),

    #[error("remote invocation of '{provider}__{capability}' failed with status {status}")]
    RemoteInvocation {
        provider: String,
        capability: String,
        status: u16,
    },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for RouterError {
    fn from(e: reqwest::Error) -> Self {
        RouterError::Transport(e.to_string())
    }
}

pub type RouterResult<T> = Result<T, RouterError>;
