use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid style '{0}': expected one of camel, snake, kebab, pascal")]
    InvalidStyle(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input nesting exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    #[error("Transform task failed: {0}")]
    TaskFailed(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
