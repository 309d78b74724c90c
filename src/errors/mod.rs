use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedplusError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Network errors
    #[error("Fetching activities failed: {0}")]
    Fetch(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    #[error("Malformed post: missing required field `{0}`")]
    MalformedPost(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FeedplusResult<T> = Result<T, FeedplusError>;
