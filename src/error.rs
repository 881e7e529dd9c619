use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Wikipedia page uninitialized, load a page before searching it")]
    UninitializedState,

    #[error("{0} did not return a valid disambiguation page on Wikipedia")]
    PageNotFound(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
