use std::path::PathBuf;
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream returned a body that is not valid JSON: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),
}

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid base64 image data: {0}")]
    Decode(#[from] base64::DecodeError),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
