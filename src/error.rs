//! Error definitions for the CLI.

use thiserror::Error;

/// Everything that can abort a run, one variant per failure stage. The
/// top-level handler in `main` prints the message and terminates; nothing
/// is retried mid-flow.
#[derive(Debug, Error)]
pub enum Error {
    /// Listing the image directory or reading the chosen file failed.
    #[error("image selection failed: {message}")]
    Selection { message: String },

    /// The user typed something that is not a valid menu choice.
    #[error("invalid input: {message}")]
    Input { message: String },

    /// The service-account key could not be loaded or exchanged for a
    /// token.
    #[error("credential error: {message}")]
    Credential { message: String },

    /// The annotate endpoint rejected the request or returned a per-image
    /// error.
    #[error("vision API error: {message}")]
    Api { message: String },

    #[error("HTTP error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
