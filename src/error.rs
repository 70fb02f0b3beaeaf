use thiserror::Error;

/// Failure modes of the lookup pipeline.
///
/// Fetch and decode errors are unrecoverable for a run and propagate to the
/// binary boundary; write errors are logged by the renderer and do not fail
/// the run once console output has succeeded.
#[derive(Debug, Error)]
pub enum FinderError {
    /// Connection failure or request timeout.
    #[error("request to crt.sh failed: {0}")]
    Network(#[source] reqwest::Error),

    /// crt.sh answered with a non-success status.
    #[error("crt.sh returned status code {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The response body could not be read to completion.
    #[error("failed to read crt.sh response body: {0}")]
    Read(#[source] reqwest::Error),

    /// The body was not the expected JSON array of certificate records.
    #[error("failed to parse crt.sh JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
