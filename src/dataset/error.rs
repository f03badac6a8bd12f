use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Dataset download failed")]
    DownloadIo(#[from] std::io::Error), // stream errors, read_to_end

    // Errors during CSV reading (inside blocking task)
    #[error("I/O error spilling CSV data to a temporary file")]
    CsvReadIo(#[source] std::io::Error),
    #[error("Parsing error processing CSV data")]
    CsvReadPolars(#[source] PolarsError),

    #[error("Required column '{0}' not found in the dataset")]
    MissingColumn(String),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Failed processing DataFrame: {0}")]
    Polars(#[from] PolarsError),
}
