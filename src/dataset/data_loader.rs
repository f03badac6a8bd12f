use crate::dataset::error::DatasetError;
use crate::types::raw_table::RawTable;
use futures_util::TryStreamExt;
use log::{info, warn};
use reqwest::Client;
use std::pin::pin;
use tokio::io::AsyncReadExt;
use tokio::task;
use tokio_util::io::StreamReader;

/// Downloads the dataset CSV and parses it into a [`RawTable`]. No caching
/// happens here; see [`crate::DatasetProvider`] for that.
pub struct DatasetLoader {
    url: String,
    download_client: Client,
}

impl DatasetLoader {
    pub fn new(url: &str, download_client: Client) -> DatasetLoader {
        DatasetLoader {
            url: url.to_string(),
            download_client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Downloads and parses the table. Every failure is returned as-is, there is no retry.
    pub async fn fetch(&self) -> Result<RawTable, DatasetError> {
        let raw_bytes = self.download().await?;
        let table = task::spawn_blocking(move || RawTable::from_csv_bytes(raw_bytes)).await??;
        info!(
            "Parsed {} rows x {} columns from {}",
            table.height(),
            table.frame().width(),
            self.url
        );
        Ok(table)
    }

    async fn download(&self) -> Result<Vec<u8>, DatasetError> {
        info!("Downloading dataset from {}", self.url);

        let response = self
            .download_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DatasetError::NetworkRequest(self.url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", self.url, e);
                return Err(if let Some(status) = e.status() {
                    DatasetError::HttpStatus {
                        url: self.url.clone(),
                        status,
                        source: e,
                    }
                } else {
                    DatasetError::NetworkRequest(self.url.clone(), e)
                });
            }
        };

        let stream = response.bytes_stream().map_err(std::io::Error::other);
        let mut stream_reader = pin!(StreamReader::new(stream));
        let mut body = Vec::new();
        stream_reader.read_to_end(&mut body).await?;
        info!("Downloaded {} bytes from {}", body.len(), self.url);
        Ok(body)
    }
}
