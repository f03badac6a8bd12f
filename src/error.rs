use crate::dataset::error::DatasetError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CovidInsightError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("Failed deriving views: {0}")]
    Polars(#[from] PolarsError),
}
