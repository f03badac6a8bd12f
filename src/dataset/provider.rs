//! Memoized access to the COVID-19 dataset.
//!
//! A [`DatasetProvider`] downloads and parses the table on first use and hands
//! out the same in-memory [`RawTable`] on every later call. There is no
//! invalidation and no retry: a failed load leaves the provider empty and the
//! error goes straight back to the caller.

use crate::dataset::data_loader::DatasetLoader;
use crate::dataset::error::DatasetError;
use crate::error::CovidInsightError;
use crate::types::raw_table::RawTable;
use bon::bon;
use log::debug;
use reqwest::Client;
use std::sync::LazyLock;
use tokio::sync::OnceCell;

/// Location of the Our World in Data COVID-19 table.
pub const OWID_COVID_DATA_URL: &str =
    "https://raw.githubusercontent.com/owid/covid-19-data/master/public/data/owid-covid-data.csv";

static DEFAULT_PROVIDER: LazyLock<DatasetProvider> =
    LazyLock::new(|| DatasetProvider::builder().build());

/// Loads the OWID table through the process-wide provider.
///
/// The first call pays for the download and parse; every later call in the
/// same process returns a reference to the same table without touching the
/// network.
///
/// # Errors
///
/// Returns [`CovidInsightError::Dataset`] if the download or parse fails. The
/// next call will try again from scratch.
///
/// # Examples
///
/// ```no_run
/// # use covid_insight::CovidInsightError;
/// # #[tokio::main]
/// # async fn main() -> Result<(), CovidInsightError> {
/// let table = covid_insight::load().await?;
/// let again = covid_insight::load().await?;
/// assert!(std::ptr::eq(table, again));
/// # Ok(())
/// # }
/// ```
pub async fn load() -> Result<&'static RawTable, CovidInsightError> {
    DEFAULT_PROVIDER.load().await.map_err(CovidInsightError::from)
}

/// Downloads the dataset once and keeps it for the provider's lifetime.
///
/// ```no_run
/// # use covid_insight::{DatasetProvider, CovidInsightError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), CovidInsightError> {
/// let provider = DatasetProvider::builder()
///     .url("https://example.org/owid-covid-data.csv")
///     .build();
/// let table = provider.load().await?;
/// println!("{} rows", table.height());
/// # Ok(())
/// # }
/// ```
pub struct DatasetProvider {
    loader: DatasetLoader,
    table: OnceCell<RawTable>,
}

#[bon]
impl DatasetProvider {
    /// Creates a provider. `url` defaults to [`OWID_COVID_DATA_URL`] and
    /// `client` to a default `reqwest::Client`.
    #[builder]
    pub fn new(#[builder(into)] url: Option<String>, client: Option<Client>) -> Self {
        let url = url.unwrap_or_else(|| OWID_COVID_DATA_URL.to_string());
        Self {
            loader: DatasetLoader::new(&url, client.unwrap_or_default()),
            table: OnceCell::new(),
        }
    }

    pub fn url(&self) -> &str {
        self.loader.url()
    }

    /// Whether the table has already been loaded.
    pub fn is_loaded(&self) -> bool {
        self.table.initialized()
    }

    /// Returns the cached table, fetching it first if this is the first call.
    ///
    /// Concurrent first calls share one fetch.
    pub async fn load(&self) -> Result<&RawTable, DatasetError> {
        if let Some(table) = self.table.get() {
            debug!("Dataset cache hit for {}", self.loader.url());
            return Ok(table);
        }
        self.table.get_or_try_init(|| self.loader.fetch()).await
    }
}
