//! Contains the `RawTable` structure wrapping the unfiltered COVID-19 dataset.

use crate::dataset::error::DatasetError;
use crate::types::columns::{required_column_names, COL_DATE, COL_LOCATION, NUMERIC_COLUMNS};
use polars::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// The raw daily records, one row per (`location`, `date`).
///
/// Construction guarantees that every column the pipeline reads is present,
/// that the numeric columns are `Float64` and that `date` is a `Date`. Row
/// order is whatever the source emitted; nothing here sorts.
///
/// Cloning is cheap, the underlying column buffers are shared.
#[derive(Debug, Clone)]
pub struct RawTable {
    frame: DataFrame,
}

impl RawTable {
    /// Wraps a `DataFrame`, validating and normalizing the required columns.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::MissingColumn`] if a required column is absent,
    /// or [`DatasetError::Polars`] if a column holds values that cannot be
    /// cast, such as an unparseable date or a non-numeric count.
    pub fn new(frame: DataFrame) -> Result<RawTable, DatasetError> {
        let names = frame.get_column_names();
        if let Some(missing) = required_column_names()
            .into_iter()
            .find(|required| !names.iter().any(|name| name.as_str() == *required))
        {
            return Err(DatasetError::MissingColumn(missing.to_string()));
        }

        let mut casts: Vec<Expr> = NUMERIC_COLUMNS
            .iter()
            .map(|name| col(*name).strict_cast(DataType::Float64))
            .collect();
        casts.push(col(COL_DATE).strict_cast(DataType::Date));
        casts.push(col(COL_LOCATION).strict_cast(DataType::String));

        let frame = frame.lazy().with_columns(casts).collect()?;
        Ok(RawTable { frame })
    }

    /// Parses CSV bytes (with a header row) into a `RawTable`.
    ///
    /// The bytes are spilled to a temporary file and the schema is inferred
    /// from every row, since the sparse OWID columns often start out empty.
    /// Dtypes of the required columns are then fixed up by [`RawTable::new`].
    /// This is blocking; the loader calls it from a blocking task.
    pub fn from_csv_bytes(bytes: Vec<u8>) -> Result<RawTable, DatasetError> {
        let mut temp_file = NamedTempFile::new().map_err(DatasetError::CsvReadIo)?;
        temp_file
            .write_all(&bytes)
            .map_err(DatasetError::CsvReadIo)?;
        temp_file.flush().map_err(DatasetError::CsvReadIo)?;

        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .map_parse_options(|options| options.with_try_parse_dates(true))
            .try_into_reader_with_file_path(Some(temp_file.path().to_path_buf()))
            .map_err(DatasetError::CsvReadPolars)?
            .finish()
            .map_err(DatasetError::CsvReadPolars)?;

        Self::new(frame)
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Distinct non-null `location` values in order of first appearance.
    ///
    /// This is the population of the location selector: every location in
    /// the table appears exactly once.
    pub fn locations(&self) -> PolarsResult<Vec<String>> {
        let unique = self
            .lazy()
            .select([col(COL_LOCATION).drop_nulls().unique_stable()])
            .collect()?;
        Ok(unique
            .column(COL_LOCATION)?
            .str()?
            .into_no_null_iter()
            .map(str::to_string)
            .collect())
    }
}
