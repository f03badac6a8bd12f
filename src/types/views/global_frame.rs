use crate::types::columns::COL_DATE;
use crate::types::views::series::date_from_epoch_days;
use chrono::NaiveDate;
use polars::prelude::*;

/// The unfiltered table behind the animated world map, with `date` as the
/// animation dimension.
#[derive(Debug, Clone)]
pub struct GlobalFrame {
    pub frame: DataFrame,
}

impl GlobalFrame {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Distinct dates in ascending order, one per animation frame.
    pub fn animation_dates(&self) -> PolarsResult<Vec<NaiveDate>> {
        let dates = self
            .frame
            .clone()
            .lazy()
            .select([col(COL_DATE)
                .drop_nulls()
                .unique()
                .sort(SortOptions::default())
                .cast(DataType::Int32)])
            .collect()?;
        Ok(dates
            .column(COL_DATE)?
            .i32()?
            .into_no_null_iter()
            .filter_map(date_from_epoch_days)
            .collect())
    }

    /// Rows of a single animation frame.
    pub fn at(&self, date: NaiveDate) -> PolarsResult<DataFrame> {
        self.frame
            .clone()
            .lazy()
            .filter(col(COL_DATE).eq(lit(date)))
            .collect()
    }
}
