//! Long-form (`date`, `variable`, `value`) series as consumed by grouped line
//! and area charts.

use crate::types::columns::{COL_DATE, COL_VALUE, COL_VARIABLE};
use crate::types::metric::Metric;
use chrono::{DateTime, NaiveDate};
use polars::prelude::*;

/// One row of a long-form series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub metric: Metric,
    /// Null values are passed through; gap handling is up to the renderer.
    pub value: Option<f64>,
}

/// A long-form series: one row per (`date`, metric) pair.
///
/// Rows are date-major. For every source row, in source order, there is one
/// row per metric in the order given by [`LongSeries::metrics`].
#[derive(Debug, Clone)]
pub struct LongSeries {
    /// Columns `date` (Date), `variable` (String) and `value` (Float64).
    pub frame: DataFrame,
    metrics: Vec<Metric>,
}

impl LongSeries {
    pub fn new(frame: DataFrame, metrics: &[Metric]) -> Self {
        Self {
            frame,
            metrics: metrics.to_vec(),
        }
    }

    /// The metrics in this series, in emission order.
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// The values of a single metric in date order, e.g. to draw one line.
    pub fn values_for(&self, metric: Metric) -> PolarsResult<Vec<Option<f64>>> {
        let filtered = self
            .frame
            .clone()
            .lazy()
            .filter(col(COL_VARIABLE).eq(lit(metric.column_name())))
            .select([col(COL_VALUE)])
            .collect()?;
        Ok(filtered.column(COL_VALUE)?.f64()?.into_iter().collect())
    }

    /// Collects the series into Rust structs.
    pub fn collect_points(&self) -> PolarsResult<Vec<SeriesPoint>> {
        let days = self.frame.column(COL_DATE)?.cast(&DataType::Int32)?;
        let days = days.i32()?;
        let variables = self.frame.column(COL_VARIABLE)?.str()?;
        let values = self.frame.column(COL_VALUE)?.f64()?;

        days.into_iter()
            .zip(variables)
            .zip(values)
            .map(|((day, variable), value)| {
                let date = day.and_then(date_from_epoch_days).ok_or_else(|| {
                    PolarsError::ComputeError("null or out of range date in series".into())
                })?;
                let metric = variable
                    .ok_or_else(|| PolarsError::ComputeError("null metric in series".into()))?
                    .parse::<Metric>()
                    .map_err(|e| PolarsError::ComputeError(e.to_string().into()))?;
                Ok(SeriesPoint {
                    date,
                    metric,
                    value,
                })
            })
            .collect()
    }
}

pub(crate) fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    DateTime::from_timestamp(days as i64 * 86_400, 0).map(|dt| dt.date_naive())
}
