use crate::types::columns::{
    COL_DATE, COL_LOCATION, COL_PARTIALLY_VACCINATED, COL_PEOPLE_FULLY_VACCINATED,
    COL_PEOPLE_VACCINATED, COL_VALUE, COL_VARIABLE,
};
use crate::types::metric::Metric;
use polars::prelude::*;

// Scratch columns used to keep the long form date-major.
const COL_ROW: &str = "__row";
const COL_METRIC_ORDER: &str = "__metric_order";

pub trait CovidFrameExt {
    /// Keeps rows whose `location` equals `location`, in their original order.
    fn filter_location(self, location: &str) -> LazyFrame;

    /// Adds `partially_vaccinated = people_vaccinated - people_fully_vaccinated`.
    /// Null if either operand is null.
    fn with_partially_vaccinated(self) -> LazyFrame;

    /// Projects onto the given columns, in the given order.
    fn select_columns(self, columns: &[&str]) -> LazyFrame;

    /// Reshapes the metric columns from wide to long form
    /// (`date`, `variable`, `value`).
    ///
    /// Unlike a plain unpivot, which stacks one metric after the other, the
    /// output is date-major: each input row yields one output row per metric,
    /// in the order of `metrics`. `value` is `Float64`, nulls are kept.
    ///
    /// # Errors
    ///
    /// Fails if `metrics` is empty.
    fn melt_metrics(self, metrics: &[Metric]) -> PolarsResult<LazyFrame>;
}

impl CovidFrameExt for LazyFrame {
    fn filter_location(self, location: &str) -> LazyFrame {
        self.filter(col(COL_LOCATION).eq(lit(location)))
    }

    fn with_partially_vaccinated(self) -> LazyFrame {
        self.with_column(
            (col(COL_PEOPLE_VACCINATED) - col(COL_PEOPLE_FULLY_VACCINATED))
                .alias(COL_PARTIALLY_VACCINATED),
        )
    }

    fn select_columns(self, columns: &[&str]) -> LazyFrame {
        self.select(columns.iter().map(|name| col(*name)).collect::<Vec<_>>())
    }

    fn melt_metrics(self, metrics: &[Metric]) -> PolarsResult<LazyFrame> {
        if metrics.is_empty() {
            return Err(PolarsError::ComputeError(
                "melt_metrics needs at least one metric".into(),
            ));
        }

        let indexed = self.with_row_index(COL_ROW, None);
        let parts: Vec<LazyFrame> = metrics
            .iter()
            .enumerate()
            .map(|(order, metric)| {
                indexed
                    .clone()
                    .with_columns([
                        lit(order as u32).alias(COL_METRIC_ORDER),
                        lit(metric.column_name()).alias(COL_VARIABLE),
                        col(metric.column_name())
                            .cast(DataType::Float64)
                            .alias(COL_VALUE),
                    ])
                    .select_columns(&[COL_ROW, COL_METRIC_ORDER, COL_DATE, COL_VARIABLE, COL_VALUE])
            })
            .collect();

        Ok(concat(parts, UnionArgs::default())?
            .sort_by_exprs(
                [col(COL_ROW), col(COL_METRIC_ORDER)],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .select_columns(&[COL_DATE, COL_VARIABLE, COL_VALUE]))
    }
}
