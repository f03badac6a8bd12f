//! Turns the raw table and a selected location into the views the dashboard draws.

use crate::error::CovidInsightError;
use crate::frame_ext::CovidFrameExt;
use crate::types::columns::{
    COL_DATE, COL_ISO_CODE, COL_LOCATION, COL_STRINGENCY_INDEX, COL_TOTAL_CASES,
    COL_TOTAL_DEATHS,
};
use crate::types::metric::Metric;
use crate::types::raw_table::RawTable;
use crate::types::views::global_frame::GlobalFrame;
use crate::types::views::mortality::MortalitySnapshot;
use crate::types::views::series::LongSeries;
use crate::types::views::DerivedViews;
use log::debug;
use polars::prelude::*;

fn get_opt_float(series: &Column, idx: usize) -> Option<f64> {
    series.f64().ok().and_then(|ca| ca.get(idx))
}

/// Derives every view for `location`.
///
/// The function is pure: the same table and location always give the same
/// views. Missing data never fails; an unknown location yields empty series
/// and [`MortalitySnapshot::Unavailable`]. Errors only come from polars when
/// the table does not have the expected shape.
///
/// # Examples
///
/// ```no_run
/// # use covid_insight::{derive_views, CovidInsightError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), CovidInsightError> {
/// let table = covid_insight::load().await?;
/// let views = derive_views(table, "Netherlands")?;
/// println!("{}", views.mortality.describe("Netherlands"));
/// println!("{}", views.cases_deaths.frame);
/// # Ok(())
/// # }
/// ```
pub fn derive_views(table: &RawTable, location: &str) -> Result<DerivedViews, CovidInsightError> {
    let slice = table.lazy().filter_location(location).collect()?;
    debug!("Location slice for '{}' has {} rows", location, slice.height());

    let views = DerivedViews {
        mortality: mortality_snapshot(&slice)?,
        global: GlobalFrame::new(table.frame().clone()),
        geo: slice
            .clone()
            .lazy()
            .select_columns(&[COL_ISO_CODE, COL_LOCATION, COL_TOTAL_DEATHS])
            .collect()?,
        policy: slice
            .clone()
            .lazy()
            .select_columns(&[COL_DATE, COL_STRINGENCY_INDEX])
            .collect()?,
        cases_deaths: long_series(slice.clone().lazy(), &Metric::CASES_DEATHS)?,
        vaccination: long_series(
            slice.lazy().with_partially_vaccinated(),
            &Metric::VACCINATION,
        )?,
    };
    Ok(views)
}

/// Mortality of the last row of the slice, in input order.
fn mortality_snapshot(slice: &DataFrame) -> PolarsResult<MortalitySnapshot> {
    let latest = slice.tail(Some(1));
    if latest.height() == 0 {
        return Ok(MortalitySnapshot::Unavailable);
    }
    Ok(MortalitySnapshot::from_totals(
        get_opt_float(latest.column(COL_TOTAL_CASES)?, 0),
        get_opt_float(latest.column(COL_TOTAL_DEATHS)?, 0),
    ))
}

fn long_series(frame: LazyFrame, metrics: &[Metric]) -> PolarsResult<LongSeries> {
    let long = frame.melt_metrics(metrics)?.collect()?;
    Ok(LongSeries::new(long, metrics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::raw_table::tests::{column_names, fixture_table, FIXTURE_CSV};
    use crate::types::views::series::SeriesPoint;
    use chrono::NaiveDate;

    fn count_rows(table: &RawTable, location: &str) -> usize {
        table
            .lazy()
            .filter_location(location)
            .collect()
            .unwrap()
            .height()
    }

    #[test]
    fn test_series_row_counts() {
        let table = fixture_table();
        for location in table.locations().unwrap() {
            let views = derive_views(&table, &location).unwrap();
            let n = count_rows(&table, &location);
            assert_eq!(views.cases_deaths.len(), 2 * n, "cases/deaths for {}", location);
            assert_eq!(views.vaccination.len(), 3 * n, "vaccination for {}", location);
            assert_eq!(views.policy.height(), n);
            assert_eq!(views.geo.height(), n);
        }
    }

    #[test]
    fn test_cases_deaths_alternate_per_date() {
        let views = derive_views(&fixture_table(), "Netherlands").unwrap();
        let points = views.cases_deaths.collect_points().unwrap();
        let dates: Vec<NaiveDate> = (1..=3)
            .map(|d| NaiveDate::from_ymd_opt(2021, 3, d).unwrap())
            .collect();
        for (i, pair) in points.chunks(2).enumerate() {
            assert_eq!(pair[0].date, dates[i]);
            assert_eq!(pair[1].date, dates[i]);
            assert_eq!(pair[0].metric, Metric::TotalCases);
            assert_eq!(pair[1].metric, Metric::TotalDeaths);
        }
    }

    #[test]
    fn test_vaccination_series() {
        let views = derive_views(&fixture_table(), "Netherlands").unwrap();
        let points = views.vaccination.collect_points().unwrap();
        let first_day = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        assert_eq!(
            &points[..3],
            &[
                SeriesPoint {
                    date: first_day,
                    metric: Metric::PartiallyVaccinated,
                    value: Some(100.0)
                },
                SeriesPoint {
                    date: first_day,
                    metric: Metric::PeopleFullyVaccinated,
                    value: Some(100.0)
                },
                SeriesPoint {
                    date: first_day,
                    metric: Metric::TotalBoosters,
                    value: None
                },
            ]
        );
        // people_vaccinated is null on the second day
        assert_eq!(points[3].metric, Metric::PartiallyVaccinated);
        assert_eq!(points[3].value, None);
        assert_eq!(points[4].value, Some(120.0));
        assert_eq!(
            views
                .vaccination
                .values_for(Metric::TotalBoosters)
                .unwrap(),
            vec![None, None, Some(10.0)]
        );
    }

    #[test]
    fn test_mortality_from_latest_row() {
        let views = derive_views(&fixture_table(), "Netherlands").unwrap();
        // latest row: 1200 cases, 60 deaths
        assert_eq!(views.mortality.rates(), Some((5.0, 95.0)));

        let views = derive_views(&fixture_table(), "World").unwrap();
        assert_eq!(views.mortality.rates(), Some((5.0, 95.0)));
    }

    #[test]
    fn test_mortality_unavailable_when_latest_cases_null() {
        // Belgium's first row has zero cases, its latest row has none at all.
        let views = derive_views(&fixture_table(), "Belgium").unwrap();
        assert_eq!(views.mortality, MortalitySnapshot::Unavailable);
    }

    #[test]
    fn test_mortality_unavailable_when_latest_cases_zero() {
        let csv = format!("{}ZZZ,,Nowhere,2021-03-01,0,0,0,,,,\n", FIXTURE_CSV);
        let table = RawTable::from_csv_bytes(csv.into_bytes()).unwrap();
        let views = derive_views(&table, "Nowhere").unwrap();
        assert_eq!(views.mortality, MortalitySnapshot::Unavailable);
        assert_eq!(views.cases_deaths.len(), 2);
    }

    #[test]
    fn test_unknown_location() {
        let table = fixture_table();
        let views = derive_views(&table, "Atlantis").unwrap();
        assert_eq!(views.mortality, MortalitySnapshot::Unavailable);
        assert!(views.cases_deaths.is_empty());
        assert!(views.vaccination.is_empty());
        assert_eq!(views.policy.height(), 0);
        assert_eq!(views.geo.height(), 0);
        // the world map is never filtered
        assert_eq!(views.global.frame.height(), table.height());
    }

    #[test]
    fn test_policy_and_geo_projection() {
        let views = derive_views(&fixture_table(), "Netherlands").unwrap();
        assert_eq!(
            column_names(&views.policy),
            vec![COL_DATE, COL_STRINGENCY_INDEX]
        );
        let stringency: Vec<Option<f64>> = views
            .policy
            .column(COL_STRINGENCY_INDEX)
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(stringency, vec![Some(78.7), Some(78.7), None]);

        assert_eq!(
            column_names(&views.geo),
            vec![COL_ISO_CODE, COL_LOCATION, COL_TOTAL_DEATHS]
        );
        let iso: Vec<&str> = views
            .geo
            .column(COL_ISO_CODE)
            .unwrap()
            .str()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(iso, vec!["NLD", "NLD", "NLD"]);
    }

    #[test]
    fn test_derive_views_is_idempotent() {
        let table = fixture_table();
        let first = derive_views(&table, "Netherlands").unwrap();
        let second = derive_views(&table, "Netherlands").unwrap();
        assert!(first.same_as(&second));

        let other = derive_views(&table, "Belgium").unwrap();
        assert!(!first.same_as(&other));
    }
}
