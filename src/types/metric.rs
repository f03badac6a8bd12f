//! Defines the metrics that appear in the long-form series and the two metric
//! groups the dashboard plots.

use crate::types::columns::{
    COL_PARTIALLY_VACCINATED, COL_PEOPLE_FULLY_VACCINATED, COL_TOTAL_BOOSTERS, COL_TOTAL_CASES,
    COL_TOTAL_DEATHS,
};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A metric name as it appears in the `variable` column of a long-form series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Cumulative confirmed cases.
    TotalCases,
    /// Cumulative confirmed deaths.
    TotalDeaths,
    /// People with at least one dose but not fully vaccinated
    /// (`people_vaccinated - people_fully_vaccinated`).
    PartiallyVaccinated,
    /// People who completed the initial vaccination protocol.
    PeopleFullyVaccinated,
    /// Total booster doses administered.
    TotalBoosters,
}

impl Metric {
    /// Metrics of the cases/deaths series, in plotting order.
    pub const CASES_DEATHS: [Metric; 2] = [Metric::TotalCases, Metric::TotalDeaths];

    /// Metrics of the vaccination series, in plotting (stacking) order.
    pub const VACCINATION: [Metric; 3] = [
        Metric::PartiallyVaccinated,
        Metric::PeopleFullyVaccinated,
        Metric::TotalBoosters,
    ];

    /// The column this metric is read from.
    pub fn column_name(&self) -> &'static str {
        match self {
            Metric::TotalCases => COL_TOTAL_CASES,
            Metric::TotalDeaths => COL_TOTAL_DEATHS,
            Metric::PartiallyVaccinated => COL_PARTIALLY_VACCINATED,
            Metric::PeopleFullyVaccinated => COL_PEOPLE_FULLY_VACCINATED,
            Metric::TotalBoosters => COL_TOTAL_BOOSTERS,
        }
    }
}

/// Formats a `Metric` as its column name.
///
/// # Examples
///
/// ```
/// use covid_insight::Metric;
///
/// assert_eq!(Metric::TotalCases.to_string(), "total_cases");
/// assert_eq!(format!("{}", Metric::PartiallyVaccinated), "partially_vaccinated");
/// ```
impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metric '{0}'")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            COL_TOTAL_CASES => Ok(Metric::TotalCases),
            COL_TOTAL_DEATHS => Ok(Metric::TotalDeaths),
            COL_PARTIALLY_VACCINATED => Ok(Metric::PartiallyVaccinated),
            COL_PEOPLE_FULLY_VACCINATED => Ok(Metric::PeopleFullyVaccinated),
            COL_TOTAL_BOOSTERS => Ok(Metric::TotalBoosters),
            other => Err(UnknownMetric(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_metrics() {
        for metric in Metric::CASES_DEATHS.iter().chain(Metric::VACCINATION.iter()) {
            assert_eq!(metric.to_string().parse::<Metric>(), Ok(*metric));
        }
    }

    #[test]
    fn test_parse_unknown_metric() {
        let err = "new_cases".parse::<Metric>().unwrap_err();
        assert_eq!(err, UnknownMetric("new_cases".to_string()));
        assert_eq!(err.to_string(), "unknown metric 'new_cases'");
    }
}
