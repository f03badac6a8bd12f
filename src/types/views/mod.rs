pub mod global_frame;
pub mod mortality;
pub mod series;

use global_frame::GlobalFrame;
use mortality::MortalitySnapshot;
use polars::prelude::DataFrame;
use series::LongSeries;

/// Everything the dashboard draws for one selected location.
#[derive(Debug, Clone)]
pub struct DerivedViews {
    /// Latest mortality / survival split, for the pie chart.
    pub mortality: MortalitySnapshot,
    /// Whole table, for the animated world map colored by `total_cases`.
    pub global: GlobalFrame,
    /// `iso_code`, `location`, `total_deaths` of the selected location, for the
    /// static death map. Only the selected location is present.
    pub geo: DataFrame,
    /// `date`, `stringency_index` of the selected location.
    pub policy: DataFrame,
    /// `total_cases` and `total_deaths` in long form.
    pub cases_deaths: LongSeries,
    /// `partially_vaccinated`, `people_fully_vaccinated` and `total_boosters` in long form.
    pub vaccination: LongSeries,
}

impl DerivedViews {
    /// Row-for-row equality of every view, nulls included.
    pub fn same_as(&self, other: &DerivedViews) -> bool {
        self.mortality == other.mortality
            && self.global.frame.equals_missing(&other.global.frame)
            && self.geo.equals_missing(&other.geo)
            && self.policy.equals_missing(&other.policy)
            && self.cases_deaths.metrics() == other.cases_deaths.metrics()
            && self.cases_deaths.frame.equals_missing(&other.cases_deaths.frame)
            && self.vaccination.metrics() == other.vaccination.metrics()
            && self.vaccination.frame.equals_missing(&other.vaccination.frame)
    }
}
