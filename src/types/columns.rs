//! Column names and dtypes of the Our World in Data COVID-19 table that the
//! pipeline relies on. Any other column in the source CSV is carried along untouched.

pub const COL_ISO_CODE: &str = "iso_code";
pub const COL_LOCATION: &str = "location";
pub const COL_DATE: &str = "date";
pub const COL_TOTAL_CASES: &str = "total_cases";
pub const COL_TOTAL_DEATHS: &str = "total_deaths";
pub const COL_STRINGENCY_INDEX: &str = "stringency_index";
pub const COL_PEOPLE_VACCINATED: &str = "people_vaccinated";
pub const COL_PEOPLE_FULLY_VACCINATED: &str = "people_fully_vaccinated";
pub const COL_TOTAL_BOOSTERS: &str = "total_boosters";

// Derived
pub const COL_PARTIALLY_VACCINATED: &str = "partially_vaccinated";

// Long-form series
pub const COL_VARIABLE: &str = "variable";
pub const COL_VALUE: &str = "value";

/// Numeric columns, all read as `Float64` regardless of what inference would pick.
pub(crate) const NUMERIC_COLUMNS: [&str; 6] = [
    COL_TOTAL_CASES,
    COL_TOTAL_DEATHS,
    COL_STRINGENCY_INDEX,
    COL_PEOPLE_VACCINATED,
    COL_PEOPLE_FULLY_VACCINATED,
    COL_TOTAL_BOOSTERS,
];

/// Every column a [`crate::RawTable`] must have.
pub(crate) fn required_column_names() -> Vec<&'static str> {
    let mut names = vec![COL_ISO_CODE, COL_LOCATION, COL_DATE];
    names.extend(NUMERIC_COLUMNS);
    names
}
