use std::fmt;

/// Text shown in place of the mortality chart when no rate can be computed.
pub const MORTALITY_UNAVAILABLE_TEXT: &str =
    "Mortality rate data is not available for the selected location.";

/// Mortality rate of the most recent row of a location.
///
/// `survival_rate` is `100 - mortality_rate`. It does not separate active
/// from recovered cases; it is the complement the dashboard plots next to the
/// mortality rate, nothing more.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MortalitySnapshot {
    Available {
        /// `total_deaths / total_cases * 100`
        mortality_rate: f64,
        survival_rate: f64,
    },
    /// No rows, null inputs, or a non-finite ratio (e.g. zero cases).
    Unavailable,
}

impl MortalitySnapshot {
    /// Computes the snapshot from the latest `total_cases` / `total_deaths` pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use covid_insight::MortalitySnapshot;
    ///
    /// assert_eq!(
    ///     MortalitySnapshot::from_totals(Some(1000.0), Some(50.0)),
    ///     MortalitySnapshot::Available { mortality_rate: 5.0, survival_rate: 95.0 }
    /// );
    /// assert_eq!(
    ///     MortalitySnapshot::from_totals(Some(0.0), Some(0.0)),
    ///     MortalitySnapshot::Unavailable
    /// );
    /// ```
    pub fn from_totals(total_cases: Option<f64>, total_deaths: Option<f64>) -> Self {
        let (Some(cases), Some(deaths)) = (total_cases, total_deaths) else {
            return MortalitySnapshot::Unavailable;
        };
        let mortality_rate = deaths / cases * 100.0;
        if !mortality_rate.is_finite() {
            return MortalitySnapshot::Unavailable;
        }
        MortalitySnapshot::Available {
            mortality_rate,
            survival_rate: 100.0 - mortality_rate,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MortalitySnapshot::Available { .. })
    }

    /// `(mortality_rate, survival_rate)`, if available.
    pub fn rates(&self) -> Option<(f64, f64)> {
        match *self {
            MortalitySnapshot::Available {
                mortality_rate,
                survival_rate,
            } => Some((mortality_rate, survival_rate)),
            MortalitySnapshot::Unavailable => None,
        }
    }

    /// One-line description for text renderers, falling back to
    /// [`MORTALITY_UNAVAILABLE_TEXT`].
    pub fn describe(&self, location: &str) -> String {
        match self {
            MortalitySnapshot::Available { .. } => format!("Mortality Rate for {}: {}", location, self),
            MortalitySnapshot::Unavailable => MORTALITY_UNAVAILABLE_TEXT.to_string(),
        }
    }
}

impl fmt::Display for MortalitySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MortalitySnapshot::Available {
                mortality_rate,
                survival_rate,
            } => write!(
                f,
                "{:.2}% mortality, {:.2}% survival",
                mortality_rate, survival_rate
            ),
            MortalitySnapshot::Unavailable => write!(f, "unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_percent() {
        let snapshot = MortalitySnapshot::from_totals(Some(1000.0), Some(50.0));
        assert_eq!(snapshot.rates(), Some((5.0, 95.0)));
        assert!(snapshot.is_available());
    }

    #[test]
    fn test_zero_cases_unavailable() {
        assert_eq!(
            MortalitySnapshot::from_totals(Some(0.0), Some(0.0)),
            MortalitySnapshot::Unavailable
        );
        // deaths without cases would be infinite
        assert_eq!(
            MortalitySnapshot::from_totals(Some(0.0), Some(3.0)),
            MortalitySnapshot::Unavailable
        );
    }

    #[test]
    fn test_null_inputs_unavailable() {
        assert_eq!(
            MortalitySnapshot::from_totals(None, Some(10.0)),
            MortalitySnapshot::Unavailable
        );
        assert_eq!(
            MortalitySnapshot::from_totals(Some(10.0), None),
            MortalitySnapshot::Unavailable
        );
        assert_eq!(MortalitySnapshot::from_totals(None, None).rates(), None);
    }

    #[test]
    fn test_describe() {
        let snapshot = MortalitySnapshot::from_totals(Some(1000.0), Some(50.0));
        assert_eq!(
            snapshot.describe("Netherlands"),
            "Mortality Rate for Netherlands: 5.00% mortality, 95.00% survival"
        );
        assert_eq!(
            MortalitySnapshot::Unavailable.describe("Netherlands"),
            MORTALITY_UNAVAILABLE_TEXT
        );
    }
}
