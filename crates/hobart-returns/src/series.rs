//! Dated daily-return series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing a series.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// The same calendar date appeared more than once.
    #[error("duplicate date {date} in series \"{name}\"")]
    DuplicateDate {
        /// Series name.
        name: String,

        /// The repeated date.
        date: NaiveDate,
    },
}

/// A named sequence of fractional daily returns, ordered by calendar date.
///
/// Values are decimals (`0.01` is +1%). Dates are strictly increasing; a
/// missing observation is absent from the sequence, never stored as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedSeries {
    name: String,
    points: Vec<(NaiveDate, f64)>,
}

impl DatedSeries {
    /// Build a series from raw observations.
    ///
    /// Missing observations (`None`) are dropped, the rest is sorted
    /// ascending by date, and duplicate dates are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use hobart_returns::DatedSeries;
    ///
    /// let d1 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    /// let d2 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    ///
    /// let series = DatedSeries::new("Momentum", vec![(d2, Some(0.02)), (d1, None)]).unwrap();
    /// assert_eq!(series.len(), 1);
    /// assert_eq!(series.first_date(), Some(d2));
    /// ```
    pub fn new(
        name: impl Into<String>,
        observations: Vec<(NaiveDate, Option<f64>)>,
    ) -> Result<Self, SeriesError> {
        let name = name.into();
        let mut points: Vec<(NaiveDate, f64)> = observations
            .into_iter()
            .filter_map(|(date, value)| value.map(|v| (date, v)))
            .collect();
        points.sort_by_key(|(date, _)| *date);

        for window in points.windows(2) {
            if window[0].0 == window[1].0 {
                return Err(SeriesError::DuplicateDate {
                    name,
                    date: window[0].0,
                });
            }
        }

        Ok(Self { name, points })
    }

    /// Build a series from present observations only.
    pub fn from_points(
        name: impl Into<String>,
        points: Vec<(NaiveDate, f64)>,
    ) -> Result<Self, SeriesError> {
        Self::new(
            name,
            points.into_iter().map(|(date, v)| (date, Some(v))).collect(),
        )
    }

    /// Rebuild from points already sorted, deduplicated and free of gaps in
    /// ordering. Used by the alignment step, which only ever narrows an
    /// existing series.
    pub(crate) fn from_sorted(name: String, points: Vec<(NaiveDate, f64)>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
        Self { name, points }
    }

    /// Series name, as declared by the source column.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered `(date, return)` observations.
    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    /// Ordered dates that carry an observation.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|(date, _)| *date)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series carries no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest date with an observation.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|(date, _)| *date)
    }
}
