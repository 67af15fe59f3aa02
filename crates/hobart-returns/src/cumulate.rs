//! Cumulative compounding of aligned returns and curve differencing.

use crate::series::DatedSeries;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A compounded cumulative-return curve.
///
/// Monotonic in date, not in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeSeries {
    name: String,
    points: Vec<(NaiveDate, f64)>,
}

impl CumulativeSeries {
    /// Name inherited from the underlying return series.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered `(date, cumulative_return)` points.
    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cumulative return at the last date, if the curve is non-empty.
    pub fn final_return(&self) -> Option<f64> {
        self.points.last().map(|(_, value)| *value)
    }
}

/// The pointwise gap between two cumulative curves on a shared date axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferenceSeries {
    points: Vec<(NaiveDate, f64)>,
}

impl DifferenceSeries {
    /// Ordered `(date, basket_cumulative - index_cumulative)` points.
    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Compound a daily-return series into a cumulative-return curve.
///
/// A running product seeded at 1 is folded over the returns in ascending
/// date order; the value at `t_i` is `prod_{j<=i} (1 + r_j) - 1`. A changed
/// early return shifts every later point of the curve. Plain floating-point
/// arithmetic, no rounding. Empty in, empty out.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hobart_returns::{DatedSeries, cumulate};
///
/// let d1 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let d2 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
///
/// let series = DatedSeries::from_points("Momentum", vec![(d1, 0.01), (d2, 0.02)]).unwrap();
/// let curve = cumulate(&series);
///
/// assert!((curve.points()[1].1 - 0.0302).abs() < 1e-12);
/// ```
pub fn cumulate(series: &DatedSeries) -> CumulativeSeries {
    let mut growth = 1.0;
    let points = series
        .points()
        .iter()
        .map(|&(date, r)| {
            growth *= 1.0 + r;
            (date, growth - 1.0)
        })
        .collect();

    CumulativeSeries {
        name: series.name().to_string(),
        points,
    }
}

/// Subtract `index` from `basket` pointwise.
///
/// Precondition: both curves derive from the same [`AlignedPair`] and so
/// share one date axis. The axis is not re-checked here; passing curves
/// built from different alignments is a caller error.
///
/// [`AlignedPair`]: crate::align::AlignedPair
pub fn difference(basket: &CumulativeSeries, index: &CumulativeSeries) -> DifferenceSeries {
    let points = basket
        .points()
        .iter()
        .zip(index.points())
        .map(|(&(date, b), &(_, i))| (date, b - i))
        .collect();

    DifferenceSeries { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn series(name: &str, days: &[(u32, f64)]) -> DatedSeries {
        DatedSeries::from_points(
            name,
            days.iter().map(|&(day, v)| (date(day), v)).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_two_day_compounding() {
        let basket = series("b", &[(2, 0.01), (3, 0.02)]);
        let curve = cumulate(&basket);

        assert_eq!(curve.len(), 2);
        assert_eq!(curve.points()[0].0, date(2));
        assert_relative_eq!(curve.points()[0].1, 0.01);
        assert_relative_eq!(curve.points()[1].1, 1.01 * 1.02 - 1.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case::one_percent(0.01, 10)]
    #[case::negative(-0.005, 25)]
    #[case::flat(0.0, 5)]
    fn test_constant_return_closed_form(#[case] r: f64, #[case] n: u32) {
        let days: Vec<(u32, f64)> = (1..=n).map(|day| (day, r)).collect();
        let curve = cumulate(&series("b", &days));

        let expected = (1.0 + r).powi(n as i32) - 1.0;
        assert_relative_eq!(curve.final_return().unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_series_cumulates_to_empty() {
        let curve = cumulate(&series("b", &[]));

        assert!(curve.is_empty());
        assert_eq!(curve.final_return(), None);
    }

    #[test]
    fn test_difference_is_pointwise_subtraction() {
        let pair = align(
            &series("b", &[(2, 0.01), (3, 0.02)]),
            &series("i", &[(2, 0.0), (3, 0.01)]),
        );
        let basket_cum = cumulate(pair.basket());
        let index_cum = cumulate(pair.index());

        let diff = difference(&basket_cum, &index_cum);

        assert_eq!(diff.len(), pair.len());
        for (k, &(d, value)) in diff.points().iter().enumerate() {
            assert_eq!(d, basket_cum.points()[k].0);
            assert_eq!(value, basket_cum.points()[k].1 - index_cum.points()[k].1);
        }
        assert_relative_eq!(diff.points()[0].1, 0.01);
        assert_relative_eq!(diff.points()[1].1, 0.0202, epsilon = 1e-12);
    }

    #[test]
    fn test_cumulate_after_realign_matches() {
        let pair = align(
            &series("b", &[(2, 0.01), (3, 0.02), (5, -0.01)]),
            &series("i", &[(2, 0.0), (3, 0.01), (5, 0.005)]),
        );
        let again = align(pair.basket(), pair.index());

        assert_eq!(cumulate(pair.basket()), cumulate(again.basket()));
        assert_eq!(cumulate(pair.index()), cumulate(again.index()));
    }

    #[test]
    fn test_difference_of_empty_curves_is_empty() {
        let empty = cumulate(&series("b", &[]));

        assert!(difference(&empty, &empty).is_empty());
    }
}
