//! Calendar alignment of a basket series against an index series.

use crate::series::DatedSeries;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Two series restricted to an identical ascending date axis.
///
/// Both members carry exactly the same dates, pairwise equal, so curves
/// derived from them can be subtracted positionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedPair {
    basket: DatedSeries,
    index: DatedSeries,
}

impl AlignedPair {
    /// The basket member.
    pub fn basket(&self) -> &DatedSeries {
        &self.basket
    }

    /// The index member.
    pub fn index(&self) -> &DatedSeries {
        &self.index
    }

    /// Length of the shared date axis.
    pub fn len(&self) -> usize {
        self.basket.len()
    }

    /// Whether the shared date axis is empty.
    pub fn is_empty(&self) -> bool {
        self.basket.is_empty()
    }

    /// The shared ascending date axis.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.basket.dates()
    }
}

/// Restrict `basket` and `index` to their shared trading calendar.
///
/// The index is first floored to the basket's earliest date, then both
/// series are cut down to the intersection of their date sets, preserving
/// ascending order. An entirely missing basket leaves `start` undefined and
/// yields an empty pair; so does an empty intersection. Neither is an
/// error: downstream stages render a blank chart for empty input.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hobart_returns::{DatedSeries, align};
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
///
/// // Basket trades on days 2 and 4; the index also has day 3.
/// let basket = DatedSeries::from_points("Momentum", vec![(d(2), 0.01), (d(4), 0.02)]).unwrap();
/// let index =
///     DatedSeries::from_points("Nifty 50", vec![(d(2), 0.0), (d(3), 0.01), (d(4), 0.01)])
///         .unwrap();
///
/// let pair = align(&basket, &index);
/// assert_eq!(pair.dates().collect::<Vec<_>>(), vec![d(2), d(4)]);
/// ```
pub fn align(basket: &DatedSeries, index: &DatedSeries) -> AlignedPair {
    let Some(start) = basket.first_date() else {
        return AlignedPair {
            basket: DatedSeries::from_sorted(basket.name().to_string(), Vec::new()),
            index: DatedSeries::from_sorted(index.name().to_string(), Vec::new()),
        };
    };

    let basket_points = basket.points();
    let index_points: Vec<(NaiveDate, f64)> = index
        .points()
        .iter()
        .copied()
        .filter(|(date, _)| *date >= start)
        .collect();

    let mut kept_basket = Vec::new();
    let mut kept_index = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < basket_points.len() && j < index_points.len() {
        match basket_points[i].0.cmp(&index_points[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                kept_basket.push(basket_points[i]);
                kept_index.push(index_points[j]);
                i += 1;
                j += 1;
            }
        }
    }

    AlignedPair {
        basket: DatedSeries::from_sorted(basket.name().to_string(), kept_basket),
        index: DatedSeries::from_sorted(index.name().to_string(), kept_index),
    }
}
