//! Selection pipeline: name lookup, alignment, cumulation and chart
//! composition in one call.

use hobart_chart::{ChartSpec, comparison_chart, difference_chart};
use hobart_returns::{ReturnTable, align, cumulate, difference};
use thiserror::Error;

/// Errors that can occur when resolving a selection.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The basket table has no column with the requested name.
    #[error("Unknown basket: {0}")]
    UnknownBasket(String),

    /// The benchmark table has no column with the requested name.
    #[error("Unknown index: {0}")]
    UnknownIndex(String),
}

/// The two chart specs produced for one basket/index selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Basket-vs-index cumulative return chart.
    pub comparison: ChartSpec,

    /// Cumulative return difference chart.
    pub difference: ChartSpec,
}

/// Run the full comparison for one basket/index selection.
///
/// Looks the two columns up by name, intersects their date axes starting at
/// the basket's first observation, compounds both return streams and
/// composes the comparison and difference charts. Selections that align to
/// an empty axis produce empty traces, not an error.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hobart::pipeline::compare;
/// use hobart_returns::{DatedSeries, ReturnTable};
///
/// let date = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let baskets = ReturnTable::new(
///     "baskets",
///     vec![DatedSeries::from_points("Momentum", vec![(date(2), 0.01)])?],
/// )?;
/// let benchmarks = ReturnTable::new(
///     "benchmarks",
///     vec![DatedSeries::from_points("Nifty 50", vec![(date(2), 0.0)])?],
/// )?;
///
/// let result = compare(&baskets, &benchmarks, "Momentum", "Nifty 50")?;
/// assert_eq!(result.comparison.title, "Cumulative Returns: Momentum vs Nifty 50");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compare(
    baskets: &ReturnTable,
    benchmarks: &ReturnTable,
    basket_name: &str,
    index_name: &str,
) -> Result<Comparison, PipelineError> {
    let basket = baskets
        .series(basket_name)
        .ok_or_else(|| PipelineError::UnknownBasket(basket_name.to_string()))?;
    let index = benchmarks
        .series(index_name)
        .ok_or_else(|| PipelineError::UnknownIndex(index_name.to_string()))?;

    let pair = align(basket, index);
    tracing::debug!(
        basket = basket_name,
        index = index_name,
        aligned = pair.len(),
        "selection aligned"
    );

    let basket_cum = cumulate(pair.basket());
    let index_cum = cumulate(pair.index());
    let diff = difference(&basket_cum, &index_cum);

    Ok(Comparison {
        comparison: comparison_chart(basket_name, index_name, &basket_cum, &index_cum),
        difference: difference_chart(basket_name, index_name, &diff),
    })
}
