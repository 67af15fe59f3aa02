//! Chart composition for the comparison and difference views.

use crate::trace::{BASKET_COLOR, DIFFERENCE_COLOR, INDEX_COLOR, LegendCorner, LineTrace};
use hobart_returns::{CumulativeSeries, DifferenceSeries};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when serializing chart specs.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A complete chart: title, axis labels, legend anchor and traces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart title.
    pub title: String,

    /// X-axis label.
    pub x_label: String,

    /// Y-axis label.
    pub y_label: String,

    /// Corner the legend is anchored to.
    pub legend: LegendCorner,

    /// Traces in draw order.
    pub traces: Vec<LineTrace>,
}

impl ChartSpec {
    /// Serialize the chart for an external rendering surface.
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compose the basket-vs-index comparison chart.
///
/// The basket curve renders red, the index curve blue, legend anchored
/// top-left. Empty curves compose into empty traces; the renderer shows a
/// blank chart.
pub fn comparison_chart(
    basket_name: &str,
    index_name: &str,
    basket: &CumulativeSeries,
    index: &CumulativeSeries,
) -> ChartSpec {
    ChartSpec {
        title: format!("Cumulative Returns: {basket_name} vs {index_name}"),
        x_label: "Date".to_string(),
        y_label: "Cumulative Return".to_string(),
        legend: LegendCorner::TopLeft,
        traces: vec![
            LineTrace::new(
                format!("{basket_name} (Basket)"),
                BASKET_COLOR,
                basket.points().to_vec(),
            ),
            LineTrace::new(
                format!("{index_name} (Index)"),
                INDEX_COLOR,
                index.points().to_vec(),
            ),
        ],
    }
}

/// Compose the cumulative-return difference chart: one green trace.
pub fn difference_chart(
    basket_name: &str,
    index_name: &str,
    diff: &DifferenceSeries,
) -> ChartSpec {
    ChartSpec {
        title: format!("Cumulative Return Difference: {basket_name} - {index_name}"),
        x_label: "Date".to_string(),
        y_label: "Cumulative Return Difference".to_string(),
        legend: LegendCorner::TopLeft,
        traces: vec![LineTrace::new(
            "Basket - Index (Difference)",
            DIFFERENCE_COLOR,
            diff.points().to_vec(),
        )],
    }
}
