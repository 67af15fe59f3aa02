//! Line trace primitives handed to a rendering surface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An RGB stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,

    /// Green channel.
    pub g: u8,

    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Stroke color of the basket curve.
pub const BASKET_COLOR: Rgb = Rgb::new(255, 0, 0);

/// Stroke color of the index curve.
pub const INDEX_COLOR: Rgb = Rgb::new(0, 0, 255);

/// Stroke color of the difference curve.
pub const DIFFERENCE_COLOR: Rgb = Rgb::new(0, 128, 0);

/// Corner a chart legend is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendCorner {
    /// Top-left corner.
    #[default]
    TopLeft,

    /// Top-right corner.
    TopRight,

    /// Bottom-left corner.
    BottomLeft,

    /// Bottom-right corner.
    BottomRight,
}

/// A single renderable line: ordered points, legend label, stroke color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTrace {
    /// Legend label.
    pub label: String,

    /// Stroke color.
    pub color: Rgb,

    /// Ordered `(x = date, y = value)` points.
    pub points: Vec<(NaiveDate, f64)>,
}

impl LineTrace {
    /// Create a trace.
    pub fn new(label: impl Into<String>, color: Rgb, points: Vec<(NaiveDate, f64)>) -> Self {
        Self {
            label: label.into(),
            color,
            points,
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trace carries no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
