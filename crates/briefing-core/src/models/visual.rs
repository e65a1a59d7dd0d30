use serde::{Deserialize, Serialize};

use super::rich_text::RichText;
use crate::theme::PaletteColor;

/// A visual element attached to a slide, drawn after the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualAttachment {
    /// A row of short highlight values, one cell per entry.
    StatGrid { entries: Vec<Stat> },
    BarChart(BarChart),
    /// A single filled box of text.
    CalloutBox {
        text: RichText,
        fill: PaletteColor,
        /// Render as a monospace caption (ASCII diagrams) instead of white
        /// centered callout text.
        monospace: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub caption: String,
}

/// Grouped vertical bar chart over a fixed category axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub category_axis_title: String,
    pub value_axis_title: String,
    /// Upper bound of the value axis. The lower bound is always zero.
    pub value_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    /// One value per category, in category order.
    pub values: Vec<f64>,
}

impl BarChart {
    /// Largest value across all series, or zero for an empty chart.
    pub fn peak(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Upper bound the value axis is drawn to: `value_max`, raised to the
    /// peak when a value exceeds it.
    pub fn axis_max(&self) -> f64 {
        self.value_max.max(self.peak())
    }
}
