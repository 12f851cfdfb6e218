//! Chart Model
//!
//! Chart kinds selectable on a graph card, the dataset configuration built
//! from a [`GraphDescriptor`], and the platform-independent scene layout that
//! the canvas painter in the dashboard consumes.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::graph::GraphDescriptor;

/// Dataset fill colour
pub const FILL_COLOR: &str = "rgba(75, 192, 192, 0.2)";
/// Dataset stroke colour
pub const STROKE_COLOR: &str = "rgba(75, 192, 192, 1)";
/// Dataset stroke width in pixels
pub const STROKE_WIDTH: f64 = 1.0;
/// Legend label of the single dataset
pub const DATASET_LABEL: &str = "Data";

/// Chart kind chosen in a card's selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Donut,
    Line,
    Scatter,
    Histogram,
    Heatmap,
}

/// Shape family a chart kind is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Bar,
    Pie,
    Line,
    Scatter,
}

impl ChartKind {
    /// All kinds in selector order
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Bar,
        ChartKind::Donut,
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::Histogram,
        ChartKind::Heatmap,
    ];

    /// Selector option value
    pub fn value(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Donut => "donut",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Histogram => "histogram",
            ChartKind::Heatmap => "heatmap",
        }
    }

    /// Selector option label
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Donut => "Donut Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Scatter => "Scatter Plot",
            ChartKind::Histogram => "Histogram",
            ChartKind::Heatmap => "Heatmap",
        }
    }

    /// Geometry used to draw this kind, `None` if it has no drawable form.
    ///
    /// Donut is drawn as a plain pie. Histogram has no binning of its own and
    /// is drawn exactly like Bar. Heatmap has no geometry.
    pub fn geometry(self) -> Option<Geometry> {
        match self {
            ChartKind::Bar | ChartKind::Histogram => Some(Geometry::Bar),
            ChartKind::Donut => Some(Geometry::Pie),
            ChartKind::Line => Some(Geometry::Line),
            ChartKind::Scatter => Some(Geometry::Scatter),
            ChartKind::Heatmap => None,
        }
    }

    /// The kind this one renders identically to, if any
    pub fn aliases(self) -> Option<ChartKind> {
        match self {
            ChartKind::Histogram => Some(ChartKind::Bar),
            _ => None,
        }
    }

    pub fn is_supported(self) -> bool {
        self.geometry().is_some()
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown chart type '{0}' (expected one of: bar, donut, line, scatter, histogram, heatmap)")]
pub struct ParseChartKindError(pub String);

impl FromStr for ChartKind {
    type Err = ParseChartKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.value() == s)
            .ok_or(ParseChartKindError(s))
    }
}

// ============================================
// Dataset configuration
// ============================================

/// Fixed styling shared by every dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

impl Default for DatasetStyle {
    fn default() -> Self {
        Self {
            fill: FILL_COLOR,
            stroke: STROKE_COLOR,
            stroke_width: STROKE_WIDTH,
        }
    }
}

/// The single dataset plotted on a card
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub style: DatasetStyle,
}

/// Everything needed to draw one card's chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub dataset: Dataset,
}

impl ChartSpec {
    /// Build the chart for a card. Without a descriptor the placeholder
    /// series is shown.
    pub fn new(graph: Option<&GraphDescriptor>, kind: ChartKind) -> Self {
        let graph = graph.cloned().unwrap_or_else(GraphDescriptor::placeholder);

        Self {
            kind,
            dataset: Dataset {
                label: DATASET_LABEL,
                labels: graph.labels,
                values: graph.data,
                style: DatasetStyle::default(),
            },
        }
    }

    /// Lay out the chart inside a `width` x `height` drawing area
    pub fn layout(&self, width: f64, height: f64) -> Scene {
        let Some(geometry) = self.kind.geometry() else {
            return Scene::Unsupported { kind: self.kind };
        };

        if self.dataset.values.is_empty() {
            return Scene::Empty;
        }

        let frame = Frame::new(width, height);
        match geometry {
            Geometry::Pie => layout_pie(&self.dataset, &frame),
            _ => layout_cartesian(&self.dataset, geometry, &frame),
        }
    }

    fn label_at(&self, index: usize) -> &str {
        self.dataset
            .labels
            .get(index)
            .map(String::as_str)
            .unwrap_or("")
    }
}

// ============================================
// Scene layout
// ============================================

/// Result of laying out a chart
#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    /// The selected kind has no drawable geometry
    Unsupported { kind: ChartKind },
    /// Nothing to draw
    Empty,
    /// Shapes to paint, plus the value range of the y axis (cartesian only)
    Plot {
        shapes: Vec<Shape>,
        y_range: Option<(f64, f64)>,
    },
}

/// A drawing primitive in canvas coordinates (y grows downward)
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Wedge { cx: f64, cy: f64, radius: f64, start: f64, end: f64 },
    Polyline { points: Vec<(f64, f64)> },
    Dot { x: f64, y: f64, radius: f64 },
    Label { x: f64, y: f64, text: String },
}

const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 10.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 24.0;
const DOT_RADIUS: f64 = 3.0;
const BAR_FILL_RATIO: f64 = 0.8;

/// Plot area inside the margins
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    canvas_height: f64,
}

impl Frame {
    fn new(width: f64, height: f64) -> Self {
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
            canvas_height: height,
        }
    }
}

/// Bar, line and scatter: one category slot per value along x
fn layout_cartesian(dataset: &Dataset, geometry: Geometry, frame: &Frame) -> Scene {
    let values = &dataset.values;
    let count = values.len();

    let mut y_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut y_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Bars grow from zero, so zero must be on the axis
    if geometry == Geometry::Bar {
        y_min = y_min.min(0.0);
        y_max = y_max.max(0.0);
    }
    if (y_max - y_min).abs() < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    }

    let slot = frame.width / count as f64;
    let x_at = |i: usize| frame.left + slot * (i as f64 + 0.5);
    // Halved so the span stays finite for values near f64::MAX
    let half_span = y_max / 2.0 - y_min / 2.0;
    let y_at = |v: f64| frame.top + (y_max / 2.0 - v / 2.0) / half_span * frame.height;

    let mut shapes = Vec::with_capacity(count * 2 + 1);

    match geometry {
        Geometry::Bar => {
            let bar_width = slot * BAR_FILL_RATIO;
            let baseline = y_at(0.0);
            for (i, value) in values.iter().enumerate() {
                let top = y_at(*value);
                shapes.push(Shape::Rect {
                    x: x_at(i) - bar_width / 2.0,
                    y: top.min(baseline),
                    width: bar_width,
                    height: (baseline - top).abs(),
                });
            }
        }
        Geometry::Line => {
            let points: Vec<(f64, f64)> = values
                .iter()
                .enumerate()
                .map(|(i, v)| (x_at(i), y_at(*v)))
                .collect();
            shapes.extend(points.iter().map(|(x, y)| Shape::Dot {
                x: *x,
                y: *y,
                radius: DOT_RADIUS,
            }));
            shapes.insert(0, Shape::Polyline { points });
        }
        Geometry::Scatter => {
            shapes.extend(values.iter().enumerate().map(|(i, v)| Shape::Dot {
                x: x_at(i),
                y: y_at(*v),
                radius: DOT_RADIUS,
            }));
        }
        Geometry::Pie => return layout_pie(dataset, frame),
    }

    let label_y = frame.canvas_height - MARGIN_BOTTOM / 2.0;
    for i in 0..count {
        let text = dataset.labels.get(i).cloned().unwrap_or_default();
        if !text.is_empty() {
            shapes.push(Shape::Label { x: x_at(i), y: label_y, text });
        }
    }

    Scene::Plot {
        shapes,
        y_range: Some((y_min, y_max)),
    }
}

/// Pie: one wedge per positive value, clockwise from 12 o'clock
fn layout_pie(dataset: &Dataset, frame: &Frame) -> Scene {
    let largest = dataset.values.iter().copied().fold(0.0, f64::max);
    if largest <= 0.0 {
        return Scene::Empty;
    }
    // Shares are taken relative to the largest value so the total cannot overflow
    let total: f64 = dataset
        .values
        .iter()
        .filter(|v| **v > 0.0)
        .map(|v| v / largest)
        .sum();

    let cx = frame.left + frame.width / 2.0;
    let cy = frame.top + frame.height / 2.0;
    let radius = frame.width.min(frame.height) / 2.0;

    let mut shapes = Vec::new();
    let mut start = -FRAC_PI_2;

    for (i, value) in dataset.values.iter().enumerate() {
        if *value <= 0.0 {
            continue;
        }
        let sweep = value / largest / total * 2.0 * PI;
        let end = start + sweep;
        shapes.push(Shape::Wedge { cx, cy, radius, start, end });

        let text = dataset.labels.get(i).cloned().unwrap_or_default();
        if !text.is_empty() {
            let mid = start + sweep / 2.0;
            shapes.push(Shape::Label {
                x: cx + mid.cos() * radius * 0.65,
                y: cy + mid.sin() * radius * 0.65,
                text,
            });
        }
        start = end;
    }

    Scene::Plot { shapes, y_range: None }
}

impl Scene {
    pub fn shapes(&self) -> &[Shape] {
        match self {
            Scene::Plot { shapes, .. } => shapes,
            _ => &[],
        }
    }
}

impl ChartSpec {
    /// Plain-text rendering used by the CLI
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let kind_note = match (self.kind.geometry(), self.kind.aliases()) {
            (None, _) => format!("{} (unsupported: no chart geometry)", self.kind.label()),
            (Some(_), Some(alias)) => {
                format!("{} (drawn as {})", self.kind.label(), alias.label())
            }
            (Some(_), None) => self.kind.label().to_string(),
        };
        out.push_str(&kind_note);

        for (i, value) in self.dataset.values.iter().enumerate() {
            out.push_str(&format!("\n  {:<16} {}", self.label_at(i), value));
        }
        out
    }
}
