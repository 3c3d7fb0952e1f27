//! The time-series chart spec embedded into the dashboard page.

use aquaprobe_readings::reading::Reading;

use serde::Serialize;

use crate::id::MountId;

/// The number of readings charted next to the summary cards.
pub const OVERVIEW_POINTS: usize = 7;

/// The format of chart x-values, understood by the date axis.
const X_VALUE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// How much of a history response the chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartScope {
    /// The last few readings, as shown on overview pages.
    Overview,

    /// The full history of the selected sensor, as shown on details pages.
    Details,
}

/// The time-series chart of one polling cycle.
#[derive(Debug)]
pub struct Chart {
    pub(crate) mount: MountId,
    pub(crate) spec: ChartSpec,
}

impl Chart {
    /// Build a chart from a newest-first history response.
    ///
    /// The series keeps the response order; the date axis positions the
    /// points by their timestamps, so no ascending re-sort happens here.
    pub fn new(readings: &[Reading], scope: ChartScope) -> Chart {
        let points = match scope {
            ChartScope::Overview => &readings[..readings.len().min(OVERVIEW_POINTS)],
            ChartScope::Details => readings,
        };

        Self {
            mount: MountId::next(),
            spec: ChartSpec::new(points),
        }
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct ChartSpec {
    pub trace: Trace,
    pub layout: Layout,
}

impl ChartSpec {
    fn new(points: &[Reading]) -> ChartSpec {
        Self {
            trace: Trace::new(points),
            layout: Layout::new(points),
        }
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct Trace {
    #[serde(rename = "type")]
    kind: TraceKind,
    mode: Mode,
    x: Vec<String>,
    y: Vec<f64>,
}

impl Trace {
    fn new(points: &[Reading]) -> Trace {
        Self {
            kind: TraceKind::Scatter,
            mode: Mode::Lines,
            x: points
                .iter()
                .map(|r| r.timestamp.format(X_VALUE_FORMAT).to_string())
                .collect(),
            y: points.iter().map(|r| r.value).collect(),
        }
    }
}

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TraceKind {
    #[default]
    Scatter,
}

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Mode {
    #[default]
    Lines,
}

#[derive(Serialize, Debug)]
pub(crate) struct Layout {
    #[serde(rename = "xaxis")]
    x_axis: XAxis,
    #[serde(rename = "yaxis")]
    y_axis: YAxis,
    width: u32,
    height: u32,
    #[serde(rename = "showlegend")]
    show_legend: bool,
}

impl Layout {
    fn new(points: &[Reading]) -> Layout {
        let bounds = AxisBounds::for_values(points.iter().map(|r| r.value));

        Self {
            x_axis: XAxis::date(),
            y_axis: YAxis::bounded(bounds),
            width: 800,
            height: 400,
            show_legend: false,
        }
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct XAxis {
    #[serde(rename = "type")]
    kind: AxisKind,
    #[serde(rename = "showgrid")]
    show_grid: bool,
}

impl XAxis {
    fn date() -> XAxis {
        Self {
            kind: AxisKind::Date,
            show_grid: false,
        }
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct YAxis {
    #[serde(rename = "type")]
    kind: AxisKind,
    range: [f64; 2],
    dtick: f64,
    #[serde(rename = "zeroline")]
    zero_line: bool,
}

impl YAxis {
    fn bounded(bounds: AxisBounds) -> YAxis {
        Self {
            kind: AxisKind::Linear,
            range: [bounds.min, bounds.max],
            dtick: bounds.step,
            zero_line: true,
        }
    }
}

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub(crate) enum AxisKind {
    #[default]
    Linear,
    Date,
}

/// The y-axis headroom policy: the upper bound is the largest value
/// rounded up to the nearest hundred, with ten ticks from zero.
///
/// Applied uniformly to every sensor kind, so small-scale quantities
/// such as pH chart against a 0-100 axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    /// The lower bound, always zero.
    pub min: f64,

    /// The upper bound.
    pub max: f64,

    /// The tick step, a tenth of the upper bound.
    pub step: f64,
}

impl AxisBounds {
    /// Compute the bounds for a series of values.
    pub fn for_values<I>(values: I) -> AxisBounds
    where
        I: IntoIterator<Item = f64>,
    {
        let largest = values.into_iter().fold(0.0_f64, f64::max);
        let max = (largest / 100.0).ceil() * 100.0;

        Self {
            min: 0.0,
            max,
            step: max / 10.0,
        }
    }
}
