pub mod plotly;

use crate::config::{ChartStyle, LineStyle};
use crate::domain::indicators::RECESSION_FLAG;
use crate::domain::series::TimeSeriesTable;
use crate::error::DataLoadError;
use chrono::NaiveDate;
use self::plotly::{Axis, Button, Figure, Layout, Legend, Line, Margin, ScatterTrace, Shape, UpdateMenu};
use serde::Serialize;
use serde_json::json;

/// Half-open `[start, end)` span of flagged recession rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecessionInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Scans the flag column for runs of 1.
///
/// A run opens on the first 1 and closes on the next 0; missing flags neither
/// open nor close. A run still open at the last row is dropped.
pub fn recession_intervals(dates: &[NaiveDate], flags: &[Option<f64>]) -> Vec<RecessionInterval> {
    let mut out = Vec::new();
    let mut start: Option<NaiveDate> = None;

    for (&date, &flag) in dates.iter().zip(flags) {
        match (flag, start) {
            (Some(f), None) if f == 1.0 => start = Some(date),
            (Some(f), Some(s)) if f == 0.0 => {
                out.push(RecessionInterval {
                    start: s,
                    end: date,
                });
                start = None;
            }
            _ => {}
        }
    }

    out
}

/// Builds the indicator chart: one line per configured series, the zero
/// reference line, recession shading when the table has a flag column, and
/// one visibility preset per series plus "show all".
pub fn build_figure(table: &TimeSeriesTable, style: &ChartStyle) -> Result<Figure, DataLoadError> {
    let mut shapes = vec![Shape::Line {
        xref: "paper",
        yref: "y",
        x0: 0.0,
        x1: 1.0,
        y0: 0.0,
        y1: 0.0,
        line: line(&style.reference_line),
    }];

    if let Some(flags) = table.column(RECESSION_FLAG) {
        let intervals = recession_intervals(table.dates(), flags);
        tracing::debug!(intervals = intervals.len(), "shading recession intervals");
        shapes.extend(intervals.into_iter().map(|iv| Shape::Rect {
            xref: "x",
            yref: "paper",
            x0: iv.start,
            x1: iv.end,
            y0: 0.0,
            y1: 1.0,
            fillcolor: style.recession_fill.to_string(),
            opacity: style.recession_opacity,
            layer: "below",
            line: Line {
                color: style.recession_fill.to_string(),
                width: 0.0,
                dash: None,
            },
        }));
    }

    let mut data = Vec::with_capacity(style.series.len());
    for series in &style.series {
        let values = table.require_column(&series.column)?;
        data.push(ScatterTrace {
            kind: "scatter",
            mode: "lines",
            name: series.name.clone(),
            x: table.dates().to_vec(),
            y: values.to_vec(),
            line: line(&series.line),
            visible: true,
        });
    }

    let n = style.series.len();
    let mut buttons = vec![visibility_button(&style.show_all_label, vec![true; n])];
    buttons.extend(style.series.iter().enumerate().map(|(i, series)| {
        let visible = (0..n).map(|j| j == i).collect();
        visibility_button(&series.button_label, visible)
    }));

    Ok(Figure {
        data,
        layout: Layout {
            height: style.height,
            margin: Margin {
                l: 20,
                r: 20,
                t: 100,
                b: 20,
            },
            legend: Legend {
                orientation: "h",
                x: 0.5,
                y: 1.05,
                xanchor: "center",
            },
            shapes,
            updatemenus: vec![UpdateMenu {
                kind: "buttons",
                direction: "right",
                active: 0,
                x: 0.5,
                y: 1.15,
                xanchor: "center",
                buttons,
            }],
            paper_bgcolor: "white",
            plot_bgcolor: "white",
            xaxis: Axis {
                gridcolor: "#ebf0f8",
                zeroline: false,
            },
            yaxis: Axis {
                gridcolor: "#ebf0f8",
                zeroline: false,
            },
        },
    })
}

fn line(style: &LineStyle) -> Line {
    Line {
        color: style.color.to_string(),
        width: style.width,
        dash: style.dash.clone(),
    }
}

fn visibility_button(label: &str, visible: Vec<bool>) -> Button {
    Button {
        label: label.to_string(),
        method: "update",
        args: vec![json!({ "visible": visible })],
    }
}
