//! Plotly.js figure model. Field names follow the Plotly JSON schema.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<ScatterTrace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub x: Vec<NaiveDate>,
    pub y: Vec<Option<f64>>,
    pub line: Line,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Line {
        xref: &'static str,
        yref: &'static str,
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
        line: Line,
    },
    Rect {
        xref: &'static str,
        yref: &'static str,
        x0: NaiveDate,
        x1: NaiveDate,
        y0: f64,
        y1: f64,
        fillcolor: String,
        opacity: f64,
        layer: &'static str,
        line: Line,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub height: u32,
    pub margin: Margin,
    pub legend: Legend,
    pub shapes: Vec<Shape>,
    pub updatemenus: Vec<UpdateMenu>,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: &'static str,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub gridcolor: &'static str,
    pub zeroline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateMenu {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub direction: &'static str,
    pub active: usize,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub label: String,
    pub method: &'static str,
    pub args: Vec<Value>,
}

impl Figure {
    /// Markup that loads Plotly from `cdn_url` and draws the figure into
    /// `element_id`. The same figure always yields the same bytes.
    pub fn to_html_fragment(&self, element_id: &str, cdn_url: &str) -> serde_json::Result<String> {
        let data = script_safe(serde_json::to_string(&self.data)?);
        let layout = script_safe(serde_json::to_string(&self.layout)?);
        let height = self.layout.height;

        Ok(format!(
            r#"<script src="{cdn_url}" charset="utf-8"></script>
            <div id="{element_id}" class="plotly-graph-div" style="height:{height}px; width:100%;"></div>
            <script type="text/javascript">
                Plotly.newPlot("{element_id}", {data}, {layout}, {{"responsive": true}});
            </script>"#
        ))
    }
}

// A literal "</script>" inside JSON would end the script element early.
fn script_safe(json: String) -> String {
    json.replace("</", "<\\/")
}
