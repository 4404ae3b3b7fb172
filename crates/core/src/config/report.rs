use crate::domain::color::Rgb;
use crate::domain::indicators::{SAHM_RULE, SPREAD_10Y_2Y, SPREAD_10Y_3M};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the scorer and the renderer must agree on.
///
/// `Default` reproduces the published dashboard. A YAML file may override any
/// subset of fields; omitted fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub risk: RiskConfig,
    pub chart: ChartStyle,
}

impl ReportConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// 10Y-2Y spread strictly below this adds `spread_points`.
    pub spread_10y_2y_below: f64,
    pub spread_points: u32,
    /// Sahm Rule at or above this adds `sahm_caution_points`.
    pub sahm_caution_at: f64,
    pub sahm_caution_points: u32,
    /// Sahm Rule at or above this adds `sahm_trigger_points` on top.
    pub sahm_trigger_at: f64,
    pub sahm_trigger_points: u32,
    pub caution_at: u32,
    pub high_risk_at: u32,
    pub colors: TierColors,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            spread_10y_2y_below: 0.7,
            spread_points: 20,
            sahm_caution_at: 0.3,
            sahm_caution_points: 30,
            sahm_trigger_at: 0.5,
            sahm_trigger_points: 50,
            caution_at: 30,
            high_risk_at: 70,
            colors: TierColors::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierColors {
    pub stable: Rgb,
    pub caution: Rgb,
    pub high_risk: Rgb,
}

impl Default for TierColors {
    fn default() -> Self {
        Self {
            stable: Rgb::new(0x2e, 0xcc, 0x71),
            caution: Rgb::new(0xf3, 0x9c, 0x12),
            high_risk: Rgb::new(0xe7, 0x4c, 0x3c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub height: u32,
    /// Horizontal line at y = 0 marking curve inversion.
    pub reference_line: LineStyle,
    pub recession_fill: Rgb,
    pub recession_opacity: f64,
    pub series: Vec<SeriesStyle>,
    pub show_all_label: String,
    pub element_id: String,
    pub plotly_cdn_url: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            height: 550,
            reference_line: LineStyle {
                color: Rgb::new(0x7f, 0x8c, 0x8d),
                width: 1.0,
                dash: Some("dash".to_string()),
            },
            recession_fill: Rgb::new(0x80, 0x80, 0x80),
            recession_opacity: 0.2,
            series: vec![
                SeriesStyle::new(
                    SPREAD_10Y_2Y,
                    "10Y-2Y Spread",
                    "10Y-2Y",
                    LineStyle::solid(Rgb::new(0x29, 0x80, 0xb9), 2.5),
                ),
                SeriesStyle::new(
                    SPREAD_10Y_3M,
                    "10Y-3M Spread",
                    "10Y-3M",
                    LineStyle::solid(Rgb::new(0x16, 0xa0, 0x85), 2.5),
                ),
                SeriesStyle::new(
                    SAHM_RULE,
                    "Sahm Rule",
                    "Sahm Rule",
                    LineStyle {
                        color: Rgb::new(0xc0, 0x39, 0x2b),
                        width: 3.0,
                        dash: Some("dot".to_string()),
                    },
                ),
            ],
            show_all_label: "Show All".to_string(),
            element_id: "recession-chart".to_string(),
            plotly_cdn_url: "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    /// Source column in the input table.
    pub column: String,
    /// Legend name.
    pub name: String,
    pub button_label: String,
    pub line: LineStyle,
}

impl SeriesStyle {
    pub fn new(column: &str, name: &str, button_label: &str, line: LineStyle) -> Self {
        Self {
            column: column.to_string(),
            name: name.to_string(),
            button_label: button_label.to_string(),
            line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Rgb,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

impl LineStyle {
    pub fn solid(color: Rgb, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }
}
