use crate::domain::series::TimeSeriesTable;
use crate::error::DataLoadError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const SPREAD_10Y_2Y: &str = "10Y_2Y_Spread";
pub const SPREAD_10Y_3M: &str = "10Y_3M_Spread";
pub const SAHM_RULE: &str = "Sahm_Rule";
pub const RECESSION_FLAG: &str = "USREC";

pub const REQUIRED_COLUMNS: [&str; 3] = [SPREAD_10Y_2Y, SPREAD_10Y_3M, SAHM_RULE];

/// Columns that must parse as numbers wherever they appear.
pub const NUMERIC_COLUMNS: [&str; 4] = [SPREAD_10Y_2Y, SPREAD_10Y_3M, SAHM_RULE, RECESSION_FLAG];

/// Indicator readings from the last row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatestSnapshot {
    pub date: NaiveDate,
    pub spread_10y_2y: Option<f64>,
    /// Displayed only; no scoring rule reads it.
    pub spread_10y_3m: Option<f64>,
    pub sahm_rule: Option<f64>,
}

impl LatestSnapshot {
    pub fn from_table(table: &TimeSeriesTable) -> Result<Self, DataLoadError> {
        let date = table.latest_date().ok_or(DataLoadError::Empty)?;
        let latest = |name: &str| -> Result<Option<f64>, DataLoadError> {
            let column = table.require_column(name)?;
            Ok(column.last().copied().flatten())
        };

        Ok(Self {
            date,
            spread_10y_2y: latest(SPREAD_10Y_2Y)?,
            spread_10y_3m: latest(SPREAD_10Y_3M)?,
            sahm_rule: latest(SAHM_RULE)?,
        })
    }
}
