use crate::error::DataLoadError;
use chrono::NaiveDate;

/// Date-indexed table of numeric columns. Rows stay in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesTable {
    dates: Vec<NaiveDate>,
    columns: Vec<(String, Vec<Option<f64>>)>,
}

impl TimeSeriesTable {
    /// Every column must have one value per date.
    pub fn new(dates: Vec<NaiveDate>, columns: Vec<(String, Vec<Option<f64>>)>) -> Self {
        debug_assert!(columns.iter().all(|(_, v)| v.len() == dates.len()));
        Self { dates, columns }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    pub fn require_column(&self, name: &str) -> Result<&[Option<f64>], DataLoadError> {
        self.column(name)
            .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
    }

    pub fn require_columns(&self, names: &[&str]) -> Result<(), DataLoadError> {
        for name in names {
            self.require_column(name)?;
        }
        Ok(())
    }

    /// True when every date is strictly after the one before it.
    pub fn is_strictly_increasing(&self) -> bool {
        self.dates.windows(2).all(|w| w[0] < w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, m, 1).unwrap()
    }

    #[test]
    fn column_lookup_by_name() {
        let table = TimeSeriesTable::new(
            vec![d(1), d(2)],
            vec![
                ("a".to_string(), vec![Some(1.0), None]),
                ("b".to_string(), vec![Some(2.0), Some(3.0)]),
            ],
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.column("b"), Some(&[Some(2.0), Some(3.0)][..]));
        assert!(table.column("c").is_none());
        assert!(matches!(
            table.require_columns(&["a", "c"]),
            Err(DataLoadError::MissingColumn(c)) if c == "c"
        ));
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn detects_unordered_index() {
        let ordered = TimeSeriesTable::new(vec![d(1), d(2), d(3)], vec![]);
        let repeated = TimeSeriesTable::new(vec![d(1), d(1)], vec![]);
        let reversed = TimeSeriesTable::new(vec![d(3), d(2)], vec![]);

        assert!(ordered.is_strictly_increasing());
        assert!(!repeated.is_strictly_increasing());
        assert!(!reversed.is_strictly_increasing());
    }
}
