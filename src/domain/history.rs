use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulated completed-work minutes per calendar day.
///
/// Serialized as a flat JSON object keyed by ISO date, e.g.
/// `{"2024-05-01": 50, "2024-05-02": 25}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHistory {
    days: BTreeMap<String, u64>,
}

/// One day of history, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub date: String,
    pub minutes: u64,
}

impl HistoryRow {
    /// Minutes shown as hours with two decimals ("0.83 hrs")
    pub fn hours_formatted(&self) -> String {
        format_hours(self.minutes)
    }
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add minutes to a day, creating the entry if absent
    pub fn record(&mut self, date: NaiveDate, minutes: u64) -> u64 {
        let entry = self.days.entry(date_key(date)).or_insert(0);
        *entry = entry.saturating_add(minutes);
        *entry
    }

    /// Minutes logged for a day, if any entry exists
    pub fn minutes_on(&self, date: NaiveDate) -> Option<u64> {
        self.days.get(&date_key(date)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Sum of all logged minutes
    pub fn total_minutes(&self) -> u64 {
        self.days.values().fold(0u64, |acc, m| acc.saturating_add(*m))
    }

    /// Rows ordered newest day first
    pub fn rows_newest_first(&self) -> Vec<HistoryRow> {
        self.days
            .iter()
            .rev()
            .map(|(date, minutes)| HistoryRow {
                date: date.clone(),
                minutes: *minutes,
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format minutes as hours with two decimals
pub fn format_hours(minutes: u64) -> String {
    format!("{:.2} hrs", minutes as f64 / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_creates_and_increments() {
        let mut history = SessionHistory::new();
        assert_eq!(history.minutes_on(day(2024, 5, 1)), None);

        assert_eq!(history.record(day(2024, 5, 1), 25), 25);
        assert_eq!(history.record(day(2024, 5, 1), 25), 50);
        assert_eq!(history.minutes_on(day(2024, 5, 1)), Some(50));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_record_zero_still_creates_entry() {
        let mut history = SessionHistory::new();
        history.record(day(2024, 5, 1), 0);
        assert_eq!(history.minutes_on(day(2024, 5, 1)), Some(0));
    }

    #[test]
    fn test_rows_newest_first() {
        let mut history = SessionHistory::new();
        history.record(day(2024, 4, 30), 10);
        history.record(day(2024, 5, 2), 50);
        history.record(day(2024, 5, 1), 25);

        let dates: Vec<String> = history
            .rows_newest_first()
            .into_iter()
            .map(|row| row.date)
            .collect();
        assert_eq!(dates, vec!["2024-05-02", "2024-05-01", "2024-04-30"]);
        assert_eq!(history.total_minutes(), 85);
    }

    #[test]
    fn test_json_shape() {
        let mut history = SessionHistory::new();
        history.record(day(2024, 5, 1), 50);
        history.record(day(2024, 5, 2), 25);

        let json = history.to_json().unwrap();
        assert_eq!(json, r#"{"2024-05-01":50,"2024-05-02":25}"#);

        let parsed = SessionHistory::from_json(r#"{"2024-05-01": 50, "2024-05-02": 25}"#).unwrap();
        assert_eq!(parsed, history);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(SessionHistory::from_json("not json").is_err());
        assert!(SessionHistory::from_json(r#"{"2024-05-01": "lots"}"#).is_err());
        assert!(SessionHistory::from_json(r#"{"2024-05-01": -3}"#).is_err());
    }

    #[test]
    fn test_hours_formatted() {
        let row = HistoryRow {
            date: "2024-05-01".to_string(),
            minutes: 50,
        };
        assert_eq!(row.hours_formatted(), "0.83 hrs");
        assert_eq!(format_hours(90), "1.50 hrs");
        assert_eq!(format_hours(0), "0.00 hrs");
    }
}
