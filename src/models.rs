use crate::summary::DaySummary;
use crate::table::{LogRow, LogSnapshot};
use serde::{Deserialize, Serialize};

/// Raw entry fields, exactly as typed into the form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub food: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub kcal_per_unit: String,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub rows: Vec<LogRow>,
    pub total_amount: u64,
    pub total_calories: f64,
    pub hidden: bool,
    pub summary: DaySummary,
}

impl LogResponse {
    pub fn new(snapshot: LogSnapshot, summary: DaySummary) -> Self {
        Self {
            total_calories: snapshot.total_kcal(),
            total_amount: snapshot.total_amount,
            hidden: snapshot.hidden,
            rows: snapshot.rows,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::{build_summary_at, Budget};
    use crate::table::FoodLog;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn log_response_json_shape() {
        let mut log = FoodLog::new();
        log.submit_entry("egg", "50", "155").unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let budget = Budget {
            calorie_limit: Some(2000),
            calorie_need: None,
        };
        let response = LogResponse::new(log.snapshot(), build_summary_at(date, &log, budget));

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "rows": [{ "id": 1, "rank": 1, "food": "egg", "amount": 50, "kcal": 77.5 }],
                "total_amount": 50,
                "total_calories": 77.5,
                "hidden": false,
                "summary": {
                    "date": "2026-01-05",
                    "total_kcal": 77.5,
                    "calorie_limit": 2000,
                    "calorie_need": null,
                    "remaining": 1922.5,
                    "over_limit": false
                }
            })
        );
    }

    #[test]
    fn entry_form_fields_default_to_empty() {
        let form: EntryForm = serde_json::from_str(r#"{ "food": "egg" }"#).unwrap();
        assert_eq!(form.food, "egg");
        assert!(form.amount.is_empty());
        assert!(form.kcal_per_unit.is_empty());
    }
}
