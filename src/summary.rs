use crate::table::FoodLog;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Daily calorie targets. Either may be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Budget {
    pub calorie_limit: Option<u64>,
    pub calorie_need: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub total_kcal: f64,
    pub calorie_limit: Option<u64>,
    pub calorie_need: Option<u64>,
    pub remaining: Option<f64>,
    pub over_limit: bool,
}

pub fn build_summary(log: &FoodLog, budget: Budget) -> DaySummary {
    build_summary_at(Local::now().date_naive(), log, budget)
}

pub fn build_summary_at(today: NaiveDate, log: &FoodLog, budget: Budget) -> DaySummary {
    let total_kcal = log.total_kcal();
    let limit_centikcal = budget.calorie_limit.map(|limit| i128::from(limit) * 100);

    // hundredths keep the comparison exact
    let remaining_centikcal =
        limit_centikcal.map(|limit| limit - i128::from(log.total_centikcal()));

    DaySummary {
        date: today.format("%Y-%m-%d").to_string(),
        total_kcal,
        calorie_limit: budget.calorie_limit,
        calorie_need: budget.calorie_need,
        remaining: remaining_centikcal.map(|value| value as f64 / 100.0),
        over_limit: remaining_centikcal.is_some_and(|value| value < 0),
    }
}
