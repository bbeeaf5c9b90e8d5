use crate::summary::Budget;
use crate::table::FoodLog;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub budget: Budget,
    pub log: Arc<Mutex<FoodLog>>,
}

impl AppState {
    pub fn new(budget: Budget) -> Self {
        Self {
            budget,
            log: Arc::new(Mutex::new(FoodLog::new())),
        }
    }
}
