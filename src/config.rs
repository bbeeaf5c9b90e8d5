use crate::summary::Budget;
use std::env;
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub budget: Budget,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source. Bad values fall back to
    /// defaults with a warning instead of refusing to start.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| parse_var::<u16>("PORT", &value))
            .unwrap_or(DEFAULT_PORT);

        let budget = Budget {
            calorie_limit: lookup("FOOD_LOG_CALORIE_LIMIT")
                .and_then(|value| parse_var("FOOD_LOG_CALORIE_LIMIT", &value)),
            calorie_need: lookup("FOOD_LOG_CALORIE_NEED")
                .and_then(|value| parse_var("FOOD_LOG_CALORIE_NEED", &value)),
        };

        Self { port, budget }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("ignoring invalid {key}={value:?}");
            None
        }
    }
}
