use crate::grid::tracker_epoch;
use chrono::{Datelike, NaiveDate};
use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/state.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a YYYY-MM-DD date, got {value:?}")]
    InvalidDate { var: &'static str, value: String },
    #[error("{var} {date} is outside 2000-2099, which date keys cannot represent")]
    OutOfRange { var: &'static str, date: NaiveDate },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub epoch: NaiveDate,
    /// Pins "today" instead of reading the local clock.
    pub pinned_today: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let epoch = match lookup("HABIT_EPOCH") {
            Some(value) => parse_date("HABIT_EPOCH", value)?,
            None => tracker_epoch(),
        };
        check_key_range("HABIT_EPOCH", epoch)?;

        let pinned_today = lookup("APP_TODAY")
            .map(|value| parse_date("APP_TODAY", value))
            .transpose()?;
        if let Some(today) = pinned_today {
            check_key_range("APP_TODAY", today)?;
        }

        Ok(Self {
            port,
            data_path,
            epoch,
            pinned_today,
        })
    }
}

fn check_key_range(var: &'static str, date: NaiveDate) -> Result<(), ConfigError> {
    if (2000..=2099).contains(&date.year()) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { var, date })
    }
}

fn parse_date(var: &'static str, value: String) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ConfigError::InvalidDate { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("data/state.json"));
        assert_eq!(config.epoch, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(config.pinned_today.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("APP_DATA_PATH", "/tmp/habits.json"),
            ("HABIT_EPOCH", "2023-06-01"),
            ("APP_TODAY", "2024-03-10"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_path, PathBuf::from("/tmp/habits.json"));
        assert_eq!(config.epoch, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(config.pinned_today, NaiveDate::from_ymd_opt(2024, 3, 10));
    }

    #[test]
    fn pinned_today_must_be_encodable() {
        assert!(matches!(
            config_from(&[("APP_TODAY", "2100-01-01")]),
            Err(ConfigError::OutOfRange { var: "APP_TODAY", .. })
        ));
        assert!(config_from(&[("APP_TODAY", "2099-12-31")]).is_ok());
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "not-a-port")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn bad_dates_are_rejected() {
        assert!(matches!(
            config_from(&[("APP_TODAY", "10/03/2024")]),
            Err(ConfigError::InvalidDate { var: "APP_TODAY", .. })
        ));
        assert!(matches!(
            config_from(&[("HABIT_EPOCH", "1999-12-31")]),
            Err(ConfigError::OutOfRange { var: "HABIT_EPOCH", .. })
        ));
    }
}
