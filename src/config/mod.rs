use crate::domain::model::Period;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "parkpulse")]
#[command(about = "Fetch parking analytics and summarize occupancy trends")]
pub struct CliConfig {
    /// Base URL of the parking API.
    #[arg(long, default_value = "http://localhost:5002/api")]
    pub base_url: String,

    /// Look-back window: 7d, 1m or 3m.
    #[arg(long, default_value = "1m")]
    pub period: Period,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CliConfig::parse_from(["parkpulse"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url(), "http://localhost:5002/api");
        assert_eq!(config.period, Period::OneMonth);
    }

    #[test]
    fn bad_base_url_fails_validation() {
        let config = CliConfig::parse_from(["parkpulse", "--base-url", "nope"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_period_token_defaults_to_three_months() {
        let config = CliConfig::parse_from(["parkpulse", "--period", "1y"]);
        assert_eq!(config.period, Period::ThreeMonths);
    }
}
