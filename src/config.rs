use crate::errors::{ConfigError, ConfigResult};

/// Which side of the goal-price event a bet is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetSide {
    /// Terminal price strictly exceeds the goal.
    InFavor,
    /// Terminal price at or below the goal.
    Against,
}

impl std::fmt::Display for BetSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InFavor => write!(f, "favor"),
            Self::Against => write!(f, "against"),
        }
    }
}

/// Full input record for one evaluation. Collaborators (CLI, feeds, web
/// layers) produce this; the core validates it and runs.
///
/// Volatility fields are percentages (2.26 means 2.26% daily volatility),
/// matching how volatility is quoted upstream; conversion to fractions
/// happens during validation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SimulationConfig {
    pub start_price: f64,
    pub goal_price: f64,
    pub daily_volatility_percent: f64,
    pub time_increment_minutes: u32,
    pub total_minutes: u32,
    pub simulation_count: u64,
    /// Per-period volatility percentages, one entry per intraday period.
    /// Absent means constant volatility across the day.
    #[serde(default)]
    pub intraday_volatility_percent: Option<Vec<f64>>,
    /// Externally offered odds, quoted as "bet 1 to win x".
    #[serde(default)]
    pub offered_odds: Option<f64>,
    /// Side the offered odds apply to. Classification is only produced
    /// when both this and `offered_odds` are present.
    #[serde(default)]
    pub bet_side: Option<BetSide>,
    /// Master seed for the per-path random streams. Fixed seed means
    /// bit-identical results across runs and thread counts.
    #[serde(default)]
    pub master_seed: u64,
}

impl SimulationConfig {
    /// Load a configuration from the environment (and `.env` if present).
    ///
    /// `START_PRICE`, `GOAL_PRICE` and `DAILY_VOLATILITY_PERCENT` are
    /// required; the rest default to a 5-minute / 2-hour / 10k-path run.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();

        let start_price = env_var("START_PRICE")?
            .parse::<f64>()
            .map_err(|e| ConfigError::Parse(format!("START_PRICE: {e}")))?;

        let goal_price = env_var("GOAL_PRICE")?
            .parse::<f64>()
            .map_err(|e| ConfigError::Parse(format!("GOAL_PRICE: {e}")))?;

        let daily_volatility_percent = env_var("DAILY_VOLATILITY_PERCENT")?
            .parse::<f64>()
            .map_err(|e| ConfigError::Parse(format!("DAILY_VOLATILITY_PERCENT: {e}")))?;

        let time_increment_minutes = env_var_or("TIME_INCREMENT_MINUTES", "5")
            .parse::<u32>()
            .map_err(|e| ConfigError::Parse(format!("TIME_INCREMENT_MINUTES: {e}")))?;

        let total_minutes = env_var_or("TOTAL_MINUTES", "120")
            .parse::<u32>()
            .map_err(|e| ConfigError::Parse(format!("TOTAL_MINUTES: {e}")))?;

        let simulation_count = env_var_or("SIMULATION_COUNT", "10000")
            .parse::<u64>()
            .map_err(|e| ConfigError::Parse(format!("SIMULATION_COUNT: {e}")))?;

        let master_seed = env_var_or("MASTER_SEED", "0")
            .parse::<u64>()
            .map_err(|e| ConfigError::Parse(format!("MASTER_SEED: {e}")))?;

        // Space-separated list, one percentage per intraday period
        let intraday_volatility_percent = match std::env::var("INTRADAY_VOLATILITY_PERCENT") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.split_whitespace()
                    .map(|v| {
                        v.parse::<f64>().map_err(|e| {
                            ConfigError::Parse(format!("INTRADAY_VOLATILITY_PERCENT '{v}': {e}"))
                        })
                    })
                    .collect::<ConfigResult<Vec<f64>>>()?,
            ),
            _ => None,
        };

        let offered_odds = match std::env::var("OFFERED_ODDS") {
            Ok(raw) => Some(
                raw.parse::<f64>()
                    .map_err(|e| ConfigError::Parse(format!("OFFERED_ODDS: {e}")))?,
            ),
            Err(_) => None,
        };

        let bet_side = match std::env::var("BET_SIDE") {
            Ok(raw) => Some(match raw.to_lowercase().as_str() {
                "favor" | "in_favor" | "yes" => BetSide::InFavor,
                "against" | "no" => BetSide::Against,
                other => {
                    return Err(ConfigError::Parse(format!(
                        "BET_SIDE: expected 'favor' or 'against', got '{other}'"
                    )))
                }
            }),
            Err(_) => None,
        };

        Ok(Self {
            start_price,
            goal_price,
            daily_volatility_percent,
            time_increment_minutes,
            total_minutes,
            simulation_count,
            intraday_volatility_percent,
            offered_odds,
            bet_side,
            master_seed,
        })
    }
}

fn env_var(key: &str) -> ConfigResult<String> {
    std::env::var(key).map_err(|_| ConfigError::Parse(format!("missing env var: {key}")))
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bet_side_serde_roundtrip() {
        let json = serde_json::to_string(&BetSide::InFavor).unwrap();
        assert_eq!(json, "\"in_favor\"");
        let side: BetSide = serde_json::from_str(&json).unwrap();
        assert_eq!(side, BetSide::InFavor);
    }

    #[test]
    fn test_config_deserializes_with_optional_fields_absent() {
        let json = r#"{
            "start_price": 92324.0,
            "goal_price": 92750.0,
            "daily_volatility_percent": 2.26,
            "time_increment_minutes": 5,
            "total_minutes": 120,
            "simulation_count": 10000
        }"#;
        let config: SimulationConfig = serde_json::from_str(json).unwrap();
        assert!(config.intraday_volatility_percent.is_none());
        assert!(config.offered_odds.is_none());
        assert!(config.bet_side.is_none());
        assert_eq!(config.master_seed, 0, "seed should default to 0");
    }

    #[test]
    fn test_config_deserializes_with_profile_and_offer() {
        let json = r#"{
            "start_price": 100.0,
            "goal_price": 101.0,
            "daily_volatility_percent": 2.0,
            "time_increment_minutes": 720,
            "total_minutes": 1440,
            "simulation_count": 500,
            "intraday_volatility_percent": [80.0, 120.0],
            "offered_odds": 1.85,
            "bet_side": "against",
            "master_seed": 42
        }"#;
        let config: SimulationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.intraday_volatility_percent.as_deref(), Some(&[80.0, 120.0][..]));
        assert_eq!(config.offered_odds, Some(1.85));
        assert_eq!(config.bet_side, Some(BetSide::Against));
        assert_eq!(config.master_seed, 42);
    }
}
