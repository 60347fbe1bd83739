pub mod analytic;
pub mod engine;
pub mod path;
pub mod profile;

use crate::errors::{ConfigError, ConfigResult};

/// Minutes in one trading day; the unit daily volatility is quoted over.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Validated simulation parameters with precomputed step quantities.
///
/// Construction performs every validation the run needs; once built the
/// parameters are immutable and no later stage can fail on them. Stack
/// allocated, Copy.
#[derive(Debug, Clone, Copy)]
pub struct SimulationParameters {
    pub start_price: f64,
    pub goal_price: f64,
    /// Daily volatility as a fraction (0.0226 = 2.26% per day)
    pub daily_volatility: f64,
    pub time_increment_minutes: u32,
    pub total_minutes: u32,
    pub simulation_count: u64,
    // Precomputed
    pub increments: u32,
    pub periods_per_day: u32,
    /// Fraction of a day covered by one step
    pub time_fraction: f64,
    pub sqrt_time_fraction: f64,
}

impl SimulationParameters {
    /// Validate raw inputs and precompute the per-step quantities.
    /// `daily_volatility_percent` is a percentage (2.26 = 2.26%).
    pub fn new(
        start_price: f64,
        goal_price: f64,
        daily_volatility_percent: f64,
        time_increment_minutes: u32,
        total_minutes: u32,
        simulation_count: u64,
    ) -> ConfigResult<Self> {
        if !(start_price > 0.0) || !start_price.is_finite() {
            return Err(ConfigError::NonPositiveStartPrice(start_price));
        }
        if !goal_price.is_finite() {
            return Err(ConfigError::NonFiniteGoalPrice(goal_price));
        }
        if !(daily_volatility_percent >= 0.0) || !daily_volatility_percent.is_finite() {
            return Err(ConfigError::NegativeVolatility(daily_volatility_percent));
        }
        if time_increment_minutes == 0 {
            return Err(ConfigError::ZeroTimeIncrement);
        }
        if MINUTES_PER_DAY % time_increment_minutes != 0 {
            return Err(ConfigError::IncrementNotDivisorOfDay(time_increment_minutes));
        }
        if total_minutes == 0 {
            return Err(ConfigError::ZeroTotalMinutes);
        }
        if total_minutes % time_increment_minutes != 0 {
            return Err(ConfigError::HorizonNotMultipleOfIncrement {
                total_minutes,
                time_increment_minutes,
            });
        }
        if simulation_count == 0 {
            return Err(ConfigError::ZeroSimulationCount);
        }

        let time_fraction = f64::from(time_increment_minutes) / f64::from(MINUTES_PER_DAY);
        Ok(Self {
            start_price,
            goal_price,
            daily_volatility: daily_volatility_percent / 100.0,
            time_increment_minutes,
            total_minutes,
            simulation_count,
            increments: total_minutes / time_increment_minutes,
            periods_per_day: MINUTES_PER_DAY / time_increment_minutes,
            time_fraction,
            sqrt_time_fraction: time_fraction.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base_params() -> ConfigResult<SimulationParameters> {
        SimulationParameters::new(92_324.0, 92_750.0, 2.26, 5, 120, 10_000)
    }

    #[test]
    fn test_valid_params_precompute() {
        let params = base_params().unwrap();
        assert_eq!(params.increments, 24);
        assert_eq!(params.periods_per_day, 288);
        assert_relative_eq!(params.daily_volatility, 0.0226);
        assert_relative_eq!(params.time_fraction, 5.0 / 1440.0);
        assert_relative_eq!(params.sqrt_time_fraction, (5.0_f64 / 1440.0).sqrt());
    }

    #[test]
    fn test_zero_volatility_is_valid() {
        let params = SimulationParameters::new(100.0, 101.0, 0.0, 5, 120, 1000);
        assert!(params.is_ok(), "zero volatility is a legal degenerate case");
    }

    #[test]
    fn test_rejects_non_positive_start_price() {
        let err = SimulationParameters::new(0.0, 100.0, 2.0, 5, 120, 1000).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveStartPrice(_)));

        let err = SimulationParameters::new(f64::NAN, 100.0, 2.0, 5, 120, 1000).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveStartPrice(_)), "NaN must be rejected");
    }

    #[test]
    fn test_rejects_negative_volatility() {
        let err = SimulationParameters::new(100.0, 100.0, -0.1, 5, 120, 1000).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeVolatility(_)));
    }

    #[test]
    fn test_rejects_increment_not_dividing_day() {
        let err = SimulationParameters::new(100.0, 100.0, 2.0, 7, 140, 1000).unwrap_err();
        assert!(matches!(err, ConfigError::IncrementNotDivisorOfDay(7)));
    }

    #[test]
    fn test_rejects_horizon_not_multiple_of_increment() {
        let err = SimulationParameters::new(100.0, 100.0, 2.0, 5, 121, 1000).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::HorizonNotMultipleOfIncrement {
                total_minutes: 121,
                time_increment_minutes: 5
            }
        ));
    }

    #[test]
    fn test_rejects_zero_simulation_count() {
        let err = SimulationParameters::new(100.0, 100.0, 2.0, 5, 120, 0).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroSimulationCount));
    }

    #[test]
    fn test_rejects_zero_increment_and_zero_horizon() {
        let err = SimulationParameters::new(100.0, 100.0, 2.0, 0, 120, 1000).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeIncrement));

        let err = SimulationParameters::new(100.0, 100.0, 2.0, 5, 0, 1000).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTotalMinutes));
    }
}
