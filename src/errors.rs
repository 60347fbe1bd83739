/// Validation errors for the simulation core.
/// Every variant identifies the offending field. All errors are raised at
/// construction/validation time, before the first path is simulated; the
/// engine never fails mid-run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("start_price must be positive, got {0}")]
    NonPositiveStartPrice(f64),

    #[error("goal_price must be finite, got {0}")]
    NonFiniteGoalPrice(f64),

    #[error("daily_volatility_percent must be non-negative, got {0}")]
    NegativeVolatility(f64),

    #[error("time_increment_minutes must be positive")]
    ZeroTimeIncrement,

    #[error("time_increment_minutes must divide 1440, got {0}")]
    IncrementNotDivisorOfDay(u32),

    #[error("total_minutes must be positive")]
    ZeroTotalMinutes,

    #[error("total_minutes ({total_minutes}) must be a multiple of time_increment_minutes ({time_increment_minutes})")]
    HorizonNotMultipleOfIncrement {
        total_minutes: u32,
        time_increment_minutes: u32,
    },

    #[error("simulation_count must be at least 1")]
    ZeroSimulationCount,

    #[error("volatility profile must have {expected} entries at a {time_increment_minutes}-minute increment, got {actual}")]
    ProfileLengthMismatch {
        expected: usize,
        actual: usize,
        time_increment_minutes: u32,
    },

    #[error("volatility profile entry {index} must be non-negative, got {value}")]
    NegativeProfileEntry { index: usize, value: f64 },

    #[error("offered_odds must be positive, got {0}")]
    NonPositiveOfferedOdds(f64),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
