use crate::errors::{ConfigError, ConfigResult};
use crate::sim::MINUTES_PER_DAY;

/// Intraday volatility profile: ordered per-period multipliers applied on
/// top of the base daily volatility, indexed cyclically so a horizon
/// longer than one day wraps around to the same time-of-day weights.
///
/// Length is either 1 (constant volatility) or exactly the number of
/// periods in a day at the configured increment. Any other length is a
/// configuration error, never a silent truncation.
#[derive(Debug, Clone, PartialEq)]
pub struct VolatilityProfile {
    multipliers: Vec<f64>,
}

impl VolatilityProfile {
    /// Constant profile: every period weighted 1.0.
    pub fn constant() -> Self {
        Self { multipliers: vec![1.0] }
    }

    /// Build a profile from per-period percentages (100.0 = 1.0x the daily
    /// volatility). Requires one entry per intraday period implied by
    /// `time_increment_minutes`.
    pub fn from_percentages(
        percentages: &[f64],
        time_increment_minutes: u32,
    ) -> ConfigResult<Self> {
        if time_increment_minutes == 0 {
            return Err(ConfigError::ZeroTimeIncrement);
        }
        if MINUTES_PER_DAY % time_increment_minutes != 0 {
            return Err(ConfigError::IncrementNotDivisorOfDay(time_increment_minutes));
        }

        let expected = (MINUTES_PER_DAY / time_increment_minutes) as usize;
        if percentages.len() != expected {
            return Err(ConfigError::ProfileLengthMismatch {
                expected,
                actual: percentages.len(),
                time_increment_minutes,
            });
        }

        for (index, &value) in percentages.iter().enumerate() {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ConfigError::NegativeProfileEntry { index, value });
            }
        }

        Ok(Self {
            multipliers: percentages.iter().map(|p| p / 100.0).collect(),
        })
    }

    /// Multiplier for simulation step `step`, wrapping across days.
    #[inline]
    pub fn at(&self, step: usize) -> f64 {
        self.multipliers[step % self.multipliers.len()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    /// A profile always holds at least one multiplier.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.multipliers.len() == 1
    }
}

impl Default for VolatilityProfile {
    fn default() -> Self {
        Self::constant()
    }
}
