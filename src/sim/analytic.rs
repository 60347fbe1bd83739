use crate::sim::profile::VolatilityProfile;
use crate::sim::SimulationParameters;
use statrs::distribution::{ContinuousCDF, Normal};

/// Closed-form P(S_T > goal) under the same driftless lognormal dynamics
/// the simulator discretizes.
///
/// Per-step log-returns are independent normals, so the terminal
/// log-return is N(-V/2, V) with
///
/// V = sum_i (daily_vol * profile.at(i))^2 * dt
///
/// and P(S_T > K) = Phi((ln(S0/K) - V/2) / sqrt(V)).
///
/// The Monte Carlo estimate converges to this value as the path count
/// grows. It exists as an exact cross-check, not a replacement for the
/// engine: the engine is the component that generalizes to path-dependent
/// questions, this function does not.
pub fn probability_above_goal(
    params: &SimulationParameters,
    profile: &VolatilityProfile,
) -> f64 {
    // Lognormal prices are strictly positive, so any non-positive goal is
    // exceeded with certainty.
    if params.goal_price <= 0.0 {
        return 1.0;
    }

    let mut variance = 0.0;
    for step in 0..params.increments as usize {
        let local_volatility = params.daily_volatility * profile.at(step);
        variance += local_volatility * local_volatility * params.time_fraction;
    }

    if variance == 0.0 {
        return if params.start_price > params.goal_price { 1.0 } else { 0.0 };
    }

    // Normal::new(0, 1) only fails if std_dev <= 0; this is safe.
    let normal = Normal::new(0.0, 1.0).unwrap_or(Normal::standard());
    let d = ((params.start_price / params.goal_price).ln() - 0.5 * variance) / variance.sqrt();
    normal.cdf(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_volatility_degenerates_to_indicator() {
        let profile = VolatilityProfile::constant();

        let above = SimulationParameters::new(102.0, 100.0, 0.0, 5, 120, 1).unwrap();
        assert_eq!(probability_above_goal(&above, &profile), 1.0);

        let at = SimulationParameters::new(100.0, 100.0, 0.0, 5, 120, 1).unwrap();
        assert_eq!(probability_above_goal(&at, &profile), 0.0, "equality is not above");

        let below = SimulationParameters::new(99.0, 100.0, 0.0, 5, 120, 1).unwrap();
        assert_eq!(probability_above_goal(&below, &profile), 0.0);
    }

    #[test]
    fn test_at_the_money_sits_below_half() {
        // The -V/2 correction pulls the median below the start price.
        let params = SimulationParameters::new(100.0, 100.0, 2.26, 5, 120, 1).unwrap();
        let p = probability_above_goal(&params, &VolatilityProfile::constant());
        assert!(p < 0.5, "ATM prob={p} should sit just below 0.5");
        assert!(p > 0.45, "ATM prob={p} should stay near 0.5 at short horizon");
    }

    #[test]
    fn test_matches_hand_computed_value() {
        // 24 steps of 5 minutes, sigma=0.0226 daily:
        // V = 24 * (0.0226^2 * 5/1440)
        let params = SimulationParameters::new(92_324.0, 92_750.0, 2.26, 5, 120, 1).unwrap();
        let v: f64 = 24.0 * 0.0226 * 0.0226 * (5.0 / 1440.0);
        let d = ((92_324.0_f64 / 92_750.0).ln() - 0.5 * v) / v.sqrt();
        let normal = Normal::new(0.0, 1.0).unwrap();

        let p = probability_above_goal(&params, &VolatilityProfile::constant());
        assert_relative_eq!(p, normal.cdf(d), max_relative = 1e-12);
    }

    #[test]
    fn test_non_positive_goal_is_certain() {
        let params = SimulationParameters::new(100.0, -5.0, 2.0, 5, 120, 1).unwrap();
        assert_eq!(probability_above_goal(&params, &VolatilityProfile::constant()), 1.0);
    }

    #[test]
    fn test_seasonal_variance_accumulates_per_period() {
        // Two half-day periods at 60% and 140% weighting over one day
        let params = SimulationParameters::new(100.0, 101.0, 3.0, 720, 1440, 1).unwrap();
        let profile = VolatilityProfile::from_percentages(&[60.0, 140.0], 720).unwrap();

        let sigma: f64 = 0.03;
        let dt = 0.5;
        let v = (sigma * 0.6).powi(2) * dt + (sigma * 1.4).powi(2) * dt;
        let d = ((100.0_f64 / 101.0).ln() - 0.5 * v) / v.sqrt();
        let normal = Normal::new(0.0, 1.0).unwrap();

        let p = probability_above_goal(&params, &profile);
        assert_relative_eq!(p, normal.cdf(d), max_relative = 1e-12);
    }
}
