use crate::sim::profile::VolatilityProfile;
use crate::sim::SimulationParameters;
use rand::Rng;
use rand_distr::StandardNormal;

/// Driftless GBM step rule.
///
/// log_return_i = -0.5 * sigma_i^2 * dt + sigma_i * sqrt(dt) * Z_i
///
/// where sigma_i = daily_volatility * profile.at(i), dt is the step's
/// fraction of a day, and Z_i ~ N(0,1). The -0.5*sigma^2*dt term is the
/// Ito correction that keeps the discretized multiplicative process an
/// unbiased lognormal approximation of continuous-time GBM; dropping it
/// biases the terminal distribution upward.
///
/// Pure given the injected random source; never fails on validated
/// parameters.

/// One step's log-return. Zero local volatility short-circuits to exactly
/// 0.0 without touching the random source, so degenerate periods consume
/// no randomness.
#[inline]
fn step_log_return<R: Rng + ?Sized>(
    params: &SimulationParameters,
    profile: &VolatilityProfile,
    step: usize,
    rng: &mut R,
) -> f64 {
    let local_volatility = params.daily_volatility * profile.at(step);
    if local_volatility == 0.0 {
        return 0.0;
    }

    let z: f64 = rng.sample(StandardNormal);
    let shock = z * params.sqrt_time_fraction;
    -0.5 * local_volatility * local_volatility * params.time_fraction + local_volatility * shock
}

/// Simulate one path, retaining only the terminal price. This is the hot
/// path: O(1) memory, one normal draw per non-degenerate step.
pub fn terminal_price<R: Rng + ?Sized>(
    params: &SimulationParameters,
    profile: &VolatilityProfile,
    rng: &mut R,
) -> f64 {
    let mut price = params.start_price;
    for step in 0..params.increments as usize {
        price *= step_log_return(params, profile, step, rng).exp();
    }
    price
}

/// Simulate one full path for diagnostics: `increments + 1` prices, the
/// first being the start price. Draws the same random stream as
/// `terminal_price`, so both agree for a fixed generator state.
pub fn price_path<R: Rng + ?Sized>(
    params: &SimulationParameters,
    profile: &VolatilityProfile,
    rng: &mut R,
) -> Vec<f64> {
    let mut prices = Vec::with_capacity(params.increments as usize + 1);
    prices.push(params.start_price);

    let mut price = params.start_price;
    for step in 0..params.increments as usize {
        price *= step_log_return(params, profile, step, rng).exp();
        prices.push(price);
    }
    prices
}
