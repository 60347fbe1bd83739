use crate::config::{BetSide, SimulationConfig};
use crate::errors::{ConfigError, ConfigResult};
use crate::odds::{classify, fair_odds, FairOdds, Valuation};
use crate::sim::engine::MonteCarloEngine;
use crate::sim::profile::VolatilityProfile;
use crate::sim::SimulationParameters;

/// Complete outcome of one evaluation: estimated probabilities, fair odds
/// for both sides, and, when an offer and a side were supplied, the
/// verdict for that side.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OddsReport {
    pub start_price: f64,
    pub goal_price: f64,
    pub hit_count: u64,
    pub simulation_count: u64,
    pub probability_in_favor: f64,
    pub probability_against: f64,
    pub fair_odds_in_favor: FairOdds,
    pub fair_odds_against: FairOdds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_in_favor: Option<Valuation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_against: Option<Valuation>,
}

/// Evaluate one configuration: validate, simulate, convert to odds,
/// classify the offer if one was supplied.
///
/// Validation happens in full before the first path; a malformed field
/// fails here and nothing is simulated. The hot loop itself never fails
/// and never logs.
pub fn evaluate(config: &SimulationConfig) -> ConfigResult<OddsReport> {
    let params = SimulationParameters::new(
        config.start_price,
        config.goal_price,
        config.daily_volatility_percent,
        config.time_increment_minutes,
        config.total_minutes,
        config.simulation_count,
    )?;

    let profile = match &config.intraday_volatility_percent {
        Some(percentages) => {
            VolatilityProfile::from_percentages(percentages, config.time_increment_minutes)?
        }
        None => VolatilityProfile::constant(),
    };

    if let Some(offered) = config.offered_odds {
        if !(offered > 0.0) || !offered.is_finite() {
            return Err(ConfigError::NonPositiveOfferedOdds(offered));
        }
    }

    let result = MonteCarloEngine::new(config.master_seed).run(&params, &profile);

    tracing::info!(
        hit_count = result.hit_count,
        simulation_count = result.simulation_count,
        probability_in_favor = result.probability_in_favor,
        "simulation complete"
    );

    let fair_in_favor = fair_odds(result.probability_in_favor);
    let fair_against = fair_odds(result.probability_against);

    let (classification_in_favor, classification_against) =
        match (config.offered_odds, config.bet_side) {
            (Some(offered), Some(BetSide::InFavor)) => {
                (Some(classify(fair_in_favor, offered)), None)
            }
            (Some(offered), Some(BetSide::Against)) => {
                (None, Some(classify(fair_against, offered)))
            }
            _ => (None, None),
        };

    Ok(OddsReport {
        start_price: params.start_price,
        goal_price: params.goal_price,
        hit_count: result.hit_count,
        simulation_count: result.simulation_count,
        probability_in_favor: result.probability_in_favor,
        probability_against: result.probability_against,
        fair_odds_in_favor: fair_in_favor,
        fair_odds_against: fair_against,
        classification_in_favor,
        classification_against,
    })
}
