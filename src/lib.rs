//! fairodds: Monte Carlo fair-odds engine.
//!
//! Estimates the probability that an asset's price strictly exceeds a
//! goal price at a future instant under driftless geometric Brownian
//! motion with optional intraday volatility weighting, then converts the
//! estimate into fair betting odds and classifies an externally offered
//! price.
//!
//! The core is a pure computation: collaborators feed it an already
//! collected [`SimulationConfig`], it validates everything up front, and
//! either returns a complete [`OddsReport`] or fails before the first
//! simulated path. It fetches nothing, persists nothing, and makes no
//! betting decision beyond the single probability-to-odds comparison.

pub mod config;
pub mod errors;
pub mod odds;
pub mod report;
pub mod sim;

pub use config::{BetSide, SimulationConfig};
pub use errors::{ConfigError, ConfigResult};
pub use odds::{classify, fair_odds, FairOdds, Valuation};
pub use report::{evaluate, OddsReport};
pub use sim::engine::{MonteCarloEngine, SimulationResult};
pub use sim::profile::VolatilityProfile;
pub use sim::SimulationParameters;
