//! Fair odds and offer classification.
//!
//! fair = 1 / p, quoted as "bet 1 to win `fair`". A zero-probability side
//! has no finite fair price; that case is a tagged `Infinite` value
//! rather than an IEEE infinity, so the branch stays explicit and every
//! consumer is forced to handle it.
//!
//! Pure functions of their inputs. No state, no allocations.

/// Fair odds for one side of the event.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FairOdds {
    Finite(f64),
    Infinite,
}

impl FairOdds {
    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }

    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(*v),
            Self::Infinite => None,
        }
    }
}

impl std::fmt::Display for FairOdds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{v:.2}:1"),
            Self::Infinite => write!(f, "inf:1"),
        }
    }
}

/// Verdict on an offered price relative to the fair odds for a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Valuation {
    /// Offered odds pay less than the estimated risk warrants.
    Overvalued,
    /// Offered odds pay at least the fair price. Equality counts here.
    Undervalued,
}

impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overvalued => write!(f, "overvalued"),
            Self::Undervalued => write!(f, "undervalued"),
        }
    }
}

/// Convert an estimated probability into fair odds.
#[inline]
pub fn fair_odds(probability: f64) -> FairOdds {
    if probability == 0.0 {
        FairOdds::Infinite
    } else {
        FairOdds::Finite(1.0 / probability)
    }
}

/// Classify an offer against the fair odds for a side.
///
/// A zero-probability side is always overvalued: no offered price makes a
/// bet on an impossible outcome fair. Otherwise the offer is overvalued
/// when the fair odds exceed it and undervalued when they sit at or below
/// it. The equality tie-break is undervalued.
#[inline]
pub fn classify(fair: FairOdds, offered_odds: f64) -> Valuation {
    match fair {
        FairOdds::Infinite => Valuation::Overvalued,
        FairOdds::Finite(value) if value > offered_odds => Valuation::Overvalued,
        FairOdds::Finite(_) => Valuation::Undervalued,
    }
}
