//! Shared types for the ARBIFY calculation engine.
//!
//! These types form the data model used across all modules.
//! The engine, ledger, and API layers all depend on them without
//! circular references.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

/// Promotional scenario for a matched bet.
///
/// The four scenarios are mutually exclusive, and scenario-specific
/// amounts live on their variant so that a free bet without a face
/// value (or a cashback offer without a cashback amount) cannot be
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BetScenario {
    /// A plain cash bet placed to unlock a promotion.
    Qualifying,
    /// Free bet, stake not returned: only winnings pay out.
    FreeBetStakeNotReturned { free_bet_value: f64 },
    /// Free bet, stake returned: stake and winnings pay out.
    FreeBetStakeReturned { free_bet_value: f64 },
    /// Cash bet refunded (as cash or credit) if the back side loses.
    MoneyBackIfBetLoses {
        cashback_value: f64,
        /// Realizable fraction of the refund (1.0 for cash refunds,
        /// lower for free-bet credit that must itself be converted).
        cashback_retention: f64,
    },
}

impl BetScenario {
    /// Human-readable label, used as the `bet_type` field on records.
    pub fn label(&self) -> &'static str {
        match self {
            BetScenario::Qualifying => "Qualifying Bet",
            BetScenario::FreeBetStakeNotReturned { .. } => "Free Bet (SNR)",
            BetScenario::FreeBetStakeReturned { .. } => "Free Bet (SR)",
            BetScenario::MoneyBackIfBetLoses { .. } => "Money Back if Bet Loses",
        }
    }

    /// Whether the bookmaker side is staked with promotional credit
    /// rather than the bettor's own cash.
    pub fn is_free_bet(&self) -> bool {
        matches!(
            self,
            BetScenario::FreeBetStakeNotReturned { .. } | BetScenario::FreeBetStakeReturned { .. }
        )
    }
}

impl fmt::Display for BetScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Bet parameters
// ---------------------------------------------------------------------------

/// Immutable input to a single bet calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetParameters {
    /// Cash staked at the bookmaker. Ignored for free-bet scenarios,
    /// where the variant's `free_bet_value` is staked instead.
    pub back_stake: f64,
    /// Decimal odds taken at the bookmaker (> 1.0).
    pub back_odds: f64,
    /// Bookmaker commission rate (0.0–1.0). Accepted and validated,
    /// currently unused by the profit formulas.
    pub back_commission: f64,
    /// Decimal odds offered at the exchange.
    pub lay_odds: f64,
    /// Exchange commission rate on net winnings (0.0–1.0).
    pub lay_commission: f64,
    pub scenario: BetScenario,
}

impl BetParameters {
    /// The amount actually staked on the bookmaker side: the cash
    /// stake, or the free bet's face value.
    pub fn staked_amount(&self) -> f64 {
        match self.scenario {
            BetScenario::FreeBetStakeNotReturned { free_bet_value }
            | BetScenario::FreeBetStakeReturned { free_bet_value } => free_bet_value,
            _ => self.back_stake,
        }
    }

    /// Helper to build test parameters with sensible defaults
    /// (a plain qualifying bet).
    #[cfg(test)]
    pub fn sample() -> Self {
        BetParameters {
            back_stake: 25.0,
            back_odds: 2.0,
            back_commission: 0.0,
            lay_odds: 2.1,
            lay_commission: 0.02,
            scenario: BetScenario::Qualifying,
        }
    }
}

impl fmt::Display for BetParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] back £{:.2} @ {:.2} | lay @ {:.2} (comm {:.1}%)",
            self.scenario.label(),
            self.staked_amount(),
            self.back_odds,
            self.lay_odds,
            self.lay_commission * 100.0,
        )
    }
}

// ---------------------------------------------------------------------------
// Calculation results
// ---------------------------------------------------------------------------

/// Profit breakdown for one settlement outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeProfit {
    /// Profit or loss at the bookmaker if this outcome lands.
    pub bookmaker_pl: f64,
    /// Profit or loss at the exchange if this outcome lands.
    pub exchange_pl: f64,
    /// Net position: `bookmaker_pl + exchange_pl`.
    pub total: f64,
}

impl OutcomeProfit {
    /// Build from raw (unrounded) legs. The total is summed at full
    /// precision before rounding, so offsetting legs cancel exactly
    /// instead of compounding two rounding errors.
    pub fn from_raw(bookmaker_pl: f64, exchange_pl: f64) -> Self {
        OutcomeProfit {
            bookmaker_pl: round_currency(bookmaker_pl),
            exchange_pl: round_currency(exchange_pl),
            total: round_currency(bookmaker_pl + exchange_pl),
        }
    }
}

impl fmt::Display for OutcomeProfit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bookie £{:+.2} | exchange £{:+.2} | net £{:+.2}",
            self.bookmaker_pl, self.exchange_pl, self.total,
        )
    }
}

/// Full output of one bet calculation. Derived by the engine only,
/// never hand-constructed; every currency field is rounded to two
/// decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Stake to place at the exchange to offset the back bet.
    pub required_lay_stake: f64,
    /// Exchange funds at risk: `lay_stake × (lay_odds − 1)`.
    pub lay_liability: f64,
    /// Profit breakdown if the bookmaker bet wins.
    pub back_side_wins: OutcomeProfit,
    /// Profit breakdown if the exchange bet wins.
    pub lay_side_wins: OutcomeProfit,
}

impl CalculationResult {
    /// The worse of the two net outcomes (the guaranteed floor).
    pub fn worst_case(&self) -> f64 {
        self.back_side_wins.total.min(self.lay_side_wins.total)
    }

    /// The better of the two net outcomes.
    pub fn best_case(&self) -> f64 {
        self.back_side_wins.total.max(self.lay_side_wins.total)
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lay £{:.2} (liability £{:.2}) | back wins: £{:+.2} | lay wins: £{:+.2}",
            self.required_lay_stake,
            self.lay_liability,
            self.back_side_wins.total,
            self.lay_side_wins.total,
        )
    }
}

// ---------------------------------------------------------------------------
// Settlement
// ---------------------------------------------------------------------------

/// Real-world outcome recorded against a stored bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetResult {
    /// No outcome yet; profit fields stay empty.
    Unsettled,
    /// The bookmaker bet won.
    Back,
    /// The exchange (lay) bet won.
    Lay,
    /// Event voided; both bets refunded, net profit zero.
    Void,
}

impl BetResult {
    /// All settlement states (useful for iteration).
    pub const ALL: &'static [BetResult] = &[
        BetResult::Unsettled,
        BetResult::Back,
        BetResult::Lay,
        BetResult::Void,
    ];

    /// Whether an outcome has been recorded.
    pub fn is_settled(&self) -> bool {
        !matches!(self, BetResult::Unsettled)
    }
}

impl fmt::Display for BetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetResult::Unsettled => write!(f, "unsettled"),
            BetResult::Back => write!(f, "back"),
            BetResult::Lay => write!(f, "lay"),
            BetResult::Void => write!(f, "void"),
        }
    }
}

// ---------------------------------------------------------------------------
// Currency rounding
// ---------------------------------------------------------------------------

/// Round a currency amount to two decimal places.
///
/// Every figure that leaves the engine or the ledger passes through
/// here; intermediate arithmetic stays at full precision.
pub fn round_currency(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // -0.0 folds to 0.0 so records never show "£-0.00".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Validation failures raised by the calculation engine.
///
/// Every variant carries the offending field so callers can highlight
/// the exact input; the engine itself never logs or formats text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("invalid odds: {field} = {value}")]
    InvalidOdds { field: &'static str, value: f64 },

    #[error("invalid commission: {field} = {value} (expected a rate in [0, 1))")]
    InvalidCommission { field: &'static str, value: f64 },

    #[error("degenerate market: effective lay odds {effective} cannot offset the back bet")]
    DegenerateMarket { effective: f64 },

    #[error("missing or invalid scenario field: {field}")]
    MissingScenarioField { field: &'static str },
}

impl CalcError {
    /// Stable machine-readable kind, used as the `error` field in API
    /// error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::InvalidOdds { .. } => "invalid_odds",
            CalcError::InvalidCommission { .. } => "invalid_commission",
            CalcError::DegenerateMarket { .. } => "degenerate_market",
            CalcError::MissingScenarioField { .. } => "missing_scenario_field",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
