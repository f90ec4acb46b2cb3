//! Bet ledger and persistence.
//!
//! Records calculated bets in the shape the history table stores,
//! applies settlement outcomes once the real-world result is known,
//! and snapshots the collection to a JSON file.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

use crate::types::{round_currency, BetParameters, BetResult, CalculationResult, OutcomeProfit};

/// Default ledger file path.
const DEFAULT_LEDGER_FILE: &str = "arbify_ledger.json";

// ---------------------------------------------------------------------------
// Bet records
// ---------------------------------------------------------------------------

/// Descriptive metadata attached to a recorded bet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BetDetails {
    pub bookmaker: String,
    pub exchange: String,
    pub event: String,
    pub notes: String,
}

/// One row of betting history.
///
/// Carries both projected profit pairs from the calculation; the
/// settled `*_profit_loss` fields stay empty until a result is
/// recorded, at which point the matching pair is copied in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetRecord {
    pub id: Uuid,
    pub bet_date: DateTime<Utc>,
    pub bookmaker: String,
    pub event: String,
    /// Scenario label, e.g. "Free Bet (SNR)".
    pub bet_type: String,
    /// Cash staked, or the free bet's face value.
    pub back_stake: f64,
    pub back_odds: f64,
    pub exchange: String,
    pub lay_odds: f64,
    pub lay_stake: f64,
    pub lay_liability: f64,
    pub back_side_wins: OutcomeProfit,
    pub lay_side_wins: OutcomeProfit,
    pub bookmaker_profit_loss: Option<f64>,
    pub exchange_profit_loss: Option<f64>,
    pub net_profit_loss: Option<f64>,
    pub result: BetResult,
    pub notes: String,
}

impl BetRecord {
    /// Build an unsettled record from an engine output plus the
    /// descriptive metadata the calculation itself does not know.
    pub fn from_calculation(
        params: &BetParameters,
        calc: &CalculationResult,
        details: BetDetails,
    ) -> Self {
        BetRecord {
            id: Uuid::new_v4(),
            bet_date: Utc::now(),
            bookmaker: details.bookmaker,
            event: details.event,
            bet_type: params.scenario.label().to_string(),
            back_stake: round_currency(params.staked_amount()),
            back_odds: params.back_odds,
            exchange: details.exchange,
            lay_odds: params.lay_odds,
            lay_stake: calc.required_lay_stake,
            lay_liability: calc.lay_liability,
            back_side_wins: calc.back_side_wins,
            lay_side_wins: calc.lay_side_wins,
            bookmaker_profit_loss: None,
            exchange_profit_loss: None,
            net_profit_loss: None,
            result: BetResult::Unsettled,
            notes: details.notes,
        }
    }

    /// Record a settlement outcome, selecting which projected pair
    /// becomes the settled figures. A void bet nets zero by definition,
    /// and reverting to unsettled clears the figures again.
    pub fn apply_result(&mut self, result: BetResult) {
        self.result = result;
        let (bookmaker, exchange, net) = match result {
            BetResult::Back => (
                Some(self.back_side_wins.bookmaker_pl),
                Some(self.back_side_wins.exchange_pl),
                Some(self.back_side_wins.total),
            ),
            BetResult::Lay => (
                Some(self.lay_side_wins.bookmaker_pl),
                Some(self.lay_side_wins.exchange_pl),
                Some(self.lay_side_wins.total),
            ),
            BetResult::Void => (Some(0.0), Some(0.0), Some(0.0)),
            BetResult::Unsettled => (None, None, None),
        };
        self.bookmaker_profit_loss = bookmaker;
        self.exchange_profit_loss = exchange;
        self.net_profit_loss = net;
    }
}

impl fmt::Display for BetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let net = match self.net_profit_loss {
            Some(n) => format!(" | net £{n:+.2}"),
            None => String::new(),
        };
        write!(
            f,
            "[{}] {} | {} £{:.2} @ {:.2} | lay £{:.2} @ {:.2} ({}){net}",
            self.bookmaker,
            self.event,
            self.bet_type,
            self.back_stake,
            self.back_odds,
            self.lay_stake,
            self.lay_odds,
            self.result,
        )
    }
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// The full betting history, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BetLedger {
    bets: Vec<BetRecord>,
}

impl BetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: BetRecord) {
        self.bets.push(record);
    }

    pub fn get(&self, id: Uuid) -> Option<&BetRecord> {
        self.bets.iter().find(|b| b.id == id)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[BetRecord] {
        &self.bets
    }

    /// All records newest first, the ordering the history view shows.
    pub fn by_date_desc(&self) -> Vec<BetRecord> {
        let mut sorted = self.bets.clone();
        sorted.sort_by(|a, b| b.bet_date.cmp(&a.bet_date));
        sorted
    }

    /// Apply a settlement outcome to one record. Returns the updated
    /// record, or None when the id is unknown.
    pub fn settle(&mut self, id: Uuid, result: BetResult) -> Option<&BetRecord> {
        let record = self.bets.iter_mut().find(|b| b.id == id)?;
        record.apply_result(result);
        debug!(%id, result = %record.result, net = ?record.net_profit_loss, "Bet settled");
        Some(record)
    }

    /// Remove a record. Returns false when the id is unknown.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.bets.len();
        self.bets.retain(|b| b.id != id);
        self.bets.len() < before
    }

    pub fn len(&self) -> usize {
        self.bets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    /// Net profit across settled records, rounded to currency
    /// precision. Unsettled bets contribute nothing.
    pub fn net_profit(&self) -> f64 {
        round_currency(self.bets.iter().filter_map(|b| b.net_profit_loss).sum())
    }
}

// ---------------------------------------------------------------------------
// File persistence
// ---------------------------------------------------------------------------

/// Save the ledger to a JSON file.
pub fn save_ledger(ledger: &BetLedger, path: Option<&str>) -> Result<()> {
    let path = path.unwrap_or(DEFAULT_LEDGER_FILE);
    let json = serde_json::to_string_pretty(ledger).context("Failed to serialise ledger")?;

    std::fs::write(path, &json).context(format!("Failed to write ledger to {path}"))?;

    debug!(path, bets = ledger.len(), "Ledger saved");
    Ok(())
}

/// Load the ledger from a JSON file.
/// Returns None if the file doesn't exist (fresh start).
pub fn load_ledger(path: Option<&str>) -> Result<Option<BetLedger>> {
    let path = path.unwrap_or(DEFAULT_LEDGER_FILE);

    if !Path::new(path).exists() {
        info!(path, "No saved ledger found, starting fresh");
        return Ok(None);
    }

    let json =
        std::fs::read_to_string(path).context(format!("Failed to read ledger from {path}"))?;

    let ledger: BetLedger =
        serde_json::from_str(&json).context(format!("Failed to parse ledger from {path}"))?;

    info!(
        path,
        bets = ledger.len(),
        net_profit = %format!("£{:.2}", ledger.net_profit()),
        "Ledger loaded from disk"
    );

    Ok(Some(ledger))
}

/// Delete the ledger file (for testing or reset).
pub fn delete_ledger(path: Option<&str>) -> Result<()> {
    let path = path.unwrap_or(DEFAULT_LEDGER_FILE);
    if Path::new(path).exists() {
        std::fs::remove_file(path).context(format!("Failed to delete ledger file {path}"))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
