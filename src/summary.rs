//! Ledger aggregation.
//!
//! Pure functions over recorded bets: settlement counts, overall net
//! profit, and the daily net-profit series the profit chart plots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::ledger::BetRecord;
use crate::types::{round_currency, BetResult};

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Aggregate view of the betting history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total_bets: usize,
    pub unsettled: usize,
    pub back_wins: usize,
    pub lay_wins: usize,
    pub voided: usize,
    /// Net profit across settled bets only.
    pub net_profit: f64,
}

impl fmt::Display for LedgerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bets={} (unsettled={} back={} lay={} void={}) | net £{:+.2}",
            self.total_bets, self.unsettled, self.back_wins, self.lay_wins, self.voided,
            self.net_profit,
        )
    }
}

/// Count settlement states and total up the settled profit.
pub fn summarize(records: &[BetRecord]) -> LedgerSummary {
    let mut summary = LedgerSummary {
        total_bets: records.len(),
        unsettled: 0,
        back_wins: 0,
        lay_wins: 0,
        voided: 0,
        net_profit: 0.0,
    };

    let mut net = 0.0;
    for record in records {
        match record.result {
            BetResult::Unsettled => summary.unsettled += 1,
            BetResult::Back => summary.back_wins += 1,
            BetResult::Lay => summary.lay_wins += 1,
            BetResult::Void => summary.voided += 1,
        }
        if let Some(profit) = record.net_profit_loss {
            net += profit;
        }
    }
    summary.net_profit = round_currency(net);

    summary
}

// ---------------------------------------------------------------------------
// Profit over time
// ---------------------------------------------------------------------------

/// Net settled profit for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProfit {
    pub date: NaiveDate,
    pub net_profit: f64,
}

/// Settled net profit grouped by the bet's calendar date, ascending.
/// Days holding only unsettled bets do not appear; a voided bet still
/// produces its zero entry.
pub fn profit_over_time(records: &[BetRecord]) -> Vec<DailyProfit> {
    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for record in records {
        if let Some(profit) = record.net_profit_loss {
            *days.entry(record.bet_date.date_naive()).or_insert(0.0) += profit;
        }
    }

    days.into_iter()
        .map(|(date, net)| DailyProfit { date, net_profit: round_currency(net) })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
