//! HTTP route handlers for the calculator API.
//!
//! Requests arrive as flat form-shaped JSON (a bet type tag plus the
//! fields that scenario needs); this layer resolves omitted commissions
//! from configured defaults, rejects absent scenario fields, and hands a
//! fully-formed [`BetParameters`] to the engine. Engine errors map to
//! 400 responses with a machine-readable `error` kind.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::CalculatorConfig;
use crate::engine;
use crate::ledger::{self, BetDetails, BetLedger, BetRecord};
use crate::summary::{self, DailyProfit, LedgerSummary};
use crate::types::{BetParameters, BetResult, BetScenario, CalcError, CalculationResult};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// State shared across all API handlers.
pub struct ApiState {
    pub ledger: RwLock<BetLedger>,
    /// Commission and retention values applied when a request omits them.
    pub defaults: CalculatorConfig,
    /// Snapshot path for the ledger. `None` keeps the ledger in memory only.
    pub ledger_path: Option<String>,
}

pub type AppState = Arc<ApiState>;

impl ApiState {
    pub fn new(ledger: BetLedger, defaults: CalculatorConfig, ledger_path: Option<String>) -> Self {
        Self {
            ledger: RwLock::new(ledger),
            defaults,
            ledger_path,
        }
    }

    /// Write the ledger snapshot after a mutation. Persistence failures are
    /// logged rather than surfaced; the in-memory ledger stays authoritative
    /// and is saved again at shutdown.
    fn persist(&self, ledger: &BetLedger) {
        if let Some(path) = &self.ledger_path {
            if let Err(e) = ledger::save_ledger(ledger, Some(path)) {
                error!(error = %e, path = %path, "Failed to save ledger snapshot");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Promotional scenario selected by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetTypeTag {
    Qualifying,
    FreeBetStakeNotReturned,
    FreeBetStakeReturned,
    MoneyBackIfBetLoses,
}

/// Body of `POST /api/calculate`.
///
/// Only `bet_type`, `back_odds` and `lay_odds` are always required; the
/// remaining fields are required or ignored depending on the scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRequest {
    pub bet_type: BetTypeTag,
    pub back_odds: f64,
    pub lay_odds: f64,
    #[serde(default)]
    pub back_stake: Option<f64>,
    #[serde(default)]
    pub back_commission: Option<f64>,
    #[serde(default)]
    pub lay_commission: Option<f64>,
    #[serde(default)]
    pub free_bet_value: Option<f64>,
    #[serde(default)]
    pub cashback_value: Option<f64>,
    #[serde(default)]
    pub cashback_retention: Option<f64>,
}

/// Body of `POST /api/bets`: a calculation request plus bet details.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordBetRequest {
    #[serde(flatten)]
    pub bet: CalculateRequest,
    #[serde(default)]
    pub bookmaker: String,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub notes: String,
}

/// Body of `POST /api/bets/:id/result`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SettleRequest {
    pub result: BetResult,
}

/// Resolve a request into engine parameters, filling omitted commissions
/// from configured defaults. This is the only layer that can observe an
/// absent field, so missing-field errors are produced here.
fn build_parameters(
    req: &CalculateRequest,
    defaults: &CalculatorConfig,
) -> Result<BetParameters, CalcError> {
    let scenario = match req.bet_type {
        BetTypeTag::Qualifying => BetScenario::Qualifying,
        BetTypeTag::FreeBetStakeNotReturned => BetScenario::FreeBetStakeNotReturned {
            free_bet_value: req
                .free_bet_value
                .ok_or(CalcError::MissingScenarioField { field: "free_bet_value" })?,
        },
        BetTypeTag::FreeBetStakeReturned => BetScenario::FreeBetStakeReturned {
            free_bet_value: req
                .free_bet_value
                .ok_or(CalcError::MissingScenarioField { field: "free_bet_value" })?,
        },
        BetTypeTag::MoneyBackIfBetLoses => BetScenario::MoneyBackIfBetLoses {
            cashback_value: req
                .cashback_value
                .ok_or(CalcError::MissingScenarioField { field: "cashback_value" })?,
            cashback_retention: req
                .cashback_retention
                .unwrap_or(defaults.cashback_retention),
        },
    };

    // Free bet scenarios stake the bookmaker's credit, not cash, so a
    // missing back_stake is fine there.
    let back_stake = match req.bet_type {
        BetTypeTag::Qualifying | BetTypeTag::MoneyBackIfBetLoses => req
            .back_stake
            .ok_or(CalcError::MissingScenarioField { field: "back_stake" })?,
        BetTypeTag::FreeBetStakeNotReturned | BetTypeTag::FreeBetStakeReturned => {
            req.back_stake.unwrap_or(0.0)
        }
    };

    Ok(BetParameters {
        back_stake,
        back_odds: req.back_odds,
        back_commission: req.back_commission.unwrap_or(defaults.back_commission),
        lay_odds: req.lay_odds,
        lay_commission: req.lay_commission.unwrap_or(defaults.lay_commission),
        scenario,
    })
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

/// Failures a handler can surface to the client.
#[derive(Debug)]
pub enum ApiError {
    Calc(CalcError),
    BetNotFound(Uuid),
}

impl From<CalcError> for ApiError {
    fn from(e: CalcError) -> Self {
        ApiError::Calc(e)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Calc(e) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: e.kind().to_string(),
                    message: e.to_string(),
                },
            ),
            ApiError::BetNotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "not_found".to_string(),
                    message: format!("No bet with id {id}"),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/calculate
pub async fn calculate(
    State(state): State<AppState>,
    Json(req): Json<CalculateRequest>,
) -> Result<Json<CalculationResult>, ApiError> {
    let params = build_parameters(&req, &state.defaults)?;
    let result = engine::compute(&params)?;
    debug!(
        lay_stake = result.required_lay_stake,
        liability = result.lay_liability,
        "Calculated lay for {params}"
    );
    Ok(Json(result))
}

/// POST /api/bets
pub async fn record_bet(
    State(state): State<AppState>,
    Json(req): Json<RecordBetRequest>,
) -> Result<(StatusCode, Json<BetRecord>), ApiError> {
    let params = build_parameters(&req.bet, &state.defaults)?;
    let calc = engine::compute(&params)?;
    let record = BetRecord::from_calculation(
        &params,
        &calc,
        BetDetails {
            bookmaker: req.bookmaker,
            exchange: req.exchange,
            event: req.event,
            notes: req.notes,
        },
    );
    info!(
        id = %record.id,
        bet_type = %record.bet_type,
        stake = record.back_stake,
        lay_stake = record.lay_stake,
        "Recorded bet"
    );

    let mut ledger = state.ledger.write().await;
    ledger.insert(record.clone());
    state.persist(&ledger);
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/bets
pub async fn list_bets(State(state): State<AppState>) -> Json<Vec<BetRecord>> {
    let ledger = state.ledger.read().await;
    Json(ledger.by_date_desc())
}

/// POST /api/bets/:id/result
pub async fn settle_bet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SettleRequest>,
) -> Result<Json<BetRecord>, ApiError> {
    let mut ledger = state.ledger.write().await;
    let record = ledger
        .settle(id, req.result)
        .cloned()
        .ok_or(ApiError::BetNotFound(id))?;
    info!(id = %id, result = %req.result, "Settled bet");
    state.persist(&ledger);
    Ok(Json(record))
}

/// DELETE /api/bets/:id
pub async fn delete_bet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut ledger = state.ledger.write().await;
    if !ledger.delete(id) {
        return Err(ApiError::BetNotFound(id));
    }
    info!(id = %id, "Deleted bet");
    state.persist(&ledger);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/summary
pub async fn get_summary(State(state): State<AppState>) -> Json<LedgerSummary> {
    let ledger = state.ledger.read().await;
    Json(summary::summarize(ledger.records()))
}

/// GET /api/profit-over-time
pub async fn profit_over_time(State(state): State<AppState>) -> Json<Vec<DailyProfit>> {
    let ledger = state.ledger.read().await;
    Json(summary::profit_over_time(ledger.records()))
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}
