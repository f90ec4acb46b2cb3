//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Every field carries a default so a sparse (or absent) section still
//! parses; the shipped file documents the knobs.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub calculator: CalculatorConfig,
    pub ledger: LedgerConfig,
}

/// API server settings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServiceConfig {
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Form defaults applied when a calculation request omits a field.
/// The engine itself takes whatever the request resolves to.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Bookmaker commission rate. Almost always zero.
    pub back_commission: f64,
    /// Exchange commission rate. 2% matches the major exchanges.
    pub lay_commission: f64,
    /// Realizable fraction of money-back cashback credit.
    pub cashback_retention: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            back_commission: 0.0,
            lay_commission: 0.02,
            cashback_retention: 0.7,
        }
    }
}

/// Ledger persistence settings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LedgerConfig {
    /// Path of the JSON snapshot file.
    pub path: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self { path: "arbify_ledger.json".to_string() }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }
}
