//! ARBIFY — Matched Betting Calculation Engine
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod api;
pub mod config;
pub mod engine;
pub mod ledger;
pub mod summary;
pub mod types;
