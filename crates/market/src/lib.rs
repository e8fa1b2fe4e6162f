//! Labour-market intelligence for the saarthi pathway engine.
//!
//! This crate provides:
//! - Raw [`MarketSignals`] and processed [`MarketInsight`] value types with
//!   the demand/supply/gap scoring rules.
//! - The [`MarketDataProvider`] and [`RegionalDataProvider`] seams, with a
//!   table-driven [`StaticProvider`] baseline and a reqwest-backed
//!   [`HttpProvider`].
//! - [`MarketIntelligence`], a TTL-cached concurrent fetch orchestrator that
//!   degrades to a fixed fallback insight per skill.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Cached insight orchestration.
pub mod intelligence;
/// Provider seams and implementations.
pub mod provider;
/// Market value types and signal processing.
pub mod types;

pub use intelligence::{
    MarketIntelligence, DEFAULT_CACHE_TTL_HOURS, DEFAULT_FETCH_TIMEOUT_MS,
};
pub use provider::{HttpProvider, MarketDataProvider, RegionalDataProvider, StaticProvider};
pub use types::{process_signals, MarketError, MarketInsight, MarketSignals, ShortageLevel};
