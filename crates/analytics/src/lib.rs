//! # FundLens Analytics
//!
//! This crate turns a synthetic NAV series into the numbers the dashboard
//! shows: the series itself, its return statistics, and the badges derived
//! from them.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no I/O and no knowledge of feeds, models or rendering.
//!   It depends only on `core-types`.
//! - **Stateless calculation:** `AnalyticsEngine` and `evaluate_badges` take
//!   plain slices and return plain values, so the same input always yields
//!   the same output.
//! - **Injectable randomness:** `SeriesGenerator` owns its RNG, which tests
//!   replace with a seeded one.
//!
//! ## Public API
//!
//! - `SeriesGenerator`: synthetic NAV generation.
//! - `AnalyticsEngine` / `VolatilityMetrics`: std dev, mean, Sharpe, drawdown.
//! - `evaluate_badges`: top gainer, high risk and trending labels.
//! - `AnalyticsError`: the errors this crate can return.

pub mod badges;
pub mod engine;
pub mod error;
pub mod generator;
pub mod metrics;

pub use badges::{evaluate_badges, gain_pct};
pub use engine::{AnalyticsEngine, RISK_FREE_RATE, max_drawdown, population_std_dev, returns};
pub use error::AnalyticsError;
pub use generator::{BASE_NAV, SeriesGenerator};
pub use metrics::VolatilityMetrics;
