//! Shared vocabulary for the FundLens workspace: horizons, NAV series,
//! sentiment labels, sector impacts, badges, news articles and the fund
//! catalogue. Every other crate depends on this one and on nothing else
//! from the workspace at this layer.

pub mod catalog;
pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use catalog::{FUND_CATALOG, FundEntry, find_fund, funds_in};
pub use enums::{Period, Region, SentimentLabel};
pub use error::CoreError;
pub use structs::{Article, Badge, BadgeSet, MIN_NAV_POINTS, NavSeries, SectorImpact};
