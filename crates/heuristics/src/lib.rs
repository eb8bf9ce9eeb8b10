//! Best-effort extraction of structure from free-form analysis text.
//!
//! Both heuristics are deliberately coarse and never fail: text without a
//! recognised keyword is `Neutral`, text without a recognised sector phrase
//! yields an empty list.

pub mod sectors;
pub mod sentiment;

pub use sectors::extract_sector_impacts;
pub use sentiment::classify_sentiment;
