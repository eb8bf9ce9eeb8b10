//! Outbound I/O for FundLens: RSS/Atom news feeds and the generative model.
//!
//! Both are hidden behind traits (`NewsSource`, `InsightProvider`) so the
//! analysis pipeline can be driven by stubs in tests.

pub mod error;
pub mod llm;
pub mod news;
pub mod prompt;
pub mod responses;

// --- Public API ---
pub use error::ClientError;
pub use llm::{GeminiClient, InsightProvider};
pub use news::{NewsSource, RssNewsClient, filter_for_fund, parse_feed};
pub use prompt::{GENERAL_MARKET_PROMPT, build_prompt};
