//! Rendering for FundLens results: SVG charts, terminal tables, and the
//! self-contained HTML report. Nothing here computes statistics; it only
//! formats a [`FundSnapshot`] or the pieces of one.

pub mod charts;
pub mod error;
pub mod markup;
pub mod report;
pub mod snapshot;
pub mod terminal;
pub mod theme;

pub use error::PresentationError;
pub use markup::escape_html;
pub use report::{
    comparison_file_name, render_comparison, render_report, report_file_name, write_comparison,
    write_report, write_snapshot_json,
};
pub use snapshot::FundSnapshot;
pub use theme::Theme;
