use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AnalyticsError {
    #[error("Not enough data to perform calculation: need at least {required} points, got {actual}")]
    NotEnoughData { required: usize, actual: usize },

    #[error("Invalid NAV series: {0}")]
    InvalidSeries(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
