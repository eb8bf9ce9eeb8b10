use serde::{Deserialize, Serialize};

/// Descriptive risk statistics for a single NAV series.
///
/// This struct is the output of the `AnalyticsEngine`. All values are finite.
/// `max_drawdown` is kept as a fraction in `[0, 1]`; use
/// [`VolatilityMetrics::max_drawdown_pct`] when displaying it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityMetrics {
    /// Population standard deviation of the daily NAV differences.
    pub std_dev: f64,
    /// Arithmetic mean of the daily NAV differences.
    pub mean_return: f64,
    /// `(mean_return - risk_free_rate) / std_dev`, or 0 when `std_dev` is 0.
    pub sharpe_ratio: f64,
    /// Largest decline from a running peak, as a fraction of that peak.
    pub max_drawdown: f64,
}

impl VolatilityMetrics {
    pub fn max_drawdown_pct(&self) -> f64 {
        self.max_drawdown * 100.0
    }
}
