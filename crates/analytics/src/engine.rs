use crate::error::AnalyticsError;
use crate::metrics::VolatilityMetrics;
use core_types::MIN_NAV_POINTS;

/// The per-period risk-free rate subtracted from the mean return in the
/// Sharpe ratio. It is a literal per-step constant and is not annualized.
pub const RISK_FREE_RATE: f64 = 0.0001;

/// A stateless calculator for deriving volatility metrics from a NAV series.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating volatility metrics.
    ///
    /// # Arguments
    ///
    /// * `nav` - Daily NAV values, oldest first.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `VolatilityMetrics` or an `AnalyticsError` when
    /// the series has fewer than two points or contains a value that is not a
    /// positive finite number.
    pub fn compute_metrics(&self, nav: &[f64]) -> Result<VolatilityMetrics, AnalyticsError> {
        validate_series(nav)?;

        let returns = returns(nav);
        // Non-empty because the series has at least two points.
        let mean_return = mean(&returns).unwrap_or_default();
        let std_dev = population_std_dev(&returns).unwrap_or_default();
        let sharpe_ratio = sharpe_ratio(mean_return, std_dev);
        let max_drawdown = max_drawdown(nav).unwrap_or_default();

        tracing::debug!(
            points = nav.len(),
            std_dev,
            mean_return,
            sharpe_ratio,
            max_drawdown,
            "Computed volatility metrics"
        );

        Ok(VolatilityMetrics {
            std_dev,
            mean_return,
            sharpe_ratio,
            max_drawdown,
        })
    }
}

fn validate_series(nav: &[f64]) -> Result<(), AnalyticsError> {
    if nav.len() < MIN_NAV_POINTS {
        return Err(AnalyticsError::NotEnoughData {
            required: MIN_NAV_POINTS,
            actual: nav.len(),
        });
    }
    if let Some((idx, value)) = nav
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v <= 0.0)
    {
        return Err(AnalyticsError::InvalidSeries(format!(
            "value {value} at index {idx} is not a positive finite number"
        )));
    }
    Ok(())
}

/// First differences of the series: `nav[k + 1] - nav[k]`.
pub fn returns(nav: &[f64]) -> Vec<f64> {
    nav.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by N, not N - 1).
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Sharpe ratio against [`RISK_FREE_RATE`]. A zero deviation yields 0 instead
/// of dividing by zero.
pub fn sharpe_ratio(mean_return: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return 0.0;
    }
    (mean_return - RISK_FREE_RATE) / std_dev
}

/// Maximum drawdown as a fraction of the running peak, scanning left to right
/// with the peak initialised to the first value.
///
/// Returns `None` for an empty slice.
pub fn max_drawdown(nav: &[f64]) -> Option<f64> {
    let mut peak = *nav.first()?;
    let mut max_drawdown = 0.0_f64;

    for &value in nav {
        if value > peak {
            peak = value;
        }
        if peak > 0.0 {
            let drawdown = (peak - value) / peak;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }
    }

    Some(max_drawdown)
}
