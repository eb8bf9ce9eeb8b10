use crate::error::AnalyticsError;
use core_types::{MIN_NAV_POINTS, NavSeries, Period};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Starting level every synthetic series is drawn around.
pub const BASE_NAV: f64 = 100.0;

/// Produces synthetic daily NAV series for demo charts.
///
/// Each value is `BASE_NAV + U(-1, 1) + i * U(-0.05, 0.05)`, rounded to two
/// decimals, with every draw independent. Consecutive days are not
/// correlated; the output only has to look plausible on a chart.
///
/// The random source is injectable: production code uses the thread-local
/// RNG, tests use [`SeriesGenerator::seeded`] to pin a sequence.
#[derive(Debug)]
pub struct SeriesGenerator<R = ThreadRng> {
    rng: R,
}

impl SeriesGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for SeriesGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesGenerator<StdRng> {
    /// A deterministic generator: the same seed always yields the same series.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SeriesGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates `days` daily values.
    ///
    /// Fewer than two days is rejected up front: a single point has no
    /// return and would break every downstream statistic.
    pub fn generate(&mut self, days: usize) -> Result<NavSeries, AnalyticsError> {
        if days < MIN_NAV_POINTS {
            return Err(AnalyticsError::NotEnoughData {
                required: MIN_NAV_POINTS,
                actual: days,
            });
        }

        let values = (0..days)
            .map(|i| {
                let noise = self.rng.gen_range(-1.0..=1.0);
                let drift = self.rng.gen_range(-0.05..=0.05);
                round_cents(BASE_NAV + noise + i as f64 * drift)
            })
            .collect();

        tracing::debug!(days, "Generated synthetic NAV series");
        Ok(NavSeries::new(values)?)
    }

    /// Generates a series covering `period`.
    pub fn generate_for(&mut self, period: Period) -> Result<NavSeries, AnalyticsError> {
        self.generate(period.days())
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
