//! Weighted categorical sampler.

use rarity_core::clock::Clock;
use rarity_core::error::RarityError;
use rarity_core::generator::SeededGenerator;
use rarity_core::rng::BoundedRng;
use rarity_core::seed::Seed;
use tracing::{debug, trace, warn};

use super::odds::OddsSnapshot;
use super::table::WeightTable;

/// Draws labels from a frozen [`WeightTable`] in proportion to their weight.
///
/// The sampler owns its generator and asks it for one draw per label. With
/// the default `SeededGenerator`, equal seeds and equal tables yield equal
/// label sequences.
#[derive(Debug, Clone)]
pub struct WeightedSampler<R = SeededGenerator> {
    table: WeightTable,
    rng: R,
}

impl WeightedSampler<SeededGenerator> {
    /// Builds a table from `weights` and seeds a generator with `seed`.
    ///
    /// # Errors
    ///
    /// Returns `RarityError::InvalidWeight` if any weight is rejected by
    /// [`WeightTable::from_weights`].
    pub fn new<I, K, W>(weights: I, seed: impl Into<Seed>) -> Result<Self, RarityError>
    where
        I: IntoIterator<Item = (K, W)>,
        K: Into<String>,
        W: Into<f64>,
    {
        let table = WeightTable::from_weights(weights)?;
        Ok(Self::with_rng(table, SeededGenerator::new(seed)))
    }

    /// Like [`new`](Self::new), seeded from the clock's current time.
    ///
    /// Label sequences differ between runs.
    ///
    /// # Errors
    ///
    /// Returns `RarityError::InvalidWeight` if any weight is rejected.
    pub fn from_clock<I, K, W>(weights: I, clock: &dyn Clock) -> Result<Self, RarityError>
    where
        I: IntoIterator<Item = (K, W)>,
        K: Into<String>,
        W: Into<f64>,
    {
        Self::new(weights, Seed::from_clock(clock))
    }
}

impl<R: BoundedRng> WeightedSampler<R> {
    /// Wraps an already validated table and a draw source.
    #[must_use]
    pub fn with_rng(table: WeightTable, rng: R) -> Self {
        debug!(
            labels = table.len(),
            total = table.total(),
            "weighted sampler created"
        );
        Self { table, rng }
    }

    /// Draws one label.
    ///
    /// Draws a threshold from `[0, total)` and returns the first label whose
    /// running weight sum exceeds it. If no label does (only possible with a
    /// source that ignores its bounds), the first label is returned.
    ///
    /// # Errors
    ///
    /// Returns `RarityError::DegenerateDistribution` without drawing if the
    /// total weight is zero.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<String, RarityError> {
        let total = self.cumulative();
        if total == 0 {
            return Err(RarityError::DegenerateDistribution);
        }

        let threshold = self.rng.next_in(0, i128::from(total))?;
        let mut running: i128 = 0;
        for (label, weight) in self.table.iter() {
            running += i128::from(weight);
            if threshold < running {
                trace!(threshold, label, "label drawn");
                return Ok(label.to_owned());
            }
        }

        warn!(threshold, total, "threshold beyond table total, using first label");
        self.table
            .first_label()
            .map(str::to_owned)
            .ok_or(RarityError::DegenerateDistribution)
    }

    /// Total weight of the table, recomputed on every call.
    #[must_use]
    pub fn cumulative(&self) -> u64 {
        self.table.total()
    }

    /// A fresh odds snapshot.
    ///
    /// # Errors
    ///
    /// Returns `RarityError::DegenerateDistribution` if the total weight is
    /// zero.
    pub fn odds(&self) -> Result<OddsSnapshot, RarityError> {
        OddsSnapshot::from_table(&self.table)
    }

    /// The table being sampled.
    #[must_use]
    pub fn table(&self) -> &WeightTable {
        &self.table
    }

    /// The draw source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }
}
