//! Weight tables.

use std::collections::HashMap;

use rarity_core::error::RarityError;

/// An ordered, immutable table of label weights.
///
/// Weights are truncated toward zero at construction. A label given more than
/// once keeps its first position and takes its last weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    entries: Vec<(String, u64)>,
}

impl WeightTable {
    /// Builds a table from `(label, weight)` pairs in iteration order.
    ///
    /// # Errors
    ///
    /// Returns `RarityError::InvalidWeight` for the first label whose
    /// truncated weight is negative, NaN, infinite, too large for `u64`, or
    /// pushes the table total past `u64::MAX`. No table is built on error.
    pub fn from_weights<I, K, W>(weights: I) -> Result<Self, RarityError>
    where
        I: IntoIterator<Item = (K, W)>,
        K: Into<String>,
        W: Into<f64>,
    {
        let mut entries: Vec<(String, u64)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (label, weight) in weights {
            let label = label.into();
            let Some(weight) = truncate_weight(weight.into()) else {
                return Err(RarityError::InvalidWeight(label));
            };
            if let Some(&index) = positions.get(&label) {
                entries[index].1 = weight;
            } else {
                positions.insert(label.clone(), entries.len());
                entries.push((label, weight));
            }
        }

        entries.iter().try_fold(0u64, |sum, (label, weight)| {
            sum.checked_add(*weight)
                .ok_or_else(|| RarityError::InvalidWeight(label.clone()))
        })?;

        Ok(Self { entries })
    }

    /// Sum of all weights, computed on every call.
    #[must_use]
    pub fn total(&self) -> u64 {
        // Cannot overflow: checked at construction.
        self.entries.iter().map(|(_, weight)| weight).sum()
    }

    /// Iterates `(label, weight)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(label, weight)| (label.as_str(), *weight))
    }

    /// Iterates labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// Returns the weight for `label`.
    #[must_use]
    pub fn weight(&self, label: &str) -> Option<u64> {
        self.iter().find(|(l, _)| *l == label).map(|(_, w)| w)
    }

    /// The first label, used as the sampler's fallback.
    #[must_use]
    pub fn first_label(&self) -> Option<&str> {
        self.entries.first().map(|(label, _)| label.as_str())
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Truncates toward zero; `None` if the result is not a valid `u64` weight.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn truncate_weight(weight: f64) -> Option<u64> {
    let truncated = weight.trunc();
    // NaN fails both comparisons; u64::MAX as f64 rounds up to 2^64.
    if truncated >= 0.0 && truncated < u64::MAX as f64 {
        Some(truncated as u64)
    } else {
        None
    }
}
