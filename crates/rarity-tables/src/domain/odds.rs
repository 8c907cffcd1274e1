//! Odds snapshots.
//!
//! A snapshot is derived from a [`WeightTable`] on demand and owns all of its
//! data, so nothing done to one snapshot reaches the table or any later
//! snapshot.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use rarity_core::error::RarityError;

use super::table::WeightTable;

/// A label-keyed map that keeps insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> LabelMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the value for `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value for `label`.
    pub(crate) fn get_mut(&mut self, label: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    /// Inserts or replaces a value. A replaced label keeps its position.
    pub fn insert(&mut self, label: impl Into<String>, value: V) -> Option<V> {
        let label = label.into();
        match self.get_mut(&label) {
            Some(existing) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((label, value));
                None
            }
        }
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }
}

impl<V> Default for LabelMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for LabelMap<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (label, value) in iter {
            map.insert(label, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for LabelMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Point-in-time odds of a weight table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsSnapshot {
    total: u64,
    internal: LabelMap<u64>,
    as_floats: LabelMap<f64>,
    as_percents: LabelMap<String>,
}

impl OddsSnapshot {
    /// Computes odds for every label of `table`.
    ///
    /// # Errors
    ///
    /// Returns `RarityError::DegenerateDistribution` if the table total is
    /// zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_table(table: &WeightTable) -> Result<Self, RarityError> {
        let total = table.total();
        if total == 0 {
            return Err(RarityError::DegenerateDistribution);
        }

        let mut internal = LabelMap::new();
        let mut as_floats = LabelMap::new();
        let mut as_percents = LabelMap::new();
        for (label, weight) in table.iter() {
            internal.insert(label, weight);
            as_floats.insert(label, weight as f64 / total as f64);
            as_percents.insert(label, format_percent(weight, total));
        }

        Ok(Self {
            total,
            internal,
            as_floats,
            as_percents,
        })
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Raw truncated weights.
    #[must_use]
    pub fn internal(&self) -> &LabelMap<u64> {
        &self.internal
    }

    /// Weights as fractions of the total.
    #[must_use]
    pub fn as_floats(&self) -> &LabelMap<f64> {
        &self.as_floats
    }

    /// Weights as percentage strings, e.g. `"33.33%"` or `"50%"`.
    #[must_use]
    pub fn as_percents(&self) -> &LabelMap<String> {
        &self.as_percents
    }
}

/// Formats `weight / total` as a percentage with two decimals, dropping a
/// `.00` fraction.
///
/// The percentage is computed in `f64` as `weight / total * 100`, then that
/// double's exact binary value is rounded half up to hundredths. A double
/// that lands just below a decimal tie (e.g. `23 / 160`) therefore rounds
/// down. `total` must be non-zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_percent(weight: u64, total: u64) -> String {
    let percent = weight as f64 / total as f64 * 100.0;
    let hundredths = round_hundredths_half_up(percent);
    let (whole, fraction) = (hundredths / 100, hundredths % 100);
    if fraction == 0 {
        format!("{whole}%")
    } else {
        format!("{whole}.{fraction:02}%")
    }
}

/// Rounds a finite, non-negative double to the nearest hundredth, ties up,
/// returning the count of hundredths.
///
/// Works on the exact value `mantissa * 2^exponent`, so no decimal
/// conversion can hide or invent a tie.
fn round_hundredths_half_up(value: f64) -> u128 {
    let bits = value.to_bits();
    let biased_exponent = i32::try_from((bits >> 52) & 0x7ff).unwrap_or(0);
    let fraction_bits = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction_bits, -1074)
    } else {
        (fraction_bits | (1u64 << 52), biased_exponent - 1075)
    };

    // mantissa * 100 < 2^60
    let scaled = u128::from(mantissa) * 100;
    if exponent >= 0 {
        return scaled << exponent;
    }
    let shift = exponent.unsigned_abs();
    if shift > 64 {
        // Below 2^60 / 2^65, so under half a hundredth.
        return 0;
    }
    let whole = scaled >> shift;
    let remainder = scaled & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    if remainder >= half { whole + 1 } else { whole }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(weights: &[(&str, u32)]) -> OddsSnapshot {
        let table = WeightTable::from_weights(weights.iter().copied()).unwrap();
        OddsSnapshot::from_table(&table).unwrap()
    }

    #[test]
    fn test_even_split_drops_trailing_zeros() {
        let odds = snapshot(&[("A", 50), ("B", 50)]);

        assert_eq!(odds.total(), 100);
        assert_eq!(odds.as_percents().get("A").map(String::as_str), Some("50%"));
        assert_eq!(odds.as_percents().get("B").map(String::as_str), Some("50%"));
    }

    #[test]
    fn test_thirds_round_to_two_decimals() {
        let odds = snapshot(&[("A", 1), ("B", 2)]);

        let a = *odds.as_floats().get("A").unwrap();
        let b = *odds.as_floats().get("B").unwrap();
        assert!((a - 1.0 / 3.0).abs() < 1e-12);
        assert!((b - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(odds.as_percents().get("A").unwrap(), "33.33%");
        assert_eq!(odds.as_percents().get("B").unwrap(), "66.67%");
    }

    #[test]
    fn test_internal_keeps_raw_weights_in_order() {
        let odds = snapshot(&[("Rare", 15), ("Common", 55), ("Never", 0)]);
        assert_eq!(
            odds.internal().iter().collect::<Vec<_>>(),
            vec![("Rare", &15), ("Common", &55), ("Never", &0)]
        );
        assert_eq!(odds.as_percents().get("Never").unwrap(), "0%");
    }

    #[test]
    fn test_format_percent_follows_double_value_below_ties() {
        // Each quotient is a decimal tie at the third place, but the double
        // product lands just below it.
        assert_eq!(format_percent(23, 160), "14.37%");
        assert_eq!(format_percent(41, 160), "25.62%");
        assert_eq!(format_percent(51, 160), "31.87%");
        assert_eq!(format_percent(87, 160), "54.37%");
        assert_eq!(format_percent(97, 160), "60.62%");
    }

    #[test]
    fn test_format_percent_sixteenths_of_a_hundred_sixty() {
        assert_eq!(format_percent(1, 160), "0.63%");
        assert_eq!(format_percent(3, 160), "1.88%");
        assert_eq!(format_percent(40, 160), "25%");
    }

    #[test]
    fn test_format_percent_rounds_half_away_from_zero() {
        // 1/32 = 3.125%
        assert_eq!(format_percent(1, 32), "3.13%");
        // 1/8 = 12.5%
        assert_eq!(format_percent(1, 8), "12.50%");
        // 1/20000 = 0.005%
        assert_eq!(format_percent(1, 20_000), "0.01%");
        assert_eq!(format_percent(1, 30_000), "0%");
        assert_eq!(format_percent(7, 7), "100%");
    }

    #[test]
    fn test_format_percent_handles_extreme_weights() {
        assert_eq!(format_percent(u64::MAX, u64::MAX), "100%");
        assert_eq!(format_percent(1, u64::MAX), "0%");
    }

    #[test]
    fn test_zero_total_is_degenerate() {
        let table = WeightTable::from_weights([("A", 0), ("B", 0)]).unwrap();
        assert_eq!(
            OddsSnapshot::from_table(&table),
            Err(RarityError::DegenerateDistribution)
        );
    }

    #[test]
    fn test_serializes_camel_case_in_table_order() {
        let odds = snapshot(&[("B", 1), ("A", 3)]);

        let json = serde_json::to_string(&odds).unwrap();

        assert_eq!(
            json,
            r#"{"total":4,"internal":{"B":1,"A":3},"asFloats":{"B":0.25,"A":0.75},"asPercents":{"B":"25%","A":"75%"}}"#
        );
    }

    #[test]
    fn test_label_map_insert_replaces_in_place() {
        let mut map: LabelMap<u32> = [("x", 1), ("y", 2)].into_iter().collect();

        assert_eq!(map.insert("x", 9), Some(1));
        assert_eq!(map.insert("z", 3), None);

        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![("x", &9), ("y", &2), ("z", &3)]
        );
    }
}
