//! Query handlers for the rarity tables context.
//!
//! Query handlers read a sampler's table and return read-only view DTOs.

use rarity_core::error::RarityError;
use rarity_core::rng::BoundedRng;
use serde::Serialize;

use crate::domain::sampler::WeightedSampler;

/// Read-only view of a single label's odds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsRowView {
    /// The label.
    pub label: String,
    /// Truncated weight.
    pub weight: u64,
    /// Fraction of the total weight.
    pub fraction: f64,
    /// Rounded percentage string.
    pub percent: String,
}

/// Read-only view of a whole table's odds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsView {
    /// Sum of all weights.
    pub total: u64,
    /// One row per label, in table order.
    pub rows: Vec<OddsRowView>,
}

/// Returns the odds of the sampler's table as label rows.
///
/// # Errors
///
/// Returns `RarityError::DegenerateDistribution` if the total weight is zero.
pub fn get_odds<R: BoundedRng>(sampler: &WeightedSampler<R>) -> Result<OddsView, RarityError> {
    let snapshot = sampler.odds()?;
    let rows = snapshot
        .internal()
        .iter()
        .zip(snapshot.as_floats().iter())
        .zip(snapshot.as_percents().iter())
        .map(|(((label, &weight), (_, &fraction)), (_, percent))| OddsRowView {
            label: label.to_owned(),
            weight,
            fraction,
            percent: percent.clone(),
        })
        .collect();

    Ok(OddsView {
        total: snapshot.total(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use rarity_test_support::SequenceRng;

    use super::*;
    use crate::domain::table::WeightTable;

    #[test]
    fn test_odds_view_rows_follow_table_order() {
        let sampler = WeightedSampler::new([("Rare", 1), ("Common", 3)], 5u64).unwrap();

        let view = get_odds(&sampler).unwrap();

        assert_eq!(view.total, 4);
        assert_eq!(
            view.rows,
            vec![
                OddsRowView {
                    label: "Rare".to_owned(),
                    weight: 1,
                    fraction: 0.25,
                    percent: "25%".to_owned(),
                },
                OddsRowView {
                    label: "Common".to_owned(),
                    weight: 3,
                    fraction: 0.75,
                    percent: "75%".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_odds_view_has_a_row_for_every_label() {
        let weights = [("A", 23), ("B", 0), ("C", 137)];
        let sampler = WeightedSampler::new(weights, 5u64).unwrap();

        let view = get_odds(&sampler).unwrap();

        let labels: Vec<&str> = view.rows.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(view.rows[0].percent, "14.37%");
        assert_eq!(view.rows[1].percent, "0%");
        assert!(view.rows.iter().all(|row| !row.percent.is_empty()));
        assert!((view.rows.iter().map(|row| row.fraction).sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_odds_view_serializes_rows_only() {
        let sampler = WeightedSampler::new([("A", 1)], 5u64).unwrap();

        let json = serde_json::to_value(get_odds(&sampler).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "total": 1,
                "rows": [{ "label": "A", "weight": 1, "fraction": 1.0, "percent": "100%" }]
            })
        );
    }

    #[test]
    fn test_odds_view_does_not_draw() {
        let table = WeightTable::from_weights([("A", 2)]).unwrap();
        let sampler = WeightedSampler::with_rng(table, SequenceRng::new(vec![]));

        get_odds(&sampler).unwrap();

        assert_eq!(sampler.rng().consumed(), 0);
    }

    #[test]
    fn test_odds_view_of_degenerate_table_fails() {
        let sampler = WeightedSampler::new([("A", 0)], 5u64).unwrap();
        assert_eq!(get_odds(&sampler), Err(RarityError::DegenerateDistribution));
    }
}
