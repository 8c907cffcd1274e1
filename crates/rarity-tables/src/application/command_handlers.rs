//! Command handlers for the rarity tables context.
//!
//! Handlers orchestrate domain logic: draw from the sampler, tally, and
//! assemble a serializable report.

use chrono::{DateTime, Utc};
use rarity_core::clock::Clock;
use rarity_core::command::Command;
use rarity_core::error::RarityError;
use rarity_core::rng::BoundedRng;
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::commands::RollSession;
use crate::domain::odds::LabelMap;
use crate::domain::sampler::WeightedSampler;

/// Outcome of a roll session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollReport {
    /// Unique identifier of this session.
    pub session_id: Uuid,
    /// Correlation ID of the command that produced it.
    pub correlation_id: Uuid,
    /// When the session finished.
    pub rolled_at: DateTime<Utc>,
    /// Number of labels drawn.
    pub rolls: usize,
    /// Per-label counts in table order, including labels never drawn.
    pub tally: LabelMap<u64>,
    /// The table's odds as percentage strings.
    pub odds: LabelMap<String>,
    /// The final label drawn, if any.
    pub last: Option<String>,
}

/// Handles the `RollSession` command: draws `command.rolls` labels and
/// tallies them.
///
/// # Errors
///
/// Returns `RarityError::DegenerateDistribution` if the table's total weight
/// is zero, even for a session of zero rolls.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id(), rolls = command.rolls))]
pub fn handle_roll_session<R: BoundedRng>(
    command: &RollSession,
    sampler: &mut WeightedSampler<R>,
    clock: &dyn Clock,
) -> Result<RollReport, RarityError> {
    info!(command_type = command.command_type(), "handling roll session");

    let odds = sampler.odds()?;
    let mut tally: LabelMap<u64> = sampler.table().labels().map(|label| (label, 0)).collect();
    let mut last = None;

    for _ in 0..command.rolls {
        let label = sampler.next()?;
        if let Some(count) = tally.get_mut(&label) {
            *count += 1;
        }
        last = Some(label);
    }

    let report = RollReport {
        session_id: Uuid::new_v4(),
        correlation_id: command.correlation_id(),
        rolled_at: clock.now(),
        rolls: command.rolls,
        tally,
        odds: odds.as_percents().clone(),
        last,
    };

    info!(session_id = %report.session_id, "roll session complete");
    Ok(report)
}
