//! Commands for the rarity tables context.

use rarity_core::command::Command;
use uuid::Uuid;

/// Command to roll a table a number of times and tally the results.
#[derive(Debug, Clone)]
pub struct RollSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// How many labels to draw.
    pub rolls: usize,
}

impl Command for RollSession {
    fn command_type(&self) -> &'static str {
        "tables.roll_session"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_session_reports_type_and_correlation_id() {
        let correlation_id = Uuid::new_v4();
        let command = RollSession {
            correlation_id,
            rolls: 3,
        };

        let as_command: &dyn Command = &command;

        assert_eq!(as_command.command_type(), "tables.roll_session");
        assert_eq!(as_command.correlation_id(), correlation_id);
    }
}
