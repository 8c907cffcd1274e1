//! Commands handled by application-layer handlers.

use uuid::Uuid;

/// A request to an application handler. Handlers log the command type and
/// tag every span and report they produce with the correlation ID.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted `<context>.<action>` name, e.g. `tables.roll_session`.
    fn command_type(&self) -> &'static str;

    /// Correlation ID carried into logs and reports.
    fn correlation_id(&self) -> Uuid;
}
