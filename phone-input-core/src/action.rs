//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to a store
///
/// Actions describe an intent to change widget state. They should be:
/// - Clone: middleware sees the action before the reducer consumes it
/// - Debug: for logging
/// - Send + 'static: actions travel over channels from the event poller
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}
