//! Runtime-configurable limits
//!
//! Buffer and handler-table *capacities* are const generics on [`crate::engine::Engine`] /
//! [`crate::client::Client`] since the default backing collections are fixed-capacity; this struct
//! carries the one limit that stays a runtime value.

/// Runtime-configurable limits for the protocol engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Upper bound, in milliseconds, on every blocking command's total wait
    pub command_timeout_ms: u32,
}
impl Default for Limits {
    fn default() -> Self {
        Self { command_timeout_ms: 30_000 }
    }
}
