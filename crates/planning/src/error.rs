use serde_json::{Value as JsonValue, json};
use thiserror::Error;

use forgeplan_core::DomainError;

/// Errors surfaced by the planning context and its commands.
///
/// None of these are fatal: every operation returns a value, and the
/// missing-strategy guard is an ordinary `Err`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanningError {
    /// A delegated operation was requested while the context holds no strategy.
    #[error("no production strategy set")]
    NoStrategySet,

    /// A change-strategy command was executed twice without an undo in between.
    #[error("command has already been applied")]
    CommandAlreadyApplied,

    /// A reverted command no longer owns its strategy (the context was
    /// changed directly between execute and undo).
    #[error("command no longer holds its strategy")]
    StrategyMissing,

    /// Undo was requested but no executed command is available.
    #[error("nothing to undo")]
    NothingToUndo,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl PlanningError {
    /// Stable snake_case code, suitable for wire payloads.
    pub fn code(&self) -> &'static str {
        match self {
            PlanningError::NoStrategySet => "no_strategy_set",
            PlanningError::CommandAlreadyApplied => "command_already_applied",
            PlanningError::StrategyMissing => "strategy_missing",
            PlanningError::NothingToUndo => "nothing_to_undo",
            PlanningError::Domain(DomainError::Validation(_)) => "validation_error",
            PlanningError::Domain(DomainError::UnknownStrategy(_)) => "unknown_strategy",
            PlanningError::Domain(DomainError::InvalidConfiguration(_)) => "invalid_configuration",
        }
    }

    /// Structured error result: `{"error": "<code>"}`, plus a message for domain errors.
    pub fn to_json(&self) -> JsonValue {
        match self {
            PlanningError::Domain(inner) => json!({
                "error": self.code(),
                "message": inner.to_string(),
            }),
            _ => json!({ "error": self.code() }),
        }
    }
}
