//! Undoable strategy changes.
//!
//! A [`ChangeStrategy`] moves a strategy into the context and keeps whatever
//! it displaced, so the change can be reverted. [`StrategyCommandLog`] keeps
//! the executed commands as a stack for last-in-first-out undo.

use crate::context::ProductionStrategyContext;
use crate::error::PlanningError;
use crate::kind::StrategyKind;
use crate::strategy::ProductionStrategy;

/// Command: install a strategy in a context.
///
/// Ownership alternates between the command and the context: `execute`
/// moves the pending strategy into the context, `undo` moves it back out.
#[derive(Debug)]
pub struct ChangeStrategy {
    target: StrategyKind,
    pending: Option<Box<dyn ProductionStrategy>>,
    displaced: Option<Box<dyn ProductionStrategy>>,
    applied: bool,
}

impl ChangeStrategy {
    pub fn new(strategy: Box<dyn ProductionStrategy>) -> Self {
        Self {
            target: strategy.kind(),
            pending: Some(strategy),
            displaced: None,
            applied: false,
        }
    }

    pub fn target(&self) -> StrategyKind {
        self.target
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }

    pub fn label(&self) -> String {
        format!("change_strategy:{}", self.target)
    }

    pub fn execute(&mut self, context: &mut ProductionStrategyContext) -> Result<(), PlanningError> {
        if self.applied {
            return Err(PlanningError::CommandAlreadyApplied);
        }
        let strategy = self.pending.take().ok_or(PlanningError::StrategyMissing)?;

        context.notify(&format!(
            "Executing command: Change production strategy to {}",
            self.target.type_name()
        ));
        self.displaced = context.set_strategy(strategy);
        self.applied = true;
        Ok(())
    }

    /// Restore the strategy that was active before `execute`.
    ///
    /// If the context was empty before, it is cleared again. The strategy
    /// taken out of the context is kept for re-execution only if it is still
    /// of this command's target kind; a strategy installed behind the
    /// command's back is dropped, and a later `execute` fails with
    /// [`PlanningError::StrategyMissing`].
    pub fn undo(&mut self, context: &mut ProductionStrategyContext) -> Result<(), PlanningError> {
        if !self.applied {
            return Err(PlanningError::NothingToUndo);
        }

        let restored = self
            .displaced
            .as_ref()
            .map_or("None", |s| s.kind().type_name());
        context.notify(&format!(
            "Undoing command: Revert production strategy to {restored}"
        ));

        let current = match self.displaced.take() {
            Some(previous) => context.set_strategy(previous),
            None => context.clear_strategy(),
        };
        self.pending = match current {
            Some(strategy) if strategy.kind() == self.target => Some(strategy),
            other => {
                tracing::warn!(
                    target_kind = %self.target,
                    found = ?other.as_ref().map(|s| s.kind()),
                    "context no longer holds the strategy this command installed"
                );
                None
            }
        };
        self.applied = false;
        Ok(())
    }
}

/// History of executed strategy changes.
#[derive(Debug, Default)]
pub struct StrategyCommandLog {
    history: Vec<ChangeStrategy>,
}

impl StrategyCommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `command` and record it for undo.
    pub fn apply(
        &mut self,
        context: &mut ProductionStrategyContext,
        mut command: ChangeStrategy,
    ) -> Result<(), PlanningError> {
        command.execute(context)?;
        tracing::debug!(command = %command.label(), "strategy command applied");
        self.history.push(command);
        Ok(())
    }

    /// Undo the most recent command.
    ///
    /// The reverted command is returned so it can be re-applied.
    pub fn undo_last(
        &mut self,
        context: &mut ProductionStrategyContext,
    ) -> Result<ChangeStrategy, PlanningError> {
        let mut command = self.history.pop().ok_or(PlanningError::NothingToUndo)?;
        context.notify(&format!("Undoing last command: {}", command.label()));
        command.undo(context)?;
        Ok(command)
    }

    /// Labels of executed commands, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.iter().map(ChangeStrategy::label).collect()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
