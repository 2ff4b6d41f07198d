use std::sync::Arc;

use crate::config::StrategyConfig;
use crate::error::PlanningError;
use crate::estimate::{ExecutionRecord, ResourceEstimate};
use crate::observer::{StatusObserver, TracingObserver};
use crate::strategy::ProductionStrategy;

const NO_STRATEGY_NOTICE: &str = "No production strategy set";

/// Holds the active production strategy and delegates to it.
///
/// The context owns at most one strategy at a time. Replacing it hands the
/// previous strategy back to the caller; nothing else is retained. Results
/// are never cached: every call goes to whichever strategy is held at that
/// moment.
pub struct ProductionStrategyContext {
    strategy: Option<Box<dyn ProductionStrategy>>,
    observer: Arc<dyn StatusObserver>,
}

impl ProductionStrategyContext {
    /// Create a context, optionally with an initial strategy.
    ///
    /// Status lines go to [`TracingObserver`] until
    /// [`with_observer`](Self::with_observer) installs another sink.
    pub fn new(strategy: Option<Box<dyn ProductionStrategy>>) -> Self {
        Self {
            strategy,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn StatusObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn observer(&self) -> &Arc<dyn StatusObserver> {
        &self.observer
    }

    pub fn strategy(&self) -> Option<&dyn ProductionStrategy> {
        self.strategy.as_deref()
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    /// Replace the active strategy unconditionally.
    ///
    /// Returns the strategy that was active before, if any.
    pub fn set_strategy(
        &mut self,
        strategy: Box<dyn ProductionStrategy>,
    ) -> Option<Box<dyn ProductionStrategy>> {
        let kind = strategy.kind();
        let previous = self.strategy.replace(strategy);

        tracing::debug!(
            strategy = %kind,
            previous = ?previous.as_ref().map(|s| s.kind()),
            "production strategy replaced"
        );
        self.notify(&format!("Production strategy changed to {}", kind.type_name()));

        previous
    }

    /// Build a strategy from a selection string and make it active.
    ///
    /// `selection` is either a JSON object (`{"strategy": "on_demand", "priority_level": 5}`)
    /// or a bare strategy name. On error the active strategy is left untouched.
    pub fn select_strategy(
        &mut self,
        selection: &str,
    ) -> Result<Option<Box<dyn ProductionStrategy>>, PlanningError> {
        let config: StrategyConfig = selection.parse()?;
        let strategy = config.build()?;
        Ok(self.set_strategy(strategy))
    }

    /// Remove the active strategy, returning it.
    pub fn clear_strategy(&mut self) -> Option<Box<dyn ProductionStrategy>> {
        let previous = self.strategy.take();
        if previous.is_some() {
            self.notify("Production strategy cleared");
        }
        previous
    }

    /// Execute the active strategy.
    pub fn execute_strategy(&self) -> Result<ExecutionRecord, PlanningError> {
        let strategy = self.active()?;
        tracing::debug!(strategy = %strategy.kind(), "executing production strategy");
        Ok(strategy.execute(&*self.observer))
    }

    /// Estimate resources for `order_quantity` with the active strategy.
    pub fn get_resource_requirements(
        &self,
        order_quantity: i64,
    ) -> Result<ResourceEstimate, PlanningError> {
        let strategy = self.active()?;
        tracing::debug!(
            strategy = %strategy.kind(),
            order_quantity,
            "calculating resource requirements"
        );
        Ok(strategy.calculate_resource_requirements(order_quantity))
    }

    pub(crate) fn notify(&self, line: &str) {
        self.observer.notify(line);
    }

    fn active(&self) -> Result<&dyn ProductionStrategy, PlanningError> {
        match self.strategy.as_deref() {
            Some(strategy) => Ok(strategy),
            None => {
                tracing::warn!("delegated call without an active production strategy");
                self.notify(NO_STRATEGY_NOTICE);
                Err(PlanningError::NoStrategySet)
            }
        }
    }
}

impl Default for ProductionStrategyContext {
    fn default() -> Self {
        Self::new(None)
    }
}

impl core::fmt::Debug for ProductionStrategyContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductionStrategyContext")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{NoopObserver, RecordingObserver};
    use crate::strategies::{CustomBatchStrategy, MassProductionStrategy, OnDemandProductionStrategy};
    use crate::kind::StrategyKind;
    use crate::test_support::{assert_close, is_repeatable};
    use proptest::prelude::*;

    fn recorded_context(
        strategy: Option<Box<dyn ProductionStrategy>>,
    ) -> (ProductionStrategyContext, Arc<RecordingObserver>) {
        let recorder = Arc::new(RecordingObserver::new());
        let context = ProductionStrategyContext::new(strategy).with_observer(recorder.clone());
        (context, recorder)
    }

    fn strategy_for(choice: u8, setting: i32) -> Box<dyn ProductionStrategy> {
        match choice % 3 {
            0 => Box::new(
                MassProductionStrategy::new(setting.unsigned_abs().max(1))
                    .expect("batch size is non-zero"),
            ),
            1 => Box::new(CustomBatchStrategy::new(setting)),
            _ => Box::new(OnDemandProductionStrategy::new(setting)),
        }
    }

    #[test]
    fn empty_context_reports_no_strategy_set() {
        let (context, recorder) = recorded_context(None);

        assert_eq!(context.execute_strategy(), Err(PlanningError::NoStrategySet));
        assert_eq!(
            context.get_resource_requirements(100),
            Err(PlanningError::NoStrategySet)
        );
        assert_eq!(
            recorder.lines(),
            vec!["No production strategy set", "No production strategy set"]
        );
    }

    #[test]
    fn initial_strategy_is_used_without_a_change_notice() {
        let (context, recorder) =
            recorded_context(Some(Box::new(MassProductionStrategy::default())));

        let record = context.execute_strategy().unwrap();

        assert_eq!(record.strategy, StrategyKind::MassProduction);
        assert_eq!(recorder.lines().len(), 3);
        assert_eq!(recorder.lines()[0], "Starting mass production with batch size 1000");
    }

    #[test]
    fn set_strategy_announces_the_new_type_and_returns_the_old_one() {
        let (mut context, recorder) = recorded_context(None);

        let previous = context.set_strategy(Box::new(CustomBatchStrategy::default()));
        assert!(previous.is_none());

        let previous = context.set_strategy(Box::new(OnDemandProductionStrategy::default()));
        assert_eq!(previous.map(|s| s.kind()), Some(StrategyKind::CustomBatch));

        assert_eq!(
            recorder.lines(),
            vec![
                "Production strategy changed to CustomBatchStrategy",
                "Production strategy changed to OnDemandProductionStrategy",
            ]
        );
    }

    #[test]
    fn switching_strategy_leaves_no_residue() {
        let mut context = ProductionStrategyContext::default()
            .with_observer(Arc::new(NoopObserver));
        let mass = MassProductionStrategy::new(1000).unwrap();
        let on_demand = OnDemandProductionStrategy::new(5);

        context.set_strategy(Box::new(mass));
        let first = context.get_resource_requirements(200).unwrap();
        assert_eq!(first, mass.calculate_resource_requirements(200));

        context.set_strategy(Box::new(on_demand));
        let second = context.get_resource_requirements(200).unwrap();
        assert_eq!(second, on_demand.calculate_resource_requirements(200));
        assert_close(second.estimated_completion_time, 100.0);
        assert!(second.machine_time.logistics.is_some());

        let record = context.execute_strategy().unwrap();
        assert_eq!(record.strategy, StrategyKind::OnDemand);
    }

    #[test]
    fn clear_strategy_returns_to_the_guarded_state() {
        let (mut context, _recorder) =
            recorded_context(Some(Box::new(CustomBatchStrategy::new(3))));

        let cleared = context.clear_strategy();

        assert_eq!(cleared.map(|s| s.kind()), Some(StrategyKind::CustomBatch));
        assert!(!context.has_strategy());
        assert_eq!(context.execute_strategy(), Err(PlanningError::NoStrategySet));
    }

    #[test]
    fn select_strategy_installs_the_configured_variant() {
        let (mut context, recorder) = recorded_context(None);

        let previous = context
            .select_strategy(r#"{"strategy": "on_demand", "priority_level": 5}"#)
            .unwrap();

        assert!(previous.is_none());
        let record = context.execute_strategy().unwrap();
        assert_eq!(record.strategy, StrategyKind::OnDemand);
        assert_eq!(
            recorder.lines()[0],
            "Production strategy changed to OnDemandProductionStrategy"
        );
    }

    #[test]
    fn select_strategy_surfaces_domain_errors_as_planning_errors() {
        let (mut context, _recorder) =
            recorded_context(Some(Box::new(CustomBatchStrategy::default())));

        let err = context.select_strategy("lean").unwrap_err();
        assert_eq!(err.code(), "unknown_strategy");
        assert_eq!(
            err.to_json(),
            serde_json::json!({
                "error": "unknown_strategy",
                "message": "unknown production strategy: lean",
            })
        );

        let err = context
            .select_strategy(r#"{"strategy": "mass_production", "batch_size": 0}"#)
            .unwrap_err();
        assert_eq!(err.code(), "validation_error");

        let err = context.select_strategy("{not json").unwrap_err();
        assert_eq!(err.code(), "invalid_configuration");

        // Failed selections leave the active strategy in place.
        assert_eq!(
            context.strategy().map(|s| s.kind()),
            Some(StrategyKind::CustomBatch)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: without a strategy every quantity yields `no_strategy_set`.
        #[test]
        fn empty_context_rejects_any_quantity(quantity in any::<i64>()) {
            let context = ProductionStrategyContext::default()
                .with_observer(Arc::new(NoopObserver));

            prop_assert_eq!(
                context.get_resource_requirements(quantity),
                Err(PlanningError::NoStrategySet)
            );
        }

        /// Property: delegated results equal direct calls on the held strategy.
        #[test]
        fn context_delegates_exactly(
            choice in 0u8..3,
            setting in -10i32..5_000,
            quantity in -1_000_000i64..1_000_000,
        ) {
            let direct = strategy_for(choice, setting);
            let mut context = ProductionStrategyContext::default()
                .with_observer(Arc::new(NoopObserver));
            context.set_strategy(strategy_for(choice, setting));

            prop_assert_eq!(
                context.get_resource_requirements(quantity).unwrap(),
                direct.calculate_resource_requirements(quantity)
            );
            prop_assert_eq!(
                context.execute_strategy().unwrap(),
                direct.execute(&NoopObserver)
            );
        }

        /// Property: estimates are a pure function of configuration and quantity.
        #[test]
        fn estimates_are_pure(
            choice in 0u8..3,
            setting in -10i32..5_000,
            quantity in -1_000_000i64..1_000_000,
        ) {
            let strategy = strategy_for(choice, setting);

            prop_assert!(is_repeatable(|| strategy.calculate_resource_requirements(quantity)));
            prop_assert!(is_repeatable(|| strategy.execute(&NoopObserver)));
        }
    }
}
