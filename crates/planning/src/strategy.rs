use crate::estimate::{ExecutionRecord, ResourceEstimate};
use crate::kind::StrategyKind;
use crate::observer::StatusObserver;

/// A production policy that can be selected at runtime by a
/// [`ProductionStrategyContext`](crate::ProductionStrategyContext).
///
/// Implementations hold a single immutable configuration parameter.
/// `calculate_resource_requirements` must be a pure function of that
/// parameter and the order quantity; the context relies on this to delegate
/// without caching.
pub trait ProductionStrategy: Send + Sync + core::fmt::Debug {
    /// Which variant this is.
    fn kind(&self) -> StrategyKind;

    /// Start production under this strategy.
    ///
    /// Emits three status lines through `observer` and returns a record with
    /// status `running`.
    fn execute(&self, observer: &dyn StatusObserver) -> ExecutionRecord;

    /// Estimate materials, machine time and completion time for an order.
    ///
    /// `order_quantity` is not validated: zero or negative quantities flow
    /// straight into the formulas. Quantities are converted to `f64` for the
    /// arithmetic, so magnitudes above 2^53 lose precision without any error.
    fn calculate_resource_requirements(&self, order_quantity: i64) -> ResourceEstimate;
}
