//! `forgeplan-planning`
//!
//! **Responsibility:** production-planning strategies and the context that
//! selects between them at runtime.
//!
//! Everything here is deterministic, in-process logic:
//! - strategies compute resource estimates from fixed formulas
//! - the context owns at most one active strategy and delegates to it
//! - human-readable status lines go to an injectable [`StatusObserver`]

pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod estimate;
pub mod kind;
pub mod observer;
pub mod strategies;
pub mod strategy;

pub use command::{ChangeStrategy, StrategyCommandLog};
pub use config::StrategyConfig;
pub use context::ProductionStrategyContext;
pub use error::PlanningError;
pub use estimate::{
    ExecutionRecord, ExecutionStatus, MachineTime, RawMaterials, ResourceEstimate, StrategySetting,
};
pub use kind::StrategyKind;
pub use observer::{NoopObserver, RecordingObserver, StatusObserver, TracingObserver};
pub use strategies::{CustomBatchStrategy, MassProductionStrategy, OnDemandProductionStrategy};
pub use strategy::ProductionStrategy;
