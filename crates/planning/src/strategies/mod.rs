//! Concrete production strategies.

pub mod custom_batch;
pub mod mass_production;
pub mod on_demand;

pub use custom_batch::CustomBatchStrategy;
pub use mass_production::MassProductionStrategy;
pub use on_demand::OnDemandProductionStrategy;
