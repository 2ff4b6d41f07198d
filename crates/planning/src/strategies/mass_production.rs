use forgeplan_core::{DomainError, DomainResult};

use crate::estimate::{ExecutionRecord, MachineTime, RawMaterials, ResourceEstimate, StrategySetting};
use crate::kind::StrategyKind;
use crate::observer::StatusObserver;
use crate::strategy::ProductionStrategy;

pub const DEFAULT_BATCH_SIZE: u32 = 1000;

const ASSEMBLY_HOURS_PER_BATCH: f64 = 2.0;
const PACKAGING_HOURS_PER_BATCH: f64 = 1.0;
const COMPLETION_HOURS_PER_BATCH: f64 = 4.0;

/// High-volume, standardized production in fixed-size batches.
///
/// Machine time and completion time scale with the number of batches, not
/// with the number of units.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MassProductionStrategy {
    /// Always >= 1 (enforced by [`MassProductionStrategy::new`]).
    batch_size: u32,
}

impl MassProductionStrategy {
    pub fn new(batch_size: u32) -> DomainResult<Self> {
        if batch_size == 0 {
            return Err(DomainError::validation("batch_size must be greater than zero"));
        }
        Ok(Self { batch_size })
    }

    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }

    /// Ceiling of `order_quantity / batch_size`, rounding toward positive infinity.
    pub fn batches_for(&self, order_quantity: i64) -> i64 {
        let size = i64::from(self.batch_size);
        let whole = order_quantity.div_euclid(size);
        if order_quantity.rem_euclid(size) == 0 {
            whole
        } else {
            whole + 1
        }
    }
}

impl Default for MassProductionStrategy {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl ProductionStrategy for MassProductionStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::MassProduction
    }

    fn execute(&self, observer: &dyn StatusObserver) -> ExecutionRecord {
        observer.notify(&format!(
            "Starting mass production with batch size {}",
            self.batch_size
        ));
        observer.notify("Configuring assembly line for maximum throughput");
        observer.notify("Allocating resources for continuous production");

        ExecutionRecord::running(StrategySetting::BatchSize {
            batch_size: self.batch_size,
        })
    }

    fn calculate_resource_requirements(&self, order_quantity: i64) -> ResourceEstimate {
        let batches = self.batches_for(order_quantity) as f64;
        let quantity = order_quantity as f64;

        ResourceEstimate {
            raw_materials: RawMaterials {
                material_a: quantity * 0.3,
                material_b: quantity * 0.2,
                custom_material: None,
            },
            machine_time: MachineTime {
                assembly: batches * ASSEMBLY_HOURS_PER_BATCH,
                packaging: batches * PACKAGING_HOURS_PER_BATCH,
                quality_control: None,
                logistics: None,
            },
            estimated_completion_time: batches * COMPLETION_HOURS_PER_BATCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::RecordingObserver;
    use crate::test_support::assert_close;

    #[test]
    fn default_batch_size_is_one_thousand() {
        assert_eq!(MassProductionStrategy::default().batch_size(), 1000);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let err = MassProductionStrategy::new(0).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for zero batch size"),
        }
    }

    #[test]
    fn batches_round_up() {
        let strategy = MassProductionStrategy::new(1000).unwrap();
        assert_eq!(strategy.batches_for(2500), 3);
        assert_eq!(strategy.batches_for(3000), 3);
        assert_eq!(strategy.batches_for(1), 1);
        assert_eq!(strategy.batches_for(0), 0);
    }

    #[test]
    fn negative_quantities_round_toward_positive_infinity() {
        let strategy = MassProductionStrategy::new(1000).unwrap();
        assert_eq!(strategy.batches_for(-1), 0);
        assert_eq!(strategy.batches_for(-2500), -2);
    }

    #[test]
    fn execute_reports_running_with_batch_size() {
        let strategy = MassProductionStrategy::new(500).unwrap();
        let recorder = RecordingObserver::new();

        let record = strategy.execute(&recorder);

        assert_eq!(
            record,
            ExecutionRecord::running(StrategySetting::BatchSize { batch_size: 500 })
        );
        assert_eq!(
            recorder.lines(),
            vec![
                "Starting mass production with batch size 500",
                "Configuring assembly line for maximum throughput",
                "Allocating resources for continuous production",
            ]
        );
    }

    #[test]
    fn estimate_for_2500_units_in_batches_of_1000() {
        let strategy = MassProductionStrategy::new(1000).unwrap();

        let estimate = strategy.calculate_resource_requirements(2500);

        assert_close(estimate.raw_materials.material_a, 750.0);
        assert_close(estimate.raw_materials.material_b, 500.0);
        assert_eq!(estimate.raw_materials.custom_material, None);
        assert_eq!(estimate.machine_time.assembly, 6.0);
        assert_eq!(estimate.machine_time.packaging, 3.0);
        assert_eq!(estimate.machine_time.quality_control, None);
        assert_eq!(estimate.machine_time.logistics, None);
        assert_eq!(estimate.estimated_completion_time, 12.0);
    }
}
