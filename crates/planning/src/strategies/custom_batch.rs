use crate::estimate::{ExecutionRecord, MachineTime, RawMaterials, ResourceEstimate, StrategySetting};
use crate::kind::StrategyKind;
use crate::observer::StatusObserver;
use crate::strategy::ProductionStrategy;

pub const DEFAULT_CUSTOMIZATION_LEVEL: i32 = 2;

/// Customized batch production.
///
/// Each customization level adds 10% to the customization-sensitive inputs
/// (`material_a`, `custom_material`, assembly and completion time). The level is
/// conceptually 1–5 but is not range-checked.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CustomBatchStrategy {
    customization_level: i32,
}

impl CustomBatchStrategy {
    pub fn new(customization_level: i32) -> Self {
        Self {
            customization_level,
        }
    }

    pub fn customization_level(&self) -> i32 {
        self.customization_level
    }

    pub fn customization_factor(&self) -> f64 {
        1.0 + f64::from(self.customization_level) * 0.1
    }
}

impl Default for CustomBatchStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_CUSTOMIZATION_LEVEL)
    }
}

impl ProductionStrategy for CustomBatchStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::CustomBatch
    }

    fn execute(&self, observer: &dyn StatusObserver) -> ExecutionRecord {
        observer.notify(&format!(
            "Starting custom batch production with customization level {}",
            self.customization_level
        ));
        observer.notify("Configuring assembly for precision and customization");
        observer.notify("Loading custom specifications for this batch");

        ExecutionRecord::running(StrategySetting::CustomizationLevel {
            customization_level: self.customization_level,
        })
    }

    fn calculate_resource_requirements(&self, order_quantity: i64) -> ResourceEstimate {
        let factor = self.customization_factor();
        let quantity = order_quantity as f64;

        ResourceEstimate {
            raw_materials: RawMaterials {
                material_a: quantity * factor * 0.25,
                material_b: quantity * 0.2,
                custom_material: Some(quantity * factor * 0.15),
            },
            machine_time: MachineTime {
                assembly: quantity * 0.1 * factor,
                packaging: quantity * 0.05,
                quality_control: Some(quantity * 0.08),
                logistics: None,
            },
            estimated_completion_time: quantity * 0.15 * factor,
        }
    }
}
