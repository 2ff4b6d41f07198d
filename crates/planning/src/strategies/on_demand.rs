use crate::estimate::{ExecutionRecord, MachineTime, RawMaterials, ResourceEstimate, StrategySetting};
use crate::kind::StrategyKind;
use crate::observer::StatusObserver;
use crate::strategy::ProductionStrategy;

pub const DEFAULT_PRIORITY_LEVEL: i32 = 3;

/// Just-in-time production for individual orders.
///
/// Priority drives a rush factor of `priority_level / 5`, which scales
/// assembly time and completion time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OnDemandProductionStrategy {
    priority_level: i32,
}

impl OnDemandProductionStrategy {
    pub fn new(priority_level: i32) -> Self {
        Self { priority_level }
    }

    pub fn priority_level(&self) -> i32 {
        self.priority_level
    }

    pub fn rush_factor(&self) -> f64 {
        f64::from(self.priority_level) / 5.0
    }
}

impl Default for OnDemandProductionStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_PRIORITY_LEVEL)
    }
}

impl ProductionStrategy for OnDemandProductionStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::OnDemand
    }

    fn execute(&self, observer: &dyn StatusObserver) -> ExecutionRecord {
        observer.notify(&format!(
            "Starting on-demand production with priority level {}",
            self.priority_level
        ));
        observer.notify("Configuring just-in-time production line");
        observer.notify("Minimizing work-in-progress inventory");

        ExecutionRecord::running(StrategySetting::PriorityLevel {
            priority_level: self.priority_level,
        })
    }

    fn calculate_resource_requirements(&self, order_quantity: i64) -> ResourceEstimate {
        let rush_factor = self.rush_factor();
        let quantity = order_quantity as f64;

        ResourceEstimate {
            raw_materials: RawMaterials {
                material_a: quantity * 0.35,
                material_b: quantity * 0.3,
                custom_material: None,
            },
            machine_time: MachineTime {
                assembly: quantity * 0.2 * rush_factor,
                packaging: quantity * 0.15,
                quality_control: None,
                logistics: Some(quantity * 0.12),
            },
            estimated_completion_time: quantity * 0.5 * rush_factor,
        }
    }
}
