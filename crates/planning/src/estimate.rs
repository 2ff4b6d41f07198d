//! Planning outputs: execution records and resource estimates.

use serde::{Deserialize, Serialize};

use forgeplan_core::{DomainError, ValueObject};

use crate::kind::StrategyKind;

/// Lifecycle status reported by an executed strategy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    Running,
}

/// The single configuration parameter a strategy was executed with.
///
/// Flattened into [`ExecutionRecord`], so the field name on the wire is the
/// parameter name (`batch_size`, `customization_level`, `priority_level`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrategySetting {
    BatchSize { batch_size: u32 },
    CustomizationLevel { customization_level: i32 },
    PriorityLevel { priority_level: i32 },
}

impl StrategySetting {
    /// The only strategy variant that carries this parameter.
    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategySetting::BatchSize { .. } => StrategyKind::MassProduction,
            StrategySetting::CustomizationLevel { .. } => StrategyKind::CustomBatch,
            StrategySetting::PriorityLevel { .. } => StrategyKind::OnDemand,
        }
    }
}

/// Result of executing a strategy.
///
/// Serializes as `{"strategy": "mass_production", "batch_size": 1000, "status": "running"}`.
/// Deserialization rejects records whose `strategy` does not match the
/// parameter they carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExecutionRecordWire")]
pub struct ExecutionRecord {
    pub strategy: StrategyKind,
    #[serde(flatten)]
    pub setting: StrategySetting,
    pub status: ExecutionStatus,
}

impl ExecutionRecord {
    /// A running record; the strategy kind follows from `setting`.
    pub fn running(setting: StrategySetting) -> Self {
        Self {
            strategy: setting.kind(),
            setting,
            status: ExecutionStatus::Running,
        }
    }
}

#[derive(Deserialize)]
struct ExecutionRecordWire {
    strategy: StrategyKind,
    #[serde(flatten)]
    setting: StrategySetting,
    status: ExecutionStatus,
}

impl TryFrom<ExecutionRecordWire> for ExecutionRecord {
    type Error = DomainError;

    fn try_from(wire: ExecutionRecordWire) -> Result<Self, Self::Error> {
        if wire.setting.kind() != wire.strategy {
            return Err(DomainError::validation(format!(
                "strategy {} does not take setting {:?}",
                wire.strategy, wire.setting
            )));
        }
        Ok(Self {
            strategy: wire.strategy,
            setting: wire.setting,
            status: wire.status,
        })
    }
}

impl ValueObject for ExecutionRecord {}

/// Raw material quantities (units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterials {
    pub material_a: f64,
    pub material_b: f64,
    /// Only custom batches consume the custom material.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_material: Option<f64>,
}

impl RawMaterials {
    pub fn total(&self) -> f64 {
        self.material_a + self.material_b + self.custom_material.unwrap_or(0.0)
    }
}

/// Machine time per station (hours).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineTime {
    pub assembly: f64,
    pub packaging: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_control: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logistics: Option<f64>,
}

impl MachineTime {
    pub fn total(&self) -> f64 {
        self.assembly
            + self.packaging
            + self.quality_control.unwrap_or(0.0)
            + self.logistics.unwrap_or(0.0)
    }
}

/// Resources predicted for one order under one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEstimate {
    pub raw_materials: RawMaterials,
    pub machine_time: MachineTime,
    /// Hours until the order is expected to complete.
    pub estimated_completion_time: f64,
}

impl ValueObject for ResourceEstimate {}
