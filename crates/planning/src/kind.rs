use core::str::FromStr;
use serde::{Deserialize, Serialize};

use forgeplan_core::DomainError;

/// Identifies one of the production strategy variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    MassProduction,
    CustomBatch,
    OnDemand,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::MassProduction,
        StrategyKind::CustomBatch,
        StrategyKind::OnDemand,
    ];

    /// Fixed strategy name reported in execution records.
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::MassProduction => "mass_production",
            StrategyKind::CustomBatch => "custom_batch",
            StrategyKind::OnDemand => "on_demand",
        }
    }

    /// Name of the implementing type, used in change notices.
    pub fn type_name(self) -> &'static str {
        match self {
            StrategyKind::MassProduction => "MassProductionStrategy",
            StrategyKind::CustomBatch => "CustomBatchStrategy",
            StrategyKind::OnDemand => "OnDemandProductionStrategy",
        }
    }
}

impl core::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = DomainError;

    /// Accepts canonical names and the short operator aliases (`mass`, `custom`, `ondemand`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mass_production" | "mass" => Ok(StrategyKind::MassProduction),
            "custom_batch" | "custom" => Ok(StrategyKind::CustomBatch),
            "on_demand" | "ondemand" | "on-demand" => Ok(StrategyKind::OnDemand),
            other => Err(DomainError::unknown_strategy(other)),
        }
    }
}
