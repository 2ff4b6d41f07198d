//! Declarative strategy selection.
//!
//! A strategy can be described as JSON, e.g.
//! `{"strategy": "custom_batch", "customization_level": 4}`, or by name alone
//! (`mass`, `custom_batch`, ...), in which case the variant default applies.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use forgeplan_core::{DomainError, DomainResult};

use crate::kind::StrategyKind;
use crate::strategies::custom_batch::DEFAULT_CUSTOMIZATION_LEVEL;
use crate::strategies::mass_production::DEFAULT_BATCH_SIZE;
use crate::strategies::on_demand::DEFAULT_PRIORITY_LEVEL;
use crate::strategies::{CustomBatchStrategy, MassProductionStrategy, OnDemandProductionStrategy};
use crate::strategy::ProductionStrategy;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum StrategyConfig {
    MassProduction {
        #[serde(default = "default_batch_size")]
        batch_size: u32,
    },
    CustomBatch {
        #[serde(default = "default_customization_level")]
        customization_level: i32,
    },
    OnDemand {
        #[serde(default = "default_priority_level")]
        priority_level: i32,
    },
}

fn default_batch_size() -> u32 {
    DEFAULT_BATCH_SIZE
}

fn default_customization_level() -> i32 {
    DEFAULT_CUSTOMIZATION_LEVEL
}

fn default_priority_level() -> i32 {
    DEFAULT_PRIORITY_LEVEL
}

impl StrategyConfig {
    /// Configuration for `kind` with its default parameter.
    pub fn defaults_for(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::MassProduction => StrategyConfig::MassProduction {
                batch_size: DEFAULT_BATCH_SIZE,
            },
            StrategyKind::CustomBatch => StrategyConfig::CustomBatch {
                customization_level: DEFAULT_CUSTOMIZATION_LEVEL,
            },
            StrategyKind::OnDemand => StrategyConfig::OnDemand {
                priority_level: DEFAULT_PRIORITY_LEVEL,
            },
        }
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::invalid_configuration(e.to_string()))
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyConfig::MassProduction { .. } => StrategyKind::MassProduction,
            StrategyConfig::CustomBatch { .. } => StrategyKind::CustomBatch,
            StrategyConfig::OnDemand { .. } => StrategyKind::OnDemand,
        }
    }

    /// Construct the configured strategy.
    pub fn build(&self) -> DomainResult<Box<dyn ProductionStrategy>> {
        let strategy: Box<dyn ProductionStrategy> = match *self {
            StrategyConfig::MassProduction { batch_size } => {
                Box::new(MassProductionStrategy::new(batch_size)?)
            }
            StrategyConfig::CustomBatch {
                customization_level,
            } => Box::new(CustomBatchStrategy::new(customization_level)),
            StrategyConfig::OnDemand { priority_level } => {
                Box::new(OnDemandProductionStrategy::new(priority_level))
            }
        };
        Ok(strategy)
    }
}

impl FromStr for StrategyConfig {
    type Err = DomainError;

    /// Accepts either a JSON object or a bare strategy name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('{') {
            Self::from_json(trimmed)
        } else {
            trimmed.parse::<StrategyKind>().map(Self::defaults_for)
        }
    }
}
