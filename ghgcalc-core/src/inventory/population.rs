//! Regional population parameters

use crate::categories::{BySettlement, Settlement};
use serde::{Deserialize, Serialize};

/// Regional population and its split across settlement classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationParameters {
    /// 2015 regional population
    /// unit: persons
    /// default: 5,717,000
    pub total: f64,

    /// Share of the population living in each settlement class
    /// unit: %
    /// default: urban 27.7, suburban 58.4, rural 13.9
    pub settlement_percent: BySettlement<f64>,
}

impl Default for PopulationParameters {
    fn default() -> Self {
        Self {
            total: 5_717_000.0,
            settlement_percent: BySettlement::new(27.7, 58.4, 13.9),
        }
    }
}

impl PopulationParameters {
    /// Baseline population of one settlement class
    pub fn in_settlement(&self, settlement: Settlement) -> f64 {
        self.total * self.settlement_percent.get(settlement) / 100.0
    }
}
