use super::{SoilType, WeatherType};
use crate::storage::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertilizerDose {
    #[serde(rename = "type")]
    pub fertilizer_type: String,
    pub npk_ratio: String,
    pub application: String,
    pub timing: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrigationPlan {
    pub frequency: String,
    pub amount: String,
    pub method: String,
    pub schedule: Vec<String>,
}

impl IrrigationPlan {
    /// Every field populated and at least one watering slot.
    pub fn is_complete(&self) -> bool {
        !self.frequency.is_empty()
            && !self.amount.is_empty()
            && !self.method.is_empty()
            && !self.schedule.is_empty()
            && self.schedule.iter().all(|s| !s.is_empty())
    }
}

/// Fertilizer and irrigation bundle for one soil/weather combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvicePlan {
    pub fertilizers: Vec<FertilizerDose>,
    pub irrigation: IrrigationPlan,
}

/// A generated plan kept in the advice history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceRecord {
    pub id: String,
    pub soil_type: SoilType,
    pub weather_type: WeatherType,
    #[serde(default)]
    pub problem: String,
    pub plan: AdvicePlan,
    pub created_at: DateTime<Utc>,
}

impl Entity for AdviceRecord {
    fn id(&self) -> &str {
        &self.id
    }
}
