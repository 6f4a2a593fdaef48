pub mod engine;
pub mod fallback;
pub mod table;

pub use engine::{AdviceResolver, Resolution};

use crate::models::{AdvicePlan, SoilType, WeatherType};

/// One row of the sparse soil × weather advice table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceEntry {
    pub soil_type: SoilType,
    pub weather_type: WeatherType,
    pub plan: AdvicePlan,
}

/// A lookup strategy over the advice table.
pub trait AdviceRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Return the matching table row, if this rule applies
    fn lookup<'a>(
        &self,
        table: &'a [AdviceEntry],
        soil: SoilType,
        weather: WeatherType,
    ) -> Option<&'a AdviceEntry>;
}
