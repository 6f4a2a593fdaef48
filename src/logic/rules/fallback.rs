use super::{AdviceEntry, AdviceRule};
use crate::models::{SoilType, WeatherType};

/// Row keyed by exactly the requested soil and weather.
pub struct ExactMatchRule;

impl AdviceRule for ExactMatchRule {
    fn id(&self) -> &'static str {
        "exact_match"
    }

    fn name(&self) -> &'static str {
        "Exact Soil and Weather"
    }

    fn lookup<'a>(
        &self,
        table: &'a [AdviceEntry],
        soil: SoilType,
        weather: WeatherType,
    ) -> Option<&'a AdviceEntry> {
        table
            .iter()
            .find(|e| e.soil_type == soil && e.weather_type == weather)
    }
}

/// Moderate-weather row for the soil, used when the requested weather has
/// no row of its own.
pub struct ModerateFallbackRule;

impl AdviceRule for ModerateFallbackRule {
    fn id(&self) -> &'static str {
        "moderate_fallback"
    }

    fn name(&self) -> &'static str {
        "Moderate Weather Fallback"
    }

    fn lookup<'a>(
        &self,
        table: &'a [AdviceEntry],
        soil: SoilType,
        _weather: WeatherType,
    ) -> Option<&'a AdviceEntry> {
        table
            .iter()
            .find(|e| e.soil_type == soil && e.weather_type == WeatherType::Moderate)
    }
}

/// First row defined for the soil, in table order.
pub struct FirstForSoilRule;

impl AdviceRule for FirstForSoilRule {
    fn id(&self) -> &'static str {
        "first_for_soil"
    }

    fn name(&self) -> &'static str {
        "First Entry for Soil"
    }

    fn lookup<'a>(
        &self,
        table: &'a [AdviceEntry],
        soil: SoilType,
        _weather: WeatherType,
    ) -> Option<&'a AdviceEntry> {
        table.iter().find(|e| e.soil_type == soil)
    }
}
