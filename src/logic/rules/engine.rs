use super::{
    fallback::{ExactMatchRule, FirstForSoilRule, ModerateFallbackRule},
    table::builtin_table,
    AdviceEntry, AdviceRule,
};
use crate::error::{CropWiseError, Result};
use crate::models::{AdvicePlan, SoilType, WeatherType};
use tracing::{debug, error};

/// Outcome of a lookup, with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub plan: AdvicePlan,
    pub rule_id: &'static str,
    pub matched_weather: WeatherType,
}

pub struct AdviceResolver {
    table: Vec<AdviceEntry>,
    rules: Vec<Box<dyn AdviceRule>>,
}

impl AdviceResolver {
    pub fn new() -> Self {
        Self::with_table(builtin_table())
    }

    pub fn with_table(table: Vec<AdviceEntry>) -> Self {
        let rules: Vec<Box<dyn AdviceRule>> = vec![
            Box::new(ExactMatchRule),
            Box::new(ModerateFallbackRule),
            Box::new(FirstForSoilRule),
        ];

        Self { table, rules }
    }

    /// Fertilizer and irrigation plan for the given conditions.
    pub fn resolve(&self, soil: SoilType, weather: WeatherType) -> Result<AdvicePlan> {
        self.resolve_with_rule(soil, weather).map(|r| r.plan)
    }

    /// Like [`resolve`](Self::resolve), also reporting which rule matched.
    ///
    /// Fails with `NotFound` only when the soil type has no rows at all,
    /// which means the reference table is incomplete.
    pub fn resolve_with_rule(&self, soil: SoilType, weather: WeatherType) -> Result<Resolution> {
        let matched = self.rules.iter().find_map(|rule| {
            rule.lookup(&self.table, soil, weather)
                .map(|entry| (rule.id(), entry))
        });

        let Some((rule_id, entry)) = matched else {
            error!(
                soil_type = %soil,
                weather_type = %weather,
                "Advice table has no rows for soil type"
            );
            return Err(CropWiseError::NotFound(format!(
                "no advice defined for soil type '{}'",
                soil
            )));
        };

        if entry.weather_type != weather {
            debug!(
                soil_type = %soil,
                requested = %weather,
                matched = %entry.weather_type,
                rule = rule_id,
                "Advice resolved through fallback"
            );
        }

        Ok(Resolution {
            plan: entry.plan.clone(),
            rule_id,
            matched_weather: entry.weather_type,
        })
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for AdviceResolver {
    fn default() -> Self {
        Self::new()
    }
}
