use crate::error::Result;
use crate::models::{AdvicePlan, AdviceRecord, SoilType, WeatherType};
use crate::storage::{Clock, EntityStore, KeyValueStore};
use std::sync::Arc;

pub const ADVICE_HISTORY_KEY: &str = "advice-history";

/// Persisted log of generated fertilizer/irrigation advice.
pub struct AdviceHistory {
    records: EntityStore<AdviceRecord>,
    clock: Arc<dyn Clock>,
}

impl AdviceHistory {
    pub fn new(backend: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: EntityStore::new(backend, clock.clone(), ADVICE_HISTORY_KEY),
            clock,
        }
    }

    pub fn record(
        &self,
        soil_type: SoilType,
        weather_type: WeatherType,
        problem: &str,
        plan: AdvicePlan,
    ) -> Result<AdviceRecord> {
        let created_at = self.clock.now();
        let record = self.records.create(|id| AdviceRecord {
            id,
            soil_type,
            weather_type,
            problem: problem.trim().to_string(),
            plan,
            created_at,
        })?;
        tracing::info!(
            id = %record.id,
            soil_type = %soil_type,
            weather_type = %weather_type,
            "Recorded advice"
        );
        Ok(record)
    }

    /// Newest first.
    pub fn list(&self) -> Vec<AdviceRecord> {
        let mut records = self.records.load();
        records.reverse();
        records
    }

    pub fn clear(&self) -> Result<()> {
        self.records.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::AdviceResolver;
    use crate::storage::{FixedClock, MemoryStore};
    use chrono::NaiveDate;

    fn history() -> AdviceHistory {
        AdviceHistory::new(
            Arc::new(MemoryStore::new()),
            Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())),
        )
    }

    #[test]
    fn list_is_newest_first() {
        let history = history();
        let resolver = AdviceResolver::new();

        let plan = resolver.resolve(SoilType::Clay, WeatherType::Dry).unwrap();
        history
            .record(SoilType::Clay, WeatherType::Dry, "cracking soil", plan)
            .unwrap();
        let plan = resolver.resolve(SoilType::Sandy, WeatherType::Humid).unwrap();
        history
            .record(SoilType::Sandy, WeatherType::Humid, "", plan)
            .unwrap();

        let listed = history.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].soil_type, SoilType::Sandy);
        assert_eq!(listed[1].problem, "cracking soil");
    }

    #[test]
    fn clear_empties_history() {
        let history = history();
        let plan = AdviceResolver::new()
            .resolve(SoilType::Loamy, WeatherType::Dry)
            .unwrap();
        history.record(SoilType::Loamy, WeatherType::Dry, "", plan).unwrap();

        history.clear().unwrap();
        assert!(history.list().is_empty());
    }
}
