use crate::catalog::crop_calendar;
use crate::error::{CropWiseError, Result};
use crate::models::{month_of, CropCalendarEntry, FarmProfile, MonthRange, ScheduledPlanting};
use crate::storage::{Clock, EntityStore, KeyValueStore};
use chrono::{Days, Month, NaiveDate};
use std::sync::Arc;
use tracing::info;

pub const CALENDAR_KEY: &str = "calendar";

/// Months covered by `range`, in cycle order. A wrapping range runs through
/// December and restarts at January.
pub fn months_in_range(range: &MonthRange) -> Vec<Month> {
    let mut months = vec![range.start];
    let mut month = range.start;
    while month != range.end {
        month = month.succ();
        months.push(month);
    }
    months
}

pub fn is_planting_season(entry: &CropCalendarEntry, today: NaiveDate) -> bool {
    months_in_range(&entry.planting_range).contains(&month_of(today))
}

pub fn is_harvest_season(entry: &CropCalendarEntry, today: NaiveDate) -> bool {
    months_in_range(&entry.harvest_range).contains(&month_of(today))
}

/// Planting date plus the longest parsable growing time, falling back to the
/// shortest.
pub fn project_harvest(planting_date: NaiveDate, entry: &CropCalendarEntry) -> Result<NaiveDate> {
    let duration = entry.duration_days();
    let days = duration.max_days.or(duration.min_days).ok_or_else(|| {
        CropWiseError::Config(format!(
            "crop '{}' has no parsable duration: '{}'",
            entry.crop_name, entry.duration
        ))
    })?;

    planting_date
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| {
            CropWiseError::Config(format!(
                "harvest date for '{}' is out of range",
                entry.crop_name
            ))
        })
}

/// Whether the clock's current month falls in a crop's planting or harvest window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonStatus {
    pub planting: bool,
    pub harvest: bool,
}

/// Crop catalog plus the user's persisted planting calendar.
pub struct CalendarEngine {
    catalog: Vec<CropCalendarEntry>,
    plantings: EntityStore<ScheduledPlanting>,
    clock: Arc<dyn Clock>,
}

impl CalendarEngine {
    pub fn new(backend: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self::with_catalog(backend, clock, crop_calendar())
    }

    pub fn with_catalog(
        backend: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        catalog: Vec<CropCalendarEntry>,
    ) -> Self {
        Self {
            catalog,
            plantings: EntityStore::new(backend, clock.clone(), CALENDAR_KEY),
            clock,
        }
    }

    pub fn crops(&self) -> &[CropCalendarEntry] {
        &self.catalog
    }

    pub fn find_crop(&self, name: &str) -> Option<&CropCalendarEntry> {
        let name = name.trim();
        self.catalog
            .iter()
            .find(|c| c.crop_name.eq_ignore_ascii_case(name))
    }

    /// Catalog order is kept. Without a profile every crop is returned.
    pub fn recommended_crops(&self, profile: Option<&FarmProfile>) -> Vec<&CropCalendarEntry> {
        match profile {
            None => self.catalog.iter().collect(),
            Some(p) => self.catalog.iter().filter(|c| c.suits(p.soil_type)).collect(),
        }
    }

    pub fn season_status(&self, entry: &CropCalendarEntry) -> SeasonStatus {
        let today = self.clock.today();
        SeasonStatus {
            planting: is_planting_season(entry, today),
            harvest: is_harvest_season(entry, today),
        }
    }

    pub fn schedule_crop(
        &self,
        entry: &CropCalendarEntry,
        planting_date: NaiveDate,
        profile_id: Option<&str>,
    ) -> Result<ScheduledPlanting> {
        let projected_harvest_date = project_harvest(planting_date, entry)?;
        let planting = self.plantings.create(|id| ScheduledPlanting {
            id,
            crop_name: entry.crop_name.clone(),
            planting_date,
            projected_harvest_date,
            notes: entry.notes.clone(),
            profile_id: profile_id.map(str::to_string),
        })?;
        info!(
            id = %planting.id,
            crop = %planting.crop_name,
            planting_date = %planting_date,
            harvest_date = %projected_harvest_date,
            "Scheduled planting"
        );
        Ok(planting)
    }

    /// Ascending by planting date. With a profile, only its own plantings.
    pub fn list_scheduled(&self, profile: Option<&FarmProfile>) -> Vec<ScheduledPlanting> {
        let mut plantings = self.plantings.load();
        if let Some(p) = profile {
            plantings.retain(|s| s.profile_id.as_deref() == Some(p.id.as_str()));
        }
        plantings.sort_by_key(|s| s.planting_date);
        plantings
    }

    /// Plantings recorded while no profile was active.
    pub fn unscoped_plantings(&self) -> Vec<ScheduledPlanting> {
        let mut plantings = self.plantings.load();
        plantings.retain(|s| s.profile_id.is_none());
        plantings.sort_by_key(|s| s.planting_date);
        plantings
    }

    pub fn remove_scheduled(&self, id: &str) -> Result<bool> {
        let removed = self.plantings.delete(id)?;
        if removed {
            info!(id, "Removed scheduled planting");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SoilType, WeatherType};
    use crate::storage::{FixedClock, MemoryStore};
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine_on(today: NaiveDate) -> CalendarEngine {
        CalendarEngine::new(Arc::new(MemoryStore::new()), Arc::new(FixedClock::on(today)))
    }

    fn profile(id: &str, soil_type: SoilType) -> FarmProfile {
        FarmProfile {
            id: id.to_string(),
            name: format!("Farm {id}"),
            soil_type,
            weather_type: WeatherType::Moderate,
            location: String::new(),
            notes: String::new(),
            created_at: Utc::now(),
            last_used: Utc::now(),
        }
    }

    #[test]
    fn wrapping_range_runs_through_december() {
        let range = MonthRange::new(Month::October, Month::January);
        assert_eq!(
            months_in_range(&range),
            vec![Month::October, Month::November, Month::December, Month::January]
        );
    }

    #[test]
    fn plain_range() {
        let range = MonthRange::new(Month::June, Month::August);
        assert_eq!(
            months_in_range(&range),
            vec![Month::June, Month::July, Month::August]
        );
        let single = MonthRange::new(Month::May, Month::May);
        assert_eq!(months_in_range(&single), vec![Month::May]);
    }

    #[test]
    fn cotton_harvest_season_wraps_into_january() {
        let engine = engine_on(date(2024, 1, 15));
        let cotton = engine.find_crop("cotton").unwrap();
        assert!(is_harvest_season(cotton, date(2024, 1, 15)));
        assert!(is_harvest_season(cotton, date(2024, 12, 1)));
        assert!(!is_harvest_season(cotton, date(2024, 2, 1)));
        assert!(!is_planting_season(cotton, date(2024, 1, 15)));

        let status = engine.season_status(cotton);
        assert!(status.harvest);
        assert!(!status.planting);
    }

    #[test]
    fn harvest_uses_longest_duration() {
        let engine = engine_on(date(2024, 1, 1));
        let onion = engine.find_crop("Onion").unwrap();
        assert_eq!(onion.duration, "120-150 days");
        assert_eq!(
            project_harvest(date(2024, 1, 10), onion).unwrap(),
            date(2024, 6, 8)
        );
    }

    #[test]
    fn harvest_falls_back_to_shortest() {
        let entry = CropCalendarEntry::new(
            "Radish",
            MonthRange::new(Month::September, Month::October),
            MonthRange::new(Month::October, Month::November),
            "45 days",
        );
        assert_eq!(
            project_harvest(date(2024, 9, 1), &entry).unwrap(),
            date(2024, 10, 16)
        );
    }

    #[test]
    fn harvest_without_duration_is_config_error() {
        let entry = CropCalendarEntry::new(
            "Mystery",
            MonthRange::new(Month::March, Month::April),
            MonthRange::new(Month::July, Month::August),
            "one season",
        );
        assert!(matches!(
            project_harvest(date(2024, 3, 1), &entry),
            Err(CropWiseError::Config(_))
        ));
    }

    #[test]
    fn recommendations_filter_by_soil_in_catalog_order() {
        let engine = engine_on(date(2024, 6, 1));
        assert_eq!(engine.recommended_crops(None).len(), engine.crops().len());

        let clay = profile("1", SoilType::Clay);
        let names: Vec<_> = engine
            .recommended_crops(Some(&clay))
            .into_iter()
            .map(|c| c.crop_name.as_str())
            .collect();
        assert_eq!(names, vec!["Rice", "Sugarcane"]);

        let silty = profile("2", SoilType::Silty);
        assert!(engine.recommended_crops(Some(&silty)).is_empty());
    }

    #[test]
    fn schedule_allows_duplicates_and_sorts_by_planting_date() {
        let engine = engine_on(date(2024, 6, 1));
        let rice = engine.find_crop("Rice").unwrap().clone();

        engine.schedule_crop(&rice, date(2024, 7, 1), None).unwrap();
        engine.schedule_crop(&rice, date(2024, 6, 5), None).unwrap();
        engine.schedule_crop(&rice, date(2024, 6, 5), None).unwrap();

        let listed = engine.list_scheduled(None);
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].planting_date, date(2024, 6, 5));
        assert_eq!(listed[2].planting_date, date(2024, 7, 1));
        assert_eq!(listed[2].projected_harvest_date, date(2024, 11, 28));
        assert_ne!(listed[0].id, listed[1].id);
    }

    #[test]
    fn listing_with_profile_hides_other_and_unscoped_plantings() {
        let engine = engine_on(date(2024, 6, 1));
        let wheat = engine.find_crop("Wheat").unwrap().clone();
        let mine = profile("10", SoilType::Loamy);

        engine.schedule_crop(&wheat, date(2024, 11, 1), Some("10")).unwrap();
        engine.schedule_crop(&wheat, date(2024, 11, 2), Some("20")).unwrap();
        engine.schedule_crop(&wheat, date(2024, 11, 3), None).unwrap();

        let scoped = engine.list_scheduled(Some(&mine));
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].profile_id.as_deref(), Some("10"));

        let unscoped = engine.unscoped_plantings();
        assert_eq!(unscoped.len(), 1);
        assert_eq!(unscoped[0].planting_date, date(2024, 11, 3));
        assert_eq!(engine.list_scheduled(None).len(), 3);
    }

    #[test]
    fn remove_scheduled_reports_unknown_ids() {
        let engine = engine_on(date(2024, 6, 1));
        let potato = engine.find_crop("potato").unwrap().clone();
        let planting = engine.schedule_crop(&potato, date(2024, 10, 5), None).unwrap();

        assert!(!engine.remove_scheduled("nope").unwrap());
        assert!(engine.remove_scheduled(&planting.id).unwrap());
        assert!(engine.list_scheduled(None).is_empty());
    }
}
