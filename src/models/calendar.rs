use super::SoilType;
use crate::storage::Entity;
use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// The twelve months in calendar order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

pub fn month_of(date: NaiveDate) -> Month {
    MONTHS[date.month0() as usize]
}

/// Three-letter token, e.g. "Oct".
pub fn month_token(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// Inclusive span over the month cycle. `start` later in the year than
/// `end` means the range wraps through December.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: Month,
    pub end: Month,
}

impl MonthRange {
    pub const fn new(start: Month, end: Month) -> Self {
        Self { start, end }
    }

    pub fn wraps(&self) -> bool {
        self.start.number_from_month() > self.end.number_from_month()
    }
}

impl std::fmt::Display for MonthRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", month_token(self.start), month_token(self.end))
    }
}

/// Growing-time bounds parsed from a description such as "120-150 days".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropDuration {
    pub min_days: Option<u32>,
    pub max_days: Option<u32>,
}

impl CropDuration {
    pub fn parse(description: &str) -> Self {
        let mut parts = description.splitn(2, '-');
        let min_days = parts.next().and_then(leading_number);
        let max_days = parts.next().and_then(leading_number);
        Self { min_days, max_days }
    }
}

fn leading_number(part: &str) -> Option<u32> {
    part.split_whitespace().next()?.parse().ok()
}

/// Static reference row of the seasonal crop calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropCalendarEntry {
    pub crop_name: String,
    pub planting_range: MonthRange,
    pub harvest_range: MonthRange,
    pub duration: String,
    pub best_soils: Vec<SoilType>,
    pub notes: String,
}

impl CropCalendarEntry {
    pub fn new(
        crop_name: &str,
        planting_range: MonthRange,
        harvest_range: MonthRange,
        duration: &str,
    ) -> Self {
        Self {
            crop_name: crop_name.to_string(),
            planting_range,
            harvest_range,
            duration: duration.to_string(),
            best_soils: Vec::new(),
            notes: String::new(),
        }
    }

    pub fn with_soils(mut self, soils: &[SoilType]) -> Self {
        self.best_soils = soils.to_vec();
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    pub fn duration_days(&self) -> CropDuration {
        CropDuration::parse(&self.duration)
    }

    pub fn suits(&self, soil: SoilType) -> bool {
        self.best_soils.contains(&soil)
    }
}

/// A crop the user has put on their own planting calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPlanting {
    pub id: String,
    pub crop_name: String,
    pub planting_date: NaiveDate,
    pub projected_harvest_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
}

impl Entity for ScheduledPlanting {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_parses_range() {
        let d = CropDuration::parse("120-150 days");
        assert_eq!(d.min_days, Some(120));
        assert_eq!(d.max_days, Some(150));
    }

    #[test]
    fn duration_parses_single_value() {
        let d = CropDuration::parse("90 days");
        assert_eq!(d.min_days, Some(90));
        assert_eq!(d.max_days, None);
    }

    #[test]
    fn duration_tolerates_garbage() {
        let d = CropDuration::parse("90-many days");
        assert_eq!(d.min_days, Some(90));
        assert_eq!(d.max_days, None);

        let d = CropDuration::parse("a season");
        assert_eq!(d.min_days, None);
        assert_eq!(d.max_days, None);
    }

    #[test]
    fn month_of_and_token() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
        assert_eq!(month_of(date), Month::October);
        assert_eq!(month_token(month_of(date)), "Oct");
    }

    #[test]
    fn month_range_wraps() {
        assert!(MonthRange::new(Month::October, Month::January).wraps());
        assert!(!MonthRange::new(Month::June, Month::August).wraps());
        assert!(!MonthRange::new(Month::May, Month::May).wraps());
        assert_eq!(
            MonthRange::new(Month::December, Month::March).to_string(),
            "Dec-Mar"
        );
    }

    #[test]
    fn scheduled_planting_omits_missing_profile() {
        let planting = ScheduledPlanting {
            id: "1".into(),
            crop_name: "Rice".into(),
            planting_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            projected_harvest_date: NaiveDate::from_ymd_opt(2024, 10, 29).unwrap(),
            notes: String::new(),
            profile_id: None,
        };
        let json = serde_json::to_string(&planting).unwrap();
        assert!(!json.contains("profile_id"));
        assert!(json.contains("2024-06-01"));
    }
}
