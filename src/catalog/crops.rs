use crate::models::SoilType::{Clay, Loamy, Sandy};
use crate::models::{CropCalendarEntry, MonthRange};
use chrono::Month;

/// Seasonal crop calendar, in display order.
pub fn crop_calendar() -> Vec<CropCalendarEntry> {
    vec![
        CropCalendarEntry::new(
            "Rice",
            MonthRange::new(Month::June, Month::July),
            MonthRange::new(Month::November, Month::December),
            "120-150 days",
        )
        .with_soils(&[Clay, Loamy])
        .with_notes("Requires continuous water supply"),
        CropCalendarEntry::new(
            "Wheat",
            MonthRange::new(Month::November, Month::December),
            MonthRange::new(Month::March, Month::April),
            "120-140 days",
        )
        .with_soils(&[Loamy, Sandy])
        .with_notes("Cool season crop, drought tolerant"),
        CropCalendarEntry::new(
            "Maize/Corn",
            MonthRange::new(Month::June, Month::July),
            MonthRange::new(Month::October, Month::November),
            "90-120 days",
        )
        .with_soils(&[Loamy, Sandy])
        .with_notes("Requires warm weather and good drainage"),
        CropCalendarEntry::new(
            "Cotton",
            MonthRange::new(Month::April, Month::May),
            MonthRange::new(Month::October, Month::January),
            "180-200 days",
        )
        .with_soils(&[Sandy, Loamy])
        .with_notes("Long growing season, heat loving"),
        CropCalendarEntry::new(
            "Sugarcane",
            MonthRange::new(Month::February, Month::April),
            MonthRange::new(Month::December, Month::March),
            "300-365 days",
        )
        .with_soils(&[Loamy, Clay])
        .with_notes("Perennial crop, requires irrigation"),
        CropCalendarEntry::new(
            "Tomato",
            MonthRange::new(Month::October, Month::November),
            MonthRange::new(Month::January, Month::March),
            "90-120 days",
        )
        .with_soils(&[Loamy, Sandy])
        .with_notes("Sensitive to frost, needs support"),
        CropCalendarEntry::new(
            "Onion",
            MonthRange::new(Month::November, Month::December),
            MonthRange::new(Month::March, Month::April),
            "120-150 days",
        )
        .with_soils(&[Sandy, Loamy])
        .with_notes("Cool season crop, shallow rooted"),
        CropCalendarEntry::new(
            "Potato",
            MonthRange::new(Month::October, Month::November),
            MonthRange::new(Month::January, Month::February),
            "90-120 days",
        )
        .with_soils(&[Sandy, Loamy])
        .with_notes("Cool weather crop, avoid waterlogging"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_crop_has_parsable_duration() {
        for crop in crop_calendar() {
            let d = crop.duration_days();
            assert!(
                d.max_days.or(d.min_days).is_some(),
                "Unparsable duration for {}",
                crop.crop_name
            );
        }
    }

    #[test]
    fn crop_names_are_unique() {
        let crops = crop_calendar();
        for (i, a) in crops.iter().enumerate() {
            assert!(crops[i + 1..].iter().all(|b| b.crop_name != a.crop_name));
        }
    }
}
