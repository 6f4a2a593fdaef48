//! Built-in fertilizer and irrigation reference table.
//!
//! The table is deliberately sparse: not every soil has a row for every
//! weather pattern. Lookups fall back through the rule chain in
//! [`super::engine`]. Every soil type must have at least one row.

use super::AdviceEntry;
use crate::models::{AdvicePlan, FertilizerDose, IrrigationPlan, SoilType, WeatherType};

fn dose(
    fertilizer_type: &str,
    npk_ratio: &str,
    application: &str,
    timing: &str,
    amount: &str,
) -> FertilizerDose {
    FertilizerDose {
        fertilizer_type: fertilizer_type.to_string(),
        npk_ratio: npk_ratio.to_string(),
        application: application.to_string(),
        timing: timing.to_string(),
        amount: amount.to_string(),
    }
}

fn irrigation(frequency: &str, amount: &str, method: &str, schedule: &[&str]) -> IrrigationPlan {
    IrrigationPlan {
        frequency: frequency.to_string(),
        amount: amount.to_string(),
        method: method.to_string(),
        schedule: schedule.iter().map(|s| s.to_string()).collect(),
    }
}

fn entry(
    soil_type: SoilType,
    weather_type: WeatherType,
    fertilizers: Vec<FertilizerDose>,
    irrigation: IrrigationPlan,
) -> AdviceEntry {
    AdviceEntry {
        soil_type,
        weather_type,
        plan: AdvicePlan {
            fertilizers,
            irrigation,
        },
    }
}

pub fn builtin_table() -> Vec<AdviceEntry> {
    vec![
        // Clay
        entry(
            SoilType::Clay,
            WeatherType::Dry,
            vec![
                dose(
                    "Organic Compost",
                    "3-2-2",
                    "Broadcasting before planting",
                    "Pre-season",
                    "2-3 tons/hectare",
                ),
                dose(
                    "NPK Complex",
                    "10-26-26",
                    "Basal application",
                    "At sowing",
                    "150-200 kg/hectare",
                ),
            ],
            irrigation(
                "Every 7-10 days",
                "25-30mm",
                "Drip irrigation recommended",
                &["Early morning (6-8 AM)", "Evening (5-7 PM)"],
            ),
        ),
        entry(
            SoilType::Clay,
            WeatherType::Humid,
            vec![
                dose(
                    "Potash Rich Fertilizer",
                    "12-12-24",
                    "Split application",
                    "Vegetative stage",
                    "100-120 kg/hectare",
                ),
                dose(
                    "Calcium Ammonium Nitrate",
                    "27-0-0",
                    "Top dressing",
                    "Flowering stage",
                    "50-75 kg/hectare",
                ),
            ],
            irrigation(
                "Every 10-14 days",
                "15-20mm",
                "Furrow irrigation",
                &["Morning (7-9 AM)"],
            ),
        ),
        // Sandy
        entry(
            SoilType::Sandy,
            WeatherType::Dry,
            vec![
                dose(
                    "Slow Release NPK",
                    "15-15-15",
                    "Deep placement",
                    "Pre-planting",
                    "200-250 kg/hectare",
                ),
                dose(
                    "Vermicompost",
                    "2-1-1",
                    "Soil mixing",
                    "Land preparation",
                    "3-4 tons/hectare",
                ),
            ],
            irrigation(
                "Every 3-4 days",
                "20-25mm",
                "Sprinkler system",
                &["Early morning (5-7 AM)", "Late evening (6-8 PM)"],
            ),
        ),
        entry(
            SoilType::Sandy,
            WeatherType::Humid,
            vec![
                dose(
                    "Balanced NPK",
                    "20-20-20",
                    "Fertigation",
                    "Weekly during growth",
                    "100-150 kg/hectare",
                ),
                dose(
                    "Micronutrient Mix",
                    "0-0-0+Zn,B,Fe",
                    "Foliar spray",
                    "Vegetative stage",
                    "2-3 kg/hectare",
                ),
            ],
            irrigation(
                "Every 5-7 days",
                "15-18mm",
                "Drip irrigation",
                &["Morning (6-8 AM)"],
            ),
        ),
        // Loamy
        entry(
            SoilType::Loamy,
            WeatherType::Dry,
            vec![
                dose(
                    "DAP (Di-Ammonium Phosphate)",
                    "18-46-0",
                    "Basal dose",
                    "At sowing",
                    "100-125 kg/hectare",
                ),
                dose(
                    "Farmyard Manure",
                    "0.5-0.2-0.5",
                    "Pre-planting incorporation",
                    "Land preparation",
                    "8-10 tons/hectare",
                ),
            ],
            irrigation(
                "Every 5-7 days",
                "25-30mm",
                "Flood irrigation",
                &["Morning (7-9 AM)"],
            ),
        ),
        entry(
            SoilType::Loamy,
            WeatherType::Moderate,
            vec![
                dose(
                    "NPK Complex",
                    "14-28-14",
                    "Broadcasting with incorporation",
                    "Pre-sowing",
                    "150-175 kg/hectare",
                ),
                dose(
                    "Urea",
                    "46-0-0",
                    "Split application",
                    "Top dressing",
                    "100-120 kg/hectare",
                ),
            ],
            irrigation(
                "Every 7-10 days",
                "20-25mm",
                "Sprinkler irrigation",
                &["Morning (6-8 AM)", "Evening (5-7 PM)"],
            ),
        ),
        // Silty
        entry(
            SoilType::Silty,
            WeatherType::Moderate,
            vec![
                dose(
                    "Balanced NPK",
                    "19-19-19",
                    "Broadcasting with light incorporation",
                    "Pre-sowing",
                    "125-150 kg/hectare",
                ),
                dose(
                    "Neem Coated Urea",
                    "46-0-0",
                    "Split top dressing",
                    "Tillering and flowering",
                    "80-100 kg/hectare",
                ),
            ],
            irrigation(
                "Every 6-8 days",
                "20-25mm",
                "Furrow irrigation",
                &["Morning (6-8 AM)"],
            ),
        ),
        entry(
            SoilType::Silty,
            WeatherType::Rainy,
            vec![
                dose(
                    "Gypsum",
                    "0-0-0+Ca,S",
                    "Surface application to improve structure",
                    "Before monsoon onset",
                    "250-500 kg/hectare",
                ),
                dose(
                    "Muriate of Potash",
                    "0-0-60",
                    "Basal application",
                    "At sowing",
                    "50-60 kg/hectare",
                ),
            ],
            irrigation(
                "Only during dry spells longer than 10 days",
                "10-15mm",
                "Surface drainage with supplemental furrow irrigation",
                &["Morning (7-9 AM)"],
            ),
        ),
    ]
}
