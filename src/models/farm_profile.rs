use crate::error::{CropWiseError, Result};
use crate::storage::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Sandy,
    Loamy,
    Silty,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
            SoilType::Silty => "Silty",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clay" => Some(SoilType::Clay),
            "sandy" | "sand" => Some(SoilType::Sandy),
            "loamy" | "loam" => Some(SoilType::Loamy),
            "silty" | "silt" => Some(SoilType::Silty),
            _ => None,
        }
    }

    /// Parse user input, rejecting empty or unknown values.
    pub fn parse(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(CropWiseError::Validation("soil type is required".into()));
        }
        Self::from_str(s).ok_or_else(|| {
            CropWiseError::Validation(format!(
                "unknown soil type '{}' (expected clay, sandy, loamy or silty)",
                s.trim()
            ))
        })
    }

    pub fn all() -> &'static [SoilType] {
        &[
            SoilType::Clay,
            SoilType::Sandy,
            SoilType::Loamy,
            SoilType::Silty,
        ]
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherType {
    Dry,
    Humid,
    Moderate,
    Rainy,
}

impl WeatherType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherType::Dry => "Dry",
            WeatherType::Humid => "Humid",
            WeatherType::Moderate => "Moderate",
            WeatherType::Rainy => "Rainy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dry" => Some(WeatherType::Dry),
            "humid" => Some(WeatherType::Humid),
            "moderate" => Some(WeatherType::Moderate),
            "rainy" | "rain" | "wet" => Some(WeatherType::Rainy),
            _ => None,
        }
    }

    /// Parse user input, rejecting empty or unknown values.
    pub fn parse(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(CropWiseError::Validation("weather type is required".into()));
        }
        Self::from_str(s).ok_or_else(|| {
            CropWiseError::Validation(format!(
                "unknown weather type '{}' (expected dry, humid, moderate or rainy)",
                s.trim()
            ))
        })
    }

    pub fn all() -> &'static [WeatherType] {
        &[
            WeatherType::Dry,
            WeatherType::Humid,
            WeatherType::Moderate,
            WeatherType::Rainy,
        ]
    }
}

impl std::fmt::Display for WeatherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmProfile {
    pub id: String,
    pub name: String,
    pub soil_type: SoilType,
    pub weather_type: WeatherType,
    pub location: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub last_used: DateTime<Utc>,
}

impl Entity for FarmProfile {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Raw user input for a new profile, validated by the registry.
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub name: String,
    pub soil_type: String,
    pub weather_type: String,
    pub location: String,
    pub notes: String,
}

impl ProfileDraft {
    pub fn new(name: &str, soil_type: &str, weather_type: &str) -> Self {
        Self {
            name: name.to_string(),
            soil_type: soil_type.to_string(),
            weather_type: weather_type.to_string(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }
}

/// Partial edit of an existing profile. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub soil_type: Option<String>,
    pub weather_type: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.soil_type.is_none()
            && self.weather_type.is_none()
            && self.location.is_none()
            && self.notes.is_none()
    }
}
