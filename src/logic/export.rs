use super::{AdviceHistory, CalendarEngine, ProfileRegistry};
use crate::error::Result;
use crate::models::{AdviceRecord, FarmProfile, ScheduledPlanting};
use crate::storage::Clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the user has entered, as one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportBundle {
    pub exported_at: DateTime<Utc>,
    pub profiles: Vec<FarmProfile>,
    pub active_profile_id: Option<String>,
    pub scheduled_plantings: Vec<ScheduledPlanting>,
    pub advice_history: Vec<AdviceRecord>,
}

impl ExportBundle {
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn export_snapshot(
    profiles: &ProfileRegistry,
    calendar: &CalendarEngine,
    history: &AdviceHistory,
    clock: &dyn Clock,
) -> ExportBundle {
    ExportBundle {
        exported_at: clock.now(),
        profiles: profiles.list_profiles(),
        // Only a pointer that still resolves is exported.
        active_profile_id: profiles.current_profile().map(|p| p.id),
        scheduled_plantings: calendar.list_scheduled(None),
        advice_history: history.list(),
    }
}
