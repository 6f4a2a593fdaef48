use crate::error::{CropWiseError, Result};
use crate::models::{FarmProfile, ProfileDraft, ProfileUpdate, SoilType, WeatherType};
use crate::storage::{Clock, EntityStore, KeyValueStore};
use std::sync::Arc;
use tracing::{debug, info};

pub const PROFILES_KEY: &str = "profiles";
pub const ACTIVE_PROFILE_KEY: &str = "active-profile";

/// Farm profiles plus the single active-profile pointer.
pub struct ProfileRegistry {
    profiles: EntityStore<FarmProfile>,
    backend: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl ProfileRegistry {
    pub fn new(backend: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            profiles: EntityStore::new(backend.clone(), clock.clone(), PROFILES_KEY),
            backend,
            clock,
        }
    }

    pub fn list_profiles(&self) -> Vec<FarmProfile> {
        self.profiles.load()
    }

    /// Persisted pointer, whether or not it still resolves.
    pub fn active_profile_id(&self) -> Option<String> {
        match self.backend.get(ACTIVE_PROFILE_KEY) {
            Ok(Some(id)) if !id.is_empty() => Some(id),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read active profile, treating as none");
                None
            }
        }
    }

    /// Resolved against the stored collection on every call.
    pub fn current_profile(&self) -> Option<FarmProfile> {
        let id = self.active_profile_id()?;
        self.profiles.find(&id)
    }

    pub fn create_profile(&self, draft: ProfileDraft) -> Result<FarmProfile> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(CropWiseError::Validation("profile name is required".into()));
        }
        let soil_type = SoilType::parse(&draft.soil_type)?;
        let weather_type = WeatherType::parse(&draft.weather_type)?;

        let now = self.clock.now();
        let profile = self.profiles.create(|id| FarmProfile {
            id,
            name: name.to_string(),
            soil_type,
            weather_type,
            location: draft.location.trim().to_string(),
            notes: draft.notes.trim().to_string(),
            created_at: now,
            last_used: now,
        })?;

        self.set_active(&profile.id)?;
        info!(id = %profile.id, name = %profile.name, "Created farm profile");
        Ok(profile)
    }

    /// Edit fields of an existing profile. Unknown ids are a no-op.
    pub fn update_profile(&self, id: &str, changes: ProfileUpdate) -> Result<Option<FarmProfile>> {
        let name = match changes.name.as_deref().map(str::trim) {
            Some("") => {
                return Err(CropWiseError::Validation("profile name is required".into()));
            }
            other => other.map(str::to_string),
        };
        let soil_type = changes.soil_type.as_deref().map(SoilType::parse).transpose()?;
        let weather_type = changes
            .weather_type
            .as_deref()
            .map(WeatherType::parse)
            .transpose()?;

        let now = self.clock.now();
        let updated = self.profiles.update(id, |profile| {
            if let Some(name) = name {
                profile.name = name;
            }
            if let Some(soil) = soil_type {
                profile.soil_type = soil;
            }
            if let Some(weather) = weather_type {
                profile.weather_type = weather;
            }
            if let Some(location) = changes.location {
                profile.location = location.trim().to_string();
            }
            if let Some(notes) = changes.notes {
                profile.notes = notes.trim().to_string();
            }
            profile.last_used = now;
        })?;

        match &updated {
            Some(p) => info!(id = %p.id, "Updated farm profile"),
            None => debug!(id = %id, "Update for unknown profile ignored"),
        }
        Ok(updated)
    }

    /// Remove a profile, clearing the pointer if it was active.
    pub fn delete_profile(&self, id: &str) -> Result<()> {
        let removed = self.profiles.delete(id)?;
        if self.active_profile_id().as_deref() == Some(id) {
            self.backend.remove(ACTIVE_PROFILE_KEY)?;
        }
        if removed {
            info!(id = %id, "Deleted farm profile");
        } else {
            debug!(id = %id, "Delete for unknown profile ignored");
        }
        Ok(())
    }

    /// Activate a profile and stamp its `last_used`. Unknown ids are a no-op.
    pub fn switch_profile(&self, id: &str) -> Result<()> {
        let now = self.clock.now();
        let Some(profile) = self.profiles.update(id, |p| p.last_used = now)? else {
            debug!(id = %id, "Switch to unknown profile ignored");
            return Ok(());
        };
        self.set_active(&profile.id)?;
        info!(id = %profile.id, name = %profile.name, "Switched active profile");
        Ok(())
    }

    fn set_active(&self, id: &str) -> Result<()> {
        self.backend.set(ACTIVE_PROFILE_KEY, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::storage::{FixedClock, MemoryStore};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    fn registry() -> ProfileRegistry {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        ProfileRegistry::new(Arc::new(MemoryStore::new()), Arc::new(clock))
    }

    fn draft(name: &str) -> ProfileDraft {
        ProfileDraft::new(name, "loamy", "moderate")
            .with_location("Cuttack")
            .with_notes("north field")
    }

    #[test]
    fn create_sets_fields_and_activates() {
        let registry = registry();
        let profile = registry.create_profile(draft("Home Farm")).unwrap();

        assert_eq!(profile.name, "Home Farm");
        assert_eq!(profile.soil_type, SoilType::Loamy);
        assert_eq!(profile.weather_type, WeatherType::Moderate);
        assert_eq!(profile.location, "Cuttack");
        assert_eq!(profile.created_at, profile.last_used);
        assert_eq!(registry.current_profile(), Some(profile.clone()));
        assert_eq!(registry.list_profiles(), vec![profile]);
    }

    #[test]
    fn create_always_moves_pointer_to_new_profile() {
        let registry = registry();
        let first = registry.create_profile(draft("First")).unwrap();
        let second = registry.create_profile(draft("Second")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(registry.active_profile_id(), Some(second.id));
    }

    #[test]
    fn create_rejects_missing_fields() {
        let registry = registry();

        let missing_name = ProfileDraft::new("  ", "clay", "dry");
        assert!(matches!(
            registry.create_profile(missing_name),
            Err(CropWiseError::Validation(_))
        ));

        let missing_soil = ProfileDraft::new("Farm", "", "dry");
        assert!(matches!(
            registry.create_profile(missing_soil),
            Err(CropWiseError::Validation(_))
        ));

        let missing_weather = ProfileDraft::new("Farm", "clay", "");
        assert!(matches!(
            registry.create_profile(missing_weather),
            Err(CropWiseError::Validation(_))
        ));

        let unknown_soil = ProfileDraft::new("Farm", "gravel", "dry");
        assert!(matches!(
            registry.create_profile(unknown_soil),
            Err(CropWiseError::Validation(_))
        ));

        assert!(registry.list_profiles().is_empty());
        assert!(registry.current_profile().is_none());
    }

    #[test]
    fn deleting_active_profile_clears_pointer() {
        let registry = registry();
        let profile = registry.create_profile(draft("Only")).unwrap();

        registry.delete_profile(&profile.id).unwrap();

        assert!(registry.current_profile().is_none());
        assert!(registry.active_profile_id().is_none());
        assert!(registry.list_profiles().is_empty());
    }

    #[test]
    fn deleting_other_profile_keeps_current() {
        let registry = registry();
        let first = registry.create_profile(draft("First")).unwrap();
        let second = registry.create_profile(draft("Second")).unwrap();

        registry.delete_profile(&first.id).unwrap();

        assert_eq!(registry.current_profile(), Some(second));
        assert_eq!(registry.list_profiles().len(), 1);
    }

    #[test]
    fn delete_unknown_is_noop() {
        let registry = registry();
        let profile = registry.create_profile(draft("Farm")).unwrap();

        registry.delete_profile("does-not-exist").unwrap();

        assert_eq!(registry.current_profile(), Some(profile));
    }

    #[test]
    fn switch_updates_last_used() {
        let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let later = created + Duration::days(3);

        let first = ProfileRegistry::new(backend.clone(), Arc::new(FixedClock::new(created)))
            .create_profile(draft("First"))
            .unwrap();
        let registry = ProfileRegistry::new(backend.clone(), Arc::new(FixedClock::new(later)));
        registry.create_profile(draft("Second")).unwrap();

        registry.switch_profile(&first.id).unwrap();

        let current = registry.current_profile().unwrap();
        assert_eq!(current.id, first.id);
        assert_eq!(current.created_at, created);
        assert_eq!(current.last_used, later);
    }

    #[test]
    fn switch_unknown_is_noop() {
        let registry = registry();
        let profile = registry.create_profile(draft("Farm")).unwrap();

        registry.switch_profile("ghost").unwrap();

        assert_eq!(registry.current_profile(), Some(profile));
    }

    #[test]
    fn switch_twice_is_idempotent() {
        let registry = registry();
        let first = registry.create_profile(draft("First")).unwrap();
        registry.create_profile(draft("Second")).unwrap();

        registry.switch_profile(&first.id).unwrap();
        let after_once = (registry.current_profile(), registry.list_profiles());
        registry.switch_profile(&first.id).unwrap();
        let after_twice = (registry.current_profile(), registry.list_profiles());

        assert_eq!(after_once, after_twice);
        let names: Vec<_> = after_twice.1.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn current_profile_reflects_delete_by_other_handle() {
        let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let clock: Arc<dyn Clock> =
            Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
        let ui = ProfileRegistry::new(backend.clone(), clock.clone());
        let other = ProfileRegistry::new(backend, clock);

        let profile = ui.create_profile(draft("Farm")).unwrap();
        assert!(ui.current_profile().is_some());

        other.delete_profile(&profile.id).unwrap();
        assert!(ui.current_profile().is_none());
    }

    #[test]
    fn dangling_pointer_resolves_to_none() {
        let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        backend.set(ACTIVE_PROFILE_KEY, "12345").unwrap();
        let registry = ProfileRegistry::new(
            backend,
            Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())),
        );

        assert_eq!(registry.active_profile_id().as_deref(), Some("12345"));
        assert!(registry.current_profile().is_none());
    }

    #[test]
    fn update_profile_edits_fields() {
        let registry = registry();
        let profile = registry.create_profile(draft("Farm")).unwrap();

        let updated = registry
            .update_profile(
                &profile.id,
                ProfileUpdate {
                    name: Some("River Farm".into()),
                    soil_type: Some("clay".into()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "River Farm");
        assert_eq!(updated.soil_type, SoilType::Clay);
        assert_eq!(updated.weather_type, WeatherType::Moderate);
        assert_eq!(registry.current_profile(), Some(updated));
    }

    #[test]
    fn update_profile_validates_and_ignores_unknown() {
        let registry = registry();
        let profile = registry.create_profile(draft("Farm")).unwrap();

        let blank_name = ProfileUpdate {
            name: Some(" ".into()),
            ..Default::default()
        };
        assert!(matches!(
            registry.update_profile(&profile.id, blank_name),
            Err(CropWiseError::Validation(_))
        ));

        let bad_weather = ProfileUpdate {
            weather_type: Some("foggy".into()),
            ..Default::default()
        };
        assert!(matches!(
            registry.update_profile(&profile.id, bad_weather),
            Err(CropWiseError::Validation(_))
        ));

        let rename = ProfileUpdate {
            name: Some("New".into()),
            ..Default::default()
        };
        assert!(registry.update_profile("ghost", rename).unwrap().is_none());
        assert_eq!(registry.current_profile(), Some(profile));
    }

    #[test]
    fn state_round_trips_through_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cropwise.db");
        let clock: Arc<dyn Clock> =
            Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));

        let (profiles, active) = {
            let db: Arc<dyn KeyValueStore> = Arc::new(Database::open(&path).unwrap());
            let registry = ProfileRegistry::new(db, clock.clone());
            let first = registry.create_profile(draft("First")).unwrap();
            registry
                .create_profile(ProfileDraft::new("Second", "sandy", "dry"))
                .unwrap();
            registry.switch_profile(&first.id).unwrap();
            (registry.list_profiles(), registry.active_profile_id())
        };

        let db: Arc<dyn KeyValueStore> = Arc::new(Database::open(&path).unwrap());
        let reloaded = ProfileRegistry::new(db, clock);

        assert_eq!(reloaded.list_profiles(), profiles);
        assert_eq!(reloaded.active_profile_id(), active);
        assert_eq!(
            reloaded.current_profile().map(|p| p.name),
            Some("First".to_string())
        );
    }
}
