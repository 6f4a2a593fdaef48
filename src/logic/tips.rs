use crate::catalog::farming_tips;
use crate::error::{CropWiseError, Result};
use crate::models::{Language, Tip};
use crate::storage::KeyValueStore;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, warn};

pub fn viewed_tips_key(language: Language) -> String {
    format!("viewed-tips-{}", language.code())
}

pub fn current_tip_key(language: Language) -> String {
    format!("current-tip-{}", language.code())
}

/// Hands out tips without repeats until the whole pool has been seen, then
/// starts over. State is kept per language.
pub struct TipRotator<R: Rng = StdRng> {
    backend: Arc<dyn KeyValueStore>,
    language: Language,
    pool: Vec<Tip>,
    rng: R,
}

impl TipRotator<StdRng> {
    pub fn with_entropy(backend: Arc<dyn KeyValueStore>, language: Language) -> Self {
        Self::new(backend, language, StdRng::from_entropy())
    }
}

impl<R: Rng> TipRotator<R> {
    pub fn new(backend: Arc<dyn KeyValueStore>, language: Language, rng: R) -> Self {
        Self {
            backend,
            language,
            pool: farming_tips(language),
            rng,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    pub fn viewed_count(&self) -> usize {
        self.viewed_ids().len()
    }

    /// The last tip handed out, if it is still in the pool.
    pub fn current(&self) -> Option<Tip> {
        let id = match self.backend.get(&current_tip_key(self.language)) {
            Ok(id) => id?,
            Err(e) => {
                warn!(language = %self.language, error = %e, "Failed to read current tip");
                return None;
            }
        };
        self.pool.iter().find(|t| t.id == id).cloned()
    }

    pub fn next(&mut self) -> Result<Tip> {
        let mut viewed = self.viewed_ids();
        let mut unseen: Vec<&Tip> = self
            .pool
            .iter()
            .filter(|t| !viewed.contains(&t.id))
            .collect();

        if unseen.is_empty() {
            debug!(language = %self.language, "All tips viewed, starting over");
            viewed.clear();
            unseen = self.pool.iter().collect();
        }

        let tip = (*unseen.choose(&mut self.rng).ok_or_else(|| {
            CropWiseError::NotFound(format!("no tips available for {}", self.language))
        })?)
        .clone();

        viewed.push(tip.id.clone());
        let viewed_raw = serde_json::to_string(&viewed)?;
        // Current first, so a failed write never marks an unshown tip as viewed.
        self.backend.set(&current_tip_key(self.language), &tip.id)?;
        self.backend.set(&viewed_tips_key(self.language), &viewed_raw)?;
        debug!(language = %self.language, tip = %tip.id, viewed = viewed.len(), "Picked tip");
        Ok(tip)
    }

    /// Persisted viewed ids, restricted to ids that exist in the pool.
    fn viewed_ids(&self) -> Vec<String> {
        let key = viewed_tips_key(self.language);
        let raw = match self.backend.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read viewed tips, treating as empty");
                return Vec::new();
            }
        };

        let ids: Vec<String> = match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                warn!(key = %key, error = %e, "Corrupt viewed tips, treating as empty");
                return Vec::new();
            }
        };
        let mut kept: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids {
            if self.pool.iter().any(|t| t.id == id) && !kept.contains(&id) {
                kept.push(id);
            }
        }
        kept
    }
}
