//! Progress tracking service.
//!
//! Every operation reads the whole user record from the store, applies one
//! change in memory, and writes the whole record back.

use chrono::NaiveDate;
use finquest_core::{ModuleId, User};
use finquest_storage::{KeyValueStore, StorageError};
use tracing::{debug, info, warn};

use crate::rewards::{award_module_completion, AwardOutcome, DEFAULT_MODULE_POINTS};
use crate::stats::{compute_progress, dashboard, gamification_stats, Dashboard, GamificationStats, ProgressSummary};
use crate::streak::{update_login_streak, StreakUpdate};

/// Store key holding the serialized user record.
pub const USER_KEY: &str = "currentUser";

/// Returned by export when no user record exists.
pub const NO_USER_DATA: &str = "No user data";

/// Error type for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Errors that can occur while tracking progress.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Store failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Stored record does not match the user schema
    #[error("Stored user record is malformed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// User record could not be encoded
    #[error("Failed to serialize user record: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Outcome of an operation that needs a signed-in user.
///
/// `Unauthenticated` is a normal result: the caller decides where to send
/// the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Session<T> {
    /// A user record exists.
    Active(T),
    /// No user record is stored.
    Unauthenticated,
}

impl<T> Session<T> {
    /// The value, if a user record was present.
    pub fn active(self) -> Option<T> {
        match self {
            Session::Active(value) => Some(value),
            Session::Unauthenticated => None,
        }
    }
}

/// Tracker configuration.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Store key for the user record
    pub storage_key: String,

    /// Points granted per completed module
    pub points_per_module: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: USER_KEY.to_string(),
            points_per_module: DEFAULT_MODULE_POINTS,
        }
    }
}

/// Store-backed progress tracker.
pub struct ProgressTracker<S: KeyValueStore> {
    store: S,
    config: TrackerConfig,
}

impl<S: KeyValueStore> ProgressTracker<S> {
    /// Create a tracker over `store` with the default configuration.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: TrackerConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn load(&self) -> Result<Option<User>> {
        let Some(json) = self.store.get(&self.config.storage_key)? else {
            return Ok(None);
        };
        let user = User::from_json(&json).map_err(TrackerError::Deserialization)?;
        Ok(Some(user))
    }

    fn save(&mut self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user).map_err(TrackerError::Serialization)?;
        self.store.set(&self.config.storage_key, &json)?;
        Ok(())
    }

    /// Read-modify-write the whole record. `apply` returns its result and
    /// whether the record changed; unchanged records are not rewritten.
    fn modify<T>(&mut self, apply: impl FnOnce(&mut User) -> (T, bool)) -> Result<Session<T>> {
        let Some(mut user) = self.load()? else {
            return Ok(Session::Unauthenticated);
        };
        let (result, changed) = apply(&mut user);
        if changed {
            self.save(&user)?;
        }
        Ok(Session::Active(result))
    }

    fn read<T>(&self, view: impl FnOnce(&User) -> T) -> Result<Session<T>> {
        Ok(match self.load()? {
            Some(user) => Session::Active(view(&user)),
            None => Session::Unauthenticated,
        })
    }

    /// The stored user, if any.
    pub fn current_user(&self) -> Result<Session<User>> {
        self.read(User::clone)
    }

    /// Whether a user record is stored.
    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.store.get(&self.config.storage_key)?.is_some())
    }

    /// Complete `module`, granting `badge` and `points` the first time only.
    pub fn complete_module(
        &mut self,
        module: ModuleId,
        badge: &str,
        points: u64,
    ) -> Result<Session<AwardOutcome>> {
        let session = self.modify(|user| {
            let outcome = award_module_completion(user, module, badge, points);
            let granted = outcome.is_granted();
            (outcome, granted)
        })?;

        match &session {
            Session::Active(AwardOutcome::Granted { total_points, .. }) => {
                info!("Completed module {}: +{} points (total {})", module, points, total_points);
            }
            Session::Active(AwardOutcome::AlreadyCompleted { .. }) => {
                debug!("Module {} already completed, no reward", module);
            }
            Session::Unauthenticated => debug!("No user record; cannot complete {}", module),
        }
        Ok(session)
    }

    /// Complete `module` with its standard badge and the configured points.
    pub fn complete_module_with_default_reward(&mut self, module: ModuleId) -> Result<Session<AwardOutcome>> {
        let points = self.config.points_per_module;
        self.complete_module(module, module.badge(), points)
    }

    /// Record a login on `today` and return the updated user.
    pub fn record_login(&mut self, today: NaiveDate) -> Result<Session<User>> {
        self.modify(|user| {
            let update = update_login_streak(user, today);
            debug!("Login on {}: {:?}, streak {}", today, update, user.current_streak);
            (user.clone(), update != StreakUpdate::Unchanged)
        })
    }

    /// Module completion progress.
    pub fn progress(&self) -> Result<Session<ProgressSummary>> {
        self.read(compute_progress)
    }

    /// Gamification counters.
    pub fn stats(&self) -> Result<Session<GamificationStats>> {
        self.read(gamification_stats)
    }

    /// Dashboard view.
    pub fn dashboard(&self) -> Result<Session<Dashboard>> {
        self.read(dashboard)
    }

    /// Pretty-printed JSON of the stored record, or [`NO_USER_DATA`].
    pub fn export_user_data(&self) -> Result<String> {
        match self.load()? {
            Some(user) => serde_json::to_string_pretty(&user).map_err(TrackerError::Serialization),
            None => Ok(NO_USER_DATA.to_string()),
        }
    }

    /// Replace the stored record with `json`.
    ///
    /// Returns `false` and leaves the store untouched when `json` is not a
    /// valid user record.
    pub fn import_user_data(&mut self, json: &str) -> Result<bool> {
        let user = match User::from_json(json) {
            Ok(user) => user,
            Err(e) => {
                warn!("Invalid JSON format: {}", e);
                return Ok(false);
            }
        };
        self.save(&user)?;
        info!("Imported user record ({} points)", user.points);
        Ok(true)
    }

    /// Remove the stored record.
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.store.remove(&self.config.storage_key)?;
        info!("Cleared user data");
        Ok(())
    }

    /// Store the demo user, replacing any existing record.
    pub fn init_demo_user(&mut self, today: NaiveDate) -> Result<User> {
        let user = User::demo(today);
        self.save(&user)?;
        info!("Initialized demo user");
        Ok(user)
    }
}
