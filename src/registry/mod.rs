pub mod activities_store;
pub mod seed;

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Activity;

/// Whether signup may exceed `max_participants`.
///
/// `Enforce` is the default; `Unbounded` keeps `max_participants` as
/// informational only (set `ENFORCE_CAPACITY=false`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityPolicy {
    Enforce,
    Unbounded,
}

/// Validation failures for roster mutations. The `Display` strings double as
/// the `detail` field of the error responses.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    UnknownActivity,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student not signed up for this activity")]
    NotSignedUp,
    #[error("Activity is full")]
    ActivityFull,
}

/// Owned, injectable activity state.
///
/// Cloning is cheap and every clone shares the same underlying map, so the
/// handle can be handed to Axum's `State` extractor directly. All mutations
/// go through [`activities_store`], which validates and mutates under a
/// single write-lock acquisition.
#[derive(Clone)]
pub struct ActivityRegistry {
    activities: Arc<RwLock<BTreeMap<String, Activity>>>,
    policy: CapacityPolicy,
}

impl ActivityRegistry {
    pub fn new(activities: BTreeMap<String, Activity>, policy: CapacityPolicy) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
            policy,
        }
    }

    /// Registry pre-populated with the school's fixed activity program.
    pub fn with_seed(policy: CapacityPolicy) -> Self {
        Self::new(seed::seed_activities(), policy)
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    pub(crate) fn activities(&self) -> &RwLock<BTreeMap<String, Activity>> {
        &self.activities
    }
}
