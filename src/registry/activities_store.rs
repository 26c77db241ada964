use std::collections::BTreeMap;

use crate::models::Activity;

use super::{ActivityRegistry, CapacityPolicy, RegistryError};

/// Clone the full name -> activity mapping.
pub async fn snapshot(registry: &ActivityRegistry) -> BTreeMap<String, Activity> {
    registry.activities().read().await.clone()
}

/// Append `email` to the roster of activity `name`.
///
/// Validation and mutation happen under the same write lock, so a concurrent
/// duplicate signup cannot slip in between the check and the append.
pub async fn add_participant(
    registry: &ActivityRegistry,
    name: &str,
    email: &str,
) -> Result<(), RegistryError> {
    let mut activities = registry.activities().write().await;
    let activity = activities
        .get_mut(name)
        .ok_or(RegistryError::UnknownActivity)?;

    if activity.participants.iter().any(|p| p == email) {
        return Err(RegistryError::AlreadySignedUp);
    }
    if registry.policy() == CapacityPolicy::Enforce && activity.is_full() {
        return Err(RegistryError::ActivityFull);
    }

    activity.participants.push(email.to_string());
    Ok(())
}

/// Remove `email` from the roster of activity `name`.
pub async fn remove_participant(
    registry: &ActivityRegistry,
    name: &str,
    email: &str,
) -> Result<(), RegistryError> {
    let mut activities = registry.activities().write().await;
    let activity = activities
        .get_mut(name)
        .ok_or(RegistryError::UnknownActivity)?;

    let Some(pos) = activity.participants.iter().position(|p| p == email) else {
        return Err(RegistryError::NotSignedUp);
    };
    activity.participants.remove(pos);
    Ok(())
}
