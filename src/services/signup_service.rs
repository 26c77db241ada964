use crate::registry::{activities_store, ActivityRegistry, RegistryError};

/// Enroll `email` in activity `name`. Returns the confirmation message for
/// the response body.
pub async fn signup_student(
    registry: &ActivityRegistry,
    name: &str,
    email: &str,
) -> Result<String, RegistryError> {
    activities_store::add_participant(registry, name, email).await?;
    tracing::info!(activity = %name, email = %email, "student signed up");
    Ok(format!("Signed up {} for {}", email, name))
}

/// Withdraw `email` from activity `name`. Returns the confirmation message
/// for the response body.
pub async fn signoff_student(
    registry: &ActivityRegistry,
    name: &str,
    email: &str,
) -> Result<String, RegistryError> {
    activities_store::remove_participant(registry, name, email).await?;
    tracing::info!(activity = %name, email = %email, "student signed off");
    Ok(format!("Removed {} from {}", email, name))
}
