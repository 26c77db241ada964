use std::collections::BTreeMap;

use crate::models::Activity;
use crate::registry::{activities_store, ActivityRegistry};

/// Full name -> activity mapping as served by `GET /activities`.
pub async fn list_activities(registry: &ActivityRegistry) -> BTreeMap<String, Activity> {
    activities_store::snapshot(registry).await
}
