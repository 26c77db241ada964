use serde::{Deserialize, Serialize};

/// A single extracurricular offering.
///
/// The activity name is the registry key rather than a field here, so the
/// list endpoint serializes straight to the name -> record object clients
/// expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Enrolled student emails, in signup order. No duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}
