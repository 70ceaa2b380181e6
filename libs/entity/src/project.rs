use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named bucket prompts can be grouped under.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
