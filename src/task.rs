// Task model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry.
///
/// The serialized shape is exactly these three fields; the persistence slot
/// holds a plain JSON array of them with no version envelope, so any shape
/// mismatch on read is treated as absent data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub completed: bool,
}

impl Task {
    /// Create a task with a fresh unique id, always uncompleted.
    ///
    /// The description is stored as given. Creation does not validate it;
    /// only edits are guarded, and that guard belongs to the caller.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            description: description.into(),
            completed: false,
        }
    }
}
