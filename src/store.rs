// Task store: in-memory sequence mirrored to a persistence slot

use crate::filter::Filter;
use crate::slot::Slot;
use crate::task::Task;
use eyre::{Context, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Slot key the serialized task sequence lives under.
pub const TASKS_KEY: &str = "tasks";

/// Ordered task collection with a durable mirror in a persistence slot.
///
/// The in-memory sequence is authoritative for the running session.
/// Persistence is best-effort: a failed read yields an empty collection,
/// a failed write is logged and swallowed. Every mutating method writes the
/// full sequence back to the slot exactly once, whether or not it changed
/// anything.
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
    slot: Slot,
}

impl TaskStore {
    /// Open a store rooted at the given path, loading any saved state.
    ///
    /// Absent or corrupted saved state starts the store empty; only failing
    /// to create the slot directory is an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let slot = Slot::open(path, TASKS_KEY)?;
        let tasks = load(&slot);

        debug!(count = tasks.len(), "Task store opened");

        Ok(Self {
            tasks,
            filter: Filter::default(),
            slot,
        })
    }

    /// Full ordered sequence; insertion order is display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current display filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Switch the display filter. Process-local, never saved.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Tasks visible under the current filter.
    pub fn visible(&self) -> Vec<&Task> {
        self.filter.apply(&self.tasks)
    }

    /// Number of tasks not yet completed.
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Whether any task is completed (i.e. clear-completed would do work).
    pub fn has_completed(&self) -> bool {
        self.tasks.iter().any(|t| t.completed)
    }

    /// Append a new task with a fresh id. Returns the created task.
    ///
    /// The description is taken as-is; creation is deliberately unvalidated
    /// while edits are guarded by the caller.
    pub fn add(&mut self, description: impl Into<String>) -> Task {
        let task = Task::new(description);
        debug!(id = %task.id, "Adding task");

        self.tasks.push(task.clone());
        self.save();
        task
    }

    /// Flip the completion state of the task matching `id`.
    ///
    /// Returns false when no task matches; the collection is unchanged then.
    pub fn toggle(&mut self, id: &str) -> bool {
        let found = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => {
                debug!(id, "Toggle: no matching task");
                false
            }
        };

        self.save();
        found
    }

    /// Replace the description of the task matching `id`.
    ///
    /// The store performs no emptiness validation here; rejecting empty or
    /// whitespace-only text is the presentation layer's responsibility.
    /// Returns false when no task matches.
    pub fn edit(&mut self, id: &str, new_description: &str) -> bool {
        let found = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.description = new_description.to_string();
                true
            }
            None => {
                debug!(id, "Edit: no matching task");
                false
            }
        };

        self.save();
        found
    }

    /// Delete the task matching `id`. Returns false when no task matches.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;

        if !removed {
            debug!(id, "Remove: no matching task");
        }

        self.save();
        removed
    }

    /// Delete every completed task. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();

        debug!(removed, "Cleared completed tasks");

        self.save();
        removed
    }

    fn save(&self) {
        if let Err(e) = try_save(&self.slot, &self.tasks) {
            warn!(error = ?e, "Failed to save tasks; in-memory state remains authoritative");
        }
    }
}

/// Load the saved sequence from the slot.
///
/// Both failure kinds are fail-soft: an unreadable slot and a payload that
/// does not parse as a task array are logged and treated as no saved state.
fn load(slot: &Slot) -> Vec<Task> {
    let text = match slot.read() {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = ?e, "Failed to read saved tasks; starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&text) {
        Ok(tasks) => tasks,
        Err(e) => {
            warn!(error = ?e, "Saved tasks are malformed; starting empty");
            Vec::new()
        }
    }
}

fn try_save(slot: &Slot, tasks: &[Task]) -> Result<()> {
    let payload = serde_json::to_string(tasks).context("Failed to serialize tasks")?;
    slot.write(&payload)
}
