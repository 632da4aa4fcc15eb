//! A pending configuration closure that runs at most once.

use std::fmt;

use crate::Result;

/// Boxed configuration closure receiving its owner.
pub type Task<T> = Box<dyn FnOnce(&mut T) -> Result<()>>;

/// Holds at most one pending task bound to an owner of type `T`.
///
/// The owner takes the task out before running it, so a task that calls back
/// into its owner's `execute` observes nothing pending.
pub struct Deferred<T> {
    /// The pending task, if any.
    task: Option<Task<T>>,
}

impl<T> Deferred<T> {
    /// An empty slot.
    pub fn empty() -> Self {
        Self { task: None }
    }

    /// A slot holding `task`, or empty when `None`.
    pub fn new(task: Option<Task<T>>) -> Self {
        Self { task }
    }

    /// Replace the pending task.
    pub fn set(&mut self, task: Task<T>) {
        self.task = Some(task);
    }

    /// Whether a task is waiting to run.
    pub fn is_pending(&self) -> bool {
        self.task.is_some()
    }

    /// Remove and return the pending task, leaving the slot empty.
    pub fn take(&mut self) -> Option<Task<T>> {
        self.task.take()
    }
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("pending", &self.is_pending())
            .finish()
    }
}
