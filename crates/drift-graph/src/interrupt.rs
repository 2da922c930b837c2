//! Deadline and cancellation for graph construction.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::ConstructionError;

/// Bounds on how long construction may run.
///
/// Checked before every node or edge insert. Clones share the cancellation
/// flag, so a caller can keep one handle and trip it from elsewhere.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    deadline: Option<Instant>,
    cancelled: Option<Arc<AtomicBool>>,
}

impl Interrupt {
    /// No deadline, no cancellation.
    pub fn none() -> Self {
        Self::default()
    }

    /// Stop once `budget` has elapsed from now.
    ///
    /// A budget too large to represent as an `Instant` means no deadline.
    pub fn after(budget: Duration) -> Self {
        match Instant::now().checked_add(budget) {
            Some(deadline) => Self::at(deadline),
            None => Self::none(),
        }
    }

    pub fn at(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            cancelled: None,
        }
    }

    /// Attach a shared cancellation flag.
    pub fn with_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancelled = Some(flag);
        self
    }

    /// Fails once the flag is raised or the deadline has passed.
    pub fn check(&self) -> Result<(), ConstructionError> {
        if self
            .cancelled
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return Err(ConstructionError::Interrupted {
                reason: "cancelled by caller".to_string(),
            });
        }

        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(ConstructionError::Interrupted {
                reason: "construction deadline exceeded".to_string(),
            });
        }

        Ok(())
    }
}
