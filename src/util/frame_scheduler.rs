//! Cooperative redraw scheduling with a cancellation handle.
//!
//! The render loop re-queues itself every tick for the lifetime of the
//! window. Embedding contexts (tests, teardown) can stop the loop cleanly
//! through a [`FrameHandle`] instead of relying on process exit.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Owns the live/cancelled flag consulted before each re-queue.
#[derive(Debug)]
pub struct FrameScheduler {
    running: Arc<AtomicBool>,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler {
    /// Create a running scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether the next frame should be queued.
    #[must_use]
    pub fn should_requeue(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Stop the loop from this side.
    pub fn cancel(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// A detached handle that can cancel the loop from elsewhere.
    #[must_use]
    pub fn handle(&self) -> FrameHandle {
        FrameHandle {
            running: Arc::clone(&self.running),
        }
    }
}

/// Cancellation handle for a [`FrameScheduler`].
#[derive(Debug, Clone)]
pub struct FrameHandle {
    running: Arc<AtomicBool>,
}

impl FrameHandle {
    /// Stop the associated loop from re-queuing.
    pub fn cancel(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// Whether the loop has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        !self.running.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scheduler_requeues() {
        let scheduler = FrameScheduler::new();
        assert!(scheduler.should_requeue());
        assert!(!scheduler.handle().is_cancelled());
    }

    #[test]
    fn cancelling_the_handle_stops_requeuing() {
        let scheduler = FrameScheduler::new();
        let handle = scheduler.handle();
        handle.cancel();
        assert!(!scheduler.should_requeue());
        assert!(handle.is_cancelled());
    }

    #[test]
    fn cancellation_reaches_clones_of_the_handle() {
        let scheduler = FrameScheduler::new();
        let first = scheduler.handle();
        let second = first.clone();
        scheduler.cancel();
        assert!(first.is_cancelled());
        assert!(second.is_cancelled());
    }
}
