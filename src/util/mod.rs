//! Small shared utilities.

pub mod frame_scheduler;
pub mod frame_timing;

pub use frame_scheduler::{FrameHandle, FrameScheduler};
pub use frame_timing::FrameTiming;
