//! Perspective camera and orbit controller.

pub mod controller;
pub mod core;

pub use controller::CameraController;
pub use core::{Camera, CameraUniform};
