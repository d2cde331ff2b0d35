//! Pointer-ray picking and the single-selection highlight controller.

pub mod controller;
pub mod ray;

pub use controller::{ClickOutcome, PickController, Tooltip};
pub use ray::{intersect_registry, ndc, ray_sphere_intersect, Hit, Ray};
