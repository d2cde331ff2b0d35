//! The render engine and its command vocabulary.

pub mod command;
mod core;

pub use command::CurioCommand;
pub use core::{scaled_surface_size, GalleryEngine};
