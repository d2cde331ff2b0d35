// -- Lint policy ---------------------------------------------------------
// Clippy configuration lives in Cargo.toml [lints]; the rustc lints that
// fire on a plain build are pinned here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D primitive-shape gallery built on wgpu.
//!
//! Curio opens a window showing nine wireframe primitives on a fixed grid,
//! a large paper-textured sphere, and a torus knot. Left-drag orbits the
//! camera, shift-drag pans, scroll zooms. Clicking a shape highlights it,
//! launches it toward the camera backstop with an eased tween, and shows a
//! tooltip with the normalized pointer coordinates. Double-click toggles
//! fullscreen.
//!
//! # Key entry points
//!
//! - [`engine::GalleryEngine`] - the render engine and command executor
//! - [`scene::SceneRegistry`] - the deterministic pickable-object grid
//! - [`picking::PickController`] - the single-selection click state machine
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything runs on the window event-loop thread. Raw window events are
//! normalized into [`input::InputEvent`] values, folded into
//! [`engine::CurioCommand`]s by the input processor, and executed by the
//! engine. Each redraw advances the tween timeline, spins the fixtures,
//! and draws the scene plus a glyphon text overlay (FPS counter, tooltip).
//! The redraw loop re-queues itself cooperatively and can be cancelled
//! through a [`util::frame_scheduler::FrameHandle`].

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gpu;
pub mod input;
pub mod lighting;
pub mod options;
pub mod picking;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{CurioCommand, GalleryEngine};
pub use error::CurioError;
pub use input::{InputEvent, MouseButton};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
