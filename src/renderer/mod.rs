//! GPU pipelines and overlay rendering.

pub mod mesh;
pub mod text;

pub use mesh::{GpuMesh, MeshPipelines, ObjectBinding, ObjectUniform};
pub use text::TextOverlay;
