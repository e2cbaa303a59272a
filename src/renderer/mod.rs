//! Rendering module
//!
//! `scene` tessellates a read-only game state into colored triangles in
//! playfield pixels; `pipeline` uploads them through WebGPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
