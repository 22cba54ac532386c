//! Backend-agnostic rendering
//!
//! Turns a simulation [`Snapshot`](crate::sim::Snapshot) into an ordered list
//! of draw commands. The backend only has to rasterise triangles, place
//! sprites and lay out text.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{DrawCommand, Frame, build_frame};
pub use vertex::Vertex;
