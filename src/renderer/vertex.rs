//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// View a vertex slice as raw bytes for upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.86, 0.86, 0.86, 1.0];
    pub const PLATFORM: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    /// Player fallback when the hero has no sprite
    pub const PLAYER: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
    pub const HEADER: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
    pub const HEART_FULL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const HEART_EMPTY: [f32; 4] = [0.45, 0.1, 0.1, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT_DARK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const MENU_PANEL: [f32; 4] = [0.16, 0.16, 0.16, 1.0];
    pub const MENU_HIGHLIGHT: [f32; 4] = [1.0, 0.84, 0.0, 1.0];
    pub const MENU_PLACEHOLDER: [f32; 4] = [0.59, 0.59, 0.59, 1.0];
}
