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

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY_TOP: [f32; 4] = [0.529, 0.808, 0.922, 1.0];
    pub const SKY_BOTTOM: [f32; 4] = [0.902, 0.953, 1.0, 1.0];
    pub const TRACK: [f32; 4] = [0.902, 0.969, 1.0, 1.0];
    pub const LANE_DIVIDER: [f32; 4] = [0.8, 0.906, 1.0, 1.0];

    pub const SCENERY_ICEBERG: [f32; 4] = [0.690, 0.878, 0.902, 0.3];
    pub const SCENERY_SNOWFLAKE: [f32; 4] = [1.0, 1.0, 1.0, 0.3];
    pub const WAVE: [f32; 4] = [1.0, 1.0, 1.0, 0.3];
    pub const WAVE_HIGHLIGHT: [f32; 4] = [0.902, 0.953, 1.0, 0.15];

    pub const OBSTACLE: [f32; 4] = [0.290, 0.333, 0.408, 1.0];
    pub const OBSTACLE_SHADOW: [f32; 4] = [0.176, 0.216, 0.282, 1.0];
    pub const OBSTACLE_EDGE: [f32; 4] = [0.443, 0.502, 0.588, 1.0];

    pub const FISH: [f32; 4] = [1.0, 0.843, 0.0, 1.0];

    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SKI: [f32; 4] = [0.545, 0.271, 0.075, 1.0];
    pub const GOGGLES: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
    pub const LENS: [f32; 4] = [0.0, 0.4, 1.0, 1.0];
    pub const BEAK: [f32; 4] = [1.0, 0.4, 0.0, 1.0];
    pub const POLE: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
    pub const POLE_BASKET: [f32; 4] = [1.0, 0.8, 0.0, 1.0];
    pub const BOOT: [f32; 4] = [0.8, 0.0, 0.0, 1.0];
}
