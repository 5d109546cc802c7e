//! Built-in wireframe scenes.
//!
//! The set of scenes is closed: each `SceneKind` knows how to generate its
//! line-list vertices and the model transform of every draw. GPU upload and
//! lifetime live in `renderer::scene_gpu`.

mod common;
mod cuboids;
mod rubiks;

use std::ops::Range;

use glam::Mat4;

use crate::types::Vertex;

pub use common::{push_wire_box, BOX_VERTEX_COUNT};

/// One `draw` call: a vertex range rendered with its own model matrix
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub model: Mat4,
    pub vertices: Range<u32>,
}

/// CPU-side geometry for a scene, ready for upload
#[derive(Debug, Clone, Default)]
pub struct SceneGeometry {
    pub vertices: Vec<Vertex>,
    pub draws: Vec<DrawCall>,
}

impl SceneGeometry {
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SceneKind {
    Cuboids,
    Rubiks,
}

impl SceneKind {
    pub const ALL: [SceneKind; 2] = [SceneKind::Cuboids, SceneKind::Rubiks];

    /// Label shown in the scene selector
    pub fn name(&self) -> &'static str {
        match self {
            SceneKind::Cuboids => "Cuboids",
            SceneKind::Rubiks => "Rubik's Cube",
        }
    }

    pub fn build(&self) -> SceneGeometry {
        match self {
            SceneKind::Cuboids => cuboids::build(),
            SceneKind::Rubiks => rubiks::build(),
        }
    }
}

impl std::fmt::Display for SceneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
