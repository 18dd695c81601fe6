//! Per-frame scene update.
//!
//! The [`Engine`] holds the loaded meshes and the screen offset they are
//! drawn at. Each frame it projects every face orthographically and hands
//! it to the rasterizer as wireframe edges or filled triangles.

use clap::ValueEnum;

use crate::colors;
use crate::math::{Vec2, Vec3};
use crate::mesh::{Face, Mesh};
use crate::render::{draw_line, fill_triangle, Canvas};

/// Rendering mode presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderMode {
    /// Face outlines only (key: 1)
    #[default]
    Wireframe,
    /// Solid faces (key: 2)
    Filled,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Wireframe => write!(f, "Wireframe"),
            RenderMode::Filled => write!(f, "Filled"),
        }
    }
}

pub struct Engine {
    meshes: Vec<Mesh>,
    offset: Vec2,
    render_mode: RenderMode,
}

impl Engine {
    /// Create an empty scene drawn at `offset` in screen space.
    pub fn new(offset: Vec2) -> Self {
        Self {
            meshes: Vec::new(),
            offset,
            render_mode: RenderMode::default(),
        }
    }

    /// Create an empty scene centred on a canvas of the given size.
    pub fn centered(width: u32, height: u32) -> Self {
        Self::new(Vec2::new(width as f64 / 2.0, height as f64 / 2.0))
    }

    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Draw every face of every mesh into `canvas`.
    ///
    /// Faces whose indices fall outside the vertex pool are skipped.
    pub fn render(&self, canvas: &mut Canvas) {
        for mesh in &self.meshes {
            for face in mesh.objects().iter().flat_map(|o| o.faces()) {
                match self.render_mode {
                    RenderMode::Wireframe => self.draw_wireframe(canvas, mesh, face),
                    RenderMode::Filled => self.draw_filled(canvas, mesh, face),
                }
            }
        }
    }

    fn project(&self, vertex: Vec3) -> Vec2 {
        vertex.add(Vec3::from(self.offset)).to_vec2()
    }

    fn draw_wireframe(&self, canvas: &mut Canvas, mesh: &Mesh, face: &Face) {
        for (i, j) in face.edges() {
            if let (Some(a), Some(b)) = (mesh.vertex(i), mesh.vertex(j)) {
                draw_line(canvas, self.project(a), self.project(b), colors::WIREFRAME);
            }
        }
    }

    /// Faces with more than three vertices are filled as a fan around the first.
    fn draw_filled(&self, canvas: &mut Canvas, mesh: &Mesh, face: &Face) {
        let Some(vertices) = mesh.face_vertices(face) else {
            return;
        };
        let points: Vec<Vec2> = vertices.into_iter().map(|v| self.project(v)).collect();
        if let Some((&first, rest)) = points.split_first() {
            for pair in rest.windows(2) {
                fill_triangle(canvas, first, pair[0], pair[1], colors::FILL);
            }
        }
    }
}
