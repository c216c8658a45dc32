//! `MeshBuffers`: append-only arena of four index-aligned vertex buffers.
//!
//! Every append computes its indices from the vertex count *before* its own
//! vertices are pushed, so indices stay valid offsets into the final buffer
//! no matter how many primitives and submeshes are merged.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use grammar::FacadeError;

use crate::placement::{Placement, SubmeshTransform};
use crate::primitives::Primitive;

/// Vertex coloring for one primitive instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid([f32; 4]),
    /// Double window: pane vertices in `glass`, mullion vertices in `frame`.
    Glazed { glass: [f32; 4], frame: [f32; 4] },
}

impl Paint {
    fn color_at(&self, vertex: usize) -> [f32; 4] {
        match self {
            Paint::Solid(c) => *c,
            Paint::Glazed { glass, frame } => {
                if vertex < 4 {
                    *glass
                } else {
                    *frame
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    positions: Vec<[f32; 4]>,
    normals: Vec<[f32; 4]>,
    colors: Vec<[f32; 4]>,
    indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    // -----------------------------------------------------------------------
    // Read-only views
    // -----------------------------------------------------------------------

    /// Four scalars per vertex: x, y, z, 1.
    pub fn positions(&self) -> &[f32] {
        self.positions.as_flattened()
    }

    /// Four scalars per vertex: nx, ny, nz, 0.
    pub fn normals(&self) -> &[f32] {
        self.normals.as_flattened()
    }

    /// RGBA per vertex.
    pub fn colors(&self) -> &[f32] {
        self.colors.as_flattened()
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_positions(&self) -> &[[f32; 4]] {
        &self.positions
    }

    pub fn vertex_normals(&self) -> &[[f32; 4]] {
        &self.normals
    }

    pub fn vertex_colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    // -----------------------------------------------------------------------
    // Appends
    // -----------------------------------------------------------------------

    /// Instances `primitive` through `placement`. Rejects degenerate
    /// placements without touching the buffers.
    pub fn push_primitive(
        &mut self,
        primitive: Primitive,
        placement: &Placement,
        paint: Paint,
    ) -> Result<(), FacadeError> {
        placement.validate(primitive)?;
        let geo = primitive.geometry();
        let base = self.vertex_count() as u32;

        self.positions
            .extend(geo.positions.iter().map(|p| placement.point(*p)));
        self.normals
            .extend(geo.normals.iter().map(|n| placement.normal(*n)));
        self.colors
            .extend((0..geo.positions.len()).map(|i| paint.color_at(i)));
        push_triangles(
            &mut self.indices,
            &geo.indices,
            base,
            placement.flips_winding(),
        );
        Ok(())
    }

    /// Appends every vertex and triangle of `sub` through `transform`,
    /// remapping its indices past the current vertex count.
    pub fn append_transformed(&mut self, sub: &MeshBuffers, transform: &SubmeshTransform) {
        let base = self.vertex_count() as u32;
        self.positions
            .extend(sub.positions.iter().map(|p| transform.point(*p)));
        self.normals
            .extend(sub.normals.iter().map(|n| transform.normal(*n)));
        self.colors.extend_from_slice(&sub.colors);
        push_triangles(
            &mut self.indices,
            &sub.indices,
            base,
            transform.flips_winding(),
        );
    }

    pub fn append(&mut self, sub: &MeshBuffers) {
        self.append_transformed(sub, &SubmeshTransform::default());
    }

    // -----------------------------------------------------------------------
    // Bevy
    // -----------------------------------------------------------------------

    /// Triangle-list `Mesh` with vertex colors and zeroed UVs.
    pub fn to_mesh(&self) -> Mesh {
        let positions: Vec<[f32; 3]> = self.positions.iter().map(|p| [p[0], p[1], p[2]]).collect();
        let normals: Vec<[f32; 3]> = self.normals.iter().map(|n| [n[0], n[1], n[2]]).collect();
        let uvs: Vec<[f32; 2]> = vec![[0.0, 0.0]; self.positions.len()];
        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, self.colors.clone())
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(self.indices.clone()))
    }
}

fn push_triangles(out: &mut Vec<u32>, local: &[u32], base: u32, flip: bool) {
    out.reserve(local.len());
    for tri in local.chunks_exact(3) {
        if flip {
            out.extend_from_slice(&[tri[0] + base, tri[2] + base, tri[1] + base]);
        } else {
            out.extend_from_slice(&[tri[0] + base, tri[1] + base, tri[2] + base]);
        }
    }
}
