//! Mesh baking: grammar in, `MeshBuffers` out.
//!
//! Baking is deterministic. All randomness was spent during generation, so
//! the same grammar always bakes to identical buffers.

mod hotel;
mod house;
mod office;
mod skyscraper;
pub(crate) mod walls;


use bevy::log::{debug, warn};
use bevy::math::Vec3;
use grammar::{BuildingCategory, Dimensions, FacadeGrammar};

use crate::colors::Rgba;
use crate::mesh_buffers::{MeshBuffers, Paint};
use crate::placement::Placement;
use crate::primitives::Primitive;

pub fn bake(grammar: &FacadeGrammar) -> MeshBuffers {
    let mut mesh = MeshBuffers::new();
    match grammar.category {
        BuildingCategory::House | BuildingCategory::BigHouse => house::bake(grammar, &mut mesh),
        BuildingCategory::Hotel => hotel::bake(grammar, &mut mesh),
        BuildingCategory::Office => office::bake(grammar, &mut mesh),
        BuildingCategory::Skyscraper => skyscraper::bake(grammar, &mut mesh),
    }
    debug!(
        "baked {}: {} vertices, {} triangles",
        grammar.category,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

/// Pushes one primitive instance. A degenerate placement is logged and
/// skipped; the rest of the build carries on.
pub(crate) fn place(mesh: &mut MeshBuffers, primitive: Primitive, placement: Placement, paint: Paint) {
    if let Err(err) = mesh.push_primitive(primitive, &placement, paint) {
        warn!("skipping primitive: {err}");
    }
}

/// Main massing: one box over the whole footprint.
pub(crate) fn base_volume(mesh: &mut MeshBuffers, dims: Dimensions, color: Rgba) {
    place(
        mesh,
        Primitive::Cube,
        Placement::new(Vec3::new(dims.width, dims.height, dims.depth), Vec3::ZERO),
        Paint::Solid(color),
    );
}
