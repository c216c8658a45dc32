//! Mesh baking for generated façades.
//!
//! [`bake()`] walks a [`grammar::FacadeGrammar`] and places scaled unit
//! [`Primitive`]s into flat [`MeshBuffers`]: xyzw positions, xyzw normals,
//! rgba colors and a u32 triangle index list. [`Building`] ties generation
//! and baking together.

pub mod bake;
pub mod building;
pub mod colors;
pub mod config;
pub mod mesh_buffers;
pub mod placement;
pub mod primitives;

pub use bake::bake;
pub use building::Building;
pub use mesh_buffers::{MeshBuffers, Paint};
pub use placement::{Placement, SubmeshTransform, Turn};
pub use primitives::{Primitive, UnitGeometry};
