use bevy::math::Vec3;
use grammar::{FacadeGrammar, RoofShape};

use super::place;
use crate::colors::{SKYSCRAPER_GAP_BAND, SKYSCRAPER_ROOF, SKYSCRAPER_WINDOW_BAND};
use crate::config::{GAP_BAND_HEIGHT, WINDOW_BAND_HEIGHT};
use crate::mesh_buffers::{MeshBuffers, Paint};
use crate::placement::Placement;
use crate::primitives::Primitive;

/// First stepped tier of a pointed roof: full footprint, two units tall.
const POINTED_FIRST_HEIGHT: f32 = 2.0;

pub(super) fn bake(grammar: &FacadeGrammar, mesh: &mut MeshBuffers) {
    let dims = grammar.dimensions;
    let round = grammar.roof.shape == RoofShape::Round;
    let band = if round {
        Primitive::Cylinder
    } else {
        Primitive::Cube
    };

    for story in 0..grammar.stories {
        let y = story as f32;
        place(
            mesh,
            band,
            Placement::new(
                Vec3::new(dims.width, WINDOW_BAND_HEIGHT, dims.depth),
                Vec3::new(0.0, y, 0.0),
            ),
            Paint::Solid(SKYSCRAPER_WINDOW_BAND),
        );
        place(
            mesh,
            band,
            Placement::new(
                Vec3::new(dims.width, GAP_BAND_HEIGHT, dims.depth),
                Vec3::new(0.0, y + WINDOW_BAND_HEIGHT, 0.0),
            ),
            Paint::Solid(SKYSCRAPER_GAP_BAND),
        );
    }

    let top = grammar.stories as f32;
    match grammar.roof.shape {
        RoofShape::Round => place(
            mesh,
            Primitive::RoundRoof,
            Placement::new(
                Vec3::new(dims.width, dims.height / 3.0, dims.depth),
                Vec3::new(0.0, top, 0.0),
            ),
            Paint::Solid(SKYSCRAPER_ROOF),
        ),
        RoofShape::Flat => flat_tiers(grammar, top, mesh),
        RoofShape::Pitched => pointed_tiers(grammar, top, mesh),
    }
}

/// Centred on the footprint, base at `y`.
fn centred(width: f32, depth: f32, scale: Vec3, y: f32) -> Placement {
    Placement::new(
        scale,
        Vec3::new((width - scale.x) / 2.0, y, (depth - scale.z) / 2.0),
    )
}

/// Setback boxes: tier `i` is `2 / (i + 2)` of the footprint and
/// `1 - i / 10` tall.
fn flat_tiers(grammar: &FacadeGrammar, top: f32, mesh: &mut MeshBuffers) {
    let dims = grammar.dimensions;
    let mut y = top;
    for i in 0..grammar.roof.tiers {
        let shrink = (i as f32 + 2.0) / 2.0;
        let scale = Vec3::new(
            dims.width / shrink,
            1.0 - i as f32 / 10.0,
            dims.depth / shrink,
        );
        place(
            mesh,
            Primitive::Cube,
            centred(dims.width, dims.depth, scale, y),
            Paint::Solid(SKYSCRAPER_ROOF),
        );
        y += scale.y;
    }
}

/// Stepped caps, each half as wide and 0.8 as tall as the one below, so
/// every tier sits exactly on the previous one's top face.
fn pointed_tiers(grammar: &FacadeGrammar, top: f32, mesh: &mut MeshBuffers) {
    let dims = grammar.dimensions;
    let mut scale = Vec3::new(dims.width, POINTED_FIRST_HEIGHT, dims.depth);
    let mut y = top;
    for _ in 0..grammar.roof.tiers {
        place(
            mesh,
            Primitive::SteppedRoof,
            centred(dims.width, dims.depth, scale, y),
            Paint::Solid(SKYSCRAPER_ROOF),
        );
        y += scale.y;
        scale *= Vec3::new(0.5, 0.8, 0.5);
    }
}
