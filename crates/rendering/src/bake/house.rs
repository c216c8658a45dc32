//! Houses and mansions: base box, window/door panels on all four walls, a
//! flat or pitched roof, and for mansions the tower/bay wings.

use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

use bevy::math::Vec3;
use grammar::{BuildingCategory, FacadeGrammar, RoofShape, WallSide, WallToken};

use super::walls::{cells, CellRect, WallGrid};
use super::{base_volume, place};
use crate::colors::{DOOR, FRAME, GLASS, RESIDENTIAL_BASE, ROOF};
use crate::mesh_buffers::{MeshBuffers, Paint};
use crate::placement::{Placement, SubmeshTransform};
use crate::primitives::Primitive;

struct Openings {
    window: CellRect,
    side_window: CellRect,
    double_window: CellRect,
    door: CellRect,
}

const HOUSE: Openings = Openings {
    window: CellRect::new(0.6, 0.6, 0.2, 0.3),
    side_window: CellRect::new(0.4, 0.6, 0.3, 0.3),
    double_window: CellRect::new(0.8, 0.6, 0.1, 0.3),
    door: CellRect::new(0.5, 0.8, 0.25, 0.0),
};

/// Mansion entrances span several cells, so each door panel fills its cell.
const BIG_HOUSE: Openings = Openings {
    door: CellRect::new(0.9, 0.8, 0.05, 0.0),
    ..HOUSE
};

fn opening(style: &Openings, side: WallSide, token: WallToken) -> Option<(Primitive, CellRect, Paint)> {
    match token {
        WallToken::Window => {
            let rect = if side.runs_along_width() {
                style.window
            } else {
                style.side_window
            };
            Some((Primitive::Square, rect, Paint::Solid(GLASS)))
        }
        WallToken::DoubleWindow => Some((
            Primitive::DoubleWindow,
            style.double_window,
            Paint::Glazed {
                glass: GLASS,
                frame: FRAME,
            },
        )),
        WallToken::Door => Some((Primitive::Square, style.door, Paint::Solid(DOOR))),
        _ => None,
    }
}

pub(super) fn bake(grammar: &FacadeGrammar, mesh: &mut MeshBuffers) {
    let dims = grammar.dimensions;
    let style = match grammar.category {
        BuildingCategory::BigHouse => &BIG_HOUSE,
        _ => &HOUSE,
    };

    base_volume(mesh, dims, RESIDENTIAL_BASE);
    for side in WallSide::ALL {
        let grid = WallGrid::new(dims, side, grammar.sections.for_side(side));
        for cell in cells(grammar.wall(side)) {
            if let Some((primitive, rect, paint)) = opening(style, side, cell.token) {
                place(mesh, primitive, grid.panel(cell.story, cell.section, rect, 0.0), paint);
            }
        }
    }
    roof(grammar, mesh);

    if grammar.category == BuildingCategory::BigHouse {
        wings(grammar, mesh);
    }
}

/// Cell size along a wall; an axis with no sections has no overhang.
fn overhang_cell(length: f32, sections: u32) -> f32 {
    if sections == 0 {
        0.0
    } else {
        length / sections as f32
    }
}

/// Roof overhangs the block by a quarter cell on every side.
fn roof(grammar: &FacadeGrammar, mesh: &mut MeshBuffers) {
    let dims = grammar.dimensions;
    let cell_w = overhang_cell(dims.width, grammar.sections.width);
    let cell_d = overhang_cell(dims.depth, grammar.sections.depth);
    let (primitive, height) = match grammar.roof.shape {
        RoofShape::Pitched => (Primitive::PitchedRoof, dims.height / 2.0),
        RoofShape::Flat | RoofShape::Round => (Primitive::Cube, dims.story_height() / 2.0),
    };
    let placement = Placement::new(
        Vec3::new(dims.width + cell_w / 2.0, height, dims.depth + cell_d / 2.0),
        Vec3::new(-cell_w / 4.0, dims.height, -cell_d / 4.0),
    );
    place(mesh, primitive, placement, Paint::Solid(ROOF));
}

/// A tower or bay at either end of the ground-floor front grows a copy of
/// the finished house, scaled by the wing proportions and swung 45 degrees
/// forward so its inner front corner meets the main block's front corner.
fn wings(grammar: &FacadeGrammar, mesh: &mut MeshBuffers) {
    let Some(ground) = grammar.front.story(0) else {
        return;
    };
    let (Some(first), Some(last)) = (ground.first(), ground.last()) else {
        return;
    };
    if !first.is_wing_marker() && !last.is_wing_marker() {
        return;
    }

    let width = grammar.dimensions.width;
    let scale = Vec3::new(grammar.wing.width, 1.0, grammar.wing.depth);
    let snapshot = mesh.clone();
    if last.is_wing_marker() {
        let transform = SubmeshTransform::new(scale, FRAC_PI_4, Vec3::new(width, 0.0, 0.0));
        mesh.append_transformed(&snapshot, &transform);
    }
    if first.is_wing_marker() {
        let reach = width * grammar.wing.width * FRAC_1_SQRT_2;
        let transform = SubmeshTransform::new(scale, -FRAC_PI_4, Vec3::new(-reach, 0.0, -reach));
        mesh.append_transformed(&snapshot, &transform);
    }
}
