use std::f32::consts::FRAC_PI_2;

use bevy::math::Vec3;
use grammar::{FacadeGrammar, Wall, WallSide, WallToken};

use super::walls::{cells, wall_turn, CellRect, WallGrid};
use super::{base_volume, place};
use crate::colors::{FRAME_DARK, GLASS, HOTEL_BASE};
use crate::mesh_buffers::{MeshBuffers, Paint};
use crate::placement::{Placement, SubmeshTransform};
use crate::primitives::Primitive;

const ROOM_WINDOW: CellRect = CellRect::new(0.8, 0.6, 0.1, 0.3);
const BALCONY_DOOR: CellRect = CellRect::new(0.6, 0.85, 0.2, 0.0);

const GLAZING: Paint = Paint::Glazed {
    glass: GLASS,
    frame: FRAME_DARK,
};

fn bake_face(wall: &Wall, grid: &WallGrid, out: &mut MeshBuffers) {
    for cell in cells(wall) {
        let rect = match cell.token {
            WallToken::DoubleWindow => ROOM_WINDOW,
            WallToken::Door => BALCONY_DOOR,
            _ => continue,
        };
        place(
            out,
            Primitive::DoubleWindow,
            grid.panel(cell.story, cell.section, rect, 0.0),
            GLAZING,
        );
    }
}

pub(super) fn bake(grammar: &FacadeGrammar, mesh: &mut MeshBuffers) {
    let dims = grammar.dimensions;
    base_volume(mesh, dims, HOTEL_BASE);

    let front = WallGrid::new(dims, WallSide::Front, grammar.sections.width);
    bake_face(&grammar.front, &front, mesh);

    let back_grid = WallGrid::new(dims, WallSide::Back, grammar.sections.width);
    let mut back = MeshBuffers::new();
    bake_face(&grammar.back, &back_grid.local(), &mut back);
    if let Some(turn) = wall_turn(WallSide::Back, dims) {
        mesh.append_transformed(&back, &SubmeshTransform::from_turn(turn));
    }

    wings(grammar, mesh);
}

/// A bay at either end of the ground floor grows a copy of the finished
/// block, turned a quarter so it runs forward from that corner with its
/// front facing the forecourt, plus an end cap bridging it to the block.
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

    let dims = grammar.dimensions;
    let wing = grammar.wing;
    let scale = Vec3::new(wing.width, 1.0, wing.depth);
    let cap_width = dims.depth * wing.depth;
    let cap_scale = Vec3::new(cap_width, dims.height, dims.depth);
    let snapshot = mesh.clone();

    if last.is_wing_marker() {
        let transform = SubmeshTransform::new(scale, FRAC_PI_2, Vec3::new(dims.width, 0.0, 0.0));
        mesh.append_transformed(&snapshot, &transform);
        place(
            mesh,
            Primitive::Cube,
            Placement::new(cap_scale, Vec3::new(dims.width, 0.0, 0.0)),
            Paint::Solid(HOTEL_BASE),
        );
    }
    if first.is_wing_marker() {
        let reach = dims.width * wing.width;
        let transform = SubmeshTransform::new(scale, -FRAC_PI_2, Vec3::new(0.0, 0.0, -reach));
        mesh.append_transformed(&snapshot, &transform);
        place(
            mesh,
            Primitive::Cube,
            Placement::new(cap_scale, Vec3::new(-cap_width, 0.0, 0.0)),
            Paint::Solid(HOTEL_BASE),
        );
    }
}
