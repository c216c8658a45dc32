use bevy::math::Vec3;
use grammar::{FacadeGrammar, Wall, WallSide, WallToken};

use super::walls::{CellRect, CursorEvent, WallCursor, WallGrid};
use super::{base_volume, place};
use crate::colors::{FRAME_DARK, GLASS, OFFICE_BASE, OFFICE_BAY, OFFICE_ROOF};
use crate::config::{OFFICE_BAY_DEPTH, OFFICE_ROOF_THICKNESS};
use crate::mesh_buffers::{MeshBuffers, Paint};
use crate::placement::{Placement, SubmeshTransform};
use crate::primitives::Primitive;

const ENTRANCE: CellRect = CellRect::new(0.9, 0.9, 0.05, 0.05);
const TRIM: CellRect = CellRect::new(0.8, 0.8, 0.1, 0.1);

pub(super) fn bake(grammar: &FacadeGrammar, mesh: &mut MeshBuffers) {
    let dims = grammar.dimensions;
    base_volume(mesh, dims, OFFICE_BASE);
    place(
        mesh,
        Primitive::Cube,
        Placement::new(
            Vec3::new(dims.width, OFFICE_ROOF_THICKNESS, dims.depth),
            Vec3::new(0.0, dims.height, 0.0),
        ),
        Paint::Solid(OFFICE_ROOF),
    );

    for side in WallSide::ALL {
        let grid = WallGrid::new(dims, side, grammar.sections.for_side(side));
        let wall = grammar.wall(side);
        match grid.turn {
            None => bake_wall(wall, &grid, mesh),
            Some(turn) => {
                let mut local = MeshBuffers::new();
                bake_wall(wall, &grid.local(), &mut local);
                mesh.append_transformed(&local, &SubmeshTransform::from_turn(turn));
            }
        }
    }
}

/// Ground floor carries only the entrance. Upper floors get one trim panel
/// per section, pushed out onto the bay face inside an extended run, and one
/// bay box per run.
fn bake_wall(wall: &Wall, grid: &WallGrid, out: &mut MeshBuffers) {
    let mut run_start: Option<u32> = None;
    for event in WallCursor::new(wall) {
        match event {
            CursorEvent::Section(cell) => {
                let extended = cell.token == WallToken::Extended;
                match (extended, run_start) {
                    (true, None) => run_start = Some(cell.section),
                    (false, Some(start)) => {
                        bay(out, grid, cell.story, start, cell.section - start);
                        run_start = None;
                    }
                    _ => {}
                }

                if cell.story == 0 {
                    if cell.token == WallToken::Door {
                        place(
                            out,
                            Primitive::DoubleWindow,
                            grid.panel(0, cell.section, ENTRANCE, 0.0),
                            Paint::Glazed {
                                glass: GLASS,
                                frame: FRAME_DARK,
                            },
                        );
                    }
                    continue;
                }
                let (standoff, color) = if extended {
                    (OFFICE_BAY_DEPTH, FRAME_DARK)
                } else {
                    (0.0, GLASS)
                };
                place(
                    out,
                    Primitive::Square,
                    grid.panel(cell.story, cell.section, TRIM, standoff),
                    Paint::Solid(color),
                );
            }
            CursorEvent::StoryEnd { story, sections } => {
                if let Some(start) = run_start.take() {
                    bay(out, grid, story, start, sections - start);
                }
            }
        }
    }
}

fn bay(out: &mut MeshBuffers, grid: &WallGrid, story: u32, start: u32, len: u32) {
    if story == 0 || len == 0 {
        return;
    }
    place(
        out,
        Primitive::Cube,
        grid.span_box(story, start, len, OFFICE_BAY_DEPTH),
        Paint::Solid(OFFICE_BAY),
    );
}
