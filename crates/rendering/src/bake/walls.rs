//! Wall frames, the (story, section) cursor and per-cell placements.
//!
//! Every wall is laid out in one local frame: `u` runs along the wall from
//! the left edge as seen from outside, `v` runs up, and the outward
//! direction is -z (the front wall's own frame, mirrored so panels face
//! out). Back and side walls are then turned into place about a vertical
//! pivot.

use std::f32::consts::{FRAC_PI_2, PI};
use std::slice;

use bevy::math::Vec3;
use grammar::{Dimensions, Wall, WallSide, WallToken};

use crate::config::PANEL_INSET;
use crate::placement::{Placement, Turn};

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cell {
    pub story: u32,
    pub section: u32,
    pub token: WallToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CursorEvent {
    Section(Cell),
    StoryEnd { story: u32, sections: u32 },
}

/// Walks a wall's tokens: `[` resets the section, each section token
/// advances it, `]` advances the story.
pub(crate) struct WallCursor<'a> {
    tokens: slice::Iter<'a, WallToken>,
    story: u32,
    section: u32,
}

impl<'a> WallCursor<'a> {
    pub fn new(wall: &'a Wall) -> Self {
        Self {
            tokens: wall.tokens().iter(),
            story: 0,
            section: 0,
        }
    }
}

impl Iterator for WallCursor<'_> {
    type Item = CursorEvent;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match *self.tokens.next()? {
                WallToken::StoryStart => self.section = 0,
                WallToken::StoryEnd => {
                    let event = CursorEvent::StoryEnd {
                        story: self.story,
                        sections: self.section,
                    };
                    self.story += 1;
                    self.section = 0;
                    return Some(event);
                }
                token => {
                    let cell = Cell {
                        story: self.story,
                        section: self.section,
                        token,
                    };
                    self.section += 1;
                    return Some(CursorEvent::Section(cell));
                }
            }
        }
    }
}

/// Section cells only.
pub(crate) fn cells(wall: &Wall) -> impl Iterator<Item = Cell> + '_ {
    WallCursor::new(wall).filter_map(|event| match event {
        CursorEvent::Section(cell) => Some(cell),
        CursorEvent::StoryEnd { .. } => None,
    })
}

// ---------------------------------------------------------------------------
// Frames
// ---------------------------------------------------------------------------

pub(crate) fn wall_length(side: WallSide, dims: Dimensions) -> f32 {
    if side.runs_along_width() {
        dims.width
    } else {
        dims.depth
    }
}

/// Turn taking the local wall frame onto `side` of the footprint.
pub(crate) fn wall_turn(side: WallSide, dims: Dimensions) -> Option<Turn> {
    let (w, d) = (dims.width, dims.depth);
    match side {
        WallSide::Front => None,
        WallSide::Back => Some(Turn::about(PI, Vec3::new(w / 2.0, 0.0, d / 2.0))),
        // local u = 0 lands on z = depth, outward becomes -x
        WallSide::Left => Some(Turn::about(FRAC_PI_2, Vec3::new(d / 2.0, 0.0, d / 2.0))),
        // local u = 0 lands on z = 0, outward becomes +x
        WallSide::Right => Some(Turn::about(-FRAC_PI_2, Vec3::new(w / 2.0, 0.0, w / 2.0))),
    }
}

/// Sub-rectangle of a cell, as fractions of the cell's width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CellRect {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl CellRect {
    pub const fn new(width: f32, height: f32, x: f32, y: f32) -> Self {
        Self {
            width,
            height,
            x,
            y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WallGrid {
    pub cell_width: f32,
    pub story_height: f32,
    pub turn: Option<Turn>,
}

impl WallGrid {
    pub fn new(dims: Dimensions, side: WallSide, sections: u32) -> Self {
        Self {
            cell_width: wall_length(side, dims) / sections as f32,
            story_height: dims.story_height(),
            turn: wall_turn(side, dims),
        }
    }

    /// Same grid left in the local frame, for walls baked into a temporary
    /// buffer and turned as a whole.
    pub fn local(self) -> Self {
        Self { turn: None, ..self }
    }

    /// Flat panel over `rect` of cell (story, section), `standoff` further
    /// out than the usual inset.
    pub fn panel(&self, story: u32, section: u32, rect: CellRect, standoff: f32) -> Placement {
        let (cw, sh) = (self.cell_width, self.story_height);
        Placement::new(
            Vec3::new(rect.width * cw, rect.height * sh, 1.0),
            Vec3::new(
                (section as f32 + rect.x) * cw,
                (story as f32 + rect.y) * sh,
                -(PANEL_INSET + standoff),
            ),
        )
        .mirrored()
        .turned(self.turn)
    }

    /// Box standing `depth` out of the wall over `len` sections of a story.
    pub fn span_box(&self, story: u32, start: u32, len: u32, depth: f32) -> Placement {
        let (cw, sh) = (self.cell_width, self.story_height);
        Placement::new(
            Vec3::new(len as f32 * cw, sh, depth),
            Vec3::new(start as f32 * cw, story as f32 * sh, 0.0),
        )
        .mirrored()
        .turned(self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WallToken::*;

    fn square_centre(placement: &Placement) -> Vec3 {
        let p = placement.point([0.5, 0.5, 0.0, 1.0]);
        Vec3::new(p[0], p[1], p[2])
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_cursor_tracks_story_and_section() {
        let wall: Wall = "[wD][_W_]".parse().unwrap();
        let events: Vec<CursorEvent> = WallCursor::new(&wall).collect();
        assert_eq!(
            events,
            vec![
                CursorEvent::Section(Cell { story: 0, section: 0, token: Window }),
                CursorEvent::Section(Cell { story: 0, section: 1, token: Door }),
                CursorEvent::StoryEnd { story: 0, sections: 2 },
                CursorEvent::Section(Cell { story: 1, section: 0, token: Blank }),
                CursorEvent::Section(Cell { story: 1, section: 1, token: DoubleWindow }),
                CursorEvent::Section(Cell { story: 1, section: 2, token: Blank }),
                CursorEvent::StoryEnd { story: 1, sections: 3 },
            ]
        );
    }

    #[test]
    fn test_cells_skip_story_ends() {
        let wall: Wall = "[][w]".parse().unwrap();
        let cells: Vec<Cell> = cells(&wall).collect();
        assert_eq!(cells, vec![Cell { story: 1, section: 0, token: Window }]);
    }

    #[test]
    fn test_panels_land_on_their_walls() {
        let dims = Dimensions::new(4.0, 2.0, 2.0);
        let full = CellRect::new(1.0, 1.0, 0.0, 0.0);
        let inset = PANEL_INSET;

        let front = WallGrid::new(dims, WallSide::Front, 4).panel(0, 0, full, 0.0);
        assert!(close(square_centre(&front), Vec3::new(0.5, 0.5, -inset)));

        let back = WallGrid::new(dims, WallSide::Back, 4).panel(0, 0, full, 0.0);
        assert!(close(square_centre(&back), Vec3::new(3.5, 0.5, 2.0 + inset)));

        let left = WallGrid::new(dims, WallSide::Left, 2).panel(0, 0, full, 0.0);
        assert!(close(square_centre(&left), Vec3::new(-inset, 0.5, 1.5)));

        let right = WallGrid::new(dims, WallSide::Right, 2).panel(0, 0, full, 0.0);
        assert!(close(square_centre(&right), Vec3::new(4.0 + inset, 0.5, 0.5)));
    }

    #[test]
    fn test_panels_face_outward() {
        let dims = Dimensions::new(5.0, 3.0, 2.0);
        let full = CellRect::new(1.0, 1.0, 0.0, 0.0);
        let expected = [
            (WallSide::Front, Vec3::NEG_Z),
            (WallSide::Back, Vec3::Z),
            (WallSide::Left, Vec3::NEG_X),
            (WallSide::Right, Vec3::X),
        ];
        for (side, out) in expected {
            let placement = WallGrid::new(dims, side, 2).panel(1, 1, full, 0.0);
            let n = placement.normal([0.0, 0.0, 1.0, 0.0]);
            assert!(close(Vec3::new(n[0], n[1], n[2]), out), "{side:?}: {n:?}");
        }
    }

    #[test]
    fn test_span_box_stands_out_of_front() {
        let dims = Dimensions::new(6.0, 3.0, 2.0);
        let grid = WallGrid::new(dims, WallSide::Front, 6);
        let placement = grid.span_box(1, 2, 3, 0.5);
        let near = placement.point([0.0, 0.0, 0.0, 1.0]);
        let far = placement.point([1.0, 1.0, 1.0, 1.0]);
        assert!(close(Vec3::new(near[0], near[1], near[2]), Vec3::new(2.0, 1.0, 0.0)));
        assert!(close(Vec3::new(far[0], far[1], far[2]), Vec3::new(5.0, 2.0, -0.5)));
    }

    #[test]
    fn test_zero_sections_give_infinite_cells() {
        let dims = Dimensions::new(0.5, 1.0, 0.5);
        let grid = WallGrid::new(dims, WallSide::Left, 0);
        assert!(grid.cell_width.is_infinite());
    }
}
