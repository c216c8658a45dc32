use crate::category::BuildingCategory;
use crate::dimensions::{floor_count, Dimensions};
use crate::draws::DrawSource;
use crate::grammar::{FacadeFlags, FacadeGrammar, SectionCounts, WingScale};
use crate::params::OfficeParams;
use crate::tokens::{RoofGrammar, RoofShape, Wall, WallToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    NotStarted,
    Extended,
    Ended,
}

/// One story of one wall: plain windows with at most one run of extended
/// bay segments. A run may only start in the first half of the wall and may
/// only end past the midpoint. One draw per section.
fn run_row(
    sections: usize,
    start_p: f32,
    end_p: f32,
    draws: &mut impl DrawSource,
) -> Vec<WallToken> {
    let half = sections as f32 / 2.0;
    let mut run = Run::NotStarted;
    let mut row = Vec::with_capacity(sections);
    for i in 0..sections {
        let r = draws.next_unit();
        let at = i as f32;
        let token = match run {
            Run::NotStarted if at < half && r < start_p => {
                run = Run::Extended;
                WallToken::Extended
            }
            Run::Extended if at > half && r < end_p => {
                run = Run::Ended;
                WallToken::Window
            }
            Run::Extended => WallToken::Extended,
            Run::NotStarted | Run::Ended => WallToken::Window,
        };
        row.push(token);
    }
    row
}

/// Width and start of the ground-floor entrance band. Width is uniform in
/// `[2, sections - 1]`, clamped to the row for very narrow fronts.
pub(super) fn door_band(sections: usize, u_width: f32, u_start: f32) -> (usize, usize) {
    let spread = (sections as f32 - 2.0).max(0.0);
    let width = ((u_width * spread).floor() as usize + 2).min(sections);
    let start = (u_start * (sections - width) as f32).floor() as usize;
    (width, start.min(sections - width))
}

pub(super) fn generate(
    dims: Dimensions,
    params: &OfficeParams,
    draws: &mut impl DrawSource,
) -> FacadeGrammar {
    let stories = dims.story_count();
    let sections = SectionCounts {
        width: floor_count(dims.width),
        depth: floor_count(dims.depth),
    };
    let (sw, sd) = (sections.width as usize, sections.depth as usize);

    let mut front = Vec::with_capacity(stories as usize);
    let mut back = Vec::with_capacity(stories as usize);
    let mut left = Vec::with_capacity(stories as usize);
    let mut right = Vec::with_capacity(stories as usize);
    for _ in 0..stories {
        front.push(run_row(sw, params.run_start, params.width_run_end, draws));
        back.push(run_row(sw, params.run_start, params.width_run_end, draws));
        left.push(run_row(sd, params.run_start, params.depth_run_end, draws));
        right.push(run_row(sd, params.run_start, params.depth_run_end, draws));
    }

    let u_width = draws.next_unit();
    let u_start = draws.next_unit();
    if let Some(ground) = front.first_mut() {
        let (width, start) = door_band(ground.len(), u_width, u_start);
        for token in &mut ground[start..start + width] {
            *token = WallToken::Door;
        }
    }

    FacadeGrammar {
        category: BuildingCategory::Office,
        dimensions: dims,
        stories,
        sections,
        front: Wall::from_stories(front),
        back: Wall::from_stories(back),
        left: Wall::from_stories(left),
        right: Wall::from_stories(right),
        roof: RoofGrammar::new(RoofShape::Flat),
        flags: FacadeFlags::default(),
        wing: WingScale::default(),
    }
}
