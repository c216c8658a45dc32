use super::pick_window;
use crate::category::BuildingCategory;
use crate::dimensions::{floor_count, Dimensions};
use crate::draws::DrawSource;
use crate::grammar::{FacadeFlags, FacadeGrammar, SectionCounts, WingScale};
use crate::params::HouseParams;
use crate::tokens::{RoofGrammar, RoofShape, Wall, WallToken};

/// Section index of the single front door. `4u(1-u)` peaks at `u = 0.5`,
/// so doors cluster around the middle of the front.
pub(super) fn door_section(u: f32, sections: usize) -> usize {
    let raw = (4.0 * u * (1.0 - u) * sections as f32).floor().max(0.0) as usize;
    raw.min(sections.saturating_sub(1))
}

pub(super) fn section_counts(dims: Dimensions) -> SectionCounts {
    SectionCounts {
        // width / (2/3), without the rounding loss of dividing by 0.666..
        width: floor_count(dims.width * 1.5),
        depth: floor_count(dims.depth),
    }
}

pub(super) fn generate(
    dims: Dimensions,
    params: &HouseParams,
    draws: &mut impl DrawSource,
) -> FacadeGrammar {
    let stories = dims.story_count();
    let sections = section_counts(dims);
    let (sw, sd) = (sections.width as usize, sections.depth as usize);

    let mut front = Vec::with_capacity(stories as usize);
    let mut back = Vec::with_capacity(stories as usize);
    let mut left = Vec::with_capacity(stories as usize);
    let mut right = Vec::with_capacity(stories as usize);

    for s in 0..stories {
        let story = s as f32;
        let mut front_row = Vec::with_capacity(sw);
        let mut back_row = Vec::with_capacity(sw);
        for _ in 0..sw {
            front_row.push(pick_window(
                draws.next_unit(),
                params.front_window_per_story * story,
                params.front_double_window,
            ));
            back_row.push(pick_window(
                draws.next_unit(),
                params.back_window,
                params.back_double_window,
            ));
        }

        let side_p = params.side_window_per_story * story;
        let mut left_row = Vec::with_capacity(sd);
        let mut right_row = Vec::with_capacity(sd);
        for _ in 0..sd {
            left_row.push(pick_window(draws.next_unit(), side_p, 0.0));
            right_row.push(pick_window(draws.next_unit(), side_p, 0.0));
        }

        front.push(front_row);
        back.push(back_row);
        left.push(left_row);
        right.push(right_row);
    }

    let u = draws.next_unit();
    if let Some(ground) = front.first_mut().filter(|row| !row.is_empty()) {
        let at = door_section(u, ground.len());
        ground[at] = WallToken::Door;
    }

    let shape = if sections.width < params.min_sections_for_pitched {
        RoofShape::Flat
    } else if draws.next_unit() < params.flat_roof {
        RoofShape::Flat
    } else {
        RoofShape::Pitched
    };
    let garage = draws.next_unit() < params.garage;

    FacadeGrammar {
        category: BuildingCategory::House,
        dimensions: dims,
        stories,
        sections,
        front: Wall::from_stories(front),
        back: Wall::from_stories(back),
        left: Wall::from_stories(left),
        right: Wall::from_stories(right),
        roof: RoofGrammar::new(shape),
        flags: FacadeFlags {
            garage,
            double_sided: false,
        },
        wing: WingScale::default(),
    }
}
