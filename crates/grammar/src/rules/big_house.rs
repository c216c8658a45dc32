use super::double_or_blank;
use crate::category::BuildingCategory;
use crate::dimensions::{floor_count, Dimensions};
use crate::draws::DrawSource;
use crate::grammar::{FacadeFlags, FacadeGrammar, SectionCounts, WingScale};
use crate::params::{BigHouseParams, WingParams};
use crate::tokens::{RoofGrammar, RoofShape, Wall, WallToken};

/// Ground-story front sections taken by the entrance: three centred cells
/// for an even row, two for an odd one.
pub(super) fn door_sections(sections: usize) -> Vec<usize> {
    if sections == 0 {
        return Vec::new();
    }
    let candidates = if sections % 2 == 0 {
        let mid = sections / 2;
        vec![mid - 1, mid, mid + 1]
    } else {
        let mid = (sections - 1) / 2;
        vec![mid, mid + 1]
    };
    candidates.into_iter().filter(|i| *i < sections).collect()
}

fn end_section(
    ground: bool,
    params: &BigHouseParams,
    draws: &mut impl DrawSource,
) -> WallToken {
    if ground {
        let r = draws.next_unit();
        if r < params.tower {
            return WallToken::Tower;
        }
        if r < params.tower + params.bay {
            return WallToken::Bay;
        }
    }
    double_or_blank(draws.next_unit(), params.end_window)
}

pub(super) fn generate(
    dims: Dimensions,
    params: &BigHouseParams,
    wings: &WingParams,
    draws: &mut impl DrawSource,
) -> FacadeGrammar {
    let stories = dims.story_count();
    let sections = SectionCounts {
        width: floor_count(dims.width),
        depth: floor_count(dims.depth / 2.0),
    };
    let (sw, sd) = (sections.width as usize, sections.depth as usize);

    let mut front = Vec::with_capacity(stories as usize);
    let mut back = Vec::with_capacity(stories as usize);
    let mut left = Vec::with_capacity(stories as usize);
    let mut right = Vec::with_capacity(stories as usize);

    for s in 0..stories {
        let mut front_row = Vec::with_capacity(sw);
        let mut back_row = Vec::with_capacity(sw);
        for i in 0..sw {
            let token = if i == 0 || i == sw - 1 {
                end_section(s == 0, params, draws)
            } else {
                double_or_blank(draws.next_unit(), params.front_window)
            };
            front_row.push(token);
            back_row.push(double_or_blank(draws.next_unit(), params.back_window));
        }

        let mut left_row = Vec::with_capacity(sd);
        let mut right_row = Vec::with_capacity(sd);
        for _ in 0..sd {
            left_row.push(double_or_blank(draws.next_unit(), params.side_window));
            right_row.push(double_or_blank(draws.next_unit(), params.side_window));
        }

        front.push(front_row);
        back.push(back_row);
        left.push(left_row);
        right.push(right_row);
    }

    if let Some(ground) = front.first_mut() {
        for at in door_sections(ground.len()) {
            ground[at] = WallToken::Door;
        }
    }

    let garage = draws.next_unit() < params.garage;
    let wing = WingScale::draw(wings, draws);

    FacadeGrammar {
        category: BuildingCategory::BigHouse,
        dimensions: dims,
        stories,
        sections,
        front: Wall::from_stories(front),
        back: Wall::from_stories(back),
        left: Wall::from_stories(left),
        right: Wall::from_stories(right),
        roof: RoofGrammar::new(RoofShape::Pitched),
        flags: FacadeFlags {
            garage,
            double_sided: false,
        },
        wing,
    }
}
