use crate::category::BuildingCategory;
use crate::dimensions::{floor_count, Dimensions};
use crate::draws::DrawSource;
use crate::grammar::{FacadeFlags, FacadeGrammar, SectionCounts, WingScale};
use crate::params::{HotelParams, WingParams};
use crate::tokens::{RoofGrammar, RoofShape, Wall, WallToken};

/// Rooms alternate: window on even sections, balcony door on odd ones.
fn room_token(i: usize) -> WallToken {
    if i % 2 == 0 {
        WallToken::DoubleWindow
    } else {
        WallToken::Door
    }
}

pub(super) fn generate(
    dims: Dimensions,
    params: &HotelParams,
    wings: &WingParams,
    draws: &mut impl DrawSource,
) -> FacadeGrammar {
    let stories = dims.story_count();
    let sections = SectionCounts {
        width: floor_count(dims.width / 2.0) * 2,
        depth: 1,
    };
    let sw = sections.width as usize;
    let double_sided = draws.next_unit() < params.double_sided;

    let mut front = Vec::with_capacity(stories as usize);
    let mut back = Vec::with_capacity(stories as usize);
    for s in 0..stories {
        let mut front_row = Vec::with_capacity(sw);
        let mut back_row = Vec::with_capacity(sw);
        for i in 0..sw {
            if i == 0 || i == sw - 1 {
                let bay = s == 0 && draws.next_unit() < params.end_bay;
                front_row.push(if bay { WallToken::Bay } else { WallToken::Blank });
                back_row.push(WallToken::Blank);
            } else {
                front_row.push(room_token(i));
                back_row.push(if double_sided {
                    room_token(i)
                } else {
                    WallToken::Blank
                });
            }
        }
        front.push(front_row);
        back.push(back_row);
    }

    let sides: Vec<Vec<WallToken>> = (0..stories).map(|_| vec![WallToken::Blank]).collect();
    let wing = WingScale::draw(wings, draws);

    FacadeGrammar {
        category: BuildingCategory::Hotel,
        dimensions: dims,
        stories,
        sections,
        front: Wall::from_stories(front),
        back: Wall::from_stories(back),
        left: Wall::from_stories(sides.clone()),
        right: Wall::from_stories(sides),
        roof: RoofGrammar::new(RoofShape::Flat),
        flags: FacadeFlags {
            garage: true,
            double_sided,
        },
        wing,
    }
}
