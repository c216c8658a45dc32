use crate::category::BuildingCategory;
use crate::dimensions::Dimensions;
use crate::draws::DrawSource;
use crate::grammar::{FacadeFlags, FacadeGrammar, SectionCounts, WingScale};
use crate::params::SkyscraperParams;
use crate::tokens::{RoofGrammar, RoofShape, Wall};

pub(super) fn generate(
    dims: Dimensions,
    params: &SkyscraperParams,
    draws: &mut impl DrawSource,
) -> FacadeGrammar {
    let r = draws.next_unit();
    let shape = if r < params.flat_roof {
        RoofShape::Flat
    } else if r < params.flat_roof + params.pointed_roof {
        RoofShape::Pitched
    } else {
        RoofShape::Round
    };
    let max_tiers = params.max_tiers.max(1);
    let tiers = ((draws.next_unit() * max_tiers as f32).floor() as u32 + 1).min(max_tiers);

    FacadeGrammar {
        category: BuildingCategory::Skyscraper,
        dimensions: dims,
        stories: dims.story_count(),
        sections: SectionCounts::default(),
        front: Wall::empty(),
        back: Wall::empty(),
        left: Wall::empty(),
        right: Wall::empty(),
        roof: RoofGrammar::tiered(shape, tiers),
        flags: FacadeFlags::default(),
        wing: WingScale::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draws::{ScriptedDraws, SeededDraws};

    #[test]
    fn test_tiers_within_one_to_five() {
        let dims = Dimensions::new(4.0, 30.0, 4.0);
        for seed in 0..500 {
            let mut draws = SeededDraws::from_seed_u64(seed);
            let grammar = generate(dims, &SkyscraperParams::default(), &mut draws);
            assert!((1..=5).contains(&grammar.roof.tiers), "{}", grammar.roof);
        }
    }

    #[test]
    fn test_tier_extremes() {
        let dims = Dimensions::new(4.0, 30.0, 4.0);
        let low = generate(dims, &SkyscraperParams::default(), &mut ScriptedDraws::constant(0.0));
        assert_eq!(low.roof.tiers, 1);
        let high = generate(dims, &SkyscraperParams::default(), &mut ScriptedDraws::constant(0.9999));
        assert_eq!(high.roof.tiers, 5);
    }

    #[test]
    fn test_roof_shape_split() {
        let dims = Dimensions::new(4.0, 30.0, 4.0);
        let params = SkyscraperParams::default();
        let shape_for = |r: f32| generate(dims, &params, &mut ScriptedDraws::new(vec![r, 0.0])).roof.shape;
        assert_eq!(shape_for(0.1), RoofShape::Flat);
        assert_eq!(shape_for(0.5), RoofShape::Pitched);
        assert_eq!(shape_for(0.85), RoofShape::Round);
    }

    #[test]
    fn test_no_walls_no_garage() {
        let mut draws = SeededDraws::default();
        let grammar = generate(Dimensions::new(3.0, 12.0, 3.0), &SkyscraperParams::default(), &mut draws);
        assert!(grammar.front.is_empty() && grammar.back.is_empty());
        assert!(grammar.left.is_empty() && grammar.right.is_empty());
        assert_eq!(grammar.sections, SectionCounts::default());
        assert_eq!(grammar.stories, 12);
        assert!(!grammar.flags.garage);
        assert_eq!(grammar.roof.to_string().len() as u32, 1 + grammar.roof.tiers);
    }
}
