//! Per-category generation rules.
//!
//! Each rule is a pure function of the dimensions, its tunables and the
//! draws it consumes. Draws are taken only at decision points and always in
//! the same order, so recording them is enough to replay a build.

mod big_house;
mod hotel;
mod house;
mod office;
mod skyscraper;

use bevy::log::debug;

use crate::category::BuildingCategory;
use crate::dimensions::Dimensions;
use crate::draws::DrawSource;
use crate::error::FacadeError;
use crate::grammar::FacadeGrammar;
use crate::params::FacadeParams;
use crate::tokens::WallToken;

/// Generates the façade grammar of one building.
///
/// Fails only when `dims` is not finite and positive.
pub fn generate(
    category: BuildingCategory,
    dims: Dimensions,
    params: &FacadeParams,
    draws: &mut impl DrawSource,
) -> Result<FacadeGrammar, FacadeError> {
    dims.validate()?;
    let grammar = match category {
        BuildingCategory::House => house::generate(dims, &params.house, draws),
        BuildingCategory::BigHouse => {
            big_house::generate(dims, &params.big_house, &params.wings, draws)
        }
        BuildingCategory::Hotel => hotel::generate(dims, &params.hotel, &params.wings, draws),
        BuildingCategory::Office => office::generate(dims, &params.office, draws),
        BuildingCategory::Skyscraper => skyscraper::generate(dims, &params.skyscraper, draws),
    };
    debug!(
        "generated {} grammar: {} stories, {}x{} sections, roof {}",
        category, grammar.stories, grammar.sections.width, grammar.sections.depth, grammar.roof
    );
    Ok(grammar)
}

/// Small window below `small`, double window in the next `double` slice,
/// blank otherwise.
fn pick_window(draw: f32, small: f32, double: f32) -> WallToken {
    if draw < small {
        WallToken::Window
    } else if draw < small + double {
        WallToken::DoubleWindow
    } else {
        WallToken::Blank
    }
}

fn double_or_blank(draw: f32, p: f32) -> WallToken {
    if draw < p {
        WallToken::DoubleWindow
    } else {
        WallToken::Blank
    }
}
