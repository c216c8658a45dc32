//! The symbolic output of generation: everything the baker needs, and
//! nothing random left to decide.

use serde::{Deserialize, Serialize};

use crate::category::BuildingCategory;
use crate::dimensions::Dimensions;
use crate::draws::DrawSource;
use crate::error::FacadeError;
use crate::params::WingParams;
use crate::tokens::{RoofGrammar, Wall};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    /// `z = 0`, faces -z.
    Front,
    /// `z = depth`, faces +z.
    Back,
    /// `x = 0`, faces -x.
    Left,
    /// `x = width`, faces +x.
    Right,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [
        WallSide::Front,
        WallSide::Back,
        WallSide::Left,
        WallSide::Right,
    ];

    /// Front and back run along the width, the sides along the depth.
    pub fn runs_along_width(self) -> bool {
        matches!(self, WallSide::Front | WallSide::Back)
    }
}

/// Tiling granularity of the width walls and the depth walls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCounts {
    pub width: u32,
    pub depth: u32,
}

impl SectionCounts {
    pub fn for_side(&self, side: WallSide) -> u32 {
        if side.runs_along_width() {
            self.width
        } else {
            self.depth
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacadeFlags {
    /// Garage on houses; service desk on hotels.
    pub garage: bool,
    /// Hotel back wall mirrors the front.
    pub double_sided: bool,
}

/// Proportions of a wing grown from a tower or bay marker, relative to the
/// main block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WingScale {
    pub width: f32,
    pub depth: f32,
}

impl Default for WingScale {
    fn default() -> Self {
        Self {
            width: 1.0,
            depth: 1.0,
        }
    }
}

impl WingScale {
    /// Two draws: width factor then depth factor.
    pub fn draw(params: &WingParams, draws: &mut impl DrawSource) -> Self {
        let width = params.width_min + draws.next_unit() * params.width_span;
        let depth = params.depth_min + draws.next_unit() * params.depth_span;
        Self { width, depth }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacadeGrammar {
    pub category: BuildingCategory,
    pub dimensions: Dimensions,
    pub stories: u32,
    pub sections: SectionCounts,
    pub front: Wall,
    pub back: Wall,
    pub left: Wall,
    pub right: Wall,
    pub roof: RoofGrammar,
    pub flags: FacadeFlags,
    #[serde(default)]
    pub wing: WingScale,
}

impl FacadeGrammar {
    pub fn wall(&self, side: WallSide) -> &Wall {
        match side {
            WallSide::Front => &self.front,
            WallSide::Back => &self.back,
            WallSide::Left => &self.left,
            WallSide::Right => &self.right,
        }
    }

    pub fn to_json(&self) -> Result<String, FacadeError> {
        serde_json::to_string_pretty(self).map_err(FacadeError::from)
    }

    /// Loads a stored grammar so it can be re-baked without new draws.
    pub fn from_json(json: &str) -> Result<Self, FacadeError> {
        let grammar: FacadeGrammar = serde_json::from_str(json)?;
        grammar.validate()?;
        Ok(grammar)
    }

    /// Checks that the record is one `generate` could have produced: valid
    /// dimensions, a story count matching the height, every wall holding
    /// `stories` rows of its side's section count, and positive wing factors.
    pub fn validate(&self) -> Result<(), FacadeError> {
        self.dimensions.validate()?;
        let expected = self.dimensions.story_count();
        if self.stories != expected {
            return Err(FacadeError::InvalidGrammar(format!(
                "{} stories recorded, height {} gives {expected}",
                self.stories, self.dimensions.height
            )));
        }
        for side in WallSide::ALL {
            let wall = self.wall(side);
            if !self.category.has_walls() {
                if !wall.is_empty() {
                    return Err(FacadeError::InvalidGrammar(format!(
                        "{side:?} wall of a {} must be empty",
                        self.category
                    )));
                }
                continue;
            }
            let rows = wall.story_count();
            if rows != self.stories as usize {
                return Err(FacadeError::InvalidGrammar(format!(
                    "{side:?} wall has {rows} stories, expected {}",
                    self.stories
                )));
            }
            let sections = self.sections.for_side(side) as usize;
            if let Some((story, row)) = wall
                .stories()
                .enumerate()
                .find(|(_, row)| row.len() != sections)
            {
                return Err(FacadeError::InvalidGrammar(format!(
                    "{side:?} wall story {story} has {} sections, expected {sections}",
                    row.len()
                )));
            }
        }
        let wing = self.wing;
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !(positive(wing.width) && positive(wing.depth)) {
            return Err(FacadeError::InvalidGrammar(format!(
                "wing scale must be positive, got {} x {}",
                wing.width, wing.depth
            )));
        }
        Ok(())
    }
}
