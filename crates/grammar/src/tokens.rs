//! Wall and roof token alphabets.
//!
//! Each token has a one-character symbol used for display, parsing and the
//! serialized form of a grammar (`"[w_W][__D]"`, `"PTT"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FacadeError;

// ---------------------------------------------------------------------------
// Wall tokens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallToken {
    StoryStart,
    StoryEnd,
    Blank,
    Window,
    DoubleWindow,
    Door,
    /// Corner tower, ground story of a mansion front only.
    Tower,
    /// Corner bay that grows a wing, ground story only.
    Bay,
    /// Office bay segment pushed out from the wall plane.
    Extended,
}

impl WallToken {
    pub fn symbol(self) -> char {
        match self {
            WallToken::StoryStart => '[',
            WallToken::StoryEnd => ']',
            WallToken::Blank => '_',
            WallToken::Window => 'w',
            WallToken::DoubleWindow => 'W',
            WallToken::Door => 'D',
            WallToken::Tower => 'T',
            WallToken::Bay => 'B',
            WallToken::Extended => 'E',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        Some(match c {
            '[' => WallToken::StoryStart,
            ']' => WallToken::StoryEnd,
            '_' => WallToken::Blank,
            'w' => WallToken::Window,
            'W' => WallToken::DoubleWindow,
            'D' => WallToken::Door,
            'T' => WallToken::Tower,
            'B' => WallToken::Bay,
            'E' => WallToken::Extended,
            _ => return None,
        })
    }

    /// Everything except the story markers occupies one section.
    pub fn is_section(self) -> bool {
        !matches!(self, WallToken::StoryStart | WallToken::StoryEnd)
    }

    /// Tokens that grow a wing off the main block.
    pub fn is_wing_marker(self) -> bool {
        matches!(self, WallToken::Tower | WallToken::Bay)
    }
}

// ---------------------------------------------------------------------------
// Wall
// ---------------------------------------------------------------------------

/// Token sequence of one wall, story by story: `[`, one token per section,
/// `]`, repeated once per story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Wall {
    tokens: Vec<WallToken>,
}

impl Wall {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a wall from rows of section tokens, bottom story first.
    pub fn from_stories(rows: Vec<Vec<WallToken>>) -> Self {
        let len = rows.iter().map(|r| r.len() + 2).sum();
        let mut tokens = Vec::with_capacity(len);
        for row in rows {
            tokens.push(WallToken::StoryStart);
            tokens.extend(row.into_iter().filter(|t| t.is_section()));
            tokens.push(WallToken::StoryEnd);
        }
        Self { tokens }
    }

    pub fn tokens(&self) -> &[WallToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Section tokens of each story, bottom first.
    pub fn stories(&self) -> Stories<'_> {
        Stories { rest: &self.tokens }
    }

    pub fn story(&self, index: usize) -> Option<&[WallToken]> {
        self.stories().nth(index)
    }

    pub fn story_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| **t == WallToken::StoryStart)
            .count()
    }

    /// Number of occurrences of `token` across all stories.
    pub fn count(&self, token: WallToken) -> usize {
        self.tokens.iter().filter(|t| **t == token).count()
    }
}

/// Iterator over the section tokens of each story of a [`Wall`].
pub struct Stories<'a> {
    rest: &'a [WallToken],
}

impl<'a> Iterator for Stories<'a> {
    type Item = &'a [WallToken];

    fn next(&mut self) -> Option<Self::Item> {
        let start = self
            .rest
            .iter()
            .position(|t| *t == WallToken::StoryStart)?;
        let body = &self.rest[start + 1..];
        let end = body
            .iter()
            .position(|t| *t == WallToken::StoryEnd)
            .unwrap_or(body.len());
        self.rest = body.get(end + 1..).unwrap_or(&[]);
        Some(&body[..end])
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Wall {
    type Err = FacadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Vec::with_capacity(s.len());
        let mut open = false;
        for (i, c) in s.chars().enumerate() {
            let token = WallToken::from_symbol(c).ok_or_else(|| {
                FacadeError::InvalidGrammar(format!("unknown wall symbol '{c}' at {i}"))
            })?;
            match token {
                WallToken::StoryStart if open => {
                    return Err(FacadeError::InvalidGrammar(format!(
                        "nested story start at {i}"
                    )))
                }
                WallToken::StoryStart => open = true,
                WallToken::StoryEnd if !open => {
                    return Err(FacadeError::InvalidGrammar(format!(
                        "story end without start at {i}"
                    )))
                }
                WallToken::StoryEnd => open = false,
                _ if !open => {
                    return Err(FacadeError::InvalidGrammar(format!(
                        "section '{c}' outside a story at {i}"
                    )))
                }
                _ => {}
            }
            tokens.push(token);
        }
        if open {
            return Err(FacadeError::InvalidGrammar(
                "unterminated story".to_string(),
            ));
        }
        Ok(Self { tokens })
    }
}

impl From<Wall> for String {
    fn from(wall: Wall) -> Self {
        wall.to_string()
    }
}

impl TryFrom<String> for Wall {
    type Error = FacadeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// Roof
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoofShape {
    Flat,
    /// Pitched on houses, pointed (stepped) on skyscrapers.
    Pitched,
    Round,
}

impl RoofShape {
    pub fn symbol(self) -> char {
        match self {
            RoofShape::Flat => 'F',
            RoofShape::Pitched => 'P',
            RoofShape::Round => 'R',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'F' => Some(RoofShape::Flat),
            'P' => Some(RoofShape::Pitched),
            'R' => Some(RoofShape::Round),
            _ => None,
        }
    }
}

/// Roof shape tag followed by `tiers` setback markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RoofGrammar {
    pub shape: RoofShape,
    pub tiers: u32,
}

impl RoofGrammar {
    pub const fn new(shape: RoofShape) -> Self {
        Self { shape, tiers: 0 }
    }

    pub const fn tiered(shape: RoofShape, tiers: u32) -> Self {
        Self { shape, tiers }
    }
}

impl fmt::Display for RoofGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shape.symbol())?;
        for _ in 0..self.tiers {
            f.write_str("T")?;
        }
        Ok(())
    }
}

impl FromStr for RoofGrammar {
    type Err = FacadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let shape = chars
            .next()
            .and_then(RoofShape::from_symbol)
            .ok_or_else(|| FacadeError::InvalidGrammar(format!("bad roof shape in '{s}'")))?;
        let mut tiers = 0;
        for c in chars {
            if c != 'T' {
                return Err(FacadeError::InvalidGrammar(format!(
                    "unexpected roof symbol '{c}' in '{s}'"
                )));
            }
            tiers += 1;
        }
        Ok(Self { shape, tiers })
    }
}

impl From<RoofGrammar> for String {
    fn from(roof: RoofGrammar) -> Self {
        roof.to_string()
    }
}

impl TryFrom<String> for RoofGrammar {
    type Error = FacadeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WallToken::*;

    #[test]
    fn test_from_stories_brackets_each_row() {
        let wall = Wall::from_stories(vec![vec![Window, Door], vec![Blank, DoubleWindow]]);
        assert_eq!(wall.to_string(), "[wD][_W]");
        assert_eq!(wall.story_count(), 2);
    }

    #[test]
    fn test_stories_iterates_sections_only() {
        let wall: Wall = "[wD_][WWW]".parse().unwrap();
        let stories: Vec<&[WallToken]> = wall.stories().collect();
        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0], &[Window, Door, Blank]);
        assert_eq!(stories[1], &[DoubleWindow; 3]);
        assert_eq!(wall.story(1), Some(&[DoubleWindow; 3][..]));
        assert_eq!(wall.story(2), None);
    }

    #[test]
    fn test_empty_stories_keep_markers() {
        let wall = Wall::from_stories(vec![vec![], vec![]]);
        assert_eq!(wall.to_string(), "[][]");
        assert!(wall.stories().all(|s| s.is_empty()));
        assert_eq!(wall.stories().count(), 2);
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = "[wx]".parse::<Wall>().unwrap_err();
        assert!(matches!(err, FacadeError::InvalidGrammar(_)));
    }

    #[test]
    fn test_parse_rejects_unbalanced_markers() {
        assert!("[w".parse::<Wall>().is_err());
        assert!("w]".parse::<Wall>().is_err());
        assert!("[[w]]".parse::<Wall>().is_err());
    }

    #[test]
    fn test_count_tokens() {
        let wall: Wall = "[DDw][w__]".parse().unwrap();
        assert_eq!(wall.count(Door), 2);
        assert_eq!(wall.count(Window), 2);
        assert_eq!(wall.count(StoryStart), 2);
    }

    #[test]
    fn test_roof_display_and_parse() {
        let roof = RoofGrammar::tiered(RoofShape::Pitched, 3);
        assert_eq!(roof.to_string(), "PTTT");
        assert_eq!("PTTT".parse::<RoofGrammar>().unwrap(), roof);
        assert_eq!("F".parse::<RoofGrammar>().unwrap(), RoofGrammar::new(RoofShape::Flat));
        assert!("X".parse::<RoofGrammar>().is_err());
        assert!("RTx".parse::<RoofGrammar>().is_err());
        assert!("".parse::<RoofGrammar>().is_err());
    }

    #[test]
    fn test_wall_serializes_as_symbol_string() {
        let wall: Wall = "[_B]".parse().unwrap();
        let json = serde_json::to_string(&wall).unwrap();
        assert_eq!(json, "\"[_B]\"");
        let back: Wall = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wall);
    }
}
