//! Building size and the axis convention shared by the whole pipeline.
//!
//! `width` runs along world +x, `height` along world +y (vertical) and
//! `depth` along world +z. A building occupies `[0, width] x [0, depth]` on
//! the ground plane with its base at `y = 0`. The front wall is the `z = 0`
//! face and looks toward -z.

use serde::{Deserialize, Serialize};

use crate::error::FacadeError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Boundary check: every component must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), FacadeError> {
        let ok = [self.width, self.height, self.depth]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0);
        if ok {
            Ok(())
        } else {
            Err(FacadeError::InvalidDimensions {
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
        }
    }

    /// One story per whole unit of height.
    pub fn story_count(&self) -> u32 {
        floor_count(self.height)
    }

    /// Height of a single story. Falls back to the full height when the
    /// building is shorter than one story.
    pub fn story_height(&self) -> f32 {
        match self.story_count() {
            0 => self.height,
            n => self.height / n as f32,
        }
    }
}

/// `floor(value)` as a count, saturating negative and non-finite input to 0.
pub fn floor_count(value: f32) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u32
    } else {
        0
    }
}
