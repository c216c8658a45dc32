//! Data-driven façade tunables.
//!
//! Every probability the generation rules consult lives in [`FacadeParams`]
//! so a street can be restyled from a JSON file without recompiling. The
//! defaults reproduce the stock look of each category.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::FacadeError;

// ---------------------------------------------------------------------------
// House
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseParams {
    /// Small-window chance per story index on the front (story 0 never has one).
    pub front_window_per_story: f32,
    /// Extra slice above the small-window chance that yields a double window.
    pub front_double_window: f32,
    pub back_window: f32,
    pub back_double_window: f32,
    /// Small-window chance per story index on the side walls.
    pub side_window_per_story: f32,
    /// Below this many front sections the roof is always flat.
    pub min_sections_for_pitched: u32,
    pub flat_roof: f32,
    pub garage: f32,
}

impl Default for HouseParams {
    fn default() -> Self {
        Self {
            front_window_per_story: 0.2,
            front_double_window: 0.1,
            back_window: 0.2,
            back_double_window: 0.1,
            side_window_per_story: 0.2,
            min_sections_for_pitched: 3,
            flat_roof: 0.3,
            garage: 0.2,
        }
    }
}

// ---------------------------------------------------------------------------
// BigHouse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BigHouseParams {
    pub tower: f32,
    pub bay: f32,
    /// Fallback double-window chance for end sections without a tower or bay.
    pub end_window: f32,
    pub front_window: f32,
    pub back_window: f32,
    pub side_window: f32,
    pub garage: f32,
}

impl Default for BigHouseParams {
    fn default() -> Self {
        Self {
            tower: 0.2,
            bay: 0.3,
            end_window: 0.5,
            front_window: 0.7,
            back_window: 0.75,
            side_window: 0.8,
            garage: 0.1,
        }
    }
}

// ---------------------------------------------------------------------------
// Hotel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelParams {
    pub double_sided: f32,
    pub end_bay: f32,
}

impl Default for HotelParams {
    fn default() -> Self {
        Self {
            double_sided: 0.5,
            end_bay: 0.8,
        }
    }
}

// ---------------------------------------------------------------------------
// Office
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeParams {
    /// Chance per section (first half of a wall) to start an extended run.
    pub run_start: f32,
    /// Chance per section (second half) to end the run on the width walls.
    pub width_run_end: f32,
    /// Same for the depth walls.
    pub depth_run_end: f32,
}

impl Default for OfficeParams {
    fn default() -> Self {
        Self {
            run_start: 0.1,
            width_run_end: 0.8,
            depth_run_end: 0.9,
        }
    }
}

// ---------------------------------------------------------------------------
// Skyscraper
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyscraperParams {
    pub flat_roof: f32,
    pub pointed_roof: f32,
    pub max_tiers: u32,
}

impl Default for SkyscraperParams {
    fn default() -> Self {
        Self {
            flat_roof: 0.4,
            pointed_roof: 0.4,
            max_tiers: 5,
        }
    }
}

// ---------------------------------------------------------------------------
// Wings
// ---------------------------------------------------------------------------

/// Ranges for the proportions of mansion and hotel wings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WingParams {
    pub width_min: f32,
    pub width_span: f32,
    pub depth_min: f32,
    pub depth_span: f32,
}

impl Default for WingParams {
    fn default() -> Self {
        Self {
            width_min: 0.8,
            width_span: 0.4,
            depth_min: 0.6,
            depth_span: 0.2,
        }
    }
}

// ---------------------------------------------------------------------------
// FacadeParams resource
// ---------------------------------------------------------------------------

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadeParams {
    pub house: HouseParams,
    pub big_house: BigHouseParams,
    pub hotel: HotelParams,
    pub office: OfficeParams,
    pub skyscraper: SkyscraperParams,
    pub wings: WingParams,
}

impl FacadeParams {
    /// Parses and validates parameters. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, FacadeError> {
        let params: FacadeParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), FacadeError> {
        let h = &self.house;
        let b = &self.big_house;
        let s = &self.skyscraper;
        let w = &self.wings;
        let probabilities = [
            ("house.front_window_per_story", h.front_window_per_story),
            ("house.front_double_window", h.front_double_window),
            ("house.back_window", h.back_window),
            ("house.back_double_window", h.back_double_window),
            ("house.side_window_per_story", h.side_window_per_story),
            ("house.flat_roof", h.flat_roof),
            ("house.garage", h.garage),
            ("big_house.tower", b.tower),
            ("big_house.bay", b.bay),
            ("big_house.end_window", b.end_window),
            ("big_house.front_window", b.front_window),
            ("big_house.back_window", b.back_window),
            ("big_house.side_window", b.side_window),
            ("big_house.garage", b.garage),
            ("big_house.tower + bay", b.tower + b.bay),
            ("hotel.double_sided", self.hotel.double_sided),
            ("hotel.end_bay", self.hotel.end_bay),
            ("office.run_start", self.office.run_start),
            ("office.width_run_end", self.office.width_run_end),
            ("office.depth_run_end", self.office.depth_run_end),
            ("skyscraper.flat_roof", s.flat_roof),
            ("skyscraper.pointed_roof", s.pointed_roof),
            ("skyscraper.flat_roof + pointed_roof", s.flat_roof + s.pointed_roof),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(FacadeError::InvalidParams(format!(
                    "{name} = {p} is outside [0, 1]"
                )));
            }
        }
        if s.max_tiers == 0 {
            return Err(FacadeError::InvalidParams(
                "skyscraper.max_tiers must be at least 1".to_string(),
            ));
        }
        let spans = [
            ("wings.width_min", w.width_min),
            ("wings.depth_min", w.depth_min),
        ];
        for (name, v) in spans {
            if !(v.is_finite() && v > 0.0) {
                return Err(FacadeError::InvalidParams(format!(
                    "{name} = {v} must be positive"
                )));
            }
        }
        if !(w.width_span >= 0.0 && w.depth_span >= 0.0) {
            return Err(FacadeError::InvalidParams(
                "wing spans must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FacadeParams::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_override() {
        let params = FacadeParams::from_json(r#"{ "hotel": { "end_bay": 0.0 } }"#).unwrap();
        assert_eq!(params.hotel.end_bay, 0.0);
        assert_eq!(params.hotel.double_sided, 0.5);
        assert_eq!(params.house, HouseParams::default());
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        let params = FacadeParams::from_json("{}").unwrap();
        assert_eq!(params, FacadeParams::default());
    }

    #[test]
    fn test_from_json_rejects_out_of_range() {
        let err = FacadeParams::from_json(r#"{ "office": { "run_start": 1.5 } }"#).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("office.run_start"), "got: {msg}");
    }

    #[test]
    fn test_from_json_rejects_overlapping_slices() {
        let json = r#"{ "big_house": { "tower": 0.6, "bay": 0.6 } }"#;
        assert!(matches!(
            FacadeParams::from_json(json),
            Err(FacadeError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            FacadeParams::from_json("{ house: "),
            Err(FacadeError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_zero_max_tiers_rejected() {
        let mut params = FacadeParams::default();
        params.skyscraper.max_tiers = 0;
        assert!(params.validate().is_err());
    }
}
