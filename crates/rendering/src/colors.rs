//! Façade palette. Each surface kind keeps its own tone so baked vertices
//! can be told apart by color.

pub type Rgba = [f32; 4];

// ---------------------------------------------------------------------------
// Base tones
// ---------------------------------------------------------------------------

pub const RESIDENTIAL_BASE: Rgba = [0.96, 0.96, 0.89, 1.0];
pub const HOTEL_BASE: Rgba = [0.8, 0.65, 0.6, 1.0];
pub const OFFICE_BASE: Rgba = [0.76, 0.76, 0.69, 1.0];

// ---------------------------------------------------------------------------
// Openings
// ---------------------------------------------------------------------------

pub const GLASS: Rgba = [0.6, 0.6, 0.8, 1.0];
pub const FRAME: Rgba = [0.1, 0.1, 0.1, 1.0];
/// Hotel and office frames and trim.
pub const FRAME_DARK: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const DOOR: Rgba = [0.6, 0.18, 0.18, 1.0];

// ---------------------------------------------------------------------------
// Roofs and volumes
// ---------------------------------------------------------------------------

pub const ROOF: Rgba = [0.36, 0.2, 0.16, 1.0];
pub const OFFICE_BAY: Rgba = [0.56, 0.56, 0.59, 1.0];
pub const OFFICE_ROOF: Rgba = [0.5, 0.5, 0.5, 1.0];
pub const SKYSCRAPER_WINDOW_BAND: Rgba = [0.96, 0.96, 0.89, 1.0];
pub const SKYSCRAPER_GAP_BAND: Rgba = [0.5, 0.5, 0.5, 1.0];
pub const SKYSCRAPER_ROOF: Rgba = [0.76, 0.76, 0.69, 1.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residential_surfaces_have_distinct_tones() {
        let tones = [RESIDENTIAL_BASE, GLASS, FRAME, DOOR, ROOF];
        for (i, a) in tones.iter().enumerate() {
            for b in &tones[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
