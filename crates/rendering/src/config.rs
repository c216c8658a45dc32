/// Gap between a wall and the panels laid on it, against z-fighting.
pub const PANEL_INSET: f32 = 0.01;
/// Depth an office bay stands out from its wall.
pub const OFFICE_BAY_DEPTH: f32 = 0.5;
pub const OFFICE_ROOF_THICKNESS: f32 = 0.2;
/// Skyscraper window band height per story; the gap band fills the rest.
pub const WINDOW_BAND_HEIGHT: f32 = 0.9;
pub const GAP_BAND_HEIGHT: f32 = 0.1;
