// ---------------------------------------------------------------------------
// FacadeError: typed failures of the grammar → mesh pipeline
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors surfaced by façade generation and baking.
///
/// Only `InvalidDimensions` aborts a build. `DegenerateGeometry` is reported
/// per primitive instance and the baker skips that instance.
#[derive(Debug, Clone, PartialEq)]
pub enum FacadeError {
    /// A dimension was non-finite, zero or negative.
    InvalidDimensions { width: f32, height: f32, depth: f32 },
    /// A primitive was placed with a non-finite or non-positive scale.
    DegenerateGeometry {
        primitive: &'static str,
        scale: [f32; 3],
    },
    /// A wall or roof symbol string could not be parsed.
    InvalidGrammar(String),
    /// Tunable parameters were malformed or out of range.
    InvalidParams(String),
}

impl fmt::Display for FacadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacadeError::InvalidDimensions {
                width,
                height,
                depth,
            } => write!(
                f,
                "Invalid dimensions: {width} x {height} x {depth} (all must be finite and positive)"
            ),
            FacadeError::DegenerateGeometry { primitive, scale } => write!(
                f,
                "Degenerate geometry: {primitive} placed with scale [{}, {}, {}]",
                scale[0], scale[1], scale[2]
            ),
            FacadeError::InvalidGrammar(msg) => write!(f, "Invalid grammar: {msg}"),
            FacadeError::InvalidParams(msg) => write!(f, "Invalid parameters: {msg}"),
        }
    }
}

impl std::error::Error for FacadeError {}

impl From<serde_json::Error> for FacadeError {
    fn from(e: serde_json::Error) -> Self {
        FacadeError::InvalidParams(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_error_display_invalid_dimensions() {
        let err = FacadeError::InvalidDimensions {
            width: 4.0,
            height: -1.0,
            depth: 3.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("Invalid dimensions"), "got: {msg}");
        assert!(msg.contains("-1"), "got: {msg}");
    }

    #[test]
    fn test_facade_error_display_degenerate() {
        let err = FacadeError::DegenerateGeometry {
            primitive: "cube",
            scale: [1.0, 0.0, 2.0],
        };
        let msg = format!("{err}");
        assert!(msg.contains("cube"), "got: {msg}");
        assert!(msg.contains("[1, 0, 2]"), "got: {msg}");
    }

    #[test]
    fn test_facade_error_display_invalid_grammar() {
        let err = FacadeError::InvalidGrammar("unknown symbol 'x'".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("Invalid grammar"), "got: {msg}");
        assert!(msg.contains("'x'"), "got: {msg}");
    }

    #[test]
    fn test_facade_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: FacadeError = json_err.into();
        assert!(matches!(err, FacadeError::InvalidParams(_)));
    }
}
