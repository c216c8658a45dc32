//! Stochastic façade grammar.
//!
//! Turns a [`BuildingCategory`] and a set of [`Dimensions`] into a symbolic
//! [`FacadeGrammar`]: one token sequence per wall, a roof description and a
//! handful of flags. All randomness enters through a [`DrawSource`], so a
//! grammar is a pure function of the draws it consumed.

pub mod category;
pub mod dimensions;
pub mod draws;
pub mod error;
pub mod grammar;
pub mod params;
pub mod rules;
pub mod tokens;

pub use category::BuildingCategory;
pub use dimensions::Dimensions;
pub use draws::{DrawSource, RecordingDraws, ScriptedDraws, SeededDraws};
pub use error::FacadeError;
pub use grammar::{FacadeFlags, FacadeGrammar, SectionCounts, WallSide, WingScale};
pub use params::FacadeParams;
pub use rules::generate;
pub use tokens::{RoofGrammar, RoofShape, Wall, WallToken};
