//! `Building`: runs generation then baking once, and owns the result.

use bevy::prelude::*;
use grammar::{
    BuildingCategory, Dimensions, DrawSource, FacadeError, FacadeGrammar, FacadeParams,
    RoofGrammar, SectionCounts, Wall, WallSide,
};

use crate::bake::bake;
use crate::mesh_buffers::MeshBuffers;

/// A generated building: its symbolic grammar and the baked buffers. Both
/// are immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    grammar: FacadeGrammar,
    mesh: MeshBuffers,
}

impl Building {
    /// Validates `dims`, generates a grammar from `draws`, and bakes it.
    pub fn generate(
        category: BuildingCategory,
        dims: Dimensions,
        params: &FacadeParams,
        draws: &mut impl DrawSource,
    ) -> Result<Self, FacadeError> {
        let grammar = grammar::generate(category, dims, params, draws)?;
        Ok(Self::from_grammar(grammar))
    }

    /// Bakes a grammar that was generated (or stored) earlier.
    pub fn from_grammar(grammar: FacadeGrammar) -> Self {
        let mesh = bake(&grammar);
        Self { grammar, mesh }
    }

    pub fn grammar(&self) -> &FacadeGrammar {
        &self.grammar
    }

    pub fn mesh(&self) -> &MeshBuffers {
        &self.mesh
    }

    pub fn category(&self) -> BuildingCategory {
        self.grammar.category
    }

    pub fn dimensions(&self) -> Dimensions {
        self.grammar.dimensions
    }

    pub fn story_count(&self) -> u32 {
        self.grammar.stories
    }

    pub fn sections(&self) -> SectionCounts {
        self.grammar.sections
    }

    pub fn wall(&self, side: WallSide) -> &Wall {
        self.grammar.wall(side)
    }

    pub fn roof(&self) -> RoofGrammar {
        self.grammar.roof
    }

    pub fn has_garage(&self) -> bool {
        self.grammar.flags.garage
    }

    pub fn positions(&self) -> &[f32] {
        self.mesh.positions()
    }

    pub fn normals(&self) -> &[f32] {
        self.mesh.normals()
    }

    pub fn colors(&self) -> &[f32] {
        self.mesh.colors()
    }

    pub fn indices(&self) -> &[u32] {
        self.mesh.indices()
    }

    /// `positions().len() / 4`
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// `indices().len() / 3`
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    pub fn to_mesh(&self) -> Mesh {
        self.mesh.to_mesh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grammar::{ScriptedDraws, SeededDraws};

    #[test]
    fn test_generate_rejects_bad_dimensions() {
        let result = Building::generate(
            BuildingCategory::Office,
            Dimensions::new(4.0, f32::NAN, 4.0),
            &FacadeParams::default(),
            &mut SeededDraws::default(),
        );
        assert!(matches!(result, Err(FacadeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_accessors_mirror_grammar() {
        let building = Building::generate(
            BuildingCategory::House,
            Dimensions::new(4.0, 2.0, 3.0),
            &FacadeParams::default(),
            &mut SeededDraws::from_seed_u64(8),
        )
        .unwrap();
        assert_eq!(building.category(), BuildingCategory::House);
        assert_eq!(building.story_count(), 2);
        assert_eq!(building.sections(), SectionCounts { width: 6, depth: 3 });
        assert_eq!(building.wall(WallSide::Front), &building.grammar().front);
        assert_eq!(building.vertex_count() * 4, building.positions().len());
        assert_eq!(building.triangle_count() * 3, building.indices().len());
    }

    #[test]
    fn test_from_grammar_rebakes_identically() {
        let building = Building::generate(
            BuildingCategory::BigHouse,
            Dimensions::new(9.0, 3.0, 5.0),
            &FacadeParams::default(),
            &mut SeededDraws::from_seed_u64(17),
        )
        .unwrap();
        let rebuilt = Building::from_grammar(building.grammar().clone());
        assert_eq!(rebuilt, building);
    }

    #[test]
    fn test_scripted_draws_pin_output() {
        let dims = Dimensions::new(6.0, 3.0, 2.0);
        let params = FacadeParams::default();
        let a = Building::generate(BuildingCategory::Hotel, dims, &params, &mut ScriptedDraws::constant(0.3))
            .unwrap();
        let b = Building::generate(BuildingCategory::Hotel, dims, &params, &mut ScriptedDraws::constant(0.3))
            .unwrap();
        assert_eq!(a, b);
        assert!(a.has_garage());
        assert_eq!(a.roof().to_string(), "F");
    }

    #[test]
    fn test_shallow_houses_still_get_a_roof() {
        let params = FacadeParams::default();
        let lots = [
            (BuildingCategory::BigHouse, Dimensions::new(8.0, 2.0, 1.5)),
            (BuildingCategory::House, Dimensions::new(5.0, 2.0, 0.8)),
        ];
        for (category, dims) in lots {
            for seed in 0..20 {
                let building =
                    Building::generate(category, dims, &params, &mut SeededDraws::from_seed_u64(seed))
                        .unwrap();
                assert_eq!(building.sections().depth, 0);
                let max_y = building
                    .mesh()
                    .vertex_positions()
                    .iter()
                    .map(|p| p[1])
                    .fold(f32::NEG_INFINITY, f32::max);
                assert!(max_y > dims.height + 0.1, "{category} seed {seed}: {max_y}");
            }
        }
    }

    #[test]
    fn test_to_mesh_has_every_vertex() {
        let building = Building::generate(
            BuildingCategory::Skyscraper,
            Dimensions::new(3.0, 8.0, 3.0),
            &FacadeParams::default(),
            &mut SeededDraws::from_seed_u64(4),
        )
        .unwrap();
        let mesh = building.to_mesh();
        assert_eq!(mesh.count_vertices(), building.vertex_count());
    }
}
