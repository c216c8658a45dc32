//! One lot per building category, generated once at startup.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use grammar::{BuildingCategory, Dimensions, FacadeError, FacadeParams, SeededDraws};
use rendering::Building;

const SEED_VAR: &str = "SKYLINE_SEED";
const PARAMS_VAR: &str = "SKYLINE_PARAMS";

/// A plot on the street: what to build and how big.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lot {
    pub category: BuildingCategory,
    pub dimensions: Dimensions,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct StreetConfig {
    /// Lot `i` draws from `seed + i`.
    pub seed: u64,
    pub params_path: Option<PathBuf>,
    pub lots: Vec<Lot>,
}

impl Default for StreetConfig {
    fn default() -> Self {
        let lot = |category, width, height, depth| Lot {
            category,
            dimensions: Dimensions::new(width, height, depth),
        };
        Self {
            seed: grammar::draws::DEFAULT_SEED,
            params_path: None,
            lots: vec![
                lot(BuildingCategory::House, 6.0, 2.0, 4.0),
                lot(BuildingCategory::BigHouse, 10.0, 3.0, 6.0),
                lot(BuildingCategory::Hotel, 16.0, 6.0, 4.0),
                lot(BuildingCategory::Office, 12.0, 10.0, 8.0),
                lot(BuildingCategory::Skyscraper, 8.0, 40.0, 8.0),
            ],
        }
    }
}

impl StreetConfig {
    /// Defaults overridden by `SKYLINE_SEED` and `SKYLINE_PARAMS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(SEED_VAR) {
            match raw.trim().parse() {
                Ok(seed) => config.seed = seed,
                Err(_) => warn!("{SEED_VAR}={raw:?} is not a u64, using {}", config.seed),
            }
        }
        config.params_path = std::env::var_os(PARAMS_VAR).map(PathBuf::from);
        config
    }
}

/// Buildings generated from the configured lots, in lot order.
#[derive(Resource, Debug, Default)]
pub struct Street {
    pub buildings: Vec<Building>,
}

impl Street {
    pub fn vertex_count(&self) -> usize {
        self.buildings.iter().map(Building::vertex_count).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.buildings.iter().map(Building::triangle_count).sum()
    }
}

pub struct StreetPlugin;

impl Plugin for StreetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FacadeParams>()
            .init_resource::<Street>()
            .insert_resource(StreetConfig::from_env())
            .add_systems(Startup, (load_params, build_street).chain());
    }
}

fn read_params(path: &Path) -> Result<FacadeParams, FacadeError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| FacadeError::InvalidParams(format!("{}: {e}", path.display())))?;
    FacadeParams::from_json(&json)
}

/// Replaces the default tunables with the configured JSON file, if any. A
/// file that fails to load or validate leaves the defaults in place.
fn load_params(config: Res<StreetConfig>, mut params: ResMut<FacadeParams>) {
    let Some(path) = &config.params_path else {
        return;
    };
    match read_params(path) {
        Ok(loaded) => {
            info!("loaded facade params from {}", path.display());
            *params = loaded;
        }
        Err(err) => warn!("{err}; keeping default facade params"),
    }
}

fn build_street(config: Res<StreetConfig>, params: Res<FacadeParams>, mut street: ResMut<Street>) {
    street.buildings.clear();
    for (i, lot) in config.lots.iter().enumerate() {
        let mut draws = SeededDraws::from_seed_u64(config.seed.wrapping_add(i as u64));
        match Building::generate(lot.category, lot.dimensions, &params, &mut draws) {
            Ok(building) => {
                info!(
                    "{}: {} stories, {}x{} sections, roof {}, front {} -> {} vertices, {} triangles",
                    building.category(),
                    building.story_count(),
                    building.sections().width,
                    building.sections().depth,
                    building.roof(),
                    building.grammar().front,
                    building.vertex_count(),
                    building.triangle_count(),
                );
                street.buildings.push(building);
            }
            Err(err) => warn!("lot {i} ({}): {err}", lot.category),
        }
    }
    info!(
        "street built: {} buildings, {} vertices, {} triangles",
        street.buildings.len(),
        street.vertex_count(),
        street.triangle_count()
    );
}
