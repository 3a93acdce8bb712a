//! Configuration loading, saving, validation, and introspection.

use std::path::Path;

use gf_core::units::{to_cm2ps, to_unitless};
use gf_project::SimulationConfig;
use gf_solver::{GridPoint, SampleLabel};

use crate::error::{AppError, AppResult};

/// Free and in-gel diffusivity of one species.
#[derive(Debug, Clone)]
pub struct SpeciesReport {
    pub name: String,
    pub free_cm2_per_s: f64,
    pub effective_cm2_per_s: f64,
}

/// Reference configuration.
pub fn default_config() -> SimulationConfig {
    SimulationConfig::default()
}

/// Load and validate a configuration file (`.json`, otherwise YAML).
pub fn load_config(path: &Path) -> AppResult<SimulationConfig> {
    if !path.exists() {
        return Err(AppError::InvalidInput(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }
    Ok(gf_project::load(path)?)
}

/// Validate and write a configuration, format chosen by extension.
pub fn save_config(path: &Path, config: &SimulationConfig) -> AppResult<()> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let result = if is_json {
        gf_project::save_json(path, config)
    } else {
        gf_project::save_yaml(path, config)
    };
    result.map_err(|e| match e {
        gf_project::ProjectError::Io(source) => AppError::ConfigFileWrite {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

pub fn validate_config(config: &SimulationConfig) -> AppResult<()> {
    gf_project::validate_config(config)?;
    Ok(())
}

/// The four measurement points the configuration produces.
pub fn sample_positions(config: &SimulationConfig) -> AppResult<Vec<(SampleLabel, GridPoint)>> {
    let problem = gf_project::problem_from_config(config)?;
    let points = problem.sample_points();
    Ok(SampleLabel::ALL
        .iter()
        .map(|&label| (label, points.point(label)))
        .collect())
}

/// Drug size over pore size, if hydrogel metadata is present.
pub fn hydrogel_constrictivity(config: &SimulationConfig) -> Option<f64> {
    config
        .hydrogel
        .as_ref()
        .map(|gel| to_unitless(gel.constrictivity()))
}

/// Effective diffusivities for every configured species; empty without
/// hydrogel metadata.
pub fn hydrogel_report(config: &SimulationConfig) -> Vec<SpeciesReport> {
    let Some(gel) = &config.hydrogel else {
        return Vec::new();
    };
    gel.species
        .iter()
        .map(|species| SpeciesReport {
            name: species.name.clone(),
            free_cm2_per_s: species.diffusivity_cm2_per_s,
            effective_cm2_per_s: to_cm2ps(gel.effective_diffusivity(species)),
        })
        .collect()
}
