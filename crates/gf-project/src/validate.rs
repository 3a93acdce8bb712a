//! Configuration validation logic.

use std::collections::HashSet;

use gf_core::ensure_positive;
use gf_solver::{BoundarySpec, DiffusionProblem, SolverError, SweepDefinition};

use crate::hydrogel::HydrogelDef;
use crate::schema::{LATEST_VERSION, OutputDef, SimulationConfig};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] SolverError),

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_config(config: &SimulationConfig) -> Result<(), ValidationError> {
    if config.version == 0 || config.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    // Grid size, finite edge/guess values and sample placement.
    problem_from_config(config)?;
    sweep_from_config(config)?;

    validate_output(&config.output)?;
    if let Some(hydrogel) = &config.hydrogel {
        validate_hydrogel(hydrogel)?;
    }
    Ok(())
}

/// Solver inputs described by the configuration.
pub fn problem_from_config(config: &SimulationConfig) -> Result<DiffusionProblem, SolverError> {
    let b = &config.boundary;
    DiffusionProblem::new(
        config.grid.size,
        config.grid.interior_guess,
        BoundarySpec::new(b.top, b.bottom, b.left, b.right),
        config.probe.radius_fraction,
    )
}

pub fn sweep_from_config(config: &SimulationConfig) -> Result<SweepDefinition, SolverError> {
    SweepDefinition::new(config.sweep.start, config.sweep.end, config.sweep.step)
}

fn validate_output(output: &OutputDef) -> Result<(), ValidationError> {
    if output.colour_levels < 2 {
        return Err(ValidationError::InvalidValue {
            field: "output.colour_levels".to_string(),
            value: output.colour_levels.to_string(),
            reason: "at least two levels are needed".to_string(),
        });
    }
    if output.pixels_per_cell == 0 {
        return Err(ValidationError::InvalidValue {
            field: "output.pixels_per_cell".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    for (field, value) in [
        ("output.image_prefix", &output.image_prefix),
        ("output.table_file", &output.table_file),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                value: value.clone(),
                reason: "must not be empty".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_hydrogel(gel: &HydrogelDef) -> Result<(), ValidationError> {
    let positive = |field: &'static str, value: f64| {
        ensure_positive(value, field).map_err(|e| ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
    };

    positive("hydrogel.porosity", gel.porosity)?;
    if gel.porosity > 1.0 {
        return Err(ValidationError::InvalidValue {
            field: "hydrogel.porosity".to_string(),
            value: gel.porosity.to_string(),
            reason: "porosity is a fraction in 0..=1".to_string(),
        });
    }
    positive("hydrogel.drug_size_cm", gel.drug_size_cm)?;
    positive("hydrogel.pore_size_cm", gel.pore_size_cm)?;
    positive("hydrogel.tortuosity", gel.tortuosity)?;

    let mut names = HashSet::new();
    for species in &gel.species {
        if !names.insert(&species.name) {
            return Err(ValidationError::DuplicateId {
                id: species.name.clone(),
                context: "hydrogel species".to_string(),
            });
        }
        positive("hydrogel.species.diffusivity_cm2_per_s", species.diffusivity_cm2_per_s)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        validate_config(&SimulationConfig::default()).unwrap();
    }

    #[test]
    fn zero_colour_levels_rejected() {
        let mut config = SimulationConfig::default();
        config.output.colour_levels = 1;
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn future_version_rejected() {
        let mut config = SimulationConfig::default();
        config.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }
}
