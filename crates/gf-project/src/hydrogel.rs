//! Physical description of the hydrogel.
//!
//! Carried with the configuration for reporting only. The relaxation solver
//! works on a dimensionless concentration and never reads these values.

use gf_core::units::{Diffusivity, Ratio, cm, cm2ps};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesDef {
    pub name: String,
    /// Free-solution diffusivity, cm^2/s.
    pub diffusivity_cm2_per_s: f64,
}

impl SpeciesDef {
    pub fn new(name: impl Into<String>, diffusivity_cm2_per_s: f64) -> Self {
        Self {
            name: name.into(),
            diffusivity_cm2_per_s,
        }
    }

    pub fn diffusivity(&self) -> Diffusivity {
        cm2ps(self.diffusivity_cm2_per_s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HydrogelDef {
    /// Open volume fraction, 0..=1.
    pub porosity: f64,
    /// Diffusing particle size, cm.
    pub drug_size_cm: f64,
    /// Pore size, cm.
    pub pore_size_cm: f64,
    /// Path twisting through the porous network.
    pub tortuosity: f64,
    #[serde(default)]
    pub species: Vec<SpeciesDef>,
}

impl Default for HydrogelDef {
    fn default() -> Self {
        Self {
            porosity: 0.2,
            drug_size_cm: 4.5e-7,
            pore_size_cm: 9.5e-6,
            tortuosity: 2.2,
            species: vec![
                SpeciesDef::new("nitric_oxide", 2.6e-5),
                SpeciesDef::new("ethanol", 0.84e-5),
                SpeciesDef::new("carbon_dioxide", 1.92e-5),
                SpeciesDef::new("nitrogen", 1.88e-5),
                SpeciesDef::new("acetone", 1.16e-5),
            ],
        }
    }
}

impl HydrogelDef {
    /// Particle size over pore size.
    pub fn constrictivity(&self) -> Ratio {
        cm(self.drug_size_cm) / cm(self.pore_size_cm)
    }

    /// `D * porosity * constrictivity / tortuosity`
    pub fn effective_diffusivity(&self, species: &SpeciesDef) -> Diffusivity {
        use uom::si::ratio::ratio;
        let factor = self.porosity * self.constrictivity().get::<ratio>() / self.tortuosity;
        species.diffusivity() * factor
    }

    pub fn find_species(&self, name: &str) -> Option<&SpeciesDef> {
        self.species.iter().find(|s| s.name == name)
    }
}
