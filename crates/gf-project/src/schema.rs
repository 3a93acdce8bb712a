//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::hydrogel::HydrogelDef;

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub grid: GridDef,
    #[serde(default)]
    pub boundary: BoundaryDef,
    #[serde(default)]
    pub probe: ProbeDef,
    #[serde(default)]
    pub sweep: SweepDef,
    #[serde(default)]
    pub output: OutputDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydrogel: Option<HydrogelDef>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            version: LATEST_VERSION,
            name: "hydrogel-channel".to_string(),
            grid: GridDef::default(),
            boundary: BoundaryDef::default(),
            probe: ProbeDef::default(),
            sweep: SweepDef::default(),
            output: OutputDef::default(),
            hydrogel: Some(HydrogelDef::default()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridDef {
    /// Cells per side.
    pub size: usize,
    /// Initial interior concentration.
    #[serde(default)]
    pub interior_guess: f64,
}

impl Default for GridDef {
    fn default() -> Self {
        Self {
            size: 60,
            interior_guess: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoundaryDef {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for BoundaryDef {
    fn default() -> Self {
        Self {
            top: 100.0,
            bottom: 0.0,
            left: 100.0,
            right: 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProbeDef {
    /// Probe radius relative to the grid side.
    pub radius_fraction: f64,
}

impl Default for ProbeDef {
    fn default() -> Self {
        Self {
            radius_fraction: 0.416,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    pub start: usize,
    pub end: usize,
    pub step: usize,
}

impl Default for SweepDef {
    fn default() -> Self {
        Self {
            start: 0,
            end: 500,
            step: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColourMapDef {
    #[default]
    Jet,
    Coolwarm,
    Grayscale,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputDef {
    /// Images are written as `<image_prefix>.t<iterations>.png`.
    #[serde(default = "default_image_prefix")]
    pub image_prefix: String,
    #[serde(default = "default_table_file")]
    pub table_file: String,
    #[serde(default)]
    pub colour_map: ColourMapDef,
    /// Number of filled-contour bands.
    #[serde(default = "default_colour_levels")]
    pub colour_levels: usize,
    #[serde(default = "default_pixels_per_cell")]
    pub pixels_per_cell: u32,
    #[serde(default = "default_true")]
    pub write_images: bool,
}

impl Default for OutputDef {
    fn default() -> Self {
        Self {
            image_prefix: default_image_prefix(),
            table_file: default_table_file(),
            colour_map: ColourMapDef::default(),
            colour_levels: default_colour_levels(),
            pixels_per_cell: default_pixels_per_cell(),
            write_images: true,
        }
    }
}

fn default_image_prefix() -> String {
    "diffusion".to_string()
}

fn default_table_file() -> String {
    "diffdata.txt".to_string()
}

fn default_colour_levels() -> usize {
    100
}

fn default_pixels_per_cell() -> u32 {
    8
}

fn default_true() -> bool {
    true
}
