//! Filled-contour raster images of a relaxed field.
//!
//! Row 0 of the field is drawn at the bottom of the image. The probe is a
//! black disc at the grid centre, and a colour bar runs along the right edge.

use std::path::{Path, PathBuf};

use gf_solver::{Field, SweepEntry};
use plotters::prelude::*;

use crate::colormap::{ColourMap, normalize};
use crate::{ReportError, ReportResult};

/// Largest image edge we are willing to allocate.
const MAX_IMAGE_EDGE: u64 = 16_384;

/// `<prefix>.t<iterations>.png`
pub fn image_file_name(prefix: &str, iterations: usize) -> String {
    format!("{prefix}.t{iterations}.png")
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContourPlot {
    pub colour_map: ColourMap,
    /// Number of filled bands between the field minimum and maximum.
    pub levels: usize,
    pub pixels_per_cell: u32,
    /// Probe disc radius in cells.
    pub probe_radius_cells: f64,
    pub colour_bar: bool,
}

impl Default for ContourPlot {
    fn default() -> Self {
        Self {
            colour_map: ColourMap::Jet,
            levels: 100,
            pixels_per_cell: 8,
            probe_radius_cells: 0.416 * 60.0,
            colour_bar: true,
        }
    }
}

impl ContourPlot {
    fn layout(&self, size: usize) -> ReportResult<Layout> {
        let ppc = u64::from(self.pixels_per_cell.max(1));
        let plot_edge = size as u64 * ppc;
        let (gap, bar) = if self.colour_bar {
            (2 * ppc, 3 * ppc)
        } else {
            (0, 0)
        };
        let width = plot_edge + gap + bar;
        let height = plot_edge;
        if width > MAX_IMAGE_EDGE || height > MAX_IMAGE_EDGE || height == 0 {
            return Err(ReportError::ImageTooLarge { width, height });
        }
        Ok(Layout {
            ppc: ppc as i32,
            plot_edge: plot_edge as i32,
            bar_x0: (plot_edge + gap) as i32,
            width: width as u32,
            height: height as u32,
        })
    }

    /// Write the image to `path`. The format follows the file extension.
    pub fn render(&self, field: &Field, path: &Path) -> ReportResult<()> {
        let n = field.size();
        let layout = self.layout(n)?;
        let plot_err = |e: &dyn std::fmt::Display| ReportError::Plot {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let root = BitMapBackend::new(path, (layout.width, layout.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| plot_err(&e))?;

        let (lo, hi) = field.min_max();
        let ppc = layout.ppc;
        for row in 0..n {
            let y0 = (n - 1 - row) as i32 * ppc;
            for col in 0..n {
                let x0 = col as i32 * ppc;
                let t = normalize(field.get(row, col), lo, hi);
                let colour = self.colour_map.banded(t, self.levels);
                root.draw(&Rectangle::new(
                    [(x0, y0), (x0 + ppc - 1, y0 + ppc - 1)],
                    colour.filled(),
                ))
                .map_err(|e| plot_err(&e))?;
            }
        }

        // Cell centres sit at integer grid coordinates.
        let centre = n as f64 / 2.0;
        let cx = (centre * f64::from(ppc) + f64::from(ppc) / 2.0).round() as i32;
        let cy = ((n as f64 - 1.0 - centre) * f64::from(ppc) + f64::from(ppc) / 2.0).round() as i32;
        let radius = (self.probe_radius_cells * f64::from(ppc)).round().max(0.0) as i32;
        root.draw(&Circle::new((cx, cy), radius, BLACK.filled()))
            .map_err(|e| plot_err(&e))?;

        if self.colour_bar {
            let bar_x1 = layout.width as i32 - 1;
            let last = (layout.plot_edge - 1).max(1);
            for py in 0..layout.plot_edge {
                let t = 1.0 - f64::from(py) / f64::from(last);
                let colour = self.colour_map.banded(t, self.levels);
                root.draw(&Rectangle::new(
                    [(layout.bar_x0, py), (bar_x1, py)],
                    colour.filled(),
                ))
                .map_err(|e| plot_err(&e))?;
            }
        }

        root.present().map_err(|e| plot_err(&e))?;
        Ok(())
    }
}

struct Layout {
    ppc: i32,
    plot_edge: i32,
    bar_x0: i32,
    width: u32,
    height: u32,
}

/// Per-step output hook driven by the sweep.
pub trait StepExporter {
    /// Export one step; returns the path written.
    fn export_step(&mut self, entry: &SweepEntry, field: &Field) -> ReportResult<PathBuf>;
}

/// Writes one contour image per sweep step into a directory.
#[derive(Debug, Clone)]
pub struct ContourImageExporter {
    pub output_dir: PathBuf,
    pub prefix: String,
    pub plot: ContourPlot,
}

impl ContourImageExporter {
    pub fn new(output_dir: impl Into<PathBuf>, prefix: impl Into<String>, plot: ContourPlot) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: prefix.into(),
            plot,
        }
    }

    pub fn path_for(&self, iterations: usize) -> PathBuf {
        self.output_dir.join(image_file_name(&self.prefix, iterations))
    }
}

impl StepExporter for ContourImageExporter {
    fn export_step(&mut self, entry: &SweepEntry, field: &Field) -> ReportResult<PathBuf> {
        let path = self.path_for(entry.iterations);
        self.plot.render(field, &path)?;
        tracing::debug!(path = %path.display(), "contour image written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_encode_iterations() {
        assert_eq!(image_file_name("diffusion", 0), "diffusion.t0.png");
        assert_eq!(image_file_name("diffusion", 480), "diffusion.t480.png");
    }

    #[test]
    fn layout_with_colour_bar() {
        let plot = ContourPlot {
            pixels_per_cell: 4,
            ..ContourPlot::default()
        };
        let layout = plot.layout(60).unwrap();
        assert_eq!(layout.height, 240);
        assert_eq!(layout.width, 240 + 8 + 12);
        assert_eq!(layout.bar_x0, 248);
    }

    #[test]
    fn oversized_layout_rejected() {
        let plot = ContourPlot {
            pixels_per_cell: 1_000,
            ..ContourPlot::default()
        };
        assert!(matches!(
            plot.layout(60),
            Err(ReportError::ImageTooLarge { .. })
        ));
    }
}
