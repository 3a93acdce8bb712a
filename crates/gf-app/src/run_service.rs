//! Sweep execution and export service.

use std::path::{Path, PathBuf};
use std::time::Instant;

use gf_project::{ColourMapDef, SimulationConfig};
use gf_report::{ColourMap, ContourImageExporter, ContourPlot, StepExporter};
use gf_solver::{
    DiffusionProblem, Field, Samples, SweepDefinition, SweepRecord, execute_sweep_with,
};

use crate::error::AppResult;
use crate::progress::{RunProgressEvent, RunStage, SweepProgress};

/// Options for running a sweep.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub write_images: bool,
    pub write_table: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            write_images: true,
            write_table: true,
        }
    }
}

/// Request to execute a sweep.
pub struct RunRequest<'a> {
    pub config: &'a SimulationConfig,
    pub output_dir: &'a Path,
    pub options: RunOptions,
}

/// An image export that failed without stopping the sweep.
#[derive(Debug, Clone)]
pub struct ExportFailure {
    pub iterations: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub solve_time_s: f64,
    pub image_time_s: f64,
    pub table_time_s: f64,
    pub total_time_s: f64,
}

/// Response from a sweep execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub record: SweepRecord,
    pub images: Vec<PathBuf>,
    pub export_failures: Vec<ExportFailure>,
    pub table_path: Option<PathBuf>,
    pub timing: RunTimingSummary,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    stage: RunStage,
    started: Instant,
    message: Option<String>,
    sweep: Option<SweepProgress>,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(RunProgressEvent {
            stage,
            elapsed_wall_s: started.elapsed().as_secs_f64(),
            message,
            sweep,
        });
    }
}

/// Contour styling derived from the configuration.
pub fn build_contour_plot(config: &SimulationConfig, problem: &DiffusionProblem) -> ContourPlot {
    let colour_map = match config.output.colour_map {
        ColourMapDef::Jet => ColourMap::Jet,
        ColourMapDef::Coolwarm => ColourMap::CoolWarm,
        ColourMapDef::Grayscale => ColourMap::Grayscale,
    };
    ContourPlot {
        colour_map,
        levels: config.output.colour_levels,
        pixels_per_cell: config.output.pixels_per_cell,
        probe_radius_cells: problem.probe_radius(),
        colour_bar: true,
    }
}

/// Solve a single iteration count without writing anything.
pub fn probe(config: &SimulationConfig, iterations: usize) -> AppResult<(Field, Samples)> {
    gf_project::validate_config(config)?;
    let problem = gf_project::problem_from_config(config)?;
    Ok(problem.solve(iterations)?)
}

/// Run the configured sweep and write its exports.
pub fn run_sweep(request: &RunRequest) -> AppResult<RunResponse> {
    run_sweep_with_progress(request, None)
}

/// Run the configured sweep and stream progress events.
pub fn run_sweep_with_progress(
    request: &RunRequest,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    let started = Instant::now();
    let config = request.config;
    let (problem, sweep) = prepare(config, &mut progress_cb, started)?;
    let mut image_exporter = if request.options.write_images && config.output.write_images {
        Some(ContourImageExporter::new(
            request.output_dir,
            config.output.image_prefix.clone(),
            build_contour_plot(config, &problem),
        ))
    } else {
        None
    };
    execute_run(
        request,
        &problem,
        &sweep,
        image_exporter.as_mut().map(|e| e as &mut dyn StepExporter),
        progress_cb,
        started,
    )
}

/// Run the configured sweep with a caller-supplied per-step exporter.
///
/// A failing step export is logged and recorded in
/// [`RunResponse::export_failures`]; later steps still run. A failing table
/// export aborts with an error after the sweep has finished.
pub fn run_sweep_with_exporter(
    request: &RunRequest,
    exporter: Option<&mut dyn StepExporter>,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    let started = Instant::now();
    let (problem, sweep) = prepare(request.config, &mut progress_cb, started)?;
    execute_run(request, &problem, &sweep, exporter, progress_cb, started)
}

fn prepare(
    config: &SimulationConfig,
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    started: Instant,
) -> AppResult<(DiffusionProblem, SweepDefinition)> {
    emit_progress(
        progress_cb,
        RunStage::Validating,
        started,
        Some(format!("Validating '{}'", config.name)),
        None,
    );
    gf_project::validate_config(config)?;
    let problem = gf_project::problem_from_config(config)?;
    let sweep = gf_project::sweep_from_config(config)?;
    Ok((problem, sweep))
}

fn execute_run(
    request: &RunRequest,
    problem: &DiffusionProblem,
    sweep: &SweepDefinition,
    mut exporter: Option<&mut dyn StepExporter>,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
    started: Instant,
) -> AppResult<RunResponse> {
    let mut timing = RunTimingSummary::default();
    let config = request.config;

    if exporter.is_some() || request.options.write_table {
        std::fs::create_dir_all(request.output_dir)?;
    }

    tracing::info!(
        name = %config.name,
        size = problem.size(),
        sweep = %sweep,
        "starting sweep"
    );

    let total_steps = sweep.len();
    let mut images = Vec::new();
    let mut export_failures = Vec::new();
    let mut image_time_s = 0.0;
    let mut step = 0;

    let solve_started = Instant::now();
    let record = execute_sweep_with(problem, sweep, |entry, field| {
        step += 1;
        let mut image_written = false;
        if let Some(exp) = exporter.as_deref_mut() {
            let export_started = Instant::now();
            match exp.export_step(entry, field) {
                Ok(path) => {
                    images.push(path);
                    image_written = true;
                }
                Err(e) => {
                    tracing::warn!(iterations = entry.iterations, error = %e, "step export failed");
                    export_failures.push(ExportFailure {
                        iterations: entry.iterations,
                        message: e.to_string(),
                    });
                }
            }
            image_time_s += export_started.elapsed().as_secs_f64();
        }

        emit_progress(
            &mut progress_cb,
            RunStage::Solving,
            started,
            None,
            Some(SweepProgress {
                step,
                total_steps,
                iterations: entry.iterations,
                fraction_complete: step as f64 / total_steps as f64,
                image_written,
            }),
        );
    })?;
    timing.image_time_s = image_time_s;
    timing.solve_time_s = (solve_started.elapsed().as_secs_f64() - image_time_s).max(0.0);

    let table_path = if request.options.write_table {
        emit_progress(
            &mut progress_cb,
            RunStage::WritingTable,
            started,
            Some(config.output.table_file.clone()),
            None,
        );
        let table_started = Instant::now();
        let path = request.output_dir.join(&config.output.table_file);
        gf_report::write_table(&path, &record)?;
        timing.table_time_s = table_started.elapsed().as_secs_f64();
        Some(path)
    } else {
        None
    };

    timing.total_time_s = started.elapsed().as_secs_f64();
    emit_progress(&mut progress_cb, RunStage::Completed, started, None, None);

    tracing::info!(
        steps = record.len(),
        images = images.len(),
        failed_exports = export_failures.len(),
        total_time_s = timing.total_time_s,
        "sweep finished"
    );

    Ok(RunResponse {
        record,
        images,
        export_failures,
        table_path,
        timing,
    })
}
