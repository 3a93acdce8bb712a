use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use gf_app::{
    AppResult, RunOptions, RunProgressEvent, RunRequest, RunStage, project_service, query,
    run_service,
};
use gf_solver::SampleLabel;

#[derive(Parser)]
#[command(name = "gf-cli")]
#[command(about = "GelFlow CLI - diffusion into a hydrogel channel around a probe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the configured iteration sweep and write images and the sample table
    Run {
        /// Path to the configuration file (YAML or JSON)
        config_path: PathBuf,
        /// Directory for images and the table
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
        /// Skip contour images
        #[arg(long)]
        no_images: bool,
    },
    /// Validate configuration file syntax and values
    Validate {
        /// Path to the configuration file
        config_path: PathBuf,
    },
    /// Show the four sample positions around the probe
    Positions {
        /// Path to the configuration file
        config_path: PathBuf,
    },
    /// Show hydrogel parameters and effective diffusivities
    Params {
        /// Path to the configuration file
        config_path: PathBuf,
    },
    /// Solve a single iteration count and print the samples
    Probe {
        /// Path to the configuration file
        config_path: PathBuf,
        /// Number of relaxation passes
        #[arg(long)]
        iterations: usize,
    },
    /// Find the first sweep step where every sample reaches a level
    Target {
        /// Path to the configuration file
        config_path: PathBuf,
        /// Concentration every sample must reach
        #[arg(long)]
        level: f64,
    },
    /// Write the reference configuration to a file
    Init {
        /// Destination path (YAML, or JSON with a .json extension)
        config_path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config_path,
            output_dir,
            no_images,
        } => cmd_run(&config_path, &output_dir, !no_images),
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Positions { config_path } => cmd_positions(&config_path),
        Commands::Params { config_path } => cmd_params(&config_path),
        Commands::Probe {
            config_path,
            iterations,
        } => cmd_probe(&config_path, iterations),
        Commands::Target { config_path, level } => cmd_target(&config_path, level),
        Commands::Init { config_path, force } => cmd_init(&config_path, force),
    }
}

fn cmd_run(config_path: &Path, output_dir: &Path, write_images: bool) -> AppResult<()> {
    let config = project_service::load_config(config_path)?;
    println!("Running sweep for: {}", config.name);
    println!(
        "  grid = {0}x{0}, iterations {1}..={2} step {3}",
        config.grid.size, config.sweep.start, config.sweep.end, config.sweep.step
    );

    let request = RunRequest {
        config: &config,
        output_dir,
        options: RunOptions {
            write_images,
            write_table: true,
        },
    };

    let response =
        run_service::run_sweep_with_progress(&request, Some(&mut |event| render_cli_progress(&event)))?;
    clear_progress_line();

    println!("✓ Sweep completed: {} steps", response.record.len());
    for entry in response.record.iter() {
        println!("  {:>6}  {}", entry.iterations, entry.samples);
    }
    if !response.images.is_empty() {
        println!("  Images written: {}", response.images.len());
    }
    for failure in &response.export_failures {
        println!(
            "  ✗ Image for {} iterations not written: {}",
            failure.iterations, failure.message
        );
    }
    if let Some(path) = &response.table_path {
        println!("  Table: {}", path.display());
    }

    let timing = &response.timing;
    println!("\nTiming summary:");
    println!("  Solve:   {:.3}s", timing.solve_time_s);
    println!("  Images:  {:.3}s", timing.image_time_s);
    println!("  Table:   {:.3}s", timing.table_time_s);
    println!("  Total:   {:.3}s", timing.total_time_s);
    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(100));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &RunProgressEvent) {
    match (&event.stage, &event.sweep) {
        (RunStage::Solving, Some(s)) => {
            let width = 28usize;
            let filled = ((s.fraction_complete * width as f64).round() as usize).min(width);
            let bar = format!(
                "{}{}",
                "#".repeat(filled),
                "-".repeat(width.saturating_sub(filled))
            );
            print!(
                "\r[{}] {:>6.2}%  step={}/{}  iterations={}  elapsed={:.1}s",
                bar,
                s.fraction_complete * 100.0,
                s.step,
                s.total_steps,
                s.iterations,
                event.elapsed_wall_s
            );
            let _ = io::stdout().flush();
        }
        _ => {
            let mut line = format!(
                "\r{}  elapsed={:.2}s",
                event.stage.label(),
                event.elapsed_wall_s
            );
            if let Some(msg) = &event.message {
                line.push_str(&format!("  {}", msg));
            }
            print!("{}", line);
            let _ = io::stdout().flush();
        }
    }
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating configuration: {}", config_path.display());
    let config = project_service::load_config(config_path)?;
    project_service::validate_config(&config)?;
    println!("✓ Configuration is valid");
    Ok(())
}

fn cmd_positions(config_path: &Path) -> AppResult<()> {
    let config = project_service::load_config(config_path)?;
    let positions = project_service::sample_positions(&config)?;
    println!(
        "Sample positions (x, y) on a {0}x{0} grid, probe radius fraction {1}:",
        config.grid.size, config.probe.radius_fraction
    );
    for (label, point) in positions {
        println!("  {}  {}", label, point);
    }
    Ok(())
}

fn cmd_params(config_path: &Path) -> AppResult<()> {
    let config = project_service::load_config(config_path)?;
    let Some(gel) = &config.hydrogel else {
        println!("No hydrogel parameters in configuration");
        return Ok(());
    };

    println!("Hydrogel:");
    println!("  Porosity:       {}", gel.porosity);
    println!("  Drug size:      {:e} cm", gel.drug_size_cm);
    println!("  Pore size:      {:e} cm", gel.pore_size_cm);
    println!("  Tortuosity:     {}", gel.tortuosity);
    if let Some(c) = project_service::hydrogel_constrictivity(&config) {
        println!("  Constrictivity: {c:.4}");
    }

    let report = project_service::hydrogel_report(&config);
    if !report.is_empty() {
        println!("\nDiffusivity (cm^2/s):");
        println!("  {:<16} {:>12} {:>12}", "species", "free", "effective");
        for r in report {
            println!(
                "  {:<16} {:>12.3e} {:>12.3e}",
                r.name, r.free_cm2_per_s, r.effective_cm2_per_s
            );
        }
    }
    Ok(())
}

fn cmd_probe(config_path: &Path, iterations: usize) -> AppResult<()> {
    let config = project_service::load_config(config_path)?;
    let (field, samples) = run_service::probe(&config, iterations)?;
    let (lo, hi) = field.min_max();
    println!("After {} iterations:", iterations);
    for label in SampleLabel::ALL {
        println!("  {}  {:.6}", label, samples.get(label));
    }
    println!("  Field range: {:.6} - {:.6}", lo, hi);
    Ok(())
}

fn cmd_target(config_path: &Path, level: f64) -> AppResult<()> {
    let config = project_service::load_config(config_path)?;
    let scratch = std::env::temp_dir();
    let request = RunRequest {
        config: &config,
        output_dir: &scratch,
        options: RunOptions {
            write_images: false,
            write_table: false,
        },
    };
    let response = run_service::run_sweep(&request)?;
    let summary = query::get_run_summary(&response.record)?;

    match query::first_step_reaching(&response.record, level) {
        Some(entry) => println!(
            "✓ All samples reach {} after {} iterations ({})",
            level, entry.iterations, entry.samples
        ),
        None => {
            println!(
                "✗ No step up to {} iterations reaches {} at every sample",
                summary.iteration_range.1, level
            );
            println!(
                "  Weakest point {}: {:.6}",
                summary.weakest_point,
                summary.final_samples.get(summary.weakest_point)
            );
        }
    }
    Ok(())
}

fn cmd_init(config_path: &Path, force: bool) -> AppResult<()> {
    if config_path.exists() && !force {
        return Err(gf_app::AppError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }
    project_service::save_config(config_path, &project_service::default_config())?;
    println!("✓ Wrote reference configuration to {}", config_path.display());
    Ok(())
}
