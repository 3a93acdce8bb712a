use gf_report::*;
use gf_solver::{DiffusionProblem, SweepDefinition, execute_sweep, execute_sweep_with};

fn temp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn writes_one_image_per_step() {
    let dir = temp_dir("gf_report_images");
    let problem = DiffusionProblem::new(20, 0.0, Default::default(), 0.416).unwrap();
    let sweep = SweepDefinition::new(0, 40, 20).unwrap();

    let mut exporter = ContourImageExporter::new(
        &dir,
        "diffusion",
        ContourPlot {
            pixels_per_cell: 2,
            probe_radius_cells: problem.probe_radius(),
            levels: 16,
            ..ContourPlot::default()
        },
    );

    let mut written = Vec::new();
    execute_sweep_with(&problem, &sweep, |entry, field| {
        written.push(exporter.export_step(entry, field).unwrap());
    })
    .unwrap();

    assert_eq!(written.len(), 3);
    for (path, n) in written.iter().zip([0, 20, 40]) {
        assert_eq!(path, &dir.join(format!("diffusion.t{n}.png")));
        let meta = std::fs::metadata(path).unwrap();
        assert!(meta.len() > 0);
    }
}

#[test]
fn image_into_missing_directory_fails() {
    let dir = std::env::temp_dir().join("gf_report_missing").join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let problem = DiffusionProblem::new(12, 0.0, Default::default(), 0.4).unwrap();
    let field = problem.initial_field().unwrap();
    let result = ContourPlot::default().render(&field, &dir.join("x.png"));
    assert!(result.is_err());
}

#[test]
fn table_written_atomically() {
    let dir = temp_dir("gf_report_table");
    let problem = DiffusionProblem::new(20, 0.0, Default::default(), 0.416).unwrap();
    let record = execute_sweep(&problem, &SweepDefinition::new(0, 60, 20).unwrap()).unwrap();

    let path = dir.join("diffdata.txt");
    write_table(&path, &record).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("0,"));
    assert!(lines[3].starts_with("60,"));
    assert_eq!(lines[1].split(',').count(), 5);
    assert!(!dir.join("diffdata.txt.partial").exists());
}

#[test]
fn table_into_missing_directory_reports_io_error() {
    let dir = std::env::temp_dir().join("gf_report_no_such_dir").join("deeper");
    let _ = std::fs::remove_dir_all(&dir);
    let record = gf_solver::SweepRecord::new();
    let err = write_table(&dir.join("diffdata.txt"), &record).unwrap_err();
    assert!(matches!(err, ReportError::Io { .. }));
}
