use std::path::PathBuf;

use gf_project::*;

fn configs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("configs")
}

#[test]
fn reference_config_matches_defaults() {
    let config = load_yaml(&configs_dir().join("reference.yaml")).unwrap();
    assert_eq!(config, SimulationConfig::default());
}
