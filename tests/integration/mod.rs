use athleteprofile::config::HOME_ENV;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct IntegrationHarness {
    workspace: TempDir,
}

const SAMPLE_DESCRIPTOR: &str = "data/profile.json";

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        env::set_var(HOME_ENV, workspace.path());
        Self { workspace }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.workspace.path().join(name)
    }
}

pub fn sample_descriptor_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(SAMPLE_DESCRIPTOR)
}

mod config_roundtrip;
mod profile_checks;
mod profile_storage;
pub mod support;

#[test]
fn sample_descriptor_exists() {
    let path = sample_descriptor_path();
    assert!(path.exists(), "Expected sample descriptor at {path:?}");
}
