use anyhow::Result;
use athleteprofile::config::{config_file_path, load_or_default, save};
use athleteprofile::RoundingPolicy;

use super::{sample_descriptor_path, IntegrationHarness};

// Single test on purpose: it owns the process-wide workspace env var.
#[test]
fn config_defaults_then_persists() -> Result<()> {
    let harness = IntegrationHarness::new();
    let path = config_file_path()?;
    assert!(path.starts_with(harness.workspace_path()));
    assert!(!path.exists());

    let mut config = load_or_default()?;
    assert_eq!(config.display.rounding, RoundingPolicy::Nearest);
    assert!(config.profile.path.is_none());

    config.profile.path = Some(sample_descriptor_path());
    config.display.rounding = RoundingPolicy::Floor;
    config.checks.warn_unordered_events = false;
    let written = save(&config)?;
    assert_eq!(written, path);

    let reloaded = load_or_default()?;
    assert_eq!(reloaded.profile.path, Some(sample_descriptor_path()));
    assert_eq!(reloaded.display.rounding, RoundingPolicy::Floor);
    assert!(!reloaded.checks.warn_unordered_events);
    assert_eq!(reloaded.checks.score_max, 10.0);

    std::fs::write(harness.file("config/config.toml"), "[display\n")?;
    assert!(load_or_default().is_err());
    Ok(())
}
