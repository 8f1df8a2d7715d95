use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use athleteprofile::config::load_or_default;
use athleteprofile::logging;
use athleteprofile::profile::{check_descriptor, hash_path, load_descriptor, IssueSeverity};
use tracing::info;

fn main() -> Result<()> {
    logging::init();
    let config = load_or_default()?;
    let descriptor_path = match env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => config.profile.path.clone().context(
            "Usage: cargo run --bin verify_profile -- <path-to-profile.json> \
             (or record [profile].path with the setup binary)",
        )?,
    };

    let descriptor = load_descriptor(&descriptor_path)?;
    info!(athlete = %descriptor.full_name(), "descriptor loaded");
    let report = check_descriptor(&descriptor, &config.checks);

    for issue in &report.issues {
        let tag = match issue.severity {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        };
        println!("  [{tag}] {}: {}", issue.location, issue.message);
    }

    if report.is_clean() {
        let progress = descriptor
            .fundraising
            .progress_label(config.display.rounding)
            .unwrap_or_else(|| "n/a".into());
        println!(
            "Profile {} ({}) verified: {} photos, {} apparatus, {} sponsors, {} of goal raised.",
            descriptor_path.display(),
            hash_path(&descriptor_path)?,
            descriptor.photos.len(),
            descriptor.events.len(),
            descriptor.sponsors.len(),
            progress
        );
        Ok(())
    } else {
        anyhow::bail!(
            "Profile verification failed ({} errors)",
            report.errors().count()
        )
    }
}
