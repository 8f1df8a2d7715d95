use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use athleteprofile::config::{config_file_path, load_or_default, save};
use athleteprofile::logging;
use athleteprofile::profile::RoundingPolicy;

fn main() -> Result<()> {
    logging::init();
    let args = CliArgs::parse()?;
    let config_path = config_file_path()?;
    let mut config = load_or_default()?;
    let mut changed = !config_path.exists();

    if let Some(path) = args.profile {
        if config.profile.path.as_ref() != Some(&path) {
            config.profile.path = Some(path);
            changed = true;
        }
    }
    if let Some(rounding) = args.rounding {
        if config.display.rounding != rounding {
            config.display.rounding = rounding;
            changed = true;
        }
    }

    if changed {
        let written = save(&config)?;
        println!("Profile settings recorded at {}", written.display());
    } else {
        println!("Profile settings already configured.");
    }

    Ok(())
}

struct CliArgs {
    profile: Option<PathBuf>,
    rounding: Option<RoundingPolicy>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut profile = None;
        let mut rounding = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--profile" => {
                    let value = args
                        .next()
                        .context("Expected a descriptor path after --profile")?;
                    profile = Some(PathBuf::from(value));
                }
                "--rounding" => {
                    let value = args
                        .next()
                        .context("Expected nearest or floor after --rounding")?;
                    let policy = RoundingPolicy::parse(&value).ok_or_else(|| {
                        anyhow!("Unknown rounding policy '{value}' (expected nearest or floor)")
                    })?;
                    rounding = Some(policy);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self { profile, rounding })
    }
}

fn print_usage() {
    println!("Athlete profile setup");
    println!("Records the default descriptor and display settings in config.toml.");
    println!("Usage: cargo run --bin setup -- [options]");
    println!("Options:");
    println!("  --profile <path>       Descriptor used when verify_profile gets no argument");
    println!("  --rounding <policy>    nearest (default) or floor for progress percentages");
}
