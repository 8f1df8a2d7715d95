use anyhow::Result;
use athleteprofile::profile::{hash_path, load_descriptor, write_descriptor};
use tempfile::TempDir;

use super::sample_descriptor_path;

#[test]
fn descriptor_survives_every_encoding() -> Result<()> {
    let sample = load_descriptor(sample_descriptor_path())?;
    let tmp = TempDir::new()?;

    for name in ["copy.json", "nested/copy.yaml", "copy.toml"] {
        let path = tmp.path().join(name);
        let outcome = write_descriptor(&path, &sample)?;
        assert_eq!(outcome.path, path);
        assert_eq!(outcome.hash, hash_path(&path)?, "hash mismatch for {name}");

        let reloaded = load_descriptor(&path)?;
        assert_eq!(reloaded, sample, "{name} changed the descriptor");
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_refused() -> Result<()> {
    let sample = load_descriptor(sample_descriptor_path())?;
    let tmp = TempDir::new()?;
    let path = tmp.path().join("profile.js");

    let err = write_descriptor(&path, &sample).unwrap_err();
    assert!(err.to_string().contains("js"), "{err}");
    assert!(!path.exists());
    Ok(())
}
