//! Filesystem helpers for reading/writing profile descriptors.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

use super::model::ProfileDescriptor;

/// Encodings a descriptor may be stored in, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    Json,
    Yaml,
    Toml,
}

impl DescriptorFormat {
    pub fn from_path(path: &Path) -> Result<Self, DescriptorError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(DescriptorError::UnsupportedFormat { extension }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }
}

/// Why a descriptor failed to load.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("missing field `{field}`")]
    MissingField { field: String },

    #[error("malformed value: {detail}")]
    MalformedValue { detail: String },

    #[error("syntax error: {detail}")]
    Syntax { detail: String },

    #[error("unsupported descriptor extension '{extension}' (expected json, yaml, yml or toml)")]
    UnsupportedFormat { extension: String },
}

impl DescriptorError {
    fn from_json(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        let detail = err.to_string();
        if let Some(field) = missing_field_name(&detail) {
            return Self::MissingField { field };
        }
        match err.classify() {
            Category::Data => Self::MalformedValue { detail },
            Category::Syntax | Category::Eof | Category::Io => Self::Syntax { detail },
        }
    }

    /// YAML and TOML expose no error category, so this sorts on the rendered
    /// message. Best-effort: some structural breaks (an unterminated YAML flow
    /// sequence, say) surface as `MalformedValue` rather than `Syntax`.
    fn from_message(detail: String) -> Self {
        if let Some(field) = missing_field_name(&detail) {
            return Self::MissingField { field };
        }
        const DATA_MARKERS: &[&str] = &[
            "invalid type",
            "invalid value",
            "unknown variant",
            "invalid length",
            "premature end of input",
        ];
        if DATA_MARKERS.iter().any(|marker| detail.contains(marker)) {
            Self::MalformedValue { detail }
        } else {
            Self::Syntax { detail }
        }
    }
}

/// serde reports absent keys as "missing field `name`".
fn missing_field_name(message: &str) -> Option<String> {
    let rest = message.split("missing field `").nth(1)?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

/// Parses a descriptor from an in-memory document.
pub fn parse_descriptor(
    raw: &str,
    format: DescriptorFormat,
) -> Result<ProfileDescriptor, DescriptorError> {
    match format {
        DescriptorFormat::Json => serde_json::from_str(raw).map_err(DescriptorError::from_json),
        DescriptorFormat::Yaml => {
            serde_yaml::from_str(raw).map_err(|err| DescriptorError::from_message(err.to_string()))
        }
        DescriptorFormat::Toml => {
            toml::from_str(raw).map_err(|err| DescriptorError::from_message(err.to_string()))
        }
    }
}

/// Loads a descriptor from disk, choosing the decoder by extension.
pub fn load_descriptor<P: AsRef<Path>>(path: P) -> Result<ProfileDescriptor> {
    let path = path.as_ref();
    let format = DescriptorFormat::from_path(path)?;
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed reading profile descriptor {:?}", path))?;
    let descriptor = parse_descriptor(&raw, format)
        .with_context(|| format!("Failed parsing profile descriptor {:?}", path))?;
    debug!(
        path = %path.display(),
        format = format.as_str(),
        hash = %compute_hash(raw.as_bytes()),
        "loaded profile descriptor"
    );
    Ok(descriptor)
}

/// Result returned after writing a descriptor.
#[derive(Debug, Clone)]
pub struct DescriptorWriteOutcome {
    pub path: PathBuf,
    pub hash: String,
}

/// Writes a descriptor in the encoding implied by `path` and returns its hash.
pub fn write_descriptor<P: AsRef<Path>>(
    path: P,
    descriptor: &ProfileDescriptor,
) -> Result<DescriptorWriteOutcome> {
    let path = path.as_ref();
    let format = DescriptorFormat::from_path(path)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating descriptor directory {:?}", parent))?;
    }
    let payload = match format {
        DescriptorFormat::Json => {
            serde_json::to_vec_pretty(descriptor).map_err(anyhow::Error::from)
        }
        DescriptorFormat::Yaml => serde_yaml::to_string(descriptor)
            .map(String::into_bytes)
            .map_err(anyhow::Error::from),
        DescriptorFormat::Toml => toml::to_string_pretty(descriptor)
            .map(String::into_bytes)
            .map_err(anyhow::Error::from),
    }
    .with_context(|| format!("Failed serializing profile descriptor {:?}", path))?;
    let hash = compute_hash(&payload);
    let mut file = File::create(path)
        .with_context(|| format!("Failed opening profile descriptor {:?}", path))?;
    file.write_all(&payload)?;
    debug!(path = %path.display(), hash = %hash, "wrote profile descriptor");
    Ok(DescriptorWriteOutcome {
        path: path.to_path_buf(),
        hash,
    })
}

/// Computes a lowercase hex SHA-256 hash of the provided bytes.
pub fn compute_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{:x}", digest)
}

/// Streams a file through SHA-256, for comparing a descriptor on disk with
/// the hash reported when it was written.
pub fn hash_path(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("Unable to open {} for hashing", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0_u8; 8192];
    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}
