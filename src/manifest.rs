//! Package manifest (package.json) reading
//!
//! Only `name` and `version` are consulted by the workflow; the rest of the
//! manifest is deserialized for completeness but never validated.

use crate::core::error::PublishError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Read-only view of package.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    #[serde(rename = "private")]
    pub is_private: Option<bool>,
}

impl PackageManifest {
    /// Load and parse the manifest at `path`
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, PublishError> {
        let path = path.as_ref();

        let content =
            fs::read_to_string(path)
                .await
                .map_err(|e| PublishError::ManifestRead {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;

        serde_json::from_str(&content).map_err(|e| PublishError::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Package name, required for the registry existence query
    pub fn package_name(&self) -> Result<&str, PublishError> {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| PublishError::MissingField {
                field: "name".to_string(),
            })
    }

    /// Package version, validated as SemVer
    pub fn package_version(&self) -> Result<&str, PublishError> {
        let version = self
            .version
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| PublishError::MissingField {
                field: "version".to_string(),
            })?;

        if semver::Version::parse(version).is_err() {
            return Err(PublishError::InvalidVersion {
                version: version.to_string(),
            });
        }

        Ok(version)
    }
}
