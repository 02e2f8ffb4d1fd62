//! Configuration resolution for the publish workflow
//!
//! Resolves the effective JavaScript package root and the pull flag from
//! CLI arguments and environment variables, with layout auto-detection for
//! single-package and mono-repo structures.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable for the pull-before-publish flag
const SHOULD_PULL_ENV: &str = "SHOULD_PULL";

/// Environment variable for the explicit JavaScript root
const JS_ROOT_ENV: &str = "JS_ROOT";

/// Mono-repo subdirectory probed during auto-detection
const MONOREPO_JS_DIR: &str = "js";

/// Inputs for configuration resolution
///
/// Priority (high to low):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Auto-detection / defaults
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// CLI `--should-pull` flag, if given
    pub cli_should_pull: Option<bool>,

    /// CLI `--js-root` value, if given
    pub cli_js_root: Option<String>,

    /// Environment variables
    pub env: HashMap<String, String>,

    /// Base directory for layout auto-detection (the process cwd in production)
    pub base_dir: PathBuf,
}

/// Resolved publish configuration, immutable after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    /// Pull the main branch before reading any files
    pub should_pull: bool,

    /// Effective JavaScript package root, relative to the process cwd
    pub js_root: PathBuf,
}

impl PublishConfig {
    /// Resolve the effective configuration once at startup
    pub fn resolve(options: ResolveOptions) -> Self {
        let should_pull = options.cli_should_pull.unwrap_or_else(|| {
            options
                .env
                .get(SHOULD_PULL_ENV)
                .map(|v| is_truthy(v))
                .unwrap_or(false)
        });

        let js_root = options
            .cli_js_root
            .filter(|s| !s.is_empty())
            .or_else(|| {
                options
                    .env
                    .get(JS_ROOT_ENV)
                    .filter(|s| !s.is_empty())
                    .cloned()
            })
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::detect_js_root(&options.base_dir));

        Self {
            should_pull,
            js_root,
        }
    }

    /// Auto-detect the package root for single-package vs mono-repo layouts.
    ///
    /// A `package.json` at the base directory wins; otherwise a `js/`
    /// subdirectory containing one is used. Falling back to `.` lets the
    /// manifest read fail with its own error when neither exists.
    fn detect_js_root(base_dir: &Path) -> PathBuf {
        if base_dir.join("package.json").exists() {
            return PathBuf::from(".");
        }

        let monorepo_dir = base_dir.join(MONOREPO_JS_DIR);
        if monorepo_dir.join("package.json").exists() {
            return PathBuf::from(MONOREPO_JS_DIR);
        }

        PathBuf::from(".")
    }

    /// Does publishing require changing into the package root first?
    pub fn needs_cd(&self) -> bool {
        self.js_root != Path::new(".")
    }

    /// Path to the package manifest under the resolved root
    pub fn package_json_path(&self) -> PathBuf {
        self.js_root.join("package.json")
    }
}

/// Parse an environment flag value as a boolean
fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options_with_base(base_dir: PathBuf) -> ResolveOptions {
        ResolveOptions {
            base_dir,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_without_cli_or_env() {
        let temp_dir = TempDir::new().unwrap();
        let config = PublishConfig::resolve(options_with_base(temp_dir.path().to_path_buf()));

        assert!(!config.should_pull);
        assert_eq!(config.js_root, PathBuf::from("."));
        assert!(!config.needs_cd());
    }

    #[test]
    fn test_cli_takes_priority_over_env() {
        let temp_dir = TempDir::new().unwrap();
        let mut env = HashMap::new();
        env.insert("SHOULD_PULL".to_string(), "false".to_string());
        env.insert("JS_ROOT".to_string(), "packages/env".to_string());

        let config = PublishConfig::resolve(ResolveOptions {
            cli_should_pull: Some(true),
            cli_js_root: Some("packages/cli".to_string()),
            env,
            base_dir: temp_dir.path().to_path_buf(),
        });

        assert!(config.should_pull);
        assert_eq!(config.js_root, PathBuf::from("packages/cli"));
    }

    #[test]
    fn test_env_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let mut env = HashMap::new();
        env.insert("SHOULD_PULL".to_string(), "true".to_string());
        env.insert("JS_ROOT".to_string(), "js".to_string());

        let mut options = options_with_base(temp_dir.path().to_path_buf());
        options.env = env;
        let config = PublishConfig::resolve(options);

        assert!(config.should_pull);
        assert_eq!(config.js_root, PathBuf::from("js"));
        assert!(config.needs_cd());
    }

    #[test]
    fn test_should_pull_truthy_values() {
        for value in ["true", "1", "yes", "TRUE", " yes "] {
            let temp_dir = TempDir::new().unwrap();
            let mut options = options_with_base(temp_dir.path().to_path_buf());
            options
                .env
                .insert("SHOULD_PULL".to_string(), value.to_string());

            let config = PublishConfig::resolve(options);
            assert!(config.should_pull, "expected '{}' to be truthy", value);
        }
    }

    #[test]
    fn test_should_pull_falsy_values() {
        for value in ["false", "0", "no", ""] {
            let temp_dir = TempDir::new().unwrap();
            let mut options = options_with_base(temp_dir.path().to_path_buf());
            options
                .env
                .insert("SHOULD_PULL".to_string(), value.to_string());

            let config = PublishConfig::resolve(options);
            assert!(!config.should_pull, "expected '{}' to be falsy", value);
        }
    }

    #[test]
    fn test_empty_js_root_falls_through_to_detection() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("package.json"), "{}").unwrap();

        let mut options = options_with_base(temp_dir.path().to_path_buf());
        options.cli_js_root = Some(String::new());
        options.env.insert("JS_ROOT".to_string(), String::new());

        let config = PublishConfig::resolve(options);
        assert_eq!(config.js_root, PathBuf::from("."));
    }

    #[test]
    fn test_detect_single_package_layout() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("package.json"), "{}").unwrap();

        let config = PublishConfig::resolve(options_with_base(temp_dir.path().to_path_buf()));
        assert_eq!(config.js_root, PathBuf::from("."));
        assert!(!config.needs_cd());
    }

    #[test]
    fn test_detect_monorepo_layout() {
        let temp_dir = TempDir::new().unwrap();
        let js_dir = temp_dir.path().join("js");
        std::fs::create_dir(&js_dir).unwrap();
        std::fs::write(js_dir.join("package.json"), "{}").unwrap();

        let config = PublishConfig::resolve(options_with_base(temp_dir.path().to_path_buf()));
        assert_eq!(config.js_root, PathBuf::from("js"));
        assert!(config.needs_cd());
    }

    #[test]
    fn test_root_package_json_wins_over_monorepo_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("package.json"), "{}").unwrap();
        let js_dir = temp_dir.path().join("js");
        std::fs::create_dir(&js_dir).unwrap();
        std::fs::write(js_dir.join("package.json"), "{}").unwrap();

        let config = PublishConfig::resolve(options_with_base(temp_dir.path().to_path_buf()));
        assert_eq!(config.js_root, PathBuf::from("."));
    }

    #[test]
    fn test_package_json_path() {
        let config = PublishConfig {
            should_pull: false,
            js_root: PathBuf::from("js"),
        };

        assert_eq!(config.package_json_path(), PathBuf::from("js/package.json"));
    }
}
