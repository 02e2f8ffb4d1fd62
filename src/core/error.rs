//! Error handling for the publish workflow
//!
//! This module provides the error taxonomy for the orchestrator using the
//! thiserror crate for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for publish operations
#[derive(Error, Debug)]
pub enum PublishError {
    // Manifest errors
    #[error("パッケージマニフェストを読み込めませんでした: {path}: {message}")]
    ManifestRead { path: PathBuf, message: String },

    #[error("パッケージマニフェストの解析に失敗しました: {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("必須のメタデータが不足しています: {field}")]
    MissingField { field: String },

    #[error("無効なバージョン番号です: {version}")]
    InvalidVersion { version: String },

    // Sync errors
    #[error("git pullに失敗しました: {message}")]
    PullFailed { message: String },

    // Command execution errors
    #[error("コマンド '{command}' は許可リストに含まれていません")]
    CommandNotAllowed { command: String },

    #[error("コマンド実行エラー: {command}: {message}")]
    CommandSpawn { command: String, message: String },

    // Publishing errors
    #[error("公開処理に失敗しました: {message}")]
    PublishFailed { message: String },

    #[error("{attempts}回試行しましたが公開に失敗しました")]
    RetriesExhausted { attempts: u32 },

    // CI output errors
    #[error("出力ファイルへの書き込みに失敗しました: {message}")]
    OutputWrite { message: String },
}

impl PublishError {
    /// Check if this error is recoverable by retrying the attempt
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PublishFailed { .. } | Self::CommandSpawn { .. }
        )
    }

    /// Get error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::ManifestRead { .. } => "MANIFEST_READ",
            Self::ManifestParse { .. } => "MANIFEST_PARSE",
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::InvalidVersion { .. } => "INVALID_VERSION",
            Self::PullFailed { .. } => "PULL_FAILED",
            Self::CommandNotAllowed { .. } => "COMMAND_NOT_ALLOWED",
            Self::CommandSpawn { .. } => "COMMAND_SPAWN",
            Self::PublishFailed { .. } => "PUBLISH_FAILED",
            Self::RetriesExhausted { .. } => "RETRIES_EXHAUSTED",
            Self::OutputWrite { .. } => "OUTPUT_WRITE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_read_error() {
        let error = PublishError::ManifestRead {
            path: PathBuf::from("/repo/package.json"),
            message: "No such file or directory".to_string(),
        };

        assert!(!error.is_recoverable());
        assert_eq!(error.code(), "MANIFEST_READ");
        let display = error.to_string();
        assert!(display.contains("package.json"));
        assert!(display.contains("読み込めませんでした"));
    }

    #[test]
    fn test_manifest_parse_error() {
        let error = PublishError::ManifestParse {
            path: PathBuf::from("package.json"),
            message: "expected value at line 1".to_string(),
        };

        assert!(!error.is_recoverable());
        assert_eq!(error.code(), "MANIFEST_PARSE");
    }

    #[test]
    fn test_missing_field_error() {
        let error = PublishError::MissingField {
            field: "version".to_string(),
        };

        assert!(!error.is_recoverable());
        assert_eq!(error.code(), "MISSING_FIELD");
        assert!(error.to_string().contains("version"));
    }

    #[test]
    fn test_invalid_version_error() {
        let error = PublishError::InvalidVersion {
            version: "1.0".to_string(),
        };

        assert!(!error.is_recoverable());
        assert_eq!(error.code(), "INVALID_VERSION");
        assert!(error.to_string().contains("1.0"));
    }

    #[test]
    fn test_pull_failed_error() {
        let error = PublishError::PullFailed {
            message: "fatal: couldn't find remote ref main".to_string(),
        };

        assert!(!error.is_recoverable());
        assert_eq!(error.code(), "PULL_FAILED");
    }

    #[test]
    fn test_command_not_allowed_error() {
        let error = PublishError::CommandNotAllowed {
            command: "rm".to_string(),
        };

        assert!(!error.is_recoverable());
        assert_eq!(error.code(), "COMMAND_NOT_ALLOWED");
        assert!(error.to_string().contains("rm"));
    }

    #[test]
    fn test_publish_failed_is_recoverable() {
        let error = PublishError::PublishFailed {
            message: "E503 Service Unavailable".to_string(),
        };

        assert!(error.is_recoverable());
        assert_eq!(error.code(), "PUBLISH_FAILED");
        assert!(error.to_string().contains("E503"));
    }

    #[test]
    fn test_command_spawn_is_recoverable() {
        let error = PublishError::CommandSpawn {
            command: "npm".to_string(),
            message: "No such file or directory".to_string(),
        };

        assert!(error.is_recoverable());
        assert_eq!(error.code(), "COMMAND_SPAWN");
    }

    #[test]
    fn test_retries_exhausted_error() {
        let error = PublishError::RetriesExhausted { attempts: 3 };

        assert!(!error.is_recoverable());
        assert_eq!(error.code(), "RETRIES_EXHAUSTED");
        assert!(error.to_string().contains("3回"));
    }

    #[test]
    fn test_output_write_error() {
        let error = PublishError::OutputWrite {
            message: "Permission denied".to_string(),
        };

        assert!(!error.is_recoverable());
        assert_eq!(error.code(), "OUTPUT_WRITE");
    }
}
