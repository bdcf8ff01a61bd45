//! Engine error handling
//!
//! Covers the failures that can actually surface to a caller: persistence,
//! snapshot decoding, configuration and catalog construction. Domain misses
//! (unknown ids, duplicate session starts, expired time limits) are not
//! errors and never reach this type.

use bincode::error::{DecodeError, EncodeError};
use thiserror::Error;

/// Errors that can occur while running the achievement engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Persistence layer failure
    #[error("Persistence error: {0}")]
    Persistence(#[from] anyhow::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The top-level snapshot container could not be read
    #[error("Corrupted snapshot: {0}")]
    CorruptedSnapshot(String),

    /// Snapshot written by a newer format
    #[error("Incompatible snapshot version {found} (supported up to {supported})")]
    VersionMismatch { found: u32, supported: u32 },

    /// An identifier that is not part of the catalog
    #[error("Unknown achievement id {0}")]
    UnknownAchievement(u32),

    /// Two catalog entries share the same id
    #[error("Duplicate achievement id {0}")]
    DuplicateAchievement(u32),

    /// Configuration could not be loaded or failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<DecodeError> for EngineError {
    fn from(err: DecodeError) -> Self {
        // A binary save that is not even valid UTF-8 inside its strings is junk
        if err.to_string().contains("invalid utf-8 sequence") {
            EngineError::CorruptedSnapshot(err.to_string())
        } else {
            EngineError::Deserialization(err.to_string())
        }
    }
}

impl From<EncodeError> for EngineError {
    fn from(err: EncodeError) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            EngineError::Io(err.into())
        } else if err.is_syntax() || err.is_eof() {
            EngineError::CorruptedSnapshot(err.to_string())
        } else {
            EngineError::Deserialization(err.to_string())
        }
    }
}

/// Convert an engine error into a user-facing message
pub fn handle_error(error: &EngineError) -> String {
    match error {
        EngineError::CorruptedSnapshot(_) => {
            "Achievement data is corrupted and could not be loaded".to_string()
        }
        EngineError::VersionMismatch { found, .. } => {
            format!("Achievement data was written by a newer version (format {})", found)
        }
        EngineError::Io(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Achievement save file does not exist".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                "No permission to access the achievement save file".to_string()
            }
            _ => format!("IO error: {}", e),
        },
        EngineError::InvalidConfig(reason) => format!("Configuration rejected: {}", reason),
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = EngineError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(handle_error(&err), "Achievement save file does not exist");
    }

    #[test]
    fn test_json_syntax_error_is_corruption() {
        let err: EngineError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, EngineError::CorruptedSnapshot(_)));
    }

    #[test]
    fn test_json_shape_error_is_deserialization() {
        let err: EngineError = serde_json::from_str::<Vec<u32>>("{\"a\": 1}")
            .unwrap_err()
            .into();
        assert!(matches!(err, EngineError::Deserialization(_)));
    }
}
