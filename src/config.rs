//! Runtime configuration for the unlock service

use error::EngineError;
use save::SaveFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 成就服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnlockConfig {
    /// 存档路径
    pub save_path: PathBuf,
    pub save_format: SaveFormat,
    /// 周期性 tick 间隔（毫秒）
    pub tick_interval_ms: u64,
    /// 自动保存间隔（秒）
    pub auto_save_interval_secs: u64,
    /// Event bus history ring size
    pub history_size: usize,
    /// Identity of the local player
    pub self_uid: String,
}

impl Default for UnlockConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("saves/achievements.json"),
            save_format: SaveFormat::Json,
            tick_interval_ms: 1000,
            auto_save_interval_secs: 300,
            history_size: 100,
            self_uid: String::new(),
        }
    }
}

impl UnlockConfig {
    /// Read a JSON config file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: UnlockConfig = serde_json::from_str(&raw)
            .map_err(|e| EngineError::InvalidConfig(format!("{:?}: {}", path, e)))?;
        config.validate()?;
        log::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.tick_interval_ms == 0 {
            return Err(EngineError::InvalidConfig(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.auto_save_interval_secs == 0 {
            return Err(EngineError::InvalidConfig(
                "auto_save_interval_secs must be greater than zero".to_string(),
            ));
        }
        if self.save_path.as_os_str().is_empty() {
            return Err(EngineError::InvalidConfig("save_path is empty".to_string()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(self.auto_save_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = UnlockConfig::load(dir.path().join("absent.json")).expect("defaults");
        assert_eq!(config, UnlockConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "self_uid": "U-self", "save_format": "binary" }}"#).expect("write");

        let config = UnlockConfig::load(file.path()).expect("valid config");
        assert_eq!(config.self_uid, "U-self");
        assert_eq!(config.save_format, SaveFormat::Binary);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_intervals_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "tick_interval_ms": 250, "auto_save_interval_secs": 60 }}"#)
            .expect("write");

        let config = UnlockConfig::load(file.path()).expect("valid config");
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.auto_save_interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_malformed_and_invalid_rejected() {
        let mut malformed = tempfile::NamedTempFile::new().expect("temp file");
        write!(malformed, "{{ not json").expect("write");
        assert!(matches!(
            UnlockConfig::load(malformed.path()),
            Err(EngineError::InvalidConfig(_))
        ));

        let mut zero_tick = tempfile::NamedTempFile::new().expect("temp file");
        write!(zero_tick, r#"{{ "tick_interval_ms": 0 }}"#).expect("write");
        assert!(matches!(
            UnlockConfig::load(zero_tick.path()),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
