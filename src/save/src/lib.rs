// src/save/src/lib.rs

use achievements::{SavedAchievement, StatePersistence, StateSnapshot, Timestamp};
use achievements::snapshot::SNAPSHOT_VERSION;
use anyhow::Context;
use bincode::config;
use error::EngineError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{
    fs,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// On-disk encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveFormat {
    /// Human-readable, tolerant of individually broken entries
    #[default]
    Json,
    /// Compact bincode, decoded as a whole
    Binary,
}

/// Single-file store for achievement state
#[derive(Debug, Clone)]
pub struct SaveSystem {
    path: PathBuf,
    format: SaveFormat,
}

impl SaveSystem {
    /// Create the save system, making the parent directory if needed
    pub fn new(path: impl AsRef<Path>, format: SaveFormat) -> Result<Self, EngineError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create save directory")?;
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            format,
        })
    }

    /// Write the snapshot atomically: temp file, flush, rename
    pub fn save(&self, snapshot: &StateSnapshot) -> Result<(), EngineError> {
        let temp_path = self.path.with_extension("tmp");
        let file = fs::File::create(&temp_path).context("Failed to create temporary save file")?;
        let mut writer = BufWriter::new(file);

        match self.format {
            SaveFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, snapshot)
                    .context("Failed to serialize achievement state")?;
            }
            SaveFormat::Binary => {
                bincode::encode_into_std_write(snapshot, &mut writer, config::standard())
                    .context("Failed to serialize achievement state")?;
            }
        }

        writer.flush().context("Failed to flush save data")?;
        fs::rename(&temp_path, &self.path).context("Failed to commit save file")?;

        log::debug!(
            "Saved {} achievement states to {:?}",
            snapshot.achievements.len(),
            self.path
        );
        Ok(())
    }

    /// Read the stored snapshot
    pub fn load(&self) -> Result<StateSnapshot, EngineError> {
        let file = fs::File::open(&self.path)?;
        let mut reader = BufReader::new(file);

        match self.format {
            SaveFormat::Json => {
                let value: serde_json::Value = serde_json::from_reader(reader)?;
                decode_json_snapshot(value)
            }
            SaveFormat::Binary => {
                let snapshot: StateSnapshot =
                    bincode::decode_from_std_read(&mut reader, config::standard())?;
                if snapshot.version > SNAPSHOT_VERSION {
                    return Err(EngineError::VersionMismatch {
                        found: snapshot.version,
                        supported: SNAPSHOT_VERSION,
                    });
                }
                Ok(snapshot)
            }
        }
    }

    /// Load, or start fresh when no save exists yet
    pub fn load_or_default(&self) -> Result<StateSnapshot, EngineError> {
        if !self.has_save() {
            log::info!("No achievement save at {:?}, starting fresh", self.path);
            return Ok(StateSnapshot::default());
        }
        self.load()
    }

    pub fn has_save(&self) -> bool {
        self.path.exists()
    }

    /// Remove the save file if present
    pub fn delete(&self) -> Result<(), EngineError> {
        if self.path.exists() {
            fs::remove_file(&self.path).context("Failed to delete save file")?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SaveFormat {
        self.format
    }
}

impl StatePersistence for SaveSystem {
    fn persist(&mut self, snapshot: &StateSnapshot) -> Result<(), EngineError> {
        self.save(snapshot)
    }
}

/// The container must be an object; each entry is decoded on its own so one
/// bad record does not cost the rest of the save.
fn decode_json_snapshot(value: serde_json::Value) -> Result<StateSnapshot, EngineError> {
    let serde_json::Value::Object(mut root) = value else {
        return Err(EngineError::CorruptedSnapshot(
            "top-level value is not an object".to_string(),
        ));
    };

    let version = match root.get("version") {
        None => SNAPSHOT_VERSION,
        Some(v) => v
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| EngineError::CorruptedSnapshot(format!("bad version field: {}", v)))?,
    };
    if version > SNAPSHOT_VERSION {
        log::warn!(
            "Save was written by format {}, reading with format {}",
            version,
            SNAPSHOT_VERSION
        );
    }

    let entries = match root.remove("achievements") {
        None | Some(serde_json::Value::Null) => Vec::new(),
        Some(serde_json::Value::Array(entries)) => entries,
        Some(_) => {
            return Err(EngineError::CorruptedSnapshot(
                "achievements is not an array".to_string(),
            ));
        }
    };

    let mut achievements = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<SavedAchievement>(entry) {
            Ok(saved) => achievements.push(saved),
            Err(e) => log::warn!("Skipping unreadable save entry {}: {}", index, e),
        }
    }

    Ok(StateSnapshot {
        version,
        achievements,
    })
}

/// 自动保存功能
pub struct AutoSave {
    pub save_system: SaveSystem,
    pub interval: Duration,
    pub last_save: Option<Timestamp>,
}

impl AutoSave {
    pub fn new(save_system: SaveSystem, interval: Duration) -> Self {
        Self {
            save_system,
            interval,
            last_save: None,
        }
    }

    /// Save if the interval has passed since the last save
    pub fn check_auto_save(
        &mut self,
        snapshot: &StateSnapshot,
        now: Timestamp,
    ) -> Result<bool, EngineError> {
        let should_save = match self.last_save {
            Some(last) => now.elapsed_since(last) >= self.interval,
            None => true,
        };

        if should_save {
            self.save_system.save(snapshot)?;
            self.last_save = Some(now);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 强制立即保存（忽略自动保存间隔）
    pub fn force_save(
        &mut self,
        snapshot: &StateSnapshot,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        self.save_system.save(snapshot)?;
        self.last_save = Some(now);
        Ok(())
    }

    pub fn last_save_time(&self) -> Option<Timestamp> {
        self.last_save
    }

    pub fn save_interval(&self) -> Duration {
        self.interval
    }

    pub fn set_save_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }
}
