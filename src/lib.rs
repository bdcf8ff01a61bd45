//! Achievement unlock service for the GagSpeak client
//!
//! The progress engine lives in the `achievements` crate; this crate turns
//! gameplay events into engine operations and runs the periodic loop.

pub mod config;
pub mod event_bus;
pub mod listener;
pub mod service;

pub use config::UnlockConfig;
pub use event_bus::{EventBus, EventSender, UnlockEvent};
pub use listener::{AchievementListener, PlayerState};
pub use service::UnlockService;
