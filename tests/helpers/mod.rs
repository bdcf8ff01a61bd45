//! Shared builders for integration tests.
//!
//! Every scenario runs on a `ManualClock` so timing is deterministic.

#![allow(dead_code)]

use achievements::{AchievementEngine, ManualClock, Timestamp};
use unlock_engine::event_bus::HardcoreSetting;
use unlock_engine::{AchievementListener, UnlockEvent, UnlockService};

pub const ME: &str = "U-self";
pub const PAIR: &str = "U-pair";

/// Catalog engine on a clock starting at t=0
pub fn catalog_engine() -> (AchievementEngine, ManualClock) {
    let clock = ManualClock::new(Timestamp::from_secs(0));
    let engine = AchievementEngine::with_catalog(clock.clone()).expect("catalog is valid");
    (engine, clock)
}

pub fn service() -> (UnlockService, ManualClock) {
    let (engine, clock) = catalog_engine();
    let listener = AchievementListener::new(engine, ME);
    (UnlockService::new(listener, 32), clock)
}

pub fn gag(layer: u8, name: &str, applying: bool, enactor: &str) -> UnlockEvent {
    UnlockEvent::GagStateChanged {
        layer,
        gag: name.to_string(),
        applying,
        enactor: enactor.to_string(),
    }
}

pub fn restraint(set_id: &str, enabling: bool, enactor: &str) -> UnlockEvent {
    UnlockEvent::RestraintStateChanged {
        set_id: set_id.to_string(),
        enabling,
        enactor: enactor.to_string(),
        glamour_slots: 10,
        binds_hands: false,
    }
}

pub fn lock(set_id: &str, locking: bool) -> UnlockEvent {
    UnlockEvent::RestraintLockChanged {
        set_id: set_id.to_string(),
        locking,
        enactor: ME.to_string(),
    }
}

pub fn hardcore(
    setting: HardcoreSetting,
    enabled: bool,
    enactor: &str,
    affected: &str,
) -> UnlockEvent {
    UnlockEvent::HardcoreAction {
        setting,
        enabled,
        enactor: enactor.to_string(),
        affected: affected.to_string(),
    }
}

pub fn online(uid: &str, gag_keys: &[&str], restraint: Option<&str>) -> UnlockEvent {
    UnlockEvent::OnlineCleanup {
        uid: uid.to_string(),
        active_gag_keys: gag_keys.iter().map(|k| k.to_string()).collect(),
        active_restraint: restraint.map(str::to_string),
    }
}
