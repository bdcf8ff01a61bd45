//! Owns the event bus and the listener and drives both
//!
//! Everything that touches the engine happens on the thread that owns the
//! service. Other threads publish through an `EventSender`.

use crate::config::UnlockConfig;
use crate::event_bus::{EventBus, EventSender, EventStatistics, LoggingMiddleware, UnlockEvent};
use crate::listener::AchievementListener;
use achievements::{AchievementEngine, AchievementId, Clock, LogNotifier};
use error::EngineError;
use save::{AutoSave, SaveSystem};

pub struct UnlockService {
    bus: EventBus,
    statistics: EventStatistics,
    listener: AchievementListener,
    auto_save: Option<AutoSave>,
}

impl UnlockService {
    pub fn new(listener: AchievementListener, history_size: usize) -> Self {
        let statistics = EventStatistics::new();
        let mut bus = EventBus::with_history_size(history_size);
        bus.register_middleware(Box::new(LoggingMiddleware));
        bus.register_middleware(Box::new(statistics.clone()));

        Self {
            bus,
            statistics,
            listener,
            auto_save: None,
        }
    }

    /// Catalog engine restored from the configured save file, writing
    /// completions through to it and auto-saving on tick
    pub fn from_config(
        config: &UnlockConfig,
        clock: impl Clock + 'static,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let save_system = SaveSystem::new(&config.save_path, config.save_format)?;
        let mut engine = AchievementEngine::with_catalog(clock)?;

        let snapshot = save_system.load_or_default()?;
        let report = engine.import_state(&snapshot);
        log::info!(
            "Restored {} achievement states from {:?} ({} skipped)",
            report.applied,
            save_system.path(),
            report.skipped.len()
        );

        engine.set_notifier(LogNotifier);
        engine.set_persistence(save_system.clone());

        let listener = AchievementListener::new(engine, config.self_uid.clone());
        let mut service = Self::new(listener, config.history_size);
        service.auto_save = Some(AutoSave::new(save_system, config.auto_save_interval()));
        Ok(service)
    }

    pub fn with_auto_save(mut self, auto_save: AutoSave) -> Self {
        self.auto_save = Some(auto_save);
        self
    }

    pub fn publish(&mut self, event: UnlockEvent) {
        self.bus.publish(event);
    }

    /// Handle for other threads
    pub fn sender(&self) -> EventSender {
        self.bus.sender()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Per-type counts of every event admitted to the bus
    pub fn statistics(&self) -> &EventStatistics {
        &self.statistics
    }

    pub fn listener(&self) -> &AchievementListener {
        &self.listener
    }

    pub fn engine(&self) -> &AchievementEngine {
        self.listener.engine()
    }

    pub fn engine_mut(&mut self) -> &mut AchievementEngine {
        self.listener.engine_mut()
    }

    /// Feed every queued event, remote ones included, to the listener in
    /// publish order. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        self.bus.collect_remote();
        let events: Vec<UnlockEvent> = self.bus.drain().collect();
        for event in &events {
            self.listener.handle(event);
        }
        events.len()
    }

    /// Periodic driver: pumps, ticks the engine, promotes delayed events
    /// and auto-saves when due. Returns achievements completed by the tick.
    pub fn tick(&mut self) -> Vec<AchievementId> {
        self.pump();
        let completed = self.listener.tick();
        self.bus.next_frame();

        if let Some(auto_save) = self.auto_save.as_mut() {
            let engine = self.listener.engine();
            match auto_save.check_auto_save(&engine.export_state(), engine.now()) {
                Ok(true) => log::debug!("Auto-saved achievement state"),
                Ok(false) => {}
                Err(err) => log::error!("Auto-save failed: {}", error::handle_error(&err)),
            }
        }
        completed
    }

    /// Pump what is left and write the final state
    pub fn shutdown(mut self) -> Result<AchievementEngine, EngineError> {
        self.pump();
        if let Some(auto_save) = self.auto_save.as_mut() {
            let engine = self.listener.engine();
            auto_save.force_save(&engine.export_state(), engine.now())?;
        }
        Ok(self.listener.into_engine())
    }
}

impl std::fmt::Debug for UnlockService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnlockService")
            .field("queued", &self.bus.len())
            .field("events_seen", &self.statistics.total_events())
            .field("listener", &self.listener)
            .field("auto_save", &self.auto_save.is_some())
            .finish()
    }
}
