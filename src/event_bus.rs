//! 事件总线系统，用于解耦游戏事件与成就逻辑
//!
//! Gameplay code publishes semantic `UnlockEvent`s; the owner of the
//! achievement engine drains them in order. Producers on other threads get
//! an `EventSender` and never touch the engine directly.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// 事件类别 - 用于事件分组和过滤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Gags,
    Restraints,
    Toybox,
    Hardcore,
    Puppeteer,
    Content,
    Social,
    /// Session bookkeeping such as reconnect reconciliation
    System,
}

/// Which side of a pattern interaction happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternInteraction {
    Published,
    Downloaded,
    Liked,
    Started,
    Stopped,
}

/// Hardcore controls a pair can place on someone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HardcoreSetting {
    ForcedFollow,
    ForcedEmote,
    ForcedStay,
    Blindfold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChatChannel {
    Say,
    Yell,
    Shout,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuppeteerOrder {
    Grovel,
    Dance,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeepDungeon {
    PalaceOfTheDead,
    HeavenOnHigh,
    EurekaOrthos,
}

/// Semantic gameplay events that achievements react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UnlockEvent {
    // ===== Gags =====
    GagStateChanged {
        layer: u8,
        gag: String,
        applying: bool,
        enactor: String,
    },
    PairGagStateChanged {
        layer: u8,
        gag: String,
        applying: bool,
        enactor: String,
        affected: String,
    },

    // ===== Restraints =====
    RestraintStateChanged {
        set_id: String,
        enabling: bool,
        enactor: String,
        /// Number of equipment slots the set covers
        glamour_slots: u32,
        binds_hands: bool,
    },
    RestraintLockChanged {
        set_id: String,
        locking: bool,
        enactor: String,
    },
    PairRestraintStateChanged {
        set_id: String,
        enabling: bool,
        enactor: String,
        affected: String,
    },
    PairRestraintLockChanged {
        set_id: String,
        locking: bool,
        enactor: String,
        affected: String,
    },
    RestraintSetDyed,

    // ===== Toybox =====
    PatternAction {
        interaction: PatternInteraction,
        pattern_id: String,
        was_alarm: bool,
    },
    DeviceConnected,
    TriggerFired,
    VibratorToggled {
        on: bool,
    },

    // ===== Hardcore =====
    HardcoreAction {
        setting: HardcoreSetting,
        enabled: bool,
        enactor: String,
        affected: String,
    },
    ShockSent,
    ShockReceived,

    // ===== Puppeteer =====
    PuppetAccessGiven {
        all: bool,
        emotes: bool,
    },
    PuppeteerOrderSent {
        order: PuppeteerOrder,
    },
    PuppeteerOrderReceived {
        emote_id: Option<u16>,
    },

    // ===== Content =====
    DutyStarted {
        in_pvp: bool,
        healer: bool,
        party_size: u8,
        level: u8,
    },
    DutyEnded {
        in_pvp: bool,
        party_size: u8,
        level: u8,
    },
    DeepDungeonFloor {
        dungeon: DeepDungeon,
        floor: u32,
        party_size: u8,
    },
    ZoneSwitched {
        in_main_city: bool,
        in_diadem: bool,
    },
    PvpKill,
    CursedLootFound,
    JobChanged,

    // ===== Social =====
    ChatMessage {
        channel: ChatChannel,
    },
    EmoteExecuted {
        emote_id: u16,
        by_self: bool,
        at_self: bool,
    },
    PairAdded,
    PairsVisible {
        count: i64,
    },
    CommendationsReceived {
        amount: i64,
    },

    // ===== System =====
    /// A character came online with its authoritative active state
    OnlineCleanup {
        uid: String,
        active_gag_keys: Vec<String>,
        active_restraint: Option<String>,
    },
}

impl UnlockEvent {
    /// 获取事件类型的字符串表示
    pub fn event_type(&self) -> &'static str {
        match self {
            UnlockEvent::GagStateChanged { .. } => "GagStateChanged",
            UnlockEvent::PairGagStateChanged { .. } => "PairGagStateChanged",
            UnlockEvent::RestraintStateChanged { .. } => "RestraintStateChanged",
            UnlockEvent::RestraintLockChanged { .. } => "RestraintLockChanged",
            UnlockEvent::PairRestraintStateChanged { .. } => "PairRestraintStateChanged",
            UnlockEvent::PairRestraintLockChanged { .. } => "PairRestraintLockChanged",
            UnlockEvent::RestraintSetDyed => "RestraintSetDyed",
            UnlockEvent::PatternAction { .. } => "PatternAction",
            UnlockEvent::DeviceConnected => "DeviceConnected",
            UnlockEvent::TriggerFired => "TriggerFired",
            UnlockEvent::VibratorToggled { .. } => "VibratorToggled",
            UnlockEvent::HardcoreAction { .. } => "HardcoreAction",
            UnlockEvent::ShockSent => "ShockSent",
            UnlockEvent::ShockReceived => "ShockReceived",
            UnlockEvent::PuppetAccessGiven { .. } => "PuppetAccessGiven",
            UnlockEvent::PuppeteerOrderSent { .. } => "PuppeteerOrderSent",
            UnlockEvent::PuppeteerOrderReceived { .. } => "PuppeteerOrderReceived",
            UnlockEvent::DutyStarted { .. } => "DutyStarted",
            UnlockEvent::DutyEnded { .. } => "DutyEnded",
            UnlockEvent::DeepDungeonFloor { .. } => "DeepDungeonFloor",
            UnlockEvent::ZoneSwitched { .. } => "ZoneSwitched",
            UnlockEvent::PvpKill => "PvpKill",
            UnlockEvent::CursedLootFound => "CursedLootFound",
            UnlockEvent::JobChanged => "JobChanged",
            UnlockEvent::ChatMessage { .. } => "ChatMessage",
            UnlockEvent::EmoteExecuted { .. } => "EmoteExecuted",
            UnlockEvent::PairAdded => "PairAdded",
            UnlockEvent::PairsVisible { .. } => "PairsVisible",
            UnlockEvent::CommendationsReceived { .. } => "CommendationsReceived",
            UnlockEvent::OnlineCleanup { .. } => "OnlineCleanup",
        }
    }

    /// 获取事件所属类别
    pub fn category(&self) -> EventCategory {
        match self {
            UnlockEvent::GagStateChanged { .. } | UnlockEvent::PairGagStateChanged { .. } => {
                EventCategory::Gags
            }
            UnlockEvent::RestraintStateChanged { .. }
            | UnlockEvent::RestraintLockChanged { .. }
            | UnlockEvent::PairRestraintStateChanged { .. }
            | UnlockEvent::PairRestraintLockChanged { .. }
            | UnlockEvent::RestraintSetDyed => EventCategory::Restraints,
            UnlockEvent::PatternAction { .. }
            | UnlockEvent::DeviceConnected
            | UnlockEvent::TriggerFired
            | UnlockEvent::VibratorToggled { .. } => EventCategory::Toybox,
            UnlockEvent::HardcoreAction { .. }
            | UnlockEvent::ShockSent
            | UnlockEvent::ShockReceived => EventCategory::Hardcore,
            UnlockEvent::PuppetAccessGiven { .. }
            | UnlockEvent::PuppeteerOrderSent { .. }
            | UnlockEvent::PuppeteerOrderReceived { .. } => EventCategory::Puppeteer,
            UnlockEvent::DutyStarted { .. }
            | UnlockEvent::DutyEnded { .. }
            | UnlockEvent::DeepDungeonFloor { .. }
            | UnlockEvent::ZoneSwitched { .. }
            | UnlockEvent::PvpKill
            | UnlockEvent::CursedLootFound
            | UnlockEvent::JobChanged => EventCategory::Content,
            UnlockEvent::ChatMessage { .. }
            | UnlockEvent::EmoteExecuted { .. }
            | UnlockEvent::PairAdded
            | UnlockEvent::PairsVisible { .. }
            | UnlockEvent::CommendationsReceived { .. } => EventCategory::Social,
            UnlockEvent::OnlineCleanup { .. } => EventCategory::System,
        }
    }
}

/// 事件优先级（数字越小优先级越高）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Highest = 0,
    High = 1,
    Normal = 2,
    Low = 3,
    Lowest = 4,
}

/// 事件中间件 trait - 用于在事件处理前/后插入逻辑
pub trait EventMiddleware: Send {
    /// 返回 false 表示阻止该事件进入队列
    fn before_handle(&mut self, _event: &UnlockEvent) -> bool {
        true
    }

    fn after_handle(&mut self, _event: &UnlockEvent) {}

    fn name(&self) -> &str;

    fn priority(&self) -> Priority {
        Priority::Normal
    }
}

struct MiddlewareEntry {
    middleware: Box<dyn EventMiddleware>,
    priority: Priority,
}

/// Cloneable handle for publishing from other threads
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: Sender<UnlockEvent>,
}

impl EventSender {
    /// Returns false once the bus has been dropped
    pub fn send(&self, event: UnlockEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// 事件总线 - FIFO queue plus next-frame queue, middleware and history
pub struct EventBus {
    /// 当前帧的事件队列
    events: VecDeque<UnlockEvent>,
    /// 下一帧的事件队列
    next_frame_events: Vec<UnlockEvent>,
    middlewares: Vec<MiddlewareEntry>,
    /// 事件历史（用于调试和回放）
    history: VecDeque<UnlockEvent>,
    max_history: usize,
    tx: Sender<UnlockEvent>,
    rx: Receiver<UnlockEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_history_size(100)
    }

    /// 创建一个指定历史记录大小的事件总线
    pub fn with_history_size(max_history: usize) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            events: VecDeque::new(),
            next_frame_events: Vec::new(),
            middlewares: Vec::new(),
            history: VecDeque::with_capacity(max_history),
            max_history,
            tx,
            rx,
        }
    }

    /// Handle for producers on other threads. Their events join the queue
    /// at the next `collect_remote` (the service does this on every pump).
    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// 发布事件（添加到当前帧队列）
    pub fn publish(&mut self, event: UnlockEvent) {
        if !self.admit(&event) {
            return;
        }
        self.add_to_history(event.clone());
        self.after_admit(&event);
        self.events.push_back(event);
    }

    /// 发布延迟事件（添加到下一帧队列）
    pub fn publish_delayed(&mut self, event: UnlockEvent) {
        self.next_frame_events.push(event);
    }

    /// Move everything sent through `EventSender`s into the queue
    pub fn collect_remote(&mut self) -> usize {
        let mut collected = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.publish(event);
            collected += 1;
        }
        collected
    }

    /// 获取所有待处理事件并清空队列
    pub fn drain(&mut self) -> impl Iterator<Item = UnlockEvent> + '_ {
        self.events.drain(..)
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// 帧结束时调用，将下一帧事件移到当前帧
    pub fn next_frame(&mut self) {
        let delayed = std::mem::take(&mut self.next_frame_events);
        for event in delayed {
            self.publish(event);
        }
    }

    /// 清空所有事件
    pub fn clear(&mut self) {
        self.events.clear();
        self.next_frame_events.clear();
    }

    pub fn register_middleware(&mut self, middleware: Box<dyn EventMiddleware>) {
        let priority = middleware.priority();
        self.middlewares.push(MiddlewareEntry {
            middleware,
            priority,
        });
        self.middlewares.sort_by(|a, b| a.priority.cmp(&b.priority));
    }

    fn admit(&mut self, event: &UnlockEvent) -> bool {
        for entry in &mut self.middlewares {
            if !entry.middleware.before_handle(event) {
                log::trace!(
                    "{} dropped by middleware {}",
                    event.event_type(),
                    entry.middleware.name()
                );
                return false;
            }
        }
        true
    }

    fn after_admit(&mut self, event: &UnlockEvent) {
        for entry in &mut self.middlewares {
            entry.middleware.after_handle(event);
        }
    }

    fn add_to_history(&mut self, event: UnlockEvent) {
        if self.max_history == 0 {
            return;
        }
        if self.history.len() >= self.max_history {
            self.history.pop_front();
        }
        self.history.push_back(event);
    }

    /// 获取事件历史（最近的 n 个事件, oldest first）
    pub fn get_history(&self, count: usize) -> Vec<&UnlockEvent> {
        let start = self.history.len().saturating_sub(count);
        self.history.range(start..).collect()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn middleware_count(&self) -> usize {
        self.middlewares.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Traces every admitted event
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl EventMiddleware for LoggingMiddleware {
    fn after_handle(&mut self, event: &UnlockEvent) {
        log::trace!("[{:?}] {:?}", event.category(), event);
    }

    fn name(&self) -> &str {
        "LoggingMiddleware"
    }

    fn priority(&self) -> Priority {
        Priority::Lowest
    }
}

/// 事件统计 - counts events by type
///
/// Clones share one set of counters, so a copy can be registered on the bus
/// while the owner keeps another for reporting.
#[derive(Debug, Clone, Default)]
pub struct EventStatistics {
    counts: Arc<Mutex<HashMap<&'static str, usize>>>,
}

impl EventStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    fn counts(&self) -> MutexGuard<'_, HashMap<&'static str, usize>> {
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_count(&self, event_type: &str) -> usize {
        self.counts().get(event_type).copied().unwrap_or(0)
    }

    pub fn total_events(&self) -> usize {
        self.counts().values().sum()
    }

    /// Event types seen so far, most frequent first
    pub fn most_frequent(&self, count: usize) -> Vec<(&'static str, usize)> {
        let mut ranked: Vec<(&'static str, usize)> =
            self.counts().iter().map(|(k, v)| (*k, *v)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        ranked.truncate(count);
        ranked
    }
}

impl EventMiddleware for EventStatistics {
    fn after_handle(&mut self, event: &UnlockEvent) {
        *self.counts().entry(event.event_type()).or_insert(0) += 1;
    }

    fn name(&self) -> &str {
        "EventStatistics"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    struct BlockShocks;

    impl EventMiddleware for BlockShocks {
        fn before_handle(&mut self, event: &UnlockEvent) -> bool {
            !matches!(event, UnlockEvent::ShockSent)
        }

        fn name(&self) -> &str {
            "BlockShocks"
        }
    }

    #[test]
    fn test_fifo_drain() {
        let mut bus = EventBus::new();
        bus.publish(UnlockEvent::TriggerFired);
        bus.publish(UnlockEvent::PairAdded);
        bus.publish(UnlockEvent::ShockSent);

        let drained: Vec<&'static str> = bus.drain().map(|e| e.event_type()).collect();
        assert_eq!(drained, vec!["TriggerFired", "PairAdded", "ShockSent"]);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_delayed_events_wait_for_next_frame() {
        let mut bus = EventBus::new();
        bus.publish_delayed(UnlockEvent::DeviceConnected);
        assert!(!bus.has_events());

        bus.next_frame();
        assert_eq!(bus.len(), 1);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut bus = EventBus::with_history_size(2);
        bus.publish(UnlockEvent::TriggerFired);
        bus.publish(UnlockEvent::PairAdded);
        bus.publish(UnlockEvent::ShockSent);

        let recent: Vec<&'static str> =
            bus.get_history(10).iter().map(|e| e.event_type()).collect();
        assert_eq!(recent, vec!["PairAdded", "ShockSent"]);
    }

    #[test]
    fn test_remote_sender() {
        let mut bus = EventBus::new();
        let sender = bus.sender();
        let handle = std::thread::spawn(move || {
            sender.send(UnlockEvent::ShockReceived);
            sender.send(UnlockEvent::PvpKill);
        });
        handle.join().expect("producer thread");

        assert_eq!(bus.collect_remote(), 2);
        assert_eq!(bus.len(), 2);
    }

    #[test]
    fn test_middleware_filters_and_counts() {
        let stats = EventStatistics::new();
        let mut bus = EventBus::new();
        bus.register_middleware(Box::new(BlockShocks));
        bus.register_middleware(Box::new(stats.clone()));

        bus.publish(UnlockEvent::PairAdded);
        bus.publish(UnlockEvent::ShockSent);
        bus.publish(UnlockEvent::TriggerFired);
        bus.publish(UnlockEvent::PairAdded);

        assert_eq!(bus.len(), 3);
        assert_eq!(bus.middleware_count(), 2);
        assert_eq!(stats.get_count("ShockSent"), 0);
        assert_eq!(stats.total_events(), 3);
        assert_eq!(stats.most_frequent(1), vec![("PairAdded", 2)]);
    }

    #[test]
    fn test_categories() {
        assert_eq!(UnlockEvent::ShockSent.category(), EventCategory::Hardcore);
        assert_eq!(
            UnlockEvent::PairsVisible { count: 3 }.category(),
            EventCategory::Social
        );
    }
}
