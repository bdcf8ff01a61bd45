//! Event → engine glue
//!
//! `AchievementListener` owns the engine and a small picture of what the
//! local player currently has on (gags, restraints, vibes, hardcore
//! controls). Each `UnlockEvent` updates that picture first, then drives the
//! catalog achievements the event concerns.

use crate::event_bus::{
    ChatChannel, DeepDungeon, HardcoreSetting, PatternInteraction, PuppeteerOrder, UnlockEvent,
};
use achievements::{AchievementEngine, AchievementId, ids};
use std::collections::HashSet;

/// Gag layers a character can wear at once
pub const GAG_LAYERS: usize = 3;

mod emote {
    pub const LOOKOUT: u16 = 22;
    pub const STAGGER: u16 = 36;
    pub const SULK: u16 = 38;
    pub const SIT: u16 = 50;
    pub const GROUND_SIT: u16 = 52;
    pub const STROKE: u16 = 105;
    pub const SLAP: u16 = 111;
    pub const DOTE: u16 = 146;
    pub const SWEEP: u16 = 223;
    pub const SHUSH: u16 = 231;
}

/// Tracking key for a gag duration session
pub fn gag_key(layer: u8, gag: &str) -> String {
    format!("{}_{}", layer, gag)
}

/// What the local player currently has going on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub gags: [Option<String>; GAG_LAYERS],
    pub restraint: Option<String>,
    /// Who enabled the active restraint set
    pub restraint_enactor: Option<String>,
    pub hands_bound: bool,
    pub vibrating: bool,
    pub blindfolded: bool,
    pub following: bool,
    pub in_main_city: bool,
    pub in_diadem: bool,
    pub pattern_running: bool,
    pub in_pvp: bool,
}

impl PlayerState {
    pub fn gag_count(&self) -> usize {
        self.gags.iter().filter(|g| g.is_some()).count()
    }

    pub fn is_gagged(&self) -> bool {
        self.gag_count() > 0
    }

    pub fn is_restrained(&self) -> bool {
        self.restraint.is_some()
    }

    fn on_display(&self) -> bool {
        self.is_restrained() && self.blindfolded && self.following && self.in_main_city
    }
}

pub struct AchievementListener {
    engine: AchievementEngine,
    self_uid: String,
    state: PlayerState,
    /// Pairs we are leading by forced follow
    led_pairs: HashSet<String>,
    /// Pairs we have blindfolded
    blindfolded_pairs: HashSet<String>,
}

impl AchievementListener {
    pub fn new(engine: AchievementEngine, self_uid: impl Into<String>) -> Self {
        Self {
            engine,
            self_uid: self_uid.into(),
            state: PlayerState::default(),
            led_pairs: HashSet::new(),
            blindfolded_pairs: HashSet::new(),
        }
    }

    pub fn engine(&self) -> &AchievementEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut AchievementEngine {
        &mut self.engine
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn self_uid(&self) -> &str {
        &self.self_uid
    }

    pub fn into_engine(self) -> AchievementEngine {
        self.engine
    }

    /// Forward the periodic tick to the engine
    pub fn tick(&mut self) -> Vec<AchievementId> {
        self.engine.tick()
    }

    pub fn handle(&mut self, event: &UnlockEvent) {
        log::trace!("Handling {}", event.event_type());
        match event {
            UnlockEvent::GagStateChanged {
                layer,
                gag,
                applying,
                enactor,
            } => self.on_gag_state(*layer, gag, *applying, enactor),
            UnlockEvent::PairGagStateChanged {
                applying, enactor, ..
            } => {
                if *applying && self.is_self(enactor) {
                    self.increment_all(ids::GAGS_GIVEN, 1);
                }
            }
            UnlockEvent::RestraintStateChanged {
                set_id,
                enabling,
                enactor,
                glamour_slots,
                binds_hands,
            } => self.on_restraint_state(set_id, *enabling, enactor, *glamour_slots, *binds_hands),
            UnlockEvent::RestraintLockChanged {
                set_id, locking, ..
            } => {
                let owner = self.self_uid.clone();
                if *locking {
                    self.start_tracking_all(ids::SELF_RESTRAINT_DURATIONS, set_id, &owner);
                } else {
                    self.stop_tracking_all(ids::SELF_RESTRAINT_DURATIONS, set_id, &owner);
                }
            }
            UnlockEvent::PairRestraintStateChanged {
                enabling, enactor, ..
            } => {
                if *enabling && self.is_self(enactor) {
                    self.engine.increment_progress(ids::FIRST_TIEMERS, 1);
                    self.engine.increment_progress(ids::DID_ENTHUSIAST, 1);
                }
            }
            UnlockEvent::PairRestraintLockChanged {
                set_id,
                locking,
                enactor,
                affected,
            } => self.on_pair_restraint_lock(set_id, *locking, enactor, affected),
            UnlockEvent::RestraintSetDyed => self.increment_all(ids::DYED_SETS, 1),
            UnlockEvent::PatternAction {
                interaction,
                pattern_id,
                was_alarm,
            } => self.on_pattern(*interaction, pattern_id, *was_alarm),
            UnlockEvent::DeviceConnected => {
                self.engine.check_condition(ids::COLLECTOR_OF_SINFUL_TREASURES, true);
            }
            UnlockEvent::TriggerFired => self.increment_all(ids::TRIGGERS_FIRED, 1),
            UnlockEvent::VibratorToggled { on } => {
                self.state.vibrating = *on;
                if *on {
                    self.check_gag_combos();
                }
            }
            UnlockEvent::HardcoreAction {
                setting,
                enabled,
                enactor,
                affected,
            } => self.on_hardcore(*setting, *enabled, enactor, affected),
            UnlockEvent::ShockSent => self.increment_all(ids::SHOCKS_SENT, 1),
            UnlockEvent::ShockReceived => self.increment_all(ids::SHOCKS_RECEIVED, 1),
            UnlockEvent::PuppetAccessGiven { all, emotes } => {
                if *all {
                    self.engine.increment_progress(ids::COMPLETE_DEVOTION, 1);
                }
                if *emotes {
                    self.engine.increment_progress(ids::CONTROL_MY_BODY, 1);
                }
            }
            UnlockEvent::PuppeteerOrderSent { order } => {
                match order {
                    PuppeteerOrder::Grovel => {
                        self.engine.increment_progress(ids::KISS_MY_HEELS, 1);
                    }
                    PuppeteerOrder::Dance => {
                        self.engine.increment_progress(ids::A_MAESTRO_OF_MY_PROPERTY, 1);
                    }
                    PuppeteerOrder::Other => {}
                }
                self.engine.increment_progress(ids::MASTER_OF_PUPPETS, 1);
                self.increment_all(ids::ORDERS_SENT, 1);
            }
            UnlockEvent::PuppeteerOrderReceived { emote_id } => {
                self.increment_all(ids::ORDERS_RECEIVED, 1);
                match emote_id {
                    Some(emote::SULK) => {
                        self.engine.increment_progress(ids::ASHAMED, 1);
                    }
                    Some(emote::SIT) | Some(emote::GROUND_SIT) => {
                        self.engine.increment_progress(ids::AN_OBEDIENT_PET, 1);
                    }
                    Some(emote::SWEEP) => {
                        self.engine.increment_progress(ids::HOUSE_SERVANT, 1);
                    }
                    _ => {}
                }
            }
            UnlockEvent::DutyStarted {
                in_pvp,
                healer,
                party_size,
                level,
            } => self.on_duty_started(*in_pvp, *healer, *party_size, *level),
            UnlockEvent::DutyEnded {
                in_pvp,
                party_size,
                level,
            } => self.on_duty_ended(*in_pvp, *party_size, *level),
            UnlockEvent::DeepDungeonFloor {
                dungeon,
                floor,
                party_size,
            } => self.on_deep_dungeon_floor(*dungeon, *floor, *party_size),
            UnlockEvent::ZoneSwitched {
                in_main_city,
                in_diadem,
            } => self.on_zone_switched(*in_main_city, *in_diadem),
            UnlockEvent::PvpKill => {
                if self.state.is_restrained() {
                    for id in ids::PVP_KILLS {
                        self.engine.begin_conditional_task(*id, 0);
                        self.engine.check_task_progress(*id, 1);
                    }
                }
            }
            UnlockEvent::CursedLootFound => {
                self.engine.increment_progress(ids::TEMPTING_FATES_TREASURE, 1);
                for id in ids::CURSED_LOOT {
                    self.engine.begin_conditional_task(*id, 0);
                    self.engine.check_task_progress(*id, 1);
                }
            }
            UnlockEvent::JobChanged => {
                let restrained = self.state.is_restrained();
                self.engine.check_condition(ids::ESCAPING_IS_NOT_EASY, restrained);
            }
            UnlockEvent::ChatMessage { channel } => self.on_chat(*channel),
            UnlockEvent::EmoteExecuted {
                emote_id,
                by_self,
                at_self,
            } => self.on_emote(*emote_id, *by_self, *at_self),
            UnlockEvent::PairAdded => {
                self.engine.check_condition(ids::KINKY_NOVICE, true);
                self.engine.increment_progress(ids::THE_COLLECTOR, 1);
            }
            UnlockEvent::PairsVisible { count } => {
                self.engine.update_threshold(ids::BONDAGE_CLUB, *count);
                self.engine
                    .set_threshold_condition(ids::HUMILIATION, self.state.is_gagged());
                self.engine.update_threshold(ids::HUMILIATION, *count);
            }
            UnlockEvent::CommendationsReceived { amount } => {
                if self.state.is_restrained() {
                    self.increment_all(ids::COMMENDATIONS, *amount);
                }
            }
            UnlockEvent::OnlineCleanup {
                uid,
                active_gag_keys,
                active_restraint,
            } => self.on_online_cleanup(uid, active_gag_keys, active_restraint.as_deref()),
        }
    }

    // ===== Gags =====

    fn on_gag_state(&mut self, layer: u8, gag: &str, applying: bool, enactor: &str) {
        let slot = usize::from(layer);
        if slot >= GAG_LAYERS {
            log::warn!("Ignoring gag change on invalid layer {}", layer);
            return;
        }
        let key = gag_key(layer, gag);
        let owner = self.self_uid.clone();

        if applying {
            self.state.gags[slot] = Some(gag.to_string());
            if self.is_self(enactor) {
                self.engine.increment_progress(ids::SELF_APPLIED, 1);
            } else {
                self.increment_all(ids::GAGS_RECEIVED, 1);
                self.engine.increment_progress(ids::A_TRUE_GAG_SLUT, 1);
            }
            self.start_tracking_all(ids::GAG_DURATIONS, &key, &owner);
            self.check_gag_combos();
        } else {
            self.state.gags[slot] = None;
            self.stop_tracking_all(ids::GAG_DURATIONS, &key, &owner);
            if self.engine.conditional_task_begun(ids::SILENT_BUT_DEADLY) {
                self.engine.start_over_due_to_interrupt(ids::SILENT_BUT_DEADLY);
            }
        }

        self.engine
            .update_threshold(ids::SHUSHTAINABLE_RESOURCE, self.state.gag_count() as i64);
        self.engine
            .set_threshold_condition(ids::HUMILIATION, self.state.is_gagged());
    }

    fn check_gag_combos(&mut self) {
        let gagged = self.state.is_gagged();
        let vibrating = self.state.vibrating;
        let restrained = self.state.is_restrained();
        self.engine
            .check_condition(ids::GAGGED_PLEASURE, gagged && vibrating);
        self.engine
            .check_condition(ids::EXPERIMENTALIST, gagged && vibrating && restrained);
    }

    // ===== Restraints =====

    fn on_restraint_state(
        &mut self,
        set_id: &str,
        enabling: bool,
        enactor: &str,
        glamour_slots: u32,
        binds_hands: bool,
    ) {
        if enabling {
            let previous_enactor = self.state.restraint_enactor.take();
            self.state.restraint = Some(set_id.to_string());
            self.state.restraint_enactor = Some(enactor.to_string());
            self.state.hands_bound = binds_hands;

            self.engine.increment_progress(ids::FIRST_TIEMERS, 1);
            if self.is_self(enactor) {
                self.engine.increment_progress(ids::SELF_BONDAGE_ENTHUSIAST, 1);
            } else {
                // Passed from one pair to another
                let passed_on = previous_enactor
                    .as_deref()
                    .is_some_and(|prev| prev != enactor && !self.is_self(prev));
                if self.engine.conditional_task_begun(ids::AUCTIONED_OFF) {
                    self.engine.finish_conditional_task(ids::AUCTIONED_OFF, passed_on);
                }
                self.engine.begin_conditional_task(ids::AUCTIONED_OFF, 0);
                self.engine.start_task(ids::BONDODGE);
                self.engine
                    .update_threshold(ids::EXTREME_BONDAGE_ENJOYER, i64::from(glamour_slots));
                self.engine.increment_progress(ids::BONDAGE_BUNNY, 1);
                if binds_hands {
                    self.engine.increment_progress(ids::CUFFED_19, 1);
                }
            }
            self.check_gag_combos();
        } else {
            self.state.restraint = None;
            self.state.hands_bound = false;

            self.engine.check_completion(ids::BONDODGE);
            for id in ids::TRIALS {
                self.engine.start_over_due_to_interrupt(*id);
            }
            self.engine.update_threshold(ids::EXTREME_BONDAGE_ENJOYER, 0);
        }
        self.refresh_walk_of_shame();
    }

    fn on_pair_restraint_lock(
        &mut self,
        set_id: &str,
        locking: bool,
        enactor: &str,
        affected: &str,
    ) {
        if locking {
            if self.is_self(enactor) {
                self.start_tracking_all(ids::PAIR_RESTRAINT_DURATIONS, set_id, affected);
            }
        } else {
            self.stop_tracking_all(ids::PAIR_RESTRAINT_DURATIONS, set_id, affected);
            if self.is_self(enactor) {
                self.engine.increment_progress(ids::THE_RESCUER, 1);
            }
        }
    }

    // ===== Toybox =====

    fn on_pattern(&mut self, interaction: PatternInteraction, pattern_id: &str, was_alarm: bool) {
        let owner = self.self_uid.clone();
        match interaction {
            PatternInteraction::Published => self.increment_all(ids::PATTERNS_PUBLISHED, 1),
            PatternInteraction::Downloaded => self.increment_all(ids::PATTERNS_DOWNLOADED, 1),
            PatternInteraction::Liked => self.increment_all(ids::PATTERNS_LIKED, 1),
            PatternInteraction::Started => {
                self.state.pattern_running = true;
                self.start_tracking_all(ids::PATTERN_DURATIONS, pattern_id, &owner);
                if was_alarm {
                    self.engine.increment_progress(ids::HORNY_MORNINGS, 1);
                }
                if self.state.in_diadem && !self.state.in_pvp {
                    self.engine.start_task(ids::MOTIVATION_FOR_RESTORATION);
                }
            }
            PatternInteraction::Stopped => {
                self.state.pattern_running = false;
                self.stop_tracking_all(ids::PATTERN_DURATIONS, pattern_id, &owner);
                self.end_timed(ids::MOTIVATION_FOR_RESTORATION);
            }
        }
    }

    // ===== Hardcore =====

    fn on_hardcore(
        &mut self,
        setting: HardcoreSetting,
        enabled: bool,
        enactor: &str,
        affected: &str,
    ) {
        if self.is_self(affected) {
            self.on_hardcore_received(setting, enabled);
        } else if self.is_self(enactor) {
            self.on_hardcore_given(setting, enabled, affected);
        }
    }

    fn on_hardcore_received(&mut self, setting: HardcoreSetting, enabled: bool) {
        match (setting, enabled) {
            (HardcoreSetting::ForcedFollow, true) => {
                self.state.following = true;
                self.start_all(ids::WALKIES);
            }
            (HardcoreSetting::ForcedFollow, false) => {
                self.state.following = false;
                for id in ids::WALKIES {
                    self.end_timed(*id);
                }
                if self.engine.conditional_task_begun(ids::U_CAN_TIE_THIS) {
                    self.engine.start_over_due_to_interrupt(ids::U_CAN_TIE_THIS);
                }
            }
            (HardcoreSetting::ForcedEmote, true) => {
                self.engine.start_task(ids::LIVING_FURNITURE);
            }
            (HardcoreSetting::ForcedEmote, false) => self.end_timed(ids::LIVING_FURNITURE),
            (HardcoreSetting::ForcedStay, true) => self.start_all(ids::FORCED_STAY),
            (HardcoreSetting::ForcedStay, false) => {
                for id in ids::FORCED_STAY {
                    self.end_timed(*id);
                }
            }
            (HardcoreSetting::Blindfold, true) => {
                self.state.blindfolded = true;
                self.check_blind_leading();
                self.engine.start_task(ids::WHO_NEEDS_TO_SEE);
            }
            (HardcoreSetting::Blindfold, false) => {
                self.state.blindfolded = false;
                self.end_timed(ids::WHO_NEEDS_TO_SEE);
            }
        }
        self.refresh_walk_of_shame();
    }

    fn on_hardcore_given(&mut self, setting: HardcoreSetting, enabled: bool, pair: &str) {
        match (setting, enabled) {
            (HardcoreSetting::ForcedFollow, true) => {
                self.led_pairs.insert(pair.to_string());
                self.engine
                    .increment_progress(ids::ALL_THE_COLLARS_OF_THE_RAINBOW, 1);
                self.start_tracking_all(ids::FORCED_FOLLOW_DURATIONS, pair, pair);
                self.check_blind_leading();
            }
            (HardcoreSetting::ForcedFollow, false) => {
                self.led_pairs.remove(pair);
                self.stop_tracking_all(ids::FORCED_FOLLOW_DURATIONS, pair, pair);
            }
            (HardcoreSetting::Blindfold, true) => {
                self.blindfolded_pairs.insert(pair.to_string());
                self.check_blind_leading();
            }
            (HardcoreSetting::Blindfold, false) => {
                self.blindfolded_pairs.remove(pair);
            }
            _ => {}
        }
    }

    fn check_blind_leading(&mut self) {
        let leading_blind = self
            .led_pairs
            .iter()
            .any(|pair| self.blindfolded_pairs.contains(pair));
        self.engine.check_condition(
            ids::BLIND_LEADING_THE_BLIND,
            self.state.blindfolded && leading_blind,
        );
    }

    /// Runs while bound, blindfolded and led through a city
    fn refresh_walk_of_shame(&mut self) {
        if self.state.on_display() {
            self.engine.start_task(ids::WALK_OF_SHAME);
        } else {
            self.end_timed(ids::WALK_OF_SHAME);
        }
    }

    // ===== Content =====

    fn on_duty_started(&mut self, in_pvp: bool, healer: bool, party_size: u8, level: u8) {
        self.state.in_pvp = in_pvp;
        if in_pvp {
            return;
        }
        log::debug!("Duty started (party {}, level {})", party_size, level);

        let restrained = self.state.is_restrained();
        self.engine.check_condition(ids::KINKY_EXPLORER, restrained);
        self.engine.begin_conditional_task(ids::SILENT_BUT_DEADLY, 0);
        // Grace period before the follow check counts
        self.engine.begin_conditional_task(ids::U_CAN_TIE_THIS, 25);
        if healer {
            self.engine.begin_conditional_task(ids::HEAL_SLUT, 0);
        }
        if is_high_end_trial(party_size, level) {
            for id in ids::TRIALS {
                self.engine.begin_conditional_task(*id, 0);
            }
        }
    }

    fn on_duty_ended(&mut self, in_pvp: bool, party_size: u8, level: u8) {
        if in_pvp || self.state.in_pvp {
            self.state.in_pvp = false;
            return;
        }
        let state = &self.state;
        let (gagged, following, restrained) =
            (state.is_gagged(), state.following, state.is_restrained());
        let (vibrating, hands_bound, blindfolded) =
            (state.vibrating, state.hands_bound, state.blindfolded);

        self.engine.finish_conditional_task(ids::SILENT_BUT_DEADLY, gagged);
        self.engine.finish_conditional_task(ids::U_CAN_TIE_THIS, following);
        self.engine.finish_conditional_task(ids::HEAL_SLUT, restrained);

        if is_high_end_trial(party_size, level) {
            self.engine.finish_conditional_task(ids::TRIAL_OF_FOCUS, vibrating);
            self.engine
                .finish_conditional_task(ids::TRIAL_OF_DEXTERITY, hands_bound);
            self.engine
                .finish_conditional_task(ids::TRIAL_OF_THE_BLIND, blindfolded);
        } else {
            for id in ids::TRIALS {
                self.engine.start_over_due_to_interrupt(*id);
            }
        }
    }

    fn on_deep_dungeon_floor(&mut self, dungeon: DeepDungeon, floor: u32, party_size: u8) {
        let restrained = self.state.is_restrained();
        if party_size == 1 {
            self.engine.begin_conditional_task(ids::MY_KINKS_RUN_DEEPER, 0);
        }
        self.engine.begin_conditional_task(ids::MY_KINK_RUNS_DEEP, 0);

        let (boss_set, boss_floor, bottom) = match dungeon {
            DeepDungeon::PalaceOfTheDead => (
                ids::BONDAGE_PALACE,
                (41..=50).contains(&floor) || (91..=100).contains(&floor),
                200,
            ),
            DeepDungeon::HeavenOnHigh => (ids::HORNY_ON_HIGH, (21..=30).contains(&floor), 100),
            DeepDungeon::EurekaOrthos => (ids::EUREKA_WHORETHOS, (21..=30).contains(&floor), 100),
        };

        if boss_floor {
            self.engine.begin_conditional_task(boss_set, 0);
            if floor % 10 == 0 {
                self.engine.finish_conditional_task(boss_set, restrained);
            }
        }
        if floor == bottom {
            self.engine
                .finish_conditional_task(ids::MY_KINK_RUNS_DEEP, restrained);
            self.engine
                .finish_conditional_task(ids::MY_KINKS_RUN_DEEPER, restrained);
        }
    }

    fn on_zone_switched(&mut self, in_main_city: bool, in_diadem: bool) {
        self.state.in_main_city = in_main_city;
        self.state.in_diadem = in_diadem;
        self.refresh_walk_of_shame();

        if in_diadem && self.state.pattern_running && !self.state.in_pvp {
            self.engine.start_task(ids::MOTIVATION_FOR_RESTORATION);
        } else {
            self.end_timed(ids::MOTIVATION_FOR_RESTORATION);
        }

        // Leaving mid-duty abandons the run
        for id in ids::DUTY_TASKS {
            if self.engine.conditional_task_begun(*id) {
                self.engine.start_over_due_to_interrupt(*id);
            }
        }
    }

    // ===== Social =====

    fn on_chat(&mut self, channel: ChatChannel) {
        let gagged = self.state.is_gagged();
        self.engine.check_condition(
            ids::HELPLESS_DAMSEL,
            gagged && self.state.is_restrained() && self.state.following,
        );
        if !gagged {
            return;
        }
        match channel {
            ChatChannel::Say => self.increment_all(ids::SAY_MESSAGES, 1),
            ChatChannel::Yell => {
                self.engine.increment_progress(ids::PUBLIC_SPEAKER, 1);
            }
            ChatChannel::Shout => {
                self.engine.increment_progress(ids::FROM_CRIES_OF_HUMILITY, 1);
            }
            ChatChannel::Other => {}
        }
    }

    fn on_emote(&mut self, emote_id: u16, by_self: bool, at_self: bool) {
        let state = &self.state;
        let (target, holds) = match emote_id {
            emote::LOOKOUT if by_self => (ids::WHAT_A_VIEW, state.blindfolded),
            emote::STAGGER if by_self => (ids::VULNERABLE_VIBRATIONS, state.vibrating),
            emote::STROKE if by_self && at_self => (ids::PROLIFIC_PETTER, state.is_restrained()),
            emote::SLAP if !by_self && at_self => {
                (ids::I_CANT_BELIEVE_YOUVE_DONE_THIS, state.is_restrained())
            }
            emote::DOTE if by_self && !at_self => (ids::WITH_A_KISS_GOODBYE, state.is_gagged()),
            emote::SHUSH if by_self => (ids::QUIET_NOW_DEAR, state.is_gagged()),
            emote::SHUSH if at_self => (ids::SILENCE_OF_SHAME, state.is_gagged()),
            _ => return,
        };
        self.engine.check_condition(target, holds);
    }

    // ===== System =====

    fn on_online_cleanup(&mut self, uid: &str, gag_keys: &[String], restraint: Option<&str>) {
        log::debug!("Reconciling sessions for {}", uid);
        let gag_keys: Vec<&str> = gag_keys.iter().map(String::as_str).collect();
        let restraint_keys: Vec<&str> = restraint.into_iter().collect();

        self.cleanup_all(ids::GAG_DURATIONS, uid, &gag_keys);
        if self.is_self(uid) {
            self.cleanup_all(ids::SELF_RESTRAINT_DURATIONS, uid, &restraint_keys);
            self.engine
                .update_threshold(ids::SHUSHTAINABLE_RESOURCE, gag_keys.len() as i64);
        } else {
            self.cleanup_all(ids::PAIR_RESTRAINT_DURATIONS, uid, &restraint_keys);
        }
        self.cleanup_all(ids::PATTERN_DURATIONS, uid, &[]);
        self.cleanup_all(ids::FORCED_FOLLOW_DURATIONS, uid, &[]);

        // Our own pattern sessions are gone, so nothing is running anymore
        if self.is_self(uid) && self.state.pattern_running {
            self.state.pattern_running = false;
            self.end_timed(ids::MOTIVATION_FOR_RESTORATION);
        }
    }

    // ===== Helpers =====

    fn is_self(&self, uid: &str) -> bool {
        uid == self.self_uid
    }

    fn increment_all(&mut self, group: &[AchievementId], amount: i64) {
        for id in group {
            self.engine.increment_progress(*id, amount);
        }
    }

    fn start_all(&mut self, group: &[AchievementId]) {
        for id in group {
            self.engine.start_task(*id);
        }
    }

    /// The condition behind a time-required task ended: award it if the
    /// time is served, otherwise restart the clock next time
    fn end_timed(&mut self, id: AchievementId) {
        if !self.engine.check_completion(id).is_completed() {
            self.engine.interrupt_task(id);
        }
    }

    fn start_tracking_all(&mut self, group: &[AchievementId], key: &str, owner: &str) {
        for id in group {
            self.engine.start_tracking(*id, key, owner);
        }
    }

    fn stop_tracking_all(&mut self, group: &[AchievementId], key: &str, owner: &str) {
        for id in group {
            self.engine.stop_tracking(*id, key, owner);
        }
    }

    fn cleanup_all(&mut self, group: &[AchievementId], owner: &str, valid_keys: &[&str]) {
        for id in group {
            self.engine.cleanup_tracking(*id, owner, valid_keys);
        }
    }
}

fn is_high_end_trial(party_size: u8, level: u8) -> bool {
    party_size == 8 && level >= 90
}

impl std::fmt::Debug for AchievementListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AchievementListener")
            .field("self_uid", &self.self_uid)
            .field("state", &self.state)
            .field("engine", &self.engine)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use achievements::{AchievementKind, ManualClock, Timestamp};
    use std::time::Duration;

    const ME: &str = "U-self";
    const PAIR: &str = "U-pair";

    fn listener() -> (AchievementListener, ManualClock) {
        let clock = ManualClock::new(Timestamp::from_secs(0));
        let engine = AchievementEngine::with_catalog(clock.clone()).expect("catalog");
        (AchievementListener::new(engine, ME), clock)
    }

    fn gag(layer: u8, applying: bool, enactor: &str) -> UnlockEvent {
        UnlockEvent::GagStateChanged {
            layer,
            gag: "Ball Gag".to_string(),
            applying,
            enactor: enactor.to_string(),
        }
    }

    fn restraint(enabling: bool, enactor: &str) -> UnlockEvent {
        UnlockEvent::RestraintStateChanged {
            set_id: "set-1".to_string(),
            enabling,
            enactor: enactor.to_string(),
            glamour_slots: 4,
            binds_hands: true,
        }
    }

    fn hardcore(
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

    fn is_tracking(listener: &AchievementListener, id: AchievementId, key: &str) -> bool {
        match listener.engine().get(id).map(|a| a.kind()) {
            Some(AchievementKind::Duration(d)) => d.is_tracking(key),
            _ => false,
        }
    }

    #[test]
    fn test_self_gag_tracks_wear_time() {
        let (mut listener, clock) = listener();
        listener.handle(&gag(0, true, ME));

        assert!(listener.engine().is_completed(ids::SELF_APPLIED));
        assert!(is_tracking(&listener, ids::WHISPERS_TO_WHIMPERS, "0_Ball Gag"));
        assert_eq!(listener.state().gag_count(), 1);

        clock.advance(Duration::from_secs(12 * 60));
        listener.handle(&gag(0, false, ME));

        assert!(listener.engine().is_completed(ids::WHISPERS_TO_WHIMPERS));
        assert!(listener.engine().is_completed(ids::OF_MUFFLED_MOANS));
        assert!(!listener.engine().is_completed(ids::SILENT_STRUGGLER));
        assert!(!listener.state().is_gagged());
    }

    #[test]
    fn test_gag_from_pair_counts_received() {
        let (mut listener, _clock) = listener();
        listener.handle(&gag(1, true, PAIR));

        assert!(listener.engine().is_completed(ids::SILENCED_SLUT));
        assert!(!listener.engine().is_completed(ids::SELF_APPLIED));
    }

    #[test]
    fn test_all_layers_fill_shushtainable_resource() {
        let (mut listener, _clock) = listener();
        listener.handle(&gag(0, true, ME));
        listener.handle(&gag(1, true, ME));
        assert!(!listener.engine().is_completed(ids::SHUSHTAINABLE_RESOURCE));
        listener.handle(&gag(2, true, ME));
        assert!(listener.engine().is_completed(ids::SHUSHTAINABLE_RESOURCE));
    }

    #[test]
    fn test_invalid_gag_layer_ignored() {
        let (mut listener, _clock) = listener();
        listener.handle(&gag(7, true, ME));
        assert!(!listener.state().is_gagged());
        assert!(!listener.engine().is_dirty());
    }

    #[test]
    fn test_bondodge_within_limit() {
        let (mut listener, clock) = listener();
        listener.handle(&restraint(true, PAIR));
        assert!(listener.engine().timed_task_running(ids::BONDODGE));
        assert!(!listener.engine().is_completed(ids::CUFFED_19));

        clock.advance(Duration::from_secs(1));
        listener.handle(&restraint(false, ME));
        assert!(listener.engine().is_completed(ids::BONDODGE));
    }

    #[test]
    fn test_bondodge_too_slow() {
        let (mut listener, clock) = listener();
        listener.handle(&restraint(true, PAIR));
        clock.advance(Duration::from_secs(3));
        listener.handle(&restraint(false, ME));

        assert!(!listener.engine().is_completed(ids::BONDODGE));
        assert!(!listener.engine().timed_task_running(ids::BONDODGE));
    }

    #[test]
    fn test_auctioned_off_between_pairs() {
        let (mut listener, _clock) = listener();
        listener.handle(&restraint(true, PAIR));
        assert!(listener.engine().conditional_task_begun(ids::AUCTIONED_OFF));

        listener.handle(&restraint(true, "U-buyer"));
        assert!(listener.engine().is_completed(ids::AUCTIONED_OFF));
    }

    #[test]
    fn test_duty_while_gagged_counts() {
        let (mut listener, _clock) = listener();
        listener.handle(&gag(0, true, ME));
        listener.handle(&UnlockEvent::DutyStarted {
            in_pvp: false,
            healer: false,
            party_size: 4,
            level: 70,
        });
        assert!(listener.engine().conditional_task_begun(ids::SILENT_BUT_DEADLY));

        listener.handle(&UnlockEvent::DutyEnded {
            in_pvp: false,
            party_size: 4,
            level: 70,
        });
        assert!(!listener.engine().conditional_task_begun(ids::SILENT_BUT_DEADLY));
        match listener.engine().get(ids::SILENT_BUT_DEADLY).map(|a| a.kind()) {
            Some(AchievementKind::ConditionalProgress(p)) => assert_eq!(p.current(), 1),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_zone_switch_abandons_duty() {
        let (mut listener, _clock) = listener();
        listener.handle(&UnlockEvent::DutyStarted {
            in_pvp: false,
            healer: true,
            party_size: 4,
            level: 70,
        });
        assert!(listener.engine().conditional_task_begun(ids::HEAL_SLUT));

        listener.handle(&UnlockEvent::ZoneSwitched {
            in_main_city: false,
            in_diadem: false,
        });
        assert!(!listener.engine().conditional_task_begun(ids::HEAL_SLUT));
    }

    #[test]
    fn test_pvp_kills_only_while_restrained() {
        let (mut listener, _clock) = listener();
        listener.handle(&UnlockEvent::PvpKill);
        assert!(!listener.engine().conditional_task_begun(ids::ESCAPED_PATIENT));

        listener.handle(&restraint(true, ME));
        for _ in 0..10 {
            listener.handle(&UnlockEvent::PvpKill);
        }
        assert!(listener.engine().is_completed(ids::ESCAPED_PATIENT));
        assert!(!listener.engine().is_completed(ids::BOUND_TO_KILL));
    }

    #[test]
    fn test_forced_stay_completes_on_tick() {
        let (mut listener, clock) = listener();
        listener.handle(&hardcore(HardcoreSetting::ForcedStay, true, PAIR, ME));
        clock.advance(Duration::from_secs(30 * 60));

        let completed = listener.tick();
        assert_eq!(completed, vec![ids::OF_DOMESTIC_DISCIPLINE]);
    }

    #[test]
    fn test_released_early_restarts_walkies() {
        let (mut listener, clock) = listener();
        listener.handle(&hardcore(HardcoreSetting::ForcedFollow, true, PAIR, ME));
        clock.advance(Duration::from_secs(30));
        listener.handle(&hardcore(HardcoreSetting::ForcedFollow, false, PAIR, ME));

        assert!(!listener.engine().is_completed(ids::TIME_FOR_WALKIES));
        assert!(!listener.engine().timed_task_running(ids::TIME_FOR_WALKIES));
    }

    #[test]
    fn test_walk_of_shame_needs_everything() {
        let (mut listener, _clock) = listener();
        listener.handle(&restraint(true, PAIR));
        listener.handle(&hardcore(HardcoreSetting::Blindfold, true, PAIR, ME));
        listener.handle(&hardcore(HardcoreSetting::ForcedFollow, true, PAIR, ME));
        assert!(!listener.engine().timed_task_running(ids::WALK_OF_SHAME));

        listener.handle(&UnlockEvent::ZoneSwitched {
            in_main_city: true,
            in_diadem: false,
        });
        assert!(listener.engine().timed_task_running(ids::WALK_OF_SHAME));

        listener.handle(&hardcore(HardcoreSetting::Blindfold, false, PAIR, ME));
        assert!(!listener.engine().timed_task_running(ids::WALK_OF_SHAME));
    }

    #[test]
    fn test_emote_conditions() {
        let (mut listener, _clock) = listener();
        listener.handle(&UnlockEvent::EmoteExecuted {
            emote_id: 231,
            by_self: true,
            at_self: false,
        });
        assert!(!listener.engine().is_completed(ids::QUIET_NOW_DEAR));

        listener.handle(&gag(0, true, ME));
        listener.handle(&UnlockEvent::EmoteExecuted {
            emote_id: 231,
            by_self: true,
            at_self: false,
        });
        assert!(listener.engine().is_completed(ids::QUIET_NOW_DEAR));
        assert!(!listener.engine().is_completed(ids::SILENCE_OF_SHAME));
    }

    #[test]
    fn test_humiliation_gated_on_gag() {
        let (mut listener, _clock) = listener();
        listener.handle(&UnlockEvent::PairsVisible { count: 6 });
        assert!(!listener.engine().is_completed(ids::HUMILIATION));

        listener.handle(&gag(0, true, ME));
        listener.handle(&UnlockEvent::PairsVisible { count: 6 });
        assert!(listener.engine().is_completed(ids::HUMILIATION));
        assert!(!listener.engine().is_completed(ids::BONDAGE_CLUB));
    }

    #[test]
    fn test_pair_lock_tracks_under_pair_uid() {
        let (mut listener, clock) = listener();
        listener.handle(&UnlockEvent::PairRestraintLockChanged {
            set_id: "set-9".to_string(),
            locking: true,
            enactor: ME.to_string(),
            affected: PAIR.to_string(),
        });
        assert!(is_tracking(&listener, ids::RIGGERS_FIRST_SESSION, "set-9"));

        clock.advance(Duration::from_secs(31 * 60));
        listener.handle(&UnlockEvent::PairRestraintLockChanged {
            set_id: "set-9".to_string(),
            locking: false,
            enactor: ME.to_string(),
            affected: PAIR.to_string(),
        });
        assert!(listener.engine().is_completed(ids::RIGGERS_FIRST_SESSION));
        assert!(!listener.engine().is_completed(ids::THE_RESCUER));
    }

    #[test]
    fn test_online_cleanup_stops_own_pattern() {
        let (mut listener, _clock) = listener();
        listener.handle(&UnlockEvent::PatternAction {
            interaction: PatternInteraction::Started,
            pattern_id: "p-1".to_string(),
            was_alarm: false,
        });
        assert!(listener.state().pattern_running);

        listener.handle(&UnlockEvent::OnlineCleanup {
            uid: ME.to_string(),
            active_gag_keys: Vec::new(),
            active_restraint: None,
        });
        assert!(!listener.state().pattern_running);
        assert!(!is_tracking(&listener, ids::PATTERN_DURATIONS[0], "p-1"));

        listener.handle(&UnlockEvent::ZoneSwitched {
            in_main_city: false,
            in_diadem: true,
        });
        assert!(!listener.engine().timed_task_running(ids::MOTIVATION_FOR_RESTORATION));
    }
}
