//! Static achievement catalog
//!
//! Ids are grouped by family in hundreds and must never be renumbered:
//! saved state is keyed by them.

use crate::achievement::Achievement;
use std::time::Duration;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

/// Catalog identifiers
pub mod ids {
    use crate::achievement::AchievementId;

    // Gags
    pub const SELF_APPLIED: AchievementId = AchievementId(100);
    pub const SILENCED_SLUT: AchievementId = AchievementId(101);
    pub const IN_DEEP_SILENCE: AchievementId = AchievementId(102);
    pub const SILENT_OBSESSIONS: AchievementId = AchievementId(103);
    pub const GOLDEN_SILENCE: AchievementId = AchievementId(104);
    pub const A_KINK_FOR_DROOL: AchievementId = AchievementId(105);
    pub const THE_PERFECT_GAG_SLUT: AchievementId = AchievementId(106);
    pub const A_TRUE_GAG_SLUT: AchievementId = AchievementId(107);
    pub const WHISPERS_TO_WHIMPERS: AchievementId = AchievementId(110);
    pub const OF_MUFFLED_MOANS: AchievementId = AchievementId(111);
    pub const SILENT_STRUGGLER: AchievementId = AchievementId(112);
    pub const QUIETED_CAPTIVE: AchievementId = AchievementId(113);
    pub const MESSY_DROOLER: AchievementId = AchievementId(114);
    pub const DROOLING_DIVA: AchievementId = AchievementId(115);
    pub const EMBRACE_OF_SILENCE: AchievementId = AchievementId(116);
    pub const SUBJUGATION_TO_SILENCE: AchievementId = AchievementId(117);
    pub const SPEECH_SILVER_SILENCE_GOLDEN: AchievementId = AchievementId(118);
    pub const THE_KINKY_LEGEND: AchievementId = AchievementId(119);
    pub const SHUSHTAINABLE_RESOURCE: AchievementId = AchievementId(120);
    pub const SILENCE_SLUT: AchievementId = AchievementId(130);
    pub const WATCH_YOUR_TONGUE: AchievementId = AchievementId(131);
    pub const TONGUE_TAMER: AchievementId = AchievementId(132);
    pub const KINKY_LIBRARIAN: AchievementId = AchievementId(133);
    pub const ORCHESTRATOR_OF_SILENCE: AchievementId = AchievementId(134);
    pub const EXPERIMENTALIST: AchievementId = AchievementId(140);
    pub const GAGGED_PLEASURE: AchievementId = AchievementId(141);

    // Restraints
    pub const FIRST_TIEMERS: AchievementId = AchievementId(200);
    pub const SELF_BONDAGE_ENTHUSIAST: AchievementId = AchievementId(201);
    pub const DID_ENTHUSIAST: AchievementId = AchievementId(202);
    pub const AUCTIONED_OFF: AchievementId = AchievementId(203);
    pub const BONDODGE: AchievementId = AchievementId(204);
    pub const EXTREME_BONDAGE_ENJOYER: AchievementId = AchievementId(205);
    pub const BONDAGE_BUNNY: AchievementId = AchievementId(206);
    pub const CUFFED_19: AchievementId = AchievementId(207);
    pub const THE_RESCUER: AchievementId = AchievementId(208);
    pub const TO_DYE_FOR: AchievementId = AchievementId(210);
    pub const DYE_ANOTHER_DAY: AchievementId = AchievementId(211);
    pub const DYE_HARD: AchievementId = AchievementId(212);
    pub const FIRST_TIME_BONDAGE: AchievementId = AchievementId(220);
    pub const AMATEUR_BONDAGE: AchievementId = AchievementId(221);
    pub const COMFORT_RESTRAINT: AchievementId = AchievementId(222);
    pub const YOUR_BONDAGE_MAID: AchievementId = AchievementId(223);
    pub const YOUR_RUBBER_MAID: AchievementId = AchievementId(224);
    pub const TRAINED_BONDAGE_SLAVE: AchievementId = AchievementId(225);
    pub const YOUR_RUBBER_SLUT: AchievementId = AchievementId(226);
    pub const A_TRUE_BONDAGE_SLAVE: AchievementId = AchievementId(227);
    pub const RIGGERS_FIRST_SESSION: AchievementId = AchievementId(230);
    pub const MY_LITTLE_PLAYTHING: AchievementId = AchievementId(231);
    pub const SUITS_YOU_BITCH: AchievementId = AchievementId(232);
    pub const TIES_THAT_BIND: AchievementId = AchievementId(233);
    pub const SLAVE_TRAINER: AchievementId = AchievementId(234);
    pub const CEREMONY_OF_ETERNAL_BONDAGE: AchievementId = AchievementId(235);

    // Puppeteer
    pub const COMPLETE_DEVOTION: AchievementId = AchievementId(300);
    pub const CONTROL_MY_BODY: AchievementId = AchievementId(301);
    pub const KISS_MY_HEELS: AchievementId = AchievementId(302);
    pub const A_MAESTRO_OF_MY_PROPERTY: AchievementId = AchievementId(303);
    pub const MASTER_OF_PUPPETS: AchievementId = AchievementId(304);
    pub const ORCHESTRATORS_APPRENTICE: AchievementId = AchievementId(310);
    pub const NO_STRINGS_ATTACHED: AchievementId = AchievementId(311);
    pub const PUPPET_MASTER: AchievementId = AchievementId(312);
    pub const MASTER_OF_MANIPULATION: AchievementId = AchievementId(313);
    pub const THE_GRAND_CONDUCTOR: AchievementId = AchievementId(314);
    pub const MAESTRO_OF_STRINGS: AchievementId = AchievementId(315);
    pub const WILLING_PUPPET: AchievementId = AchievementId(320);
    pub const AT_YOUR_COMMAND: AchievementId = AchievementId(321);
    pub const YOUR_MARIONETTE: AchievementId = AchievementId(322);
    pub const THE_INSTRUMENT: AchievementId = AchievementId(323);
    pub const DEVOTED_DOLL: AchievementId = AchievementId(324);
    pub const THE_PERFECT_DOLL: AchievementId = AchievementId(325);
    pub const ASHAMED: AchievementId = AchievementId(330);
    pub const AN_OBEDIENT_PET: AchievementId = AchievementId(331);
    pub const HOUSE_SERVANT: AchievementId = AchievementId(332);

    // Toybox
    pub const MY_PLEASANTRIES_FOR_ALL: AchievementId = AchievementId(400);
    pub const DEVIOUS_COMPOSER: AchievementId = AchievementId(401);
    pub const TASTE_OF_TEMPTATION: AchievementId = AchievementId(402);
    pub const SEEKER_OF_SENSATIONS: AchievementId = AchievementId(403);
    pub const CRAVING_PLEASURE: AchievementId = AchievementId(404);
    pub const GOOD_VIBES: AchievementId = AchievementId(405);
    pub const DELIGHTFUL_PLEASURES: AchievementId = AchievementId(406);
    pub const PATTERN_LOVER: AchievementId = AchievementId(407);
    pub const SENSUAL_CONNOISSEUR: AchievementId = AchievementId(408);
    pub const PASSIONATE_ADMIRER: AchievementId = AchievementId(409);
    pub const A_LITTLE_TEASE: AchievementId = AchievementId(410);
    pub const SHORT_BUT_SWEET: AchievementId = AchievementId(411);
    pub const TEMPTING_RYTHMS: AchievementId = AchievementId(412);
    pub const MY_BUILDING_DESIRE: AchievementId = AchievementId(413);
    pub const WITH_WAVES_OF_SENSATION: AchievementId = AchievementId(414);
    pub const WITH_HEIGHTENED_SENSATIONS: AchievementId = AchievementId(415);
    pub const MUSICAL_MOANER: AchievementId = AchievementId(416);
    pub const STIMULATING_EXPERIENCES: AchievementId = AchievementId(417);
    pub const ENDURANCE_KING: AchievementId = AchievementId(418);
    pub const ENDURANCE_QUEEN: AchievementId = AchievementId(419);
    pub const HORNY_MORNINGS: AchievementId = AchievementId(420);
    pub const MOTIVATION_FOR_RESTORATION: AchievementId = AchievementId(421);
    pub const COLLECTOR_OF_SINFUL_TREASURES: AchievementId = AchievementId(422);
    pub const SUBTLE_REMINDERS: AchievementId = AchievementId(430);
    pub const LOST_IN_THE_MOMENT: AchievementId = AchievementId(431);
    pub const TRIGGER_HAPPY: AchievementId = AchievementId(432);

    // Hardcore
    pub const ALL_THE_COLLARS_OF_THE_RAINBOW: AchievementId = AchievementId(500);
    pub const FORCED_FOLLOW: AchievementId = AchievementId(501);
    pub const FORCED_WALKIES: AchievementId = AchievementId(502);
    pub const TIME_FOR_WALKIES: AchievementId = AchievementId(503);
    pub const GETTING_STEPS_IN: AchievementId = AchievementId(504);
    pub const WALKIES_LOVER: AchievementId = AchievementId(505);
    pub const WALK_OF_SHAME: AchievementId = AchievementId(506);
    pub const LIVING_FURNITURE: AchievementId = AchievementId(507);
    pub const OF_DOMESTIC_DISCIPLINE: AchievementId = AchievementId(508);
    pub const HOMEBOUND_SUBMISSION: AchievementId = AchievementId(509);
    pub const PERFECT_HOUSE_PET: AchievementId = AchievementId(510);
    pub const BLIND_LEADING_THE_BLIND: AchievementId = AchievementId(511);
    pub const WHO_NEEDS_TO_SEE: AchievementId = AchievementId(512);

    // Shock collars
    pub const INDULGING_SPARKS: AchievementId = AchievementId(600);
    pub const SHOCKING_TEMPTATIONS: AchievementId = AchievementId(601);
    pub const THE_CRAZE_OF_SHOCKIES: AchievementId = AchievementId(602);
    pub const WICKED_THUNDER: AchievementId = AchievementId(603);
    pub const ELECTRIFYING_PLEASURE: AchievementId = AchievementId(610);
    pub const SHOCKING_EXPERIENCE: AchievementId = AchievementId(611);
    pub const WIRED_FOR_OBEDIENCE: AchievementId = AchievementId(612);
    pub const SHOCK_ADDICTION: AchievementId = AchievementId(613);

    // Duties
    pub const KINKY_EXPLORER: AchievementId = AchievementId(700);
    pub const SILENT_BUT_DEADLY: AchievementId = AchievementId(701);
    pub const U_CAN_TIE_THIS: AchievementId = AchievementId(702);
    pub const HEAL_SLUT: AchievementId = AchievementId(703);
    pub const TRIAL_OF_FOCUS: AchievementId = AchievementId(704);
    pub const TRIAL_OF_DEXTERITY: AchievementId = AchievementId(705);
    pub const TRIAL_OF_THE_BLIND: AchievementId = AchievementId(706);
    pub const MY_KINK_RUNS_DEEP: AchievementId = AchievementId(710);
    pub const MY_KINKS_RUN_DEEPER: AchievementId = AchievementId(711);
    pub const BONDAGE_PALACE: AchievementId = AchievementId(712);
    pub const HORNY_ON_HIGH: AchievementId = AchievementId(713);
    pub const EUREKA_WHORETHOS: AchievementId = AchievementId(714);

    // PvP
    pub const ESCAPED_PATIENT: AchievementId = AchievementId(800);
    pub const BOUND_TO_KILL: AchievementId = AchievementId(801);
    pub const THE_SHACKLED_SLAYER: AchievementId = AchievementId(802);
    pub const DANGEROUS_CONVICT: AchievementId = AchievementId(803);
    pub const CHAINS_CANT_HOLD_ME: AchievementId = AchievementId(804);

    // Social
    pub const KINKY_NOVICE: AchievementId = AchievementId(900);
    pub const THE_COLLECTOR: AchievementId = AchievementId(901);
    pub const BONDAGE_CLUB: AchievementId = AchievementId(902);
    pub const HUMILIATION: AchievementId = AchievementId(903);
    pub const KINKY_TEACHER: AchievementId = AchievementId(904);
    pub const KINKY_PROFESSOR: AchievementId = AchievementId(905);
    pub const KINKY_MENTOR: AchievementId = AchievementId(906);

    // Chat and emotes
    pub const HELPLESS_DAMSEL: AchievementId = AchievementId(1000);
    pub const OF_VOICELESS_PLEAS: AchievementId = AchievementId(1001);
    pub const DEFIANCE_IN_SILENCE: AchievementId = AchievementId(1002);
    pub const MUFFLED_RESILIENCE: AchievementId = AchievementId(1003);
    pub const TRAINED_IN_SUB_SPEECH: AchievementId = AchievementId(1004);
    pub const PUBLIC_SPEAKER: AchievementId = AchievementId(1005);
    pub const FROM_CRIES_OF_HUMILITY: AchievementId = AchievementId(1006);
    pub const WHAT_A_VIEW: AchievementId = AchievementId(1010);
    pub const VULNERABLE_VIBRATIONS: AchievementId = AchievementId(1011);
    pub const PROLIFIC_PETTER: AchievementId = AchievementId(1012);
    pub const I_CANT_BELIEVE_YOUVE_DONE_THIS: AchievementId = AchievementId(1013);
    pub const WITH_A_KISS_GOODBYE: AchievementId = AchievementId(1014);
    pub const QUIET_NOW_DEAR: AchievementId = AchievementId(1015);
    pub const SILENCE_OF_SHAME: AchievementId = AchievementId(1016);

    // Misc
    pub const TEMPTING_FATES_TREASURE: AchievementId = AchievementId(1100);
    pub const BAD_END_SEEKER: AchievementId = AchievementId(1101);
    pub const EVER_CURSED: AchievementId = AchievementId(1102);
    pub const ESCAPING_IS_NOT_EASY: AchievementId = AchievementId(1103);

    /// Gag wear timers, keyed `<layer>_<gag>`
    pub const GAG_DURATIONS: &[AchievementId] = &[
        WHISPERS_TO_WHIMPERS,
        OF_MUFFLED_MOANS,
        SILENT_STRUGGLER,
        QUIETED_CAPTIVE,
        MESSY_DROOLER,
        DROOLING_DIVA,
        EMBRACE_OF_SILENCE,
        SUBJUGATION_TO_SILENCE,
        SPEECH_SILVER_SILENCE_GOLDEN,
        THE_KINKY_LEGEND,
    ];

    /// Gags applied by someone else
    pub const GAGS_RECEIVED: &[AchievementId] = &[
        SILENCED_SLUT,
        IN_DEEP_SILENCE,
        SILENT_OBSESSIONS,
        GOLDEN_SILENCE,
        A_KINK_FOR_DROOL,
        THE_PERFECT_GAG_SLUT,
    ];

    /// Gags applied to a pair
    pub const GAGS_GIVEN: &[AchievementId] = &[
        SILENCE_SLUT,
        WATCH_YOUR_TONGUE,
        TONGUE_TAMER,
        KINKY_LIBRARIAN,
        ORCHESTRATOR_OF_SILENCE,
    ];

    /// Own restraint sets locked, keyed by set id
    pub const SELF_RESTRAINT_DURATIONS: &[AchievementId] = &[
        FIRST_TIME_BONDAGE,
        AMATEUR_BONDAGE,
        COMFORT_RESTRAINT,
        YOUR_BONDAGE_MAID,
        YOUR_RUBBER_MAID,
        TRAINED_BONDAGE_SLAVE,
        YOUR_RUBBER_SLUT,
        A_TRUE_BONDAGE_SLAVE,
    ];

    /// Restraint sets we locked onto a pair, keyed by set id, owned by the pair
    pub const PAIR_RESTRAINT_DURATIONS: &[AchievementId] = &[
        RIGGERS_FIRST_SESSION,
        MY_LITTLE_PLAYTHING,
        SUITS_YOU_BITCH,
        TIES_THAT_BIND,
        SLAVE_TRAINER,
        CEREMONY_OF_ETERNAL_BONDAGE,
    ];

    pub const DYED_SETS: &[AchievementId] = &[TO_DYE_FOR, DYE_ANOTHER_DAY, DYE_HARD];

    /// Pattern playback timers, keyed by pattern id
    pub const PATTERN_DURATIONS: &[AchievementId] = &[
        A_LITTLE_TEASE,
        SHORT_BUT_SWEET,
        TEMPTING_RYTHMS,
        MY_BUILDING_DESIRE,
        WITH_WAVES_OF_SENSATION,
        WITH_HEIGHTENED_SENSATIONS,
        MUSICAL_MOANER,
        STIMULATING_EXPERIENCES,
        ENDURANCE_KING,
        ENDURANCE_QUEEN,
    ];

    pub const PATTERNS_PUBLISHED: &[AchievementId] = &[MY_PLEASANTRIES_FOR_ALL, DEVIOUS_COMPOSER];

    pub const PATTERNS_DOWNLOADED: &[AchievementId] =
        &[TASTE_OF_TEMPTATION, SEEKER_OF_SENSATIONS, CRAVING_PLEASURE];

    pub const PATTERNS_LIKED: &[AchievementId] = &[
        GOOD_VIBES,
        DELIGHTFUL_PLEASURES,
        PATTERN_LOVER,
        SENSUAL_CONNOISSEUR,
        PASSIONATE_ADMIRER,
    ];

    pub const TRIGGERS_FIRED: &[AchievementId] =
        &[SUBTLE_REMINDERS, LOST_IN_THE_MOMENT, TRIGGER_HAPPY];

    pub const ORDERS_SENT: &[AchievementId] = &[
        ORCHESTRATORS_APPRENTICE,
        NO_STRINGS_ATTACHED,
        PUPPET_MASTER,
        MASTER_OF_MANIPULATION,
        THE_GRAND_CONDUCTOR,
        MAESTRO_OF_STRINGS,
    ];

    pub const ORDERS_RECEIVED: &[AchievementId] = &[
        WILLING_PUPPET,
        AT_YOUR_COMMAND,
        YOUR_MARIONETTE,
        THE_INSTRUMENT,
        DEVOTED_DOLL,
        THE_PERFECT_DOLL,
    ];

    /// Follow timers on pairs, keyed and owned by the pair
    pub const FORCED_FOLLOW_DURATIONS: &[AchievementId] = &[FORCED_FOLLOW, FORCED_WALKIES];

    pub const WALKIES: &[AchievementId] = &[TIME_FOR_WALKIES, GETTING_STEPS_IN, WALKIES_LOVER];

    pub const FORCED_STAY: &[AchievementId] =
        &[OF_DOMESTIC_DISCIPLINE, HOMEBOUND_SUBMISSION, PERFECT_HOUSE_PET];

    pub const SHOCKS_SENT: &[AchievementId] = &[
        INDULGING_SPARKS,
        SHOCKING_TEMPTATIONS,
        THE_CRAZE_OF_SHOCKIES,
        WICKED_THUNDER,
    ];

    pub const SHOCKS_RECEIVED: &[AchievementId] = &[
        ELECTRIFYING_PLEASURE,
        SHOCKING_EXPERIENCE,
        WIRED_FOR_OBEDIENCE,
        SHOCK_ADDICTION,
    ];

    /// Full-party high level trials; reset whenever a set comes off
    pub const TRIALS: &[AchievementId] = &[TRIAL_OF_FOCUS, TRIAL_OF_DEXTERITY, TRIAL_OF_THE_BLIND];

    /// Duty tasks abandoned on a zone switch
    pub const DUTY_TASKS: &[AchievementId] = &[U_CAN_TIE_THIS, SILENT_BUT_DEADLY, HEAL_SLUT];

    pub const PVP_KILLS: &[AchievementId] = &[
        ESCAPED_PATIENT,
        BOUND_TO_KILL,
        THE_SHACKLED_SLAYER,
        DANGEROUS_CONVICT,
        CHAINS_CANT_HOLD_ME,
    ];

    pub const SAY_MESSAGES: &[AchievementId] = &[
        OF_VOICELESS_PLEAS,
        DEFIANCE_IN_SILENCE,
        MUFFLED_RESILIENCE,
        TRAINED_IN_SUB_SPEECH,
    ];

    pub const COMMENDATIONS: &[AchievementId] = &[KINKY_TEACHER, KINKY_PROFESSOR, KINKY_MENTOR];

    pub const CURSED_LOOT: &[AchievementId] = &[BAD_END_SEEKER, EVER_CURSED];
}

/// Get all achievement definitions, in authoring order
#[rustfmt::skip]
pub fn all_achievements() -> Vec<Achievement> {
    use ids::*;

    vec![
        // Gags
        Achievement::progress(SELF_APPLIED, "Self-Applied", "Apply a gag to yourself", 1),
        Achievement::progress(SILENCED_SLUT, "Silenced Slut", "Get gagged by a pair", 1),
        Achievement::progress(IN_DEEP_SILENCE, "In Deep Silence", "Get gagged by pairs 10 times", 10),
        Achievement::progress(SILENT_OBSESSIONS, "Silent Obsessions", "Get gagged by pairs 100 times", 100),
        Achievement::progress(GOLDEN_SILENCE, "Golden Silence", "Get gagged by pairs 500 times", 500),
        Achievement::progress(A_KINK_FOR_DROOL, "A Kink for Drool", "Get gagged by pairs 1000 times", 1000),
        Achievement::progress(THE_PERFECT_GAG_SLUT, "The Perfect Gag Slut", "Get gagged by pairs 5000 times", 5000),
        Achievement::timed_progress(
            A_TRUE_GAG_SLUT,
            "A True Gag Slut",
            "Get gagged by pairs 10 times, each within an hour of the last",
            10,
            secs(HOUR),
        ),
        Achievement::duration(WHISPERS_TO_WHIMPERS, "Whispers to Whimpers", "Keep a gag on for 5 minutes", secs(5 * MINUTE)),
        Achievement::duration(OF_MUFFLED_MOANS, "Of Muffled Moans", "Keep a gag on for 10 minutes", secs(10 * MINUTE)),
        Achievement::duration(SILENT_STRUGGLER, "Silent Struggler", "Keep a gag on for 30 minutes", secs(30 * MINUTE)),
        Achievement::duration(QUIETED_CAPTIVE, "Quieted Captive", "Keep a gag on for 1 hour", secs(HOUR)),
        Achievement::duration(MESSY_DROOLER, "Messy Drooler", "Keep a gag on for 6 hours", secs(6 * HOUR)),
        Achievement::duration(DROOLING_DIVA, "Drooling Diva", "Keep a gag on for 12 hours", secs(12 * HOUR)),
        Achievement::duration(EMBRACE_OF_SILENCE, "Embrace of Silence", "Keep a gag on for 1 day", secs(DAY)),
        Achievement::duration(SUBJUGATION_TO_SILENCE, "Subjugation to Silence", "Keep a gag on for 4 days", secs(4 * DAY)),
        Achievement::duration(
            SPEECH_SILVER_SILENCE_GOLDEN,
            "Speech is Silver, Silence is Golden",
            "Keep a gag on for 1 week",
            secs(7 * DAY),
        ),
        Achievement::duration(THE_KINKY_LEGEND, "The Kinky Legend", "Keep a gag on for 2 weeks", secs(14 * DAY)),
        Achievement::threshold(SHUSHTAINABLE_RESOURCE, "Shushtainable Resource", "Wear a gag on all three layers", 3),
        Achievement::progress(SILENCE_SLUT, "Silence Slut", "Gag a pair", 1),
        Achievement::progress(WATCH_YOUR_TONGUE, "Watch Your Tongue", "Gag pairs 10 times", 10),
        Achievement::progress(TONGUE_TAMER, "Tongue Tamer", "Gag pairs 100 times", 100),
        Achievement::progress(KINKY_LIBRARIAN, "Kinky Librarian", "Gag pairs 1000 times", 1000),
        Achievement::progress(ORCHESTRATOR_OF_SILENCE, "Orchestrator of Silence", "Gag pairs 2500 times", 2500),
        Achievement::conditional(EXPERIMENTALIST, "Experimentalist", "Be gagged, restrained and vibrated at once"),
        Achievement::conditional(GAGGED_PLEASURE, "Gagged Pleasure", "Have a vibrator running while gagged"),
        // Restraints
        Achievement::progress(FIRST_TIEMERS, "First Tiemers", "Enable a restraint set", 1),
        Achievement::progress(SELF_BONDAGE_ENTHUSIAST, "Self-Bondage Enthusiast", "Enable your own sets 100 times", 100),
        Achievement::progress(DID_ENTHUSIAST, "DiD Enthusiast", "Enable sets on pairs 10 times", 10),
        Achievement::conditional_progress(AUCTIONED_OFF, "Auctioned Off", "Be restrained by a pair and passed to another", 1),
        Achievement::time_limit(BONDODGE, "Bondodge", "Escape a set within 2 seconds of a pair applying it", secs(2)),
        Achievement::threshold(EXTREME_BONDAGE_ENJOYER, "Extreme Bondage Enjoyer", "Be put into a set covering 10 slots", 10),
        Achievement::timed_progress(
            BONDAGE_BUNNY,
            "Bondage Bunny",
            "Be restrained by pairs 5 times, each within two hours of the last",
            5,
            secs(2 * HOUR),
        ),
        Achievement::progress(CUFFED_19, "Cuffed-19", "Have pairs put your hands in cuffs 19 times", 19),
        Achievement::progress(THE_RESCUER, "The Rescuer", "Unlock 100 sets from pairs", 100),
        Achievement::progress(TO_DYE_FOR, "To Dye For", "Dye 5 restraint sets", 5),
        Achievement::progress(DYE_ANOTHER_DAY, "Dye Another Day", "Dye 10 restraint sets", 10),
        Achievement::progress(DYE_HARD, "Dye Hard", "Dye 15 restraint sets", 15),
        Achievement::duration(FIRST_TIME_BONDAGE, "First Time Bondage", "Stay locked in a set for 30 minutes", secs(30 * MINUTE)),
        Achievement::duration(AMATEUR_BONDAGE, "Amateur Bondage", "Stay locked in a set for 1 hour", secs(HOUR)),
        Achievement::duration(COMFORT_RESTRAINT, "Comfort Restraint", "Stay locked in a set for 6 hours", secs(6 * HOUR)),
        Achievement::duration(YOUR_BONDAGE_MAID, "Your Bondage Maid", "Stay locked in a set for 1 day", secs(DAY)),
        Achievement::duration(YOUR_RUBBER_MAID, "Your Rubber Maid", "Stay locked in a set for 4 days", secs(4 * DAY)),
        Achievement::duration(TRAINED_BONDAGE_SLAVE, "Trained Bondage Slave", "Stay locked in a set for 1 week", secs(7 * DAY)),
        Achievement::duration(YOUR_RUBBER_SLUT, "Your Rubber Slut", "Stay locked in a set for 2 weeks", secs(14 * DAY)),
        Achievement::duration(A_TRUE_BONDAGE_SLAVE, "A True Bondage Slave", "Stay locked in a set for 4 weeks", secs(28 * DAY)),
        Achievement::duration(RIGGERS_FIRST_SESSION, "Rigger's First Session", "Keep a pair locked in a set for 30 minutes", secs(30 * MINUTE)),
        Achievement::duration(MY_LITTLE_PLAYTHING, "My Little Plaything", "Keep a pair locked in a set for 12 hours", secs(12 * HOUR)),
        Achievement::duration(SUITS_YOU_BITCH, "Suits You", "Keep a pair locked in a set for 1 day", secs(DAY)),
        Achievement::duration(TIES_THAT_BIND, "Ties That Bind", "Keep a pair locked in a set for 2 days", secs(2 * DAY)),
        Achievement::duration(SLAVE_TRAINER, "Slave Trainer", "Keep a pair locked in a set for 1 week", secs(7 * DAY)),
        Achievement::duration(
            CEREMONY_OF_ETERNAL_BONDAGE,
            "Ceremony of Eternal Bondage",
            "Keep a pair locked in a set for 30 days",
            secs(30 * DAY),
        ),
        // Puppeteer
        Achievement::progress(COMPLETE_DEVOTION, "Complete Devotion", "Grant a pair full puppeteer access", 1),
        Achievement::progress(CONTROL_MY_BODY, "Control My Body", "Grant a pair emote access", 1),
        Achievement::progress(KISS_MY_HEELS, "Kiss My Heels", "Order pairs to grovel 50 times", 50),
        Achievement::progress(A_MAESTRO_OF_MY_PROPERTY, "A Maestro of My Property", "Order pairs to dance 10 times", 10),
        Achievement::timed_progress(
            MASTER_OF_PUPPETS,
            "Master of Puppets",
            "Give 10 orders, each within an hour of the last",
            10,
            secs(HOUR),
        ),
        Achievement::progress(ORCHESTRATORS_APPRENTICE, "Orchestrator's Apprentice", "Give 10 orders", 10),
        Achievement::progress(NO_STRINGS_ATTACHED, "No Strings Attached", "Give 25 orders", 25),
        Achievement::progress(PUPPET_MASTER, "Puppet Master", "Give 50 orders", 50),
        Achievement::progress(MASTER_OF_MANIPULATION, "Master of Manipulation", "Give 100 orders", 100),
        Achievement::progress(THE_GRAND_CONDUCTOR, "The Grand Conductor", "Give 250 orders", 250),
        Achievement::progress(MAESTRO_OF_STRINGS, "Maestro of Strings", "Give 500 orders", 500),
        Achievement::progress(WILLING_PUPPET, "Willing Puppet", "Obey 10 orders", 10),
        Achievement::progress(AT_YOUR_COMMAND, "At Your Command", "Obey 25 orders", 25),
        Achievement::progress(YOUR_MARIONETTE, "Your Marionette", "Obey 50 orders", 50),
        Achievement::progress(THE_INSTRUMENT, "The Instrument", "Obey 100 orders", 100),
        Achievement::progress(DEVOTED_DOLL, "Devoted Doll", "Obey 500 orders", 500),
        Achievement::progress(THE_PERFECT_DOLL, "The Perfect Doll", "Obey 10000 orders", 10000),
        Achievement::progress(ASHAMED, "Ashamed", "Be ordered to sulk 5 times", 5),
        Achievement::progress(AN_OBEDIENT_PET, "An Obedient Pet", "Be ordered to sit 10 times", 10),
        Achievement::progress(HOUSE_SERVANT, "House Servant", "Be ordered to sweep 10 times", 10),
        // Toybox
        Achievement::progress(MY_PLEASANTRIES_FOR_ALL, "My Pleasantries for All", "Publish a pattern", 1),
        Achievement::progress(DEVIOUS_COMPOSER, "Devious Composer", "Publish 10 patterns", 10),
        Achievement::progress(TASTE_OF_TEMPTATION, "Taste of Temptation", "Download a pattern", 1),
        Achievement::progress(SEEKER_OF_SENSATIONS, "Seeker of Sensations", "Download 10 patterns", 10),
        Achievement::progress(CRAVING_PLEASURE, "Craving Pleasure", "Download 30 patterns", 30),
        Achievement::progress(GOOD_VIBES, "Good Vibes", "Like a pattern", 1),
        Achievement::progress(DELIGHTFUL_PLEASURES, "Delightful Pleasures", "Like 10 patterns", 10),
        Achievement::progress(PATTERN_LOVER, "Pattern Lover", "Like 25 patterns", 25),
        Achievement::progress(SENSUAL_CONNOISSEUR, "Sensual Connoisseur", "Like 50 patterns", 50),
        Achievement::progress(PASSIONATE_ADMIRER, "Passionate Admirer", "Like 100 patterns", 100),
        Achievement::duration(A_LITTLE_TEASE, "A Little Tease", "Run patterns for 20 seconds", secs(20)),
        Achievement::duration(SHORT_BUT_SWEET, "Short but Sweet", "Run patterns for 1 minute", secs(MINUTE)),
        Achievement::duration(TEMPTING_RYTHMS, "Tempting Rhythms", "Run patterns for 2 minutes", secs(2 * MINUTE)),
        Achievement::duration(MY_BUILDING_DESIRE, "My Building Desire", "Run patterns for 5 minutes", secs(5 * MINUTE)),
        Achievement::duration(WITH_WAVES_OF_SENSATION, "With Waves of Sensation", "Run patterns for 10 minutes", secs(10 * MINUTE)),
        Achievement::duration(
            WITH_HEIGHTENED_SENSATIONS,
            "With Heightened Sensations",
            "Run patterns for 30 minutes",
            secs(30 * MINUTE),
        ),
        Achievement::duration(MUSICAL_MOANER, "Musical Moaner", "Run patterns for 1 hour", secs(HOUR)),
        Achievement::duration(STIMULATING_EXPERIENCES, "Stimulating Experiences", "Run patterns for 2 hours", secs(2 * HOUR)),
        Achievement::duration(ENDURANCE_KING, "Endurance King", "Run patterns for 6 hours", secs(6 * HOUR)),
        Achievement::duration(ENDURANCE_QUEEN, "Endurance Queen", "Run patterns for 12 hours", secs(12 * HOUR)),
        Achievement::progress(HORNY_MORNINGS, "Horny Mornings", "Wake up to an alarm pattern", 1),
        Achievement::time_required(
            MOTIVATION_FOR_RESTORATION,
            "Motivation for Restoration",
            "Keep a pattern running in the Diadem for 30 minutes",
            secs(30 * MINUTE),
        ),
        Achievement::conditional(COLLECTOR_OF_SINFUL_TREASURES, "Collector of Sinful Treasures", "Connect a device"),
        Achievement::progress(SUBTLE_REMINDERS, "Subtle Reminders", "Fire 10 triggers", 10),
        Achievement::progress(LOST_IN_THE_MOMENT, "Lost in the Moment", "Fire 100 triggers", 100),
        Achievement::progress(TRIGGER_HAPPY, "Trigger Happy", "Fire 1000 triggers", 1000),
        // Hardcore
        Achievement::progress(ALL_THE_COLLARS_OF_THE_RAINBOW, "All the Collars of the Rainbow", "Force 20 pairs to follow you", 20),
        Achievement::duration(FORCED_FOLLOW, "Forced Follow", "Keep pairs following you for 1 minute", secs(MINUTE)),
        Achievement::duration(FORCED_WALKIES, "Forced Walkies", "Keep pairs following you for 5 minutes", secs(5 * MINUTE)),
        Achievement::time_required(TIME_FOR_WALKIES, "Time for Walkies", "Be forced to follow for 1 minute", secs(MINUTE)),
        Achievement::time_required(GETTING_STEPS_IN, "Getting Steps In", "Be forced to follow for 5 minutes", secs(5 * MINUTE)),
        Achievement::time_required(WALKIES_LOVER, "Walkies Lover", "Be forced to follow for 10 minutes", secs(10 * MINUTE)),
        Achievement::time_required(
            WALK_OF_SHAME,
            "Walk of Shame",
            "Be bound, blindfolded and led through a city for 5 minutes",
            secs(5 * MINUTE),
        ),
        Achievement::time_required(LIVING_FURNITURE, "Living Furniture", "Be forced to sit for 20 minutes", secs(20 * MINUTE)),
        Achievement::time_required(OF_DOMESTIC_DISCIPLINE, "Of Domestic Discipline", "Be forced to stay for 30 minutes", secs(30 * MINUTE)),
        Achievement::time_required(HOMEBOUND_SUBMISSION, "Homebound Submission", "Be forced to stay for 1 hour", secs(HOUR)),
        Achievement::time_required(PERFECT_HOUSE_PET, "Perfect House Pet", "Be forced to stay for 1 day", secs(DAY)),
        Achievement::conditional(BLIND_LEADING_THE_BLIND, "Blind Leading the Blind", "Be blindfolded while leading a blindfolded pair"),
        Achievement::time_required(WHO_NEEDS_TO_SEE, "Who Needs to See?", "Stay blindfolded for 3 hours", secs(3 * HOUR)),
        // Shock collars
        Achievement::progress(INDULGING_SPARKS, "Indulging Sparks", "Send 10 shocks", 10),
        Achievement::progress(SHOCKING_TEMPTATIONS, "Shocking Temptations", "Send 100 shocks", 100),
        Achievement::progress(THE_CRAZE_OF_SHOCKIES, "The Craze of Shockies", "Send 1000 shocks", 1000),
        Achievement::progress(WICKED_THUNDER, "Wicked Thunder", "Send 10000 shocks", 10000),
        Achievement::progress(ELECTRIFYING_PLEASURE, "Electrifying Pleasure", "Receive 10 shocks", 10),
        Achievement::progress(SHOCKING_EXPERIENCE, "Shocking Experience", "Receive 100 shocks", 100),
        Achievement::progress(WIRED_FOR_OBEDIENCE, "Wired for Obedience", "Receive 1000 shocks", 1000),
        Achievement::progress(SHOCK_ADDICTION, "Shock Addiction", "Receive 10000 shocks", 10000),
        // Duties
        Achievement::conditional(KINKY_EXPLORER, "Kinky Explorer", "Enter a duty while restrained"),
        Achievement::conditional_progress(SILENT_BUT_DEADLY, "Silent but Deadly", "Finish 10 duties while gagged", 10),
        Achievement::conditional_progress(U_CAN_TIE_THIS, "U Can't Tie This", "Finish a duty while forced to follow", 1),
        Achievement::conditional_progress(HEAL_SLUT, "Heal Slut", "Finish a duty as a healer while restrained", 1),
        Achievement::conditional_progress(TRIAL_OF_FOCUS, "Trial of Focus", "Clear a full-party trial while vibrated", 1),
        Achievement::conditional_progress(TRIAL_OF_DEXTERITY, "Trial of Dexterity", "Clear a full-party trial with bound hands", 1),
        Achievement::conditional_progress(TRIAL_OF_THE_BLIND, "Trial of the Blind", "Clear a full-party trial blindfolded", 1),
        Achievement::conditional_progress(MY_KINK_RUNS_DEEP, "My Kink Runs Deep", "Reach the bottom of a deep dungeon restrained", 1),
        Achievement::conditional_progress(MY_KINKS_RUN_DEEPER, "My Kinks Run Deeper", "Solo the bottom of a deep dungeon restrained", 1),
        Achievement::conditional_progress(BONDAGE_PALACE, "Bondage Palace", "Clear a Palace of the Dead boss set restrained", 1),
        Achievement::conditional_progress(HORNY_ON_HIGH, "Horny on High", "Clear a Heaven-on-High boss set restrained", 1),
        Achievement::conditional_progress(EUREKA_WHORETHOS, "Eureka Whorethos", "Clear a Eureka Orthos boss set restrained", 1),
        // PvP
        Achievement::conditional_progress(ESCAPED_PATIENT, "Escaped Patient", "Score 10 kills while restrained", 10),
        Achievement::conditional_progress(BOUND_TO_KILL, "Bound to Kill", "Score 25 kills while restrained", 25),
        Achievement::conditional_progress(THE_SHACKLED_SLAYER, "The Shackled Slayer", "Score 50 kills while restrained", 50),
        Achievement::conditional_progress(DANGEROUS_CONVICT, "Dangerous Convict", "Score 100 kills while restrained", 100),
        Achievement::conditional_progress(CHAINS_CANT_HOLD_ME, "Chains Can't Hold Me", "Score 500 kills while restrained", 500),
        // Social
        Achievement::conditional(KINKY_NOVICE, "Kinky Novice", "Add your first pair"),
        Achievement::progress(THE_COLLECTOR, "The Collector", "Add 20 pairs", 20),
        Achievement::threshold(BONDAGE_CLUB, "Bondage Club", "Have 8 pairs visible at once", 8),
        Achievement::conditional_threshold(HUMILIATION, "Humiliation", "Be seen gagged by 5 visible pairs", 5),
        Achievement::progress(KINKY_TEACHER, "Kinky Teacher", "Receive 10 commendations while restrained", 10),
        Achievement::progress(KINKY_PROFESSOR, "Kinky Professor", "Receive 50 commendations while restrained", 50),
        Achievement::progress(KINKY_MENTOR, "Kinky Mentor", "Receive 100 commendations while restrained", 100),
        // Chat and emotes
        Achievement::conditional(HELPLESS_DAMSEL, "Helpless Damsel", "Speak while gagged, bound and forced to follow"),
        Achievement::progress(OF_VOICELESS_PLEAS, "Of Voiceless Pleas", "Send a garbled message in say", 1),
        Achievement::progress(DEFIANCE_IN_SILENCE, "Defiance in Silence", "Send 500 garbled messages in say", 500),
        Achievement::progress(MUFFLED_RESILIENCE, "Muffled Resilience", "Send 1000 garbled messages in say", 1000),
        Achievement::progress(TRAINED_IN_SUB_SPEECH, "Trained in Sub Speech", "Send 2500 garbled messages in say", 2500),
        Achievement::progress(PUBLIC_SPEAKER, "Public Speaker", "Yell 100 garbled messages", 100),
        Achievement::progress(FROM_CRIES_OF_HUMILITY, "From Cries of Humility", "Shout 25 garbled messages", 25),
        Achievement::conditional(WHAT_A_VIEW, "What a View", "Use /lookout while blindfolded"),
        Achievement::conditional(VULNERABLE_VIBRATIONS, "Vulnerable Vibrations", "Use /stagger while vibrated"),
        Achievement::conditional(PROLIFIC_PETTER, "Prolific Petter", "Pet yourself while restrained"),
        Achievement::conditional(I_CANT_BELIEVE_YOUVE_DONE_THIS, "I Can't Believe You've Done This", "Get slapped while bound"),
        Achievement::conditional(WITH_A_KISS_GOODBYE, "With a Kiss Goodbye", "Dote on a pair while gagged"),
        Achievement::conditional(QUIET_NOW_DEAR, "Quiet Now, Dear", "Shush while gagged"),
        Achievement::conditional(SILENCE_OF_SHAME, "Silence of Shame", "Be shushed while gagged"),
        // Misc
        Achievement::progress(TEMPTING_FATES_TREASURE, "Tempting Fate's Treasure", "Find cursed loot", 1),
        Achievement::conditional_progress(BAD_END_SEEKER, "Bad End Seeker", "Find 25 cursed items", 25),
        Achievement::conditional_progress(EVER_CURSED, "Ever Cursed", "Find 100 cursed items", 100),
        Achievement::conditional(ESCAPING_IS_NOT_EASY, "Escaping is Not Easy", "Change job while restrained"),
    ]
}
