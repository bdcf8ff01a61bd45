use achievements::{SystemClock, ids};
use anyhow::{Context, Result};
use std::env;
use std::thread;
use std::time::Instant;
use unlock_engine::event_bus::{HardcoreSetting, PatternInteraction};
use unlock_engine::{UnlockConfig, UnlockEvent, UnlockService};

/// Ticks the demo runs before shutting down
const DEMO_TICKS: u32 = 5;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "unlock.json".to_string());
    let mut config = UnlockConfig::load(&config_path)
        .map_err(|e| anyhow::anyhow!(error::handle_error(&e)))
        .with_context(|| format!("Failed to load config from {}", config_path))?;
    if config.self_uid.is_empty() {
        config.self_uid = "U-local".to_string();
    }

    let mut service = UnlockService::from_config(&config, SystemClock)
        .map_err(|e| anyhow::anyhow!(error::handle_error(&e)))
        .context("Failed to start unlock service")?;
    log::info!(
        "Tracking {} achievements, {:.1}% unlocked",
        service.engine().achievements().count(),
        service.engine().unlock_percentage() * 100.0
    );

    let me = config.self_uid.clone();
    let pair = "U-demo-pair".to_string();
    let script = vec![
        UnlockEvent::PairAdded,
        UnlockEvent::GagStateChanged {
            layer: 0,
            gag: "Ball Gag".to_string(),
            applying: true,
            enactor: me.clone(),
        },
        UnlockEvent::VibratorToggled { on: true },
        UnlockEvent::PatternAction {
            interaction: PatternInteraction::Published,
            pattern_id: "demo-pattern".to_string(),
            was_alarm: false,
        },
        UnlockEvent::HardcoreAction {
            setting: HardcoreSetting::ForcedFollow,
            enabled: true,
            enactor: me.clone(),
            affected: pair.clone(),
        },
        UnlockEvent::ShockSent,
        UnlockEvent::EmoteExecuted {
            emote_id: 231,
            by_self: true,
            at_self: false,
        },
    ];

    // Producers live off the service thread
    let sender = service.sender();
    let producer = thread::spawn(move || {
        for event in script {
            if !sender.send(event) {
                break;
            }
        }
    });

    let tick_interval = config.tick_interval();
    for frame in 0..DEMO_TICKS {
        let frame_start = Instant::now();
        let handled = service.pump();
        let completed = service.tick();
        log::debug!(
            "Tick {}: handled {} events, tick completed {}",
            frame,
            handled,
            completed.len()
        );

        let unlocked = service.engine_mut().drain_newly_unlocked();
        for id in unlocked {
            if let Some(achievement) = service.engine().get(id) {
                println!("★ {} - {}", achievement.title, achievement.description);
            }
        }

        if let Some(remaining) = tick_interval.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
    producer
        .join()
        .map_err(|_| anyhow::anyhow!("event producer panicked"))?;
    log::info!(
        "Saw {} events; most frequent: {:?}",
        service.statistics().total_events(),
        service.statistics().most_frequent(3)
    );

    if service.engine().is_completed(ids::KINKY_NOVICE) {
        println!("Welcome to the club.");
    }

    let engine = service
        .shutdown()
        .map_err(|e| anyhow::anyhow!(error::handle_error(&e)))
        .context("Failed to write final achievement state")?;
    println!(
        "Completion: {:.1}% ({} of {})",
        engine.unlock_percentage() * 100.0,
        engine.unlocked_achievements().len(),
        engine.achievements().count()
    );
    Ok(())
}
