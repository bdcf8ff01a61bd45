//! Basic usage example for the achievement engine

use achievements::{AchievementEngine, AchievementId, ManualClock, Timestamp, ids};
use std::time::Duration;

fn main() {
    println!("=== Achievement Engine Demo ===\n");

    let clock = ManualClock::new(Timestamp::from_secs(0));
    let mut engine = match AchievementEngine::with_catalog(clock.clone()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("catalog rejected: {}", e);
            return;
        }
    };
    engine.set_notifier(|a: &achievements::Achievement| {
        println!("  ★ unlocked {}: {}", a.title, a.description);
    });

    println!("Total achievements: {}", engine.achievements().count());

    println!("\n--- Gag yourself ---");
    engine.increment_progress(ids::SELF_APPLIED, 1);
    for id in ids::GAG_DURATIONS {
        engine.start_tracking(*id, "0_Ball Gag", "me");
    }

    println!("\n--- Keep it on for twelve minutes, then take it off ---");
    clock.advance(Duration::from_secs(12 * 60));
    for id in ids::GAG_DURATIONS {
        engine.stop_tracking(*id, "0_Ball Gag", "me");
    }

    println!("\n--- A pair locks you in place for half an hour ---");
    for id in ids::FORCED_STAY {
        engine.start_task(*id);
    }
    clock.advance(Duration::from_secs(30 * 60));
    engine.tick();

    println!("\n--- Dodge a restraint within a second ---");
    engine.start_task(ids::BONDODGE);
    clock.advance(Duration::from_secs(1));
    engine.check_completion(ids::BONDODGE);

    println!("\n=== Final Statistics ===");
    let unlocked: Vec<AchievementId> = engine.drain_newly_unlocked();
    println!("Unlocked this session: {}", unlocked.len());
    println!("Completion: {:.1}%", engine.unlock_percentage() * 100.0);
}
