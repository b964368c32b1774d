//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` wiring end to
//!   end: substrate -> repositories -> service.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;

use taskdeck_core::db::open_db_in_memory;
use taskdeck_core::{CategoryRepository, SqliteStore, TaskRepository, TaskService};

fn main() {
    if let Err(err) = run() {
        eprintln!("taskdeck smoke failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    let conn = open_db_in_memory()?;
    let store = SqliteStore::try_new(&conn)?;
    let service = TaskService::new(
        TaskRepository::new(&store),
        CategoryRepository::try_new(&store)?,
    );

    let categories = service.get_all_categories()?;
    let stats = service.get_statistics()?;
    println!("taskdeck_core categories={}", categories.len());
    println!(
        "taskdeck_core tasks total={} completed={} pending={}",
        stats.total, stats.completed, stats.pending
    );

    Ok(())
}
