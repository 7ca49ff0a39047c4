//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` linkage.
//! - Print one dashboard line per fixture project.
//!
//! Logging is enabled only when `TASKBOARD_LOG_DIR` is set;
//! `TASKBOARD_LOG_LEVEL` overrides the build-mode default level.

use log::info;
use taskboard_core::{
    core_version, default_log_level, init_logging, now_epoch_ms, query, LogConfig, Store,
};

fn main() {
    if let Ok(log_dir) = std::env::var("TASKBOARD_LOG_DIR") {
        let level =
            std::env::var("TASKBOARD_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
        match LogConfig::new(&level, &log_dir).and_then(|config| init_logging(&config)) {
            Ok(()) => info!("event=cli_start module=cli status=ok"),
            Err(err) => eprintln!("taskboard logging disabled: {err}"),
        }
    }

    let now = now_epoch_ms();
    let store = Store::seeded(now);

    println!("taskboard_core version={}", core_version());
    for summary in query::dashboard(store.snapshot(), now) {
        println!(
            "{} progress={}% todo={} in_progress={} completed={} upcoming={} members={}",
            summary.name,
            summary.progress,
            summary.tasks_by_status.todo,
            summary.tasks_by_status.in_progress,
            summary.tasks_by_status.completed,
            summary.upcoming,
            summary.member_count
        );
    }
}
