use bevy::prelude::*;

use bevy::window::WindowResolution;

use nanobot_swarm::game::GamePlugin;

use bevy::log::LogPlugin;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use std::fs;
use std::path::{Path, PathBuf};

const LOG_PREFIX: &str = "nanobot_swarm";
const LOGS_TO_KEEP: usize = 25;

fn setup_file_logging() -> Option<String> {
    let log_dir = PathBuf::from("logs");
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create logs directory: {}", e);
        return None;
    }

    cleanup_old_logs(&log_dir, LOGS_TO_KEEP);

    let now = chrono::Local::now();
    let log_filename = format!("{}_{}.log", LOG_PREFIX, now.format("%Y%m%d_%H%M%S"));
    let log_path_str = log_dir.join(&log_filename).to_string_lossy().to_string();

    // One file per run
    let file_appender = RollingFileAppender::new(Rotation::NEVER, &log_dir, &log_filename);

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::new("wgpu=error,bevy_render=info,bevy_ecs=info,nanobot_swarm=info")
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Some(log_path_str)
}

fn cleanup_old_logs(log_dir: &Path, keep_count: usize) {
    if let Ok(entries) = fs::read_dir(log_dir) {
        let mut log_files: Vec<_> = entries
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(|s| s.starts_with(LOG_PREFIX) && s.ends_with(".log"))
                    .unwrap_or(false)
            })
            .collect();

        // Oldest first
        log_files.sort_by_key(|e| e.metadata().ok().and_then(|m| m.modified().ok()));

        // Leave room for the file this run is about to create
        let keep = keep_count.saturating_sub(1);
        if log_files.len() > keep {
            for file in log_files.iter().take(log_files.len() - keep) {
                let _ = fs::remove_file(file.path());
            }
        }
    }
}

fn main() {
    match setup_file_logging() {
        Some(log_file) => println!("Nanobot Swarm - logging to {}", log_file),
        None => println!("Nanobot Swarm - file logging unavailable"),
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Nanobot Swarm".into(),
                resolution: WindowResolution::new(800, 700),
                resizable: false,
                ..default()
            }),
            ..default()
        }).build().disable::<LogPlugin>()) // Logging is installed above
        .add_plugins(GamePlugin)
        .run();
}
