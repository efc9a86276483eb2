//! Stage demo application
//!
//! Realizes a stage from a configuration file and walks it through a scripted
//! series of resize and fullscreen requests, logging what the platform
//! actually granted each time.
//!
//! ```text
//! stage_demo [config.toml|config.ron]
//! ```
//!
//! Without the `glfw` feature the stage runs on the simulated display, whose
//! limits come from the `[stage.display]` table.

use stage_window::config::ConfigError;
use stage_window::foundation::logging;
use stage_window::prelude::*;
use thiserror::Error;

/// Sizes the script asks for, in order
const SCRIPTED_SIZES: [(u32, u32); 4] = [(1024, 768), (4096, 4096), (800, 600), (800, 600)];

#[derive(Error, Debug)]
enum DemoError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Stage error: {0}")]
    Stage(#[from] StageWindowError),
}

fn load_config() -> Result<ApplicationConfig, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => Ok(ApplicationConfig::load_from_file(&path)?),
        None => Ok(ApplicationConfig::new("Stage Demo")),
    }
}

fn run(config: &ApplicationConfig) -> Result<(), DemoError> {
    let mut stage = Stage::from_config(&config.stage)?;
    log::info!("Using {} backend", stage.backend_name());

    if let Err(err) = stage.realize() {
        // Realization failures are recoverable; try the smallest sane mode once
        log::warn!("Realize failed ({}), retrying at 320x240", err);
        stage.set_size(320, 240);
        stage.realize()?;
    }
    stage.show()?;

    for (width, height) in SCRIPTED_SIZES {
        let granted = stage.request_coordinates(ActorBox::from_pixel_size(width, height));
        let (granted_w, granted_h) = granted.pixel_size();

        if (granted_w, granted_h) == (width, height) {
            log::info!("Requested {}x{}: granted", width, height);
        } else {
            log::info!(
                "Requested {}x{}: refused, stage stays {}x{}",
                width, height, granted_w, granted_h
            );
        }

        if stage.take_sync_matrices() {
            log::debug!("Matrices dirty, would recompute projection for {}", granted);
        }
    }

    let fullscreen = !stage.properties().fullscreen;
    let outcome = stage.set_fullscreen(fullscreen);
    log::info!("Fullscreen {} -> {:?}", fullscreen, outcome);

    stage.set_title("Stage Demo - done");
    stage.set_cursor_visible(true);
    stage.hide();
    stage.unrealize();

    log::info!(
        "Final state: {:?}, {}x{}",
        stage.realization_state(),
        stage.query_coordinates().pixel_size().0,
        stage.query_coordinates().pixel_size().1
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC occurred: {:?}", panic_info);

        if let Some(location) = panic_info.location() {
            eprintln!("Panic location: {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    let config = load_config()?;
    logging::init_with_level(&config.logging.level);

    log::info!("Starting Stage Demo");
    run(&config)?;
    log::info!("Stage demo finished");
    Ok(())
}
