//! # Showcase Carousel Entry Point
//!
//! Terminal presentation layer for the rotating showcase. It mounts the
//! component, prints the card every time the selection changes, and turns
//! slide numbers typed on stdin into indicator clicks.
//!
//! Flags:
//! - `--once`: print the first card and exit
//! - `--config <path>`: read configuration from `path` instead of showcase-config.toml


use showcase_lib::{
    config::Config, content, fallback, renderer::draw_ascii, showcase::RotatingShowcase,
    ItemStore,
};
use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Value following `--config`, if any.
fn config_path(args: &[String]) -> Option<&str> {
    args.iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Case studies from the configured content file, or the built-in ones.
fn load_store(config: &Config) -> ItemStore {
    match &config.content.path {
        Some(path) => content::load(path).unwrap_or_else(|error| {
            // Keep rotating with the built-in copy rather than exiting
            warn!(path = %path.display(), "showcase content failed to load: {}", error);
            warn!("falling back to built-in case studies");
            fallback::case_studies()
        }),
        None => fallback::case_studies(),
    }
}

/// Slide number typed by the user (1-based) to an index.
fn parse_slide(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()?.checked_sub(1)
}

async fn run(store: ItemStore, config: &Config, once: bool) -> anyhow::Result<()> {
    let showcase = RotatingShowcase::mount(store, config.rotation.period())?;
    let width = config.display.width;

    draw_ascii(&showcase.render()?, width);
    if once {
        showcase.unmount();
        return Ok(());
    }

    println!(
        "Type a slide number (1-{}) to jump, Ctrl+D to quit.",
        showcase.store().len()
    );

    let mut changes = showcase.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                changes.borrow_and_update();
                draw_ascii(&showcase.render()?, width);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_slide(&line) {
                    Some(index) => {
                        if let Err(e) = showcase.select_index(index) {
                            warn!("{}", e);
                        }
                    }
                    None => warn!(input = %line.trim(), "not a slide number"),
                }
            }
            _ = &mut ctrl_c => {
                info!("interrupted");
                break;
            }
        }
    }

    showcase.unmount();
    Ok(())
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the rendered cards
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let once = args.iter().any(|arg| arg == "--once");

    let config = match config_path(&args) {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    let store = load_store(&config);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run(store, &config, once))
}
