use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use videohub::core::catalog::Catalog;
use videohub::core::config::{self, CliOverrides};
use videohub::core::state::App;

#[derive(Parser)]
#[command(name = "videohub", about = "Browse and search a video catalog in the terminal")]
struct Args {
    /// JSON catalog to browse instead of the built-in sample
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Section to open on start (home, catalog, playlists, history, profile)
    #[arg(short, long)]
    section: Option<String>,

    /// Where to write the log
    #[arg(long, default_value = "videohub.log")]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            section: args.section.as_deref(),
            catalog_file: args.catalog.as_deref(),
        },
    );

    let catalog = match &resolved.catalog_file {
        Some(path) => Catalog::load(path).map_err(|e| {
            log::error!("Failed to load catalog {}: {}", path.display(), e);
            std::io::Error::other(format!("{}: {}", path.display(), e))
        })?,
        None => Catalog::sample(),
    };

    log::info!(
        "VideoHub starting up with {} videos, section {}",
        catalog.len(),
        resolved.section
    );

    let app = App::from_config(catalog, &resolved);
    videohub::tui::run(app, &resolved)
}
