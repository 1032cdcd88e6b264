use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use tally::core::config::{self, Overrides};
use tally::core::session::{Outcome, Session};

#[derive(Parser)]
#[command(name = "tally", about = "Keyboard-driven terminal counters")]
struct Args {
    /// File the counter values are loaded from and saved to
    #[arg(long)]
    save_path: Option<PathBuf>,

    /// Text printed between counters
    #[arg(long)]
    separator: Option<String>,

    /// Don't write counters on exit
    #[arg(long)]
    no_save: bool,

    /// Refuse to start if the save file exists but can't be read
    #[arg(long)]
    strict: bool,

    /// Config file to use instead of ~/.tally/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level for tally.log
    #[arg(long, default_value_t = LevelFilter::Debug)]
    log_level: LevelFilter,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize file logger - writes to tally.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("tally.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        eprintln!("tally: {e}; using defaults");
        config::TallyConfig::default()
    });

    let overrides = Overrides {
        separator: args.separator,
        save_path: args.save_path,
        no_save: args.no_save,
        strict_load: args.strict,
    };
    let resolved = config::resolve(&file_config, &overrides);
    log::info!("Tally starting with save file {}", resolved.storage_path.display());

    loop {
        let session = Session::start(resolved.clone())?;
        let outcome = tally::tui::run(session)?;

        if let Some(message) = outcome.message() {
            println!("{message}");
        }
        if outcome != Outcome::Restart {
            break;
        }
        log::info!("Restarting with a fresh session");
    }

    Ok(())
}
