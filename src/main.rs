use clap::Parser;
use deskcalc::core::config::{self, CliOverrides, DeskcalcConfig, ResolvedConfig};
use deskcalc::headless;
use deskcalc::tui::{self, format::DisplayOptions};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deskcalc", about = "Terminal desk calculator")]
struct Args {
    /// Config file to use instead of ~/.deskcalc/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Don't highlight the display when its value changes
    #[arg(long)]
    no_flash: bool,

    /// Type this key sequence (e.g. "12*3=") and print the display instead
    /// of starting the UI
    #[arg(long, value_name = "SEQUENCE")]
    keys: Option<String>,
}

fn init_logging(config: &ResolvedConfig) {
    if config.log_level == LevelFilter::Off {
        return;
    }
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    // The terminal belongs to the UI, so logs only ever go to the file
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("deskcalc: {e}; using default settings");
            DeskcalcConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level,
            no_flash: args.no_flash,
        },
    );

    init_logging(&resolved);
    log::info!("Deskcalc starting up with {:?}", resolved);

    if let Some(keys) = args.keys {
        let options = DisplayOptions {
            thousands_separator: resolved.thousands_separator.clone(),
        };
        println!("{}", headless::evaluate(&keys, &options));
        return Ok(());
    }

    tui::run(resolved)
}
