use checklist::core::config::{self, CliOverrides};
use checklist::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "checklist", about = "Named to-do lists in your terminal")]
struct Args {
    /// Data file to use instead of ~/Documents/ModernToDo.json
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(resolved: &config::ResolvedConfig) {
    let Some(path) = resolved.log_file.as_ref() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Config errors are reported once logging is up
    let loaded = config::load_config();
    let cli = CliOverrides {
        data_file: args.file,
        log_level: args.log_level,
    };
    let resolved = config::resolve(loaded.as_ref().unwrap_or(&Default::default()), &cli);

    init_logging(&resolved);

    if let Err(e) = &loaded {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("Checklist starting with data file {}", resolved.data_file.display());

    tui::run(resolved)
}
