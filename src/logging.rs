//! Logger setup
//!
//! The terminal belongs to the viewer while it runs, so interactive sessions
//! only log when a file is given. Non-interactive runs log to stderr.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Environment variable naming a log file
pub const LOG_FILE_ENV: &str = "LOGWASH_LOG_FILE";

/// `--log-file`, else `$LOGWASH_LOG_FILE`
pub fn log_file_path(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_FILE_ENV).map(PathBuf::from))
}

/// Install the global logger
pub fn init(log_file: Option<&Path>, interactive: bool) {
    match log_file {
        Some(path) => {
            if let Err(err) = init_file_logger(path) {
                eprintln!("Failed to initialize file logger at '{}': {err}", path.display());
                if !interactive {
                    env_logger::init();
                }
            }
        }
        None if !interactive => env_logger::init(),
        None => {}
    }
}

fn init_file_logger(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut builder = Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)))
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .try_init()
        .map_err(io::Error::other)?;

    log::info!("File logger initialized at {}", path.display());

    Ok(())
}
