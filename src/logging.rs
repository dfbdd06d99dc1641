//! File logger. The terminal belongs to the game screen, so records go to the
//! file named in the settings.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use env_logger::{Builder, Target};
use log::{Log, Record};
use thiserror::Error;

use crate::settings::{Notes, Settings};

#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot install logger: {0}")]
    Install(#[from] log::SetLoggerError),
}

/// Install the global logger writing to `settings.log_file`.
pub fn init(settings: &Settings) -> Result<(), LogError> {
    let file = File::create(&settings.log_file).map_err(|source| LogError::Open {
        path: settings.log_file.clone(),
        source,
    })?;
    builder(&settings.log_filter, Target::Pipe(Box::new(file))).try_init()?;
    Ok(())
}

fn builder(filter: &str, target: Target) -> Builder {
    let mut builder = Builder::new();
    builder.parse_filters(filter).target(target);
    builder
}

/// Write out notes gathered before a logger existed.
pub fn replay(notes: &Notes, logger: &dyn Log) {
    for (level, message) in notes {
        logger.log(
            &Record::builder()
                .level(*level)
                .target("brick_breaker::settings")
                .args(format_args!("{message}"))
                .build(),
        );
    }
    logger.flush();
}
