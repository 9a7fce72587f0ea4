//! Output targets for logging channels.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Error, Debug)]
pub enum LogOutputError {
    #[error("unknown log output {0:?} (expected stdout, stderr, file or off)")]
    Unknown(String),

    #[error("cannot open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where a channel writes. Parsed case-insensitively from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
    /// `<log_path>/<channel>.log`, appended to.
    File,
    Off,
}

impl FromStr for LogOutput {
    type Err = LogOutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            "file" => Ok(Self::File),
            "off" => Ok(Self::Off),
            _ => Err(LogOutputError::Unknown(s.to_string())),
        }
    }
}

impl LogOutput {
    /// Terminal targets get colored output.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Stdout | Self::Stderr)
    }

    pub fn file_path(log_path: &Path, channel: &str) -> PathBuf {
        log_path.join(format!("{channel}.log"))
    }

    /// Opens the target. `File` creates `log_path` if missing.
    pub fn make_writer(
        self,
        log_path: &Path,
        channel: &str,
    ) -> Result<BoxMakeWriter, LogOutputError> {
        match self {
            Self::Stdout => Ok(BoxMakeWriter::new(std::io::stdout)),
            Self::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
            Self::Off => Ok(BoxMakeWriter::new(std::io::sink)),
            Self::File => {
                let path = Self::file_path(log_path, channel);
                let io_err = |source| LogOutputError::Io {
                    path: path.clone(),
                    source,
                };
                std::fs::create_dir_all(log_path).map_err(io_err)?;
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                    .map_err(io_err)?;
                Ok(BoxMakeWriter::new(Arc::new(file)))
            }
        }
    }
}
