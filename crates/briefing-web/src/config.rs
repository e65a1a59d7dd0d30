//! Process configuration, read once from the environment at startup.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use eyre::WrapErr;

pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human-readable, multi-line output.
    #[default]
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(format!("unknown log format: {other} (expected json or pretty)")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: SocketAddr,
    /// Directory the transient download files are written to.
    pub scratch_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    /// `BRIEFING_BIND`, `BRIEFING_SCRATCH_DIR` and `BRIEFING_LOG_FORMAT`,
    /// each falling back to its default when unset.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> eyre::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("BRIEFING_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind
            .parse::<SocketAddr>()
            .wrap_err_with(|| format!("BRIEFING_BIND is not a socket address: {bind}"))?;

        let scratch_dir = lookup("BRIEFING_SCRATCH_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);

        let log_format = match lookup("BRIEFING_LOG_FORMAT") {
            Some(raw) => raw.parse::<LogFormat>().map_err(|e| eyre::eyre!(e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind,
            scratch_dir,
            log_format,
        })
    }
}
