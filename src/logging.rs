//! Log setup for the binary.
//!
//! Logs always go to stderr; stdout carries the report so `-f json` output
//! stays parseable. `-q` silences the report, not errors.

use tracing::Level;
use tracing_subscriber::EnvFilter;

const LOG_TARGET: &str = "playwright_tagging";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// `RUST_LOG` takes precedence over the flags.
    pub fn filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{LOG_TARGET}={}", self.level())))
    }

    /// Timestamps and source locations only help when debugging the checker
    /// itself.
    fn traces_internals(self) -> bool {
        self >= Self::Debug
    }
}

pub fn init(verbosity: Verbosity) {
    let internals = verbosity.traces_internals();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(verbosity.filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(internals)
        .with_line_number(internals)
        .compact();

    if internals {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
