use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: logzilla -log=/path/to/logfile";

/// Long flags that may be written with a single dash (`-log=app.log`).
const SINGLE_DASH_LONG: &[&str] = &["log", "config", "api-url", "output-dir"];

#[derive(Debug, Parser)]
#[command(
    name = "logzilla",
    version,
    about = "Generate a markdown security report from a log file using a local LLM"
)]
pub struct Cli {
    /// Path to the log file
    #[arg(short, long, value_name = "PATH")]
    pub log: Option<OsString>,

    /// Path to a TOML config file (default: ./logzilla.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report generation endpoint override
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Directory the report is written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args()))
    }

    /// The log path, if one was given. `-log=` counts as not given.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log
            .as_ref()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }
}

/// Rewrite `-log=x` / `-log x` style flags to `--log=x` / `--log x`.
/// Everything else is passed through untouched.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            let Some(rest) = arg.strip_prefix('-') else {
                return arg;
            };
            if rest.starts_with('-') {
                return arg;
            }
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_LONG.contains(&name) {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}
