use crate::config::Config;
use crate::error::{Error, Result};
use crate::llm::ReportClient;
use crate::output;
use crate::prompt::build_prompt;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn read_log(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| Error::read_log(path, e))
}

/// Read the log, ask the API for a report, print it and save it.
///
/// Returns the path of the written report. Any failure aborts the run before
/// later steps happen: an unreadable log never reaches the API, and a failed
/// API call never touches the output directory.
pub async fn run(config: &Config, log_path: &Path) -> Result<PathBuf> {
    let content = read_log(log_path)?;
    info!(path = %log_path.display(), bytes = content.len(), "log loaded");

    let prompt = build_prompt(&content);

    let client = ReportClient::from_config(&config.api)?;
    info!(endpoint = %client.endpoint(), "generating report");
    let report = client.generate(&prompt).await?;

    println!("{report}");

    let path = output::save_report(&config.output.dir, &config.output.file_name, &report)?;
    println!("Report saved to {}", path.display());
    info!(path = %path.display(), "report written");
    Ok(path)
}
