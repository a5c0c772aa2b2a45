// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::ExportOptions,
    core::net::Fetch,
    data::ProfileRecord,
    error::Result,
    file::append_record,
    report::Report,
    scrape::scrape_profile,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub record: ProfileRecord,
    /// `None` when saving was switched off.
    pub saved_to: Option<PathBuf>,
}

/// Scrape one profile and, if `export.save`, append it to the output file.
/// Nothing is written unless the scrape succeeded.
pub fn run(
    input: &str,
    fetcher: &dyn Fetch,
    export: &ExportOptions,
    report: &mut dyn Report,
) -> Result<RunSummary> {
    let record = scrape_profile(input, fetcher, report)?;

    let saved_to = if export.save {
        let path = export.out_path();
        let wrote_header = append_record(&path, &record, export.format)?;
        info!(path = %path.display(), wrote_header, "record saved");
        Some(path)
    } else {
        None
    };

    Ok(RunSummary { record, saved_to })
}
