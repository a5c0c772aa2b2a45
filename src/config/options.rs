// src/config/options.rs
use std::path::{ Path, PathBuf };

use serde::Deserialize;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub user_agent: String,
    /// `None` leaves the request without a timeout.
    pub timeout_secs: Option<u64>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout_secs: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// When false the record is only printed.
    pub save: bool,
    out_path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            save: true,
            out_path: None,
        }
    }
}

impl ExportOptions {
    /// User path wins as-is (extension included); otherwise "<DEFAULT_FILE>.<ext>".
    pub fn out_path(&self) -> PathBuf {
        match &self.out_path {
            Some(p) => p.clone(),
            None => PathBuf::from(format!("{DEFAULT_FILE}.{}", self.format.ext())),
        }
    }

    pub fn set_path(&mut self, path: impl AsRef<Path>) {
        self.out_path = Some(path.as_ref().to_path_buf());
    }
}
