// src/config/file.rs
//
// Optional TOML overrides, e.g. `steam_scrape.toml`:
//
//   out_path = "data/profiles.csv"
//   format = "tsv"
//   timeout_secs = 20
//
// A missing file is not an error; defaults apply.

use std::{fs, path::{ Path, PathBuf }};

use serde::Deserialize;

use crate::error::Result;
use super::options::{ AppOptions, ExportFormat };

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub out_path: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    pub save: Option<bool>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
}

pub fn load(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(FileConfig::default());
    }
    let text = fs::read_to_string(path)?;
    parse(&text)
}

pub fn parse(text: &str) -> Result<FileConfig> {
    Ok(toml::from_str(text)?)
}

impl FileConfig {
    /// Layer file values over whatever `opts` already holds.
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(p) = &self.out_path { opts.export.set_path(p); }
        if let Some(f) = self.format { opts.export.format = f; }
        if let Some(save) = self.save { opts.export.save = save; }
        if let Some(ua) = &self.user_agent { opts.scrape.user_agent = ua.clone(); }
        if let Some(t) = self.timeout_secs { opts.scrape.timeout_secs = Some(t); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_applies_overrides() {
        let cfg = parse(r#"
            out_path = "data/profiles.tsv"
            format = "tsv"
            timeout_secs = 20
        "#).unwrap();

        let mut opts = AppOptions::default();
        cfg.apply(&mut opts);
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert_eq!(opts.export.out_path(), PathBuf::from("data/profiles.tsv"));
        assert_eq!(opts.scrape.timeout_secs, Some(20));
        assert!(opts.export.save);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse("retries = 3").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, FileConfig::default());
    }
}
