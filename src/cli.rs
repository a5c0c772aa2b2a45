// src/cli.rs
use std::io::{ self, BufRead, Write };
use std::path::PathBuf;

use clap::{ ArgAction, Parser };
use color_eyre::eyre::{ eyre, Result };

use crate::{
    config::{ self, consts::{ DEFAULT_CONFIG_FILE, HOST }, options::{ AppOptions, ExportFormat } },
    core::net::{ FileFetcher, HttpFetcher },
    report::TracingReport,
    runner::{ self, RunSummary },
};

#[derive(Parser, Debug)]
#[command(name = "steam_scrape", version, about = "Scrape one public Steam profile into a CSV/TSV row")]
pub struct Args {
    /// Full profile URL (prompted for when omitted, optional with --html)
    pub input: Option<String>,

    /// Output file (default: steam_profiles.<format>)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Read a saved profile page instead of fetching
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Print the summary only; don't touch the output file
    #[arg(long)]
    pub no_save: bool,

    /// Request timeout in seconds (none by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Flags override config-file values.
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(p) = &self.out { opts.export.set_path(p); }
        if let Some(f) = self.format { opts.export.format = f; }
        if self.no_save { opts.export.save = false; }
        if let Some(t) = self.timeout { opts.scrape.timeout_secs = Some(t); }
    }

    /// The token to resolve, or `None` when the user has to be asked.
    /// A saved page needs no real URL, so `--html` alone stands in with the host root.
    pub fn input_token(&self) -> Option<String> {
        match (&self.input, &self.html) {
            (Some(input), _) => Some(input.clone()),
            (None, Some(_)) => Some(format!("https://{HOST}/")),
            (None, None) => None,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let file_cfg = config::file::load(&args.config)?;
    let log_file = args.log_file.clone().or_else(|| file_cfg.log_file.clone());
    crate::log::init(args.verbose, log_file.as_deref())
        .map_err(|e| eyre!("could not set up logging: {e}"))?;

    let mut opts = AppOptions::default();
    file_cfg.apply(&mut opts);
    args.apply(&mut opts);

    let input = match args.input_token() {
        Some(s) => s,
        None => prompt("Enter Steam username or profile URL: ")?,
    };

    let mut report = TracingReport;
    let outcome = match &args.html {
        Some(path) => runner::run(&input, &FileFetcher::new(path), &opts.export, &mut report),
        None => {
            let fetcher = HttpFetcher::new(&opts.scrape)?;
            runner::run(&input, &fetcher, &opts.export, &mut report)
        }
    };

    // Scrape failures are reported as text; the process still exits normally.
    match outcome {
        Ok(summary) => print_summary(&summary),
        Err(e) => {
            tracing::error!("{e}");
            println!("Error: {e}");
        }
    }
    Ok(())
}

fn prompt(msg: &str) -> io::Result<String> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_summary(summary: &RunSummary) {
    println!("\nProfile data retrieved successfully!");
    if let Some(path) = &summary.saved_to {
        println!("Data saved to {}", path.display());
    }
    println!("\nProfile Summary:");
    for (key, value) in summary.record.summary() {
        println!("{key}: {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse_and_override() {
        let args = Args::try_parse_from([
            "steam_scrape",
            "https://steamcommunity.com/id/x",
            "-o", "out/p.tsv",
            "--format", "tsv",
            "--no-save",
            "--timeout", "10",
            "-vv",
        ]).unwrap();

        assert_eq!(args.input.as_deref(), Some("https://steamcommunity.com/id/x"));
        assert_eq!(args.verbose, 2);
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut opts = AppOptions::default();
        args.apply(&mut opts);
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert_eq!(opts.export.out_path(), PathBuf::from("out/p.tsv"));
        assert!(!opts.export.save);
        assert_eq!(opts.scrape.timeout_secs, Some(10));
    }

    #[test]
    fn input_is_optional() {
        let args = Args::try_parse_from(["steam_scrape"]).unwrap();
        assert!(args.input.is_none());
        assert!(!args.no_save);
    }

    #[test]
    fn saved_page_needs_no_token() {
        let args = Args::try_parse_from(["steam_scrape", "--html", "page.html"]).unwrap();
        let token = args.input_token().unwrap();
        assert!(crate::scrape::resolve_locator(&token).is_some());

        let args = Args::try_parse_from(["steam_scrape", "--html", "page.html", "https://steamcommunity.com/id/x"]).unwrap();
        assert_eq!(args.input_token().as_deref(), Some("https://steamcommunity.com/id/x"));

        let args = Args::try_parse_from(["steam_scrape"]).unwrap();
        assert_eq!(args.input_token(), None);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["steam_scrape", "--format", "json"]).is_err());
    }
}
