// src/core/net.rs
// One blocking GET per run. No retries, no backoff.

use std::{ fs, path::PathBuf, time::Duration };

use reqwest::blocking::Client;
use tracing::{ debug, info };

use crate::config::options::ScrapeOptions;
use crate::error::Result;

/// Raw response: status is checked by the caller, not here.
#[derive(Clone, Debug)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Where the markup comes from. The live site in normal runs; a saved file or a stub otherwise.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Page>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        // reqwest's blocking client defaults to 30s; None clears it.
        let timeout = opts.timeout_secs.map(Duration::from_secs);
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Page> {
        info!(url, "GET");
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        if status != 200 {
            debug!(status, "non-success status, body skipped");
            return Ok(Page { status, body: String::new() });
        }
        let body = resp.text()?;
        debug!(status, bytes = body.len(), "response received");
        Ok(Page { status, body })
    }
}

/// Serves a previously saved profile page. Always answers 200.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Fetch for FileFetcher {
    fn fetch(&self, url: &str) -> Result<Page> {
        debug!(url, path = %self.path.display(), "reading saved page");
        let body = fs::read_to_string(&self.path)?;
        Ok(Page { status: 200, body })
    }
}
