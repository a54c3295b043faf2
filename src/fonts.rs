//! Font service: fetches font CSS for capture and exposes the readiness
//! signal that gates download controls.
//!
//! The rasterizer itself never reaches out to the network; font CSS is
//! fetched here and injected as a scoped style on the captured surface so an
//! isolated capture context does not need cross-origin stylesheet access.
//! A fetch failure is always non-fatal: exports degrade to the builtin font.

use std::time::Duration;

use tokio::sync::watch;

use crate::error::{Error, Result};
use crate::DeckConfig;

/// Loads font assets once and reports process-wide readiness
pub struct FontService {
    client: reqwest::Client,
    css_url: Option<String>,
    ready_tx: watch::Sender<bool>,
    ready_rx: watch::Receiver<bool>,
}

impl FontService {
    pub fn new(config: &DeckConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.font_fetch_timeout_ms))
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        let (ready_tx, ready_rx) = watch::channel(false);
        Ok(Self {
            client,
            css_url: config.font_css_url.clone(),
            ready_tx,
            ready_rx,
        })
    }

    /// Whether all required font assets have finished loading
    pub fn is_ready(&self) -> bool {
        *self.ready_rx.borrow()
    }

    /// Load font assets and flip the readiness flag. Safe to call more than
    /// once; the flag is set exactly once and never cleared.
    pub async fn load(&self) {
        if self.is_ready() {
            return;
        }
        if self.css_url.is_some() {
            // Warm the fetch path; the result is not cached because capture
            // re-fetches scoped CSS per export, matching the degraded-fetch
            // error model.
            let _ = self.fetch_css().await;
        }
        let _ = self.ready_tx.send(true);
    }

    /// Suspend until the readiness signal fires
    pub async fn ready(&self) {
        let mut rx = self.ready_rx.clone();
        while !*rx.borrow() {
            if rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Fetch the font CSS text from the configured font service.
    ///
    /// Returns `None` when no URL is configured or the fetch fails; failure
    /// is logged and the caller proceeds without injected font style.
    pub async fn fetch_css(&self) -> Option<String> {
        let url = self.css_url.as_deref()?;
        match self.try_fetch(url).await {
            Ok(css) => Some(css),
            Err(e) => {
                log::warn!("Failed to fetch font CSS from {}: {}", url, e);
                None
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::FontError(format!("Request failed: {}", e)))?;
        if !resp.status().is_success() {
            return Err(Error::FontError(format!(
                "Font service returned {}",
                resp.status()
            )));
        }
        resp.text()
            .await
            .map_err(|e| Error::FontError(format!("Failed to read font CSS body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn readiness_starts_false_and_latches() {
        let svc = FontService::new(&DeckConfig::default()).unwrap();
        assert!(!svc.is_ready());
        svc.load().await;
        assert!(svc.is_ready());
        // Second load is a no-op, flag stays set
        svc.load().await;
        assert!(svc.is_ready());
    }

    #[tokio::test]
    async fn ready_resolves_after_load() {
        let svc = FontService::new(&DeckConfig::default()).unwrap();
        svc.load().await;
        svc.ready().await;
        assert!(svc.is_ready());
    }

    #[tokio::test]
    async fn fetch_css_without_url_is_none() {
        let svc = FontService::new(&DeckConfig::default()).unwrap();
        assert!(svc.fetch_css().await.is_none());
    }
}
