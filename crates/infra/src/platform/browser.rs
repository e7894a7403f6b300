//! Default browser launching

use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Opens a URL outside the process.
pub trait UrlOpener: Send + Sync {
    /// Hand `url` to the opener; returns once it has been dispatched.
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the operating system's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}

/// Open `url` once after `delay` on a background task
///
/// Failure is logged and otherwise ignored; the server keeps running and the
/// user can still browse to the URL by hand.
pub fn schedule_open(opener: Arc<dyn UrlOpener>, url: String, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let target = url.clone();
        let result = tokio::task::spawn_blocking(move || opener.open(&target)).await;

        match result {
            Ok(Ok(())) => info!(%url, "opened browser"),
            Ok(Err(err)) => warn!(%url, error = %err, "failed to open browser"),
            Err(err) => warn!(%url, error = %err, "browser task panicked"),
        }
    })
}
