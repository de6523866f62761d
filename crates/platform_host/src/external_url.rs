//! Navigation that leaves the simulated desktop (new browser tab, `mailto:` handoff).

use std::{future::Future, pin::Pin};

/// Object-safe boxed future returned by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that opens URLs outside the desktop shell.
pub trait ExternalUrlService {
    /// Opens `url` in a new top-level browsing context.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;

    /// Navigates the current document to `url` (used for `mailto:` links).
    fn navigate<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Accepts every request and does nothing.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn navigate<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}
