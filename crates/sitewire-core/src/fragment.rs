//! Fragment hydration.
//!
//! A fragment is an opaque block of markup served separately from the main
//! page and injected into a container at runtime. Loading fails soft in
//! every case: a missing container, a non-success status, or a transport
//! failure all leave the page exactly as it was.

use sitewire_types::error::LoadError;
use tracing::{debug, warn};

use crate::page::Page;

/// Fetches fragment bodies by path.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in sitewire-infra; tests use in-memory fakes.
pub trait FragmentFetcher: Send + Sync {
    /// Fetch the fragment at `path`, with caching disabled.
    ///
    /// Exactly one attempt per call: no retries, no timeout beyond the
    /// transport default.
    fn fetch(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<String, LoadError>> + Send;
}

/// Injects fetched fragments into page containers.
pub struct FragmentLoader<F: FragmentFetcher> {
    fetcher: F,
}

impl<F: FragmentFetcher> FragmentLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Load the fragment at `path` into the container with id `container_id`.
    ///
    /// - Missing container: silent no-op. The page may legitimately render
    ///   without that fragment on another layout, so no fetch is issued.
    /// - Fetch failure: logged and swallowed; the container keeps whatever
    ///   content it had.
    /// - Success: the container's content is fully replaced with the body,
    ///   which invalidates anything previously bound inside it. Callers must
    ///   rebind interactive behavior only after this returns.
    pub async fn load(&self, page: &mut Page, container_id: &str, path: &str) {
        if page.by_id(container_id).is_none() {
            debug!(container_id, path, "no container for fragment, skipping");
            return;
        }

        match self.fetcher.fetch(path).await {
            Ok(body) => {
                if let Some(container) = page.by_id_mut(container_id) {
                    container.set_inner_html(body);
                    debug!(container_id, path, "fragment injected");
                }
            }
            Err(err) => {
                warn!(container_id, path, %err, "fragment load failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;
    use sitewire_types::error::LoadError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fetcher fake: serves a fixed result and counts calls.
    struct FakeFetcher {
        result: Result<String, LoadError>,
        calls: AtomicUsize,
    }

    impl FakeFetcher {
        fn ok(body: &str) -> Self {
            Self {
                result: Ok(body.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn err(err: LoadError) -> Self {
            Self {
                result: Err(err),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl FragmentFetcher for FakeFetcher {
        async fn fetch(&self, _path: &str) -> Result<String, LoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.result {
                Ok(body) => Ok(body.clone()),
                Err(LoadError::Status(code)) => Err(LoadError::Status(*code)),
                Err(LoadError::Transport(msg)) => Err(LoadError::Transport(msg.clone())),
            }
        }
    }

    fn page_with(container_id: &str, initial: &str) -> Page {
        let mut page = Page::new();
        let mut container = Element::with_id("div", container_id);
        container.set_inner_html(initial);
        page.insert(container);
        page
    }

    #[tokio::test]
    async fn test_load_replaces_container_content() {
        let mut page = page_with("site-footer", "old");
        let loader = FragmentLoader::new(FakeFetcher::ok("<footer>new</footer>"));

        loader.load(&mut page, "site-footer", "/partials/footer.html").await;

        assert_eq!(
            page.by_id("site-footer").unwrap().inner_html(),
            "<footer>new</footer>"
        );
    }

    #[tokio::test]
    async fn test_missing_container_skips_fetch() {
        let mut page = Page::new();
        let loader = FragmentLoader::new(FakeFetcher::ok("<nav/>"));

        loader.load(&mut page, "site-navbar", "/partials/navbar.html").await;

        assert_eq!(loader.fetcher().call_count(), 0);
    }

    #[tokio::test]
    async fn test_status_failure_leaves_container_untouched() {
        let mut page = page_with("site-navbar", "previous");
        let loader = FragmentLoader::new(FakeFetcher::err(LoadError::Status(404)));

        loader.load(&mut page, "site-navbar", "/partials/navbar.html").await;

        assert_eq!(page.by_id("site-navbar").unwrap().inner_html(), "previous");
        assert_eq!(loader.fetcher().call_count(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_leaves_container_untouched() {
        let mut page = page_with("site-navbar", "previous");
        let loader = FragmentLoader::new(FakeFetcher::err(LoadError::Transport(
            "dns failure".to_string(),
        )));

        loader.load(&mut page, "site-navbar", "/partials/navbar.html").await;

        assert_eq!(page.by_id("site-navbar").unwrap().inner_html(), "previous");
    }

    #[tokio::test]
    async fn test_load_twice_is_idempotent() {
        let mut page = page_with("site-footer", "");
        let loader = FragmentLoader::new(FakeFetcher::ok("<footer/>"));

        loader.load(&mut page, "site-footer", "/partials/footer.html").await;
        let after_once = page.by_id("site-footer").unwrap().inner_html().to_string();

        loader.load(&mut page, "site-footer", "/partials/footer.html").await;
        assert_eq!(page.by_id("site-footer").unwrap().inner_html(), after_once);
        assert_eq!(loader.fetcher().call_count(), 2);
    }
}
