use cellar_common::Logger;
use url::Url;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Origins the main window may navigate to. Everything else is cancelled.
/// - `http://localhost` (any port): the development server
/// - `file://`: the packaged presentation bundle
pub const ALLOWED_ORIGINS: &[&str] = &["http://localhost", "file://"];

/// Check whether a URL is allowed by the navigation allowlist.
///
/// Compares parsed scheme and host, so look-alikes such as
/// `http://localhost.evil.com` are rejected.
pub fn is_navigation_allowed(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    match parsed.scheme() {
        "file" => true,
        "http" => parsed.host_str() == Some("localhost"),
        _ => false,
    }
}

// =============================================================================
// GUARD
// =============================================================================

/// Decides in-page navigation and new-window requests for the main window.
///
/// Cheap to clone; one copy lives inside each webview callback.
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    logger: Logger,
}

impl NavigationGuard {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// `true` lets the navigation proceed. Blocked URLs are logged once as a
    /// warning and otherwise leave the page untouched.
    pub fn allow_navigation(&self, url: &str) -> bool {
        if is_navigation_allowed(url) {
            self.logger.debug("Navigation allowed:", &[&url]);
            true
        } else {
            self.logger.warn("Prevented navigation to:", &[&url]);
            false
        }
    }

    /// Content may never open another native window.
    pub fn allow_new_window(&self, url: &str) -> bool {
        self.logger.warn("Prevented new window creation to:", &[&url]);
        false
    }
}

// =============================================================================
// TESTS
// =============================================================================
