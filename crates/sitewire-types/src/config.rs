//! Site configuration types for sitewire.
//!
//! `SiteConfig` represents the top-level `config.toml` that controls the
//! site base URL, fragment mounts, endpoint paths, and logo strips.

use serde::{Deserialize, Serialize};

/// Top-level configuration for a sitewire deployment.
///
/// Loaded from `~/.sitewire/config.toml`. All fields have defaults matching
/// the stock marketing-site layout, so an empty file is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL all fragment and endpoint paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fragments hydrated at startup, in order.
    #[serde(default = "default_fragments")]
    pub fragments: Vec<FragmentMount>,

    /// Path of the login endpoint, relative to `base_url`.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Path of the ask endpoint, relative to `base_url`.
    #[serde(default = "default_ask_path")]
    pub ask_path: String,

    /// Absolute URL of the external contact-form endpoint.
    #[serde(default)]
    pub form_endpoint: Option<String>,

    /// Logo strips rendered into scroller containers.
    #[serde(default)]
    pub logo_strips: Vec<LogoStrip>,
}

/// One fragment to hydrate: which container it lands in and where it is
/// fetched from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FragmentMount {
    /// Element id of the target container.
    pub container: String,
    /// Fragment path, relative to `base_url`.
    pub path: String,
}

/// A scrolling logo strip: a container, an asset base path, and the logo
/// file names to render (duplicated once for a seamless loop).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoStrip {
    /// Element id of the scroller container.
    pub container: String,
    /// Asset path prefix prepended to each file name.
    pub base_path: String,
    /// Logo file names, in render order.
    pub files: Vec<String>,
    /// Class list applied to each image; the renderer's default when unset.
    #[serde(default)]
    pub img_class: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_login_path() -> String {
    "/api/login".to_string()
}

fn default_ask_path() -> String {
    "/api/ask".to_string()
}

fn default_fragments() -> Vec<FragmentMount> {
    vec![
        FragmentMount {
            container: "site-navbar".to_string(),
            path: "/partials/navbar.html".to_string(),
        },
        FragmentMount {
            container: "site-footer".to_string(),
            path: "/partials/footer.html".to_string(),
        },
        FragmentMount {
            container: "contact-form-container".to_string(),
            path: "/partials/contact-form.html".to_string(),
        },
    ]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fragments: default_fragments(),
            login_path: default_login_path(),
            ask_path: default_ask_path(),
            form_endpoint: None,
            logo_strips: Vec::new(),
        }
    }
}
