//! # App configuration — `recipes.toml`
//!
//! The web app bundles a `recipes.toml` and parses it at startup. Every
//! section and field has a default, so a missing file, an empty file, or a
//! file that only overrides one value all yield a usable configuration.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! users_url = "https://dummyjson.com/users"
//! recipes_url = "https://dummyjson.com/recipes"
//! # recipe_limit = 0        # 0 asks the API for every recipe
//!
//! [catalog]
//! page_size = 6
//! search_debounce_ms = 300
//!
//! [session]
//! storage_key = "currentUser"
//! redirect_delay_ms = 1500
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::session::DEFAULT_SESSION_KEY;

/// Top-level configuration stored in `recipes.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipesConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the user API; searches go to `{users_url}/search`.
    #[serde(default = "default_users_url")]
    pub users_url: String,
    #[serde(default = "default_recipes_url")]
    pub recipes_url: String,
    /// Sent as `?limit=` when set. The API's own default applies otherwise.
    #[serde(default)]
    pub recipe_limit: Option<u32>,
}

fn default_users_url() -> String {
    "https://dummyjson.com/users".to_string()
}

fn default_recipes_url() -> String {
    "https://dummyjson.com/recipes".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            users_url: default_users_url(),
            recipes_url: default_recipes_url(),
            recipe_limit: None,
        }
    }
}

/// Listing behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_search_debounce_ms() -> u64 {
    300
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl CatalogConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Session storage and post-login behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Pause between the success message and the redirect to the recipes page.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

fn default_storage_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

fn default_redirect_delay_ms() -> u64 {
    1500
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            redirect_delay_ms: default_redirect_delay_ms(),
        }
    }
}

impl SessionConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl RecipesConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "recipes.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
