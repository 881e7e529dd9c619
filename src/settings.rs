use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "WIKI_ACRONYMS";
const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_url: String,
    pub user_agent: String,
}

impl Settings {
    /// Defaults, overridden by `WIKI_ACRONYMS_API_URL` / `WIKI_ACRONYMS_USER_AGENT`.
    pub fn load() -> Result<Self> {
        Self::from_env(None)
    }

    /// `vars` replaces the process environment when given.
    fn from_env(vars: Option<config::Map<String, String>>) -> Result<Self> {
        let env = Environment::with_prefix(ENV_PREFIX).source(vars);
        Self::from_builder(Config::builder().add_source(env))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        builder
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("user_agent", default_user_agent())?
            .build()
            .context("Failed to build settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
