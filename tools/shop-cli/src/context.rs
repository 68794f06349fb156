//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context as _, Result};
use clothshop_data::HttpShopApi;
use shop_widget::WidgetConfig;

use crate::output::Output;

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Execution context for CLI commands.
pub struct Context {
    /// Widget configuration.
    pub config: WidgetConfig,
    /// Where the config came from, if a file was used.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from a config file and command-line overrides.
    pub fn load(config_path: Option<&str>, base_url: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = match config_path {
            Some(path) => (WidgetConfig::load(path)?, Some(PathBuf::from(path))),
            None => match find_config(&cwd) {
                Some(path) => (WidgetConfig::load(&path)?, Some(path)),
                None => (WidgetConfig::default(), None),
            },
        };

        if let Some(url) = base_url {
            config = config.with_base_url(url);
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Client for the configured server.
    pub fn api(&self) -> Result<HttpShopApi> {
        if self.config.api.base_url.trim().is_empty() {
            bail!("No server configured: pass --base-url or set api.base_url in shop.toml");
        }
        HttpShopApi::with_timeout(self.config.api.clone(), REQUEST_TIMEOUT)
            .context("Failed to create HTTP client")
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}
