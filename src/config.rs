//! Config module.
//!
//! This module contains the representation of the user TOML
//! configuration file.

use anyhow::{anyhow, Context, Result};
use dirs::{config_dir, home_dir};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use shellexpand_utils::{canonicalize, expand};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    backend::{config::DEFAULT_TIMEOUT, HttpBackend, ServerConfig},
    mailbox::Mailbox,
};

/// Represents the user config file.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TomlConfig {
    /// Base url of the webmail server.
    pub url: Option<String>,
    pub default_mailbox: Option<Mailbox>,
    /// Request timeout, in seconds.
    pub timeout: Option<u64>,
    /// Extra headers sent with every request, a session cookie for
    /// example.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    pub mailbox_listing_table_max_width: Option<usize>,
}

impl TomlConfig {
    /// Read and parse the TOML configuration at the given path.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("reading config file at {path:?}");

        let content =
            fs::read_to_string(path).with_context(|| format!("cannot read config file {path:?}"))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("cannot parse config file {path:?}"))?;

        trace!("config: {config:#?}");
        Ok(config)
    }

    /// Read and parse the TOML configuration from default paths.
    ///
    /// When no configuration file exists, the default configuration
    /// is used: the server url then needs to be given from the
    /// command line.
    pub fn from_default_paths() -> Result<Self> {
        match Self::first_valid_default_path() {
            Some(path) => Self::from_path(&path),
            None => {
                debug!("no config file found, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse the TOML configuration at the optional given
    /// path, or from default paths.
    pub fn from_some_path_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::from_default_paths(),
        }
    }

    /// Get the default configuration paths.
    ///
    /// Paths are tried in this order:
    ///
    /// - `"$XDG_CONFIG_DIR/webmail/config.toml"` (or equivalent to
    ///   `$XDG_CONFIG_DIR` in other OSes.)
    /// - `"$HOME/.config/webmail/config.toml"`
    /// - `"$HOME/.webmailrc"`
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        if let Some(config_dir) = config_dir() {
            paths.push(config_dir.join("webmail").join("config.toml"));
        }

        if let Some(home_dir) = home_dir() {
            paths.push(home_dir.join(".config").join("webmail").join("config.toml"));
            paths.push(home_dir.join(".webmailrc"));
        }

        paths
    }

    pub fn first_valid_default_path() -> Option<PathBuf> {
        Self::default_paths().into_iter().find(|path| path.exists())
    }

    pub fn default_mailbox(&self) -> Mailbox {
        self.default_mailbox.unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Build the server configuration needed by the backend.
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let url = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                anyhow!("cannot find server url, set `url` in the config file or use --url")
            })?;

        Ok(ServerConfig {
            url: url.to_owned(),
            timeout: self.timeout(),
            headers: self.headers.clone(),
        })
    }

    /// Build the http backend from the server configuration.
    pub fn to_backend(&self) -> Result<HttpBackend> {
        let config = self.to_server_config()?;
        HttpBackend::new(&config).context("cannot build http backend")
    }
}

/// Parse a configuration file path as [`PathBuf`].
///
/// The path is shell-expanded then canonicalized (if applicable).
pub fn path_parser(path: &str) -> Result<PathBuf, String> {
    expand::try_path(path)
        .map(canonicalize::path)
        .map_err(|err| err.to_string())
}
