use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;
use url::Url;

use crate::constants::{DEFAULT_DOMAIN, NO_EPIC};
use crate::error::{ReportError, Result};

/// Report configuration, read once at startup and passed by reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Host used to build issue links, default "jira.example.com"
    pub domain: String,

    // Epic link key -> display name used for the group heading
    pub epics: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            domain: DEFAULT_DOMAIN.to_string(),
            epics: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration file contents, merging them over the defaults.
    ///
    /// Files ending in `.json` are read as JSON, anything else as YAML.
    /// `path` is only used to pick the format and to name the file in errors.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            debug!("Configuration file {} is empty, using defaults", path.display());
            return Ok(Self::default());
        }

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config: Config = if is_json {
            serde_json::from_str(contents).map_err(|err| ReportError::config(path, err))?
        } else {
            serde_yaml::from_str(contents).map_err(|err| ReportError::config(path, err))?
        };

        config
            .validate()
            .map_err(|message| ReportError::config(path, message))?;

        debug!(
            "Loaded configuration from {}: domain={}, {} epic name(s)",
            path.display(),
            config.domain,
            config.epics.len()
        );
        Ok(config)
    }

    /// Check that the domain yields a well-formed `https://{domain}/browse/` base
    pub fn validate(&self) -> std::result::Result<(), String> {
        let base = format!("https://{}/browse/", self.domain);
        let url = Url::parse(&base)
            .map_err(|err| format!("invalid domain '{}': {}", self.domain, err))?;

        if url.host_str().is_none()
            || url.path() != "/browse/"
            || url.query().is_some()
            || url.fragment().is_some()
        {
            return Err(format!(
                "invalid domain '{}': expected a bare host name",
                self.domain
            ));
        }
        Ok(())
    }

    /// Display name for an epic link: configured name, else the raw key, else "No epic"
    pub fn epic_name<'a>(&'a self, key: &'a str) -> &'a str {
        match self.epics.get(key) {
            Some(name) => name,
            None if key.is_empty() => NO_EPIC,
            None => key,
        }
    }

    pub fn issue_url(&self, key: &str) -> String {
        format!("https://{}/browse/{}", self.domain, key)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
