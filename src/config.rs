// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Configuration loading for check toggles and exclusion rules.

use crate::exclusion::{ExclusionRule, ExclusionRuleRegistry, ExclusionRuleType};
use serde::Deserialize;
use std::collections::HashMap;

/// An exclusion rule as written in the configuration file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExclusionRuleConfig {
    /// Fixed id; generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: ExclusionRuleType,
    pub pattern: String,
}

impl ExclusionRuleConfig {
    pub fn to_rule(&self) -> ExclusionRule {
        match &self.id {
            Some(id) => ExclusionRule::with_id(id.clone(), self.kind, self.pattern.clone()),
            None => ExclusionRule::new(self.kind, self.pattern.clone()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub checks: HashMap<String, toml::Value>,

    #[serde(default)]
    pub exclusions: Vec<ExclusionRuleConfig>,
}

impl Config {
    /// Load configuration from a TOML file.
    /// TOML format:
    ///
    /// [checks.cache_control]
    /// enabled = false
    ///
    /// [[exclusions]]
    /// type = "path"
    /// pattern = "/health*"
    pub async fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let s = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::from_toml_str(&s)
    }

    /// Parse and validate configuration text.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject unknown check ids and malformed check tables.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (id, value) in &self.checks {
            if crate::checks::find(id).is_none() {
                return Err(anyhow::anyhow!("Unknown check '{}' in [checks]", id));
            }
            let table = value.as_table().ok_or_else(|| {
                anyhow::anyhow!("Configuration for check '{}' must be a TOML table", id)
            })?;
            if let Some(enabled) = table.get("enabled") {
                if !enabled.is_bool() {
                    return Err(anyhow::anyhow!(
                        "Invalid 'enabled' for check '{}': expected boolean",
                        id
                    ));
                }
            }
        }
        Ok(())
    }

    /// Returns true if the check is enabled.
    ///
    /// Checks are enabled by default; only `enabled = false` under
    /// `[checks.<id>]` turns one off.
    pub fn is_enabled(&self, check: &str) -> bool {
        match self.checks.get(check) {
            Some(toml::Value::Table(table)) => {
                !matches!(table.get("enabled"), Some(toml::Value::Boolean(false)))
            }
            _ => true,
        }
    }

    /// Add every configured exclusion rule to `registry`.
    pub fn seed_registry(&self, registry: &ExclusionRuleRegistry) {
        for rule in &self.exclusions {
            registry.add(rule.to_rule());
        }
    }
}
