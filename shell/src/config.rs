//! Shell configuration stored as human-edited TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::catalog::Urgency;

/// Shell configuration (TOML).
///
/// This file is intended to be edited by humans and must remain stable.
/// Missing fields default to the values the app ships with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShellConfig {
    /// Currency label prefixed to amounts ("KSh 850").
    pub currency_prefix: String,

    /// Notification counts above this render as "9+"-style badges.
    pub notification_badge_cap: u32,

    /// Urgency preselected when the request form opens or resets.
    pub default_urgency: Urgency,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            currency_prefix: "KSh".to_string(),
            notification_badge_cap: 9,
            default_urgency: Urgency::Normal,
        }
    }
}

impl ShellConfig {
    pub fn validate(&self) -> Result<()> {
        if self.currency_prefix.trim().is_empty() {
            return Err(anyhow!("currency_prefix must be non-empty"));
        }
        if self.notification_badge_cap == 0 {
            return Err(anyhow!("notification_badge_cap must be > 0"));
        }
        Ok(())
    }

    /// "KSh 850"
    pub fn format_amount(&self, amount: u32) -> String {
        format!("{} {}", self.currency_prefix, amount)
    }

    /// "From KSh 150"
    pub fn format_base_price(&self, amount: u32) -> String {
        format!("From {} {}", self.currency_prefix, amount)
    }

    /// Badge text for `count` unread notifications, capped ("2", "9+").
    pub fn format_badge_count(&self, count: u32) -> String {
        if count > self.notification_badge_cap {
            format!("{}+", self.notification_badge_cap)
        } else {
            count.to_string()
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ShellConfig::default()`.
pub fn load_config(path: &Path) -> Result<ShellConfig> {
    if !path.exists() {
        let cfg = ShellConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ShellConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ShellConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ShellConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        let cfg = ShellConfig {
            currency_prefix: "USD".to_string(),
            notification_badge_cap: 99,
            default_urgency: Urgency::Urgent,
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn validate_rejects_blank_currency_prefix() {
        let cfg = ShellConfig {
            currency_prefix: "  ".to_string(),
            ..ShellConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn badge_count_caps_at_configured_limit() {
        let cfg = ShellConfig::default();
        assert_eq!(cfg.format_badge_count(2), "2");
        assert_eq!(cfg.format_badge_count(9), "9");
        assert_eq!(cfg.format_badge_count(12), "9+");
    }

    #[test]
    fn amount_labels_use_currency_prefix() {
        let cfg = ShellConfig::default();
        assert_eq!(cfg.format_amount(850), "KSh 850");
        assert_eq!(cfg.format_base_price(150), "From KSh 150");
    }
}
