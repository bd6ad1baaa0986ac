// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::TaxPolicy;
use crate::engine::tax::DEFAULT_TAX_RATE;
use crate::error::Error;
use crate::icons::IconResolver;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Spendlens", "spendlens"));

pub const DATA_DIR_ENV: &str = "SPENDLENS_DATA_DIR";
const SETTINGS_FILE: &str = "settings.json";

/// Picks the data dir: explicit flag, then `SPENDLENS_DATA_DIR`, then the
/// platform data dir. The directory is created if missing.
pub fn data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    let dir = match explicit {
        Some(p) => p.to_path_buf(),
        None => match std::env::var_os(DATA_DIR_ENV) {
            Some(v) if !v.is_empty() => PathBuf::from(v),
            _ => ProjectDirs::from(APP.0, APP.1, APP.2)
                .context("Could not determine platform-specific data dir")?
                .data_dir()
                .to_path_buf(),
        },
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
    Ok(dir)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRule {
    pub category: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Label printed next to amounts.
    pub currency: String,
    /// Percent applied by the tax report to taxable records without a tax amount.
    pub tax_fallback_rate: Option<Decimal>,
    pub icons: Vec<IconRule>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            currency: "USD".to_string(),
            tax_fallback_rate: Some(DEFAULT_TAX_RATE),
            icons: Vec::new(),
        }
    }
}

impl Settings {
    pub fn path(dir: &Path) -> PathBuf {
        dir.join(SETTINGS_FILE)
    }

    /// Reads `settings.json` from `dir`; a missing file gives the defaults.
    pub fn load(dir: &Path) -> Result<Settings, Error> {
        let path = Settings::path(dir);
        let text = match fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(source) => return Err(Error::Io { path, source }),
        };
        let settings: Settings =
            serde_json::from_str(&text).map_err(|source| Error::Json {
                path: path.clone(),
                source,
            })?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn save(&self, dir: &Path) -> Result<(), Error> {
        self.validate()?;
        let path = Settings::path(dir);
        let text = serde_json::to_string_pretty(self).map_err(|source| Error::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, text).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.currency.trim().is_empty() {
            return Err(Error::InvalidSetting("currency must not be empty".into()));
        }
        if let Some(rate) = self.tax_fallback_rate {
            if rate.is_sign_negative() || rate > Decimal::ONE_HUNDRED {
                return Err(Error::InvalidSetting(format!(
                    "tax_fallback_rate {} must be between 0 and 100",
                    rate
                )));
            }
        }
        Ok(())
    }

    pub fn tax_policy(&self) -> TaxPolicy {
        TaxPolicy {
            fallback_rate: self.tax_fallback_rate,
        }
    }

    pub fn icon_resolver(&self) -> IconResolver {
        IconResolver::with_overrides(
            self.icons
                .iter()
                .map(|r| (r.category.as_str(), r.icon.as_str())),
        )
    }
}
