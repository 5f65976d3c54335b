// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::warn;
use serde_json::Value;

use crate::{
    errors::MutalignError,
    report::{ReportFormat, RowOrdering},
};

pub const CONFIG_FILE_NAME: &str = ".mutalignconfig";

/// Defaults read from `.mutalignconfig` (JSON). Command-line flags take precedence.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MutalignConfig {
    pub format: Option<ReportFormat>,
    pub order: Option<RowOrdering>,
    pub protein_width: Option<usize>,
}

impl MutalignConfig {
    pub fn from_file(path: &Path) -> Result<Self, MutalignError> {
        let text = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| MutalignError::Format(format!("{}: {}", path.display(), e)))?;
        Ok(MutalignConfig::from_value(&value))
    }

    // Unknown keys are ignored; bad values are dropped with a warning.
    pub fn from_value(value: &Value) -> Self {
        let format = value.get("format").and_then(Value::as_str).and_then(|s| {
            let parsed = ReportFormat::from_name(s);
            if parsed.is_none() {
                warn!("Ignoring unknown report format '{}' in config", s);
            }
            parsed
        });
        let order = value.get("order").and_then(Value::as_str).and_then(|s| {
            let parsed = RowOrdering::from_name(s);
            if parsed.is_none() {
                warn!("Ignoring unknown row order '{}' in config", s);
            }
            parsed
        });
        let protein_width = value
            .get("protein_width")
            .and_then(Value::as_u64)
            .and_then(|w| usize::try_from(w).ok());
        MutalignConfig {
            format,
            order,
            protein_width,
        }
    }
}

/// Report settings after merging command-line flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    pub format: ReportFormat,
    pub order: Option<RowOrdering>,
    pub protein_width: Option<usize>,
}

impl MutalignConfig {
    /// Flag values win over config values. The format falls back to a table.
    pub fn resolve(
        &self,
        format: Option<ReportFormat>,
        order: Option<RowOrdering>,
        protein_width: Option<usize>,
    ) -> ReportSettings {
        ReportSettings {
            format: format.or(self.format).unwrap_or(ReportFormat::Table),
            order: order.or(self.order),
            protein_width: protein_width.or(self.protein_width),
        }
    }
}

/// `$HOME/.mutalignconfig`, else `./.mutalignconfig`, if either exists.
pub fn find_config() -> Option<PathBuf> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let cwd = std::env::current_dir().ok();
    find_config_in(home.as_deref(), cwd.as_deref())
}

/// First of `home`, `cwd` that holds a config file.
pub fn find_config_in(home: Option<&Path>, cwd: Option<&Path>) -> Option<PathBuf> {
    [home, cwd]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.exists())
}
