// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Resolve the environment record at startup.
//!
//! Resolution order, later wins:
//!
//! 1. Preset for the selected [`Variant`] (`APP_ENV`).
//! 2. JSON record from `ENVIRONMENT_FILE`, replacing the preset.
//! 3. Per-field overrides (`API_SERVER_URL`, `AUTH_*`, `PRODUCTION`).
//! 4. Validation into an [`EnvironmentConfig`].
//!
//! Lookups go through a closure so tests never touch the process environment.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{
    API_SERVER_URL_ENV, APP_ENV_ENV, AUTH_AUDIENCE_ENV, AUTH_CALLBACK_URL_ENV,
    AUTH_CLIENT_ID_ENV, AUTH_DOMAIN_PREFIX_ENV, ENVIRONMENT_FILE_ENV, PRODUCTION_ENV,
};
use crate::environment::{EnvironmentConfig, RawEnvironment};
use crate::error::{ConfigError, Result};
use crate::variant::Variant;

/// A resolved record plus where its values came from.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub config: EnvironmentConfig,
    pub variant: Variant,
    pub file: Option<PathBuf>,
    /// Environment variables that overrode a field, in application order.
    pub overrides: Vec<&'static str>,
}

/// Resolve from the process environment.
pub fn from_env() -> Result<Resolved> {
    resolve(|name| std::env::var(name).ok())
}

/// Resolve using `lookup` in place of the process environment.
pub fn resolve<F>(lookup: F) -> Result<Resolved>
where
    F: Fn(&str) -> Option<String>,
{
    let value = |name: &str| {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let variant = match value(APP_ENV_ENV) {
        Some(name) => name.parse::<Variant>()?,
        None => Variant::default(),
    };
    debug!(%variant, "selected environment variant");

    let file = value(ENVIRONMENT_FILE_ENV).map(PathBuf::from);
    let mut raw = match &file {
        Some(path) => read_raw(path)?,
        None => variant.preset_raw(),
    };

    let mut overrides = Vec::new();

    if let Some(flag) = value(PRODUCTION_ENV) {
        raw.production = parse_flag(PRODUCTION_ENV, &flag)?;
        overrides.push(PRODUCTION_ENV);
    }

    let string_overrides: [(&'static str, &mut String); 5] = [
        (API_SERVER_URL_ENV, &mut raw.api_server_url),
        (AUTH_DOMAIN_PREFIX_ENV, &mut raw.auth.domain_prefix),
        (AUTH_AUDIENCE_ENV, &mut raw.auth.audience),
        (AUTH_CLIENT_ID_ENV, &mut raw.auth.client_id),
        (AUTH_CALLBACK_URL_ENV, &mut raw.auth.callback_url),
    ];
    for (name, slot) in string_overrides {
        if let Some(v) = value(name) {
            *slot = v;
            overrides.push(name);
        }
    }

    let config = EnvironmentConfig::try_from(raw)?;
    info!(
        %variant,
        file = ?file,
        overrides = overrides.len(),
        production = config.production(),
        "environment resolved"
    );

    Ok(Resolved {
        config,
        variant,
        file,
        overrides,
    })
}

/// Load and validate a complete record from a JSON file.
pub fn load_file(path: impl AsRef<Path>) -> Result<EnvironmentConfig> {
    EnvironmentConfig::try_from(read_raw(path.as_ref())?)
}

fn read_raw(path: &Path) -> Result<RawEnvironment> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "read environment file");
    serde_json::from_str(&contents).map_err(|source| ConfigError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_flag(variable: &'static str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            variable,
            value: value.to_string(),
        }),
    }
}
