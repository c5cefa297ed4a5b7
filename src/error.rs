// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Configuration errors.
//!
//! Every failure names the offending field (dotted path such as
//! `auth.callbackURL`) or environment variable, so a bad build configuration
//! can be fixed without reading the source.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    #[error("configuration field `{field}` is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("configuration field `{field}` must be an absolute URL")]
    RelativeUrl { field: &'static str },

    #[error("configuration field `{field}` uses unsupported scheme `{scheme}` (expected http(s))")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("unknown environment variant `{0}` (expected `development` or `production`)")]
    UnknownVariant(String),

    #[error("environment variable `{variable}` has invalid boolean value `{value}`")]
    InvalidFlag { variable: &'static str, value: String },

    #[error("failed to read environment file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse environment file {}: {source}", .path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse environment record: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("environment configuration has already been installed")]
    AlreadyInitialized,
}
