// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! when resolving the environment record. Variables are read once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `APP_ENV` | Built-in variant (`development` or `production`) | `development` |
//! | `ENVIRONMENT_FILE` | JSON file holding a complete record | None |
//! | `PRODUCTION` | Overrides `production` (`true`/`false`/`1`/`0`/`yes`/`no`) | Variant value |
//! | `API_SERVER_URL` | Overrides `apiServerUrl` | Variant value |
//! | `AUTH_DOMAIN_PREFIX` | Overrides `auth.domainPrefix` | Variant value |
//! | `AUTH_AUDIENCE` | Overrides `auth.audience` | Variant value |
//! | `AUTH_CLIENT_ID` | Overrides `auth.clientId` | Variant value |
//! | `AUTH_CALLBACK_URL` | Overrides `auth.callbackURL` | Variant value |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |
//!
//! Blank values are treated as unset.

/// Environment variable selecting the built-in variant.
pub const APP_ENV_ENV: &str = "APP_ENV";

/// Environment variable pointing at a JSON record.
///
/// The file replaces the variant preset wholesale, so it must contain every
/// field. Per-field overrides still apply on top of it.
pub const ENVIRONMENT_FILE_ENV: &str = "ENVIRONMENT_FILE";

/// Environment variable overriding the `production` flag.
///
/// Accepts `true`/`false`, `1`/`0` or `yes`/`no`.
pub const PRODUCTION_ENV: &str = "PRODUCTION";

/// Environment variable overriding `apiServerUrl`.
pub const API_SERVER_URL_ENV: &str = "API_SERVER_URL";

/// Environment variable overriding `auth.domainPrefix`.
pub const AUTH_DOMAIN_PREFIX_ENV: &str = "AUTH_DOMAIN_PREFIX";

/// Environment variable overriding `auth.audience`.
pub const AUTH_AUDIENCE_ENV: &str = "AUTH_AUDIENCE";

/// Environment variable overriding `auth.clientId`.
pub const AUTH_CLIENT_ID_ENV: &str = "AUTH_CLIENT_ID";

/// Environment variable overriding `auth.callbackURL`.
pub const AUTH_CALLBACK_URL_ENV: &str = "AUTH_CALLBACK_URL";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";
