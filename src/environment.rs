// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Environment Record
//!
//! [`EnvironmentConfig`] is the single source of truth for deployment-specific
//! values the client reads at startup: the backend base URL and the identity
//! provider settings in [`AuthConfig`].
//!
//! ## Shape
//!
//! ```json
//! {
//!   "production": false,
//!   "apiServerUrl": "https://127.0.0.1:5000",
//!   "auth": {
//!     "domainPrefix": "dev-c1v0nd71.us",
//!     "audience": "coffeeshopapi",
//!     "clientId": "AutGjYRzwbQbqNgeBycYqsMgYVVCEZIx",
//!     "callbackURL": "https://127.0.0.1:8100"
//!   }
//! }
//! ```
//!
//! The legacy keys `auth0` (for `auth`) and `url` (for `domainPrefix`) are
//! accepted on input. Output always uses the names above.
//!
//! ## Invariants
//!
//! - Every string field is non-empty after trimming surrounding whitespace.
//! - `apiServerUrl` is an absolute `http`/`https` URL with a host.
//! - `auth.callbackURL` is an absolute URL.
//! - Fields are private; a constructed record cannot change.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::auth::AuthConfig;
use crate::error::{ConfigError, Result};

pub(crate) const FIELD_API_SERVER_URL: &str = "apiServerUrl";
pub(crate) const FIELD_DOMAIN_PREFIX: &str = "auth.domainPrefix";
pub(crate) const FIELD_AUDIENCE: &str = "auth.audience";
pub(crate) const FIELD_CLIENT_ID: &str = "auth.clientId";
pub(crate) const FIELD_CALLBACK_URL: &str = "auth.callbackURL";

/// Deployment-specific values for the coffee shop client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEnvironment", rename_all = "camelCase")]
pub struct EnvironmentConfig {
    production: bool,
    api_server_url: String,
    auth: AuthConfig,
}

impl EnvironmentConfig {
    /// Build a validated record.
    pub fn new(
        production: bool,
        api_server_url: impl Into<String>,
        auth: AuthConfig,
    ) -> Result<Self> {
        let api_server_url = require_http_url(FIELD_API_SERVER_URL, api_server_url.into())?;
        Ok(Self {
            production,
            api_server_url,
            auth,
        })
    }

    /// Parse and validate a JSON record.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawEnvironment = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Whether consuming code should use production behaviors.
    pub fn production(&self) -> bool {
        self.production
    }

    /// Base endpoint of the backend API, exactly as configured.
    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    /// Join the API base URL with a request path.
    ///
    /// Slashes at the seam collapse to one, so `/coffees` and `coffees` both
    /// give `https://127.0.0.1:5000/coffees` for a base of
    /// `https://127.0.0.1:5000`.
    pub fn api_url(&self, path: &str) -> String {
        let base = self.api_server_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return base.to_string();
        }
        format!("{base}/{path}")
    }

    /// Pretty JSON in the canonical shape.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Unvalidated record as it appears on the wire.
///
/// The loader edits this before the final conversion into an
/// [`EnvironmentConfig`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RawEnvironment {
    pub(crate) production: bool,
    pub(crate) api_server_url: String,
    #[serde(alias = "auth0")]
    pub(crate) auth: RawAuth,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawAuth {
    #[serde(rename = "domainPrefix", alias = "url")]
    pub(crate) domain_prefix: String,
    pub(crate) audience: String,
    #[serde(rename = "clientId")]
    pub(crate) client_id: String,
    #[serde(rename = "callbackURL")]
    pub(crate) callback_url: String,
}

impl TryFrom<RawEnvironment> for EnvironmentConfig {
    type Error = ConfigError;

    fn try_from(raw: RawEnvironment) -> Result<Self> {
        let auth = AuthConfig::try_from(raw.auth)?;
        Self::new(raw.production, raw.api_server_url, auth)
    }
}

pub(crate) fn require_non_empty(field: &'static str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyField { field });
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Require an absolute URL with a host; returns the trimmed string, not the
/// normalized [`Url`], so the configured value round-trips unchanged.
///
/// Opaque URLs (`mailto:`, `javascript:`, `localhost:8100`) have no host and
/// cannot be redirect targets.
pub(crate) fn require_absolute_url(field: &'static str, value: String) -> Result<String> {
    let value = require_non_empty(field, value)?;
    let url = parse_absolute(field, &value)?;
    require_host(field, &url)?;
    Ok(value)
}

pub(crate) fn require_http_url(field: &'static str, value: String) -> Result<String> {
    let value = require_non_empty(field, value)?;
    let url = parse_absolute(field, &value)?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::UnsupportedScheme {
                field,
                scheme: other.to_string(),
            })
        }
    }
    require_host(field, &url)?;
    // Paths are appended by string join, so nothing may follow the path.
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::InvalidUrl {
            field,
            reason: "base URL must not carry a query or fragment".to_string(),
        });
    }
    Ok(value)
}

fn require_host(field: &'static str, url: &Url) -> Result<()> {
    if url.cannot_be_a_base() || url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::InvalidUrl {
            field,
            reason: "missing host".to_string(),
        });
    }
    Ok(())
}

fn parse_absolute(field: &'static str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| match e {
        url::ParseError::RelativeUrlWithoutBase => ConfigError::RelativeUrl { field },
        other => ConfigError::InvalidUrl {
            field,
            reason: other.to_string(),
        },
    })
}
