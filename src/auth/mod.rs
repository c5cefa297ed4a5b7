// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Identity Provider Settings
//!
//! The `auth` group of the environment record. The client hands these values
//! to its identity-provider SDK; nothing here talks to the provider.
//!
//! ## Fields
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `domainPrefix` | Tenant prefix; the tenant host is `{domainPrefix}.auth0.com` |
//! | `audience` | API identifier the issued tokens are valid for |
//! | `clientId` | Public identifier of the registered client application |
//! | `callbackURL` | Where the provider redirects after login |

pub mod authorize;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::environment::{
    require_absolute_url, require_non_empty, RawAuth, FIELD_AUDIENCE, FIELD_CALLBACK_URL,
    FIELD_CLIENT_ID, FIELD_DOMAIN_PREFIX,
};
use crate::error::{ConfigError, Result};

/// Suffix appended to the domain prefix to form the tenant host.
pub const TENANT_HOST_SUFFIX: &str = "auth0.com";

/// Identity provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAuth")]
pub struct AuthConfig {
    #[serde(rename = "domainPrefix")]
    domain_prefix: String,
    audience: String,
    #[serde(rename = "clientId")]
    client_id: String,
    #[serde(rename = "callbackURL")]
    callback_url: String,
    /// `https://{domain_prefix}.auth0.com/`, derived at construction.
    #[serde(skip)]
    tenant: Url,
}

impl AuthConfig {
    pub fn new(
        domain_prefix: impl Into<String>,
        audience: impl Into<String>,
        client_id: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Result<Self> {
        let domain_prefix = require_non_empty(FIELD_DOMAIN_PREFIX, domain_prefix.into())?;
        let tenant = tenant_url(&domain_prefix)?;
        Ok(Self {
            domain_prefix,
            audience: require_non_empty(FIELD_AUDIENCE, audience.into())?,
            client_id: require_non_empty(FIELD_CLIENT_ID, client_id.into())?,
            callback_url: require_absolute_url(FIELD_CALLBACK_URL, callback_url.into())?,
            tenant,
        })
    }

    pub fn domain_prefix(&self) -> &str {
        &self.domain_prefix
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Tenant host, e.g. `dev-c1v0nd71.us.auth0.com`.
    pub fn tenant_host(&self) -> &str {
        self.tenant.host_str().unwrap_or_default()
    }

    /// Tenant base URL (`https://{tenant_host}/`).
    pub fn tenant_url(&self) -> &Url {
        &self.tenant
    }
}

impl TryFrom<RawAuth> for AuthConfig {
    type Error = ConfigError;

    fn try_from(raw: RawAuth) -> Result<Self> {
        Self::new(
            raw.domain_prefix,
            raw.audience,
            raw.client_id,
            raw.callback_url,
        )
    }
}

/// The prefix must form exactly one host under the tenant suffix; anything
/// that smuggles in a path, port or userinfo is rejected.
fn tenant_url(domain_prefix: &str) -> Result<Url> {
    let host = format!("{domain_prefix}.{TENANT_HOST_SUFFIX}");
    let url = Url::parse(&format!("https://{host}/")).map_err(|e| ConfigError::InvalidUrl {
        field: FIELD_DOMAIN_PREFIX,
        reason: e.to_string(),
    })?;

    let host_matches = url
        .host_str()
        .is_some_and(|parsed| parsed.eq_ignore_ascii_case(&host));
    if !host_matches || url.port().is_some() || !url.username().is_empty() || url.path() != "/" {
        return Err(ConfigError::InvalidUrl {
            field: FIELD_DOMAIN_PREFIX,
            reason: format!("`{domain_prefix}` does not form a tenant host"),
        });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_auth() -> AuthConfig {
        AuthConfig::new(
            "dev-c1v0nd71.us",
            "coffeeshopapi",
            "AutGjYRzwbQbqNgeBycYqsMgYVVCEZIx",
            "https://127.0.0.1:8100",
        )
        .unwrap()
    }

    #[test]
    fn exposes_fields_by_name() {
        let auth = dev_auth();
        assert_eq!(auth.domain_prefix(), "dev-c1v0nd71.us");
        assert_eq!(auth.audience(), "coffeeshopapi");
        assert_eq!(auth.client_id(), "AutGjYRzwbQbqNgeBycYqsMgYVVCEZIx");
        assert_eq!(auth.callback_url(), "https://127.0.0.1:8100");
    }

    #[test]
    fn tenant_host_appends_suffix() {
        let auth = dev_auth();
        assert_eq!(auth.tenant_host(), "dev-c1v0nd71.us.auth0.com");
        assert_eq!(auth.tenant_url().as_str(), "https://dev-c1v0nd71.us.auth0.com/");
    }

    #[test]
    fn rejects_empty_audience() {
        let err = AuthConfig::new("tenant", "", "client", "https://app.example.com").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField { field } if field == FIELD_AUDIENCE));
    }

    #[test]
    fn rejects_relative_callback() {
        let err = AuthConfig::new("tenant", "api", "client", "/callback").unwrap_err();
        assert!(matches!(err, ConfigError::RelativeUrl { field } if field == FIELD_CALLBACK_URL));
    }

    #[test]
    fn accepts_custom_scheme_callback() {
        let auth =
            AuthConfig::new("tenant", "api", "client", "io.ionic.coffee://callback").unwrap();
        assert_eq!(auth.callback_url(), "io.ionic.coffee://callback");
    }

    #[test]
    fn rejects_opaque_callback() {
        for bad in ["javascript:alert(1)", "mailto:x@y", "localhost:8100"] {
            let err = AuthConfig::new("tenant", "api", "client", bad).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidUrl { field, .. } if field == FIELD_CALLBACK_URL),
                "{bad}: {err:?}"
            );
        }
    }

    #[test]
    fn rejects_malformed_callback() {
        for bad in ["https://", "http://exa mple.com", "https://[::1"] {
            let err = AuthConfig::new("tenant", "api", "client", bad).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidUrl { field, .. } if field == FIELD_CALLBACK_URL),
                "{bad}: {err:?}"
            );
        }
    }

    #[test]
    fn rejects_prefix_with_path() {
        let err = AuthConfig::new("tenant/evil", "api", "client", "https://app.example.com")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidUrl { field, .. } if field == FIELD_DOMAIN_PREFIX
        ));
    }

    #[test]
    fn rejects_prefix_with_userinfo() {
        let err = AuthConfig::new("user@tenant", "api", "client", "https://app.example.com")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn tenant_is_not_serialized() {
        let value = serde_json::to_value(dev_auth()).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["audience", "callbackURL", "clientId", "domainPrefix"]);
    }
}
