// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Built-in environment variants.
//!
//! Both variants share the same shape; only values differ. Production
//! deployments are expected to override the URLs through a file or the
//! environment (see [`crate::loader`]).

use std::fmt;
use std::str::FromStr;

use crate::environment::{EnvironmentConfig, RawAuth, RawEnvironment};
use crate::error::{ConfigError, Result};

const DEV_API_SERVER_URL: &str = "https://127.0.0.1:5000";
const DEV_CALLBACK_URL: &str = "https://127.0.0.1:8100";
const DOMAIN_PREFIX: &str = "dev-c1v0nd71.us";
const AUDIENCE: &str = "coffeeshopapi";
const CLIENT_ID: &str = "AutGjYRzwbQbqNgeBycYqsMgYVVCEZIx";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Development,
    Production,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Development, Variant::Production];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Development => "development",
            Variant::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Variant::Production)
    }

    /// Built-in record for this variant.
    pub fn preset(self) -> Result<EnvironmentConfig> {
        EnvironmentConfig::try_from(self.preset_raw())
    }

    pub(crate) fn preset_raw(self) -> RawEnvironment {
        RawEnvironment {
            production: self.is_production(),
            api_server_url: DEV_API_SERVER_URL.to_string(),
            auth: RawAuth {
                domain_prefix: DOMAIN_PREFIX.to_string(),
                audience: AUDIENCE.to_string(),
                client_id: CLIENT_ID.to_string(),
                callback_url: DEV_CALLBACK_URL.to_string(),
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Variant::Development),
            "production" | "prod" => Ok(Variant::Production),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn keys(value: &serde_json::Value, prefix: &str, out: &mut BTreeSet<String>) {
        if let Some(object) = value.as_object() {
            for (key, child) in object {
                let path = format!("{prefix}{key}");
                keys(child, &format!("{path}."), out);
                out.insert(path);
            }
        }
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("development".parse::<Variant>().unwrap(), Variant::Development);
        assert_eq!(" DEV ".parse::<Variant>().unwrap(), Variant::Development);
        assert_eq!("production".parse::<Variant>().unwrap(), Variant::Production);
        assert_eq!("Prod".parse::<Variant>().unwrap(), Variant::Production);
    }

    #[test]
    fn rejects_unknown_name() {
        let err = "staging".parse::<Variant>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownVariant(ref name) if name == "staging"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
        }
    }

    #[test]
    fn presets_validate() {
        for variant in Variant::ALL {
            let json = variant.preset().unwrap().to_json_pretty().unwrap();
            let parsed = EnvironmentConfig::from_json(&json).unwrap();
            assert_eq!(parsed, variant.preset().unwrap());
        }
    }

    #[test]
    fn production_flag_follows_variant() {
        assert!(!Variant::Development.preset().unwrap().production());
        assert!(Variant::Production.preset().unwrap().production());
    }

    #[test]
    fn development_matches_frontend_values() {
        let env = Variant::Development.preset().unwrap();
        assert_eq!(env.api_server_url(), "https://127.0.0.1:5000");
        assert_eq!(env.auth().domain_prefix(), "dev-c1v0nd71.us");
        assert_eq!(env.auth().audience(), "coffeeshopapi");
        assert_eq!(env.auth().client_id(), "AutGjYRzwbQbqNgeBycYqsMgYVVCEZIx");
        assert_eq!(env.auth().callback_url(), "https://127.0.0.1:8100");
    }

    #[test]
    fn variants_share_shape() {
        let mut dev = BTreeSet::new();
        let mut prod = BTreeSet::new();
        let dev_value = serde_json::to_value(Variant::Development.preset().unwrap()).unwrap();
        let prod_value = serde_json::to_value(Variant::Production.preset().unwrap()).unwrap();
        keys(&dev_value, "", &mut dev);
        keys(&prod_value, "", &mut prod);
        assert_eq!(dev, prod);
        assert!(dev.contains("auth.callbackURL"));
        assert_eq!(dev.len(), 7);
    }
}
