// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Process-wide environment record.
//!
//! Installed once before any concurrent activity and read-only afterwards, so
//! readers get a `&'static` reference and never lock.

use std::sync::OnceLock;

use crate::environment::EnvironmentConfig;
use crate::error::{ConfigError, Result};

static ENVIRONMENT: OnceLock<EnvironmentConfig> = OnceLock::new();

/// Install the process-wide record.
///
/// Fails with [`ConfigError::AlreadyInitialized`] if a record is already
/// installed; the existing record is kept.
pub fn install(config: EnvironmentConfig) -> Result<&'static EnvironmentConfig> {
    let mut stored = false;
    let installed = ENVIRONMENT.get_or_init(|| {
        stored = true;
        config
    });
    if !stored {
        return Err(ConfigError::AlreadyInitialized);
    }
    Ok(installed)
}

/// The installed record, if any.
pub fn current() -> Option<&'static EnvironmentConfig> {
    ENVIRONMENT.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    // One test owns the process-wide slot; splitting it would race.
    #[test]
    fn install_once_then_read_stable_reference() {
        let dev = Variant::Development.preset().unwrap();
        let installed = install(dev.clone()).unwrap();
        assert_eq!(installed, &dev);

        let first = current().unwrap();
        let second = current().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first.api_server_url(), second.api_server_url()));

        let err = install(Variant::Production.preset().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyInitialized));
        assert!(!current().unwrap().production());
    }
}
