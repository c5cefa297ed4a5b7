// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! `coffee-env`: resolve, validate and print the client environment record.
//!
//! The JSON on stdout is substituted into the frontend build. Logs go to
//! stderr. Exits non-zero when the record cannot be resolved.

use std::process::ExitCode;

use coffee_shop_env::logging::{self, LogFormat};
use coffee_shop_env::{loader, state, Result};
use tracing::{error, info};

fn main() -> ExitCode {
    if let Err(e) = logging::init(LogFormat::from_env()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed to resolve environment");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let resolved = loader::from_env()?;
    for name in &resolved.overrides {
        info!(variable = *name, "field overridden from environment");
    }

    let env = state::install(resolved.config)?;
    info!(
        api_server_url = env.api_server_url(),
        tenant = env.auth().tenant_host(),
        audience = env.auth().audience(),
        client_id = env.auth().client_id(),
        "environment ready"
    );

    println!("{}", env.to_json_pretty()?);
    Ok(())
}
