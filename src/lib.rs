// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Coffee Shop Environment - typed client environment configuration
//!
//! This crate provides the read-only environment record the coffee shop
//! web/mobile client reads at startup: the backend API base URL and the
//! identity provider settings.
//!
//! ## Modules
//!
//! - `environment` - The record, its serialized shape and validation
//! - `auth` - Identity provider settings and the authorize link
//! - `variant` - Built-in development and production records
//! - `loader` - Resolution from presets, files and environment variables
//! - `state` - Process-wide install-once holder
//! - `logging` - Tracing subscriber setup

pub mod auth;
pub mod config;
pub mod environment;
pub mod error;
pub mod loader;
pub mod logging;
pub mod state;
pub mod variant;

pub use auth::AuthConfig;
pub use environment::EnvironmentConfig;
pub use error::{ConfigError, Result};
pub use variant::Variant;
