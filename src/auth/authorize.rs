// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authorize link for the implicit login flow.
//!
//! The client navigates the browser to this link; the provider redirects back
//! to `callbackURL` (plus an optional route) with the token in the fragment.
//! Only the link is built here.

use url::Url;

use super::AuthConfig;

/// Response type requested from the provider.
pub const RESPONSE_TYPE: &str = "token";

impl AuthConfig {
    /// Build the authorize link:
    /// `https://{tenant}/authorize?audience=..&response_type=token&client_id=..&redirect_uri=..`.
    ///
    /// `callback_path` is appended verbatim to `callbackURL` to form the
    /// redirect target, so the app can land on a specific route.
    pub fn authorize_url(&self, callback_path: &str) -> Url {
        let mut url = self.tenant_url().clone();
        url.set_path("/authorize");
        let redirect_uri = format!("{}{callback_path}", self.callback_url());
        url.query_pairs_mut()
            .append_pair("audience", self.audience())
            .append_pair("response_type", RESPONSE_TYPE)
            .append_pair("client_id", self.client_id())
            .append_pair("redirect_uri", &redirect_uri);
        url
    }
}
