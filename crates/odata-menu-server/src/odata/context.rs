//! `@odata.context` URL construction.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header, request::Parts};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::Settings;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Absolute service root, always ending in `/` (e.g. `http://localhost:52999/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRoot(String);

impl ServiceRoot {
    pub fn new(root: impl Into<String>) -> Self {
        let mut root = root.into();
        if !root.ends_with('/') {
            root.push('/');
        }
        Self(root)
    }

    /// Root derived from `X-Forwarded-Proto` (default `http`) and `Host`.
    pub fn from_parts(parts: &Parts) -> Self {
        let scheme = header_value(parts, FORWARDED_PROTO)
            .or_else(|| parts.uri.scheme_str())
            .unwrap_or("http");
        let host = header_value(parts, header::HOST.as_str())
            .or_else(|| parts.uri.authority().map(|a| a.as_str()))
            .unwrap_or("localhost");

        Self::new(format!("{}://{}/", scheme, host))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Context for a single entity, e.g. `<root>odata/$metadata#MenuItems/$entity`.
    pub fn entity_context(&self, entity_set: &str) -> String {
        format!("{}odata/$metadata#{}/$entity", self.0, entity_set)
    }

    /// Context for a collection: the request URL (without query) plus
    /// `/$metadata#<entity_set>`.
    pub fn collection_context(&self, request_path: &str, entity_set: &str) -> String {
        format!(
            "{}{}/$metadata#{}",
            self.0.trim_end_matches('/'),
            request_path,
            entity_set
        )
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl<S> FromRequestParts<S> for ServiceRoot
where
    Arc<Settings>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let settings = Arc::<Settings>::from_ref(state);

        match &settings.server.public_url {
            Some(url) => Ok(Self::new(url.clone())),
            None => Ok(Self::from_parts(parts)),
        }
    }
}
