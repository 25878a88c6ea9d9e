//! Request extractors
//!
//! Neither extractor can fail: a missing header or peer address just means
//! the request carries less identity.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use platform::admin::extract_admin_key;
use platform::client::client_key;
use std::convert::Infallible;
use std::net::SocketAddr;

/// Rate limit key of the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientKey(pub String);

impl<S> FromRequestParts<S> for ClientKey
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());
        Ok(ClientKey(client_key(&parts.headers, peer)))
    }
}

/// Admin key presented in the `x-admin-key` header, if any
#[derive(Debug, Clone, Default)]
pub struct AdminKey(pub Option<String>);

impl AdminKey {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for AdminKey
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(AdminKey(extract_admin_key(&parts.headers)))
    }
}
