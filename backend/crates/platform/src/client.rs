//! Client identification utilities
//!
//! Derives the logical client key the rate limiter is keyed by.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// Key used when neither the proxy header nor the socket reveals an address
pub const UNKNOWN_CLIENT: &str = "unknown";

/// First entry of `X-Forwarded-For`, trimmed, if non-blank
///
/// Taken as-is: proxies may send `ip:port`, hostnames or opaque tokens,
/// and each one still names a distinct client.
pub fn forwarded_client(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty())
}

/// Rate limit key for a client
///
/// Forwarded entry first, then the socket peer, then [`UNKNOWN_CLIENT`].
pub fn client_key(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> String {
    match forwarded_client(headers) {
        Some(forwarded) => forwarded.to_owned(),
        None => direct_ip
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| UNKNOWN_CLIENT.to_string()),
    }
}

/// Rate limit key for a client acting on one entity
///
/// Scopes the limit to the (client, entity) pair instead of the client alone.
pub fn scoped_key(client_key: &str, entity_id: &str) -> String {
    format!("{}-{}", client_key, entity_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn xff(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_client_key_uses_first_forwarded_entry() {
        let direct: IpAddr = "10.0.0.254".parse().unwrap();
        assert_eq!(
            client_key(&xff("192.168.1.1, 10.0.0.1"), Some(direct)),
            "192.168.1.1"
        );
    }

    #[test]
    fn test_client_key_direct() {
        let direct: IpAddr = "127.0.0.1".parse().unwrap();
        assert_eq!(client_key(&HeaderMap::new(), Some(direct)), "127.0.0.1");
    }

    #[test]
    fn test_forwarded_ip_port_entries_stay_distinct() {
        let proxy: IpAddr = "10.0.0.254".parse().unwrap();
        let a = client_key(&xff("203.0.113.7:4711, 10.0.0.1"), Some(proxy));
        let b = client_key(&xff("198.51.100.9:1234"), Some(proxy));

        assert_eq!(a, "203.0.113.7:4711");
        assert_eq!(b, "198.51.100.9:1234");
        assert_ne!(a, b);
    }

    #[test]
    fn test_blank_forwarded_entry_falls_back_to_direct() {
        let direct: IpAddr = "10.1.1.1".parse().unwrap();
        assert_eq!(client_key(&xff("  , 10.0.0.1"), Some(direct)), "10.1.1.1");
        assert_eq!(client_key(&xff(""), None), UNKNOWN_CLIENT);
    }

    #[test]
    fn test_client_key_unknown() {
        let headers = HeaderMap::new();
        assert_eq!(client_key(&headers, None), UNKNOWN_CLIENT);
    }

    #[test]
    fn test_scoped_key() {
        assert_eq!(scoped_key("1.2.3.4", "abc"), "1.2.3.4-abc");
    }
}
