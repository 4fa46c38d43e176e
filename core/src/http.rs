//! HTTP request and response types exchanged with a `Transport`.
//!
//! # Design
//! These types describe a signed request and its raw response as plain data.
//! All fields use owned types so a request can be built, inspected, and
//! handed to any transport without lifetime concerns.

use std::fmt;

/// Header carrying the caller's client key.
pub const CLIENT_KEY_HEADER: &str = "X-Client-Key";

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "X-Request-Signature";

/// HTTP method for a request. The service only accepts these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Patch,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully signed request, ready for a `Transport`.
///
/// `path` is the signed route below `/api`; `url` is what goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl SignedRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A raw HTTP response as returned by a `Transport`, whatever its status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
