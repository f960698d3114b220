// src/request.rs
use crate::errors::ServerError;
use astra::Request;
use std::collections::HashMap;
use url::form_urlencoded;

/// Decoded query string. Repeated keys keep every value in order.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    values: HashMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn parse(query: Option<&str>) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        if let Some(q) = query {
            for (k, v) in form_urlencoded::parse(q.as_bytes()) {
                values.entry(k.into_owned()).or_default().push(v.into_owned());
            }
        }
        Self { values }
    }

    pub fn from_request(req: &Request) -> Self {
        Self::parse(req.uri().query())
    }

    /// First value of `key`, trimmed; empty values count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|vs| vs.first())
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Every non-empty value of `key`.
    pub fn all(&self, key: &str) -> Vec<&str> {
        self.values
            .get(key)
            .map(|vs| {
                vs.iter()
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Like [`get`](Self::get) but a missing value is a 400 carrying `message`.
    pub fn require(&self, key: &str, message: &str) -> Result<&str, ServerError> {
        self.get(key)
            .ok_or_else(|| ServerError::BadRequest(message.to_string()))
    }
}

/// Percent-decoded, non-empty path segments. "/" yields no segments.
pub fn path_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            urlencoding::decode(s)
                .map(|d| d.into_owned())
                .unwrap_or_else(|_| s.to_string())
        })
        .collect()
}

/// Listing ids are 64-bit integers.
pub fn parse_listing_id(raw: &str) -> Result<i64, ServerError> {
    raw.trim()
        .parse()
        .map_err(|_| ServerError::BadRequest("Listing ID must be numeric.".into()))
}
