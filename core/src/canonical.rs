//! Canonicalization of a request into the bytes that get signed.

use std::borrow::Cow;

use log::debug;
use log::trace;

use crate::params::scalar_to_string;
use crate::Params;
use crate::SigningRequest;

/// Concatenate parameters as `{key}{value}` in ascending byte-wise key order.
///
/// Keys listed in `excluded_keys` are dropped first (exact, case-sensitive
/// match). Collection values are skipped entirely: neither key nor value is
/// written.
///
/// ```text
/// {"page": 1, "keyword": "shoe"} => "keywordshoepage1"
/// ```
pub fn query_concat(params: &Params, excluded_keys: &[&str]) -> String {
    concat_pairs(&signed_pairs(params, excluded_keys))
}

/// Scalar parameters that take part in signing, sorted by key.
fn signed_pairs<'p>(params: &'p Params, excluded_keys: &[&str]) -> Vec<(&'p str, Cow<'p, str>)> {
    let mut pairs: Vec<_> = params
        .iter()
        .filter(|(k, _)| !excluded_keys.contains(&k.as_str()))
        .filter_map(|(k, v)| scalar_to_string(v).map(|v| (k.as_str(), v)))
        .collect();

    // str's Ord is byte-wise, which is what the platform expects.
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
    pairs
}

fn concat_pairs(pairs: &[(&str, Cow<'_, str>)]) -> String {
    let mut s = String::with_capacity(pairs.iter().map(|(k, v)| k.len() + v.len()).sum());
    for (k, v) in pairs {
        s.push_str(k);
        s.push_str(v);
    }
    s
}

/// StringToSign carries the per-family policy of the canonicalizer.
///
/// ## Format
///
/// ```text
/// secret +
/// path +
/// {key}{value}... +
/// body (unless GET or multipart/form-data) +
/// extra... +
/// secret
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StringToSign<'a> {
    /// Path to sign, already adjusted by the caller.
    pub path: &'a str,
    /// Parameter keys that never take part in signing.
    pub excluded_keys: &'a [&'a str],
    /// Trailing tokens written after the body, in order.
    pub extra: &'a [&'a str],
}

impl<'a> StringToSign<'a> {
    /// Create a string to sign for `path` with nothing excluded and no extra tokens.
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            excluded_keys: &[],
            extra: &[],
        }
    }

    /// Set the excluded parameter keys.
    pub fn with_excluded_keys(mut self, excluded_keys: &'a [&'a str]) -> Self {
        self.excluded_keys = excluded_keys;
        self
    }

    /// Set the extra trailing tokens.
    pub fn with_extra(mut self, extra: &'a [&'a str]) -> Self {
        self.extra = extra;
        self
    }

    /// Build the bytes to sign.
    ///
    /// The body is appended as raw bytes, so the output isn't necessarily UTF-8.
    pub fn build(&self, req: &SigningRequest<'_>, params: &Params, secret: &str) -> Vec<u8> {
        let pairs = signed_pairs(params, self.excluded_keys);
        let query = concat_pairs(&pairs);
        let body_included = req.body_included();
        let body: &[u8] = if body_included { req.body() } else { &[] };

        debug!(
            "canonicalizing {} {}: {} params signed, body included: {}",
            req.method(),
            self.path,
            pairs.len(),
            body_included
        );

        let mut payload = Vec::with_capacity(
            self.path.len()
                + query.len()
                + body.len()
                + self.extra.iter().map(|e| e.len()).sum::<usize>(),
        );
        payload.extend_from_slice(self.path.as_bytes());
        payload.extend_from_slice(query.as_bytes());
        payload.extend_from_slice(body);
        for token in self.extra {
            payload.extend_from_slice(token.as_bytes());
        }

        // Only the unwrapped payload is ever logged.
        trace!("canonical payload: {}", String::from_utf8_lossy(&payload));

        let mut s = Vec::with_capacity(payload.len() + 2 * secret.len());
        s.extend_from_slice(secret.as_bytes());
        s.extend_from_slice(&payload);
        s.extend_from_slice(secret.as_bytes());
        s
    }
}
