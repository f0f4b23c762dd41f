//! TikTok Shop Global API signer.

use http::header::HeaderName;
use http::HeaderValue;
use http::Request;
use log::debug;
use tiksign_core::hash::hex_hmac_sha256;
use tiksign_core::time::now_timestamp;
use tiksign_core::{Params, Result, SigningRequest, StringToSign};

use super::constants::*;
use super::credential::Credential;

/// GlobalSigner implements the TikTok Shop Global API signature.
///
/// Differs from [`crate::ShopSigner`] in three ways:
///
/// - a leading `/global` is stripped from paths starting with `/global/`
/// - no parameter key is excluded
/// - the timestamp is signed, and the signature goes to `x-tt-signature`
#[derive(Debug, Clone)]
pub struct GlobalSigner {
    credential: Credential,
}

impl GlobalSigner {
    /// Create a signer with the app secret.
    pub fn new(app_secret: impl Into<String>) -> Self {
        Self::from_credential(Credential::new(app_secret))
    }

    /// Create a signer from a loaded credential.
    pub fn from_credential(credential: Credential) -> Self {
        Self { credential }
    }

    /// Compute the lowercase hex signature.
    pub fn signature(&self, req: &SigningRequest<'_>, query: &Params, timestamp: i64) -> String {
        let secret = &self.credential.app_secret;
        let timestamp = timestamp.to_string();
        let string_to_sign = StringToSign::new(canonicalize_path(req.path()))
            .with_extra(&[timestamp.as_str()])
            .build(req, query, secret);

        hex_hmac_sha256(secret.as_bytes(), &string_to_sign)
    }

    /// Sign the request, returning it with `x-tt-signature` set.
    ///
    /// `query` is only read. An existing `x-tt-signature` header is replaced.
    pub fn sign<B: AsRef<[u8]>>(
        &self,
        mut req: Request<B>,
        query: &Params,
        timestamp: i64,
    ) -> Result<Request<B>> {
        let signature = self.signature(&SigningRequest::from_request(&req), query, timestamp);

        let mut value = HeaderValue::try_from(signature)?;
        value.set_sensitive(true);
        req.headers_mut()
            .insert(HeaderName::from_static(X_TT_SIGNATURE), value);

        debug!(
            "signed global request {} {} at {timestamp}",
            req.method(),
            req.uri().path()
        );
        Ok(req)
    }

    /// Sign the request with the current Unix time as timestamp.
    ///
    /// The caller must send the same timestamp to the platform, so prefer
    /// [`GlobalSigner::sign`] when the timestamp is already part of the query.
    pub fn sign_now<B: AsRef<[u8]>>(&self, req: Request<B>, query: &Params) -> Result<Request<B>> {
        self.sign(req, query, now_timestamp())
    }
}

/// Strip `/global` from paths starting with `/global/`, keeping the slash.
///
/// `/global` alone, or `/globalx/...`, is left as is.
fn canonicalize_path(path: &str) -> &str {
    if path.starts_with(GLOBAL_PATH_PREFIX) {
        &path[GLOBAL_PATH_PREFIX.len() - 1..]
    } else {
        path
    }
}
