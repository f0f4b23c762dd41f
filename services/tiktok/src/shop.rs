//! TikTok Shop API signer.

use http::request::Parts;
use http::Request;
use log::debug;
use serde_json::Value;
use tiksign_core::hash::hex_hmac_sha256;
use tiksign_core::{Params, Result, SignRequest, SigningRequest, StringToSign};

use super::constants::*;
use super::credential::Credential;

/// ShopSigner implements the TikTok Shop API signature.
///
/// The signature travels in the parameter map under `sign`; the request itself
/// is never modified.
///
/// - [Sign your API request](https://partner.tiktokshop.com/doc/page/274638)
#[derive(Debug, Clone)]
pub struct ShopSigner {
    credential: Credential,
}

impl ShopSigner {
    /// Create a signer with the app secret.
    pub fn new(app_secret: impl Into<String>) -> Self {
        Self::from_credential(Credential::new(app_secret))
    }

    /// Create a signer from a loaded credential.
    pub fn from_credential(credential: Credential) -> Self {
        Self { credential }
    }

    /// Compute the lowercase hex signature without touching `params`.
    ///
    /// `sign`, `access_token` and `x-tts-access-token` never take part, and the
    /// path is used as is.
    pub fn signature(&self, req: &SigningRequest<'_>, params: &Params) -> String {
        let secret = &self.credential.app_secret;
        let string_to_sign = StringToSign::new(req.path())
            .with_excluded_keys(SHOP_EXCLUDED_KEYS)
            .build(req, params, secret);

        hex_hmac_sha256(secret.as_bytes(), &string_to_sign)
    }

    /// Sign the request, setting `params["sign"]`.
    ///
    /// Any existing `sign` entry is overwritten; no other key is added or
    /// changed. The request is handed back untouched.
    pub fn sign<B: AsRef<[u8]>>(&self, req: Request<B>, params: &mut Params) -> Request<B> {
        let signature = self.signature(&SigningRequest::from_request(&req), params);
        insert_signature(params, signature);

        debug!("signed shop request {} {}", req.method(), req.uri().path());
        req
    }
}

impl SignRequest for ShopSigner {
    fn sign_request(&self, parts: &mut Parts, body: &[u8], params: &mut Params) -> Result<()> {
        let signature = self.signature(&SigningRequest::new(parts, body), params);
        insert_signature(params, signature);

        debug!("signed shop request {} {}", parts.method, parts.uri.path());
        Ok(())
    }
}

fn insert_signature(params: &mut Params, signature: String) {
    params.insert(SIGN_PARAM.to_string(), Value::String(signature));
}
