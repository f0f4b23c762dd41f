//! Core components for signing TikTok Shop API requests.
//!
//! This crate provides the shared canonicalization algorithm and the traits
//! that the service signers in `tiksign-tiktok` build upon.
//!
//! ## Overview
//!
//! Every request is signed the same way:
//!
//! 1. Turn the path, the sorted scalar parameters and (sometimes) the body
//!    into a single byte string, see [`StringToSign`].
//! 2. Wrap it with the app secret.
//! 3. HMAC-SHA256 it with the app secret as key, see [`hash::hex_hmac_sha256`].
//!
//! Service families only differ in how they adjust the path, which parameter
//! keys they exclude, which extra tokens they append and where they put the
//! resulting signature.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use tiksign_core::hash::hex_hmac_sha256;
//! use tiksign_core::{Params, SigningRequest, StringToSign};
//!
//! let req = http::Request::get("/api/products/search")
//!     .body(Vec::<u8>::new())
//!     .unwrap();
//! let params: Params = serde_json::from_value(json!({"keyword": "shoe", "page": 1})).unwrap();
//!
//! let view = SigningRequest::from_request(&req);
//! let string_to_sign = StringToSign::new(view.path()).build(&view, &params, "s3cr3t");
//! assert_eq!(string_to_sign, b"s3cr3t/api/products/searchkeywordshoepage1s3cr3t");
//!
//! let signature = hex_hmac_sha256(b"s3cr3t", &string_to_sign);
//! assert_eq!(signature.len(), 64);
//! ```
//!
//! ## Traits
//!
//! - [`SignRequest`]: signs a request given its mutable parameter map
//! - [`ProvideCredential`]: loads credentials from a [`Context`]
//! - [`Env`]: environment variable access
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC helpers
//! - [`time`]: Unix timestamps
//! - [`utils`]: data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest};
mod chain;
pub use chain::ProvideCredentialChain;

mod params;
pub use params::{scalar_to_string, Params};
mod request;
pub use request::SigningRequest;
mod canonical;
pub use canonical::{query_concat, StringToSign};
