//! TikTok Shop signing implementation for tiksign.
//!
//! This crate signs requests for the two TikTok Shop API families:
//!
//! - [`ShopSigner`]: Shop API, signature written into the parameter map as `sign`.
//! - [`GlobalSigner`]: Global API, signature written into the `x-tt-signature` header.
//!
//! Both wrap the canonical string with the app secret and sign it with
//! HMAC-SHA256, see [`tiksign_core::StringToSign`].
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use tiksign_core::{Context, Params, ProvideCredential, StaticEnv};
//! use tiksign_tiktok::{DefaultCredentialProvider, ShopSigner, StaticCredentialProvider};
//!
//! # fn main() -> tiksign_core::Result<()> {
//! let ctx = Context::new().with_env(StaticEnv::default());
//!
//! let credential = DefaultCredentialProvider::new()
//!     .push_front(StaticCredentialProvider::new("s3cr3t"))
//!     .provide_credential(&ctx)?
//!     .ok_or_else(|| tiksign_core::Error::credential_invalid("no app secret found"))?;
//! let signer = ShopSigner::from_credential(credential);
//!
//! let req = http::Request::get("https://open-api.tiktokglobalshop.com/api/products/search")
//!     .body(Vec::<u8>::new())?;
//! let mut params: Params = Params::new();
//! params.insert("keyword".to_string(), json!("shoe"));
//! params.insert("page".to_string(), json!(1));
//!
//! let _req = signer.sign(req, &mut params);
//! assert_eq!(
//!     params["sign"],
//!     json!("b4fc23315e1836bc2a3d8557d5de9c8f8e42b002fb2210421465c688f7b4cba8")
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export TIKTOK_APP_KEY=your-app-key
//! export TIKTOK_APP_SECRET=your-app-secret
//! ```
//!
//! Read them through a [`tiksign_core::Context`] configured with
//! [`tiksign_core::OsEnv`] and [`DefaultCredentialProvider`] or
//! [`ConfigCredentialProvider`].

#![warn(missing_docs)]

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, DefaultCredentialProvider, EnvCredentialProvider,
    StaticCredentialProvider,
};

mod shop;
pub use shop::ShopSigner;

mod global;
pub use global::GlobalSigner;

mod constants;
