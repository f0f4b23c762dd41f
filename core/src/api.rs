use crate::{Context, Params, Result};
use http::request::Parts;
use std::fmt::Debug;

/// ProvideCredential loads the signing credential from the environment.
///
/// Returns `Ok(None)` when this source has nothing to offer, so that a
/// [`crate::ProvideCredentialChain`] can move on to the next one.
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load credential from the given context.
    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest signs a request given its mutable parameter map.
///
/// Implementations read `parts` and `body`, and are expected to have placed
/// the signature once this returns: either into `params`, which the caller
/// then serializes into the query string or body, or into `parts`.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Sign the request.
    fn sign_request(&self, parts: &mut Parts, body: &[u8], params: &mut Params) -> Result<()>;
}
