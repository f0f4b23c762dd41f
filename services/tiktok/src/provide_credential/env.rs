use crate::{constants::*, Credential};
use tiksign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads TikTok Shop credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `TIKTOK_APP_SECRET`: The app secret
/// - `TIKTOK_APP_KEY`: The app key (optional)
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let Some(app_secret) = ctx.env_var(TIKTOK_APP_SECRET) else {
            return Ok(None);
        };

        Ok(Some(Credential {
            app_key: ctx.env_var(TIKTOK_APP_KEY),
            app_secret,
        }))
    }
}
