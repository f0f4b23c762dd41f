use std::sync::Arc;

use crate::config::Config;
use crate::credential::Credential;
use tiksign_core::{Context, Error, ProvideCredential, Result};

/// ConfigCredentialProvider will load credential from config.
///
/// Unset config fields fall back to the environment. An app key without an
/// app secret is a configuration error rather than a missing credential.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new provider via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);

        match (config.app_key, config.app_secret) {
            (app_key, Some(app_secret)) => Ok(Some(Credential {
                app_key,
                app_secret,
            })),
            (Some(_), None) => Err(Error::config_invalid(
                "app_key is configured but app_secret is missing",
            )),
            (None, None) => Ok(None),
        }
    }
}
