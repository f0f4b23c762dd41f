use crate::Credential;
use tiksign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed app secret.
///
/// Use it when the secret is already at hand and needs no dynamic loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with the app secret.
    pub fn new(app_secret: &str) -> Self {
        Self {
            credential: Credential::new(app_secret),
        }
    }

    /// Set the app key.
    pub fn with_app_key(mut self, app_key: &str) -> Self {
        self.credential = self.credential.with_app_key(app_key);
        self
    }
}

impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}
