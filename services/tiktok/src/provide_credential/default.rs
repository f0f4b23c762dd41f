use tiksign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use crate::credential::Credential;
use crate::provide_credential::EnvCredentialProvider;

/// DefaultCredentialProvider will try to load credential from different sources.
///
/// Resolution order:
///
/// 1. Environment variables
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    ///
    /// # Example
    ///
    /// ```
    /// use tiksign_tiktok::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::new()
    ///     .push_front(StaticCredentialProvider::new("app_secret"));
    /// ```
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = Credential> + 'static,
    ) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::StaticCredentialProvider;
    use std::collections::HashMap;
    use tiksign_core::StaticEnv;

    #[test]
    fn test_default_loader_without_env() {
        let ctx = Context::new().with_env(StaticEnv::default());

        let credential = DefaultCredentialProvider::new()
            .provide_credential(&ctx)
            .unwrap();
        assert!(credential.is_none());
    }

    #[test]
    fn test_default_loader_with_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(TIKTOK_APP_SECRET.to_string(), "s3cr3t".to_string())]),
        });

        let credential = DefaultCredentialProvider::new()
            .provide_credential(&ctx)
            .unwrap()
            .unwrap();
        assert_eq!(credential.app_secret, "s3cr3t");
    }

    #[test]
    fn test_push_front_wins() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(TIKTOK_APP_SECRET.to_string(), "from_env".to_string())]),
        });

        let credential = DefaultCredentialProvider::new()
            .push_front(StaticCredentialProvider::new("static"))
            .provide_credential(&ctx)
            .unwrap()
            .unwrap();
        assert_eq!(credential.app_secret, "static");
    }
}
