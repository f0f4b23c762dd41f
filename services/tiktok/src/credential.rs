// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use tiksign_core::utils::Redact;

/// Credential for TikTok Shop apps.
#[derive(Clone, Default)]
pub struct Credential {
    /// App key, only used to identify the app in logs.
    pub app_key: Option<String>,
    /// App secret used both as HMAC key and as wrap text.
    pub app_secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(app_secret: impl Into<String>) -> Self {
        Self {
            app_key: None,
            app_secret: app_secret.into(),
        }
    }

    /// Set the app key.
    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("app_key", &Redact::from(&self.app_key))
            .field("app_secret", &Redact::from(&self.app_secret))
            .finish()
    }
}
