use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Identity handed over by the external identity provider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub user_id: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref user_id) = self.user_id
            && user_id.trim().is_empty()
        {
            return Err(ConfigError::auth("auth.user_id cannot be blank"));
        }
        Ok(())
    }
}
