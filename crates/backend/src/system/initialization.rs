use anyhow::Result;

use crate::shared::config::{AuthConfig, AuthMode};
use crate::system::auth::{jwt, password};

/// Password hashed for the admin account when jwt mode has no hash configured
pub const DEFAULT_ADMIN_PASSWORD: &str = "12345678";

/// Fills in auth secrets missing from the configuration.
///
/// An empty `jwt_secret` is generated for this run, so issued tokens do
/// not survive a restart. In jwt mode an empty `admin_password_hash` is
/// replaced by the hash of the default password.
pub fn prepare_auth(config: &mut AuthConfig) -> Result<()> {
    if config.jwt_secret.trim().is_empty() {
        config.jwt_secret = jwt::generate_jwt_secret();
        tracing::info!("Generated a JWT secret for this run");
    }

    if config.mode == AuthMode::Jwt && config.admin_password_hash.trim().is_empty() {
        config.admin_password_hash = password::hash_password(DEFAULT_ADMIN_PASSWORD)?;

        tracing::warn!("===============================================");
        tracing::warn!("  No admin password hash configured!");
        tracing::warn!("  Email: {}", config.admin_email);
        tracing::warn!("  Password: {}", DEFAULT_ADMIN_PASSWORD);
        tracing::warn!("  Set auth.admin_password_hash in config.toml");
        tracing::warn!("===============================================");
    }

    tracing::info!("Auth mode: {:?}", config.mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;

    #[test]
    fn test_demo_mode_only_gets_a_secret() {
        let mut auth = default_config().unwrap().auth;
        prepare_auth(&mut auth).unwrap();
        assert!(!auth.jwt_secret.is_empty());
        assert!(auth.admin_password_hash.is_empty());
    }

    #[test]
    fn test_jwt_mode_hashes_default_password() {
        let mut auth = default_config().unwrap().auth;
        auth.mode = AuthMode::Jwt;
        auth.jwt_secret = "configured".into();
        prepare_auth(&mut auth).unwrap();
        assert_eq!(auth.jwt_secret, "configured");
        assert!(password::verify_password(DEFAULT_ADMIN_PASSWORD, &auth.admin_password_hash).unwrap());
    }
}
