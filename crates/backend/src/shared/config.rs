use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    /// Where the configuration came from, for the startup log
    #[serde(skip)]
    pub source: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Any non-empty credentials log in and receive the fixed demo token
    Demo,
    /// One admin account, argon2 password, HS256 access tokens
    Jwt,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub mode: AuthMode,
    pub login_delay_ms: u64,
    pub access_token_hours: i64,
    pub refresh_token_days: i64,
    pub admin_email: String,
    #[serde(default)]
    pub admin_password_hash: String,
    #[serde(default)]
    pub jwt_secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[auth]
mode = "demo"
login_delay_ms = 1200
access_token_hours = 24
refresh_token_days = 90
admin_email = "admin@demo.com"
admin_password_hash = ""
jwt_secret = ""

[logging]
level = "info"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// Runs before tracing is initialized, so the source is recorded in
/// `Config::source` and logged by the caller.
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                let mut config: Config = toml::from_str(&contents)?;
                config.source = config_path.display().to_string();
                return Ok(config);
            }
        }
    }

    default_config()
}

pub fn default_config() -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(DEFAULT_CONFIG)?;
    config.source = "embedded default".into();
    Ok(config)
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.auth.mode, AuthMode::Demo);
        assert_eq!(config.auth.login_delay_ms, 1200);
        assert_eq!(config.auth.admin_email, "admin@demo.com");
        assert!(config.auth.jwt_secret.is_empty());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_jwt_mode_parses() {
        let toml_src = DEFAULT_CONFIG.replace(r#"mode = "demo""#, r#"mode = "jwt""#);
        let config: Config = toml::from_str(&toml_src).unwrap();
        assert_eq!(config.auth.mode, AuthMode::Jwt);
    }

    #[test]
    fn test_optional_secrets_default_to_empty() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            [auth]
            mode = "demo"
            login_delay_ms = 0
            access_token_hours = 1
            refresh_token_days = 1
            admin_email = "ops@instafix.test"
            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert!(config.auth.admin_password_hash.is_empty());
        assert!(config.auth.jwt_secret.is_empty());
    }
}
