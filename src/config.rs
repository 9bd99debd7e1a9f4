//! App configuration resolved from environment-style key lookups.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SESSION_USER_ID: &str = "user1";
pub const DEFAULT_NOTIFICATION_TTL_MS: u64 = 4000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fixture user treated as the signed-in user.
    pub session_user_id: String,
    /// How long a toast stays visible before auto-dismissal.
    pub notification_ttl_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_user_id: DEFAULT_SESSION_USER_ID.to_owned(),
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
        }
    }
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `STUDIO_SESSION_USER`: default `user1`
    /// - `STUDIO_NOTIFICATION_TTL_MS`: default 4000, must be > 0
    ///
    /// In the browser there is no process environment and every key reads as
    /// unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let session_user_id = match lookup("STUDIO_SESSION_USER") {
            None => DEFAULT_SESSION_USER_ID.to_owned(),
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::Empty { key: "STUDIO_SESSION_USER" }),
            Some(raw) => raw.trim().to_owned(),
        };
        let notification_ttl_ms = match lookup("STUDIO_NOTIFICATION_TTL_MS") {
            None => DEFAULT_NOTIFICATION_TTL_MS,
            Some(raw) => parse_positive_u64("STUDIO_NOTIFICATION_TTL_MS", &raw)?,
        };
        Ok(Self { session_user_id, notification_ttl_ms })
    }

    /// Like [`AppConfig::from_env`], but logs invalid values and falls back
    /// to defaults.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            leptos::logging::warn!("config error, using defaults: {e}");
            Self::default()
        })
    }
}

fn parse_positive_u64(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ConfigError::Invalid { key, value: raw.to_owned() }),
    }
}
