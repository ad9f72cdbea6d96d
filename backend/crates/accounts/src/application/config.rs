//! Application Configuration
//!
//! Configuration for the Accounts application layer.

use std::time::Duration;

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

/// Accounts application configuration
#[derive(Debug, Clone)]
pub struct AccountsConfig {
    /// Session cookie (name, flags, Max-Age)
    pub cookie: CookieConfig,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL (1 week)
    pub session_ttl: Duration,
    /// Shared key the identity gateway must present to open sessions
    pub gateway_key: Vec<u8>,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        let session_ttl = Duration::from_secs(7 * 24 * 3600); // 1 week

        let mut cookie = CookieConfig::named("reward_session");
        cookie.max_age_secs = Some(session_ttl.as_secs() as i64);

        Self {
            cookie,
            session_secret: [0u8; 32],
            session_ttl,
            // Empty means "not configured"; session issuance always fails
            gateway_key: Vec::new(),
        }
    }
}

impl AccountsConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, fixed gateway key)
    pub fn development() -> Self {
        let mut config = Self::with_random_secret();
        config.cookie.secure = false;
        config.gateway_key = b"dev-gateway-key".to_vec();
        config
    }

    /// Get session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }
}
