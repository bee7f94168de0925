//! Portal client configuration

use crate::role::Role;
use config::ConfigError;
use serde::{Deserialize, Serialize};

/// Top level configuration shared by the browser app and the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Backend API settings
    pub api: ApiConfig,

    /// Client storage keys
    pub storage: StorageKeys,

    /// Navigation targets and guarded prefixes
    pub routes: RouteConfig,
}

/// Backend API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend; empty means same origin
    pub base_url: String,

    /// Path of the login endpoint
    pub login_endpoint: String,

    /// Transport timeout in seconds (native only, ignored in the browser)
    pub timeout_secs: Option<u64>,
}

/// Keys the session is stored under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub token: String,
    pub role: String,
}

/// Navigation targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Login page, also the fallback for rejected page loads
    pub login: String,
    pub admin_prefix: String,
    pub staff_prefix: String,
    pub admin_dashboard: String,
    pub staff_dashboard: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            login_endpoint: "/api/v1/login".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            token: "token".to_string(),
            role: "userType".to_string(),
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login: "/".to_string(),
            admin_prefix: "/admin".to_string(),
            staff_prefix: "/staff".to_string(),
            admin_dashboard: "/admin/dashboard".to_string(),
            staff_dashboard: "/staff/dashboard".to_string(),
        }
    }
}

impl RouteConfig {
    /// Dashboard a freshly signed-in user is sent to
    pub fn dashboard_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_dashboard,
            Role::Staff => &self.staff_dashboard,
        }
    }

    /// Path prefix reserved for a role
    pub fn prefix_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_prefix,
            Role::Staff => &self.staff_prefix,
        }
    }
}

impl PortalConfig {
    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        use self::validators::*;

        if !self.api.base_url.is_empty() {
            validate_url(&self.api.base_url, "api.base_url")?;
        }
        validate_path(&self.api.login_endpoint, "api.login_endpoint")?;
        if let Some(timeout) = self.api.timeout_secs {
            validate_range(timeout, 1, 600, "api.timeout_secs")?;
        }

        validate_not_empty(&self.storage.token, "storage.token")?;
        validate_not_empty(&self.storage.role, "storage.role")?;
        if self.storage.token == self.storage.role {
            return Err(ConfigError::Message(
                "storage: token and role keys must differ".to_string(),
            ));
        }

        validate_path(&self.routes.login, "routes.login")?;
        validate_prefix(&self.routes.admin_prefix, &self.routes.login, "routes.admin_prefix")?;
        validate_prefix(&self.routes.staff_prefix, &self.routes.login, "routes.staff_prefix")?;
        if same_path(&self.routes.admin_prefix, &self.routes.staff_prefix) {
            return Err(ConfigError::Message(
                "routes: admin and staff prefixes must differ".to_string(),
            ));
        }
        validate_path(&self.routes.admin_dashboard, "routes.admin_dashboard")?;
        validate_path(&self.routes.staff_dashboard, "routes.staff_dashboard")?;
        Ok(())
    }
}

/// Common validation helpers
pub mod validators {
    use config::ConfigError;

    /// Validate that a string is not empty
    pub fn validate_not_empty(value: &str, field: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::Message(format!("{field}: cannot be empty")));
        }
        Ok(())
    }

    /// Validate URL format
    pub fn validate_url(url: &str, field: &str) -> Result<(), ConfigError> {
        url::Url::parse(url)
            .map_err(|e| ConfigError::Message(format!("{field}: invalid URL - {e}")))?;
        Ok(())
    }

    /// Validate that a value is an absolute URL path
    pub fn validate_path(path: &str, field: &str) -> Result<(), ConfigError> {
        if !path.starts_with('/') {
            return Err(ConfigError::Message(format!(
                "{field}: must start with '/'"
            )));
        }
        Ok(())
    }

    /// Validate a role prefix: a path narrower than `/` that is not the login page
    pub fn validate_prefix(prefix: &str, login: &str, field: &str) -> Result<(), ConfigError> {
        validate_path(prefix, field)?;
        if prefix.trim_end_matches('/').is_empty() {
            return Err(ConfigError::Message(format!(
                "{field}: must not cover every page"
            )));
        }
        if same_path(prefix, login) {
            return Err(ConfigError::Message(format!(
                "{field}: must differ from routes.login"
            )));
        }
        Ok(())
    }

    /// Paths equal up to a trailing slash
    pub fn same_path(a: &str, b: &str) -> bool {
        a.trim_end_matches('/') == b.trim_end_matches('/')
    }

    /// Validate that a value is within range
    pub fn validate_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        min: T,
        max: T,
        field: &str,
    ) -> Result<(), ConfigError> {
        if value < min || value > max {
            return Err(ConfigError::Message(format!(
                "{field}: must be between {min} and {max}"
            )));
        }
        Ok(())
    }
}
