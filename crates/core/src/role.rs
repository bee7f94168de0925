//! Dashboard role selected at login

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which dashboard a signed-in user is routed to.
///
/// The role is picked by the user on the login form and stored next to the
/// token. It only drives client-side routing; the backend is responsible for
/// authorizing every request made with the token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Staff,
}

impl Role {
    /// All roles, in the order the login form offers them
    pub const ALL: [Role; 2] = [Role::Admin, Role::Staff];

    /// Storage representation of the role marker
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
        }
    }

    /// Human readable label for form controls
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Staff => "Staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored or user supplied role marker is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "staff" => Ok(Role::Staff),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_markers() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("staff".parse::<Role>(), Ok(Role::Staff));
    }

    #[test]
    fn rejects_unknown_and_differently_cased_markers() {
        assert!("Admin".parse::<Role>().is_err());
        assert!("undefined".parse::<Role>().is_err());
        assert_eq!("".parse::<Role>(), Err(UnknownRole(String::new())));
    }

    #[test]
    fn defaults_to_staff() {
        assert_eq!(Role::default(), Role::Staff);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}
