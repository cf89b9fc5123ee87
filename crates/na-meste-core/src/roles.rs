//! User roles.
//!
//! A user holds exactly one role, assigned at registration. Roles are a flat set:
//! route guards compare them by equality and no role implies another.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Scanner,
    Student,
}

/// Every role, in declaration order.
pub const ALL_ROLES: [Role; 3] = [Role::Teacher, Role::Scanner, Role::Student];

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Scanner => "scanner",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    /// Case-sensitive: `"Teacher"` is not a role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teacher" => Ok(Role::Teacher),
            "scanner" => Ok(Role::Scanner),
            "student" => Ok(Role::Student),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = RoleParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles() {
        for role in ALL_ROLES {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Teacher".parse::<Role>().is_err());
        assert!("SCANNER".parse::<Role>().is_err());
        assert!(" student".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Role::Scanner).unwrap(), "\"scanner\"");
        let role: Role = serde_json::from_str("\"teacher\"").unwrap();
        assert_eq!(role, Role::Teacher);
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }
}
