//! Auth-related types and configuration.

use serde::{Deserialize, Deserializer, Serialize};

/// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Validated caller identity from a verified JWT
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

/// Marketplace role stored on a user record.
///
/// The role field in the users collection is free text written by the
/// signup flow; anything outside these three values resolves to no role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Tenant,
    Owner,
    Admin,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "Tenant" => Some(Role::Tenant),
            "Owner" => Some(Role::Owner),
            "Admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tenant => "Tenant",
            Role::Owner => "Owner",
            Role::Admin => "Admin",
        }
    }
}

/// Deserialize an optional role field, mapping unknown strings to `None`
/// rather than failing the whole document.
pub fn deserialize_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(Role::parse))
}

/// Auth configuration loaded from environment
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!(Role::parse("Tenant"), Some(Role::Tenant));
        assert_eq!(Role::parse("Owner"), Some(Role::Owner));
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
    }

    #[test]
    fn unknown_role_strings_resolve_to_none() {
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("SuperUser"), None);
    }

    #[test]
    fn role_round_trips_through_as_str() {
        for role in [Role::Tenant, Role::Owner, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn deserialize_role_tolerates_unknown_values() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "deserialize_role")]
            role: Option<Role>,
        }

        let probe: Probe = serde_json::from_str(r#"{"role": "Owner"}"#).unwrap();
        assert_eq!(probe.role, Some(Role::Owner));

        let probe: Probe = serde_json::from_str(r#"{"role": "landlord"}"#).unwrap();
        assert_eq!(probe.role, None);

        let probe: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(probe.role, None);
    }
}
