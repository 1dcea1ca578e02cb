use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::NavError;

/// The marketplace persona the user is currently acting as.
///
/// A user who has not picked a side yet carries no role; that state is
/// `Option<Role>` everywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Posts campaign briefs and browses channel listings.
    Advertiser,
    /// Lists channel ad inventory and reviews incoming briefs.
    Publisher,
}

impl Role {
    /// All roles in a fixed order.
    pub const ALL: [Role; 2] = [Role::Advertiser, Role::Publisher];

    /// Stable string form shared with the auth store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Advertiser => "advertiser",
            Role::Publisher => "publisher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "advertiser" => Ok(Role::Advertiser),
            "publisher" => Ok(Role::Publisher),
            other => Err(NavError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_forms_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("moderator".parse::<Role>().is_err());
        assert!("Advertiser".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Publisher).unwrap(), "\"publisher\"");
        let role: Role = serde_json::from_str("\"advertiser\"").unwrap();
        assert_eq!(role, Role::Advertiser);
    }
}
