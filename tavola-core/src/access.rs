//! Caller access levels.
//!
//! Access levels form a total order. A caller at a given level can use every
//! tool available to the levels below it, so authorization reduces to a rank
//! comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Authorization level of a caller.
///
/// Levels are hierarchical:
/// - `Guest`: unauthenticated callers, read-only public data
/// - `User`: authenticated customers, can manage their own reservations
/// - `Owner`: restaurant owners, can view and manage their restaurant's data
/// - `Admin`: platform administrators, full access
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    Guest,
    User,
    Owner,
    Admin,
}

impl AccessLevel {
    /// All levels, lowest first.
    pub const ALL: [AccessLevel; 4] = [
        AccessLevel::Guest,
        AccessLevel::User,
        AccessLevel::Owner,
        AccessLevel::Admin,
    ];

    /// Numeric rank in the hierarchy (`Guest` = 0 .. `Admin` = 3).
    pub fn rank(self) -> u8 {
        match self {
            AccessLevel::Guest => 0,
            AccessLevel::User => 1,
            AccessLevel::Owner => 2,
            AccessLevel::Admin => 3,
        }
    }

    /// Check whether a caller at this level satisfies `required`.
    ///
    /// True iff `self.rank() >= required.rank()`. Reflexive, and monotonic in
    /// the caller level: raising the caller's level never loses access.
    pub fn has_access(self, required: AccessLevel) -> bool {
        self.rank() >= required.rank()
    }

    /// Lowercase wire name of the level (`"guest"`, `"user"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            AccessLevel::Guest => "guest",
            AccessLevel::User => "user",
            AccessLevel::Owner => "owner",
            AccessLevel::Admin => "admin",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown access level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid access level '{0}', valid levels: guest, user, owner, admin")]
pub struct ParseAccessLevelError(pub String);

impl FromStr for AccessLevel {
    type Err = ParseAccessLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(AccessLevel::Guest),
            "user" => Ok(AccessLevel::User),
            "owner" => Ok(AccessLevel::Owner),
            "admin" => Ok(AccessLevel::Admin),
            _ => Err(ParseAccessLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Rank and ordering tests =====

    #[test]
    fn test_ranks_are_total_order() {
        assert_eq!(AccessLevel::Guest.rank(), 0);
        assert_eq!(AccessLevel::User.rank(), 1);
        assert_eq!(AccessLevel::Owner.rank(), 2);
        assert_eq!(AccessLevel::Admin.rank(), 3);
        assert!(AccessLevel::Guest < AccessLevel::User);
        assert!(AccessLevel::User < AccessLevel::Owner);
        assert!(AccessLevel::Owner < AccessLevel::Admin);
    }

    #[test]
    fn test_has_access_matches_rank_comparison() {
        for caller in AccessLevel::ALL {
            for required in AccessLevel::ALL {
                assert_eq!(
                    caller.has_access(required),
                    caller.rank() >= required.rank(),
                    "{} vs {}",
                    caller,
                    required
                );
            }
        }
    }

    #[test]
    fn test_has_access_is_reflexive() {
        for level in AccessLevel::ALL {
            assert!(level.has_access(level));
        }
    }

    #[test]
    fn test_has_access_is_monotonic() {
        // A higher caller level never loses access a lower level had.
        for required in AccessLevel::ALL {
            for pair in AccessLevel::ALL.windows(2) {
                if pair[0].has_access(required) {
                    assert!(pair[1].has_access(required));
                }
            }
        }
    }

    // ===== Parse and display tests =====

    #[test]
    fn test_parse_valid_levels() {
        assert_eq!("guest".parse::<AccessLevel>().unwrap(), AccessLevel::Guest);
        assert_eq!("user".parse::<AccessLevel>().unwrap(), AccessLevel::User);
        assert_eq!("OWNER".parse::<AccessLevel>().unwrap(), AccessLevel::Owner);
        assert_eq!(
            " Admin ".parse::<AccessLevel>().unwrap(),
            AccessLevel::Admin
        );
    }

    #[test]
    fn test_parse_invalid_level() {
        let err = "superuser".parse::<AccessLevel>().unwrap_err();
        assert!(err.to_string().contains("superuser"));
        assert!(err.to_string().contains("guest, user, owner, admin"));
    }

    #[test]
    fn test_display_roundtrip() {
        for level in AccessLevel::ALL {
            assert_eq!(level.to_string().parse::<AccessLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&AccessLevel::Owner).unwrap(),
            "\"owner\""
        );
        let level: AccessLevel = serde_json::from_str("\"guest\"").unwrap();
        assert_eq!(level, AccessLevel::Guest);
    }

    #[test]
    fn test_default_is_guest() {
        assert_eq!(AccessLevel::default(), AccessLevel::Guest);
    }
}
