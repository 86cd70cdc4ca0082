//! Tool permission table.
//!
//! Maps each registered tool name to the minimum [`AccessLevel`] required to
//! invoke it. The table is built once at startup and never mutated afterwards;
//! tools that are not in the table require [`AccessLevel::Admin`], so an
//! unregistered name always fails closed.

use crate::access::AccessLevel;
use std::collections::HashMap;

/// Error raised when a caller's level is insufficient for a tool.
///
/// Carries the tool name and both levels so the caller can tell a denial
/// apart from a missing entity or a backend outage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("access denied: '{tool_name}' requires '{required_level}' level, but caller has '{user_level}' level")]
pub struct AuthorizationError {
    /// Name of the tool that was denied.
    pub tool_name: String,
    /// The caller's current access level.
    pub user_level: AccessLevel,
    /// Minimum level the tool requires.
    pub required_level: AccessLevel,
}

/// Immutable mapping from tool name to minimum required access level.
///
/// # Example
///
/// ```rust
/// use tavola_core::{AccessLevel, PermissionTable};
///
/// let table = PermissionTable::standard();
/// assert_eq!(table.required_level("search_restaurants"), AccessLevel::Guest);
/// assert_eq!(table.required_level("list_users"), AccessLevel::Admin);
/// // Unknown tools fail closed.
/// assert_eq!(table.required_level("drop_database"), AccessLevel::Admin);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PermissionTable {
    map: HashMap<String, AccessLevel>,
}

impl PermissionTable {
    /// An empty table. Every lookup falls back to `Admin`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard table covering every tool in the catalogue.
    pub fn standard() -> Self {
        let entries: &[(&str, AccessLevel)] = &[
            // Restaurant tools - public access
            ("search_restaurants", AccessLevel::Guest),
            ("get_restaurant_info", AccessLevel::Guest),
            ("get_restaurant_by_name", AccessLevel::Guest),
            ("get_restaurant_menu", AccessLevel::Guest),
            ("get_restaurant_schedule", AccessLevel::Guest),
            ("get_restaurant_sections", AccessLevel::Guest),
            ("get_section_tables", AccessLevel::Guest),
            ("get_nearby_restaurants", AccessLevel::Guest),
            // Menu tools - public read access
            ("get_menu_dishes", AccessLevel::Guest),
            ("get_dish_details", AccessLevel::Guest),
            ("search_dishes", AccessLevel::Guest),
            ("get_menu_categories", AccessLevel::Guest),
            ("get_dishes_by_category", AccessLevel::Guest),
            // Availability checks stay public so guests can browse slots
            ("check_table_availability", AccessLevel::Guest),
            ("get_available_time_slots", AccessLevel::Guest),
            // Reservation tools - authenticated customers
            ("create_reservation", AccessLevel::User),
            ("get_reservation", AccessLevel::User),
            ("cancel_reservation", AccessLevel::User),
            ("get_user_reservations", AccessLevel::User),
            // Owner tools
            ("get_restaurant_reservations", AccessLevel::Owner),
            ("update_reservation_status", AccessLevel::Owner),
            ("get_restaurant_analytics", AccessLevel::Owner),
            ("get_reservation_statistics", AccessLevel::Owner),
            // User management - admin only
            ("list_users", AccessLevel::Admin),
            ("get_user_by_email", AccessLevel::Admin),
            ("get_user_info", AccessLevel::Admin),
            // Context management - callable by anyone
            ("set_access_context", AccessLevel::Guest),
            ("get_allowed_tools", AccessLevel::Guest),
        ];

        Self {
            map: entries
                .iter()
                .map(|(name, level)| (name.to_string(), *level))
                .collect(),
        }
    }

    /// Add an entry. Intended for table construction at startup only.
    pub fn with_tool(mut self, name: impl Into<String>, level: AccessLevel) -> Self {
        self.map.insert(name.into(), level);
        self
    }

    /// Minimum level required for `tool_name`.
    ///
    /// Unknown tools require `Admin` - absence of permission data means deny,
    /// never allow.
    pub fn required_level(&self, tool_name: &str) -> AccessLevel {
        self.map
            .get(tool_name)
            .copied()
            .unwrap_or(AccessLevel::Admin)
    }

    /// Non-signaling access check, for introspection.
    pub fn can_access(&self, tool_name: &str, user_level: AccessLevel) -> bool {
        user_level.has_access(self.required_level(tool_name))
    }

    /// Validate access to `tool_name`, returning the structured denial on
    /// failure.
    pub fn authorize(
        &self,
        tool_name: &str,
        user_level: AccessLevel,
    ) -> Result<(), AuthorizationError> {
        let required_level = self.required_level(tool_name);
        if user_level.has_access(required_level) {
            Ok(())
        } else {
            Err(AuthorizationError {
                tool_name: tool_name.to_string(),
                user_level,
                required_level,
            })
        }
    }

    /// Names of every tool the given level may invoke, sorted.
    pub fn allowed_tools(&self, user_level: AccessLevel) -> Vec<String> {
        let mut allowed: Vec<String> = self
            .map
            .iter()
            .filter(|(_, required)| user_level.has_access(**required))
            .map(|(name, _)| name.clone())
            .collect();
        allowed.sort();
        allowed
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
