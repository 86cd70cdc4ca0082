//! Ready-to-use tool handlers for the Tavola reservations catalogue.
//!
//! Every tool here is a thin consumer of `tavola-core`: it validates its
//! structured input, resolves human-friendly identifiers through the
//! [`EntityResolver`](tavola_core::EntityResolver), calls the backend
//! gateway, and wraps the outcome in a status envelope. Authorization is not
//! handled here - the registry enforces it uniformly on dispatch.

pub mod access;
pub mod menus;
pub mod owner;
pub mod reservations;
pub mod restaurants;
pub mod users;

use std::sync::Arc;
use tavola_core::{ApiGateway, PermissionTable, ToolRegistry};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use schemars::JsonSchema;
    pub use serde::{Deserialize, Serialize};
    pub use tavola_core::{envelope, Tool, ToolContext, ToolError, ToolResult};
}

/// Build a fully wired registry for one client session.
///
/// Registers every tool in the catalogue against the given permission table;
/// the registry owns a fresh guest context for the session.
pub fn standard_registry(
    gateway: Arc<ApiGateway>,
    permissions: Arc<PermissionTable>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new(permissions.clone());
    let context = registry.context().clone();
    registry.register_all(restaurants::all_tools(gateway.clone()));
    registry.register_all(menus::all_tools(gateway.clone()));
    registry.register_all(reservations::all_tools(gateway.clone()));
    registry.register_all(owner::all_tools(gateway.clone()));
    registry.register_all(users::all_tools(gateway));
    registry.register_all(access::all_tools(context, permissions));
    registry
}
