//! # Tavola Core
//!
//! Access control and identifier resolution for a catalogue of
//! remote-callable tools exposed to an LLM client, backed by the Tavola
//! reservations REST API.
//!
//! The crate covers four concerns:
//!
//! - **Access levels & permissions**: a hierarchical [`AccessLevel`]
//!   (`guest < user < owner < admin`) and an immutable [`PermissionTable`]
//!   mapping every tool to its minimum level. Unknown tools require `admin` -
//!   the table fails closed.
//! - **Execution context**: a per-session [`ContextStore`] carrying the
//!   caller's [`ToolContext`] (level plus optional identity) through one
//!   logical call chain, isolated from every other chain.
//! - **Enforcement**: the [`ToolRegistry`] wraps each tool with its required
//!   level at registration time and checks the session context on every
//!   dispatch, surfacing denials as structured [`AuthorizationError`]s.
//! - **Entity resolution**: the [`EntityResolver`] translates names and
//!   emails into the backend's canonical ids, degrading every lookup failure
//!   to "not found" instead of signaling.
//!
//! ## Quick start
//!
//! ```ignore
//! use std::sync::Arc;
//! use tavola_core::{ApiGateway, PermissionTable, Settings, ToolRegistry};
//!
//! let gateway = Arc::new(ApiGateway::from_settings(&Settings::from_env())?);
//! let mut registry = ToolRegistry::new(Arc::new(PermissionTable::standard()));
//! registry.register(SearchRestaurantsTool::new(gateway.clone()));
//!
//! // One registry per client session; dispatch enforces the context's level.
//! let result = registry.dispatch("search_restaurants", params).await?;
//! ```

pub mod access;
pub mod config;
pub mod context;
pub mod envelope;
pub mod gateway;
pub mod permissions;
pub mod registry;
pub mod resolver;
pub mod tool;

pub use access::{AccessLevel, ParseAccessLevelError};
pub use config::Settings;
pub use context::{ContextStore, ToolContext};
pub use gateway::{encode_path_segment, ApiGateway, GatewayError};
pub use permissions::{AuthorizationError, PermissionTable};
pub use registry::{ToolDefinition, ToolRegistry};
pub use resolver::{is_canonical_id, is_email, EntityResolver};
pub use tool::{box_tool, DynTool, Tool, ToolError, ToolResult};
