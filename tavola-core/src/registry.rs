//! Tool registry and authorization enforcement.
//!
//! The registry is the single entry point through which the host dispatches
//! tool calls. Every tool is wrapped with its required access level at
//! registration time; dispatch snapshots the session context, checks the
//! level, and only then runs the tool. There is no unguarded path to a
//! registered tool.

use crate::access::AccessLevel;
use crate::context::{ContextStore, ToolContext};
use crate::permissions::{AuthorizationError, PermissionTable};
use crate::tool::{box_tool, DynTool, Tool, ToolError, ToolResult};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A tool wrapped with the minimum level required to invoke it.
///
/// The level is captured from the permission table when the tool is
/// registered, so a tool missing from the table is guarded at `Admin`.
struct Guarded {
    required_level: AccessLevel,
    inner: Box<dyn DynTool>,
}

impl Guarded {
    async fn invoke(&self, ctx: &ToolContext, params: Value) -> Result<ToolResult, ToolError> {
        if !ctx.access_level.has_access(self.required_level) {
            return Err(AuthorizationError {
                tool_name: self.inner.name().to_string(),
                user_level: ctx.access_level,
                required_level: self.required_level,
            }
            .into());
        }
        self.inner.execute_raw(ctx, params).await
    }
}

/// Advertised definition of a registered tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    /// Tool name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON schema of the input.
    pub input_schema: Value,
    /// Minimum access level enforced on dispatch.
    pub required_level: AccessLevel,
}

/// Registry of guarded tools for one client session.
///
/// The registry owns the session's [`ContextStore`]: one registry per logical
/// call chain. Tools are registered once at session setup; afterwards the
/// registry is only read.
///
/// # Example
///
/// ```ignore
/// let mut registry = ToolRegistry::new(Arc::new(PermissionTable::standard()));
/// registry.register(SearchRestaurantsTool::new(gateway));
///
/// let result = registry.dispatch("search_restaurants", json!({"name": "Pizza"})).await?;
/// ```
pub struct ToolRegistry {
    tools: HashMap<String, Guarded>,
    permissions: Arc<PermissionTable>,
    context: ContextStore,
}

impl ToolRegistry {
    /// New registry with a fresh guest context.
    pub fn new(permissions: Arc<PermissionTable>) -> Self {
        Self::with_context(permissions, ContextStore::new())
    }

    /// New registry sharing an existing context store.
    pub fn with_context(permissions: Arc<PermissionTable>, context: ContextStore) -> Self {
        Self {
            tools: HashMap::new(),
            permissions,
            context,
        }
    }

    /// The session's context store.
    pub fn context(&self) -> &ContextStore {
        &self.context
    }

    /// The permission table backing this registry.
    pub fn permissions(&self) -> &PermissionTable {
        &self.permissions
    }

    /// Register a tool, wrapping it with its required level from the table.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.register_boxed(box_tool(tool));
    }

    /// Register an already-boxed tool.
    pub fn register_boxed(&mut self, tool: Box<dyn DynTool>) {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            log::warn!("tool '{}' is already registered, replacing it", name);
        }
        let required_level = self.permissions.required_level(&name);
        self.tools.insert(
            name,
            Guarded {
                required_level,
                inner: tool,
            },
        );
    }

    /// Register a batch of boxed tools.
    pub fn register_all(&mut self, tools: Vec<Box<dyn DynTool>>) {
        for tool in tools {
            self.register_boxed(tool);
        }
    }

    /// Dispatch a tool call under the current session context.
    ///
    /// Reads the context, enforces the tool's required level, and runs the
    /// tool with the snapshot. A denial surfaces as [`ToolError::Denied`]
    /// with the tool name and both levels intact.
    pub async fn dispatch(&self, tool_name: &str, params: Value) -> Result<ToolResult, ToolError> {
        let guarded = self
            .tools
            .get(tool_name)
            .ok_or_else(|| ToolError::Custom(format!("unknown tool: {}", tool_name)))?;
        let ctx = self.context.current();
        guarded.invoke(&ctx, params).await
    }

    /// Definitions of every registered tool, sorted by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<ToolDefinition> = self
            .tools
            .values()
            .map(|guarded| ToolDefinition {
                name: guarded.inner.name().to_string(),
                description: guarded.inner.description().to_string(),
                input_schema: guarded.inner.input_schema(),
                required_level: guarded.required_level,
            })
            .collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Names of the registered tools the current context may invoke, sorted.
    pub fn allowed_tools(&self) -> Vec<String> {
        let level = self.context.current().access_level;
        let mut allowed: Vec<String> = self
            .tools
            .values()
            .filter(|guarded| level.has_access(guarded.required_level))
            .map(|guarded| guarded.inner.name().to_string())
            .collect();
        allowed.sort();
        allowed
    }

    /// Whether a tool with this name is registered.
    pub fn contains(&self, tool_name: &str) -> bool {
        self.tools.contains_key(tool_name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, JsonSchema)]
    struct PingInput {}

    struct PingTool {
        name: &'static str,
    }

    impl Tool for PingTool {
        type Input = PingInput;

        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "Reply with pong"
        }

        fn execute(
            &self,
            ctx: &ToolContext,
            _input: Self::Input,
        ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
            let level = ctx.access_level;
            async move { Ok(format!("pong as {}", level).into()) }
        }
    }

    fn registry() -> ToolRegistry {
        let table = PermissionTable::empty()
            .with_tool("public_ping", AccessLevel::Guest)
            .with_tool("member_ping", AccessLevel::User)
            .with_tool("admin_ping", AccessLevel::Admin);
        let mut registry = ToolRegistry::new(Arc::new(table));
        registry.register(PingTool { name: "public_ping" });
        registry.register(PingTool { name: "member_ping" });
        registry.register(PingTool { name: "admin_ping" });
        // Not in the table at all: must be guarded at Admin.
        registry.register(PingTool {
            name: "unlisted_ping",
        });
        registry
    }

    // ===== Dispatch and enforcement tests =====

    #[tokio::test]
    async fn test_guest_can_call_public_tool() {
        let registry = registry();
        let result = registry.dispatch("public_ping", json!({})).await.unwrap();
        assert_eq!(result.as_str(), Some("pong as guest"));
    }

    #[tokio::test]
    async fn test_guest_denied_user_tool_with_structured_error() {
        let registry = registry();
        let err = registry.dispatch("member_ping", json!({})).await.unwrap_err();

        match err {
            ToolError::Denied(denial) => {
                assert_eq!(denial.tool_name, "member_ping");
                assert_eq!(denial.user_level, AccessLevel::Guest);
                assert_eq!(denial.required_level, AccessLevel::User);
            }
            other => panic!("expected denial, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_context_change_takes_effect_on_next_dispatch() {
        let registry = registry();
        assert!(registry.dispatch("member_ping", json!({})).await.is_err());

        registry
            .context()
            .set(ToolContext::new(AccessLevel::User).with_user_id("u-1"));
        let result = registry.dispatch("member_ping", json!({})).await.unwrap();
        assert_eq!(result.as_str(), Some("pong as user"));

        registry.context().reset();
        assert!(registry.dispatch("member_ping", json!({})).await.is_err());
    }

    #[tokio::test]
    async fn test_unlisted_tool_fails_closed() {
        let registry = registry();
        registry.context().set(ToolContext::new(AccessLevel::Owner));
        assert!(registry.dispatch("unlisted_ping", json!({})).await.is_err());

        registry.context().set(ToolContext::new(AccessLevel::Admin));
        assert!(registry.dispatch("unlisted_ping", json!({})).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_an_error() {
        let registry = registry();
        let err = registry.dispatch("missing", json!({})).await.unwrap_err();
        assert!(err.to_string().contains("unknown tool"));
    }

    // ===== Introspection tests =====

    #[test]
    fn test_definitions_sorted_with_levels() {
        let registry = registry();
        let definitions = registry.definitions();

        let names: Vec<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["admin_ping", "member_ping", "public_ping", "unlisted_ping"]
        );
        assert_eq!(definitions[3].required_level, AccessLevel::Admin);
        assert_eq!(definitions[2].required_level, AccessLevel::Guest);
    }

    #[test]
    fn test_allowed_tools_follow_context_level() {
        let registry = registry();
        assert_eq!(registry.allowed_tools(), vec!["public_ping"]);

        registry.context().set(ToolContext::new(AccessLevel::Admin));
        assert_eq!(registry.allowed_tools().len(), 4);
    }

    #[tokio::test]
    async fn test_sessions_do_not_observe_each_other() {
        let session_a = registry();
        let session_b = registry();

        session_a.context().set(ToolContext::new(AccessLevel::Owner));

        // Chain B never set a context and still dispatches as guest.
        assert!(session_b.dispatch("member_ping", json!({})).await.is_err());
        assert_eq!(session_b.context().current(), ToolContext::guest());
    }
}
