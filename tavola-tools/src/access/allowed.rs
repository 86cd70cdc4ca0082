use crate::prelude::*;
use serde_json::json;
use std::sync::Arc;
use tavola_core::{AccessLevel, ContextStore, PermissionTable};

/// Input for listing allowed tools
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAllowedToolsInput {
    /// Access level to list tools for. Defaults to the session's current level.
    #[serde(default)]
    pub access_level: Option<String>,
}

/// List the tools callable at an access level.
pub struct GetAllowedToolsTool {
    context: ContextStore,
    permissions: Arc<PermissionTable>,
}

impl GetAllowedToolsTool {
    pub fn new(context: ContextStore, permissions: Arc<PermissionTable>) -> Self {
        Self {
            context,
            permissions,
        }
    }
}

impl Tool for GetAllowedToolsTool {
    type Input = GetAllowedToolsInput;

    fn name(&self) -> &str {
        "get_allowed_tools"
    }

    fn description(&self) -> &str {
        "List the tools callable at a given access level, or at the session's current level if none is given."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let level: AccessLevel = match &input.access_level {
                Some(raw) => match raw.parse() {
                    Ok(level) => level,
                    Err(_) => {
                        return Ok(ToolResult::text(format!(
                            "Error: invalid access level '{}'. Valid levels: guest, user, owner, admin",
                            raw
                        )));
                    }
                },
                None => self.context.current().access_level,
            };

            let tools = self.permissions.allowed_tools(level);
            Ok(ToolResult::Json(json!({
                "access_level": level.as_str(),
                "count": tools.len(),
                "allowed_tools": tools,
            })))
        }
    }
}
