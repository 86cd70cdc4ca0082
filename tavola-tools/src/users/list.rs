use crate::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tavola_core::ApiGateway;

/// Input for listing user accounts
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListUsersInput {
    /// Account role to filter by (e.g., "customer", "owner")
    #[serde(default)]
    pub role: Option<String>,

    /// Free-text filter matched against names and emails
    #[serde(default)]
    pub search: Option<String>,

    /// Only include active accounts
    #[serde(default)]
    pub active_only: bool,

    /// Maximum number of results to return (default: 20)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    20
}

/// List user accounts.
pub struct ListUsersTool {
    gateway: Arc<ApiGateway>,
}

impl ListUsersTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

impl Tool for ListUsersTool {
    type Input = ListUsersInput;

    fn name(&self) -> &str {
        "list_users"
    }

    fn description(&self) -> &str {
        "List user accounts, optionally filtered by role, activity, or a free-text search."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let mut query = vec![("limit", input.limit.to_string())];
            if let Some(role) = &input.role {
                query.push(("role", role.clone()));
            }
            if let Some(search) = &input.search {
                query.push(("search", search.clone()));
            }
            if input.active_only {
                query.push(("isActive", "true".to_string()));
            }

            let response = self.gateway.get_with("/api/v1/users", &query).await?;
            let users = envelope::items(&response);
            if users.is_empty() {
                return Ok(envelope::empty("user", "list"));
            }
            let count = users.len();
            Ok(envelope::success(
                "user",
                "list",
                Value::Array(users),
                Some(count),
            ))
        }
    }
}
