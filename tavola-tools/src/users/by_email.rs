use crate::prelude::*;
use std::sync::Arc;
use tavola_core::{is_email, ApiGateway, EntityResolver};

/// Input for looking up a user by email
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetUserByEmailInput {
    /// Email address of the account
    pub email: String,
}

/// Look up a user account by its email address.
pub struct GetUserByEmailTool {
    resolver: EntityResolver,
}

impl GetUserByEmailTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway),
        }
    }
}

impl Tool for GetUserByEmailTool {
    type Input = GetUserByEmailInput;

    fn name(&self) -> &str {
        "get_user_by_email"
    }

    fn description(&self) -> &str {
        "Find a user account by its exact email address."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let email = input.email.trim();
            if !is_email(email) {
                return Ok(envelope::error(
                    "user",
                    "get_by_email",
                    &format!("'{}' is not a valid email address", input.email),
                ));
            }

            match self.resolver.resolve_user(email).await {
                Some(record) => Ok(envelope::success("user", "get_by_email", record, None)),
                None => Ok(envelope::not_found("user", email)),
            }
        }
    }
}
