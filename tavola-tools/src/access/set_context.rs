use crate::prelude::*;
use tavola_core::{AccessLevel, ContextStore};

/// Input for setting the session's access context
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetAccessContextInput {
    /// Access level for this session: guest, user, owner, or admin
    pub access_level: String,

    /// Canonical id of the authenticated user, if known
    #[serde(default)]
    pub user_id: Option<String>,

    /// Email of the authenticated user, if known
    #[serde(default)]
    pub user_email: Option<String>,

    /// Canonical id of the restaurant an owner session manages
    #[serde(default)]
    pub restaurant_id: Option<String>,
}

/// Set the access level and identity for the current session.
///
/// Replaces the whole context: fields omitted from the input are cleared,
/// never carried over from the previous context.
pub struct SetAccessContextTool {
    context: ContextStore,
}

impl SetAccessContextTool {
    pub fn new(context: ContextStore) -> Self {
        Self { context }
    }
}

impl Tool for SetAccessContextTool {
    type Input = SetAccessContextInput;

    fn name(&self) -> &str {
        "set_access_context"
    }

    fn description(&self) -> &str {
        "Set the access level (guest, user, owner, or admin) and identity for this session. Call this after authenticating the user."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let level: AccessLevel = match input.access_level.parse() {
                Ok(level) => level,
                Err(_) => {
                    return Ok(ToolResult::text(format!(
                        "Error: invalid access level '{}'. Valid levels: guest, user, owner, admin",
                        input.access_level
                    )));
                }
            };

            let mut context = ToolContext::new(level);
            context.user_id = input.user_id.clone();
            context.user_email = input.user_email.clone();
            context.restaurant_id = input.restaurant_id.clone();
            self.context.set(context);
            log::info!("session access context set to '{}'", level);

            let mut summary = format!("Access context set: level={}", level);
            if let Some(user_id) = &input.user_id {
                summary.push_str(&format!(", user_id={}", user_id));
            }
            if let Some(email) = &input.user_email {
                summary.push_str(&format!(", user_email={}", email));
            }
            if let Some(restaurant_id) = &input.restaurant_id {
                summary.push_str(&format!(", restaurant_id={}", restaurant_id));
            }
            Ok(ToolResult::text(summary))
        }
    }
}
