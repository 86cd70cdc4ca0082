use crate::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tavola_core::{encode_path_segment, ApiGateway};

/// Input for listing the dishes of a menu
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetMenuDishesInput {
    /// Menu id
    pub menu_id: String,
}

/// List every dish on a menu.
pub struct GetMenuDishesTool {
    gateway: Arc<ApiGateway>,
}

impl GetMenuDishesTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

impl Tool for GetMenuDishesTool {
    type Input = GetMenuDishesInput;

    fn name(&self) -> &str {
        "get_menu_dishes"
    }

    fn description(&self) -> &str {
        "List all dishes on a menu by the menu's id, with names, prices, and categories."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let response = self
                .gateway
                .get(&format!(
                    "/api/v1/menus/{}/dishes",
                    encode_path_segment(&input.menu_id)
                ))
                .await?;
            let dishes = envelope::items(&response);
            if dishes.is_empty() {
                return Ok(envelope::empty("dish", "list"));
            }
            let count = dishes.len();
            Ok(envelope::success(
                "dish",
                "list",
                Value::Array(dishes),
                Some(count),
            ))
        }
    }
}
