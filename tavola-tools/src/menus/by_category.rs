use crate::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tavola_core::{encode_path_segment, ApiGateway};

/// Input for listing a menu's dishes in one category
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetDishesByCategoryInput {
    /// Menu id
    pub menu_id: String,

    /// Category name (e.g., "starters", "desserts")
    pub category: String,
}

/// List the dishes of a menu filtered to one category.
pub struct GetDishesByCategoryTool {
    gateway: Arc<ApiGateway>,
}

impl GetDishesByCategoryTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

impl Tool for GetDishesByCategoryTool {
    type Input = GetDishesByCategoryInput;

    fn name(&self) -> &str {
        "get_dishes_by_category"
    }

    fn description(&self) -> &str {
        "List the dishes on a menu that belong to a given category."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let query = [("category", input.category.clone())];
            let response = self
                .gateway
                .get_with(
                    &format!("/api/v1/menus/{}/dishes", encode_path_segment(&input.menu_id)),
                    &query,
                )
                .await?;
            let dishes = envelope::items(&response);
            if dishes.is_empty() {
                return Ok(envelope::empty("dish", "list_by_category"));
            }
            let count = dishes.len();
            Ok(envelope::success(
                "dish",
                "list_by_category",
                Value::Array(dishes),
                Some(count),
            ))
        }
    }
}
