use crate::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tavola_core::{encode_path_segment, ApiGateway};

/// Input for listing the categories of a menu
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetMenuCategoriesInput {
    /// Menu id
    pub menu_id: String,
}

/// List the dish categories of a menu.
pub struct GetMenuCategoriesTool {
    gateway: Arc<ApiGateway>,
}

impl GetMenuCategoriesTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

impl Tool for GetMenuCategoriesTool {
    type Input = GetMenuCategoriesInput;

    fn name(&self) -> &str {
        "get_menu_categories"
    }

    fn description(&self) -> &str {
        "List the dish categories of a menu by the menu's id."
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
                    "/api/v1/menus/{}/categories",
                    encode_path_segment(&input.menu_id)
                ))
                .await?;
            let categories = envelope::items(&response);
            if categories.is_empty() {
                return Ok(envelope::empty("category", "list"));
            }
            let count = categories.len();
            Ok(envelope::success(
                "category",
                "list",
                Value::Array(categories),
                Some(count),
            ))
        }
    }
}
