use crate::prelude::*;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for fetching a restaurant's menu
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetRestaurantMenuInput {
    /// Restaurant name or id
    pub restaurant: String,
}

/// Fetch the active menu for a restaurant.
pub struct GetRestaurantMenuTool {
    gateway: Arc<ApiGateway>,
    resolver: EntityResolver,
}

impl GetRestaurantMenuTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway.clone()),
            gateway,
        }
    }
}

impl Tool for GetRestaurantMenuTool {
    type Input = GetRestaurantMenuInput;

    fn name(&self) -> &str {
        "get_restaurant_menu"
    }

    fn description(&self) -> &str {
        "Get the current menu for a restaurant by its name or id, including dishes grouped by category."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let Some(id) = self.resolver.resolve_restaurant_id(&input.restaurant).await else {
                return Ok(envelope::not_found("restaurant", &input.restaurant));
            };

            let menu = self
                .gateway
                .get(&format!("/api/v1/restaurants/{}/menu", id))
                .await?;
            if menu.is_null() {
                return Ok(envelope::empty("menu", "get"));
            }
            Ok(envelope::success("menu", "get", menu, None))
        }
    }
}
