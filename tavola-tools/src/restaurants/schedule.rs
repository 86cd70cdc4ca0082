use crate::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for fetching a restaurant's opening schedule
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetRestaurantScheduleInput {
    /// Restaurant name or id
    pub restaurant: String,
}

/// Fetch the weekly opening schedule for a restaurant.
pub struct GetRestaurantScheduleTool {
    gateway: Arc<ApiGateway>,
    resolver: EntityResolver,
}

impl GetRestaurantScheduleTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway.clone()),
            gateway,
        }
    }
}

impl Tool for GetRestaurantScheduleTool {
    type Input = GetRestaurantScheduleInput;

    fn name(&self) -> &str {
        "get_restaurant_schedule"
    }

    fn description(&self) -> &str {
        "Get a restaurant's weekly opening hours by its name or id."
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

            let response = self
                .gateway
                .get(&format!("/api/v1/restaurants/{}/schedule", id))
                .await?;
            let days = envelope::items(&response);
            if days.is_empty() {
                return Ok(envelope::empty("schedule", "get"));
            }
            let count = days.len();
            Ok(envelope::success(
                "schedule",
                "get",
                Value::Array(days),
                Some(count),
            ))
        }
    }
}
