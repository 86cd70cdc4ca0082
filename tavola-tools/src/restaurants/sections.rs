use crate::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for listing a restaurant's dining sections
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetRestaurantSectionsInput {
    /// Restaurant name or id
    pub restaurant: String,
}

/// List the dining sections of a restaurant.
pub struct GetRestaurantSectionsTool {
    gateway: Arc<ApiGateway>,
    resolver: EntityResolver,
}

impl GetRestaurantSectionsTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway.clone()),
            gateway,
        }
    }
}

impl Tool for GetRestaurantSectionsTool {
    type Input = GetRestaurantSectionsInput;

    fn name(&self) -> &str {
        "get_restaurant_sections"
    }

    fn description(&self) -> &str {
        "List the dining sections (e.g., terrace, main hall) of a restaurant by its name or id."
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
                .get(&format!("/api/v1/restaurants/{}/sections", id))
                .await?;
            let sections = envelope::items(&response);
            if sections.is_empty() {
                return Ok(envelope::empty("section", "list"));
            }
            let count = sections.len();
            Ok(envelope::success(
                "section",
                "list",
                Value::Array(sections),
                Some(count),
            ))
        }
    }
}
