use crate::prelude::*;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for fetching restaurant details
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetRestaurantInfoInput {
    /// Restaurant name or id
    pub restaurant: String,
}

/// Fetch the full record for one restaurant.
pub struct GetRestaurantInfoTool {
    resolver: EntityResolver,
}

impl GetRestaurantInfoTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway),
        }
    }
}

impl Tool for GetRestaurantInfoTool {
    type Input = GetRestaurantInfoInput;

    fn name(&self) -> &str {
        "get_restaurant_info"
    }

    fn description(&self) -> &str {
        "Get detailed information about a restaurant by its name or id: address, contact details, cuisine, and opening status."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            match self.resolver.resolve_restaurant(&input.restaurant).await {
                Some(record) => Ok(envelope::success("restaurant", "get", record, None)),
                None => Ok(envelope::not_found("restaurant", &input.restaurant)),
            }
        }
    }
}
