use crate::prelude::*;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for looking up a restaurant by name
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetRestaurantByNameInput {
    /// Exact or partial restaurant name
    pub name: String,
}

/// Look up a single restaurant by name. First match wins.
pub struct GetRestaurantByNameTool {
    resolver: EntityResolver,
}

impl GetRestaurantByNameTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway),
        }
    }
}

impl Tool for GetRestaurantByNameTool {
    type Input = GetRestaurantByNameInput;

    fn name(&self) -> &str {
        "get_restaurant_by_name"
    }

    fn description(&self) -> &str {
        "Find a single restaurant by its name. Returns the best match, or not_found if no restaurant matches."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            match self.resolver.resolve_restaurant(&input.name).await {
                Some(record) => Ok(envelope::success("restaurant", "get_by_name", record, None)),
                None => Ok(envelope::not_found("restaurant", &input.name)),
            }
        }
    }
}
