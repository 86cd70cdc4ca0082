use crate::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tavola_core::ApiGateway;

/// Input for searching restaurants
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchRestaurantsInput {
    /// Restaurant name to filter by (partial match)
    #[serde(default)]
    pub name: Option<String>,

    /// City to filter by
    #[serde(default)]
    pub city: Option<String>,

    /// Cuisine type to filter by (e.g., "italian", "mexican")
    #[serde(default)]
    pub cuisine_type: Option<String>,

    /// Only include restaurants currently accepting reservations
    #[serde(default)]
    pub active_only: bool,

    /// Maximum number of results to return (default: 10)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

/// Search the restaurant catalogue by name, city, or cuisine.
pub struct SearchRestaurantsTool {
    gateway: Arc<ApiGateway>,
}

impl SearchRestaurantsTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

impl Tool for SearchRestaurantsTool {
    type Input = SearchRestaurantsInput;

    fn name(&self) -> &str {
        "search_restaurants"
    }

    fn description(&self) -> &str {
        "Search for restaurants by name, city, or cuisine type. Returns a list of matching restaurants with their ids, names, and locations."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let mut query = vec![("limit", input.limit.to_string())];
            if let Some(name) = &input.name {
                query.push(("name", name.clone()));
            }
            if let Some(city) = &input.city {
                query.push(("city", city.clone()));
            }
            if let Some(cuisine) = &input.cuisine_type {
                query.push(("cuisineType", cuisine.clone()));
            }
            if input.active_only {
                query.push(("isActive", "true".to_string()));
            }

            let response = self.gateway.get_with("/api/v1/restaurants", &query).await?;
            let restaurants = envelope::items(&response);
            if restaurants.is_empty() {
                return Ok(envelope::empty("restaurant", "search"));
            }

            // Prefer the backend's total when it paginates, else what we got.
            let count = response
                .get("pagination")
                .and_then(|p| p.get("totalItems"))
                .and_then(Value::as_u64)
                .map(|n| n as usize)
                .unwrap_or(restaurants.len());

            Ok(envelope::success(
                "restaurant",
                "search",
                Value::Array(restaurants),
                Some(count),
            ))
        }
    }
}
