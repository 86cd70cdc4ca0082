use crate::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for searching dishes
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchDishesInput {
    /// Free-text query matched against dish names and descriptions
    #[serde(default)]
    pub query: Option<String>,

    /// Restaurant name or id to scope the search to
    #[serde(default)]
    pub restaurant: Option<String>,

    /// Dish category to filter by (e.g., "starters", "desserts")
    #[serde(default)]
    pub category: Option<String>,

    /// Maximum price to filter by
    #[serde(default)]
    pub max_price: Option<f64>,

    /// Only include vegetarian dishes
    #[serde(default)]
    pub vegetarian_only: bool,

    /// Maximum number of results to return (default: 10)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

/// Search dishes across the catalogue, optionally scoped to one restaurant.
pub struct SearchDishesTool {
    gateway: Arc<ApiGateway>,
    resolver: EntityResolver,
}

impl SearchDishesTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway.clone()),
            gateway,
        }
    }
}

impl Tool for SearchDishesTool {
    type Input = SearchDishesInput;

    fn name(&self) -> &str {
        "search_dishes"
    }

    fn description(&self) -> &str {
        "Search for dishes by text, category, price, or dietary preference, optionally within a single restaurant."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let mut query = vec![("limit", input.limit.to_string())];
            if let Some(q) = &input.query {
                query.push(("q", q.clone()));
            }
            if let Some(restaurant) = &input.restaurant {
                let Some(id) = self.resolver.resolve_restaurant_id(restaurant).await else {
                    return Ok(envelope::not_found("restaurant", restaurant));
                };
                query.push(("restaurantId", id));
            }
            if let Some(category) = &input.category {
                query.push(("category", category.clone()));
            }
            if let Some(max_price) = input.max_price {
                query.push(("maxPrice", max_price.to_string()));
            }
            if input.vegetarian_only {
                query.push(("vegetarian", "true".to_string()));
            }

            let response = self.gateway.get_with("/api/v1/dishes/search", &query).await?;
            let dishes = envelope::items(&response);
            if dishes.is_empty() {
                return Ok(envelope::empty("dish", "search"));
            }
            let count = dishes.len();
            Ok(envelope::success(
                "dish",
                "search",
                Value::Array(dishes),
                Some(count),
            ))
        }
    }
}
