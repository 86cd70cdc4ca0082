use crate::prelude::*;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for fetching reservation analytics
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetRestaurantAnalyticsInput {
    /// Restaurant name or id. Defaults to the caller's own restaurant.
    #[serde(default)]
    pub restaurant: Option<String>,

    /// Start of the reporting window, YYYY-MM-DD
    #[serde(default)]
    pub date_from: Option<String>,

    /// End of the reporting window, YYYY-MM-DD
    #[serde(default)]
    pub date_to: Option<String>,
}

/// Fetch reservation analytics for one restaurant.
pub struct GetRestaurantAnalyticsTool {
    gateway: Arc<ApiGateway>,
    resolver: EntityResolver,
}

impl GetRestaurantAnalyticsTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway.clone()),
            gateway,
        }
    }
}

impl Tool for GetRestaurantAnalyticsTool {
    type Input = GetRestaurantAnalyticsInput;

    fn name(&self) -> &str {
        "get_restaurant_analytics"
    }

    fn description(&self) -> &str {
        "Get reservation analytics for a restaurant over a date window: volumes, occupancy, and trends."
    }

    fn execute(
        &self,
        ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let restaurant_ref = input
                .restaurant
                .clone()
                .or_else(|| ctx.restaurant_id.clone());
            let Some(restaurant_ref) = restaurant_ref else {
                return Ok(envelope::error(
                    "analytics",
                    "get",
                    "no restaurant given and the session has no restaurant scope",
                ));
            };
            let Some(restaurant_id) = self.resolver.resolve_restaurant_id(&restaurant_ref).await
            else {
                return Ok(envelope::not_found("restaurant", &restaurant_ref));
            };

            let mut query = vec![("restaurantId", restaurant_id)];
            if let Some(from) = &input.date_from {
                query.push(("dateFrom", from.clone()));
            }
            if let Some(to) = &input.date_to {
                query.push(("dateTo", to.clone()));
            }

            let response = self
                .gateway
                .get_with("/api/v1/reservations/analytics", &query)
                .await?;
            Ok(envelope::success("analytics", "get", response, None))
        }
    }
}
