use crate::prelude::*;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for fetching reservation statistics
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetReservationStatisticsInput {
    /// Restaurant name or id. Defaults to the caller's own restaurant.
    #[serde(default)]
    pub restaurant: Option<String>,

    /// Aggregation period: "day", "week", or "month" (default: "week")
    #[serde(default = "default_period")]
    pub period: String,
}

fn default_period() -> String {
    "week".to_string()
}

/// Fetch aggregate reservation statistics for one restaurant.
pub struct GetReservationStatisticsTool {
    gateway: Arc<ApiGateway>,
    resolver: EntityResolver,
}

impl GetReservationStatisticsTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway.clone()),
            gateway,
        }
    }
}

impl Tool for GetReservationStatisticsTool {
    type Input = GetReservationStatisticsInput;

    fn name(&self) -> &str {
        "get_reservation_statistics"
    }

    fn description(&self) -> &str {
        "Get aggregate reservation statistics for a restaurant: totals, no-show rate, and average party size per period."
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
                    "statistics",
                    "get",
                    "no restaurant given and the session has no restaurant scope",
                ));
            };
            let Some(restaurant_id) = self.resolver.resolve_restaurant_id(&restaurant_ref).await
            else {
                return Ok(envelope::not_found("restaurant", &restaurant_ref));
            };

            let query = [
                ("restaurantId", restaurant_id),
                ("period", input.period.clone()),
            ];
            let response = self
                .gateway
                .get_with("/api/v1/reservations/statistics", &query)
                .await?;
            Ok(envelope::success("statistics", "get", response, None))
        }
    }
}
