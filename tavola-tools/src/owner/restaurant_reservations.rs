use crate::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for listing a restaurant's reservations
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetRestaurantReservationsInput {
    /// Restaurant name or id. Defaults to the caller's own restaurant.
    #[serde(default)]
    pub restaurant: Option<String>,

    /// Reservation date to filter by, YYYY-MM-DD
    #[serde(default)]
    pub date: Option<String>,

    /// Reservation status to filter by (e.g., "pending", "confirmed")
    #[serde(default)]
    pub status: Option<String>,

    /// Maximum number of results to return (default: 50)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    50
}

/// List the reservations booked at one restaurant.
pub struct GetRestaurantReservationsTool {
    gateway: Arc<ApiGateway>,
    resolver: EntityResolver,
}

impl GetRestaurantReservationsTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway.clone()),
            gateway,
        }
    }
}

impl Tool for GetRestaurantReservationsTool {
    type Input = GetRestaurantReservationsInput;

    fn name(&self) -> &str {
        "get_restaurant_reservations"
    }

    fn description(&self) -> &str {
        "List the reservations booked at a restaurant, optionally filtered by date or status. Defaults to the caller's own restaurant."
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
                    "reservation",
                    "list_for_restaurant",
                    "no restaurant given and the session has no restaurant scope",
                ));
            };
            let Some(restaurant_id) = self.resolver.resolve_restaurant_id(&restaurant_ref).await
            else {
                return Ok(envelope::not_found("restaurant", &restaurant_ref));
            };

            let mut query = vec![
                ("restaurantId", restaurant_id),
                ("limit", input.limit.to_string()),
            ];
            if let Some(date) = &input.date {
                query.push(("date", date.clone()));
            }
            if let Some(status) = &input.status {
                query.push(("status", status.clone()));
            }

            let response = self.gateway.get_with("/api/v1/reservations", &query).await?;
            let reservations = envelope::items(&response);
            if reservations.is_empty() {
                return Ok(envelope::empty("reservation", "list_for_restaurant"));
            }
            let count = reservations.len();
            Ok(envelope::success(
                "reservation",
                "list_for_restaurant",
                Value::Array(reservations),
                Some(count),
            ))
        }
    }
}
