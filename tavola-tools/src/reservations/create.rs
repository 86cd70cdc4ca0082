use crate::prelude::*;
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for creating a reservation
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateReservationInput {
    /// Restaurant name or id
    pub restaurant: String,

    /// Customer name, email, or id. Defaults to the caller's own identity.
    #[serde(default)]
    pub customer: Option<String>,

    /// Reservation date in YYYY-MM-DD format
    pub date: String,

    /// Reservation time in HH:MM format (24-hour)
    pub time: String,

    /// Number of guests (default: 2)
    #[serde(default = "default_party_size")]
    pub party_size: u32,

    /// Specific table id to request, if any
    #[serde(default)]
    pub table_id: Option<String>,

    /// Special requests to pass to the restaurant
    #[serde(default)]
    pub special_requests: Option<String>,
}

fn default_party_size() -> u32 {
    2
}

/// Create a reservation on behalf of the caller or a named customer.
pub struct CreateReservationTool {
    gateway: Arc<ApiGateway>,
    resolver: EntityResolver,
}

impl CreateReservationTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway.clone()),
            gateway,
        }
    }
}

impl Tool for CreateReservationTool {
    type Input = CreateReservationInput;

    fn name(&self) -> &str {
        "create_reservation"
    }

    fn description(&self) -> &str {
        "Create a reservation at a restaurant for a given date, time, and party size. The restaurant and customer can be given by name, email, or id."
    }

    fn execute(
        &self,
        ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            if NaiveDate::parse_from_str(&input.date, "%Y-%m-%d").is_err() {
                return Ok(envelope::error(
                    "reservation",
                    "create",
                    &format!("invalid date '{}', expected YYYY-MM-DD", input.date),
                ));
            }
            if NaiveTime::parse_from_str(&input.time, "%H:%M").is_err() {
                return Ok(envelope::error(
                    "reservation",
                    "create",
                    &format!("invalid time '{}', expected HH:MM", input.time),
                ));
            }
            if input.party_size == 0 {
                return Ok(envelope::error(
                    "reservation",
                    "create",
                    "party size must be at least 1",
                ));
            }

            let Some(restaurant_id) = self.resolver.resolve_restaurant_id(&input.restaurant).await
            else {
                return Ok(envelope::not_found("restaurant", &input.restaurant));
            };

            // Explicit customer wins; otherwise fall back to the caller's identity.
            let customer_ref = input
                .customer
                .clone()
                .or_else(|| ctx.user_id.clone())
                .or_else(|| ctx.user_email.clone());
            let Some(customer_ref) = customer_ref else {
                return Ok(envelope::error(
                    "reservation",
                    "create",
                    "no customer given and the session has no user identity",
                ));
            };
            let Some(customer_id) = self.resolver.resolve_user_id(&customer_ref).await else {
                return Ok(envelope::not_found("user", &customer_ref));
            };

            let mut body = json!({
                "restaurantId": restaurant_id,
                "customerId": customer_id,
                "reservationDate": input.date,
                "reservationTime": input.time,
                "partySize": input.party_size,
            });
            if let Some(table_id) = &input.table_id {
                body["tableId"] = json!(table_id);
            }
            if let Some(requests) = &input.special_requests {
                body["specialRequests"] = json!(requests);
            }

            let created = self.gateway.post("/api/v1/reservations", &body).await?;
            Ok(envelope::success("reservation", "create", created, None))
        }
    }
}
