use crate::prelude::*;
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for listing available time slots
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAvailableTimeSlotsInput {
    /// Restaurant name or id
    pub restaurant: String,

    /// Date to check, YYYY-MM-DD
    pub date: String,

    /// Number of guests (default: 2)
    #[serde(default = "default_party_size")]
    pub party_size: u32,
}

fn default_party_size() -> u32 {
    2
}

/// List the bookable time slots of a restaurant on one date.
pub struct GetAvailableTimeSlotsTool {
    gateway: Arc<ApiGateway>,
    resolver: EntityResolver,
}

impl GetAvailableTimeSlotsTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway.clone()),
            gateway,
        }
    }
}

impl Tool for GetAvailableTimeSlotsTool {
    type Input = GetAvailableTimeSlotsInput;

    fn name(&self) -> &str {
        "get_available_time_slots"
    }

    fn description(&self) -> &str {
        "List the time slots still bookable at a restaurant on a given date for a party of the given size."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            if NaiveDate::parse_from_str(&input.date, "%Y-%m-%d").is_err() {
                return Ok(envelope::error(
                    "availability",
                    "time_slots",
                    &format!("invalid date '{}', expected YYYY-MM-DD", input.date),
                ));
            }

            let Some(id) = self.resolver.resolve_restaurant_id(&input.restaurant).await else {
                return Ok(envelope::not_found("restaurant", &input.restaurant));
            };

            let query = [
                ("date", input.date.clone()),
                ("partySize", input.party_size.to_string()),
            ];
            let response = self
                .gateway
                .get_with(&format!("/api/v1/restaurants/{}/time-slots", id), &query)
                .await?;
            let slots = envelope::items(&response);
            if slots.is_empty() {
                return Ok(envelope::empty("availability", "time_slots"));
            }
            let count = slots.len();
            Ok(envelope::success(
                "availability",
                "time_slots",
                Value::Array(slots),
                Some(count),
            ))
        }
    }
}
