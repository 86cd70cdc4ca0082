use crate::prelude::*;
use chrono::NaiveDate;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for checking table availability
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CheckTableAvailabilityInput {
    /// Restaurant name or id
    pub restaurant: String,

    /// Date to check, YYYY-MM-DD
    pub date: String,

    /// Time to check, HH:MM (24-hour). Omit to check the whole day.
    #[serde(default)]
    pub time: Option<String>,

    /// Number of guests (default: 2)
    #[serde(default = "default_party_size")]
    pub party_size: u32,
}

fn default_party_size() -> u32 {
    2
}

/// Check whether a restaurant can seat a party at a given date and time.
pub struct CheckTableAvailabilityTool {
    gateway: Arc<ApiGateway>,
    resolver: EntityResolver,
}

impl CheckTableAvailabilityTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway.clone()),
            gateway,
        }
    }
}

impl Tool for CheckTableAvailabilityTool {
    type Input = CheckTableAvailabilityInput;

    fn name(&self) -> &str {
        "check_table_availability"
    }

    fn description(&self) -> &str {
        "Check whether a restaurant has a table free for a party on a given date, optionally at a specific time."
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
                    "check",
                    &format!("invalid date '{}', expected YYYY-MM-DD", input.date),
                ));
            }

            let Some(id) = self.resolver.resolve_restaurant_id(&input.restaurant).await else {
                return Ok(envelope::not_found("restaurant", &input.restaurant));
            };

            let mut query = vec![
                ("date", input.date.clone()),
                ("partySize", input.party_size.to_string()),
            ];
            if let Some(time) = &input.time {
                query.push(("time", time.clone()));
            }

            let response = self
                .gateway
                .get_with(&format!("/api/v1/restaurants/{}/availability", id), &query)
                .await?;
            Ok(envelope::success("availability", "check", response, None))
        }
    }
}
