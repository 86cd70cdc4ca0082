use crate::prelude::*;
use serde_json::json;
use std::sync::Arc;
use tavola_core::{encode_path_segment, ApiGateway, GatewayError};

const VALID_STATUSES: &[&str] = &[
    "pending",
    "confirmed",
    "checked_in",
    "completed",
    "cancelled",
    "no_show",
];

/// Input for updating a reservation's status
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateReservationStatusInput {
    /// Reservation id
    pub reservation_id: String,

    /// New status: pending, confirmed, checked_in, completed, cancelled, or no_show
    pub status: String,

    /// Reason for the change, if any
    #[serde(default)]
    pub reason: Option<String>,
}

/// Move a reservation through its lifecycle (confirm, check in, complete...).
pub struct UpdateReservationStatusTool {
    gateway: Arc<ApiGateway>,
}

impl UpdateReservationStatusTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

impl Tool for UpdateReservationStatusTool {
    type Input = UpdateReservationStatusInput;

    fn name(&self) -> &str {
        "update_reservation_status"
    }

    fn description(&self) -> &str {
        "Update the status of a reservation: confirm it, check the party in, mark it completed, cancelled, or no_show."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let status = input.status.trim().to_lowercase();
            if !VALID_STATUSES.contains(&status.as_str()) {
                return Ok(envelope::error(
                    "reservation",
                    "update_status",
                    &format!(
                        "invalid status '{}', expected one of: {}",
                        input.status,
                        VALID_STATUSES.join(", ")
                    ),
                ));
            }

            let mut body = json!({ "status": status });
            if let Some(reason) = &input.reason {
                body["reason"] = json!(reason);
            }

            let response = self
                .gateway
                .patch(
                    &format!(
                        "/api/v1/reservations/{}/status",
                        encode_path_segment(&input.reservation_id)
                    ),
                    &body,
                )
                .await;
            match response {
                Ok(record) => Ok(envelope::success("reservation", "update_status", record, None)),
                Err(GatewayError::Status { status: 404, .. }) => {
                    Ok(envelope::not_found("reservation", &input.reservation_id))
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}
