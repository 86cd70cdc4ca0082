use crate::prelude::*;
use serde_json::json;
use std::sync::Arc;
use tavola_core::{encode_path_segment, ApiGateway, GatewayError};

/// Input for cancelling a reservation
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CancelReservationInput {
    /// Reservation id
    pub reservation_id: String,

    /// Reason for the cancellation, passed to the restaurant
    #[serde(default)]
    pub reason: Option<String>,
}

/// Cancel an existing reservation.
pub struct CancelReservationTool {
    gateway: Arc<ApiGateway>,
}

impl CancelReservationTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

impl Tool for CancelReservationTool {
    type Input = CancelReservationInput;

    fn name(&self) -> &str {
        "cancel_reservation"
    }

    fn description(&self) -> &str {
        "Cancel a reservation by its id, optionally recording the reason."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let mut body = json!({});
            if let Some(reason) = &input.reason {
                body["reason"] = json!(reason);
            }

            let response = self
                .gateway
                .patch(
                    &format!(
                        "/api/v1/reservations/{}/cancel",
                        encode_path_segment(&input.reservation_id)
                    ),
                    &body,
                )
                .await;
            match response {
                Ok(record) => Ok(envelope::success("reservation", "cancel", record, None)),
                Err(GatewayError::Status { status: 404, .. }) => {
                    Ok(envelope::not_found("reservation", &input.reservation_id))
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}
