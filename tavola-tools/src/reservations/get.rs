use crate::prelude::*;
use std::sync::Arc;
use tavola_core::{encode_path_segment, ApiGateway, GatewayError};

/// Input for fetching one reservation
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetReservationInput {
    /// Reservation id
    pub reservation_id: String,
}

/// Fetch the full record for one reservation.
pub struct GetReservationTool {
    gateway: Arc<ApiGateway>,
}

impl GetReservationTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

impl Tool for GetReservationTool {
    type Input = GetReservationInput;

    fn name(&self) -> &str {
        "get_reservation"
    }

    fn description(&self) -> &str {
        "Get the details of a reservation by its id: date, time, party size, table, and status."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let response = self
                .gateway
                .get(&format!(
                    "/api/v1/reservations/{}",
                    encode_path_segment(&input.reservation_id)
                ))
                .await;
            match response {
                Ok(record) if record.is_null() => {
                    Ok(envelope::not_found("reservation", &input.reservation_id))
                }
                Ok(record) => Ok(envelope::success("reservation", "get", record, None)),
                Err(GatewayError::Status { status: 404, .. }) => {
                    Ok(envelope::not_found("reservation", &input.reservation_id))
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}
