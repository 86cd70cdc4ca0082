//! Reservation lifecycle tools. Booking operations require `user` level;
//! availability checks stay guest-accessible.

mod availability;
mod cancel;
mod create;
mod get;
mod time_slots;
mod user_reservations;

pub use availability::CheckTableAvailabilityTool;
pub use cancel::CancelReservationTool;
pub use create::CreateReservationTool;
pub use get::GetReservationTool;
pub use time_slots::GetAvailableTimeSlotsTool;
pub use user_reservations::GetUserReservationsTool;

use std::sync::Arc;
use tavola_core::tool::DynTool;
use tavola_core::{box_tools, ApiGateway};

/// Every reservation tool, wired to the given gateway.
pub fn all_tools(gateway: Arc<ApiGateway>) -> Vec<Box<dyn DynTool>> {
    box_tools![
        CreateReservationTool::new(gateway.clone()),
        GetReservationTool::new(gateway.clone()),
        CancelReservationTool::new(gateway.clone()),
        GetUserReservationsTool::new(gateway.clone()),
        CheckTableAvailabilityTool::new(gateway.clone()),
        GetAvailableTimeSlotsTool::new(gateway),
    ]
}
