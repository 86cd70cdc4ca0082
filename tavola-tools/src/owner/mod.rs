//! Restaurant management tools. Require `owner` level.

mod analytics;
mod restaurant_reservations;
mod statistics;
mod update_status;

pub use analytics::GetRestaurantAnalyticsTool;
pub use restaurant_reservations::GetRestaurantReservationsTool;
pub use statistics::GetReservationStatisticsTool;
pub use update_status::UpdateReservationStatusTool;

use std::sync::Arc;
use tavola_core::tool::DynTool;
use tavola_core::{box_tools, ApiGateway};

/// Every owner tool, wired to the given gateway.
pub fn all_tools(gateway: Arc<ApiGateway>) -> Vec<Box<dyn DynTool>> {
    box_tools![
        GetRestaurantReservationsTool::new(gateway.clone()),
        UpdateReservationStatusTool::new(gateway.clone()),
        GetRestaurantAnalyticsTool::new(gateway.clone()),
        GetReservationStatisticsTool::new(gateway),
    ]
}
