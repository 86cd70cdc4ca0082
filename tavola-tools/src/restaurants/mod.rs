//! Restaurant discovery tools. All guest-accessible.

mod by_name;
mod info;
mod menu;
mod nearby;
mod schedule;
mod section_tables;
mod sections;
mod search;

pub use by_name::GetRestaurantByNameTool;
pub use info::GetRestaurantInfoTool;
pub use menu::GetRestaurantMenuTool;
pub use nearby::GetNearbyRestaurantsTool;
pub use schedule::GetRestaurantScheduleTool;
pub use section_tables::GetSectionTablesTool;
pub use sections::GetRestaurantSectionsTool;
pub use search::SearchRestaurantsTool;

use std::sync::Arc;
use tavola_core::tool::DynTool;
use tavola_core::{box_tools, ApiGateway};

/// Every restaurant tool, wired to the given gateway.
pub fn all_tools(gateway: Arc<ApiGateway>) -> Vec<Box<dyn DynTool>> {
    box_tools![
        SearchRestaurantsTool::new(gateway.clone()),
        GetRestaurantInfoTool::new(gateway.clone()),
        GetRestaurantByNameTool::new(gateway.clone()),
        GetRestaurantMenuTool::new(gateway.clone()),
        GetRestaurantScheduleTool::new(gateway.clone()),
        GetRestaurantSectionsTool::new(gateway.clone()),
        GetSectionTablesTool::new(gateway.clone()),
        GetNearbyRestaurantsTool::new(gateway),
    ]
}
