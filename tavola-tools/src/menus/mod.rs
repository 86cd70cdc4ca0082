//! Menu and dish browsing tools. All guest-accessible.

mod by_category;
mod categories;
mod dish_details;
mod dishes;
mod search;

pub use by_category::GetDishesByCategoryTool;
pub use categories::GetMenuCategoriesTool;
pub use dish_details::GetDishDetailsTool;
pub use dishes::GetMenuDishesTool;
pub use search::SearchDishesTool;

use std::sync::Arc;
use tavola_core::tool::DynTool;
use tavola_core::{box_tools, ApiGateway};

/// Every menu tool, wired to the given gateway.
pub fn all_tools(gateway: Arc<ApiGateway>) -> Vec<Box<dyn DynTool>> {
    box_tools![
        GetMenuDishesTool::new(gateway.clone()),
        GetDishDetailsTool::new(gateway.clone()),
        SearchDishesTool::new(gateway.clone()),
        GetMenuCategoriesTool::new(gateway.clone()),
        GetDishesByCategoryTool::new(gateway),
    ]
}
