//! User account tools. Require `admin` level.

mod by_email;
mod info;
mod list;

pub use by_email::GetUserByEmailTool;
pub use info::GetUserInfoTool;
pub use list::ListUsersTool;

use std::sync::Arc;
use tavola_core::tool::DynTool;
use tavola_core::{box_tools, ApiGateway};

/// Every user tool, wired to the given gateway.
pub fn all_tools(gateway: Arc<ApiGateway>) -> Vec<Box<dyn DynTool>> {
    box_tools![
        ListUsersTool::new(gateway.clone()),
        GetUserInfoTool::new(gateway.clone()),
        GetUserByEmailTool::new(gateway),
    ]
}
