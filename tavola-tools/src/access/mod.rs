//! Session access tools. Guest-accessible, so a fresh session can
//! identify itself and discover what it may call.

mod allowed;
mod set_context;

pub use allowed::GetAllowedToolsTool;
pub use set_context::SetAccessContextTool;

use std::sync::Arc;
use tavola_core::tool::DynTool;
use tavola_core::{box_tools, ContextStore, PermissionTable};

/// Both access tools, wired to the session's context store.
pub fn all_tools(
    context: ContextStore,
    permissions: Arc<PermissionTable>,
) -> Vec<Box<dyn DynTool>> {
    box_tools![
        SetAccessContextTool::new(context.clone()),
        GetAllowedToolsTool::new(context, permissions),
    ]
}
