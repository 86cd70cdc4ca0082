//! Per-session execution context.
//!
//! Every tool invocation runs against a [`ToolContext`] describing who the
//! caller is and at which [`AccessLevel`]. The context is carried by a
//! [`ContextStore`], a handle owned by one client session (one logical call
//! chain). Sessions never share a store, so concurrent chains cannot observe
//! each other's context; there is no process-global mutable state here.

use crate::access::AccessLevel;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Immutable caller context for one tool invocation.
///
/// The default context is an anonymous guest: all optional identity fields
/// empty, lowest access level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolContext {
    /// The caller's access level, used for authorization.
    pub access_level: AccessLevel,
    /// Canonical user id, for user-scoped queries.
    pub user_id: Option<String>,
    /// Caller email, used when the id is not known yet.
    pub user_email: Option<String>,
    /// Restaurant scope for owner-level operations.
    pub restaurant_id: Option<String>,
}

impl ToolContext {
    /// Context with the given level and no identity.
    pub fn new(access_level: AccessLevel) -> Self {
        Self {
            access_level,
            ..Self::default()
        }
    }

    /// The anonymous guest context.
    pub fn guest() -> Self {
        Self::default()
    }

    /// Attach a caller id.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Attach a caller email.
    pub fn with_user_email(mut self, user_email: impl Into<String>) -> Self {
        self.user_email = Some(user_email.into());
        self
    }

    /// Attach a restaurant scope.
    pub fn with_restaurant_id(mut self, restaurant_id: impl Into<String>) -> Self {
        self.restaurant_id = Some(restaurant_id.into());
        self
    }
}

/// Context holder for one logical call chain.
///
/// Cloning the store yields another handle to the *same* chain; create a new
/// store per client session to get an isolated chain. Reads return a snapshot,
/// so a context observed at the start of a dispatch stays stable even if the
/// session replaces it mid-flight.
#[derive(Debug, Clone, Default)]
pub struct ContextStore {
    inner: Arc<RwLock<ToolContext>>,
}

impl ContextStore {
    /// New store holding the default guest context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current context.
    pub fn current(&self) -> ToolContext {
        self.inner.read().clone()
    }

    /// Replace the current context for the remainder of the chain.
    pub fn set(&self, context: ToolContext) {
        *self.inner.write() = context;
    }

    /// Restore the default guest context.
    pub fn reset(&self) {
        *self.inner.write() = ToolContext::default();
    }
}
