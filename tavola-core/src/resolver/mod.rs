//! Entity resolution.
//!
//! Tools accept human-friendly identifiers - restaurant names, user emails -
//! while the backend speaks canonical ids. The [`EntityResolver`] translates
//! between the two: inputs already in canonical form are validated with a
//! direct fetch, anything else goes through a backend search.
//!
//! Resolution never signals: a lookup that finds nothing, and a lookup whose
//! backend call fails, both come back as `None`. Handlers decide how to
//! report the absence.
//!
//! Two entry points exist per entity kind: `resolve_x` returns the full
//! backend record, `resolve_x_id` just the canonical id. For the section
//! kind, name resolution additionally needs a restaurant scope and resolves
//! the restaurant first ([`EntityResolver::resolve_section`]).

pub mod ident;

mod restaurant;
mod section;
mod user;

use crate::gateway::ApiGateway;
use std::sync::Arc;

pub use ident::{is_canonical_id, is_email};

/// Resolves names, emails, and canonical ids to backend records.
///
/// Cheap to clone; shares the gateway connection pool.
#[derive(Clone)]
pub struct EntityResolver {
    gateway: Arc<ApiGateway>,
}

impl EntityResolver {
    /// Resolver over the given gateway.
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub(crate) fn gateway(&self) -> &ApiGateway {
        &self.gateway
    }
}
