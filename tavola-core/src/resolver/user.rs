//! User resolution: canonical id, email, or name search.

use super::ident::{is_canonical_id, is_email};
use super::EntityResolver;
use crate::envelope::first_item;
use log::{debug, warn};
use serde_json::Value;

impl EntityResolver {
    /// Resolve a user by canonical id, email, or name, returning the full
    /// backend record.
    ///
    /// Email-shaped inputs use the exact-email search; everything else that
    /// is not a canonical id falls back to a name search. Both searches use
    /// limit 1 and take the first match.
    pub async fn resolve_user(&self, identifier: &str) -> Option<Value> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }

        if is_canonical_id(identifier) {
            debug!("resolving user by id: {}", identifier);
            return match self
                .gateway()
                .get(&format!("/api/v1/users/{}", identifier))
                .await
            {
                Ok(Value::Null) => None,
                Ok(record) => Some(record),
                Err(err) => {
                    warn!("user id lookup failed: {}", err);
                    None
                }
            };
        }

        let query = if is_email(identifier) {
            debug!("resolving user by email: {}", identifier);
            [("email", identifier.to_string()), ("limit", "1".to_string())]
        } else {
            debug!("resolving user by name: {}", identifier);
            [("name", identifier.to_string()), ("limit", "1".to_string())]
        };

        let response = match self.gateway().get_with("/api/v1/users", &query).await {
            Ok(response) => response,
            Err(err) => {
                warn!("user search failed: {}", err);
                return None;
            }
        };

        first_item(&response)
    }

    /// Resolve a user identifier to their canonical id.
    pub async fn resolve_user_id(&self, identifier: &str) -> Option<String> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }

        if is_canonical_id(identifier) {
            return self
                .resolve_user(identifier)
                .await
                .map(|_| identifier.to_string());
        }

        self.resolve_user(identifier)
            .await
            .and_then(|record| record.get("id").and_then(Value::as_str).map(String::from))
    }
}
