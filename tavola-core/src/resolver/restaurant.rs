//! Restaurant resolution: canonical id or name search.

use super::ident::is_canonical_id;
use super::EntityResolver;
use crate::envelope::first_item;
use log::{debug, warn};
use serde_json::Value;

impl EntityResolver {
    /// Resolve a restaurant by name or canonical id, returning the full
    /// backend record.
    ///
    /// A canonical-id input is fetched directly; a syntactically valid id
    /// that the backend does not know yields `None`. Anything else is a
    /// name search with limit 1, first match wins.
    pub async fn resolve_restaurant(&self, identifier: &str) -> Option<Value> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }

        if is_canonical_id(identifier) {
            debug!("resolving restaurant by id: {}", identifier);
            return match self
                .gateway()
                .get(&format!("/api/v1/restaurants/{}", identifier))
                .await
            {
                Ok(Value::Null) => None,
                Ok(record) => Some(record),
                Err(err) => {
                    warn!("restaurant id lookup failed: {}", err);
                    None
                }
            };
        }

        debug!("resolving restaurant by name: {}", identifier);
        let response = match self
            .gateway()
            .get_with(
                "/api/v1/restaurants",
                &[("name", identifier.to_string()), ("limit", "1".to_string())],
            )
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!("restaurant name search failed: {}", err);
                return None;
            }
        };

        first_item(&response)
    }

    /// Resolve a restaurant identifier to its canonical id.
    ///
    /// Idempotent for existing canonical ids: the input is echoed back after
    /// an existence check.
    pub async fn resolve_restaurant_id(&self, identifier: &str) -> Option<String> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }

        if is_canonical_id(identifier) {
            return self
                .resolve_restaurant(identifier)
                .await
                .map(|_| identifier.to_string());
        }

        self.resolve_restaurant(identifier)
            .await
            .and_then(|record| record.get("id").and_then(Value::as_str).map(String::from))
    }
}
