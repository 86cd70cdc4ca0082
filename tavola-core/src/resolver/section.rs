//! Section resolution: canonical id, or name within a restaurant scope.
//!
//! Section names are only meaningful inside one restaurant, so name
//! resolution requires a restaurant identifier and resolves it first. The
//! dependency runs one way: sections depend on restaurants, never the
//! reverse.

use super::ident::is_canonical_id;
use super::EntityResolver;
use crate::envelope::items;
use log::{debug, warn};
use serde_json::Value;

impl EntityResolver {
    /// Resolve a section by canonical id, or by name within a restaurant.
    ///
    /// Name resolution without a restaurant scope fails immediately with no
    /// backend call. With a scope, the restaurant is resolved first (itself
    /// by id or name), then the restaurant's sections are matched by
    /// case-insensitive exact name - not a substring search.
    pub async fn resolve_section(
        &self,
        identifier: &str,
        restaurant_identifier: Option<&str>,
    ) -> Option<Value> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }

        if is_canonical_id(identifier) {
            debug!("resolving section by id: {}", identifier);
            return match self
                .gateway()
                .get(&format!("/api/v1/sections/{}", identifier))
                .await
            {
                Ok(Value::Null) => None,
                Ok(record) => Some(record),
                Err(err) => {
                    warn!("section id lookup failed: {}", err);
                    None
                }
            };
        }

        let Some(restaurant_identifier) = restaurant_identifier else {
            warn!("section name lookup without a restaurant scope: {}", identifier);
            return None;
        };

        let restaurant_id = self.resolve_restaurant_id(restaurant_identifier).await?;

        debug!(
            "resolving section '{}' within restaurant {}",
            identifier, restaurant_id
        );
        let response = match self
            .gateway()
            .get(&format!("/api/v1/restaurants/{}/sections", restaurant_id))
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!("section listing failed: {}", err);
                return None;
            }
        };

        let wanted = identifier.to_lowercase();
        items(&response).into_iter().find(|section| {
            section
                .get("name")
                .and_then(Value::as_str)
                .is_some_and(|name| name.to_lowercase() == wanted)
        })
    }

    /// Resolve a section identifier to its canonical id.
    pub async fn resolve_section_id(
        &self,
        identifier: &str,
        restaurant_identifier: Option<&str>,
    ) -> Option<String> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }

        if is_canonical_id(identifier) {
            return self
                .resolve_section(identifier, None)
                .await
                .map(|_| identifier.to_string());
        }

        self.resolve_section(identifier, restaurant_identifier)
            .await
            .and_then(|record| record.get("id").and_then(Value::as_str).map(String::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::ApiGateway;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RESTAURANT_ID: &str = "123e4567-e89b-12d3-a456-426614174000";
    const SECTION_ID: &str = "0f1e2d3c-4b5a-6978-8796-a5b4c3d2e1f0";

    async fn resolver_for(server: &MockServer) -> EntityResolver {
        EntityResolver::new(Arc::new(ApiGateway::new(&server.uri()).unwrap()))
    }

    fn mount_restaurant_by_name(server: &MockServer) -> impl std::future::Future<Output = ()> + '_ {
        Mock::given(method("GET"))
            .and(path("/api/v1/restaurants"))
            .and(query_param("name", "Pizza Palace"))
            .and(query_param("limit", "1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": [{"id": RESTAURANT_ID, "name": "Pizza Palace"}]})),
            )
            .mount(server)
    }

    fn mount_sections(server: &MockServer) -> impl std::future::Future<Output = ()> + '_ {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/restaurants/{}/sections", RESTAURANT_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": SECTION_ID, "name": "Terraza"},
                {"id": "s-2", "name": "Salón"}
            ])))
            .mount(server)
    }

    // ===== Scoped name resolution =====

    #[tokio::test]
    async fn test_name_match_is_case_insensitive_and_exact() {
        let server = MockServer::start().await;
        mount_restaurant_by_name(&server).await;
        mount_sections(&server).await;

        let resolver = resolver_for(&server).await;
        let id = resolver
            .resolve_section_id("TERRAZA", Some("Pizza Palace"))
            .await;
        assert_eq!(id.as_deref(), Some(SECTION_ID));

        // Exact equality, not substring matching.
        assert_eq!(
            resolver.resolve_section_id("Terr", Some("Pizza Palace")).await,
            None
        );
    }

    #[tokio::test]
    async fn test_restaurant_scope_can_be_a_canonical_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/restaurants/{}", RESTAURANT_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": RESTAURANT_ID})))
            .mount(&server)
            .await;
        mount_sections(&server).await;

        let resolver = resolver_for(&server).await;
        let record = resolver
            .resolve_section("Salón", Some(RESTAURANT_ID))
            .await
            .unwrap();
        assert_eq!(record["id"], "s-2");
    }

    #[tokio::test]
    async fn test_name_without_scope_fails_with_no_backend_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let resolver = resolver_for(&server).await;
        assert_eq!(resolver.resolve_section_id("Terrace", None).await, None);
        assert_eq!(resolver.resolve_section("Terrace", None).await, None);
    }

    #[tokio::test]
    async fn test_unresolvable_restaurant_scope_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/restaurants"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let resolver = resolver_for(&server).await;
        assert_eq!(
            resolver.resolve_section_id("Terraza", Some("Nowhere")).await,
            None
        );
    }

    // ===== Canonical id path =====

    #[tokio::test]
    async fn test_canonical_id_ignores_scope_and_validates_existence() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/sections/{}", SECTION_ID)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": SECTION_ID, "name": "Terraza"})),
            )
            .expect(2)
            .mount(&server)
            .await;

        let resolver = resolver_for(&server).await;
        assert_eq!(
            resolver.resolve_section_id(SECTION_ID, None).await.as_deref(),
            Some(SECTION_ID)
        );
        let record = resolver.resolve_section(SECTION_ID, None).await.unwrap();
        assert_eq!(record["name"], "Terraza");
    }

    #[tokio::test]
    async fn test_unknown_section_id_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/sections/{}", SECTION_ID)))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let resolver = resolver_for(&server).await;
        assert_eq!(resolver.resolve_section_id(SECTION_ID, None).await, None);
    }
}
