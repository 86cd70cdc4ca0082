use crate::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for listing the tables of a section
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetSectionTablesInput {
    /// Section name or id
    pub section: String,

    /// Restaurant name or id. Required when the section is given by name,
    /// since section names are only unique within one restaurant.
    #[serde(default)]
    pub restaurant: Option<String>,
}

/// List the tables of one dining section.
pub struct GetSectionTablesTool {
    gateway: Arc<ApiGateway>,
    resolver: EntityResolver,
}

impl GetSectionTablesTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway.clone()),
            gateway,
        }
    }
}

impl Tool for GetSectionTablesTool {
    type Input = GetSectionTablesInput;

    fn name(&self) -> &str {
        "get_section_tables"
    }

    fn description(&self) -> &str {
        "List the tables in a dining section. Accepts a section id, or a section name together with the restaurant it belongs to."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let section_id = self
                .resolver
                .resolve_section_id(&input.section, input.restaurant.as_deref())
                .await;
            let Some(id) = section_id else {
                return Ok(envelope::not_found("section", &input.section));
            };

            let response = self
                .gateway
                .get(&format!("/api/v1/sections/{}/tables", id))
                .await?;
            let tables = envelope::items(&response);
            if tables.is_empty() {
                return Ok(envelope::empty("table", "list"));
            }
            let count = tables.len();
            Ok(envelope::success(
                "table",
                "list",
                Value::Array(tables),
                Some(count),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SECTION_ID: &str = "0f1e2d3c-4b5a-6978-8796-a5b4c3d2e1f0";

    #[tokio::test]
    async fn test_tables_by_section_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/sections/{}", SECTION_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": SECTION_ID})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/sections/{}/tables", SECTION_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "t-1", "number": 1, "capacity": 4},
                {"id": "t-2", "number": 2, "capacity": 2}
            ])))
            .mount(&server)
            .await;

        let tool = GetSectionTablesTool::new(Arc::new(ApiGateway::new(&server.uri()).unwrap()));
        let result = tool
            .execute(
                &ToolContext::guest(),
                GetSectionTablesInput {
                    section: SECTION_ID.to_string(),
                    restaurant: None,
                },
            )
            .await
            .unwrap();

        let body = result.as_json().unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["count"], 2);
    }

    #[tokio::test]
    async fn test_section_name_without_restaurant_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let tool = GetSectionTablesTool::new(Arc::new(ApiGateway::new(&server.uri()).unwrap()));
        let result = tool
            .execute(
                &ToolContext::guest(),
                GetSectionTablesInput {
                    section: "Terraza".to_string(),
                    restaurant: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(result.as_json().unwrap()["status"], "not_found");
    }
}
