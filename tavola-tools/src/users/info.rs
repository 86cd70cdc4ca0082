use crate::prelude::*;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for fetching one user account
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetUserInfoInput {
    /// User name, email, or id
    pub user: String,
}

/// Fetch the full record for one user account.
pub struct GetUserInfoTool {
    resolver: EntityResolver,
}

impl GetUserInfoTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway),
        }
    }
}

impl Tool for GetUserInfoTool {
    type Input = GetUserInfoInput;

    fn name(&self) -> &str {
        "get_user_info"
    }

    fn description(&self) -> &str {
        "Get detailed information about a user account by name, email, or id."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            match self.resolver.resolve_user(&input.user).await {
                Some(record) => Ok(envelope::success("user", "get", record, None)),
                None => Ok(envelope::not_found("user", &input.user)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_name_resolves_to_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users"))
            .and(query_param("name", "Ana García"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "u-1", "name": "Ana García", "role": "customer"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GetUserInfoTool::new(Arc::new(ApiGateway::new(&server.uri()).unwrap()));
        let result = tool
            .execute(
                &ToolContext::guest(),
                GetUserInfoInput {
                    user: "Ana García".to_string(),
                },
            )
            .await
            .unwrap();

        let body = result.as_json().unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["data"]["role"], "customer");
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let tool = GetUserInfoTool::new(Arc::new(ApiGateway::new(&server.uri()).unwrap()));
        let result = tool
            .execute(
                &ToolContext::guest(),
                GetUserInfoInput {
                    user: "Nobody".to_string(),
                },
            )
            .await
            .unwrap();

        let body = result.as_json().unwrap();
        assert_eq!(body["status"], "not_found");
        assert_eq!(body["identifier"], "Nobody");
    }
}
