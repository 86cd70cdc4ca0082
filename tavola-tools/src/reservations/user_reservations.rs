use crate::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tavola_core::{ApiGateway, EntityResolver};

/// Input for listing a user's reservations
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetUserReservationsInput {
    /// User name, email, or id. Defaults to the caller's own identity.
    #[serde(default)]
    pub user: Option<String>,

    /// Reservation status to filter by (e.g., "pending", "confirmed")
    #[serde(default)]
    pub status: Option<String>,

    /// Earliest reservation date to include, YYYY-MM-DD
    #[serde(default)]
    pub date_from: Option<String>,

    /// Latest reservation date to include, YYYY-MM-DD
    #[serde(default)]
    pub date_to: Option<String>,

    /// Maximum number of results to return (default: 20)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    20
}

/// List the reservations belonging to one user.
pub struct GetUserReservationsTool {
    gateway: Arc<ApiGateway>,
    resolver: EntityResolver,
}

impl GetUserReservationsTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            resolver: EntityResolver::new(gateway.clone()),
            gateway,
        }
    }
}

impl Tool for GetUserReservationsTool {
    type Input = GetUserReservationsInput;

    fn name(&self) -> &str {
        "get_user_reservations"
    }

    fn description(&self) -> &str {
        "List a user's reservations, optionally filtered by status or date range. Defaults to the caller's own reservations."
    }

    fn execute(
        &self,
        ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let user_ref = input
                .user
                .clone()
                .or_else(|| ctx.user_id.clone())
                .or_else(|| ctx.user_email.clone());
            let Some(user_ref) = user_ref else {
                return Ok(envelope::error(
                    "reservation",
                    "list_for_user",
                    "no user given and the session has no user identity",
                ));
            };
            let Some(customer_id) = self.resolver.resolve_user_id(&user_ref).await else {
                return Ok(envelope::not_found("user", &user_ref));
            };

            let mut query = vec![
                ("customerId", customer_id),
                ("limit", input.limit.to_string()),
            ];
            if let Some(status) = &input.status {
                query.push(("status", status.clone()));
            }
            if let Some(from) = &input.date_from {
                query.push(("dateFrom", from.clone()));
            }
            if let Some(to) = &input.date_to {
                query.push(("dateTo", to.clone()));
            }

            let response = self.gateway.get_with("/api/v1/reservations", &query).await?;
            let reservations = envelope::items(&response);
            if reservations.is_empty() {
                return Ok(envelope::empty("reservation", "list_for_user"));
            }
            let count = reservations.len();
            Ok(envelope::success(
                "reservation",
                "list_for_user",
                Value::Array(reservations),
                Some(count),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tavola_core::AccessLevel;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn input() -> GetUserReservationsInput {
        GetUserReservationsInput {
            user: None,
            status: None,
            date_from: None,
            date_to: None,
            limit: 20,
        }
    }

    #[tokio::test]
    async fn test_user_defaults_to_session_email() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users"))
            .and(query_param("email", "ana@example.com"))
            .and(query_param("limit", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "u-1"}]})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/reservations"))
            .and(query_param("customerId", "u-1"))
            .and(query_param("status", "confirmed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "res-1", "status": "confirmed"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let ctx = ToolContext::new(AccessLevel::User).with_user_email("ana@example.com");
        let tool = GetUserReservationsTool::new(Arc::new(ApiGateway::new(&server.uri()).unwrap()));
        let mut request = input();
        request.status = Some("confirmed".to_string());
        let result = tool.execute(&ctx, request).await.unwrap();

        let body = result.as_json().unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["count"], 1);
    }

    #[tokio::test]
    async fn test_explicit_user_wins_over_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users"))
            .and(query_param("email", "bob@example.com"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "u-2"}]})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/reservations"))
            .and(query_param("customerId", "u-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let ctx = ToolContext::new(AccessLevel::Admin).with_user_email("ana@example.com");
        let tool = GetUserReservationsTool::new(Arc::new(ApiGateway::new(&server.uri()).unwrap()));
        let mut request = input();
        request.user = Some("bob@example.com".to_string());
        let result = tool.execute(&ctx, request).await.unwrap();

        assert_eq!(result.as_json().unwrap()["status"], "empty");
    }

    #[tokio::test]
    async fn test_anonymous_session_errors_without_backend_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let tool = GetUserReservationsTool::new(Arc::new(ApiGateway::new(&server.uri()).unwrap()));
        let result = tool
            .execute(&ToolContext::new(AccessLevel::User), input())
            .await
            .unwrap();

        assert_eq!(result.as_json().unwrap()["status"], "error");
    }
}
