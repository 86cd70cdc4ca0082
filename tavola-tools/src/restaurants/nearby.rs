use crate::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tavola_core::ApiGateway;

/// Input for finding restaurants near a coordinate
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetNearbyRestaurantsInput {
    /// Latitude of the search origin
    pub latitude: f64,

    /// Longitude of the search origin
    pub longitude: f64,

    /// Search radius in kilometers (default: 5)
    #[serde(default = "default_radius")]
    pub radius_km: f64,

    /// Maximum number of results to return (default: 10)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_radius() -> f64 {
    5.0
}

fn default_limit() -> u32 {
    10
}

/// Find restaurants within a radius of a coordinate.
pub struct GetNearbyRestaurantsTool {
    gateway: Arc<ApiGateway>,
}

impl GetNearbyRestaurantsTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

impl Tool for GetNearbyRestaurantsTool {
    type Input = GetNearbyRestaurantsInput;

    fn name(&self) -> &str {
        "get_nearby_restaurants"
    }

    fn description(&self) -> &str {
        "Find restaurants near a geographic coordinate, ordered by distance."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let query = [
                ("lat", input.latitude.to_string()),
                ("lng", input.longitude.to_string()),
                ("radius", input.radius_km.to_string()),
                ("limit", input.limit.to_string()),
            ];

            let response = self
                .gateway
                .get_with("/api/v1/restaurants/nearby", &query)
                .await?;
            let restaurants = envelope::items(&response);
            if restaurants.is_empty() {
                return Ok(envelope::empty("restaurant", "nearby"));
            }
            let count = restaurants.len();
            Ok(envelope::success(
                "restaurant",
                "nearby",
                Value::Array(restaurants),
                Some(count),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn input() -> GetNearbyRestaurantsInput {
        GetNearbyRestaurantsInput {
            latitude: 40.4168,
            longitude: -3.7038,
            radius_km: 2.5,
            limit: 10,
        }
    }

    #[tokio::test]
    async fn test_coordinates_passed_as_query_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/restaurants/nearby"))
            .and(query_param("lat", "40.4168"))
            .and(query_param("lng", "-3.7038"))
            .and(query_param("radius", "2.5"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "r-1", "distanceKm": 0.4}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GetNearbyRestaurantsTool::new(Arc::new(ApiGateway::new(&server.uri()).unwrap()));
        let result = tool.execute(&ToolContext::guest(), input()).await.unwrap();

        let body = result.as_json().unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["count"], 1);
    }

    #[tokio::test]
    async fn test_nothing_nearby_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/restaurants/nearby"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let tool = GetNearbyRestaurantsTool::new(Arc::new(ApiGateway::new(&server.uri()).unwrap()));
        let result = tool.execute(&ToolContext::guest(), input()).await.unwrap();

        assert_eq!(result.as_json().unwrap()["status"], "empty");
    }
}
