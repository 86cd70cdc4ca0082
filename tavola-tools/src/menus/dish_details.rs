use crate::prelude::*;
use std::sync::Arc;
use tavola_core::{encode_path_segment, ApiGateway, GatewayError};

/// Input for fetching one dish
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetDishDetailsInput {
    /// Dish id
    pub dish_id: String,
}

/// Fetch the full record for one dish.
pub struct GetDishDetailsTool {
    gateway: Arc<ApiGateway>,
}

impl GetDishDetailsTool {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

impl Tool for GetDishDetailsTool {
    type Input = GetDishDetailsInput;

    fn name(&self) -> &str {
        "get_dish_details"
    }

    fn description(&self) -> &str {
        "Get detailed information about a dish by its id: description, price, allergens, and dietary flags."
    }

    fn execute(
        &self,
        _ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
        async move {
            let response = self
                .gateway
                .get(&format!(
                    "/api/v1/dishes/{}",
                    encode_path_segment(&input.dish_id)
                ))
                .await;
            match response {
                Ok(dish) if dish.is_null() => Ok(envelope::not_found("dish", &input.dish_id)),
                Ok(dish) => Ok(envelope::success("dish", "get", dish, None)),
                Err(GatewayError::Status { status: 404, .. }) => {
                    Ok(envelope::not_found("dish", &input.dish_id))
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}
