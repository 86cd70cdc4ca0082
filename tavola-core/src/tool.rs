use crate::context::ToolContext;
use crate::gateway::GatewayError;
use crate::permissions::AuthorizationError;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result types that tools can return.
///
/// Handlers in this catalogue produce either a human-readable string or a
/// structured JSON envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolResult {
    /// Plain text response
    Text(String),

    /// Structured JSON data
    Json(Value),
}

impl ToolResult {
    /// Create a JSON result from any serializable type
    pub fn json<T: Serialize>(value: T) -> Result<Self, serde_json::Error> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Create a text result from a string
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Get the text content, or a string rendering of the JSON
    pub fn as_text(&self) -> String {
        match self {
            ToolResult::Text(s) => s.clone(),
            ToolResult::Json(v) => v.to_string(),
        }
    }

    /// Get a reference to the text content if this is a Text variant
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ToolResult::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get a reference to the JSON value if this is a Json variant
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ToolResult::Json(v) => Some(v),
            _ => None,
        }
    }
}

/// Convert strings directly to ToolResult::Text
impl From<String> for ToolResult {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ToolResult {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Errors that can occur during tool dispatch and execution.
///
/// The variants keep the three caller-relevant failure classes apart: a
/// denial (fix the access level), a missing entity (give up or rephrase), and
/// a backend failure (retry later).
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The caller's access level is insufficient for this tool.
    #[error(transparent)]
    Denied(#[from] AuthorizationError),

    /// An identifier could not be resolved to a backend record.
    #[error("{0} not found")]
    NotFound(String),

    /// The backend call made by the handler itself failed.
    #[error("backend error: {0}")]
    Gateway(#[from] GatewayError),

    /// Input (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Anything else.
    #[error("{0}")]
    Custom(String),
}

impl From<String> for ToolError {
    fn from(s: String) -> Self {
        Self::Custom(s)
    }
}

impl From<&str> for ToolError {
    fn from(s: &str) -> Self {
        Self::Custom(s.to_string())
    }
}

/// Trait for implementing tools exposed to the LLM client.
///
/// Tools define an input type with `#[derive(Deserialize, JsonSchema)]` so the
/// JSON schema advertised to the client is generated from the Rust type. The
/// caller's [`ToolContext`] is threaded in explicitly; tools never reach for
/// ambient global state.
///
/// # Example
///
/// ```rust
/// use tavola_core::{Tool, ToolContext, ToolError, ToolResult};
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct EchoInput {
///     /// Message to echo back
///     message: String,
/// }
///
/// struct EchoTool;
///
/// impl Tool for EchoTool {
///     type Input = EchoInput;
///
///     fn name(&self) -> &str { "echo" }
///     fn description(&self) -> &str { "Echo a message" }
///
///     fn execute(
///         &self,
///         _ctx: &ToolContext,
///         input: Self::Input,
///     ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
///         async move { Ok(input.message.into()) }
///     }
/// }
/// ```
pub trait Tool: Send + Sync {
    /// The input type for this tool. Must implement `Deserialize` and `JsonSchema`.
    type Input: DeserializeOwned + JsonSchema;

    /// The name of the tool (e.g., "search_restaurants")
    fn name(&self) -> &str;

    /// A description of what the tool does
    fn description(&self) -> &str;

    /// Execute the tool with the caller's context and typed input
    fn execute(
        &self,
        ctx: &ToolContext,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send;

    /// Get the JSON schema for this tool's input.
    ///
    /// This is automatically implemented using the `JsonSchema` derive on `Input`.
    fn input_schema(&self) -> Value {
        let schema = schemars::schema_for!(Self::Input);
        serde_json::to_value(schema).unwrap_or(Value::Null)
    }
}

/// Object-safe trait for dynamic tool dispatch (used by the registry).
///
/// Users should implement [`Tool`] instead and use [`box_tool`] to convert.
pub trait DynTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn input_schema(&self) -> Value;
    fn execute_raw<'a>(
        &'a self,
        ctx: &'a ToolContext,
        input: Value,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<ToolResult, ToolError>> + Send + 'a>,
    >;
}

/// Convert a `Tool` into a type-erased `Box<dyn DynTool>` for storage in collections.
pub fn box_tool<T: Tool + 'static>(tool: T) -> Box<dyn DynTool> {
    Box::new(ToolWrapper(tool))
}

/// Create a `Vec<Box<dyn DynTool>>` from heterogeneous tool types.
///
/// # Example
///
/// ```ignore
/// let tools = box_tools![SearchRestaurantsTool::new(gateway.clone()),
///                        GetRestaurantInfoTool::new(gateway)];
/// registry.register_all(tools);
/// ```
#[macro_export]
macro_rules! box_tools {
    ($($tool:expr),* $(,)?) => {
        vec![$($crate::tool::box_tool($tool)),*]
    };
}

/// Internal wrapper that implements DynTool for any Tool
struct ToolWrapper<T>(T);

impl<T: Tool + 'static> DynTool for ToolWrapper<T> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn description(&self) -> &str {
        self.0.description()
    }

    fn input_schema(&self) -> Value {
        self.0.input_schema()
    }

    fn execute_raw<'a>(
        &'a self,
        ctx: &'a ToolContext,
        input: Value,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<ToolResult, ToolError>> + Send + 'a>,
    > {
        Box::pin(async move {
            let typed_input: T::Input = serde_json::from_value(input)
                .map_err(|e| ToolError::Custom(format!("invalid input: {}", e)))?;

            self.0.execute(ctx, typed_input).await
        })
    }
}
