/// Lambda event handlers
pub mod contact;

pub use contact::HandlerContext;

use crate::models::HandlerResponse;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

/// Main Lambda handler - every invocation terminates in a response, never an
/// unhandled failure.
pub async fn handler(
    ctx: &HandlerContext,
    event: LambdaEvent<Value>,
) -> Result<HandlerResponse, Error> {
    let (payload, context) = event.into_parts();
    info!(request_id = %context.request_id, "Received contact form event");

    let response = contact::process(ctx, &payload).await;

    info!(
        request_id = %context.request_id,
        status_code = response.status_code,
        "Returning response"
    );
    Ok(response)
}
