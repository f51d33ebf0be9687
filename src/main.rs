use formrelay::{HandlerContext, handler};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .json()
        .init();

    info!("Starting formrelay Lambda function");

    // The SES client and configuration are built once and shared across
    // invocations
    let ctx = HandlerContext::new().await?;

    // Run the Lambda runtime
    run(service_fn(|event: LambdaEvent<Value>| handler(&ctx, event))).await
}
