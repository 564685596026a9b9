//! AWS Lambda handler for the investment calculator
//!
//! Accepts API Gateway HTTP API (v2) events. Calculator parameters come from
//! the query string (`initial`, `monthly`, `return`, `years`); bad values fall
//! back to defaults. Responds with the calculator view as JSON.

use std::collections::HashMap;

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::{ApiGatewayV2httpRequest, ApiGatewayV2httpResponse};
use clinic_analytics::calculator::{INITIAL_KEY, MONTHLY_KEY, RETURN_KEY, YEARS_KEY};
use clinic_analytics::{CalculatorDefaults, CalculatorParams, CalculatorView};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{error, info};

fn json_response(status_code: i64, body: String) -> Result<ApiGatewayV2httpResponse, Error> {
    let mut response = ApiGatewayV2httpResponse {
        status_code,
        body: Some(Body::Text(body)),
        ..Default::default()
    };
    response.headers.insert("content-type", "application/json".parse()?);
    response.headers.insert("access-control-allow-origin", "*".parse()?);
    Ok(response)
}

/// Lambda handler function
async fn handler(event: LambdaEvent<ApiGatewayV2httpRequest>) -> Result<ApiGatewayV2httpResponse, Error> {
    let start = std::time::Instant::now();
    let raw = &event.payload.query_string_parameters;

    let query: HashMap<String, String> = [INITIAL_KEY, MONTHLY_KEY, RETURN_KEY, YEARS_KEY]
        .into_iter()
        .filter_map(|key| raw.first(key).map(|value| (key.to_string(), value.to_string())))
        .collect();

    let params = CalculatorParams::from_query(&query, &CalculatorDefaults::default());

    let body = CalculatorView::build(params).and_then(|view| serde_json::to_string(&view));
    match body {
        Ok(body) => {
            info!("projected {} years in {:?}", params.years, start.elapsed());
            json_response(200, body)
        }
        Err(e) => {
            error!("failed to encode calculator view: {}", e);
            json_response(500, r#"{"error":"failed to encode response"}"#.to_string())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
