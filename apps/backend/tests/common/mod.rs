#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde::de::DeserializeOwned;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read a JSON body, failing with the raw body text when it does not parse.
pub async fn read_json<T: DeserializeOwned>(resp: ServiceResponse<BoxBody>) -> T {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("invalid JSON ({e}): {}", String::from_utf8_lossy(&body)))
}

pub fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
