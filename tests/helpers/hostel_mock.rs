//! Mock hostel API server for testing
//!
//! Wraps a wiremock server and mounts envelope responses for the backend
//! endpoints the client calls.

use serde_json::{json, Map, Value};
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock hostel backend
pub struct HostelMockServer {
    pub server: MockServer,
}

impl HostelMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// `{success: true, ...payload}` for any request to `route`
    pub async fn mock_success(&self, verb: &str, route: &str, payload: Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(payload)))
            .mount(&self.server)
            .await;
    }

    /// Success envelope for exactly one request whose JSON body equals `request`
    pub async fn mock_success_for(&self, verb: &str, route: &str, request: Value, payload: Value) {
        Mock::given(method(verb))
            .and(path(route))
            .and(body_json(request))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(payload)))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// `{success: false, errors: [{msg}]}` with the given HTTP status
    pub async fn mock_failure(&self, verb: &str, route: &str, status: u16, message: &str) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(json!({ "success": false, "errors": [{ "msg": message }] })),
            )
            .mount(&self.server)
            .await;
    }

    /// A non-envelope body, e.g. an HTML error page from a proxy
    pub async fn mock_raw(&self, verb: &str, route: &str, status: u16, body: &str) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Fail the test on drop if `route` receives any request
    pub async fn expect_no_request(&self, verb: &str, route: &str) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Delay a success response, to race it against teardown
    pub async fn mock_delayed(&self, verb: &str, route: &str, payload: Value, delay_ms: u64) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(success_envelope(payload))
                    .set_delay(std::time::Duration::from_millis(delay_ms)),
            )
            .mount(&self.server)
            .await;
    }

    /// Paths of every request received so far, in arrival order
    pub async fn received_paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect()
    }

    pub async fn reset(&self) {
        self.server.reset().await;
    }
}

fn success_envelope(payload: Value) -> Value {
    let mut object = match payload {
        Value::Object(object) => object,
        _ => Map::new(),
    };
    object.insert("success".to_string(), Value::Bool(true));
    Value::Object(object)
}
