//! Verify built requests against JSON vectors stored in `test-vectors/`.
//!
//! Paths, bodies and signatures are compared as exact strings: the server
//! recomputes the signature from the bytes it receives, so a reordered key or
//! a differently escaped character is a real incompatibility.

use checkers_core::{
    CheckCreateRequest, CheckUpdateRequest, CheckersClient, ClientConfig, HttpMethod, HttpResponse,
    SignedRequest, Transport, TransportError, SIGNATURE_HEADER,
};

/// Never reached: vectors only exercise `build_*`.
struct Offline;

impl Transport for Offline {
    fn send(&self, _request: &SignedRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Request("offline".to_string()))
    }
}

fn vectors() -> serde_json::Value {
    serde_json::from_str(include_str!("../../test-vectors/requests.json")).unwrap()
}

fn client(vectors: &serde_json::Value) -> CheckersClient<Offline> {
    let config = ClientConfig::new(
        vectors["base_url"].as_str().unwrap(),
        vectors["client_key"].as_str().unwrap(),
        vectors["client_secret"].as_str().unwrap(),
    )
    .unwrap();
    CheckersClient::new(config, Offline)
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "POST" => HttpMethod::Post,
        "PATCH" => HttpMethod::Patch,
        other => panic!("unknown method: {other}"),
    }
}

fn assert_request(name: &str, vectors: &serde_json::Value, req: &SignedRequest, expected: &serde_json::Value) {
    let base_url = vectors["base_url"].as_str().unwrap();
    let path = expected["path"].as_str().unwrap();

    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, path, "{name}: path");
    assert_eq!(req.url, format!("{base_url}/api{path}"), "{name}: url");
    assert_eq!(req.body, expected["body"].as_str().unwrap(), "{name}: body");
    assert_eq!(
        req.header(SIGNATURE_HEADER),
        expected["signature"].as_str(),
        "{name}: signature"
    );
    assert_eq!(
        req.header("X-Client-Key"),
        vectors["client_key"].as_str(),
        "{name}: client key"
    );
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let vectors = vectors();
    let c = client(&vectors);
    for case in vectors["create"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: CheckCreateRequest = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_create_check_run(&input).unwrap();
        assert_request(name, &vectors, &req, &case["expected_request"]);
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let vectors = vectors();
    let c = client(&vectors);
    for case in vectors["update"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: CheckUpdateRequest = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_update_check_run(&input).unwrap();
        assert_request(name, &vectors, &req, &case["expected_request"]);
    }
}
