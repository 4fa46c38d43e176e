use axum::http::{self, Request, StatusCode};
use checkers_core::signer;
use http_body_util::BodyExt;
use mock_server::{app, CheckRun, Credentials, ErrorBody, DEFAULT_CLIENT_KEY, DEFAULT_CLIENT_SECRET};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Build a request signed the way the client signs it: over the path below
/// `/api`.
fn signed_request(method: &str, path: &str, body: &str) -> Request<String> {
    let signature = signer::sign(path, body, DEFAULT_CLIENT_SECRET);
    Request::builder()
        .method(method)
        .uri(format!("/api{path}"))
        .header(http::header::CONTENT_TYPE, "application/json")
        .header("X-Client-Key", DEFAULT_CLIENT_KEY)
        .header("X-Request-Signature", signature)
        .body(body.to_string())
        .unwrap()
}

// --- create ---

#[tokio::test]
async fn create_check_run_returns_201() {
    let resp = app(Credentials::default())
        .oneshot(signed_request(
            "POST",
            "/check/lint/octo/repo/deadbeef",
            r#"{"status":"queued"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let run: CheckRun = body_json(resp).await;
    assert_eq!(run.id, 1);
    assert_eq!(run.name, "lint");
    assert_eq!(run.owner, "octo");
    assert_eq!(run.repo, "repo");
    assert_eq!(run.head_sha, "deadbeef");
    assert_eq!(run.payload["status"], "queued");
}

#[tokio::test]
async fn create_decodes_encoded_segments() {
    let resp = app(Credentials::default())
        .oneshot(signed_request("POST", "/check/My%20Check/Acme/wid%2Fgets/abc123", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let run: CheckRun = body_json(resp).await;
    assert_eq!(run.name, "My Check");
    assert_eq!(run.repo, "wid/gets");
}

#[tokio::test]
async fn create_without_client_key_returns_401() {
    let resp = app(Credentials::default())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/check/lint/octo/repo/deadbeef")
                .body("{}".to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn signature_over_api_prefixed_path_returns_403() {
    let body = "{}";
    let signature = signer::sign("/api/check/lint/octo/repo/deadbeef", body, DEFAULT_CLIENT_SECRET);
    let resp = app(Credentials::default())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/check/lint/octo/repo/deadbeef")
                .header("X-Client-Key", DEFAULT_CLIENT_KEY)
                .header("X-Request-Signature", signature)
                .body(body.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let err: ErrorBody = body_json(resp).await;
    assert_eq!(err.message, "request signature mismatch");
}

#[tokio::test]
async fn wrong_secret_returns_403() {
    let credentials = Credentials {
        client_key: DEFAULT_CLIENT_KEY.to_string(),
        client_secret: "another-secret".to_string(),
    };
    let resp = app(credentials)
        .oneshot(signed_request("POST", "/check/lint/octo/repo/deadbeef", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn create_with_non_json_body_returns_400() {
    let resp = app(Credentials::default())
        .oneshot(signed_request("POST", "/check/lint/octo/repo/deadbeef", "not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_unknown_check_run_returns_404() {
    let resp = app(Credentials::default())
        .oneshot(signed_request("PATCH", "/check/octo/repo/99", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_non_numeric_id_returns_400() {
    let resp = app(Credentials::default())
        .oneshot(signed_request("PATCH", "/check/octo/repo/abc", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_merges_payload() {
    let app = app(Credentials::default());

    let resp = app
        .clone()
        .oneshot(signed_request(
            "POST",
            "/check/lint/octo/repo/deadbeef",
            r#"{"status":"in_progress"}"#,
        ))
        .await
        .unwrap();
    let created: CheckRun = body_json(resp).await;

    let resp = app
        .clone()
        .oneshot(signed_request(
            "PATCH",
            &format!("/check/octo/repo/{}", created.id),
            r#"{"status":"completed","conclusion":"success"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: CheckRun = body_json(resp).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.payload["status"], "completed");
    assert_eq!(updated.payload["conclusion"], "success");
}

#[tokio::test]
async fn update_with_mismatched_repo_returns_404() {
    let app = app(Credentials::default());

    let resp = app
        .clone()
        .oneshot(signed_request("POST", "/check/lint/octo/repo/deadbeef", "{}"))
        .await
        .unwrap();
    let created: CheckRun = body_json(resp).await;

    let resp = app
        .oneshot(signed_request("PATCH", &format!("/check/octo/other/{}", created.id), "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ids_are_sequential() {
    let app = app(Credentials::default());
    for expected in 1..=3u64 {
        let resp = app
            .clone()
            .oneshot(signed_request("POST", "/check/lint/octo/repo/deadbeef", "{}"))
            .await
            .unwrap();
        let run: CheckRun = body_json(resp).await;
        assert_eq!(run.id, expected);
    }
}
