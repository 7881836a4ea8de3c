use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`
use wiremock::matchers::{body_partial_json, method, path, path_regex};
use wiremock::{Mock, MockServer, Respond, ResponseTemplate};

use linkstream_backend::api;
use linkstream_backend::config::{Config, DailyConfig, LogFormat};
use linkstream_backend::state::AppState;

/// Answers `POST /rooms` with the room the request describes, the way the
/// vendor does.
struct EchoRoom;

impl Respond for EchoRoom {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        let name = body["name"].as_str().unwrap_or_default().to_string();

        ResponseTemplate::new(200).set_body_json(json!({
            "id": format!("id-{}", name),
            "name": name,
            "url": format!("https://linkstream.daily.co/{}", name),
            "privacy": body["privacy"],
            "api_created": true,
            "config": body["properties"]
        }))
    }
}

fn app_for(server: &MockServer) -> Router {
    let config = Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        log_format: LogFormat::Pretty,
        daily: DailyConfig::new("test-key").with_api_url(server.uri()),
    };

    api::create_router(AppState::new(config).unwrap())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn vendor_calls(server: &MockServer) -> usize {
    server.received_requests().await.unwrap_or_default().len()
}

#[tokio::test]
async fn create_room_then_mint_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rooms"))
        .respond_with(EchoRoom)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/meeting-tokens"))
        .and(body_partial_json(json!({
            "room": "demo",
            "user_name": "Alice",
            "is_owner": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "eyJ.tok" })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server);

    let (status, room) = send(
        app.clone(),
        post_json("/api/daily-co/rooms", json!({ "roomName": "demo" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(room["name"], "demo");
    assert_eq!(room["properties"]["max_participants"], 10);
    assert_eq!(room["properties"]["enable_recording"], "cloud");

    let (status, token) = send(
        app,
        post_json(
            "/api/daily-co/tokens",
            json!({ "roomName": "demo", "userName": "Alice" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!token["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn room_options_override_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rooms"))
        .respond_with(EchoRoom)
        .mount(&server)
        .await;

    let (status, room) = send(
        app_for(&server),
        post_json(
            "/api/daily-co/rooms",
            json!({
                "roomName": "workshop",
                "options": { "max_participants": 4, "enable_chat": false, "enable_screenshare": false }
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let properties = &room["properties"];
    assert_eq!(properties["max_participants"], 4);
    assert_eq!(properties["enable_chat"], false);
    assert_eq!(properties["enable_screenshare"], false);
    assert_eq!(properties["eject_at_room_exp"], true);
    assert_eq!(properties["start_audio_off"], false);
}

#[tokio::test]
async fn vendor_specific_options_pass_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rooms"))
        .and(body_partial_json(json!({
            "properties": { "enable_recording": "raw-tracks", "max_participants": 10 }
        })))
        .respond_with(EchoRoom)
        .expect(1)
        .mount(&server)
        .await;

    let (status, room) = send(
        app_for(&server),
        post_json(
            "/api/daily-co/rooms",
            json!({ "roomName": "tracks", "options": { "enable_recording": "raw-tracks" } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(room["properties"]["enable_recording"], "raw-tracks");
    assert_eq!(room["api_created"], true);
}

#[tokio::test]
async fn malformed_bodies_are_json_400s() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let unparseable = Request::builder()
        .method("POST")
        .uri("/api/daily-co/rooms")
        .header("content-type", "application/json")
        .body(Body::from("{\"roomName\": "))
        .unwrap();

    let cases = [
        post_json(
            "/api/daily-co/rooms",
            json!({ "roomName": "demo", "options": { "max_participants": "ten" } }),
        ),
        unparseable,
        post_json(
            "/api/daily-co/tokens",
            json!({ "roomName": "demo", "userName": "Alice", "isOwner": "yes" }),
        ),
        post_json(
            "/api/daily-co/sessions",
            json!({ "kind": "session", "hostName": "Coach", "durationMinutes": -5 }),
        ),
    ];

    for case in cases {
        let (status, body) = send(app.clone(), case).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid request body", "code": 400 }));
    }

    assert_eq!(vendor_calls(&server).await, 0);
}

#[tokio::test]
async fn missing_fields_are_rejected_before_any_vendor_call() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let cases = [
        post_json("/api/daily-co/rooms", json!({})),
        post_json("/api/daily-co/rooms", json!({ "roomName": "  " })),
        request("GET", "/api/daily-co/rooms"),
        request("DELETE", "/api/daily-co/rooms"),
        request("GET", "/api/daily-co/participants"),
        post_json("/api/daily-co/tokens", json!({ "roomName": "demo" })),
        post_json("/api/daily-co/tokens", json!({ "userName": "Alice" })),
        post_json("/api/daily-co/sessions", json!({ "kind": "session" })),
    ];

    for case in cases {
        let (status, body) = send(app.clone(), case).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    assert_eq!(vendor_calls(&server).await, 0);
}

#[tokio::test]
async fn past_expiry_is_a_bad_request() {
    let server = MockServer::start().await;

    let (status, _) = send(
        app_for(&server),
        post_json(
            "/api/daily-co/rooms",
            json!({ "roomName": "late", "options": { "exp": 1 } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(vendor_calls(&server).await, 0);
}

#[tokio::test]
async fn vendor_failures_become_generic_500s() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms/demo"))
        .respond_with(ResponseTemplate::new(403).set_body_string("account suspended: acct_42"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/meeting-tokens"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad room"))
        .mount(&server)
        .await;

    let app = app_for(&server);

    let (status, body) = send(app.clone(), request("GET", "/api/daily-co/rooms?roomName=demo")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch room", "code": 500 }));

    let (status, body) = send(
        app,
        post_json(
            "/api/daily-co/tokens",
            json!({ "roomName": "demo", "userName": "Alice", "isOwner": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate token");
}

#[tokio::test]
async fn org_room_reads_back_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms/orgroom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "id-orgroom",
            "name": "orgroom",
            "url": "https://linkstream.daily.co/orgroom",
            "privacy": "org",
            "api_created": true,
            "config": { "enable_recording": "raw-tracks" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, room) = send(
        app_for(&server),
        request("GET", "/api/daily-co/rooms?roomName=orgroom"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(room["privacy"], "org");
    assert_eq!(room["api_created"], true);
    assert_eq!(room["properties"]["enable_recording"], "raw-tracks");
}

#[tokio::test]
async fn fetch_and_delete_room() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms/demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "id-demo",
            "name": "demo",
            "url": "https://linkstream.daily.co/demo",
            "privacy": "public",
            "config": { "max_participants": 10 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rooms/demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "deleted": true, "name": "demo" })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server);

    let (status, room) = send(app.clone(), request("GET", "/api/daily-co/rooms?roomName=demo")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(room["url"], "https://linkstream.daily.co/demo");

    let (status, body) = send(app, request("DELETE", "/api/daily-co/rooms?roomName=demo")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "deleted": true }));
}

#[tokio::test]
async fn connection_test_creates_throwaway_room() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rooms"))
        .respond_with(EchoRoom)
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(app_for(&server), request("GET", "/api/daily-co/test")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["apiKeyStatus"], "Configured");
    assert!(body["testRoom"]["name"].as_str().unwrap().starts_with("test-"));
    assert_eq!(body["testRoom"]["properties"]["max_participants"], 2);
}

#[tokio::test]
async fn connection_test_with_rejected_key_creates_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms"))
        .respond_with(ResponseTemplate::new(401).set_body_string("authentication-error"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(EchoRoom)
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = send(app_for(&server), request("GET", "/api/daily-co/test")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body.get("testRoom").is_none());
}

#[tokio::test]
async fn provisioning_returns_owner_link() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rooms"))
        .and(body_partial_json(json!({ "properties": { "max_participants": 2 } })))
        .respond_with(EchoRoom)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/meeting-tokens"))
        .and(body_partial_json(json!({
            "user_name": "Coach Sarah",
            "is_owner": true,
            "permissions": { "can_admin": true, "can_recording": true }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "owner-tok" })))
        .mount(&server)
        .await;

    let (status, body) = send(
        app_for(&server),
        post_json(
            "/api/daily-co/sessions",
            json!({ "kind": "session", "title": "Coaching", "hostName": "Coach Sarah", "durationMinutes": 30 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let name = body["room"]["name"].as_str().unwrap();
    assert!(name.starts_with("session-"));
    assert_eq!(body["token"], "owner-tok");
    assert_eq!(
        body["joinUrl"],
        format!("https://linkstream.daily.co/{}?t=owner-tok", name)
    );
}

#[tokio::test]
async fn provisioning_removes_room_when_token_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rooms"))
        .respond_with(EchoRoom)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/meeting-tokens"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/rooms/webinar-\d+-[0-9a-z]{9}$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "deleted": true })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app_for(&server),
        post_json(
            "/api/daily-co/sessions",
            json!({ "kind": "webinar", "title": "Launch", "hostName": "Sam", "maxAttendees": 50 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate token");
}

#[tokio::test]
async fn participants_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms/demo/participants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "p1", "user_name": "Alice" }]
        })))
        .mount(&server)
        .await;

    let (status, body) = send(
        app_for(&server),
        request("GET", "/api/daily-co/participants?roomName=demo"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["participants"][0]["user_name"], "Alice");
}

#[tokio::test]
async fn health_reports_vendor_reachability() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let (status, body) = send(app_for(&server), request("GET", "/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["dailyConfigured"], true);
    assert_eq!(body["daily"], "connected");
}
